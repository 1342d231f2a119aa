//! Shared page shell
//!
//! Every page renders inside the same chrome: sticky header with desktop
//! nav and a mobile menu toggle, then the page content, then the footer.
//! Chrome content (shop name, footer text, primary location) comes from
//! the content store with hardcoded fallbacks so the shell is complete
//! even when the store is empty or unreachable.

use maud::{DOCTYPE, Markup, html};
use shared::{Location, SiteSettings};

use crate::content::{ContentClient, queries};
use crate::render::format;

/// Site navigation (header order)
const NAVIGATION: &[(&str, &str)] = &[
    ("Menu", "/menu"),
    ("About", "/about"),
    ("Locations", "/locations"),
    ("Events", "/events"),
];

const FALLBACK_SHOP_NAME: &str = "Ember & Oak Coffee";
const FALLBACK_TAGLINE: &str = "Good coffee takes time.";
const FALLBACK_FOOTER_TEXT: &str =
    "Neighborhood coffee, roasted in-house. Portland, Oregon since 2018.";
const FALLBACK_ADDRESS: &str = "3847 SE Division Street, Portland, OR";
const FALLBACK_HOURS: &str = "Mon-Fri: 6:30am - 6pm";

/// Chrome data shared by every page
#[derive(Debug, Default)]
pub struct Chrome {
    pub settings: SiteSettings,
    pub primary: Option<Location>,
}

impl Chrome {
    /// Fetch chrome content; both lookups degrade independently.
    pub async fn load(content: &ContentClient) -> Self {
        let (settings, primary) = tokio::join!(
            content.singleton_or_default::<SiteSettings>("siteSettings", queries::SITE_SETTINGS),
            content.optional::<Location>("primaryLocation", queries::PRIMARY_LOCATION),
        );
        Self { settings, primary }
    }

    fn shop_name(&self) -> &str {
        self.settings.shop_name.as_deref().unwrap_or(FALLBACK_SHOP_NAME)
    }

    fn tagline(&self) -> &str {
        self.settings.tagline.as_deref().unwrap_or(FALLBACK_TAGLINE)
    }

    fn footer_text(&self) -> &str {
        self.settings
            .footer_text
            .as_deref()
            .unwrap_or(FALLBACK_FOOTER_TEXT)
    }

    /// Footer address line for the primary location
    fn address_line(&self) -> String {
        self.primary
            .as_ref()
            .and_then(|loc| loc.address.as_ref())
            .map(|a| a.single_line())
            .filter(|line| !line.is_empty())
            .unwrap_or_else(|| FALLBACK_ADDRESS.to_string())
    }

    /// First hours block of the primary location
    fn hours_line(&self) -> String {
        self.primary
            .as_ref()
            .and_then(|loc| loc.hours.first())
            .map(|h| {
                if h.days.is_empty() {
                    h.hours.clone()
                } else {
                    format!("{}: {}", h.days, h.hours)
                }
            })
            .unwrap_or_else(|| FALLBACK_HOURS.to_string())
    }
}

/// Page title in the `%s | Ember & Oak Coffee` template
pub fn page_title(section: &str) -> String {
    format!("{section} | Ember & Oak Coffee")
}

/// Render a full page inside the shared shell
pub fn page(title: &str, description: &str, path: &str, chrome: &Chrome, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                meta name="description" content=(description);
                link rel="stylesheet" href="/assets/site.css";
                script src="/assets/site.js" defer {}
            }
            body {
                (header(path))
                main id="main" class="site-main" { (content) }
                (footer(chrome))
            }
        }
    }
}

fn header(path: &str) -> Markup {
    html! {
        header class="site-header" {
            nav class="site-header__inner" {
                a class="site-brand" href="/" { "Ember & Oak" }

                div class="site-nav" {
                    @for (name, href) in NAVIGATION {
                        a class=(nav_class(path, href)) href=(href) { (name) }
                    }
                    a class="button button--sm" href="/contact" { "Contact" }
                }

                button type="button" class="nav-toggle" aria-expanded="false"
                    aria-controls="mobile-menu" data-nav-toggle {
                    span class="sr-only" { "Open main menu" }
                    span class="nav-toggle__bars" aria-hidden="true" {}
                }
            }
            div id="mobile-menu" class="mobile-menu" hidden {
                @for (name, href) in NAVIGATION {
                    a class="mobile-menu__link" href=(href) { (name) }
                }
                a class="button mobile-menu__cta" href="/contact" { "Contact" }
            }
        }
    }
}

fn nav_class(path: &str, href: &str) -> &'static str {
    if path == href {
        "site-nav__link is-active"
    } else {
        "site-nav__link"
    }
}

fn footer(chrome: &Chrome) -> Markup {
    let socials = chrome.settings.social_links.as_ref();
    html! {
        footer class="site-footer" {
            div class="site-footer__inner" {
                div {
                    p class="site-footer__name" { (chrome.shop_name()) }
                    p class="site-footer__tagline" { (chrome.tagline()) }
                    p class="site-footer__text" { (chrome.footer_text()) }
                }
                div {
                    p { (chrome.address_line()) }
                    p class="mono" { (chrome.hours_line()) }
                    @if let Some(phone) = chrome.primary.as_ref().and_then(|l| l.phone.as_deref()) {
                        p { a href=(format::phone_href(phone)) { (phone) } }
                    }
                }
                div class="site-footer__social" {
                    @if let Some(url) = socials.and_then(|s| s.instagram.as_deref()) {
                        a href=(url) rel="noopener noreferrer" { "Instagram" }
                    }
                    @if let Some(url) = socials.and_then(|s| s.facebook.as_deref()) {
                        a href=(url) rel="noopener noreferrer" { "Facebook" }
                    }
                    @if let Some(url) = socials.and_then(|s| s.twitter.as_deref()) {
                        a href=(url) rel="noopener noreferrer" { "Twitter" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::content::location::{Address, HoursBlock};

    #[test]
    fn empty_chrome_uses_fallback_copy() {
        let chrome = Chrome::default();
        assert_eq!(chrome.shop_name(), "Ember & Oak Coffee");
        assert_eq!(chrome.address_line(), FALLBACK_ADDRESS);
        assert_eq!(chrome.hours_line(), FALLBACK_HOURS);
    }

    #[test]
    fn chrome_prefers_store_content() {
        let chrome = Chrome {
            settings: SiteSettings {
                shop_name: Some("Test Roasters".to_string()),
                ..SiteSettings::default()
            },
            primary: Some(Location {
                address: Some(Address {
                    street: Some("1 Main St".to_string()),
                    city: Some("Portland".to_string()),
                    state: Some("OR".to_string()),
                    zip: None,
                }),
                hours: vec![HoursBlock {
                    days: "Daily".to_string(),
                    hours: "7 AM - 3 PM".to_string(),
                }],
                ..Location::default()
            }),
        };
        assert_eq!(chrome.shop_name(), "Test Roasters");
        assert_eq!(chrome.address_line(), "1 Main St, Portland, OR");
        assert_eq!(chrome.hours_line(), "Daily: 7 AM - 3 PM");
    }

    #[test]
    fn active_nav_link_is_marked() {
        let markup = header("/menu").into_string();
        assert!(markup.contains("is-active"));
    }
}
