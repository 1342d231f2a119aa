//! Home page

use axum::{Router, extract::State, response::Html, routing::get};
use maud::{Markup, html};
use shared::{Event, HomePage, MenuItem};

use crate::content::queries;
use crate::core::ServerState;
use crate::render::components::{
    FALLBACK_MENU_IMAGE, FALLBACK_STORY_IMAGE, date_block, image_url_or, tag_badge,
};
use crate::render::format::{day_of_month, format_price, short_month, time_of_day};
use crate::render::{Chrome, layout};

pub fn router() -> Router<ServerState> {
    Router::new().route("/", get(handler))
}

async fn handler(State(state): State<ServerState>) -> Html<String> {
    let content = &state.content;
    let (chrome, home, featured, upcoming) = tokio::join!(
        Chrome::load(content),
        content.singleton_or_default::<HomePage>("homePage", queries::HOME_PAGE),
        content.list_or_empty::<MenuItem>("featuredItems", queries::FEATURED_ITEMS),
        content.list_or_empty::<Event>("upcomingEvents", queries::UPCOMING_EVENTS),
    );

    let body = html! {
        (announcement_banner(&home))
        (hero(&home))
        (featured_section(&state, &home, &featured))
        (story_preview(&home))
        (location_preview(&chrome))
        (events_widget(&upcoming))
    };

    let markup = layout::page(
        "Ember & Oak Coffee | Portland, Oregon",
        "Neighborhood coffee shop in Portland, Oregon. House-roasted beans, local ingredients, and a space to slow down. Division Street & Alberta Arts District.",
        "/",
        &chrome,
        body,
    );
    Html(markup.into_string())
}

fn announcement_banner(home: &HomePage) -> Markup {
    let Some(announcement) = home.announcement.as_ref().filter(|a| a.enabled) else {
        return html! {};
    };
    let Some(text) = announcement.text.as_deref().filter(|t| !t.is_empty()) else {
        return html! {};
    };
    html! {
        div class="announcement" {
            @if let Some(link) = announcement.link.as_deref().filter(|l| !l.is_empty()) {
                a href=(link) { (text) }
            } @else {
                span { (text) }
            }
        }
    }
}

fn hero(home: &HomePage) -> Markup {
    let hero = home.hero.as_ref();
    let headline = hero
        .and_then(|h| h.headline.as_deref())
        .unwrap_or("Good Coffee Takes Time");
    let subheadline = hero
        .and_then(|h| h.subheadline.as_deref())
        .unwrap_or("House-roasted beans, local ingredients, and a space to slow down.");
    let cta_text = hero.and_then(|h| h.cta_text.as_deref()).unwrap_or("View Menu");
    let cta_link = hero.and_then(|h| h.cta_link.as_deref()).unwrap_or("/menu");

    html! {
        section class="hero" {
            div class="hero__inner" {
                h1 class="hero__headline" { (headline) }
                p class="hero__subheadline" { (subheadline) }
                div class="hero__actions" {
                    a class="button button--lg" href=(cta_link) { (cta_text) }
                    a class="button button--lg button--outline-light" href="/locations" { "Find Us" }
                }
            }
        }
    }
}

fn featured_section(state: &ServerState, home: &HomePage, featured: &[MenuItem]) -> Markup {
    let section = home.featured_section.as_ref();
    let title = section
        .and_then(|s| s.title.as_deref())
        .unwrap_or("What We're Pouring");
    let subtitle = section.and_then(|s| s.subtitle.as_deref()).unwrap_or(
        "A few favorites from our menu. Everything's made to order, nothing sits on a warmer.",
    );

    html! {
        section class="section" {
            div class="section__inner" {
                div class="section__head" {
                    h2 { (title) }
                    p { (subtitle) }
                }
                div class="card-grid card-grid--3" {
                    @for item in featured {
                        div class="card" {
                            div class="card__image" {
                                img src=(image_url_or(&state.content, item.image.as_ref(), 600, FALLBACK_MENU_IMAGE))
                                    alt=(item.name) loading="lazy";
                            }
                            div class="card__body" {
                                div class="card__title-row" {
                                    h3 class="card__title" { (item.name) }
                                    span class="card__price mono" { (format_price(item.price)) }
                                }
                                @if let Some(description) = &item.description {
                                    p class="card__description" { (description) }
                                }
                                div class="card__badges" {
                                    @for tag in &item.tags {
                                        (tag_badge(tag))
                                    }
                                }
                            }
                        }
                    }
                }
                div class="section__cta" {
                    a class="button button--outline" href="/menu" { "Full Menu" }
                }
            }
        }
    }
}

fn story_preview(home: &HomePage) -> Markup {
    let story = home.story_preview.as_ref();
    let heading = story
        .and_then(|s| s.heading.as_deref())
        .unwrap_or("Started in a Garage");
    let excerpt = story.and_then(|s| s.excerpt.as_deref()).unwrap_or(
        "In 2018, Maya Chen left her job as a food scientist at a major coffee company. \
         She found a former auto repair shop on Division Street with good bones and terrible \
         plumbing. Eight months later, Ember & Oak opened its doors.",
    );

    html! {
        section class="section section--alt" {
            div class="section__inner split" {
                div {
                    h2 { (heading) }
                    p class="prose" { (excerpt) }
                    a class="button button--secondary" href="/about" { "Our Story" }
                }
                div {
                    img src=(FALLBACK_STORY_IMAGE) alt="Inside Ember & Oak Coffee" loading="lazy";
                }
            }
        }
    }
}

fn location_preview(chrome: &Chrome) -> Markup {
    let address = chrome
        .primary
        .as_ref()
        .and_then(|loc| loc.address.as_ref())
        .map(|a| a.single_line())
        .filter(|line| !line.is_empty())
        .unwrap_or_else(|| "3847 SE Division Street, Portland, OR".to_string());
    let hours = chrome
        .primary
        .as_ref()
        .and_then(|loc| loc.hours.first())
        .map(|h| h.hours.clone())
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| "Mon-Fri: 6:30am - 6pm".to_string());

    html! {
        section class="section" {
            div class="section__inner split" {
                div {
                    img src=(crate::render::components::FALLBACK_LOCATION_IMAGE)
                        alt="Ember & Oak storefront" loading="lazy";
                }
                div {
                    h2 { "Come Say Hello" }
                    p class="icon-line icon-line--pin" { (address) }
                    p class="icon-line icon-line--clock" { (hours) }
                    a class="button" href="/locations" { "All Locations" }
                }
            }
        }
    }
}

fn events_widget(upcoming: &[Event]) -> Markup {
    html! {
        section class="section section--dark" {
            div class="section__inner" {
                div class="section__head" {
                    h2 { "What's Happening" }
                    p { "Live music, tastings, and the occasional throwdown." }
                }
                div class="event-widget-grid" {
                    @for event in upcoming {
                        div class="event-widget" {
                            div class="event-widget__head" {
                                (date_block(&short_month(&event.date), day_of_month(&event.date), "ember"))
                                div {
                                    h3 { (event.title) }
                                    p class="event-widget__time" { (time_of_day(&event.date)) }
                                }
                            }
                            @if let Some(description) = &event.short_description {
                                p class="event-widget__description" { (description) }
                            }
                        }
                    }
                }
                div class="section__cta" {
                    a class="button button--outline-light" href="/events" { "All Events" }
                }
            }
        }
    }
}
