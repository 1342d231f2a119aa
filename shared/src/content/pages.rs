//! Page singletons
//!
//! One document each; loosely structured editorial blobs. Every field is
//! optional and the renderers carry a hardcoded fallback for each, so an
//! absent singleton still produces a complete page.

use serde::{Deserialize, Serialize};

use super::{Block, ImageRef};

/// `siteSettings` singleton
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    #[serde(default)]
    pub shop_name: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub logo: Option<ImageRef>,
    #[serde(default)]
    pub social_links: Option<SocialLinks>,
    #[serde(default)]
    pub footer_text: Option<String>,
    #[serde(default)]
    pub seo: Option<Seo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub og_image: Option<ImageRef>,
}

/// `homePage` singleton
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    #[serde(default)]
    pub hero: Option<Hero>,
    #[serde(default)]
    pub featured_section: Option<FeaturedSection>,
    #[serde(default)]
    pub story_preview: Option<StoryPreview>,
    #[serde(default)]
    pub announcement: Option<Announcement>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub subheadline: Option<String>,
    #[serde(default)]
    pub background_image: Option<ImageRef>,
    #[serde(default)]
    pub cta_text: Option<String>,
    #[serde(default)]
    pub cta_link: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeaturedSection {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoryPreview {
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub image: Option<ImageRef>,
}

/// Site-wide banner; hidden unless explicitly enabled
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Announcement {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// `aboutPage` singleton
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutPage {
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub story: Option<Vec<Block>>,
    #[serde(default)]
    pub hero_image: Option<ImageRef>,
    #[serde(default)]
    pub values: Vec<ValueItem>,
    #[serde(default)]
    pub timeline: Vec<Milestone>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValueItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Milestone {
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_deserializes_to_defaults() {
        let home: HomePage = serde_json::from_str("{}").unwrap();
        assert!(home.hero.is_none());
        let about: AboutPage = serde_json::from_str("{}").unwrap();
        assert!(about.values.is_empty());
        let settings: SiteSettings = serde_json::from_str("{}").unwrap();
        assert!(settings.shop_name.is_none());
    }

    #[test]
    fn announcement_disabled_by_default() {
        let home: HomePage =
            serde_json::from_str(r#"{"announcement": {"text": "We are closed Monday"}}"#).unwrap();
        assert!(!home.announcement.unwrap().enabled);
    }
}
