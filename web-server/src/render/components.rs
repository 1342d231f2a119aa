//! Shared UI components

use maud::{Markup, html};
use shared::content::image::ImageRef;
use shared::{Feature, Recurrence, Tag};

use crate::content::{ContentClient, ImageUrlBuilder};

// Stock photography fallbacks, one per subject, so cards never render an
// empty image box when the editor skipped the upload.
pub const FALLBACK_MENU_IMAGE: &str =
    "https://images.unsplash.com/photo-1514432324607-a09d9b4aefdd?w=600&q=80";
pub const FALLBACK_EVENT_IMAGE: &str =
    "https://images.unsplash.com/photo-1495474472287-4d71bcdd2085?w=600&q=80";
pub const FALLBACK_LOCATION_IMAGE: &str =
    "https://images.unsplash.com/photo-1554118811-1e0d58224f24?w=800&q=80";
pub const FALLBACK_STORY_IMAGE: &str =
    "https://images.unsplash.com/photo-1442512595331-e89e73853f31?w=800&q=80";

/// CDN URL for an image at the given width, or the fallback
pub fn image_url_or(
    content: &ContentClient,
    image: Option<&ImageRef>,
    width: u32,
    fallback: &str,
) -> String {
    image
        .and_then(|img| {
            ImageUrlBuilder::new(content.project_id(), content.dataset())
                .image(img)
                .width(width)
                .quality(80)
                .auto_format()
                .url()
        })
        .unwrap_or_else(|| fallback.to_string())
}

/// Dietary/merchandising badge; unknown tags get the neutral style
pub fn tag_badge(tag: &Tag) -> Markup {
    let variant = match tag {
        Tag::Vegan => "badge--sage",
        Tag::GlutenFree | Tag::DairyFree => "badge--oak",
        Tag::Seasonal | Tag::StaffPick | Tag::New => "badge--ember",
        Tag::Other(_) => "badge--ghost",
    };
    html! {
        span class={ "badge " (variant) } { (tag.label()) }
    }
}

/// Recurrence badge; one-time events render nothing
pub fn recurring_badge(recurring: Recurrence) -> Markup {
    match recurring.label() {
        Some(label) => html! { span class="badge badge--oak" { (label) } },
        None => html! {},
    }
}

/// Amenity chip; unknown features render their raw value
pub fn feature_chip(feature: &Feature) -> Markup {
    html! {
        span class={ "chip chip--" (feature.value()) } { (feature.label()) }
    }
}

/// Stacked month/day date block used on event cards
pub fn date_block(month: &str, day: u32, tone: &str) -> Markup {
    html! {
        div class={ "date-block date-block--" (tone) } {
            div class="date-block__month" { (month) }
            div class="date-block__day" { (day) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_get_their_variant() {
        assert!(tag_badge(&Tag::Vegan).into_string().contains("badge--sage"));
        assert!(tag_badge(&Tag::StaffPick).into_string().contains("Staff Pick"));
    }

    #[test]
    fn unknown_tag_renders_raw_value_in_ghost_style() {
        let markup = tag_badge(&Tag::Other("limited-run".to_string())).into_string();
        assert!(markup.contains("badge--ghost"));
        assert!(markup.contains("limited-run"));
    }

    #[test]
    fn one_time_events_have_no_badge() {
        assert!(recurring_badge(Recurrence::None).into_string().is_empty());
        assert!(
            recurring_badge(Recurrence::Monthly)
                .into_string()
                .contains("Monthly")
        );
    }
}
