//! Locations page

use axum::{Router, extract::State, response::Html, routing::get};
use maud::{Markup, html};
use shared::Location;

use crate::content::queries;
use crate::core::ServerState;
use crate::render::components::{FALLBACK_LOCATION_IMAGE, feature_chip, image_url_or};
use crate::render::format::phone_href;
use crate::render::{Chrome, layout};

pub fn router() -> Router<ServerState> {
    Router::new().route("/locations", get(handler))
}

async fn handler(State(state): State<ServerState>) -> Html<String> {
    let content = &state.content;
    let (chrome, mut locations) = tokio::join!(
        Chrome::load(content),
        content.list_or_empty::<Location>("locations", queries::LOCATIONS),
    );

    // The query already orders primary-first; re-sorting keeps the page
    // correct even if the store response comes back unordered.
    sort_locations(&mut locations);

    let body = html! {
        div class="page-head" {
            h1 { "Find Us" }
            p {
                "Two spots in Portland. Same coffee, same people, slightly different vibes. \
                 Pick whichever's closest, or try both."
            }
        }

        div class="location-list" {
            @for location in &locations {
                (location_card(&state, location))
            }
        }

        div class="note-box" {
            h3 { "A Note on Parking" }
            p {
                "Division has street parking (2-hour limit) and a small lot behind the \
                 building. Alberta is street parking only, but the neighborhood's pretty \
                 bikeable if you're up for it. Both locations are accessible by TriMet."
            }
        }
    };

    let markup = layout::page(
        &layout::page_title("Locations"),
        "Find Ember & Oak Coffee in Portland—Division Street and Alberta Arts District. Hours, directions, and what makes each spot special.",
        "/locations",
        &chrome,
        body,
    );
    Html(markup.into_string())
}

/// Primary-flagged locations strictly before non-primary, ties broken by
/// name ascending. Stable, so equal keys keep store order.
pub(crate) fn sort_locations(locations: &mut [Location]) {
    locations.sort_by(|a, b| {
        b.is_primary
            .cmp(&a.is_primary)
            .then_with(|| a.name.cmp(&b.name))
    });
}

fn location_card(state: &ServerState, location: &Location) -> Markup {
    html! {
        div class="location-card" {
            div class="location-card__image" {
                img src=(image_url_or(&state.content, location.image.as_ref(), 800, FALLBACK_LOCATION_IMAGE))
                    alt=(location.name) loading="lazy";
            }
            div class="location-card__body" {
                h2 { (location.name) }
                @if let Some(description) = &location.description {
                    p class="location-card__description" { (description) }
                }

                div class="location-card__contact" {
                    @if let Some(address) = &location.address {
                        div class="icon-line icon-line--pin" {
                            @if let Some(street) = &address.street { p { (street) } }
                            p {
                                (address.city.as_deref().unwrap_or(""))
                                @if address.city.is_some() && address.state.is_some() { ", " }
                                (address.state.as_deref().unwrap_or(""))
                                " "
                                (address.zip.as_deref().unwrap_or(""))
                            }
                        }
                    }
                    @if let Some(phone) = &location.phone {
                        p class="icon-line icon-line--phone" {
                            a href=(phone_href(phone)) { (phone) }
                        }
                    }
                    @if let Some(email) = &location.email {
                        p class="icon-line icon-line--mail" {
                            a href={ "mailto:" (email) } { (email) }
                        }
                    }
                }

                @if !location.hours.is_empty() {
                    div class="location-card__hours" {
                        h3 class="icon-line icon-line--clock" { "Hours" }
                        @for block in &location.hours {
                            div class="hours-row" {
                                span { (block.days) }
                                span class="mono" { (block.hours) }
                            }
                        }
                    }
                }

                @if !location.features.is_empty() {
                    div class="location-card__features" {
                        @for feature in &location.features {
                            (feature_chip(feature))
                        }
                    }
                }

                @if let Some(address) = &location.address {
                    a class="button button--outline" href=(directions_url(address))
                        rel="noopener noreferrer" {
                        "Get Directions"
                    }
                }
            }
        }
    }
}

/// Google Maps search link for the full address
fn directions_url(address: &shared::Address) -> String {
    format!(
        "https://maps.google.com/?q={}",
        percent_encode(&address.single_line())
    )
}

/// Minimal query-component percent encoding (unreserved chars pass)
fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Address;

    fn location(name: &str, is_primary: bool) -> Location {
        Location {
            id: format!("location-{name}"),
            name: name.to_string(),
            is_primary,
            ..Location::default()
        }
    }

    #[test]
    fn primary_sorts_strictly_first_then_name() {
        let mut locations = vec![
            location("Alberta Arts", false),
            location("Division Street", true),
            location("Burnside", false),
        ];
        sort_locations(&mut locations);
        let names: Vec<&str> = locations.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Division Street", "Alberta Arts", "Burnside"]);
    }

    #[test]
    fn duplicate_primaries_fall_back_to_name_order() {
        let mut locations = vec![location("Beta", true), location("Alpha", true)];
        sort_locations(&mut locations);
        assert_eq!(locations[0].name, "Alpha");
    }

    #[test]
    fn directions_url_encodes_the_address() {
        let address = Address {
            street: Some("3847 SE Division Street".to_string()),
            city: Some("Portland".to_string()),
            state: Some("OR".to_string()),
            zip: Some("97202".to_string()),
        };
        assert_eq!(
            directions_url(&address),
            "https://maps.google.com/?q=3847%20SE%20Division%20Street%2C%20Portland%2C%20OR%2097202"
        );
    }
}
