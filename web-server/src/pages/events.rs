//! Events page
//!
//! Results partition by the featured flag: featured events get sparse,
//! large split cards; the rest render as a denser row list.

use axum::{Router, extract::State, response::Html, routing::get};
use chrono::{DateTime, FixedOffset, Utc};
use maud::{Markup, html};
use shared::Event;

use crate::content::queries;
use crate::core::ServerState;
use crate::render::components::{
    FALLBACK_EVENT_IMAGE, date_block, image_url_or, recurring_badge,
};
use crate::render::format::{day_of_month, short_month, time_of_day, weekday};
use crate::render::{Chrome, layout};

pub fn router() -> Router<ServerState> {
    Router::new().route("/events", get(handler))
}

async fn handler(State(state): State<ServerState>) -> Html<String> {
    let content = &state.content;
    let (chrome, events) = tokio::join!(
        Chrome::load(content),
        content.list_or_empty::<Event>("events", queries::EVENTS),
    );

    // The query filters `date >= now()` already; filtering again here
    // keeps a stale store response from resurrecting past events.
    let now = Utc::now().fixed_offset();
    let (featured, upcoming) = partition_events(&events, now);

    let body = html! {
        div class="page-head" {
            h1 { "What's Happening" }
            p {
                "We host tastings, live music, workshops, and the occasional competition. \
                 Most events are free—we just ask that you buy a coffee if you're sticking \
                 around."
            }
        }

        @if !featured.is_empty() {
            section class="section--flush" {
                h2 class="section__title" { "Featured" }
                div class="card-grid card-grid--2" {
                    @for event in &featured {
                        (featured_card(&state, event))
                    }
                }
            }
        }

        @if !upcoming.is_empty() {
            section class="section--flush" {
                h2 class="section__title" { "Upcoming" }
                div class="event-rows" {
                    @for event in &upcoming {
                        (event_row(&state, event))
                    }
                }
            }
        }

        @if featured.is_empty() && upcoming.is_empty() {
            div class="note-box center" {
                p { "No upcoming events at the moment. Check back soon!" }
            }
        }

        (host_cta())
    };

    let markup = layout::page(
        &layout::page_title("Events"),
        "Live music, coffee tastings, latte art throwdowns, and more at Ember & Oak Coffee in Portland.",
        "/events",
        &chrome,
        body,
    );
    Html(markup.into_string())
}

/// Drop already-started events (inclusive boundary: an event starting
/// exactly now stays), then split featured from the rest.
fn partition_events(
    events: &[Event],
    now: DateTime<FixedOffset>,
) -> (Vec<&Event>, Vec<&Event>) {
    events
        .iter()
        .filter(|e| e.starts_at_or_after(now))
        .partition(|e| e.featured)
}

fn featured_card(state: &ServerState, event: &Event) -> Markup {
    html! {
        div class="event-card" {
            div class="event-card__image" {
                img src=(image_url_or(&state.content, event.image.as_ref(), 600, FALLBACK_EVENT_IMAGE))
                    alt=(event.title) loading="lazy";
            }
            div class="event-card__body" {
                div class="event-card__when" {
                    (date_block(&short_month(&event.date), day_of_month(&event.date), "ember"))
                    div {
                        p { (weekday(&event.date)) }
                        p class="mono" { (time_of_day(&event.date)) }
                    }
                }
                h3 { (event.title) }
                @if let Some(description) = &event.short_description {
                    p class="event-card__description" { (description) }
                }
                div class="event-card__meta" {
                    @if let Some(location) = &event.location {
                        span { (location.name) }
                    }
                    (recurring_badge(event.recurring))
                }
            }
        }
    }
}

fn event_row(state: &ServerState, event: &Event) -> Markup {
    html! {
        div class="event-row" {
            (date_block(&short_month(&event.date), day_of_month(&event.date), "neutral"))
            div class="event-row__image" {
                img src=(image_url_or(&state.content, event.image.as_ref(), 600, FALLBACK_EVENT_IMAGE))
                    alt=(event.title) loading="lazy";
            }
            div class="event-row__body" {
                div class="event-row__title-row" {
                    h3 { (event.title) }
                    (recurring_badge(event.recurring))
                }
                @if let Some(description) = &event.short_description {
                    p class="event-row__description" { (description) }
                }
                p class="event-row__meta" {
                    span { (weekday(&event.date)) " at " (time_of_day(&event.date)) }
                    @if let Some(location) = &event.location {
                        span class="icon-line icon-line--pin" { (location.name) }
                    }
                }
            }
        }
    }
}

fn host_cta() -> Markup {
    html! {
        div class="cta-box" {
            h2 { "Want to Host Something?" }
            p {
                "We love partnering with local artists, musicians, and organizations. If \
                 you've got an idea for an event, reach out. We've got the space, the coffee, \
                 and usually a decent sound system."
            }
            a class="button button--outline-light" href="/contact" { "Get in Touch" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(title: &str, date: &str, featured: bool) -> Event {
        serde_json::from_str(&format!(
            r#"{{"_id": "e-{title}", "title": "{title}", "date": "{date}", "featured": {featured}}}"#
        ))
        .unwrap()
    }

    #[test]
    fn partitions_by_featured_flag() {
        let now: DateTime<FixedOffset> = "2026-01-01T00:00:00Z".parse().unwrap();
        let events = vec![
            event("Cupping", "2026-01-15T10:00:00Z", true),
            event("Open Mic", "2026-01-21T19:00:00Z", false),
            event("Throwdown", "2026-01-25T16:00:00Z", false),
        ];
        let (featured, upcoming) = partition_events(&events, now);
        assert_eq!(featured.len(), 1);
        assert_eq!(upcoming.len(), 2);
        assert_eq!(featured[0].title, "Cupping");
    }

    #[test]
    fn past_events_never_render() {
        let now: DateTime<FixedOffset> = "2026-01-20T00:00:00Z".parse().unwrap();
        let events = vec![
            event("Past", "2026-01-15T10:00:00Z", true),
            event("Exactly Now", "2026-01-20T00:00:00Z", false),
            event("Future", "2026-01-25T16:00:00Z", false),
        ];
        let (featured, upcoming) = partition_events(&events, now);
        assert!(featured.is_empty());
        let titles: Vec<&str> = upcoming.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Exactly Now", "Future"]);
    }
}
