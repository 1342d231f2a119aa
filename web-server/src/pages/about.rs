//! About page

use axum::{Router, extract::State, response::Html, routing::get};
use maud::{Markup, html};
use shared::content::text::plain_paragraphs;
use shared::{AboutPage, StaffMember};

use crate::content::queries;
use crate::core::ServerState;
use crate::render::components::{FALLBACK_STORY_IMAGE, image_url_or};
use crate::render::{Chrome, layout};

pub fn router() -> Router<ServerState> {
    Router::new().route("/about", get(handler))
}

const FALLBACK_STORY: &[&str] = &[
    "In 2018, Maya Chen left her job as a food scientist at a major coffee company. Not \
     because she didn't love coffee—she loved it too much.",
    "She found a former auto repair shop on Division Street with good bones and terrible \
     plumbing. Eight months later, Ember & Oak opened its doors.",
];

async fn handler(State(state): State<ServerState>) -> Html<String> {
    let content = &state.content;
    let (chrome, about, staff) = tokio::join!(
        Chrome::load(content),
        content.singleton_or_default::<AboutPage>("aboutPage", queries::ABOUT_PAGE),
        content.list_or_empty::<StaffMember>("staff", queries::STAFF),
    );

    let body = html! {
        (hero(&about))
        (values(&about))
        (timeline(&about))
        (team(&state, &staff))
        (cta())
    };

    let markup = layout::page(
        &layout::page_title("About"),
        "The story of Ember & Oak Coffee—from a former auto shop on Division Street to two Portland locations.",
        "/about",
        &chrome,
        body,
    );
    Html(markup.into_string())
}

fn hero(about: &AboutPage) -> Markup {
    let headline = about
        .headline
        .as_deref()
        .unwrap_or("Good Coffee Takes Time. So Do Good Things.");
    let paragraphs = about
        .story
        .as_deref()
        .map(plain_paragraphs)
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| FALLBACK_STORY.iter().map(|s| s.to_string()).collect());

    html! {
        section class="section" {
            div class="section__inner split" {
                div {
                    h1 { (headline) }
                    div class="prose" {
                        @for paragraph in &paragraphs {
                            p { (paragraph) }
                        }
                    }
                    p class="signature" { "— Maya Chen, Founder" }
                }
                div {
                    img src=(FALLBACK_STORY_IMAGE) alt="Maya roasting coffee" loading="lazy";
                }
            }
        }
    }
}

fn values(about: &AboutPage) -> Markup {
    if about.values.is_empty() {
        return html! {};
    }
    html! {
        section class="section section--alt" {
            div class="section__inner" {
                h2 class="section__title" { "What We Believe" }
                div class="card-grid card-grid--2" {
                    @for value in &about.values {
                        div class="value-card" {
                            h3 { (value.title) }
                            p { (value.description) }
                        }
                    }
                }
            }
        }
    }
}

fn timeline(about: &AboutPage) -> Markup {
    if about.timeline.is_empty() {
        return html! {};
    }
    html! {
        section class="section" {
            div class="section__inner section__inner--narrow" {
                h2 class="section__title" { "Our Story So Far" }
                div class="timeline" {
                    @for milestone in &about.timeline {
                        div class="timeline__entry" {
                            span class="timeline__year mono" { (milestone.year) }
                            div class="timeline__body" {
                                h3 { (milestone.title) }
                                p { (milestone.description) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn team(state: &ServerState, staff: &[StaffMember]) -> Markup {
    if staff.is_empty() {
        return html! {};
    }
    html! {
        section class="section section--dark" {
            div class="section__inner" {
                h2 class="section__title" { "The People" }
                p class="section__lede" {
                    "We're a small team. Everyone makes drinks, everyone cleans. No one's \
                     above taking out the trash."
                }
                div class="card-grid card-grid--4" {
                    @for person in staff {
                        div class="person" {
                            @if let Some(photo) = &person.photo {
                                img class="person__photo"
                                    src=(image_url_or(&state.content, Some(photo), 400, ""))
                                    alt=(person.name) loading="lazy";
                            } @else {
                                div class="person__initial" { (person.initial()) }
                            }
                            h3 { (person.name) }
                            p class="person__role" { (person.role) }
                            @if let Some(bio) = &person.bio {
                                p class="person__bio" { (bio) }
                            }
                            @if let Some(order) = &person.favorite_order {
                                p class="person__detail" { span { "Order: " } (order) }
                            }
                            @if let Some(fact) = &person.fun_fact {
                                p class="person__detail" { span { "Fun fact: " } (fact) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn cta() -> Markup {
    html! {
        section class="section" {
            div class="section__inner section__inner--narrow center" {
                h2 { "Stop By Sometime" }
                p {
                    "We're at Division Street and Alberta. Drop by, grab a coffee, and let us \
                     know how we're doing."
                }
                div class="hero__actions" {
                    a class="button" href="/locations" { "Find a Location" }
                    a class="button button--outline" href="/contact" { "Get in Touch" }
                }
            }
        }
    }
}
