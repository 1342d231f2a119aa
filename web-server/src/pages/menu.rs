//! Menu page
//!
//! Items are grouped under their category in category display order. The
//! sticky category nav highlights whichever section is nearest the
//! viewport; the served script drives that with an IntersectionObserver
//! rather than scroll polling.

use axum::{Router, extract::State, response::Html, routing::get};
use maud::{Markup, html};
use shared::{Category, MenuItem};

use crate::content::queries;
use crate::core::ServerState;
use crate::render::components::{FALLBACK_MENU_IMAGE, image_url_or, tag_badge};
use crate::render::format::price_line;
use crate::render::{Chrome, layout};

pub fn router() -> Router<ServerState> {
    Router::new().route("/menu", get(handler))
}

async fn handler(State(state): State<ServerState>) -> Html<String> {
    let content = &state.content;
    let (chrome, categories, items) = tokio::join!(
        Chrome::load(content),
        content.list_or_empty::<Category>("categories", queries::CATEGORIES),
        content.list_or_empty::<MenuItem>("menuItems", queries::MENU_ITEMS),
    );

    let sections = group_by_category(&categories, &items);

    let body = html! {
        div class="page-head" {
            h1 { "Menu" }
            p {
                "Everything's made to order. We roast our beans in-house, source our oat milk \
                 from the Willamette Valley, and bake what we can ourselves. The rest comes \
                 from friends."
            }
        }

        (category_nav(&categories))

        div class="menu-sections" {
            @for (category, category_items) in &sections {
                section id=(category.slug.current) class="menu-section" data-menu-section {
                    h2 class="menu-section__title" { (category.name) }
                    div class="card-grid card-grid--3" {
                        @for item in category_items {
                            (menu_card(&state, item))
                        }
                    }
                }
            }
        }

        div class="note-box" {
            p {
                strong { "A note on allergies: " }
                "Our kitchen handles nuts, dairy, gluten, and soy. If you have allergies, \
                 please let your barista know and we'll do our best to accommodate you. \
                 We can make most drinks with oat, almond, or coconut milk."
            }
        }
    };

    let markup = layout::page(
        &layout::page_title("Menu"),
        "House-roasted espresso, local pastries, and drinks made to order. View the full Ember & Oak Coffee menu.",
        "/menu",
        &chrome,
        body,
    );
    Html(markup.into_string())
}

/// Pair every category with its items, in category display order.
/// Items reference exactly one category; anything whose category is
/// missing from the list simply does not render, same as the original.
fn group_by_category<'a>(
    categories: &'a [Category],
    items: &'a [MenuItem],
) -> Vec<(&'a Category, Vec<&'a MenuItem>)> {
    categories
        .iter()
        .map(|category| {
            let members = items
                .iter()
                .filter(|item| {
                    item.category
                        .as_ref()
                        .is_some_and(|c| c.id == category.id)
                })
                .collect();
            (category, members)
        })
        .collect()
}

fn category_nav(categories: &[Category]) -> Markup {
    html! {
        div class="category-nav" data-category-nav {
            nav class="category-nav__inner" {
                @for category in categories {
                    a class="category-nav__link"
                        href={ "#" (category.slug.current) }
                        data-category-link=(category.slug.current) {
                        (category.name)
                    }
                }
            }
        }
    }
}

fn menu_card(state: &ServerState, item: &MenuItem) -> Markup {
    html! {
        div class="card" {
            div class="card__image" {
                img src=(image_url_or(&state.content, item.image.as_ref(), 600, FALLBACK_MENU_IMAGE))
                    alt=(item.name) loading="lazy";
                @if !item.tags.is_empty() {
                    div class="card__image-badges" {
                        @for tag in item.tags.iter().take(2) {
                            (tag_badge(tag))
                        }
                    }
                }
            }
            div class="card__body" {
                div class="card__title-row" {
                    h3 class="card__title" { (item.name) }
                    span class="card__price mono" { (price_line(item)) }
                }
                @if let Some(description) = &item.description {
                    p class="card__description" { (description) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::content::menu::MenuItemCategory;
    use shared::Slug;

    fn category(id: &str, name: &str, order: i64) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            slug: Slug::new(name.to_lowercase()),
            order,
            ..Category::default()
        }
    }

    fn item(name: &str, category_id: &str) -> MenuItem {
        MenuItem {
            id: format!("menu-{name}"),
            name: name.to_string(),
            category: Some(MenuItemCategory {
                id: category_id.to_string(),
                ..MenuItemCategory::default()
            }),
            ..MenuItem::default()
        }
    }

    #[test]
    fn groups_items_under_their_category() {
        let categories = vec![category("c1", "Espresso", 1), category("c2", "Food", 2)];
        let items = vec![item("Cortado", "c1"), item("Bagel", "c2"), item("Latte", "c1")];

        let sections = group_by_category(&categories, &items);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].0.name, "Espresso");
        assert_eq!(sections[0].1.len(), 2);
        assert_eq!(sections[1].1.len(), 1);
    }

    #[test]
    fn items_without_a_listed_category_are_dropped() {
        let categories = vec![category("c1", "Espresso", 1)];
        let mut orphan = item("Mystery", "c9");
        orphan.category = None;
        let items = vec![item("Cortado", "c1"), orphan, item("Ghost", "c9")];

        let sections = group_by_category(&categories, &items);
        assert_eq!(sections[0].1.len(), 1);
    }

    #[test]
    fn empty_store_yields_no_sections() {
        let sections = group_by_category(&[], &[]);
        assert!(sections.is_empty());
    }
}
