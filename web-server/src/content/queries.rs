//! Query definitions
//!
//! Declarative read-only GROQ queries against the content store, one per
//! page/data need. Filters, sorts and limits live here so every page
//! states its data shape in one place:
//!
//! - categories sort by display order ascending
//! - menu items filter to `available == true`, sort by category order
//!   then name
//! - events filter to `date >= now()` (inclusive), sort by date ascending
//! - locations sort primary-first, then name
//!
//! A malformed query is a build-time defect, not a runtime condition; the
//! unit tests below pin the load-bearing fragments.

/// `siteSettings` singleton
pub const SITE_SETTINGS: &str = r#"
  *[_type == "siteSettings"][0] {
    shopName,
    tagline,
    logo,
    socialLinks,
    footerText,
    seo
  }
"#;

/// `homePage` singleton
pub const HOME_PAGE: &str = r#"
  *[_type == "homePage"][0] {
    hero,
    featuredSection,
    storyPreview,
    announcement
  }
"#;

/// `aboutPage` singleton
pub const ABOUT_PAGE: &str = r#"
  *[_type == "aboutPage"][0] {
    headline,
    story,
    heroImage,
    values,
    timeline
  }
"#;

/// All categories, display order ascending
pub const CATEGORIES: &str = r#"
  *[_type == "category"] | order(order asc) {
    _id,
    name,
    slug,
    description,
    order,
    icon
  }
"#;

/// Available menu items, grouped-ready (category order, then name)
pub const MENU_ITEMS: &str = r#"
  *[_type == "menuItem" && available == true] | order(category->order asc, name asc) {
    _id,
    name,
    slug,
    description,
    price,
    variants,
    image,
    tags,
    featured,
    category->{
      _id,
      name,
      slug
    }
  }
"#;

/// Featured, available items for the homepage (at most 6)
pub const FEATURED_ITEMS: &str = r#"
  *[_type == "menuItem" && featured == true && available == true] | order(name asc) [0...6] {
    _id,
    name,
    slug,
    description,
    price,
    variants,
    image,
    tags,
    category->{
      name
    }
  }
"#;

/// Available items in one category (`$category` = category slug)
pub const MENU_ITEMS_BY_CATEGORY: &str = r#"
  *[_type == "menuItem" && available == true && category->slug.current == $category] | order(name asc) {
    _id,
    name,
    slug,
    description,
    price,
    variants,
    image,
    tags,
    featured,
    category->{
      _id,
      name,
      slug
    }
  }
"#;

/// All staff members, display order ascending
pub const STAFF: &str = r#"
  *[_type == "staffMember"] | order(order asc) {
    _id,
    name,
    role,
    bio,
    photo,
    favoriteOrder,
    funFact,
    order
  }
"#;

/// All locations, primary first then name
pub const LOCATIONS: &str = r#"
  *[_type == "location"] | order(isPrimary desc, name asc) {
    _id,
    name,
    slug,
    address,
    coordinates,
    hours,
    phone,
    email,
    image,
    description,
    features,
    isPrimary
  }
"#;

/// Single location by slug (`$slug`)
pub const LOCATION_BY_SLUG: &str = r#"
  *[_type == "location" && slug.current == $slug][0] {
    _id,
    name,
    slug,
    address,
    coordinates,
    hours,
    phone,
    email,
    image,
    description,
    features,
    isPrimary
  }
"#;

/// The primary location (footer, location preview)
pub const PRIMARY_LOCATION: &str = r#"
  *[_type == "location" && isPrimary == true][0] {
    name,
    address,
    phone,
    email,
    hours
  }
"#;

/// Upcoming events; `date >= now()` keeps an event starting exactly now
pub const EVENTS: &str = r#"
  *[_type == "event" && date >= now()] | order(date asc) {
    _id,
    title,
    slug,
    shortDescription,
    date,
    endDate,
    recurring,
    image,
    featured,
    location->{
      name
    }
  }
"#;

/// Next three upcoming events (homepage widget)
pub const UPCOMING_EVENTS: &str = r#"
  *[_type == "event" && date >= now()] | order(date asc) [0...3] {
    _id,
    title,
    slug,
    shortDescription,
    date,
    image,
    location->{
      name
    }
  }
"#;

/// Single event by slug (`$slug`)
pub const EVENT_BY_SLUG: &str = r#"
  *[_type == "event" && slug.current == $slug][0] {
    _id,
    title,
    slug,
    description,
    shortDescription,
    date,
    endDate,
    recurring,
    image,
    featured,
    location->{
      name,
      address,
      slug
    }
  }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_queries_carry_their_filters() {
        assert!(MENU_ITEMS.contains("available == true"));
        assert!(FEATURED_ITEMS.contains("featured == true && available == true"));
        assert!(EVENTS.contains("date >= now()"));
        assert!(UPCOMING_EVENTS.contains("date >= now()"));
    }

    #[test]
    fn list_queries_carry_their_sorts() {
        assert!(CATEGORIES.contains("order(order asc)"));
        assert!(MENU_ITEMS.contains("order(category->order asc, name asc)"));
        assert!(LOCATIONS.contains("order(isPrimary desc, name asc)"));
        assert!(EVENTS.contains("order(date asc)"));
    }

    #[test]
    fn limited_queries_carry_their_limits() {
        assert!(FEATURED_ITEMS.contains("[0...6]"));
        assert!(UPCOMING_EVENTS.contains("[0...3]"));
    }

    #[test]
    fn parameterized_queries_reference_their_params() {
        assert!(MENU_ITEMS_BY_CATEGORY.contains("$category"));
        assert!(LOCATION_BY_SLUG.contains("$slug"));
        assert!(EVENT_BY_SLUG.contains("$slug"));
    }
}
