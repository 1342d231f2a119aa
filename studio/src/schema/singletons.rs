//! Page singletons

use super::{Field, FieldType, SchemaType, TypeKind};

pub fn site_settings() -> SchemaType {
    SchemaType {
        name: "siteSettings",
        title: "Site Settings",
        kind: TypeKind::Document,
        singleton: true,
        fields: vec![
            Field::new(
                "shopName",
                "Coffee Shop Name",
                FieldType::String { options: Vec::new() },
            )
            .required(),
            Field::new("tagline", "Tagline", FieldType::String { options: Vec::new() }),
            Field::new("logo", "Logo", FieldType::Image { hotspot: false }),
            Field::new(
                "socialLinks",
                "Social Media Links",
                FieldType::Object {
                    fields: vec![
                        Field::new(
                            "instagram",
                            "Instagram URL",
                            FieldType::String { options: Vec::new() },
                        ),
                        Field::new(
                            "facebook",
                            "Facebook URL",
                            FieldType::String { options: Vec::new() },
                        ),
                        Field::new(
                            "twitter",
                            "Twitter/X URL",
                            FieldType::String { options: Vec::new() },
                        ),
                    ],
                },
            ),
            Field::new("footerText", "Footer Text", FieldType::Text { rows: 2 }),
            Field::new(
                "seo",
                "Default SEO",
                FieldType::Object {
                    fields: vec![
                        Field::new(
                            "metaTitle",
                            "Meta Title",
                            FieldType::String { options: Vec::new() },
                        ),
                        Field::new(
                            "metaDescription",
                            "Meta Description",
                            FieldType::Text { rows: 3 },
                        ),
                        Field::new(
                            "ogImage",
                            "Social Share Image",
                            FieldType::Image { hotspot: false },
                        ),
                    ],
                },
            ),
        ],
        preview: None,
        orderings: Vec::new(),
    }
}

pub fn home_page() -> SchemaType {
    SchemaType {
        name: "homePage",
        title: "Home Page",
        kind: TypeKind::Document,
        singleton: true,
        fields: vec![
            Field::new(
                "hero",
                "Hero Section",
                FieldType::Object {
                    fields: vec![
                        Field::new(
                            "headline",
                            "Headline",
                            FieldType::String { options: Vec::new() },
                        ),
                        Field::new("subheadline", "Subheadline", FieldType::Text { rows: 2 }),
                        Field::new(
                            "backgroundImage",
                            "Background Image",
                            FieldType::Image { hotspot: true },
                        ),
                        Field::new(
                            "ctaText",
                            "CTA Button Text",
                            FieldType::String { options: Vec::new() },
                        ),
                        Field::new(
                            "ctaLink",
                            "CTA Button Link",
                            FieldType::String { options: Vec::new() },
                        ),
                    ],
                },
            ),
            Field::new(
                "featuredSection",
                "Featured Section",
                FieldType::Object {
                    fields: vec![
                        Field::new(
                            "title",
                            "Section Title",
                            FieldType::String { options: Vec::new() },
                        ),
                        Field::new("subtitle", "Subtitle", FieldType::Text { rows: 2 }),
                    ],
                },
            ),
            Field::new(
                "storyPreview",
                "Story Preview Section",
                FieldType::Object {
                    fields: vec![
                        Field::new(
                            "heading",
                            "Heading",
                            FieldType::String { options: Vec::new() },
                        ),
                        Field::new("excerpt", "Excerpt", FieldType::Text { rows: 4 }),
                        Field::new("image", "Image", FieldType::Image { hotspot: true }),
                    ],
                },
            ),
            Field::new(
                "announcement",
                "Announcement Banner",
                FieldType::Object {
                    fields: vec![
                        Field::new(
                            "enabled",
                            "Show Banner",
                            FieldType::Boolean { initial: None },
                        ),
                        Field::new(
                            "text",
                            "Banner Text",
                            FieldType::String { options: Vec::new() },
                        ),
                        Field::new("link", "Link", FieldType::String { options: Vec::new() }),
                    ],
                },
            ),
        ],
        preview: None,
        orderings: Vec::new(),
    }
}

pub fn about_page() -> SchemaType {
    SchemaType {
        name: "aboutPage",
        title: "About Page",
        kind: TypeKind::Document,
        singleton: true,
        fields: vec![
            Field::new("headline", "Headline", FieldType::String { options: Vec::new() }),
            Field::new("story", "Our Story", FieldType::BlockContent),
            Field::new("heroImage", "Hero Image", FieldType::Image { hotspot: true }),
            Field::new(
                "values",
                "Our Values",
                FieldType::ObjectArray {
                    fields: vec![
                        Field::new("title", "Title", FieldType::String { options: Vec::new() }),
                        Field::new("description", "Description", FieldType::Text { rows: 3 }),
                    ],
                },
            ),
            Field::new(
                "timeline",
                "Timeline / Milestones",
                FieldType::ObjectArray {
                    fields: vec![
                        Field::new("year", "Year", FieldType::String { options: Vec::new() }),
                        Field::new("title", "Title", FieldType::String { options: Vec::new() }),
                        Field::new("description", "Description", FieldType::Text { rows: 3 }),
                    ],
                },
            ),
        ],
        preview: None,
        orderings: Vec::new(),
    }
}
