//! Document types

use shared::{CategoryIcon, Feature, Recurrence};

use super::{Field, FieldType, Ordering, Preview, SchemaType, SelectOption, TypeKind};

pub fn category() -> SchemaType {
    SchemaType {
        name: "category",
        title: "Menu Category",
        kind: TypeKind::Document,
        singleton: false,
        fields: vec![
            Field::new("name", "Name", FieldType::String { options: Vec::new() }).required(),
            Field::new(
                "slug",
                "Slug",
                FieldType::Slug {
                    source: "name",
                    max_length: 96,
                },
            )
            .required(),
            Field::new("description", "Description", FieldType::Text { rows: 2 }),
            Field::new(
                "order",
                "Display Order",
                FieldType::Number {
                    positive: false,
                    initial: Some(0),
                },
            ),
            Field::new(
                "icon",
                "Icon",
                FieldType::String {
                    options: icon_options(),
                },
            ),
        ],
        preview: Some(Preview {
            title: "name",
            subtitle: Some("description"),
            media: None,
        }),
        orderings: vec![Ordering {
            name: "orderAsc",
            title: "Display Order",
            field: "order",
            direction: "asc",
        }],
    }
}

pub fn menu_item() -> SchemaType {
    SchemaType {
        name: "menuItem",
        title: "Menu Item",
        kind: TypeKind::Document,
        singleton: false,
        fields: vec![
            Field::new("name", "Name", FieldType::String { options: Vec::new() }).required(),
            Field::new(
                "slug",
                "Slug",
                FieldType::Slug {
                    source: "name",
                    max_length: 96,
                },
            ),
            Field::new("category", "Category", FieldType::Reference { to: "category" })
                .required(),
            Field::new("description", "Description", FieldType::Text { rows: 3 }),
            Field::new(
                "price",
                "Base Price",
                FieldType::Number {
                    positive: true,
                    initial: None,
                },
            )
            .required(),
            Field::new(
                "variants",
                "Size Variants",
                FieldType::Array {
                    of: "priceVariant",
                    options: Vec::new(),
                },
            ),
            Field::new("image", "Image", FieldType::Image { hotspot: true }),
            Field::new(
                "tags",
                "Tags",
                FieldType::Array {
                    of: "string",
                    options: tag_options(),
                },
            ),
            Field::new(
                "available",
                "Currently Available",
                FieldType::Boolean {
                    initial: Some(true),
                },
            ),
            Field::new(
                "featured",
                "Featured Item",
                FieldType::Boolean {
                    initial: Some(false),
                },
            ),
        ],
        preview: Some(Preview {
            title: "name",
            subtitle: Some("category.name"),
            media: Some("image"),
        }),
        orderings: Vec::new(),
    }
}

pub fn staff_member() -> SchemaType {
    SchemaType {
        name: "staffMember",
        title: "Team Member",
        kind: TypeKind::Document,
        singleton: false,
        fields: vec![
            Field::new("name", "Name", FieldType::String { options: Vec::new() }).required(),
            Field::new("role", "Role", FieldType::String { options: Vec::new() }).required(),
            Field::new("bio", "Bio", FieldType::Text { rows: 3 }),
            Field::new("photo", "Photo", FieldType::Image { hotspot: true }),
            Field::new(
                "favoriteOrder",
                "Favorite Order",
                FieldType::String { options: Vec::new() },
            ),
            Field::new("funFact", "Fun Fact", FieldType::String { options: Vec::new() }),
            Field::new(
                "order",
                "Display Order",
                FieldType::Number {
                    positive: false,
                    initial: Some(0),
                },
            ),
        ],
        preview: Some(Preview {
            title: "name",
            subtitle: Some("role"),
            media: Some("photo"),
        }),
        orderings: vec![Ordering {
            name: "orderAsc",
            title: "Display Order",
            field: "order",
            direction: "asc",
        }],
    }
}

pub fn location() -> SchemaType {
    SchemaType {
        name: "location",
        title: "Location",
        kind: TypeKind::Document,
        singleton: false,
        fields: vec![
            Field::new("name", "Location Name", FieldType::String { options: Vec::new() })
                .required(),
            Field::new(
                "slug",
                "Slug",
                FieldType::Slug {
                    source: "name",
                    max_length: 96,
                },
            ),
            Field::new(
                "address",
                "Address",
                FieldType::Object {
                    fields: vec![
                        Field::new("street", "Street", FieldType::String { options: Vec::new() }),
                        Field::new("city", "City", FieldType::String { options: Vec::new() }),
                        Field::new("state", "State", FieldType::String { options: Vec::new() }),
                        Field::new("zip", "ZIP Code", FieldType::String { options: Vec::new() }),
                    ],
                },
            ),
            Field::new(
                "coordinates",
                "Coordinates",
                FieldType::Object {
                    fields: vec![
                        Field::new(
                            "lat",
                            "Latitude",
                            FieldType::Number {
                                positive: false,
                                initial: None,
                            },
                        ),
                        Field::new(
                            "lng",
                            "Longitude",
                            FieldType::Number {
                                positive: false,
                                initial: None,
                            },
                        ),
                    ],
                },
            ),
            Field::new(
                "hours",
                "Hours",
                FieldType::Array {
                    of: "hoursBlock",
                    options: Vec::new(),
                },
            ),
            Field::new("phone", "Phone", FieldType::String { options: Vec::new() }),
            Field::new("email", "Email", FieldType::String { options: Vec::new() }),
            Field::new("image", "Location Photo", FieldType::Image { hotspot: true }),
            Field::new("description", "Description", FieldType::Text { rows: 3 }),
            Field::new(
                "features",
                "Features",
                FieldType::Array {
                    of: "string",
                    options: feature_options(),
                },
            ),
            Field::new(
                "isPrimary",
                "Primary Location",
                FieldType::Boolean {
                    initial: Some(false),
                },
            ),
        ],
        preview: Some(Preview {
            title: "name",
            subtitle: Some("address.street"),
            media: Some("image"),
        }),
        orderings: Vec::new(),
    }
}

pub fn event() -> SchemaType {
    SchemaType {
        name: "event",
        title: "Event",
        kind: TypeKind::Document,
        singleton: false,
        fields: vec![
            Field::new("title", "Event Title", FieldType::String { options: Vec::new() })
                .required(),
            Field::new(
                "slug",
                "Slug",
                FieldType::Slug {
                    source: "title",
                    max_length: 96,
                },
            ),
            Field::new("description", "Full Description", FieldType::BlockContent),
            Field::new(
                "shortDescription",
                "Short Description",
                FieldType::Text { rows: 2 },
            ),
            Field::new("date", "Event Date", FieldType::Datetime).required(),
            Field::new("endDate", "End Date (for multi-day events)", FieldType::Datetime),
            Field::new(
                "recurring",
                "Recurring Event",
                FieldType::String {
                    options: recurrence_options(),
                },
            ),
            Field::new("location", "Location", FieldType::Reference { to: "location" }),
            Field::new("image", "Event Image", FieldType::Image { hotspot: true }),
            Field::new(
                "featured",
                "Featured Event",
                FieldType::Boolean {
                    initial: Some(false),
                },
            ),
        ],
        preview: Some(Preview {
            title: "title",
            subtitle: Some("date"),
            media: Some("image"),
        }),
        orderings: Vec::new(),
    }
}

// ── Controlled vocabularies ─────────────────────────────────────────

fn tag_options() -> Vec<SelectOption> {
    use shared::Tag;
    vec![
        SelectOption::new("Vegan", Tag::Vegan.value()),
        SelectOption::new("Gluten-Free", Tag::GlutenFree.value()),
        SelectOption::new("Dairy-Free", Tag::DairyFree.value()),
        SelectOption::new("Seasonal", Tag::Seasonal.value()),
        SelectOption::new("Staff Pick", Tag::StaffPick.value()),
        SelectOption::new("New", Tag::New.value()),
    ]
}

fn feature_options() -> Vec<SelectOption> {
    [
        Feature::Wifi,
        Feature::Outdoor,
        Feature::DriveThrough,
        Feature::MeetingRoom,
        Feature::Accessible,
        Feature::DogFriendly,
    ]
    .into_iter()
    .map(|feature| SelectOption::new(feature.label(), feature.value()))
    .collect()
}

fn recurrence_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("One-time", String::from(Recurrence::None)),
        SelectOption::new("Weekly", String::from(Recurrence::Weekly)),
        SelectOption::new("Monthly", String::from(Recurrence::Monthly)),
    ]
}

fn icon_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("Coffee Cup", CategoryIcon::Coffee.value()),
        SelectOption::new("Leaf (Tea)", CategoryIcon::Leaf.value()),
        SelectOption::new("Croissant", CategoryIcon::Pastry.value()),
        SelectOption::new("Sandwich", CategoryIcon::Food.value()),
        SelectOption::new("Bottle", CategoryIcon::Bottle.value()),
    ]
}
