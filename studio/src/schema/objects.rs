//! Shared object types

use shared::Size;

use super::{Field, FieldType, Preview, SchemaType, SelectOption, TypeKind};

/// Minimal rich-text block type (paragraph styles only)
pub fn block_content() -> SchemaType {
    SchemaType {
        name: "blockContent",
        title: "Block Content",
        kind: TypeKind::Object,
        singleton: false,
        fields: Vec::new(),
        preview: None,
        orderings: Vec::new(),
    }
}

/// Size/price pair for multi-size drinks
pub fn price_variant() -> SchemaType {
    SchemaType {
        name: "priceVariant",
        title: "Price Variant",
        kind: TypeKind::Object,
        singleton: false,
        fields: vec![
            Field::new(
                "size",
                "Size",
                FieldType::String {
                    options: size_options(),
                },
            ),
            Field::new(
                "price",
                "Price",
                FieldType::Number {
                    positive: true,
                    initial: None,
                },
            ),
        ],
        preview: Some(Preview {
            title: "size",
            subtitle: Some("price"),
            media: None,
        }),
        orderings: Vec::new(),
    }
}

/// Free-text day-range / hour-range pair
pub fn hours_block() -> SchemaType {
    SchemaType {
        name: "hoursBlock",
        title: "Hours Block",
        kind: TypeKind::Object,
        singleton: false,
        fields: vec![
            Field::new("days", "Days", FieldType::String { options: Vec::new() })
                .description(r#"e.g., "Monday - Friday" or "Saturday""#),
            Field::new("hours", "Hours", FieldType::String { options: Vec::new() })
                .description(r#"e.g., "7:00 AM - 6:00 PM" or "Closed""#),
        ],
        preview: Some(Preview {
            title: "days",
            subtitle: Some("hours"),
            media: None,
        }),
        orderings: Vec::new(),
    }
}

fn size_options() -> Vec<SelectOption> {
    [Size::Small, Size::Medium, Size::Large]
        .into_iter()
        .map(|size| SelectOption::new(size.label(), size.value()))
        .collect()
}
