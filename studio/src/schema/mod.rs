//! Schema model
//!
//! A small declarative vocabulary for describing document types: enough
//! to express every field, rule and hint the editorial tool needs,
//! serialized to JSON by `export-schema`.

pub mod documents;
pub mod objects;
pub mod singletons;
pub mod structure;

use serde::Serialize;

/// One schema type (document, object, or page singleton)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaType {
    pub name: &'static str,
    pub title: &'static str,
    pub kind: TypeKind,
    /// Singletons have exactly one document whose id equals the type name
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub singleton: bool,
    pub fields: Vec<Field>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<Preview>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub orderings: Vec<Ordering>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Document,
    Object,
}

/// One field on a schema type
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: &'static str,
    pub title: &'static str,
    #[serde(flatten)]
    pub field_type: FieldType,
    /// Editorial-side required rule
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

impl Field {
    pub fn new(name: &'static str, title: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            title,
            field_type,
            required: false,
            description: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}

/// Field type plus its type-specific rules
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldType {
    #[serde(rename_all = "camelCase")]
    String {
        #[serde(skip_serializing_if = "Vec::is_empty")]
        options: Vec<SelectOption>,
    },
    #[serde(rename_all = "camelCase")]
    Text { rows: u8 },
    #[serde(rename_all = "camelCase")]
    Number {
        /// `Rule.positive()` on the editorial side
        #[serde(skip_serializing_if = "std::ops::Not::not")]
        positive: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        initial: Option<i64>,
    },
    #[serde(rename_all = "camelCase")]
    Boolean {
        #[serde(skip_serializing_if = "Option::is_none")]
        initial: Option<bool>,
    },
    #[serde(rename_all = "camelCase")]
    Slug {
        source: &'static str,
        max_length: u32,
    },
    Datetime,
    #[serde(rename_all = "camelCase")]
    Image { hotspot: bool },
    #[serde(rename_all = "camelCase")]
    Reference { to: &'static str },
    BlockContent,
    /// Array of one inline type (object name or "string")
    #[serde(rename_all = "camelCase")]
    Array {
        of: &'static str,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        options: Vec<SelectOption>,
    },
    /// Inline object with nested fields
    #[serde(rename_all = "camelCase")]
    Object { fields: Vec<Field> },
    /// Array of inline objects with nested fields
    #[serde(rename_all = "camelCase")]
    ObjectArray { fields: Vec<Field> },
}

/// Fixed option list entry (controlled vocabulary)
#[derive(Debug, Clone, Serialize)]
pub struct SelectOption {
    pub title: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

/// Preview hint: which fields drive the editorial list display
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preview {
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<&'static str>,
}

/// Editorial list ordering
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ordering {
    pub name: &'static str,
    pub title: &'static str,
    pub field: &'static str,
    pub direction: &'static str,
}

/// Every schema type, objects first, then documents, then singletons
pub fn registry() -> Vec<SchemaType> {
    vec![
        // Objects
        objects::block_content(),
        objects::price_variant(),
        objects::hours_block(),
        // Documents
        documents::category(),
        documents::menu_item(),
        documents::staff_member(),
        documents::location(),
        documents::event(),
        // Singletons
        singletons::site_settings(),
        singletons::home_page(),
        singletons::about_page(),
    ]
}

/// Singleton document ids (document id == type name)
pub fn singleton_ids() -> Vec<&'static str> {
    registry()
        .into_iter()
        .filter(|t| t.singleton)
        .map(|t| t.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Feature, Size, Tag};

    #[test]
    fn type_names_are_unique() {
        let types = registry();
        let mut names: Vec<&str> = types.iter().map(|t| t.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), types.len());
    }

    #[test]
    fn singletons_are_the_three_page_documents() {
        assert_eq!(singleton_ids(), vec!["siteSettings", "homePage", "aboutPage"]);
    }

    #[test]
    fn menu_item_price_is_required_and_positive() {
        let menu_item = registry().into_iter().find(|t| t.name == "menuItem").unwrap();
        let price = menu_item.fields.iter().find(|f| f.name == "price").unwrap();
        assert!(price.required);
        assert!(matches!(
            price.field_type,
            FieldType::Number { positive: true, .. }
        ));
    }

    #[test]
    fn category_slug_is_required() {
        let category = registry().into_iter().find(|t| t.name == "category").unwrap();
        let slug = category.fields.iter().find(|f| f.name == "slug").unwrap();
        assert!(slug.required);
        assert!(matches!(
            slug.field_type,
            FieldType::Slug { max_length: 96, .. }
        ));
    }

    #[test]
    fn tag_vocabulary_matches_the_serving_enums() {
        let menu_item = registry().into_iter().find(|t| t.name == "menuItem").unwrap();
        let tags = menu_item.fields.iter().find(|f| f.name == "tags").unwrap();
        let FieldType::Array { options, .. } = &tags.field_type else {
            panic!("tags should be an option-listed array");
        };
        assert_eq!(options.len(), 6);
        for option in options {
            let tag = Tag::from(option.value.clone());
            assert!(!matches!(tag, Tag::Other(_)), "{} unknown to Tag", option.value);
        }
    }

    #[test]
    fn feature_and_size_vocabularies_match_the_serving_enums() {
        let types = registry();
        let location = types.iter().find(|t| t.name == "location").unwrap();
        let features = location.fields.iter().find(|f| f.name == "features").unwrap();
        let FieldType::Array { options, .. } = &features.field_type else {
            panic!("features should be an option-listed array");
        };
        for option in options {
            assert!(!matches!(Feature::from(option.value.clone()), Feature::Other(_)));
        }

        let variant = types.iter().find(|t| t.name == "priceVariant").unwrap();
        let size = variant.fields.iter().find(|f| f.name == "size").unwrap();
        let FieldType::String { options } = &size.field_type else {
            panic!("size should be an option-listed string");
        };
        for option in options {
            assert!(!matches!(Size::from(option.value.clone()), Size::Other(_)));
        }
    }

    #[test]
    fn registry_serializes() {
        let json = serde_json::to_value(registry()).unwrap();
        assert!(json.as_array().is_some_and(|a| a.len() == 11));
    }
}
