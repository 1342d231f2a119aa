//! Menu item model

use serde::{Deserialize, Serialize};

use super::{ImageRef, Size, Slug, Tag};

/// Menu item document
///
/// `price` is the base price; when `variants` is present each size
/// carries its own price and the base price is not displayed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: Option<Slug>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub variants: Option<Vec<PriceVariant>>,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// List queries filter on this server-side; kept for completeness
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default)]
    pub featured: bool,
    /// Expanded category reference (exactly one per item)
    #[serde(default)]
    pub category: Option<MenuItemCategory>,
}

fn default_true() -> bool {
    true
}

/// Size/price pair for items offered in multiple sizes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceVariant {
    pub size: Size,
    pub price: f64,
}

/// The slice of a category that item queries expand inline
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemCategory {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: Option<Slug>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_store_document() {
        let json = r#"{
            "_id": "menu-division",
            "name": "The Division",
            "slug": {"current": "the-division"},
            "description": "Our signature blend.",
            "price": 3.5,
            "variants": [
                {"size": "small", "price": 3.5},
                {"size": "medium", "price": 4.25},
                {"size": "large", "price": 5.0}
            ],
            "tags": ["staff-pick"],
            "featured": true,
            "category": {"_id": "category-espresso", "name": "Espresso", "slug": {"current": "espresso"}}
        }"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.name, "The Division");
        assert_eq!(item.variants.as_ref().unwrap().len(), 3);
        assert_eq!(item.tags, vec![Tag::StaffPick]);
        assert!(item.available, "availability defaults to true when not projected");
        assert_eq!(item.category.unwrap().slug.unwrap().current, "espresso");
    }

    #[test]
    fn tolerates_sparse_document() {
        let item: MenuItem = serde_json::from_str(r#"{"_id": "x", "name": "Cortado"}"#).unwrap();
        assert_eq!(item.price, 0.0);
        assert!(item.variants.is_none());
        assert!(item.tags.is_empty());
        assert!(!item.featured);
    }
}
