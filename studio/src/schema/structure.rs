//! Editorial desk structure
//!
//! Declares how the studio tool groups content in its sidebar:
//! singletons first, then the menu group, team, locations and events.

use serde::Serialize;

/// One sidebar entry
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DeskItem {
    /// Pinned single document (id == schema type name)
    #[serde(rename_all = "camelCase")]
    Singleton {
        title: &'static str,
        schema_type: &'static str,
    },
    Divider,
    /// Nested group of entries
    #[serde(rename_all = "camelCase")]
    Group {
        title: &'static str,
        children: Vec<DeskItem>,
    },
    /// Flat list of all documents of one type
    #[serde(rename_all = "camelCase")]
    TypeList {
        title: &'static str,
        schema_type: &'static str,
    },
}

/// The sidebar, top to bottom
pub fn structure() -> Vec<DeskItem> {
    vec![
        DeskItem::Singleton {
            title: "Site Settings",
            schema_type: "siteSettings",
        },
        DeskItem::Singleton {
            title: "Home Page",
            schema_type: "homePage",
        },
        DeskItem::Singleton {
            title: "About Page",
            schema_type: "aboutPage",
        },
        DeskItem::Divider,
        DeskItem::Group {
            title: "Menu",
            children: vec![
                DeskItem::TypeList {
                    title: "Categories",
                    schema_type: "category",
                },
                DeskItem::TypeList {
                    title: "Menu Items",
                    schema_type: "menuItem",
                },
            ],
        },
        DeskItem::TypeList {
            title: "Team",
            schema_type: "staffMember",
        },
        DeskItem::TypeList {
            title: "Locations",
            schema_type: "location",
        },
        DeskItem::TypeList {
            title: "Events",
            schema_type: "event",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::registry;

    fn schema_types(items: &[DeskItem], out: &mut Vec<&'static str>) {
        for item in items {
            match item {
                DeskItem::Singleton { schema_type, .. }
                | DeskItem::TypeList { schema_type, .. } => out.push(schema_type),
                DeskItem::Group { children, .. } => schema_types(children, out),
                DeskItem::Divider => {}
            }
        }
    }

    #[test]
    fn singletons_come_first() {
        let items = structure();
        assert!(matches!(
            items[0],
            DeskItem::Singleton {
                schema_type: "siteSettings",
                ..
            }
        ));
        assert!(matches!(items[3], DeskItem::Divider));
    }

    #[test]
    fn every_entry_references_a_registered_type() {
        let types = registry();
        let registered: Vec<&str> = types.iter().map(|t| t.name).collect();
        let mut referenced = Vec::new();
        schema_types(&structure(), &mut referenced);
        for name in referenced {
            assert!(registered.contains(&name), "{name} not in registry");
        }
    }
}
