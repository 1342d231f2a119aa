//! Editorial schema definitions for the Ember & Oak content store
//!
//! Purely descriptive: these types declare, for the external editorial
//! tool, each document's field set, validation rules, controlled
//! vocabularies and preview hints. Nothing here executes on the serving
//! path - the web server independently tolerates whatever the store
//! returns.
//!
//! Two binaries consume this crate:
//!
//! - `export-schema` serializes the registry to JSON for the studio tool
//! - `seed` populates a dataset with the demo content set

pub mod schema;
pub mod seed;

pub use schema::{Field, FieldType, Preview, SchemaType, SelectOption, registry, singleton_ids};
pub use schema::structure::{DeskItem, structure};
