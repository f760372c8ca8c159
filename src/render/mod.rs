//! Serialization of composed text layers.

mod json;

pub use json::{document_to_json, to_json, JsonFormat};
