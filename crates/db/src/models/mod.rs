//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create/upsert DTO
//! - A `Deserialize` update DTO (all `Option` fields) where rows can be patched

pub mod attribute;
pub mod attribute_option;
pub mod pet_characteristic;
pub mod user_preference;
