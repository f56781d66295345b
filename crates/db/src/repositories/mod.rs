//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod attribute_option_repo;
pub mod attribute_repo;
pub mod pet_characteristic_repo;
pub mod user_preference_repo;

pub use attribute_option_repo::AttributeOptionRepo;
pub use attribute_repo::AttributeRepo;
pub use pet_characteristic_repo::PetCharacteristicRepo;
pub use user_preference_repo::UserPreferenceRepo;
