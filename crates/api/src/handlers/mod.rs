//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate input through `pawmatch_core`, delegate to the
//! corresponding repository in `pawmatch_db`, and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod attribute_options;
pub mod attributes;
pub mod characteristics;
pub mod preferences;
pub mod suggestions;
