//! Mixin operations.
//!
//! [`Mixin`] carries the streams and capabilities every operation needs;
//! the operations themselves live in one file each:
//! - `status`: runs `helm status` for each release in the step
//! - `schema`: prints the bundled step schema
//! - `version`: prints build metadata

mod context;
mod schema;
mod status;
mod version;

pub use context::Mixin;
pub use version::{MIXIN_NAME, VersionInfo};
