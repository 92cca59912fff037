//! Domain layer — build metadata and typed errors.
//!
//! Pure data: no I/O, no terminal access.

pub mod build_info;
pub mod error;

pub use build_info::BuildMetadata;
pub use error::{AssetError, VersionError};
