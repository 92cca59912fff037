//! Build metadata compiled into the binary.
//!
//! The injected fields come from the `BOOT_*` variables re-exported by
//! `build.rs`; each is empty when the variable was not set for the build.
//! The toolchain version is recorded by `built` and is always present.

use serde::Serialize;

#[allow(clippy::pedantic, dead_code)]
mod built {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

/// Version, VCS, and toolchain details fixed at compile time.
///
/// Constructed once at startup with [`BuildMetadata::from_build`] and passed
/// by reference; never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildMetadata {
    /// Release version (`BOOT_VERSION`).
    pub version: String,
    /// VCS revision (`BOOT_REVISION`).
    pub revision: String,
    /// VCS branch (`BOOT_BRANCH`).
    pub branch: String,
    /// Who ran the build (`BOOT_BUILD_USER`).
    pub build_user: String,
    /// When the build ran (`BOOT_BUILD_DATE`).
    pub build_date: String,
    /// Compiler that produced the binary, e.g. `rustc 1.85.0 (4d91de4e4 2025-02-17)`.
    pub toolchain_version: String,
}

impl BuildMetadata {
    /// The metadata compiled into this binary.
    #[must_use]
    pub fn from_build() -> Self {
        Self {
            version: env!("BOOT_VERSION").to_owned(),
            revision: env!("BOOT_REVISION").to_owned(),
            branch: env!("BOOT_BRANCH").to_owned(),
            build_user: env!("BOOT_BUILD_USER").to_owned(),
            build_date: env!("BOOT_BUILD_DATE").to_owned(),
            toolchain_version: built::RUSTC_VERSION.to_owned(),
        }
    }
}
