//! Boot — reports build metadata and assets embedded into the binary.
//!
//! The library exposes every module so integration tests can drive them.

#![cfg_attr(test, allow(clippy::expect_used))]

pub mod assets;
pub mod cli;
pub mod commands;
pub mod domain;
pub mod output;
pub mod version;
