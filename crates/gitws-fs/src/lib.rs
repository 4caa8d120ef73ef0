//! Filesystem helpers for git-workspace
//!
//! Provides atomic writes, permission-preserving directory copies and
//! TOML-backed configuration storage.

pub mod config;
pub mod constants;
pub mod copy;
pub mod error;
pub mod io;

pub use config::ConfigStore;
pub use constants::WorkspacePath;
pub use copy::{copy_dir, replace_dir};
pub use error::{Error, Result};
