//! Shared test utilities for the git-workspace crates.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`git`]: git identity settings and upstream repository fixtures
//! - [`workspace`]: [`TestWorkspace`](workspace::TestWorkspace) builder for
//!   workspace layouts on disk

pub mod git;
pub mod workspace;
