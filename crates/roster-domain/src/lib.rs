//! Domain types shared across Roster crates.
//!
//! This crate contains only pure types with no framework dependencies.
//! The schema, migration and service crates all build on it; it never depends
//! on any of them.

pub mod id;
pub mod pagination;
pub mod sentinel;
