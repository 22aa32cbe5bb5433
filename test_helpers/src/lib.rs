//! Test helpers shared across crates.
//!
//! This crate provides sample configuration documents and scratch
//! directories addressed by UTF-8 paths.

pub mod fixtures;
pub mod workspace;
