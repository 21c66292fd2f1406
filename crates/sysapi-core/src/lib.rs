//! # sysapi-core
//!
//! Core types shared across all sysapi crates.
//!
//! This crate provides:
//! - `Category`: the closed set of display categories for API schemas
//! - `SchemaMap` / `SchemaDefinition`: the name-to-schema shape every provider returns
//! - `SchemaProvider`: the contract between schema fragment providers and the registry
//! - `ProviderGroup`: a function-backed provider for injecting ad-hoc schema groups
//! - Cross-cutting error types

pub mod category;
pub mod errors;
pub mod provider;

pub use category::Category;
pub use errors::CoreError;
pub use provider::{ProviderGroup, SchemaDefinition, SchemaMap, SchemaProvider};
