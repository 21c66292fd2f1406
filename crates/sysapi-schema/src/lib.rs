//! # sysapi-schema
//!
//! Schema registry and category classification for the sysapi OpenAPI surface.
//!
//! This crate provides:
//! - `SchemaRegistry`: aggregates named schema fragments from an ordered list of
//!   providers into one flat namespace (last registration wins on collisions)
//! - `classifier`: static, name-based category lists used when a provider does
//!   not declare a category, and to detect list drift
//! - OpenAPI export of the aggregated schemas as a `components` object or a
//!   minimal standalone document
//!
//! ## Architecture
//!
//! Provider groups live in `sysapi-providers` and implement
//! `sysapi_core::SchemaProvider`. The registry is built once at startup and is
//! read-only afterwards; share it behind an `Arc` (see [`SharedRegistry`]).

pub mod classifier;
mod error;
mod openapi;
mod registry;

pub use error::SchemaError;
pub use openapi::{DocumentInfo, OPENAPI_VERSION};
pub use registry::{
    ClassificationDrift, Collision, INSERTED_PROVIDER, SchemaRegistry, SharedRegistry,
};
