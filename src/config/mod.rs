//! Configuration for the bitmap editor
//!
//! Provides types and loading for the optional `bitmap.toml` file.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
