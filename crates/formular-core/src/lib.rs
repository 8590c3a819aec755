//! Core types for the Formular view-helper library.
//!
//! This crate provides the foundations every renderer builds on:
//! - Markup primitives: [`Markup`], [`escape`], the [`Tag`] builder
//! - Configuration mappings: [`Config`], [`Attrs`]
//! - Field descriptors: [`Field`], [`FieldValue`], [`RichText`]
//! - Host capabilities: [`ViewContext`], [`DefaultContext`], [`StorageHint`]

mod config;
mod context;
mod error;
mod field;
mod markup;
mod tag;

pub use config::{Attrs, Config};
pub use context::{DefaultContext, StorageHint, ViewContext};
pub use error::ConfigError;
pub use field::{Field, FieldValue, RichText};
pub use markup::{escape, Markup};
pub use tag::{content_tag, Tag};
