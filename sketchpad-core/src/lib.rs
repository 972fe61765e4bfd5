//! # Sketchpad Core
//!
//! Shape model for the Sketchpad scripting interpreter.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              sketchpad-core                 │
//! ├──────────────────┬──────────────────────────┤
//! │  Shape Model     │  Registry                │
//! │  - Point/Stroke  │  - name → Shape          │
//! │  - Kind variants │  - uniqueness/validation │
//! │  - attr sync     │  - selection ("with")    │
//! ├──────────────────┴──────────────────────────┤
//! │  Surface trait (the only external seam)     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Shapes never talk to a concrete drawing backend; every mutation is
//! pushed through the [`Surface`] trait as element/attribute updates.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod geometry;
pub mod registry;
pub mod shape;
pub mod style;
pub mod surface;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{SketchError, SketchResult};
pub use geometry::Point;
pub use registry::Registry;
pub use shape::{Shape, ShapeKind};
pub use style::Stroke;
pub use surface::{ElementHandle, Surface};

/// Core crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
