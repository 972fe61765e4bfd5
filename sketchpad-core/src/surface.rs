//! The rendering-surface contract.
//!
//! The shape model's only dependency on the outside world. A surface is an
//! element store addressed by opaque handles: shapes create elements, push
//! attribute and text-content updates at them, and eventually detach them.
//! Concrete backends (an SVG document, a test recorder) live in other
//! crates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque handle to a surface element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementHandle(Uuid);

impl ElementHandle {
    /// Create a new unique handle.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ElementHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ElementHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A drawing target that shapes issue element and attribute updates to.
///
/// Handles stay valid after [`Surface::remove_element`] only in the sense
/// that further calls with them are silently ignored; removal is permanent
/// and re-attachment is not supported.
pub trait Surface {
    /// Allocate a fresh, detached element with the given tag
    /// (`"rect"`, `"ellipse"`, `"line"`, `"polygon"`, `"text"`).
    fn create_element(&mut self, tag: &str) -> ElementHandle;

    /// Set one attribute on an element.
    fn set_attribute(&mut self, handle: ElementHandle, name: &str, value: &str);

    /// Replace an element's text content. Only meaningful for text
    /// elements; other backends may ignore it.
    fn set_text(&mut self, handle: ElementHandle, content: &str);

    /// Attach an element to the visible document, after all previously
    /// attached elements.
    fn append_child(&mut self, handle: ElementHandle);

    /// Detach and drop an element. Permanent.
    fn remove_element(&mut self, handle: ElementHandle);

    /// Drop every element. Used by the interpreter's full reset.
    fn clear(&mut self);
}
