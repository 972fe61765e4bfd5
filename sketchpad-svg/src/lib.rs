//! # Sketchpad SVG
//!
//! An in-memory SVG document implementing the [`Surface`] contract from
//! `sketchpad-core`, plus a serializer that writes the attached elements
//! out as an SVG string.
//!
//! This is the production rendering backend: the interpreter pushes
//! attribute updates at it while a script runs, and the document can be
//! serialized at any point.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use std::collections::{BTreeMap, HashMap};
use std::fmt::Write;

use sketchpad_core::{ElementHandle, Surface};

/// Default document width in surface units.
pub const DEFAULT_WIDTH: u32 = 800;

/// Default document height in surface units.
pub const DEFAULT_HEIGHT: u32 = 600;

/// One element in the document tree.
#[derive(Debug, Clone)]
struct SvgElement {
    tag: String,
    /// Ordered map so serialization is deterministic.
    attrs: BTreeMap<String, String>,
    text: Option<String>,
}

/// An in-memory SVG document.
///
/// Elements exist detached after [`Surface::create_element`] and only
/// serialize once attached via [`Surface::append_child`]; attach order is
/// document order. Removal is permanent.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: u32,
    height: u32,
    elements: HashMap<ElementHandle, SvgElement>,
    /// Attached handles in document order.
    attached: Vec<ElementHandle>,
}

impl SvgSurface {
    /// Create an empty document with the given dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            elements: HashMap::new(),
            attached: Vec::new(),
        }
    }

    /// Number of attached elements.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.attached.len()
    }

    /// Serialize the attached elements as an SVG document.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let mut svg = String::with_capacity(1024);
        let _ = write!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">",
            self.width, self.height, self.width, self.height,
        );

        for handle in &self.attached {
            let Some(element) = self.elements.get(handle) else {
                continue;
            };
            let _ = write!(svg, "<{}", element.tag);
            for (name, value) in &element.attrs {
                let _ = write!(svg, " {name}=\"{}\"", escape_xml(value));
            }
            match &element.text {
                Some(text) => {
                    let _ = write!(svg, ">{}</{}>", escape_xml(text), element.tag);
                }
                None => svg.push_str("/>"),
            }
        }

        svg.push_str("</svg>");
        svg
    }
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Surface for SvgSurface {
    fn create_element(&mut self, tag: &str) -> ElementHandle {
        let handle = ElementHandle::new();
        self.elements.insert(
            handle,
            SvgElement {
                tag: tag.to_string(),
                attrs: BTreeMap::new(),
                text: None,
            },
        );
        handle
    }

    fn set_attribute(&mut self, handle: ElementHandle, name: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(&handle) {
            element.attrs.insert(name.to_string(), value.to_string());
        } else {
            tracing::debug!(%handle, name, "attribute write to removed element ignored");
        }
    }

    fn set_text(&mut self, handle: ElementHandle, content: &str) {
        if let Some(element) = self.elements.get_mut(&handle) {
            element.text = Some(content.to_string());
        }
    }

    fn append_child(&mut self, handle: ElementHandle) {
        if self.elements.contains_key(&handle) && !self.attached.contains(&handle) {
            self.attached.push(handle);
        }
    }

    fn remove_element(&mut self, handle: ElementHandle) {
        self.elements.remove(&handle);
        self.attached.retain(|h| *h != handle);
    }

    fn clear(&mut self) {
        self.elements.clear();
        self.attached.clear();
    }
}

/// Minimal XML escaping for attribute values and text content.
fn escape_xml(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_attached_elements_in_order() {
        let mut surface = SvgSurface::default();
        let rect = surface.create_element("rect");
        surface.append_child(rect);
        surface.set_attribute(rect, "width", "10");
        surface.set_attribute(rect, "fill", "red");

        let line = surface.create_element("line");
        surface.append_child(line);
        surface.set_attribute(line, "x1", "0");

        let svg = surface.to_svg();
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"800\""));
        assert!(svg.contains("<rect fill=\"red\" width=\"10\"/>"));
        let rect_pos = svg.find("<rect").unwrap();
        let line_pos = svg.find("<line").unwrap();
        assert!(rect_pos < line_pos);
    }

    #[test]
    fn detached_elements_do_not_serialize() {
        let mut surface = SvgSurface::default();
        let rect = surface.create_element("rect");
        surface.set_attribute(rect, "width", "10");
        assert!(!surface.to_svg().contains("<rect"));
        assert_eq!(surface.element_count(), 0);
    }

    #[test]
    fn removal_is_permanent() {
        let mut surface = SvgSurface::default();
        let rect = surface.create_element("rect");
        surface.append_child(rect);
        surface.remove_element(rect);

        // Writes after removal are ignored, and re-attachment is refused.
        surface.set_attribute(rect, "width", "10");
        surface.append_child(rect);
        assert!(!surface.to_svg().contains("<rect"));
    }

    #[test]
    fn text_content_is_escaped() {
        let mut surface = SvgSurface::default();
        let text = surface.create_element("text");
        surface.append_child(text);
        surface.set_text(text, "a < b & c");

        assert!(surface.to_svg().contains("<text>a &lt; b &amp; c</text>"));
    }
}
