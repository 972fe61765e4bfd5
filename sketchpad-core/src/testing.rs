//! Test-only surface that records every element and attribute write.

use std::collections::{BTreeMap, HashMap};

use crate::surface::{ElementHandle, Surface};

#[derive(Debug, Default)]
struct RecordedElement {
    tag: String,
    attrs: BTreeMap<String, String>,
    text: Option<String>,
    attached: bool,
}

/// In-memory surface for asserting on the attribute stream.
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    elements: HashMap<ElementHandle, RecordedElement>,
}

impl RecordingSurface {
    pub(crate) fn attribute(&self, handle: ElementHandle, name: &str) -> Option<String> {
        self.elements.get(&handle)?.attrs.get(name).cloned()
    }

    pub(crate) fn tag(&self, handle: ElementHandle) -> Option<String> {
        self.elements.get(&handle).map(|e| e.tag.clone())
    }

    pub(crate) fn text(&self, handle: ElementHandle) -> Option<String> {
        self.elements.get(&handle)?.text.clone()
    }

    pub(crate) fn contains(&self, handle: ElementHandle) -> bool {
        self.elements.contains_key(&handle)
    }

    pub(crate) fn len(&self) -> usize {
        self.elements.len()
    }
}

impl Surface for RecordingSurface {
    fn create_element(&mut self, tag: &str) -> ElementHandle {
        let handle = ElementHandle::new();
        self.elements.insert(
            handle,
            RecordedElement {
                tag: tag.to_string(),
                ..RecordedElement::default()
            },
        );
        handle
    }

    fn set_attribute(&mut self, handle: ElementHandle, name: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(&handle) {
            element.attrs.insert(name.to_string(), value.to_string());
        }
    }

    fn set_text(&mut self, handle: ElementHandle, content: &str) {
        if let Some(element) = self.elements.get_mut(&handle) {
            element.text = Some(content.to_string());
        }
    }

    fn append_child(&mut self, handle: ElementHandle) {
        if let Some(element) = self.elements.get_mut(&handle) {
            element.attached = true;
        }
    }

    fn remove_element(&mut self, handle: ElementHandle) {
        self.elements.remove(&handle);
    }

    fn clear(&mut self) {
        self.elements.clear();
    }
}
