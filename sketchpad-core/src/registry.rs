//! Name → shape registry with selection tracking.

use std::collections::HashMap;

use crate::shape::{Shape, ShapeKind};
use crate::surface::Surface;
use crate::{SketchError, SketchResult};

/// The registry of named shapes for one interpreter session.
///
/// Names are unique; collisions are rejected, never overwritten. Insertion
/// order is kept so the rendering surface sees shapes in creation order.
/// The registry also tracks the current selection — the name shorthand
/// commands apply to.
#[derive(Debug, Default)]
pub struct Registry {
    shapes: HashMap<String, Shape>,
    /// Names in creation order.
    order: Vec<String>,
    selected: Option<String>,
    /// Counter for auto-generated names.
    auto_names: u64,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shape and record it as the current selection.
    ///
    /// A missing name is auto-generated from the variant tag. Returns the
    /// name the shape was registered under.
    ///
    /// # Errors
    ///
    /// [`SketchError::InvalidName`] when the name does not start with a
    /// letter or contains characters outside letters/digits/underscore;
    /// [`SketchError::DuplicateName`] when the name is taken. A failed
    /// create leaves the registry unchanged.
    pub fn create(
        &mut self,
        name: Option<&str>,
        kind: ShapeKind,
        surface: &mut dyn Surface,
    ) -> SketchResult<String> {
        let name = match name {
            Some(name) if !name.is_empty() => {
                validate_name(name)?;
                name.to_string()
            }
            _ => self.generate_name(kind),
        };
        if self.shapes.contains_key(&name) {
            return Err(SketchError::DuplicateName(name));
        }

        let shape = Shape::create(&name, kind, surface);
        tracing::debug!(name = %name, kind = %kind, "shape created");
        self.shapes.insert(name.clone(), shape);
        self.order.push(name.clone());
        self.selected = Some(name.clone());
        Ok(name)
    }

    /// Look up a shape.
    ///
    /// # Errors
    ///
    /// [`SketchError::ObjectNotFound`] when no shape has this name.
    pub fn get(&self, name: &str) -> SketchResult<&Shape> {
        self.shapes
            .get(name)
            .ok_or_else(|| SketchError::ObjectNotFound(name.to_string()))
    }

    /// Look up a shape for mutation.
    ///
    /// # Errors
    ///
    /// [`SketchError::ObjectNotFound`] when no shape has this name.
    pub fn get_mut(&mut self, name: &str) -> SketchResult<&mut Shape> {
        self.shapes
            .get_mut(name)
            .ok_or_else(|| SketchError::ObjectNotFound(name.to_string()))
    }

    /// Record an existing shape as the current selection.
    ///
    /// # Errors
    ///
    /// [`SketchError::ObjectNotFound`] when no shape has this name.
    pub fn select(&mut self, name: &str) -> SketchResult<()> {
        if !self.shapes.contains_key(name) {
            return Err(SketchError::ObjectNotFound(name.to_string()));
        }
        self.selected = Some(name.to_string());
        Ok(())
    }

    /// The current selection, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Clone a shape under a new name.
    ///
    /// The copy shares the source's kind, origin, extent, vertices, fill,
    /// and stroke at clone time — not its text — and is independent
    /// afterwards. The new name becomes the selection.
    ///
    /// # Errors
    ///
    /// [`SketchError::ObjectNotFound`] when the source is missing, plus
    /// any create-time validation error for the new name.
    pub fn clone_shape(
        &mut self,
        from: &str,
        to: &str,
        surface: &mut dyn Surface,
    ) -> SketchResult<String> {
        let source = self.get(from)?.clone();
        let name = self.create(Some(to), source.kind(), surface)?;
        let copy = self.get_mut(&name)?;
        copy.copy_style_from(&source, surface);
        Ok(name)
    }

    /// Remove a shape, detaching its surface element. Clears the
    /// selection when it pointed at the removed shape.
    ///
    /// # Errors
    ///
    /// [`SketchError::ObjectNotFound`] when no shape has this name.
    pub fn remove(&mut self, name: &str, surface: &mut dyn Surface) -> SketchResult<()> {
        let shape = self
            .shapes
            .remove(name)
            .ok_or_else(|| SketchError::ObjectNotFound(name.to_string()))?;
        shape.detach(surface);
        self.order.retain(|n| n != name);
        if self.selected.as_deref() == Some(name) {
            self.selected = None;
        }
        tracing::debug!(name = %name, "shape removed");
        Ok(())
    }

    /// Drop every shape and clear the surface. Part of the interpreter's
    /// full reset.
    pub fn clear(&mut self, surface: &mut dyn Surface) {
        self.shapes.clear();
        self.order.clear();
        self.selected = None;
        self.auto_names = 0;
        surface.clear();
    }

    /// Shapes in creation order.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.order.iter().filter_map(|name| self.shapes.get(name))
    }

    /// Number of registered shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the registry holds no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    fn generate_name(&mut self, kind: ShapeKind) -> String {
        loop {
            self.auto_names += 1;
            let candidate = format!("{}{}", kind.tag(), self.auto_names);
            if !self.shapes.contains_key(&candidate) {
                return candidate;
            }
        }
    }
}

/// Names start with a letter and continue with letters, digits, or
/// underscores.
fn validate_name(name: &str) -> SketchResult<()> {
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(SketchError::InvalidName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingSurface;

    #[test]
    fn duplicate_name_leaves_registry_unchanged() {
        let mut surface = RecordingSurface::default();
        let mut registry = Registry::new();
        registry
            .create(Some("a"), ShapeKind::Rect, &mut surface)
            .unwrap();

        let err = registry
            .create(Some("a"), ShapeKind::Ellipse, &mut surface)
            .unwrap_err();
        assert_eq!(err, SketchError::DuplicateName("a".to_string()));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("a").unwrap().kind(), ShapeKind::Rect);
    }

    #[test]
    fn name_must_start_with_a_letter() {
        let mut surface = RecordingSurface::default();
        let mut registry = Registry::new();

        let err = registry
            .create(Some("1abc"), ShapeKind::Rect, &mut surface)
            .unwrap_err();
        assert_eq!(err, SketchError::InvalidName("1abc".to_string()));
        assert!(registry.is_empty());

        assert!(registry
            .create(Some("a1_b"), ShapeKind::Rect, &mut surface)
            .is_ok());
        let err = registry
            .create(Some("a b"), ShapeKind::Rect, &mut surface)
            .unwrap_err();
        assert_eq!(err, SketchError::InvalidName("a b".to_string()));
    }

    #[test]
    fn omitted_name_is_generated() {
        let mut surface = RecordingSurface::default();
        let mut registry = Registry::new();
        let name = registry.create(None, ShapeKind::Ellipse, &mut surface).unwrap();
        assert_eq!(name, "ellipse1");
        assert_eq!(registry.selected(), Some("ellipse1"));
    }

    #[test]
    fn create_records_selection() {
        let mut surface = RecordingSurface::default();
        let mut registry = Registry::new();
        registry
            .create(Some("background"), ShapeKind::Rect, &mut surface)
            .unwrap();
        assert_eq!(registry.selected(), Some("background"));
    }

    #[test]
    fn clone_is_independent_of_source() {
        let mut surface = RecordingSurface::default();
        let mut registry = Registry::new();
        registry
            .create(Some("a"), ShapeKind::Rect, &mut surface)
            .unwrap();
        {
            let a = registry.get_mut("a").unwrap();
            a.move_to(Some(5.0), Some(6.0), &mut surface);
            a.set_fill("red", &mut surface);
            a.set_stroke(Some("black"), Some(2.0), &mut surface);
            a.set_text("label", &mut surface);
        }

        registry.clone_shape("a", "b", &mut surface).unwrap();

        // Mutate the source after cloning.
        registry
            .get_mut("a")
            .unwrap()
            .move_to(Some(50.0), Some(60.0), &mut surface);

        let b = registry.get("b").unwrap();
        assert_eq!(b.origin(), crate::Point::new(5.0, 6.0));
        assert_eq!(b.fill(), "red");
        assert_eq!(b.stroke().color, "black");
        assert_eq!(b.text(), None, "text is not copied");
        assert_eq!(registry.selected(), Some("b"));
    }

    #[test]
    fn remove_detaches_the_element() {
        let mut surface = RecordingSurface::default();
        let mut registry = Registry::new();
        registry
            .create(Some("a"), ShapeKind::Rect, &mut surface)
            .unwrap();
        let handle = registry.get("a").unwrap().handle();

        registry.remove("a", &mut surface).unwrap();
        assert!(!surface.contains(handle));
        assert!(registry.is_empty());
        assert_eq!(registry.selected(), None);

        let err = registry.remove("a", &mut surface).unwrap_err();
        assert_eq!(err, SketchError::ObjectNotFound("a".to_string()));
    }

    #[test]
    fn clear_drops_everything() {
        let mut surface = RecordingSurface::default();
        let mut registry = Registry::new();
        registry.create(None, ShapeKind::Rect, &mut surface).unwrap();
        registry.create(None, ShapeKind::Line, &mut surface).unwrap();
        assert_eq!(surface.len(), 2);
        assert_eq!(
            registry.shapes().map(Shape::name).collect::<Vec<_>>(),
            vec!["rect1", "line2"]
        );

        registry.clear(&mut surface);
        assert!(registry.is_empty());
        assert_eq!(registry.selected(), None);
        assert_eq!(surface.len(), 0);
    }
}
