//! Shape variants and their surface-attribute synchronization.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::style::Stroke;
use crate::surface::{ElementHandle, Surface};
use crate::{SketchError, SketchResult};

/// Default extent for freshly created shapes.
const DEFAULT_EXTENT: Point = Point { x: 100.0, y: 100.0 };

/// The closed set of drawable variants.
///
/// New variants extend this enum; every per-variant behavior below is an
/// exhaustive `match`, so the compiler flags the places a new variant must
/// be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// A text label.
    Text,
    /// An axis-aligned rectangle.
    Rect,
    /// An ellipse (the `circle` keyword is an alias).
    Ellipse,
    /// A line segment from origin to origin + extent.
    Line,
    /// A polygon rendered from an explicit vertex list.
    Polygon,
}

impl ShapeKind {
    /// Resolve a script keyword into a variant.
    ///
    /// The keyword table carries aliases: `rect`/`rectangle` and
    /// `circle`/`ellipse` map to the same variants.
    ///
    /// # Errors
    ///
    /// [`SketchError::MissingType`] when no keyword was given,
    /// [`SketchError::UnknownType`] for anything not in the table.
    pub fn from_keyword(keyword: Option<&str>) -> SketchResult<Self> {
        let keyword = keyword.ok_or(SketchError::MissingType)?;
        match keyword {
            "text" => Ok(Self::Text),
            "rect" | "rectangle" => Ok(Self::Rect),
            "circle" | "ellipse" => Ok(Self::Ellipse),
            "line" => Ok(Self::Line),
            "polygon" => Ok(Self::Polygon),
            other => Err(SketchError::UnknownType(other.to_string())),
        }
    }

    /// The surface element tag this variant draws with.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Rect => "rect",
            Self::Ellipse => "ellipse",
            Self::Line => "line",
            Self::Polygon => "polygon",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// A named drawable entity.
///
/// Owns two independent points: `origin` (position) and `extent` (size,
/// or the second endpoint's delta for [`ShapeKind::Line`]). Every mutation
/// re-syncs the affected attributes on the shape's surface element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    name: String,
    kind: ShapeKind,
    origin: Point,
    extent: Point,
    /// Vertex list; only rendered by [`ShapeKind::Polygon`].
    vertices: Vec<Point>,
    fill: String,
    stroke: Stroke,
    text: Option<String>,
    handle: ElementHandle,
}

impl Shape {
    /// Factory: allocate a shape with default geometry and a fresh,
    /// attached surface element.
    ///
    /// Defaults: origin (0,0), extent (100,100), transparent stroke of
    /// width 1, transparent fill, no text.
    pub fn create(name: &str, kind: ShapeKind, surface: &mut dyn Surface) -> Self {
        let handle = surface.create_element(kind.tag());
        surface.append_child(handle);

        let shape = Self {
            name: name.to_string(),
            kind,
            origin: Point::default(),
            extent: DEFAULT_EXTENT,
            vertices: Vec::new(),
            fill: "transparent".to_string(),
            stroke: Stroke::default(),
            text: None,
            handle,
        };
        shape.sync_all(surface);
        shape
    }

    /// The shape's immutable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The shape's variant.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Current position.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Current size (or endpoint delta for lines).
    #[must_use]
    pub fn extent(&self) -> Point {
        self.extent
    }

    /// Current fill color.
    #[must_use]
    pub fn fill(&self) -> &str {
        &self.fill
    }

    /// Current stroke.
    #[must_use]
    pub fn stroke(&self) -> &Stroke {
        &self.stroke
    }

    /// The last text payload written, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The surface element this shape draws to.
    #[must_use]
    pub fn handle(&self) -> ElementHandle {
        self.handle
    }

    /// Move to absolute coordinates; `None` keeps that axis.
    pub fn move_to(&mut self, x: Option<f64>, y: Option<f64>, surface: &mut dyn Surface) {
        self.origin.move_to(x, y);
        self.sync_geometry(surface);
    }

    /// Move by a relative delta; `None` adds zero on that axis.
    pub fn move_by(&mut self, dx: Option<f64>, dy: Option<f64>, surface: &mut dyn Surface) {
        self.origin.move_by(dx, dy);
        self.sync_geometry(surface);
    }

    /// Resize to an absolute extent; `None` keeps that axis.
    pub fn size_to(&mut self, w: Option<f64>, h: Option<f64>, surface: &mut dyn Surface) {
        self.extent.move_to(w, h);
        self.sync_geometry(surface);
    }

    /// Grow the extent by a delta; `None` adds zero on that axis.
    pub fn size_by(&mut self, dw: Option<f64>, dh: Option<f64>, surface: &mut dyn Surface) {
        self.extent.move_by(dw, dh);
        self.sync_geometry(surface);
    }

    /// Partial stroke update; `None` preserves the prior value.
    pub fn set_stroke(
        &mut self,
        color: Option<&str>,
        width: Option<f64>,
        surface: &mut dyn Surface,
    ) {
        self.stroke.merge(color, width);
        self.sync_stroke(surface);
    }

    /// Replace the vertex list. Only meaningful for polygons; other
    /// variants accept and store the list but never render it.
    pub fn set_points(&mut self, points: Vec<Point>, surface: &mut dyn Surface) {
        if self.kind != ShapeKind::Polygon {
            tracing::debug!(shape = %self.name, kind = %self.kind, "points ignored by non-polygon");
        }
        self.vertices = points;
        self.sync_geometry(surface);
    }

    /// Set the fill color.
    ///
    /// For lines this paints the stroke attribute instead: a line has no
    /// interior, so "painting" it colors the stroke.
    pub fn set_fill(&mut self, color: &str, surface: &mut dyn Surface) {
        self.fill = color.to_string();
        self.sync_fill(surface);
    }

    /// Replace the text payload. Only the text variant renders it.
    pub fn set_text(&mut self, content: &str, surface: &mut dyn Surface) {
        self.text = Some(content.to_string());
        surface.set_text(self.handle, content);
    }

    /// Detach the shape's element from the surface. The shape is inert
    /// afterwards; re-attachment is not supported.
    pub fn detach(&self, surface: &mut dyn Surface) {
        surface.remove_element(self.handle);
    }

    /// Copy the drawable state (origin, extent, vertices, fill, stroke —
    /// not text) from another shape and redraw.
    pub fn copy_style_from(&mut self, other: &Shape, surface: &mut dyn Surface) {
        self.origin = other.origin;
        self.extent = other.extent;
        self.vertices = other.vertices.clone();
        self.fill = other.fill.clone();
        self.stroke = other.stroke.clone();
        self.sync_all(surface);
    }

    fn sync_all(&self, surface: &mut dyn Surface) {
        self.sync_geometry(surface);
        self.sync_fill(surface);
        self.sync_stroke(surface);
    }

    /// Push position/size attributes for this variant.
    fn sync_geometry(&self, surface: &mut dyn Surface) {
        let h = self.handle;
        match self.kind {
            ShapeKind::Text => {
                surface.set_attribute(h, "x", &self.origin.x.to_string());
                surface.set_attribute(h, "y", &self.origin.y.to_string());
            }
            ShapeKind::Rect => {
                surface.set_attribute(h, "x", &self.origin.x.to_string());
                surface.set_attribute(h, "y", &self.origin.y.to_string());
                surface.set_attribute(h, "width", &self.extent.x.to_string());
                surface.set_attribute(h, "height", &self.extent.y.to_string());
            }
            ShapeKind::Ellipse => {
                // Center and radii derive from origin + half extent.
                let rx = self.extent.x / 2.0;
                let ry = self.extent.y / 2.0;
                surface.set_attribute(h, "cx", &(self.origin.x + rx).to_string());
                surface.set_attribute(h, "cy", &(self.origin.y + ry).to_string());
                surface.set_attribute(h, "rx", &rx.to_string());
                surface.set_attribute(h, "ry", &ry.to_string());
            }
            ShapeKind::Line => {
                // Endpoint 2 is always recomputed from the current origin,
                // so moving a line translates it rigidly.
                surface.set_attribute(h, "x1", &self.origin.x.to_string());
                surface.set_attribute(h, "y1", &self.origin.y.to_string());
                surface.set_attribute(h, "x2", &(self.origin.x + self.extent.x).to_string());
                surface.set_attribute(h, "y2", &(self.origin.y + self.extent.y).to_string());
            }
            ShapeKind::Polygon => {
                let points = self
                    .vertices
                    .iter()
                    .map(|p| format!("{},{}", p.x, p.y))
                    .collect::<Vec<_>>()
                    .join(" ");
                surface.set_attribute(h, "points", &points);
            }
        }
    }

    fn sync_fill(&self, surface: &mut dyn Surface) {
        let attr = match self.kind {
            ShapeKind::Line => "stroke",
            _ => "fill",
        };
        surface.set_attribute(self.handle, attr, &self.fill);
    }

    fn sync_stroke(&self, surface: &mut dyn Surface) {
        // For lines this shares the "stroke" attribute with the fill
        // mapping; whichever of paint/outline ran last wins.
        surface.set_attribute(self.handle, "stroke", &self.stroke.color);
        surface.set_attribute(self.handle, "stroke-width", &self.stroke.width.to_string());
    }
}
