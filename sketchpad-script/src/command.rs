//! The command table: keyword → typed command.
//!
//! Positional tokens are adapted permissively — a missing or unparsable
//! numeric token becomes `None`, which downstream point operations treat
//! as "leave this axis unchanged".

use std::time::Duration;

use sketchpad_core::{Point, ShapeKind};

use crate::error::{ScriptError, ScriptResult};

/// Default wait when `N` is missing or non-positive.
const DEFAULT_WAIT_MS: f64 = 1000.0;

/// One parsed script command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `new <type> [name]` — create a shape (name auto-generated when
    /// omitted).
    New {
        /// Shape variant to create.
        kind: ShapeKind,
        /// Requested name, if any.
        name: Option<String>,
    },
    /// `clone <from> <to>` — copy a shape under a new name.
    Clone {
        /// Source shape name.
        from: String,
        /// Name for the copy.
        to: String,
    },
    /// `remove <name>` — detach and delete a shape.
    Remove {
        /// Target shape name.
        name: String,
    },
    /// `paint <name> <color>` — set the fill (stroke for lines).
    Paint {
        /// Target shape name.
        name: String,
        /// Color; `None` leaves the fill unchanged.
        color: Option<String>,
    },
    /// `write <name> <text…>` — set the text payload.
    Write {
        /// Target shape name.
        name: String,
        /// Remaining tokens joined with single spaces.
        text: String,
    },
    /// `width <name> <w>` — absolute width.
    Width {
        /// Target shape name.
        name: String,
        /// New width; `None` is a no-op.
        value: Option<f64>,
    },
    /// `height <name> <h>` — absolute height.
    Height {
        /// Target shape name.
        name: String,
        /// New height; `None` is a no-op.
        value: Option<f64>,
    },
    /// `left <name> <x>` — absolute x position.
    Left {
        /// Target shape name.
        name: String,
        /// New x; `None` is a no-op.
        value: Option<f64>,
    },
    /// `top <name> <y>` — absolute y position.
    Top {
        /// Target shape name.
        name: String,
        /// New y; `None` is a no-op.
        value: Option<f64>,
    },
    /// `outline <name> <color> [width]` — partial stroke update.
    Outline {
        /// Target shape name.
        name: String,
        /// Stroke color; `None` preserves the current one.
        color: Option<String>,
        /// Stroke width; `None` preserves the current one.
        width: Option<f64>,
    },
    /// `with <name>` — select a shape for shorthand lines.
    With {
        /// Shape to select.
        name: String,
    },
    /// `move <name> <dx> <dy>` — relative move.
    Move {
        /// Target shape name.
        name: String,
        /// Horizontal delta.
        dx: Option<f64>,
        /// Vertical delta.
        dy: Option<f64>,
    },
    /// `position <name> <x> <y>` — absolute move.
    Position {
        /// Target shape name.
        name: String,
        /// New x.
        x: Option<f64>,
        /// New y.
        y: Option<f64>,
    },
    /// `points <name> <x1> <y1> <x2> <y2> …` — replace a polygon's
    /// vertex list.
    Points {
        /// Target shape name.
        name: String,
        /// Parsed vertex pairs.
        points: Vec<Point>,
    },
    /// `size <name> <w> <h>` — absolute resize.
    Size {
        /// Target shape name.
        name: String,
        /// New width.
        w: Option<f64>,
        /// New height.
        h: Option<f64>,
    },
    /// `grow <name> <dw> <dh>` — relative resize.
    Grow {
        /// Target shape name.
        name: String,
        /// Width delta.
        dw: Option<f64>,
        /// Height delta.
        dh: Option<f64>,
    },
    /// `wait <n> [unit]` — suspend the whole script.
    Wait {
        /// How long to suspend.
        duration: Duration,
    },
    /// `reset` — clear registry, surface, selection, and line counter.
    Reset,
}

impl Command {
    /// Resolve a non-empty token list into a command.
    ///
    /// `words[0]` is the keyword; the table maps lowercase keywords only.
    ///
    /// # Errors
    ///
    /// [`ScriptError::UnknownCommand`] with the offending token.
    pub fn parse(words: &[&str]) -> ScriptResult<Self> {
        let keyword = words.first().copied().unwrap_or_default();
        let cmd = match keyword {
            "new" => Self::New {
                kind: ShapeKind::from_keyword(arg(words, 1))?,
                name: arg(words, 2).map(ToString::to_string),
            },
            "clone" => Self::Clone {
                from: name_arg(words, 1),
                to: name_arg(words, 2),
            },
            "remove" => Self::Remove {
                name: name_arg(words, 1),
            },
            "paint" => Self::Paint {
                name: name_arg(words, 1),
                color: arg(words, 2).map(ToString::to_string),
            },
            "write" => Self::Write {
                name: name_arg(words, 1),
                text: words.get(2..).unwrap_or_default().join(" "),
            },
            "width" => Self::Width {
                name: name_arg(words, 1),
                value: number(words, 2),
            },
            "height" => Self::Height {
                name: name_arg(words, 1),
                value: number(words, 2),
            },
            "left" => Self::Left {
                name: name_arg(words, 1),
                value: number(words, 2),
            },
            "top" => Self::Top {
                name: name_arg(words, 1),
                value: number(words, 2),
            },
            "outline" => Self::Outline {
                name: name_arg(words, 1),
                color: arg(words, 2).map(ToString::to_string),
                width: number(words, 3),
            },
            "with" => Self::With {
                name: name_arg(words, 1),
            },
            "move" => Self::Move {
                name: name_arg(words, 1),
                dx: number(words, 2),
                dy: number(words, 3),
            },
            "position" => Self::Position {
                name: name_arg(words, 1),
                x: number(words, 2),
                y: number(words, 3),
            },
            "points" => Self::Points {
                name: name_arg(words, 1),
                points: parse_points(words.get(2..).unwrap_or_default()),
            },
            "size" => Self::Size {
                name: name_arg(words, 1),
                w: number(words, 2),
                h: number(words, 3),
            },
            "grow" => Self::Grow {
                name: name_arg(words, 1),
                dw: number(words, 2),
                dh: number(words, 3),
            },
            "wait" => Self::Wait {
                duration: parse_wait(number(words, 1), arg(words, 2)),
            },
            "reset" => Self::Reset,
            other => return Err(ScriptError::UnknownCommand(other.to_string())),
        };
        Ok(cmd)
    }
}

fn arg<'a>(words: &[&'a str], index: usize) -> Option<&'a str> {
    words.get(index).copied()
}

/// Name positions degrade to an empty string, which downstream lookups
/// report as `ObjectNotFound`.
fn name_arg(words: &[&str], index: usize) -> String {
    arg(words, index).unwrap_or_default().to_string()
}

/// Permissive numeric parse: anything that is not a finite number becomes
/// `None` (an axis no-op), never NaN.
fn number(words: &[&str], index: usize) -> Option<f64> {
    arg(words, index)?.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Vertex pairs; a trailing odd token or an unparsable pair is dropped.
fn parse_points(words: &[&str]) -> Vec<Point> {
    words
        .chunks_exact(2)
        .filter_map(|pair| {
            let x = pair[0].parse::<f64>().ok().filter(|v| v.is_finite())?;
            let y = pair[1].parse::<f64>().ok().filter(|v| v.is_finite())?;
            Some(Point::new(x, y))
        })
        .collect()
}

/// `wait` duration: milliseconds by default, scaled by 1000 when the unit
/// token names seconds (case-insensitive). Missing, non-positive, or
/// unrepresentably large `N` defaults to one second.
fn parse_wait(n: Option<f64>, unit: Option<&str>) -> Duration {
    let ms = match n {
        Some(n) if n > 0.0 => {
            let seconds = unit.is_some_and(|u| {
                matches!(
                    u.to_ascii_lowercase().as_str(),
                    "s" | "sec" | "second" | "seconds"
                )
            });
            if seconds {
                n * 1000.0
            } else {
                n
            }
        }
        _ => DEFAULT_WAIT_MS,
    };
    Duration::try_from_secs_f64(ms / 1000.0).unwrap_or(Duration::from_secs(1))
}
