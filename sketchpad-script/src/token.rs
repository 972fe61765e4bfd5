//! Line tokenization.
//!
//! Lines split on whitespace. A line that *starts* with whitespace is
//! shorthand for "apply this command to the currently selected object":
//! the selection name is spliced in as the target token, so
//! `  paint black` after `new rectangle background` tokenizes exactly
//! like `paint background black`.

use sketchpad_core::SketchError;

use crate::error::ScriptResult;

/// Placeholder shown in the error when an indented line runs with no
/// prior selection.
const NO_SELECTION: &str = "(nothing selected)";

/// Tokenize one script line against the current selection.
///
/// Returns an empty vector for blank lines.
///
/// # Errors
///
/// [`SketchError::ObjectNotFound`] when the line is indented but nothing
/// has been selected yet.
pub fn tokenize<'a>(line: &'a str, selection: Option<&'a str>) -> ScriptResult<Vec<&'a str>> {
    let mut words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Ok(words);
    }

    if line.starts_with(char::is_whitespace) {
        let target = selection
            .ok_or_else(|| SketchError::ObjectNotFound(NO_SELECTION.to_string()))?;
        words.insert(1, target);
    }
    Ok(words)
}
