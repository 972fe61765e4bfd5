//! Script persistence: one durable text slot.
//!
//! The last script run is saved verbatim and restored on next load; a
//! built-in default script is returned when nothing has been stored yet.

use std::path::PathBuf;

use thiserror::Error;

/// File name of the script slot inside the data directory.
const SCRIPT_FILE: &str = "script.sketch";

/// The script a fresh installation starts with.
pub const DEFAULT_SCRIPT: &str = "\
new rectangle background
  size 640 480
  paint cornflowerblue
new ellipse sun
  position 60 40
  size 120 120
  paint gold
wait 1 second
new line horizon
  position 0 300
  size 640 0
  paint darkgreen
  outline darkgreen 3
new text greeting
  position 40 360
  write hello sketchpad
";

/// Errors raised by the script store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An I/O error occurred during persistence.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Filesystem-backed script slot.
#[derive(Debug, Clone)]
pub struct ScriptStore {
    data_dir: PathBuf,
}

impl ScriptStore {
    /// Create a store rooted at `data_dir`. The directory is created if
    /// it doesn't exist.
    ///
    /// # Errors
    ///
    /// [`StoreError::Io`] if the directory cannot be created.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    /// Load the stored script, or [`DEFAULT_SCRIPT`] when the slot is
    /// empty.
    ///
    /// # Errors
    ///
    /// [`StoreError::Io`] on any read failure other than the file not
    /// existing.
    pub fn load(&self) -> Result<String, StoreError> {
        match std::fs::read_to_string(self.path()) {
            Ok(text) => Ok(text),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Ok(DEFAULT_SCRIPT.to_string())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Save the script text verbatim.
    ///
    /// # Errors
    ///
    /// [`StoreError::Io`] on any write failure.
    pub fn save(&self, text: &str) -> Result<(), StoreError> {
        std::fs::write(self.path(), text)?;
        tracing::debug!(path = %self.path().display(), bytes = text.len(), "script persisted");
        Ok(())
    }

    fn path(&self) -> PathBuf {
        self.data_dir.join(SCRIPT_FILE)
    }
}
