//! Editing session: the text being edited, its name and capo, and the
//! actions the editor form offers.

use crate::error::Result;
use crate::library::{SaveOutcome, SongLibrary};
use crate::pitch::semitone_class;
use crate::transpose::{capo_after_transpose, transpose_text};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Save,
    Delete(u64),
    New,
    /// Re-render without transposing
    Refresh,
}

impl Action {
    /// Semitone steps applied by this action
    pub fn steps(self) -> i32 {
        match self {
            Action::Up => 1,
            Action::Down => -1,
            _ => 0,
        }
    }
}

impl FromStr for Action {
    type Err = std::convert::Infallible;

    /// Parse a form action. Unknown actions, including `delete_` with a bad
    /// id, are a refresh.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "up" => Action::Up,
            "down" => Action::Down,
            "save" => Action::Save,
            "new" => Action::New,
            _ => s
                .strip_prefix("delete_")
                .and_then(|id| id.parse().ok())
                .map_or(Action::Refresh, Action::Delete),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorSession {
    pub name: String,
    pub text: String,
    pub capo: u8,
}

impl EditorSession {
    pub fn new(name: impl Into<String>, text: impl Into<String>, capo: i32) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            capo: semitone_class(i64::from(capo)),
        }
    }

    /// Load a stored song into a fresh session. An unknown id gives a blank
    /// session.
    pub fn open(library: &SongLibrary, id: u64) -> Self {
        match library.song(id) {
            Ok(record) => Self {
                name: record.name.clone(),
                text: record.content.clone(),
                capo: record.capo,
            },
            Err(e) => {
                tracing::warn!("{}, opening a blank session", e);
                Self::default()
            }
        }
    }

    /// Apply a form action.
    ///
    /// Save, delete and new leave the session blank. The others transpose the
    /// text and move the capo to compensate.
    ///
    /// ```rust
    /// use chordsheet::{Action, EditorSession, SongLibrary};
    ///
    /// let mut library = SongLibrary::in_memory();
    /// let mut session = EditorSession::new("", "(G) (Em)", 0);
    /// session.apply(Action::Up, &mut library)?;
    /// assert_eq!(session.text, "(G#) (Fm)");
    /// assert_eq!(session.capo, 11);
    /// # Ok::<(), chordsheet::ChordSheetError>(())
    /// ```
    pub fn apply(&mut self, action: Action, library: &mut SongLibrary) -> Result<()> {
        match action {
            Action::Save => {
                if let SaveOutcome::Saved(id) =
                    library.save_song(&self.name, &self.text, i32::from(self.capo))?
                {
                    tracing::debug!(id, "session saved");
                }
                *self = Self::default();
            }
            Action::Delete(id) => {
                library.delete_song(id)?;
                *self = Self::default();
            }
            Action::New => *self = Self::default(),
            Action::Up | Action::Down | Action::Refresh => {
                let steps = action.steps();
                self.text = transpose_text(&self.text, steps)?;
                self.capo = capo_after_transpose(i32::from(self.capo), steps);
            }
        }
        Ok(())
    }
}
