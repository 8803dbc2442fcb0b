//! Chord sheet editing: transpose the `(Am)`-style chords embedded in lyric
//! text and keep the capo in step.

pub mod config;
pub mod error;
pub mod library;
pub mod pitch;
pub mod session;
pub mod song;
pub mod tokenizer;
pub mod transpose;

pub use config::Config;
pub use error::*;
pub use library::{SaveOutcome, SongLibrary, SongRecord};
pub use pitch::PitchClass;
pub use session::{Action, EditorSession};
pub use song::{parse_sheet, title_case, Song};
pub use tokenizer::{chord_tokens, ChordToken, Quality};
pub use transpose::{capo_after_transpose, transpose_root, transpose_text};

/// Transpose a whole song sheet, metadata block included.
///
/// The chords move by `steps` and the capo in the metadata moves the other
/// way.
pub fn transpose_sheet(source: &str, steps: i32) -> Result<String> {
    let song = parse_sheet(source)?;
    song.transpose(steps)?.to_sheet()
}
