//! # Song Sheets
//!
//! A song sheet is lyric text with inline chords and an optional YAML
//! metadata block between `---` lines:
//!
//! ```text
//! ---
//! title: Wonderwall
//! capo: 2
//! ---
//! (Em7) Today is gonna be the day
//! ```
//!
//! The metadata block must open the file (blank lines aside). Any other
//! `---` line is part of the lyrics. Without a block the song has no name and
//! the capo is 0.

use crate::error::{ChordSheetError, Result};
use crate::pitch::semitone_class;
use crate::transpose::{capo_after_transpose, transpose_text};
use serde::{Deserialize, Serialize};

/// Metadata block as written in the sheet
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case")]
struct RawMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    capo: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Song {
    pub name: String,
    pub content: String,
    /// Capo fret, always 0..=11
    pub capo: u8,
}

impl Song {
    pub fn new(name: impl Into<String>, content: impl Into<String>, capo: i32) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            capo: semitone_class(i64::from(capo)),
        }
    }

    /// Transpose the chords and move the capo the other way.
    ///
    /// ```rust
    /// use chordsheet::Song;
    ///
    /// let song = Song::new("Riptide", "(Am) (G) (C)", 1);
    /// let up = song.transpose(2)?;
    /// assert_eq!(up.content, "(Bm) (A) (D)");
    /// assert_eq!(up.capo, 11);
    /// # Ok::<(), chordsheet::ChordSheetError>(())
    /// ```
    pub fn transpose(&self, steps: i32) -> Result<Song> {
        Ok(Song {
            name: self.name.clone(),
            content: transpose_text(&self.content, steps)?,
            capo: capo_after_transpose(i32::from(self.capo), steps),
        })
    }

    /// Render as a song sheet with a leading metadata block.
    pub fn to_sheet(&self) -> Result<String> {
        let raw = RawMetadata {
            title: (!self.name.is_empty()).then(|| self.name.clone()),
            capo: Some(i32::from(self.capo)),
        };
        let yaml =
            serde_yaml::to_string(&raw).map_err(|e| ChordSheetError::MetadataError(e.to_string()))?;
        Ok(format!("---\n{}---\n{}", yaml, self.content))
    }
}

/// Parse a song sheet.
///
/// # Errors
/// Returns [`ChordSheetError::MetadataError`] if the metadata block is not
/// valid YAML or has fields of the wrong type.
pub fn parse_sheet(source: &str) -> Result<Song> {
    let (metadata_content, content) = extract_metadata(source);

    let raw = match metadata_content {
        Some(yaml) if !yaml.trim().is_empty() => serde_yaml::from_str::<RawMetadata>(yaml)
            .map_err(|e| ChordSheetError::MetadataError(e.to_string()))?,
        _ => RawMetadata::default(),
    };

    Ok(Song::new(
        raw.title.unwrap_or_default(),
        content,
        raw.capo.unwrap_or(0),
    ))
}

/// Split the metadata block from the sheet body.
///
/// The block only counts when the first non-blank line is `---`; later `---`
/// lines are lyric dividers. The body is a slice of the source, so its line
/// endings are untouched.
fn extract_metadata(source: &str) -> (Option<&str>, &str) {
    let mut lines = source.split_inclusive('\n');
    let mut offset = 0;

    let mut metadata_start = None;
    for line in lines.by_ref() {
        offset += line.len();
        if line.trim().is_empty() {
            continue;
        }
        if line.trim() == "---" {
            metadata_start = Some(offset);
        }
        break;
    }
    let Some(start) = metadata_start else {
        return (None, source);
    };

    for line in lines {
        let line_start = offset;
        offset += line.len();
        if line.trim() == "---" {
            return (Some(&source[start..line_start]), &source[offset..]);
        }
    }
    (None, source)
}

/// Capitalize the first letter of every run of letters and lowercase the rest.
///
/// ```
/// use chordsheet::title_case;
///
/// assert_eq!(title_case("hey JUDE"), "Hey Jude");
/// assert_eq!(title_case("don't stop"), "Don'T Stop");
/// ```
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_word = false;
    for c in name.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
