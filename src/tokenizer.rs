//! # Chord Tokenizer
//!
//! Finds chord annotations embedded in lyric text.
//!
//! ## Grammar
//! A chord is written in parentheses: `"(" ROOT [SUFFIX] ")"`.
//! - `ROOT` is a letter `A`-`G`, optionally followed by `#` or `b`
//! - `SUFFIX` is one of `m`, `maj7`, `m7`, `sus4`, `sus2`, `dim`, `aug`, `7`
//!
//! Anything else in parentheses, such as `(hello)`, `(Cadd9)` or `(H7)`, is
//! ordinary text and is never reported.
//!
//! ## Example
//! ```rust
//! use chordsheet::{chord_tokens, Quality};
//!
//! let tokens: Vec<_> = chord_tokens("(Am7) walking (hello) (C)").collect();
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].chord, "Am7");
//! assert_eq!(tokens[0].quality, Quality::Minor7);
//! assert_eq!(tokens[1].span, 22..25);
//! ```

use lazy_static::lazy_static;
use regex::Regex;
use std::ops::Range;

/// Chord quality, identified by the suffix that follows the root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Quality {
    #[default]
    Major,
    Minor,
    Major7,
    Minor7,
    Sus4,
    Sus2,
    Diminished,
    Augmented,
    Dominant7,
}

impl Quality {
    /// Qualities with a suffix, most specific suffix first so that `m7` and
    /// `maj7` are tried before `m` and `7`.
    pub const SUFFIXED: [Quality; 8] = [
        Quality::Major7,
        Quality::Minor7,
        Quality::Sus4,
        Quality::Sus2,
        Quality::Diminished,
        Quality::Augmented,
        Quality::Minor,
        Quality::Dominant7,
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            Quality::Major => "",
            Quality::Minor => "m",
            Quality::Major7 => "maj7",
            Quality::Minor7 => "m7",
            Quality::Sus4 => "sus4",
            Quality::Sus2 => "sus2",
            Quality::Diminished => "dim",
            Quality::Augmented => "aug",
            Quality::Dominant7 => "7",
        }
    }

    /// Parse a complete suffix. Returns `None` for anything outside the set.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        if suffix.is_empty() {
            return Some(Quality::Major);
        }
        Quality::SUFFIXED.into_iter().find(|q| q.suffix() == suffix)
    }
}

lazy_static! {
    static ref CHORD_RE: Regex = {
        let suffixes: Vec<&str> = Quality::SUFFIXED.iter().map(|q| q.suffix()).collect();
        let pattern = format!(
            r"\((?P<chord>(?P<root>[A-G][#b]?)(?P<suffix>{})?)\)",
            suffixes.join("|")
        );
        Regex::new(&pattern).unwrap()
    };
}

/// A chord annotation located in a text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordToken<'a> {
    /// Byte range of the whole annotation, parentheses included
    pub span: Range<usize>,
    /// Text between the parentheses, e.g. `Bbm7`
    pub chord: &'a str,
    /// Root as written, e.g. `Bb`
    pub root: &'a str,
    pub quality: Quality,
}

impl ChordToken<'_> {
    /// The suffix as written (empty for a major chord)
    pub fn suffix(&self) -> &str {
        &self.chord[self.root.len()..]
    }
}

/// Lazily scan `text` for chord annotations, left to right, without overlaps.
pub fn chord_tokens(text: &str) -> impl Iterator<Item = ChordToken<'_>> + '_ {
    CHORD_RE.captures_iter(text).filter_map(|caps| {
        let whole = caps.get(0)?;
        let chord = caps.name("chord")?;
        let root = caps.name("root")?;
        let quality = Quality::from_suffix(caps.name("suffix").map_or("", |m| m.as_str()))?;
        Some(ChordToken {
            span: whole.range(),
            chord: chord.as_str(),
            root: root.as_str(),
            quality,
        })
    })
}
