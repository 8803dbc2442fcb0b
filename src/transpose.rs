use crate::error::{ChordSheetError, Result};
use crate::pitch::{semitone_class, PitchClass};
use crate::tokenizer::chord_tokens;

/// Split a chord into its root pitch class and the remaining suffix.
///
/// A two-character root (`C#`, `Bb`) wins when it is a known pitch name,
/// otherwise the root is the first character alone.
fn split_chord(chord: &str) -> Result<(PitchClass, &str)> {
    let bytes = chord.as_bytes();
    if bytes.len() >= 2 && matches!(bytes[1], b'#' | b'b') {
        if let Some(pitch) = PitchClass::from_name(&chord[..2]) {
            return Ok((pitch, &chord[2..]));
        }
    }

    let root_len = chord.chars().next().map_or(0, char::len_utf8);
    let pitch = PitchClass::from_name(&chord[..root_len])
        .ok_or_else(|| ChordSheetError::InvalidRoot(chord.to_string()))?;
    Ok((pitch, &chord[root_len..]))
}

/// Transpose a chord such as `Dm7` by a signed number of semitones.
///
/// The suffix is kept verbatim and the root is always rendered with sharps,
/// so a zero-step transposition normalizes flats.
///
/// # Example
/// ```rust
/// use chordsheet::transpose_root;
///
/// assert_eq!(transpose_root("Dm7", 2)?, "Em7");
/// assert_eq!(transpose_root("C", -1)?, "B");
/// assert_eq!(transpose_root("Bb", 0)?, "A#");
/// # Ok::<(), chordsheet::ChordSheetError>(())
/// ```
///
/// # Errors
/// Returns [`ChordSheetError::InvalidRoot`] if the chord does not start with a
/// pitch name.
pub fn transpose_root(chord: &str, steps: i32) -> Result<String> {
    let (pitch, suffix) = split_chord(chord)?;
    let mut out = String::with_capacity(chord.len() + 1);
    out.push_str(pitch.transpose(steps).name());
    out.push_str(suffix);
    Ok(out)
}

/// Transpose every chord annotation in `text`, leaving all other text as is.
///
/// # Example
/// ```rust
/// use chordsheet::transpose_text;
///
/// let text = transpose_text("Verse 1 (Am) walking (C) home", 2)?;
/// assert_eq!(text, "Verse 1 (Bm) walking (D) home");
/// # Ok::<(), chordsheet::ChordSheetError>(())
/// ```
pub fn transpose_text(text: &str, steps: i32) -> Result<String> {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    let mut last = 0;
    let mut count = 0usize;

    for token in chord_tokens(text) {
        out.push_str(&text[last..token.span.start]);
        out.push('(');
        out.push_str(&transpose_root(token.chord, steps)?);
        out.push(')');
        last = token.span.end;
        count += 1;
    }
    out.push_str(&text[last..]);

    tracing::debug!(steps, chords = count, "transposed text");
    Ok(out)
}

/// Capo position after transposing the chords by `steps`.
///
/// Moving the chords up lowers the capo by the same amount, so the sounding
/// pitch stays put.
///
/// ```
/// use chordsheet::capo_after_transpose;
///
/// assert_eq!(capo_after_transpose(0, 1), 11);
/// assert_eq!(capo_after_transpose(3, -2), 5);
/// ```
pub fn capo_after_transpose(capo: i32, steps: i32) -> u8 {
    semitone_class(i64::from(capo) - i64::from(steps))
}
