//! Pitch classes and their two spellings.
//!
//! The sharp and flat tables are index-aligned: the same index names the same
//! pitch class in both. Lookups accept either spelling, rendering always uses
//! the sharp table.

use std::fmt;

/// Sharp spelling, indexed by pitch class (0 = C)
pub const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat spelling, index-aligned with [`SHARP_NAMES`]
pub const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Reduce any semitone count to the range 0..=11.
///
/// Floor-mod, so negative values wrap upward: `-1` becomes `11`. Both pitch
/// and capo arithmetic go through here.
pub fn semitone_class(semitones: i64) -> u8 {
    semitones.rem_euclid(12) as u8
}

/// One of the twelve pitch classes, 0 = C through 11 = B
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Build a pitch class from any semitone offset above C.
    pub fn new(semitones: i64) -> Self {
        PitchClass(semitone_class(semitones))
    }

    /// Look up a pitch name in the sharp table, then the flat table.
    ///
    /// ```
    /// use chordsheet::PitchClass;
    ///
    /// assert_eq!(PitchClass::from_name("A#"), PitchClass::from_name("Bb"));
    /// assert_eq!(PitchClass::from_name("H"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        SHARP_NAMES
            .iter()
            .position(|&n| n == name)
            .or_else(|| FLAT_NAMES.iter().position(|&n| n == name))
            .map(|idx| PitchClass(idx as u8))
    }

    /// Shift by a signed number of semitones, wrapping around the octave.
    pub fn transpose(self, steps: i32) -> Self {
        PitchClass::new(i64::from(self.0) + i64::from(steps))
    }

    /// Sharp spelling of this pitch class
    pub fn name(self) -> &'static str {
        SHARP_NAMES[self.0 as usize]
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_aligned() {
        for idx in 0..12 {
            let sharp = PitchClass::from_name(SHARP_NAMES[idx]).unwrap();
            let flat = PitchClass::from_name(FLAT_NAMES[idx]).unwrap();
            assert_eq!(sharp, flat);
            assert_eq!(sharp, PitchClass::new(idx as i64));
        }
    }

    #[test]
    fn test_semitone_class_floor_mod() {
        assert_eq!(semitone_class(0), 0);
        assert_eq!(semitone_class(-1), 11);
        assert_eq!(semitone_class(12), 0);
        assert_eq!(semitone_class(-13), 11);
        assert_eq!(semitone_class(25), 1);
        assert_eq!(semitone_class(i64::from(i32::MIN)), 4);
    }

    #[test]
    fn test_transpose_wraps_both_ways() {
        let c = PitchClass::new(0);
        assert_eq!(c.transpose(1).name(), "C#");
        assert_eq!(c.transpose(-1).name(), "B");
        assert_eq!(PitchClass::from_name("B").unwrap().transpose(1), c);
        assert_eq!(c.transpose(i32::MAX).transpose(i32::MIN).transpose(1), c);
    }

    #[test]
    fn test_renders_sharp_spelling() {
        let b_flat = PitchClass::from_name("Bb").unwrap();
        assert_eq!(b_flat.name(), "A#");
        assert_eq!(b_flat.to_string(), "A#");
    }

    #[test]
    fn test_unknown_names() {
        for name in ["", "H", "c", "Cb", "E#", "B#", "Fb", "C##"] {
            assert_eq!(PitchClass::from_name(name), None, "{name}");
        }
    }
}
