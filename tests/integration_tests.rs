//! Integration tests for chordsheet
//!
//! Exercises the public API from sheet text through the library and session.

use chordsheet::{
    chord_tokens, transpose_root, transpose_sheet, transpose_text, Action, EditorSession,
    SaveOutcome, SongLibrary,
};
use pretty_assertions::assert_eq;

const SHEET: &str = "---
title: House Of The Rising Sun
capo: 0
---
(Am) There (C) is a (D) house in (F) New Or(Am)leans
(Am) They (C) call the (E) Rising (E7) Sun
";

#[test]
fn test_transpose_sheet_moves_chords_and_capo() {
    let result = transpose_sheet(SHEET, 3).unwrap();
    assert_eq!(
        result,
        "---
title: House Of The Rising Sun
capo: 9
---
(Cm) There (D#) is a (F) house in (G#) New Or(Cm)leans
(Cm) They (D#) call the (G) Rising (G7) Sun
"
    );
}

#[test]
fn test_transpose_sheet_and_back() {
    let there = transpose_sheet(SHEET, -5).unwrap();
    let back = transpose_sheet(&there, 5).unwrap();
    assert_eq!(back, SHEET);
}

#[test]
fn test_plain_text_gets_metadata_block() {
    let result = transpose_sheet("(G) hey (Em)", 2).unwrap();
    assert_eq!(result, "---\ncapo: 10\n---\n(A) hey (F#m)");
}

#[test]
fn test_section_dividers_in_lyrics() {
    let result = transpose_sheet("(C) verse one\n---\n(G) chorus line\n---\n(Am) bridge\n", 2);
    assert_eq!(
        result.unwrap(),
        "---\ncapo: 10\n---\n(D) verse one\n---\n(A) chorus line\n---\n(Bm) bridge\n"
    );
}

#[test]
fn test_every_token_is_transposable() {
    let text = "(A#) (Bb) (Cm7) (Dbmaj7) (Esus2) (F#sus4) (Gdim) (Abaug) (B7) (Cb) (E#m)";
    for token in chord_tokens(text) {
        for steps in [-12, -1, 0, 1, 7, 12] {
            let out = transpose_root(token.chord, steps).unwrap();
            assert!(out.ends_with(token.suffix()), "{} -> {}", token.chord, out);
        }
    }
}

#[test]
fn test_unrecognized_parentheticals_survive() {
    let text = "(Intro) (Am) (x2) (Cadd9) (G/B) (am) (Riff: C D E)";
    assert_eq!(
        transpose_text(text, 4).unwrap(),
        "(Intro) (C#m) (x2) (Cadd9) (G/B) (am) (Riff: C D E)"
    );
}

#[test]
fn test_editor_session_flow() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("songs.yaml");
    let mut library = SongLibrary::open(&path).unwrap();

    let mut session = EditorSession::new("stand by me", "(A) When the (F#m) night", 0);
    for action in ["up", "up", "down"] {
        session.apply(action.parse().unwrap(), &mut library).unwrap();
    }
    assert_eq!(session.text, "(A#) When the (Gm) night");
    assert_eq!(session.capo, 11);

    session.apply(Action::Save, &mut library).unwrap();
    assert_eq!(session, EditorSession::default());

    let library = SongLibrary::open(&path).unwrap();
    let songs = library.songs();
    assert_eq!(songs.len(), 1);
    assert_eq!(songs[0].name, "Stand By Me");

    let session = EditorSession::open(&library, songs[0].id);
    assert_eq!(session.text, "(A#) When the (Gm) night");
    assert_eq!(session.capo, 11);
}

#[test]
fn test_library_rejects_duplicate_titles() {
    let mut library = SongLibrary::in_memory();
    assert_eq!(library.save_song("hotel california", "(Bm)", 7).unwrap(), SaveOutcome::Saved(1));
    assert_eq!(library.save_song("Hotel California", "(Am)", 0).unwrap(), SaveOutcome::Duplicate);
    assert_eq!(library.song(1).unwrap().capo, 7);
}
