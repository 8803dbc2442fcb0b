//! # Song Library
//!
//! Stored songs, kept in a single YAML file:
//!
//! ```yaml
//! next-id: 3
//! songs:
//! - id: 1
//!   name: Wonderwall
//!   content: "(Em7) Today is gonna be the day"
//!   capo: 2
//! ```
//!
//! Song names are stored title-cased and are unique; saving a second song
//! under an existing name is a no-op. Ids count up and are never reused.

use crate::error::{ChordSheetError, Result};
use crate::pitch::semitone_class;
use crate::song::{title_case, Song};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongRecord {
    pub id: u64,
    pub name: String,
    pub content: String,
    pub capo: u8,
}

impl SongRecord {
    pub fn song(&self) -> Song {
        Song {
            name: self.name.clone(),
            content: self.content.clone(),
            capo: self.capo,
        }
    }
}

/// Result of [`SongLibrary::save_song`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(u64),
    /// A song with the same (title-cased) name already exists
    Duplicate,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
struct LibraryFile {
    next_id: u64,
    #[serde(default)]
    songs: Vec<SongRecord>,
}

impl Default for LibraryFile {
    fn default() -> Self {
        Self {
            next_id: 1,
            songs: Vec::new(),
        }
    }
}

#[derive(Debug, Default)]
pub struct SongLibrary {
    path: Option<PathBuf>,
    data: LibraryFile,
}

impl SongLibrary {
    /// Open the library at `path`, starting empty if the file does not exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let data = if path.exists() {
            let source = fs::read_to_string(&path)?;
            if source.trim().is_empty() {
                LibraryFile::default()
            } else {
                serde_yaml::from_str(&source)
                    .map_err(|e| ChordSheetError::Storage(format!("{}: {}", path.display(), e)))?
            }
        } else {
            tracing::info!("Starting new song library at {}", path.display());
            LibraryFile::default()
        };

        tracing::debug!(songs = data.songs.len(), "Opened song library {}", path.display());
        Ok(Self {
            path: Some(path),
            data,
        })
    }

    /// A library that is never written to disk
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Store a song under its title-cased name.
    pub fn save_song(&mut self, name: &str, content: &str, capo: i32) -> Result<SaveOutcome> {
        let name = title_case(name);
        if self.data.songs.iter().any(|s| s.name == name) {
            tracing::warn!("Song '{}' already exists, not saving", name);
            return Ok(SaveOutcome::Duplicate);
        }

        let mut data = self.data.clone();
        let id = data.next_id;
        data.next_id += 1;
        data.songs.push(SongRecord {
            id,
            name,
            content: content.to_string(),
            capo: semitone_class(i64::from(capo)),
        });
        self.commit(data)?;

        tracing::info!("Saved song {}", id);
        Ok(SaveOutcome::Saved(id))
    }

    /// Remove a song. Returns whether anything was removed.
    pub fn delete_song(&mut self, id: u64) -> Result<bool> {
        if !self.data.songs.iter().any(|s| s.id == id) {
            return Ok(false);
        }
        let mut data = self.data.clone();
        data.songs.retain(|s| s.id != id);
        self.commit(data)?;
        tracing::info!("Deleted song {}", id);
        Ok(true)
    }

    /// All songs, newest first
    pub fn songs(&self) -> Vec<&SongRecord> {
        let mut songs: Vec<&SongRecord> = self.data.songs.iter().collect();
        songs.sort_by(|a, b| b.id.cmp(&a.id));
        songs
    }

    pub fn song(&self, id: u64) -> Result<&SongRecord> {
        self.data
            .songs
            .iter()
            .find(|s| s.id == id)
            .ok_or(ChordSheetError::SongNotFound(id))
    }

    pub fn is_empty(&self) -> bool {
        self.data.songs.is_empty()
    }

    /// Write `data` to the backing file, then make it the library state.
    /// On a failed write the library is left as it was.
    fn commit(&mut self, data: LibraryFile) -> Result<()> {
        if let Some(path) = &self.path {
            let yaml = serde_yaml::to_string(&data)
                .map_err(|e| ChordSheetError::Storage(e.to_string()))?;
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, yaml)?;
        }
        self.data = data;
        Ok(())
    }
}
