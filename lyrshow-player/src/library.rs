//! Music library scanning and track resolution.

use crate::error::Result;
use lyrshow_core::fuzzy;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File extensions treated as playable audio
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "m4a", "ogg", "opus", "flac", "wav"];

/// A flat directory of audio files addressed by name
pub struct MusicLibrary {
    dir: PathBuf,
}

impl MusicLibrary {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// All audio files in the library, sorted by file name
    ///
    /// A missing library directory is an empty library, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing directory cannot be listed.
    pub fn tracks(&self) -> Result<Vec<PathBuf>> {
        let mut tracks = Vec::new();
        if !self.dir.exists() {
            return Ok(tracks);
        }
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.is_file() && has_audio_extension(&path) {
                tracks.push(path);
            }
        }
        tracks.sort();
        Ok(tracks)
    }

    /// Resolve a query to a playable track
    ///
    /// Tries a case-insensitive substring match over file stems first, then
    /// the best fuzzy match. Returns `Ok(None)` when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the library directory cannot be listed.
    pub fn resolve(&self, query: &str) -> Result<Option<PathBuf>> {
        let tracks = self.tracks()?;
        let needle = query.to_lowercase();

        for track in &tracks {
            if stem_of(track).to_lowercase().contains(&needle) {
                debug!("Resolved track {query:?} -> {}", track.display());
                return Ok(Some(track.clone()));
            }
        }

        let stems: Vec<String> = tracks.iter().map(|t| stem_of(t).to_string()).collect();
        let matches = fuzzy::search(query, &stems, fuzzy::DEFAULT_THRESHOLD);
        if let Some(best) = matches.first() {
            if let Some(position) = stems.iter().position(|stem| stem == &best.name) {
                let track = tracks[position].clone();
                debug!(
                    "Fuzzy-matched track {query:?} -> {} ({:.0}%)",
                    track.display(),
                    best.score * 100.0
                );
                return Ok(Some(track));
            }
        }
        Ok(None)
    }
}

fn stem_of(path: &Path) -> &str {
    path.file_stem().and_then(|s| s.to_str()).unwrap_or("")
}

fn has_audio_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| AUDIO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library(files: &[&str]) -> (tempfile::TempDir, MusicLibrary) {
        let dir = tempfile::tempdir().unwrap();
        for name in files {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        let library = MusicLibrary::new(dir.path());
        (dir, library)
    }

    fn names(tracks: &[PathBuf]) -> Vec<String> {
        tracks
            .iter()
            .map(|t| t.file_name().unwrap().to_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_tracks_filters_and_sorts() {
        let (_guard, library) = library(&["b.mp3", "a.flac", "notes.txt", "cover.jpg", "C.OGG"]);
        assert_eq!(names(&library.tracks().unwrap()), vec!["C.OGG", "a.flac", "b.mp3"]);
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let library = MusicLibrary::new("/definitely/not/here");
        assert!(library.tracks().unwrap().is_empty());
    }

    #[test]
    fn test_resolve_substring_case_insensitive() {
        let (_guard, library) = library(&["Queen - Bohemian Rhapsody.mp3", "other.mp3"]);
        let track = library.resolve("bohemian").unwrap().unwrap();
        assert!(track.ends_with("Queen - Bohemian Rhapsody.mp3"));
    }

    #[test]
    fn test_resolve_fuzzy_word_order() {
        let (_guard, library) = library(&["Bohemian Rhapsody.mp3"]);
        // Reversed word order defeats the substring pass but not the fuzzy one
        let track = library.resolve("rhapsody bohemian").unwrap().unwrap();
        assert!(track.ends_with("Bohemian Rhapsody.mp3"));
    }

    #[test]
    fn test_resolve_miss_is_none() {
        let (_guard, library) = library(&["Bohemian Rhapsody.mp3"]);
        assert!(library.resolve("stairway to heaven").unwrap().is_none());
    }

    #[test]
    fn test_resolve_ignores_non_audio_files() {
        let (_guard, library) = library(&["Bohemian Rhapsody.txt"]);
        assert!(library.resolve("bohemian").unwrap().is_none());
    }
}
