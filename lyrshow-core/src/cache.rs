use crate::error::{CoreError, Result};
use crate::fuzzy;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File extension used for cached lyrics
pub const LYRICS_EXTENSION: &str = "lrc";

/// Directory-backed lyrics store: one `.lrc` file per song title
///
/// Titles are sanitized into file names by replacing path separators with
/// `-`, so `AC/DC - Thunderstruck` and `AC-DC - Thunderstruck` share an
/// entry. Lookups that miss on the exact key fall back to fuzzy matching
/// over every stored title.
pub struct LyricsCache {
    dir: PathBuf,
}

impl LyricsCache {
    /// Open the cache at the default location, creating it if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the cache directory cannot be created.
    pub fn new() -> Result<Self> {
        Self::open(crate::paths::lyrics_cache_dir())
    }

    /// Open a cache rooted at `dir`, creating it if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the cache directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        info!("Lyrics cache at {}", dir.display());
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Sanitize a title into its cache key
    #[must_use]
    pub fn key_for(title: &str) -> String {
        title.trim().replace(['/', '\\'], "-")
    }

    /// Store lyrics content under `title`, returning the written path
    ///
    /// # Errors
    ///
    /// Returns an error if the title sanitizes to an empty key or the file
    /// cannot be written.
    pub fn store(&self, title: &str, content: &str) -> Result<PathBuf> {
        let key = Self::key_for(title);
        if key.is_empty() {
            return Err(CoreError::EmptyCacheKey {
                title: title.to_string(),
            });
        }
        let path = self.path_for_key(&key);
        fs::write(&path, content)?;
        debug!("Stored lyrics for {key:?} at {}", path.display());
        Ok(path)
    }

    /// Whether lyrics are stored under exactly this title
    #[must_use]
    pub fn contains(&self, title: &str) -> bool {
        self.path_for_key(&Self::key_for(title)).exists()
    }

    /// Load the lyrics stored under `title`, if any
    ///
    /// # Errors
    ///
    /// Returns an error if an existing entry cannot be read.
    pub fn load(&self, title: &str) -> Result<Option<String>> {
        let path = self.path_for_key(&Self::key_for(title));
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    /// All stored titles, sorted
    ///
    /// # Errors
    ///
    /// Returns an error if the cache directory cannot be listed.
    pub fn titles(&self) -> Result<Vec<String>> {
        let mut titles = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) == Some(LYRICS_EXTENSION) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    titles.push(stem.to_string());
                }
            }
        }
        titles.sort();
        Ok(titles)
    }

    /// Resolve a possibly-partial title to `(stored title, content)`
    ///
    /// Tries the exact key first, then the best fuzzy match over all stored
    /// titles. Returns `Ok(None)` when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache directory or a matched entry cannot be
    /// read.
    pub fn resolve(&self, query: &str) -> Result<Option<(String, String)>> {
        if let Some(content) = self.load(query)? {
            return Ok(Some((Self::key_for(query), content)));
        }

        let titles = self.titles()?;
        let matches = fuzzy::search(query, &titles, fuzzy::DEFAULT_THRESHOLD);
        let Some(best) = matches.first() else {
            return Ok(None);
        };
        debug!(
            "Fuzzy-matched lyrics {query:?} -> {:?} ({:.0}%)",
            best.name,
            best.score * 100.0
        );
        Ok(self.load(&best.name)?.map(|content| (best.name.clone(), content)))
    }

    fn path_for_key(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.{LYRICS_EXTENSION}"))
    }
}
