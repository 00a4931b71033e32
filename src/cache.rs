//! Content-addressed audio cache
//!
//! Synthesized audio is stored as `<md5 hex>.mp3` under a per-user cache
//! directory. The key covers the text plus the voice settings, so the same
//! phrase in a different voice or model is a different entry. Existence of
//! the file is the only metadata; entries are never updated or evicted.

use std::path::{Path, PathBuf};

use crate::synth::{Model, Voice};
use crate::Result;

/// Audio file extension for cache entries
const AUDIO_EXT: &str = "mp3";

/// On-disk cache of synthesized audio, keyed by content hash
#[derive(Debug, Clone)]
pub struct AudioCache {
    dir: PathBuf,
}

impl AudioCache {
    /// Create a cache rooted at `dir`
    ///
    /// The directory is not touched until [`ensure`](Self::ensure) is called.
    #[must_use]
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Default per-user cache directory
    #[must_use]
    pub fn default_dir() -> PathBuf {
        directories::BaseDirs::new().map_or_else(
            || PathBuf::from(".cache").join("announce"),
            |d| d.cache_dir().join("announce"),
        )
    }

    /// Cache directory path
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the cache directory if absent
    ///
    /// Idempotent; an existing directory is not an error.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created.
    pub fn ensure(&self) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    /// Derive the cache key for a request
    ///
    /// `md5("{text}:{voice}:{model}")` as 32 lowercase hex characters.
    /// Identical inputs always produce the same key.
    #[must_use]
    pub fn key(text: &str, voice: Voice, model: Model) -> String {
        let content = format!("{text}:{voice}:{model}");
        format!("{:x}", md5::compute(content.as_bytes()))
    }

    /// Path of the cache entry for a request
    #[must_use]
    pub fn path_for(&self, text: &str, voice: Voice, model: Model) -> PathBuf {
        self.dir
            .join(format!("{}.{AUDIO_EXT}", Self::key(text, voice, model)))
    }

    /// Whether a cache entry exists for a request
    #[must_use]
    pub fn contains(&self, text: &str, voice: Voice, model: Model) -> bool {
        self.path_for(text, voice, model).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_deterministic() {
        let a = AudioCache::key("Build finished", Voice::Alloy, Model::Tts1);
        let b = AudioCache::key("Build finished", Voice::Alloy, Model::Tts1);
        assert_eq!(a, b);
    }

    #[test]
    fn test_key_known_digest() {
        let key = AudioCache::key("Done", Voice::Alloy, Model::Tts1);
        assert_eq!(key, "a8aebbaeae65cf87eee060f8d19c68d6");
    }

    #[test]
    fn test_key_differs_per_field() {
        let base = AudioCache::key("hello", Voice::Alloy, Model::Tts1);
        assert_ne!(base, AudioCache::key("hello!", Voice::Alloy, Model::Tts1));
        assert_ne!(base, AudioCache::key("hello", Voice::Echo, Model::Tts1));
        assert_ne!(base, AudioCache::key("hello", Voice::Alloy, Model::Tts1Hd));
    }

    #[test]
    fn test_key_shape() {
        let key = AudioCache::key("hello", Voice::Nova, Model::Tts1Hd);
        assert_eq!(key.len(), 32);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_path_layout() {
        let cache = AudioCache::new(PathBuf::from("/tmp/announce-test"));
        let path = cache.path_for("Done", Voice::Alloy, Model::Tts1);
        assert_eq!(
            path,
            PathBuf::from("/tmp/announce-test/a8aebbaeae65cf87eee060f8d19c68d6.mp3")
        );
    }

    #[test]
    fn test_ensure_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = AudioCache::new(tmp.path().join("nested").join("cache"));
        cache.ensure().unwrap();
        cache.ensure().unwrap();
        assert!(cache.dir().is_dir());
    }
}
