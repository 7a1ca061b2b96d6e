//! Build configuration.

/// Configuration for document validation and EPUB packaging.
#[derive(Debug, Clone, Default)]
pub struct EpubConfig {
    /// Compression level for deflate (0-9, default 6).
    pub compression_level: Option<i64>,
    /// If true, `genre` joins the required metadata fields.
    pub require_genre: bool,
}

impl EpubConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_compression_level(mut self, level: i64) -> Self {
        self.compression_level = Some(level);
        self
    }

    pub fn with_require_genre(mut self, require: bool) -> Self {
        self.require_genre = require;
        self
    }

    pub(crate) fn deflate_level(&self) -> i64 {
        self.compression_level.unwrap_or(6).clamp(0, 9)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deflate_level() {
        assert_eq!(EpubConfig::new().deflate_level(), 6);
        assert_eq!(EpubConfig::new().with_compression_level(3).deflate_level(), 3);
        assert_eq!(EpubConfig::new().with_compression_level(42).deflate_level(), 9);
        assert_eq!(EpubConfig::new().with_compression_level(-1).deflate_level(), 0);
    }
}
