use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::debug;

use super::{AssetRef, Metadata, NavLink, Section};
use crate::config::EpubConfig;
use crate::epub::{self, CONTENTS_FILE, FileDescriptor};
use crate::error::{Error, Result};
use crate::util::{image_media_type, sanitize_filename, today};

/// Builds the contents page body from the navigation links.
pub type ContentsCallback = Box<dyn Fn(&[NavLink]) -> String + Send + Sync>;

/// An ebook under construction.
///
/// Metadata is validated once, when the document is created. Sections and
/// the stylesheet can be added at any time; every call to [`files`]
/// generates a fresh, independent file set from the current state.
///
/// [`files`]: Document::files
pub struct Document {
    metadata: Metadata,
    cover: AssetRef,
    config: EpubConfig,
    sections: Vec<Section>,
    css: String,
    contents_callback: Option<ContentsCallback>,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("metadata", &self.metadata)
            .field("config", &self.config)
            .field("sections", &self.sections)
            .field("css", &self.css)
            .field("contents_callback", &self.contents_callback.is_some())
            .finish()
    }
}

impl Document {
    /// Create a document with the default configuration.
    ///
    /// Fails if a required metadata field is blank or the cover cannot be
    /// resolved.
    pub fn new(metadata: Metadata) -> Result<Self> {
        Self::with_config(metadata, EpubConfig::default())
    }

    pub fn with_config(metadata: Metadata, config: EpubConfig) -> Result<Self> {
        let cover = validate(&metadata, &config)?;
        Ok(Self {
            metadata,
            cover,
            config,
            sections: Vec::new(),
            css: String::new(),
            contents_callback: None,
        })
    }

    /// Supply the body of the contents page instead of the generated list.
    pub fn with_contents<F>(mut self, callback: F) -> Self
    where
        F: Fn(&[NavLink]) -> String + Send + Sync + 'static,
    {
        self.contents_callback = Some(Box::new(callback));
        self
    }

    /// Append a section.
    ///
    /// The filename is the sanitized override if one was given, otherwise
    /// `s<N>` where `N` is the section's 1-based position at this call.
    pub fn add_section(&mut self, mut section: Section) -> Result<()> {
        let ordinal = self.sections.len() + 1;
        let stem = section
            .requested_filename
            .as_deref()
            .and_then(sanitize_filename)
            .unwrap_or_else(|| format!("s{ordinal}"));
        let filename = format!("{stem}.xhtml");

        if filename == CONTENTS_FILE || self.sections.iter().any(|s| s.filename == filename) {
            return Err(Error::DuplicateFilename(filename));
        }

        debug!(ordinal, %filename, "added section");
        section.filename = filename;
        self.sections.push(section);
        Ok(())
    }

    /// Set the shared stylesheet, replacing any previous one.
    pub fn add_css(&mut self, css: impl Into<String>) {
        self.css = css.into();
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn config(&self) -> &EpubConfig {
        &self.config
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    pub(crate) fn contents_callback(&self) -> Option<&ContentsCallback> {
        self.contents_callback.as_ref()
    }

    pub fn cover(&self) -> &AssetRef {
        &self.cover
    }

    /// Generate every file of the EPUB, stamped with today's date.
    ///
    /// The first entry is always the uncompressed `mimetype`; anything
    /// composing an archive from this list must keep its order and each
    /// entry's compression flag.
    pub async fn files(&self) -> Result<Vec<FileDescriptor>> {
        self.files_at(today()).await
    }

    /// Like [`files`](Document::files) with an explicit modification date.
    pub async fn files_at(&self, modified: NaiveDate) -> Result<Vec<FileDescriptor>> {
        epub::build_files(self, modified).await
    }

    /// Write the generated files as a directory tree under `folder`.
    pub async fn write_files(&self, folder: impl AsRef<Path>) -> Result<()> {
        let files = self.files().await?;
        epub::write_files(&files, folder.as_ref()).await
    }

    /// Write `folder/<filename>.epub` and return its path.
    pub async fn write_epub(&self, folder: impl AsRef<Path>, filename: &str) -> Result<PathBuf> {
        let files = self.files().await?;
        epub::write_epub(files, folder.as_ref(), filename, &self.config).await
    }
}

fn validate(metadata: &Metadata, config: &EpubConfig) -> Result<AssetRef> {
    let required = [
        ("id", metadata.id.as_str()),
        ("title", metadata.title.as_str()),
        ("author", metadata.author.as_str()),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(Error::MissingMetadata(field));
        }
    }

    let cover = metadata
        .cover
        .as_ref()
        .filter(|c| matches!(c, AssetRef::Loaded { .. }) || !c.is_blank())
        .ok_or(Error::MissingMetadata("cover"))?;

    if config.require_genre && metadata.genre().is_none() {
        return Err(Error::MissingMetadata("genre"));
    }

    check_cover(cover)?;
    Ok(cover.clone())
}

fn check_cover(cover: &AssetRef) -> Result<()> {
    let name = cover.file_name();
    if name.trim().is_empty() {
        return Err(Error::InvalidCover(format!(
            "{:?} has no file name",
            cover.declared()
        )));
    }
    if image_media_type(&name).is_none() {
        return Err(Error::InvalidCover(format!("{name} is not a supported image type")));
    }
    if let AssetRef::Path(path) = cover
        && !path.is_file()
    {
        return Err(Error::InvalidCover(format!("{} is not a file", path.display())));
    }
    Ok(())
}
