//! File set assembly.

use chrono::NaiveDate;
use tracing::debug;

use super::tags::Tags;
use super::{
    CONTENT_FOLDER, CONTENTS_FILE, COVER_FILE, CSS_FILE, CSS_FOLDER, IMAGES_FOLDER, MIMETYPE,
    NAVIGATION_FILE, PACKAGE_FILE, ROOT_FOLDER, assets, markup, structural,
};
use crate::error::Result;
use crate::model::Document;

/// Content of a generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    Binary(Vec<u8>),
}

impl FileContent {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            FileContent::Text(text) => text.as_bytes(),
            FileContent::Binary(data) => data,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FileContent::Text(text) => Some(text),
            FileContent::Binary(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One file of the EPUB: where it goes, whether to compress it, and its bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    pub name: String,
    /// Folder relative to the container root; empty for the root itself.
    pub folder: String,
    pub compress: bool,
    pub content: FileContent,
}

impl FileDescriptor {
    fn text(name: &str, folder: &str, content: String) -> Self {
        Self {
            name: name.to_string(),
            folder: folder.to_string(),
            compress: true,
            content: FileContent::Text(content),
        }
    }

    /// Path inside the container, e.g. `OEBPS/content/s1.xhtml`.
    pub fn path(&self) -> String {
        if self.folder.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.folder, self.name)
        }
    }
}

/// Generate the complete, ordered file set for `doc`.
///
/// `modified` is the date written into the package metadata. All text files
/// are generated before any image is read; a failing image read aborts the
/// build.
pub async fn build_files(doc: &Document, modified: NaiveDate) -> Result<Vec<FileDescriptor>> {
    let tags = Tags::new(doc.metadata(), modified);
    let images = assets::declared_images(doc);

    let mut files = vec![
        FileDescriptor {
            name: "mimetype".to_string(),
            folder: String::new(),
            compress: false,
            content: FileContent::Text(MIMETYPE.to_string()),
        },
        FileDescriptor::text("container.xml", "META-INF", structural::container_xml(&tags)),
        FileDescriptor::text(
            PACKAGE_FILE,
            ROOT_FOLDER,
            structural::package_opf(doc, &images, &tags),
        ),
    ];

    // The navigation map must be generated before the contents page that
    // lists its links.
    let nav = structural::navigation_ncx(doc, &tags);
    files.push(FileDescriptor::text(NAVIGATION_FILE, ROOT_FOLDER, nav.xml));
    files.push(FileDescriptor::text(
        COVER_FILE,
        ROOT_FOLDER,
        markup::cover_page(doc, &tags),
    ));
    files.push(FileDescriptor::text(
        CSS_FILE,
        CSS_FOLDER,
        markup::stylesheet(doc, &tags),
    ));

    for (i, section) in doc.sections().iter().enumerate() {
        files.push(FileDescriptor::text(
            section.filename(),
            CONTENT_FOLDER,
            markup::section_page(doc, i, &tags),
        ));
    }

    if doc.metadata().show_contents {
        files.push(FileDescriptor::text(
            CONTENTS_FILE,
            CONTENT_FOLDER,
            markup::contents_page(doc, &nav.links, &tags),
        ));
    }

    for image in &images {
        let data = assets::load(image.asset).await?;
        files.push(FileDescriptor {
            name: image.name.clone(),
            folder: IMAGES_FOLDER.to_string(),
            compress: true,
            content: FileContent::Binary(data),
        });
    }

    debug!(
        files = files.len(),
        sections = doc.section_count(),
        images = images.len(),
        "generated file set"
    );
    Ok(files)
}
