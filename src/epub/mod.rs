//! EPUB generation and packaging.
//!
//! A build produces an ordered list of [`FileDescriptor`]s:
//!
//! 1. `mimetype` (stored, never compressed)
//! 2. `META-INF/container.xml`
//! 3. `OEBPS/ebook.opf` and `OEBPS/navigation.ncx`
//! 4. `OEBPS/cover.xhtml` and `OEBPS/css/ebook.css`
//! 5. one page per section, then the contents page, under `OEBPS/content`
//! 6. the cover and extra images under `OEBPS/images`
//!
//! The list can be written as a loose directory tree or packaged into a
//! single archive.

mod assets;
mod files;
mod markup;
mod structural;
mod tags;
mod writer;

pub use files::{FileContent, FileDescriptor, build_files};
pub use tags::Tags;
pub use writer::{write_epub, write_epub_to_writer, write_files};

pub const MIMETYPE: &str = "application/epub+zip";

pub(crate) const ROOT_FOLDER: &str = "OEBPS";
pub(crate) const CONTENT_FOLDER: &str = "OEBPS/content";
pub(crate) const CSS_FOLDER: &str = "OEBPS/css";
pub(crate) const IMAGES_FOLDER: &str = "OEBPS/images";

pub(crate) const PACKAGE_FILE: &str = "ebook.opf";
pub(crate) const NAVIGATION_FILE: &str = "navigation.ncx";
pub(crate) const COVER_FILE: &str = "cover.xhtml";
pub(crate) const CSS_FILE: &str = "ebook.css";
pub const CONTENTS_FILE: &str = "toc.xhtml";
