//! # makepub
//!
//! Assemble EPUB ebooks from metadata, HTML sections, images and a stylesheet.
//!
//! ## Features
//!
//! - Generates the container descriptor, OPF package, NCX navigation map,
//!   cover page, contents page and one page per section
//! - Front matter, sections hidden from the contents, custom contents pages
//! - `[[TITLE]]`-style metadata placeholders in any generated text or CSS
//! - Writes a valid `.epub` archive or a loose directory tree
//!
//! ## Quick Start
//!
//! ```no_run
//! use makepub::{Document, Metadata, Section};
//!
//! # async fn run() -> makepub::Result<()> {
//! let metadata = Metadata::new("My Book")
//!     .with_id("urn:isbn:9780000000000")
//!     .with_author("Author Name")
//!     .with_language("en")
//!     .with_cover("cover.png");
//!
//! let mut doc = Document::new(metadata)?;
//! doc.add_section(Section::new("Copyright", "<p>&copy; 2024</p>")
//!     .with_front_matter(true)
//!     .with_exclude_from_contents(true))?;
//! doc.add_section(Section::new("Chapter 1", "<h1>Chapter 1</h1><p>...</p>"))?;
//! doc.add_css("body { font-family: serif; }");
//!
//! doc.write_epub("out", "my-book").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Working with the file set
//!
//! [`Document::files`] returns the generated files without touching the
//! disk beyond reading images. The list is ordered: the first entry is the
//! `mimetype` file, which must stay first and uncompressed in any archive
//! built from it.

pub mod config;
pub mod epub;
pub mod error;
pub mod model;
pub(crate) mod util;

pub use config::EpubConfig;
pub use epub::{FileContent, FileDescriptor, Tags, write_epub_to_writer};
pub use error::{Error, Result};
pub use model::{AssetRef, ContentsCallback, Document, Metadata, NavItemType, NavLink, Section};
