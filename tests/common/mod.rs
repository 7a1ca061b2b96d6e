//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use makepub::{AssetRef, FileDescriptor, Metadata};

pub const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

pub const LIPSUM: &str = "<h1>Chapter Title Goes Here</h1>\n<p><em>Lorem ipsum dolor sit amet.</em></p>\n\n<p>Duis efficitur, arcu vitae viverra consectetur.</p>";

/// Metadata with every field filled in and an in-memory cover.
pub fn valid_metadata() -> Metadata {
    Metadata::new("Test Document")
        .with_id("urn:test:1234")
        .with_author("Nodepub")
        .with_file_as("Nodepub")
        .with_series("My Series")
        .with_sequence(1)
        .with_genre("Non-Fiction")
        .with_tags("Sample,Example,Test")
        .with_copyright("Nodepub, 1980")
        .with_publisher("My Fake Publisher")
        .with_published("2000-12-31")
        .with_language("en")
        .with_description("A test book.")
        .with_contents_title("Contents")
        .with_source("http://www.kcartlidge.com")
        .with_cover(AssetRef::loaded("test-cover.png", PNG))
}

pub fn build_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 17).unwrap()
}

pub fn find<'a>(files: &'a [FileDescriptor], name: &str) -> Vec<&'a FileDescriptor> {
    files.iter().filter(|f| f.name == name).collect()
}

pub fn text_of<'a>(files: &'a [FileDescriptor], name: &str) -> &'a str {
    files
        .iter()
        .find(|f| f.name == name)
        .and_then(|f| f.content.as_text())
        .unwrap_or_else(|| panic!("no text file named {name}"))
}

fn attr(e: &BytesStart<'_>, name: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.as_ref() == name)
        .map(|a| String::from_utf8_lossy(&a.value).into_owned())
}

/// `idref`s of the spine, in order.
pub fn spine_idrefs(opf: &str) -> Vec<String> {
    let mut reader = Reader::from_str(opf);
    let mut refs = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Empty(e)) | Ok(Event::Start(e)) if e.name().as_ref() == b"itemref" => {
                refs.extend(attr(&e, b"idref"));
            }
            Ok(Event::Eof) => break,
            Err(e) => panic!("invalid OPF: {e}"),
            _ => {}
        }
    }
    refs
}

/// `(id, playOrder)` of every navPoint, in document order.
pub fn nav_points(ncx: &str) -> Vec<(String, usize)> {
    let mut reader = Reader::from_str(ncx);
    let mut points = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"navPoint" => {
                let id = attr(&e, b"id").unwrap_or_default();
                let order = attr(&e, b"playOrder")
                    .and_then(|o| o.parse().ok())
                    .unwrap_or(0);
                points.push((id, order));
            }
            Ok(Event::Eof) => break,
            Err(e) => panic!("invalid NCX: {e}"),
            _ => {}
        }
    }
    points
}
