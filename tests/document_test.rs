//! File set generation tests.

mod common;

use std::fs;

use makepub::{AssetRef, Document, Error, FileContent, NavItemType, Section};
use tempfile::TempDir;

use common::{LIPSUM, build_date, find, nav_points, spine_idrefs, text_of, valid_metadata};

fn document() -> Document {
    Document::new(valid_metadata()).expect("valid metadata")
}

#[tokio::test]
async fn test_mimetype_first_and_uncompressed() {
    let mut doc = document();
    doc.add_section(Section::new("One", LIPSUM)).unwrap();
    let files = doc.files().await.unwrap();

    let first = &files[0];
    assert_eq!(first.name, "mimetype");
    assert_eq!(first.folder, "");
    assert!(!first.compress);
    assert_eq!(first.content, FileContent::Text("application/epub+zip".to_string()));

    assert!(files[1..].iter().all(|f| f.compress));
    assert_eq!(find(&files, "mimetype").len(), 1);
}

#[tokio::test]
async fn test_descriptor_count() {
    let mut doc = document();
    for i in 0..4 {
        doc.add_section(Section::new(format!("Chapter {i}"), LIPSUM))
            .unwrap();
    }
    let files = doc.files().await.unwrap();

    // mimetype, container, opf, ncx, cover page, css, contents, cover image
    assert_eq!(files.len(), 4 + 8);
    let paths: Vec<_> = files.iter().map(|f| f.path()).collect();
    assert_eq!(
        paths,
        vec![
            "mimetype",
            "META-INF/container.xml",
            "OEBPS/ebook.opf",
            "OEBPS/navigation.ncx",
            "OEBPS/cover.xhtml",
            "OEBPS/css/ebook.css",
            "OEBPS/content/s1.xhtml",
            "OEBPS/content/s2.xhtml",
            "OEBPS/content/s3.xhtml",
            "OEBPS/content/s4.xhtml",
            "OEBPS/content/toc.xhtml",
            "OEBPS/images/test-cover.png",
        ]
    );
}

#[tokio::test]
async fn test_no_contents_page_when_hidden() {
    let mut doc = Document::new(valid_metadata().with_show_contents(false)).unwrap();
    doc.add_section(Section::new("One", LIPSUM)).unwrap();
    let files = doc.files().await.unwrap();

    assert!(find(&files, "toc.xhtml").is_empty());
    assert_eq!(files.len(), 1 + 7);
    assert!(!spine_idrefs(text_of(&files, "ebook.opf")).contains(&"toc".to_string()));
}

#[tokio::test]
async fn test_repeated_builds_match() {
    let mut doc = document();
    doc.add_section(Section::new("One", LIPSUM)).unwrap();
    doc.add_section(Section::new("Two", LIPSUM).with_front_matter(true))
        .unwrap();

    let first = doc.files_at(build_date()).await.unwrap();
    let second = doc.files_at(build_date()).await.unwrap();
    assert_eq!(first, second);

    let today = doc.files().await.unwrap();
    let shape = |files: &[makepub::FileDescriptor]| {
        files
            .iter()
            .map(|f| (f.name.clone(), f.folder.clone(), f.compress))
            .collect::<Vec<_>>()
    };
    assert_eq!(shape(&first), shape(&today));

    // Navigation links are not accumulated across builds.
    assert_eq!(nav_points(text_of(&second, "navigation.ncx")).len(), 4);
}

#[tokio::test]
async fn test_title_with_series_and_sequence() {
    let meta = valid_metadata().with_series("S").with_sequence(2);
    let mut meta = meta;
    meta.title = "T".to_string();
    let doc = Document::new(meta).unwrap();
    let files = doc.files().await.unwrap();

    assert!(text_of(&files, "ebook.opf").contains("<dc:title>T (S #2)</dc:title>"));
}

#[tokio::test]
async fn test_excluded_front_matter() {
    let mut doc = document();
    doc.add_section(
        Section::new("Copyright", "<p>Copyright 1980</p>")
            .with_exclude_from_contents(true)
            .with_front_matter(true),
    )
    .unwrap();
    doc.add_section(Section::new("Chapter One", LIPSUM)).unwrap();
    let files = doc.files().await.unwrap();

    let ncx = text_of(&files, "navigation.ncx");
    let contents = text_of(&files, "toc.xhtml");
    assert!(!ncx.contains("Copyright"));
    assert!(!contents.contains("Copyright"));
    assert!(contents.contains("<a href='s2.xhtml'>Chapter One</a>"));

    let spine = spine_idrefs(text_of(&files, "ebook.opf"));
    assert_eq!(spine, vec!["cover", "s1", "toc", "s2"]);
    assert_eq!(find(&files, "s1.xhtml").len(), 1);
}

#[tokio::test]
async fn test_duplicate_image_paths() {
    let dir = TempDir::new().unwrap();
    let hat = dir.path().join("hat.png");
    fs::write(&hat, common::PNG).unwrap();

    let meta = valid_metadata().with_image(hat.as_path()).with_image(hat.as_path());
    let doc = Document::new(meta).unwrap();
    let files = doc.files().await.unwrap();

    let found = find(&files, "hat.png");
    assert_eq!(found.len(), 1, "should be only 1 instance of an image");
    assert_eq!(found[0].folder, "OEBPS/images");
    assert_eq!(found[0].content.as_bytes(), common::PNG);
    assert_eq!(text_of(&files, "ebook.opf").matches("images/hat.png").count(), 1);
}

#[tokio::test]
async fn test_missing_cover_fails_construction() {
    let mut meta = valid_metadata();
    meta.cover = None;
    let err = Document::new(meta).unwrap_err();

    assert!(matches!(err, Error::MissingMetadata("cover")));
    assert!(err.to_string().contains("cover"));
}

#[tokio::test]
async fn test_cover_from_disk() {
    let dir = TempDir::new().unwrap();
    let cover = dir.path().join("front.jpg");
    fs::write(&cover, b"\xff\xd8\xff").unwrap();

    let doc = Document::new(valid_metadata().with_cover(cover.as_path())).unwrap();
    let files = doc.files().await.unwrap();

    assert_eq!(find(&files, "front.jpg")[0].content.as_bytes(), b"\xff\xd8\xff");
    assert!(text_of(&files, "cover.xhtml").contains("src='images/front.jpg'"));
    assert!(text_of(&files, "ebook.opf").contains("media-type='image/jpeg' href='images/front.jpg'"));
}

#[tokio::test]
async fn test_missing_image_aborts_build() {
    let meta = valid_metadata().with_image("does/not/exist.png");
    let doc = Document::new(meta).unwrap();

    let err = doc.files().await.unwrap_err();
    assert!(matches!(err, Error::AssetLoad { .. }));
    assert!(err.to_string().contains("exist.png"));
}

#[tokio::test]
async fn test_unsupported_image_type() {
    let meta = valid_metadata().with_image(AssetRef::loaded("notes.txt", b"hi".to_vec()));
    let doc = Document::new(meta).unwrap();
    let files = doc.files().await.unwrap();

    // Packaged, but not declared in the manifest.
    assert_eq!(find(&files, "notes.txt").len(), 1);
    assert!(!text_of(&files, "ebook.opf").contains("notes.txt"));
}

#[tokio::test]
async fn test_sections_added_after_build() {
    let mut doc = document();
    doc.add_section(Section::new("One", LIPSUM)).unwrap();
    let before = doc.files().await.unwrap();

    doc.add_section(Section::new("Two", LIPSUM)).unwrap();
    let after = doc.files().await.unwrap();

    assert_eq!(after.len(), before.len() + 1);
    assert!(find(&before, "s2.xhtml").is_empty());
    assert_eq!(find(&after, "s2.xhtml").len(), 1);
}

#[tokio::test]
async fn test_override_filenames() {
    let mut doc = document();
    doc.add_section(Section::new("Title Page", "<h1>T</h1>").with_filename("title-page"))
        .unwrap();
    doc.add_section(Section::new("One", LIPSUM)).unwrap();
    let files = doc.files().await.unwrap();

    let opf = text_of(&files, "ebook.opf");
    assert!(opf.contains("<item id='s1' media-type='application/xhtml+xml' href='content/title-page.xhtml'/>"));
    assert!(opf.contains("href='content/s2.xhtml'"));
    assert!(text_of(&files, "toc.xhtml").contains("<a href='title-page.xhtml'>Title Page</a>"));
    assert!(text_of(&files, "navigation.ncx").contains("<content src='content/title-page.xhtml'/>"));
}

#[tokio::test]
async fn test_contents_callback_receives_nav_links() {
    let doc = Document::new(valid_metadata()).unwrap().with_contents(|links| {
        let mut body = String::from("<ol>");
        for link in links {
            let kind = match link.item_type {
                NavItemType::Front => "front",
                NavItemType::Contents => "contents",
                NavItemType::Main => "main",
            };
            body.push_str(&format!("<li class='{kind}'><a href='{}'>{}</a></li>", link.link, link.title));
        }
        body.push_str("</ol>");
        body
    });
    let mut doc = doc;
    doc.add_section(Section::new("Preface", "<p>p</p>").with_front_matter(true))
        .unwrap();
    doc.add_section(Section::new("Hidden", "<p>h</p>").with_exclude_from_contents(true))
        .unwrap();
    doc.add_section(Section::new("One", LIPSUM)).unwrap();

    let files = doc.files().await.unwrap();
    let contents = text_of(&files, "toc.xhtml");

    assert!(contents.contains(
        "<ol><li class='front'><a href='s1.xhtml'>Preface</a></li>\
         <li class='contents'><a href='toc.xhtml'>Contents</a></li>\
         <li class='main'><a href='s3.xhtml'>One</a></li></ol>"
    ));
    assert!(!contents.contains("Hidden"));
}

#[tokio::test]
async fn test_css_passthrough() {
    let mut doc = document();
    doc.add_css("body { font-family: serif; }\n/* [[TITLE]] by [[AUTHOR]] */");
    let files = doc.files().await.unwrap();

    let css = find(&files, "ebook.css");
    assert_eq!(css[0].folder, "OEBPS/css");
    assert_eq!(
        css[0].content.as_text(),
        Some("body { font-family: serif; }\n/* Test Document by Nodepub */")
    );
}

#[tokio::test]
async fn test_package_metadata() {
    let doc = document();
    let files = doc.files_at(build_date()).await.unwrap();
    let opf = text_of(&files, "ebook.opf");

    assert!(opf.contains("<dc:identifier id='BookId' opf:scheme='URI'>urn:test:1234</dc:identifier>"));
    assert!(opf.contains("<dc:creator opf:role='aut' opf:file-as='Nodepub'>Nodepub</dc:creator>"));
    assert!(opf.contains("<dc:date opf:event='publication'>2000-12-31</dc:date>"));
    assert!(opf.contains("<dc:date opf:event='modification'>2024-05-17</dc:date>"));
    assert!(opf.contains("<dc:subject>Non-Fiction</dc:subject>"));
    assert_eq!(opf.matches("<dc:subject>").count(), 4);
    assert!(opf.contains("<meta name='calibre:series_index' content='1'/>"));
    assert!(!opf.contains("[["));
}
