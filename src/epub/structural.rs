//! Container descriptor, package document and navigation map.

use tracing::warn;

use super::assets::DeclaredImage;
use super::tags::Tags;
use super::{CONTENTS_FILE, COVER_FILE, CSS_FILE, NAVIGATION_FILE, PACKAGE_FILE, ROOT_FOLDER};
use crate::model::{Document, NavItemType, NavLink, Section};
use crate::util::image_media_type;

/// A generated navigation map and the links it contains.
///
/// The links are handed to the contents page of the same build.
#[derive(Debug, Clone)]
pub(crate) struct NavMap {
    pub xml: String,
    pub links: Vec<NavLink>,
}

/// Generate `META-INF/container.xml`.
pub(crate) fn container_xml(tags: &Tags<'_>) -> String {
    let template = format!(
        r#"<?xml version='1.0' encoding='UTF-8' ?>
<container version='1.0' xmlns='urn:oasis:names:tc:opendocument:xmlns:container'>
  <rootfiles>
    <rootfile full-path='{ROOT_FOLDER}/{PACKAGE_FILE}' media-type='application/oebps-package+xml'/>
  </rootfiles>
</container>"#
    );
    tags.apply(&template)
}

/// Generate the OPF package document: metadata, manifest, spine and guide.
pub(crate) fn package_opf(doc: &Document, images: &[DeclaredImage<'_>], tags: &Tags<'_>) -> String {
    let meta = doc.metadata();
    let mut opf = String::new();

    opf.push_str(
        r#"<?xml version='1.0' encoding='utf-8'?>
<package xmlns='http://www.idpf.org/2007/opf' version='2.0' unique-identifier='BookId'>
  <metadata xmlns:dc='http://purl.org/dc/elements/1.1/' xmlns:opf='http://www.idpf.org/2007/opf'>
"#,
    );

    let title = match (meta.series(), meta.sequence()) {
        (Some(_), Some(_)) => "[[TITLE]] ([[SERIES]] #[[SEQUENCE]])",
        (Some(_), None) => "[[TITLE]] ([[SERIES]])",
        (None, Some(_)) => "[[TITLE]] (#[[SEQUENCE]])",
        (None, None) => "[[TITLE]]",
    };
    opf.push_str(&format!("    <dc:title>{title}</dc:title>\n"));

    opf.push_str(
        r#"    <dc:identifier id='BookId' opf:scheme='URI'>[[ID]]</dc:identifier>
    <dc:language>[[LANGUAGE]]</dc:language>
    <dc:creator opf:role='aut' opf:file-as='[[FILEAS]]'>[[AUTHOR]]</dc:creator>
    <dc:publisher>[[PUBLISHER]]</dc:publisher>
    <dc:description>[[DESCRIPTION]]</dc:description>
    <dc:coverage></dc:coverage>
    <dc:source>[[SOURCE]]</dc:source>
    <dc:date opf:event='publication'>[[PUBLISHED]]</dc:date>
    <dc:date opf:event='modification'>[[MODIFIED]]</dc:date>
    <dc:rights>[[COPYRIGHT]]</dc:rights>
"#,
    );

    if meta.genre().is_some() {
        opf.push_str("    <dc:subject>[[GENRE]]</dc:subject>\n");
    }
    for tag in meta.tag_list() {
        opf.push_str(&format!("    <dc:subject>{tag}</dc:subject>\n"));
    }

    if meta.series().is_some() && meta.sequence().is_some() {
        opf.push_str("    <meta name='calibre:series' content='[[SERIES]]'/>\n");
        opf.push_str("    <meta name='calibre:series_index' content='[[SEQUENCE]]'/>\n");
    }

    opf.push_str("    <meta name='cover' content='cover-image'/>\n");
    opf.push_str("  </metadata>\n  <manifest>\n");

    // Cover image first; it always has a known type (checked on creation).
    let (cover, extras) = match images.split_first() {
        Some((cover, extras)) => (Some(cover), extras),
        None => (None, images),
    };
    if let Some(cover) = cover {
        let media_type = image_media_type(&cover.name).unwrap_or_default();
        opf.push_str(&format!(
            "    <item id='cover-image' media-type='{}' href='images/{}'/>\n",
            media_type, cover.name
        ));
    }
    opf.push_str(&format!(
        "    <item id='cover' media-type='application/xhtml+xml' href='{COVER_FILE}'/>\n"
    ));
    opf.push_str(&format!(
        "    <item id='navigation' media-type='application/x-dtbncx+xml' href='{NAVIGATION_FILE}'/>\n"
    ));

    for (i, section) in doc.sections().iter().enumerate() {
        opf.push_str(&format!(
            "    <item id='s{}' media-type='application/xhtml+xml' href='content/{}'/>\n",
            i + 1,
            section.filename()
        ));
    }

    let show_contents = meta.show_contents;
    if show_contents {
        opf.push_str(&format!(
            "    <item id='toc' media-type='application/xhtml+xml' href='content/{CONTENTS_FILE}'/>\n"
        ));
    }
    opf.push_str(&format!(
        "    <item id='css' media-type='text/css' href='css/{CSS_FILE}'/>\n"
    ));

    for (i, image) in extras.iter().enumerate() {
        match image_media_type(&image.name) {
            Some(media_type) => opf.push_str(&format!(
                "    <item id='img{}' media-type='{}' href='images/{}'/>\n",
                i, media_type, image.name
            )),
            None => warn!(name = %image.name, "unsupported image type, not listed in manifest"),
        }
    }

    opf.push_str("  </manifest>\n");

    // Spine: cover, front matter, contents, everything else.
    opf.push_str("  <spine toc='navigation'>\n");
    opf.push_str("    <itemref idref='cover' linear='yes' />\n");
    for (i, _) in in_group(doc.sections(), true) {
        opf.push_str(&format!("    <itemref idref='s{i}' />\n"));
    }
    if show_contents {
        opf.push_str("    <itemref idref='toc'/>\n");
    }
    for (i, _) in in_group(doc.sections(), false) {
        opf.push_str(&format!("    <itemref idref='s{i}' />\n"));
    }
    opf.push_str("  </spine>\n");

    if show_contents {
        opf.push_str(&format!(
            r#"  <guide>
    <reference type='toc' title='[[CONTENTS]]' href='content/{CONTENTS_FILE}'></reference>
  </guide>
"#
        ));
    }

    opf.push_str("</package>\n");
    tags.apply(&opf)
}

/// Generate the NCX navigation map and collect its links.
///
/// Play order runs from 1: cover, front matter, contents page, then the
/// remaining sections. Sections excluded from contents get no entry.
pub(crate) fn navigation_ncx(doc: &Document, tags: &Tags<'_>) -> NavMap {
    let mut ncx = String::new();
    let mut links = Vec::new();
    let mut play_order = 1;

    ncx.push_str(
        r#"<?xml version='1.0' encoding='UTF-8'?>
<!DOCTYPE ncx PUBLIC '-//NISO//DTD ncx 2005-1//EN' 'http://www.daisy.org/z3986/2005/ncx-2005-1.dtd'>
<ncx xmlns='http://www.daisy.org/z3986/2005/ncx/'>
<head>
  <meta name='dtb:uid' content='[[ID]]'/>
  <meta name='dtb:depth' content='1'/>
  <meta name='dtb:totalPageCount' content='0'/>
  <meta name='dtb:maxPageNumber' content='0'/>
</head>
<docTitle><text>[[TITLE]]</text></docTitle>
<docAuthor><text>[[AUTHOR]]</text></docAuthor>
<navMap>
"#,
    );

    ncx.push_str(&format!(
        r#"  <navPoint id='cover' playOrder='{play_order}'>
    <navLabel><text>Cover</text></navLabel>
    <content src='{COVER_FILE}'/>
  </navPoint>
"#
    ));
    play_order += 1;

    section_points(&mut ncx, &mut links, doc.sections(), true, &mut play_order);

    if doc.metadata().show_contents {
        write_nav_point(
            &mut ncx,
            "toc",
            "toc",
            play_order,
            "[[CONTENTS]]",
            &format!("content/{CONTENTS_FILE}"),
        );
        links.push(NavLink::new(
            doc.metadata().contents_title(),
            CONTENTS_FILE,
            NavItemType::Contents,
        ));
        play_order += 1;
    }

    section_points(&mut ncx, &mut links, doc.sections(), false, &mut play_order);

    ncx.push_str("</navMap>\n</ncx>\n");
    NavMap {
        xml: tags.apply(&ncx),
        links,
    }
}

fn section_points(
    ncx: &mut String,
    links: &mut Vec<NavLink>,
    sections: &[Section],
    front: bool,
    play_order: &mut usize,
) {
    let item_type = if front {
        NavItemType::Front
    } else {
        NavItemType::Main
    };

    for (i, section) in in_group(sections, front) {
        if section.exclude_from_contents {
            continue;
        }
        write_nav_point(
            ncx,
            "section",
            &format!("s{i}"),
            *play_order,
            &section.title,
            &format!("content/{}", section.filename()),
        );
        links.push(NavLink::new(&section.title, section.filename(), item_type));
        *play_order += 1;
    }
}

fn write_nav_point(
    ncx: &mut String,
    class: &str,
    id: &str,
    play_order: usize,
    label: &str,
    src: &str,
) {
    ncx.push_str(&format!(
        r#"  <navPoint class='{class}' id='{id}' playOrder='{play_order}'>
    <navLabel><text>{label}</text></navLabel>
    <content src='{src}'/>
  </navPoint>
"#
    ));
}

/// Sections whose front-matter flag equals `front`, with their 1-based position.
fn in_group(sections: &[Section], front: bool) -> impl Iterator<Item = (usize, &Section)> {
    sections
        .iter()
        .enumerate()
        .filter(move |(_, s)| s.is_front_matter == front)
        .map(|(i, s)| (i + 1, s))
}
