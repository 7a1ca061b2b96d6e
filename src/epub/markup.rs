//! XHTML pages and the stylesheet.

use super::tags::Tags;
use super::CSS_FILE;
use crate::model::{Document, NavItemType, NavLink};

/// Generate the cover page wrapping the cover image.
pub(crate) fn cover_page(doc: &Document, tags: &Tags<'_>) -> String {
    let cover = doc.cover().file_name();
    let page = format!(
        r#"<?xml version='1.0' encoding='UTF-8' ?>
<!DOCTYPE html PUBLIC '-//W3C//DTD XHTML 1.1//EN'  'http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd'>
<html xmlns='http://www.w3.org/1999/xhtml' xml:lang='en'>
<head>
  <title>[[TITLE]]</title>
  <style type='text/css'>
    body {{ margin: 0; padding: 0; text-align: center; }}
    .cover {{ margin: 0; padding: 0; font-size: 1px; }}
    img {{ margin: 0; padding: 0; height: 100%; }}
  </style>
</head>
<body>
  <div class='cover'><img style='height: 100%;width: 100%;' src='images/{cover}' alt='Cover' /></div>
</body>
</html>
"#
    );
    tags.apply(&page)
}

/// Generate the contents page.
///
/// The body comes from the document's contents callback when one is set,
/// otherwise it is a list of links to every listed section.
pub(crate) fn contents_page(doc: &Document, links: &[NavLink], tags: &Tags<'_>) -> String {
    let mut page = format!(
        r#"<?xml version='1.0' encoding='utf-8'?>
<!DOCTYPE html PUBLIC '-//W3C//DTD XHTML 1.1//EN' 'http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd' >
<html xmlns='http://www.w3.org/1999/xhtml'>
  <head>
    <title>[[CONTENTS]]</title>
    <link rel='stylesheet' type='text/css' href='../css/{CSS_FILE}' />
  </head>
  <body>
"#
    );

    match doc.contents_callback() {
        Some(callback) => page.push_str(&callback(links)),
        None => page.push_str(&default_contents(links)),
    }

    page.push_str("  </body>\n</html>\n");
    tags.apply(&page)
}

fn default_contents(links: &[NavLink]) -> String {
    let mut body = String::from("    <div class='contents'>\n      <h1>[[CONTENTS]]</h1>\n");
    for link in links.iter().filter(|l| l.item_type != NavItemType::Contents) {
        body.push_str(&format!(
            "      <a href='{}'>{}</a><br/>\n",
            link.link, link.title
        ));
    }
    body.push_str("    </div>\n");
    body
}

/// Generate the page for the section at `index` (0-based).
///
/// Content is copied line by line; empty lines are dropped.
pub(crate) fn section_page(doc: &Document, index: usize, tags: &Tags<'_>) -> String {
    let section = &doc.sections()[index];
    let mut page = format!(
        r#"<?xml version='1.0' encoding='utf-8'?>
<!DOCTYPE html PUBLIC '-//W3C//DTD XHTML 1.1//EN' 'http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd'>
<html xmlns='http://www.w3.org/1999/xhtml'>
  <head profile='http://dublincore.org/documents/dcmi-terms/'>
    <meta http-equiv='Content-Type' content='text/html;' />
    <title>[[TITLE]] - {title}</title>
    <meta name='DCTERMS.title' content='[[TITLE]]' />
    <meta name='DCTERMS.language' content='[[LANGUAGE]]' scheme='DCTERMS.RFC4646' />
    <meta name='DCTERMS.source' content='[[SOURCE]]' />
    <meta name='DCTERMS.issued' content='[[PUBLISHED]]' scheme='DCTERMS.W3CDTF'/>
    <meta name='DCTERMS.creator' content='[[AUTHOR]]'/>
    <meta name='DCTERMS.contributor' content='' />
    <meta name='DCTERMS.modified' content='[[MODIFIED]]' scheme='DCTERMS.W3CDTF'/>
    <meta name='DCTERMS.provenance' content='' />
    <meta name='DCTERMS.subject' content='[[GENRE]]' />
    <link rel='schema.DC' href='http://purl.org/dc/elements/1.1/' hreflang='en' />
    <link rel='schema.DCTERMS' href='http://purl.org/dc/terms/' hreflang='en' />
    <link rel='schema.DCTYPE' href='http://purl.org/dc/dcmitype/' hreflang='en' />
    <link rel='schema.DCAM' href='http://purl.org/dc/dcam/' hreflang='en' />
    <link rel='stylesheet' type='text/css' href='../css/{CSS_FILE}' />
  </head>
  <body>
    <div id='s{number}'></div>
    <div>
"#,
        title = section.title,
        number = index + 1,
    );

    for line in section.content.split('\n').filter(|l| !l.is_empty()) {
        page.push_str(line);
        page.push_str("[[EOL]]");
    }

    page.push_str("    </div>\n  </body>\n</html>\n");
    tags.apply(&page)
}

/// The shared stylesheet, with tokens substituted.
pub(crate) fn stylesheet(doc: &Document, tags: &Tags<'_>) -> String {
    tags.apply(doc.css())
}
