//! Property tests for reading order and navigation order.

mod common;

use makepub::{Document, Section};
use proptest::prelude::*;

use common::{build_date, nav_points, spine_idrefs, text_of, valid_metadata};

#[derive(Debug, Clone)]
struct Flags {
    front_matter: bool,
    excluded: bool,
}

fn flags() -> impl Strategy<Value = Flags> {
    (any::<bool>(), any::<bool>()).prop_map(|(front_matter, excluded)| Flags {
        front_matter,
        excluded,
    })
}

fn build(sections: &[Flags], show_contents: bool) -> (String, String) {
    let mut doc = Document::new(valid_metadata().with_show_contents(show_contents)).unwrap();
    for (i, f) in sections.iter().enumerate() {
        doc.add_section(
            Section::new(format!("Section {}", i + 1), "<p>text</p>")
                .with_front_matter(f.front_matter)
                .with_exclude_from_contents(f.excluded),
        )
        .unwrap();
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    let files = runtime.block_on(doc.files_at(build_date())).unwrap();
    (
        text_of(&files, "ebook.opf").to_string(),
        text_of(&files, "navigation.ncx").to_string(),
    )
}

/// Expected ids: cover, front matter, contents, the rest.
fn expected_order(sections: &[Flags], show_contents: bool, skip_excluded: bool) -> Vec<String> {
    let ids = |front: bool| {
        sections
            .iter()
            .enumerate()
            .filter(move |(_, f)| f.front_matter == front && !(skip_excluded && f.excluded))
            .map(|(i, _)| format!("s{}", i + 1))
    };

    let mut order = vec!["cover".to_string()];
    order.extend(ids(true));
    if show_contents {
        order.push("toc".to_string());
    }
    order.extend(ids(false));
    order
}

proptest! {
    #[test]
    fn play_order_is_consecutive_from_one(
        sections in prop::collection::vec(flags(), 0..12),
        show_contents in any::<bool>(),
    ) {
        let (_, ncx) = build(&sections, show_contents);
        let points = nav_points(&ncx);

        let orders: Vec<usize> = points.iter().map(|(_, o)| *o).collect();
        let expected: Vec<usize> = (1..=points.len()).collect();
        prop_assert_eq!(orders, expected);

        let ids: Vec<String> = points.into_iter().map(|(id, _)| id).collect();
        prop_assert_eq!(ids, expected_order(&sections, show_contents, true));
    }

    #[test]
    fn spine_places_front_matter_before_contents(
        sections in prop::collection::vec(flags(), 0..12),
        show_contents in any::<bool>(),
    ) {
        let (opf, _) = build(&sections, show_contents);
        prop_assert_eq!(spine_idrefs(&opf), expected_order(&sections, show_contents, false));
    }
}
