/// Where a navigation entry sits relative to the contents page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItemType {
    /// Front matter, placed before the contents page.
    Front,
    /// The contents page itself.
    Contents,
    /// Regular sections after the contents page.
    Main,
}

/// A navigable entry produced while generating the navigation map.
///
/// The same list feeds the contents page, so a caller-supplied contents
/// builder sees exactly what the reader's navigation shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub title: String,
    /// Link relative to the content folder (e.g. `s1.xhtml`).
    pub link: String,
    pub item_type: NavItemType,
}

impl NavLink {
    pub fn new(title: impl Into<String>, link: impl Into<String>, item_type: NavItemType) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            item_type,
        }
    }
}
