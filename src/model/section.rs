/// One content page of the book, usually a chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    /// Body markup, included verbatim.
    pub content: String,
    /// Kept in the reading order but left out of navigation and contents.
    pub exclude_from_contents: bool,
    /// Placed before the contents page.
    pub is_front_matter: bool,
    pub(crate) requested_filename: Option<String>,
    pub(crate) filename: String,
}

impl Section {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            exclude_from_contents: false,
            is_front_matter: false,
            requested_filename: None,
            filename: String::new(),
        }
    }

    pub fn with_exclude_from_contents(mut self, exclude: bool) -> Self {
        self.exclude_from_contents = exclude;
        self
    }

    pub fn with_front_matter(mut self, front_matter: bool) -> Self {
        self.is_front_matter = front_matter;
        self
    }

    /// Use `name` (without extension) instead of the auto-numbered filename.
    pub fn with_filename(mut self, name: impl Into<String>) -> Self {
        self.requested_filename = Some(name.into());
        self
    }

    /// Filename inside the container, including the `.xhtml` extension.
    ///
    /// Assigned when the section is added to a document; empty before that.
    pub fn filename(&self) -> &str {
        &self.filename
    }
}
