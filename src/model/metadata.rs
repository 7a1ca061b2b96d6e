use super::AssetRef;

/// Book metadata.
///
/// `id`, `title`, `author` and `cover` are required; everything else is
/// optional and blank values are treated the same as absent ones.
#[derive(Debug, Clone)]
pub struct Metadata {
    pub id: String,
    pub title: String,
    pub author: String,
    /// Sortable author form, e.g. "Bronte, Anne".
    pub file_as: Option<String>,
    pub language: Option<String>,
    pub publisher: Option<String>,
    pub series: Option<String>,
    pub sequence: Option<String>,
    pub genre: Option<String>,
    /// Comma-delimited tag list.
    pub tags: Option<String>,
    pub description: Option<String>,
    pub copyright: Option<String>,
    pub published: Option<String>,
    pub source: Option<String>,
    /// Title of the contents page.
    pub contents: Option<String>,
    pub show_contents: bool,
    pub cover: Option<AssetRef>,
    pub images: Vec<AssetRef>,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            author: String::new(),
            file_as: None,
            language: None,
            publisher: None,
            series: None,
            sequence: None,
            genre: None,
            tags: None,
            description: None,
            copyright: None,
            published: None,
            source: None,
            contents: None,
            show_contents: true,
            cover: None,
            images: Vec::new(),
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl Metadata {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_file_as(mut self, file_as: impl Into<String>) -> Self {
        self.file_as = Some(file_as.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    pub fn with_series(mut self, series: impl Into<String>) -> Self {
        self.series = Some(series.into());
        self
    }

    pub fn with_sequence(mut self, sequence: impl ToString) -> Self {
        self.sequence = Some(sequence.to_string());
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_copyright(mut self, copyright: impl Into<String>) -> Self {
        self.copyright = Some(copyright.into());
        self
    }

    pub fn with_published(mut self, published: impl Into<String>) -> Self {
        self.published = Some(published.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_contents_title(mut self, contents: impl Into<String>) -> Self {
        self.contents = Some(contents.into());
        self
    }

    pub fn with_show_contents(mut self, show: bool) -> Self {
        self.show_contents = show;
        self
    }

    pub fn with_cover(mut self, cover: impl Into<AssetRef>) -> Self {
        self.cover = Some(cover.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<AssetRef>) -> Self {
        self.images.push(image.into());
        self
    }

    pub fn series(&self) -> Option<&str> {
        present(&self.series)
    }

    pub fn sequence(&self) -> Option<&str> {
        present(&self.sequence)
    }

    pub fn genre(&self) -> Option<&str> {
        present(&self.genre)
    }

    pub fn contents_title(&self) -> &str {
        present(&self.contents).unwrap_or("Contents")
    }

    /// Individual tags, split on commas with surrounding whitespace removed.
    pub fn tag_list(&self) -> Vec<&str> {
        present(&self.tags)
            .map(|tags| {
                tags.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Title decorated with series information, as shown by readers.
    pub fn display_title(&self) -> String {
        match (self.series(), self.sequence()) {
            (Some(series), Some(seq)) => format!("{} ({} #{})", self.title, series, seq),
            (Some(series), None) => format!("{} ({})", self.title, series),
            (None, Some(seq)) => format!("{} (#{})", self.title, seq),
            (None, None) => self.title.clone(),
        }
    }
}
