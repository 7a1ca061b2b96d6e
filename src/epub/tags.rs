//! `[[NAME]]` placeholder substitution.

use std::borrow::Cow;

use chrono::NaiveDate;

use crate::model::Metadata;

/// Length of the longest recognized token name (`DESCRIPTION`).
const MAX_TOKEN_LEN: usize = 11;

/// Resolves placeholder tokens against a document's metadata.
///
/// Recognized tokens are replaced by the metadata value (or nothing when
/// the value is absent), `[[EOL]]` becomes a newline and `[[MODIFIED]]` the
/// build date. Unknown tokens are left as they are. Substituted values are
/// never rescanned, so a single pass is complete.
pub struct Tags<'a> {
    metadata: &'a Metadata,
    cover: String,
    modified: String,
}

impl<'a> Tags<'a> {
    pub fn new(metadata: &'a Metadata, modified: NaiveDate) -> Self {
        Self {
            metadata,
            cover: metadata
                .cover
                .as_ref()
                .map(|c| c.declared())
                .unwrap_or_default(),
            modified: modified.format("%Y-%m-%d").to_string(),
        }
    }

    /// Value for a token name, or `None` if the token is not recognized.
    fn resolve(&self, name: &str) -> Option<Cow<'_, str>> {
        let m = self.metadata;
        let opt = |v: &'a Option<String>| Cow::Borrowed(v.as_deref().unwrap_or(""));

        let value = match name {
            "EOL" => Cow::Borrowed("\n"),
            "ID" => Cow::Borrowed(m.id.as_str()),
            "TITLE" => Cow::Borrowed(m.title.as_str()),
            "AUTHOR" => Cow::Borrowed(m.author.as_str()),
            "FILEAS" => opt(&m.file_as),
            "SERIES" => opt(&m.series),
            "SEQUENCE" => opt(&m.sequence),
            "COPYRIGHT" => opt(&m.copyright),
            "LANGUAGE" => opt(&m.language),
            "PUBLISHER" => opt(&m.publisher),
            "DESCRIPTION" => opt(&m.description),
            "PUBLISHED" => opt(&m.published),
            "GENRE" => opt(&m.genre),
            "TAGS" => opt(&m.tags),
            "SOURCE" => opt(&m.source),
            "CONTENTS" => Cow::Borrowed(m.contents_title()),
            "COVER" => Cow::Borrowed(self.cover.as_str()),
            "MODIFIED" => Cow::Borrowed(self.modified.as_str()),
            _ => return None,
        };
        Some(value)
    }

    /// Replace every recognized token in `template`.
    pub fn apply(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("[[") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            // Token names are short runs of `A-Z`; nothing else can close.
            let end = after
                .bytes()
                .take(MAX_TOKEN_LEN + 1)
                .take_while(u8::is_ascii_uppercase)
                .count();
            let token = if after[end..].starts_with("]]") {
                self.resolve(&after[..end])
            } else {
                None
            };

            match token {
                Some(value) => {
                    out.push_str(&value);
                    rest = &after[end + 2..];
                }
                None => {
                    out.push_str("[[");
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }
}
