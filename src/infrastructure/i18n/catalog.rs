use std::collections::HashMap;
use std::sync::LazyLock;

/// Key for the message returned when a favorite source already exists.
pub const FAVORITE_SOURCE_DUPLICATED: &str = "NewsFavoriteSourceDuplicated";

pub const DEFAULT_LANGUAGE: &str = "en";

type Table = HashMap<&'static str, &'static str>;

static EN: LazyLock<Table> = LazyLock::new(|| {
    HashMap::from([(
        FAVORITE_SOURCE_DUPLICATED,
        "A favorite source with the same source already exists.",
    )])
});

static ES: LazyLock<Table> = LazyLock::new(|| {
    HashMap::from([(
        FAVORITE_SOURCE_DUPLICATED,
        "Ya existe una fuente favorita con el mismo origen.",
    )])
});

/// Lookup of user-facing text by message key.
pub trait MessageCatalog: Send + Sync {
    /// Returns the text for `key` in `language`.
    ///
    /// Falls back to the catalog's default language when `language` is not
    /// supported, and to the key itself when no table knows it.
    fn lookup(&self, key: &str, language: &str) -> String;

    /// Returns true when the catalog carries a table for `language`.
    fn supports(&self, language: &str) -> bool;
}

/// Catalog compiled into the binary with English and Spanish tables.
#[derive(Debug, Clone)]
pub struct StaticMessageCatalog {
    default_language: String,
}

impl StaticMessageCatalog {
    /// Creates a catalog that falls back to `default_language`.
    ///
    /// An unsupported default is replaced with [`DEFAULT_LANGUAGE`].
    pub fn new(default_language: impl Into<String>) -> Self {
        let default_language = default_language.into().to_ascii_lowercase();
        let default_language = if table(&default_language).is_some() {
            default_language
        } else {
            DEFAULT_LANGUAGE.to_string()
        };

        Self { default_language }
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }
}

impl Default for StaticMessageCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

fn table(language: &str) -> Option<&'static Table> {
    match language {
        "en" => Some(&*EN),
        "es" => Some(&*ES),
        _ => None,
    }
}

impl MessageCatalog for StaticMessageCatalog {
    fn lookup(&self, key: &str, language: &str) -> String {
        let language = language.to_ascii_lowercase();

        table(&language)
            .and_then(|t| t.get(key))
            .or_else(|| table(&self.default_language).and_then(|t| t.get(key)))
            .map(|text| text.to_string())
            .unwrap_or_else(|| key.to_string())
    }

    fn supports(&self, language: &str) -> bool {
        table(&language.to_ascii_lowercase()).is_some()
    }
}

/// Picks the language for a response from an `Accept-Language` header value.
///
/// Entries are tried by descending quality; the first whose primary subtag the
/// catalog supports wins. Returns `fallback` when nothing matches.
pub fn negotiate_language<'a>(
    catalog: &dyn MessageCatalog,
    accept_language: Option<&str>,
    fallback: &'a str,
) -> std::borrow::Cow<'a, str> {
    let Some(header) = accept_language else {
        return fallback.into();
    };

    let mut ranges: Vec<(String, f32)> = header
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.trim().split(';');
            let tag = parts.next()?.trim();
            if tag.is_empty() {
                return None;
            }
            let quality = parts
                .find_map(|p| p.trim().strip_prefix("q="))
                .and_then(|q| q.parse::<f32>().ok())
                .unwrap_or(1.0);
            let primary = tag.split('-').next()?.to_ascii_lowercase();
            Some((primary, quality))
        })
        .filter(|(_, quality)| *quality > 0.0)
        .collect();

    // Stable sort keeps header order among equal weights.
    ranges.sort_by(|a, b| b.1.total_cmp(&a.1));

    ranges
        .into_iter()
        .find(|(language, _)| catalog.supports(language))
        .map(|(language, _)| language.into())
        .unwrap_or_else(|| fallback.into())
}
