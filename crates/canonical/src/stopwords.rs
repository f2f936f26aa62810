//! Administrative boilerplate removal.
//!
//! A [`StopwordSet`] holds the suffixes and qualifiers ("风景名胜区",
//! "National Park", ...) that carry no identity for a place. Entries are kept
//! longest first so a short stopword never eats part of a longer one before
//! the longer one had its turn.

use regex::Regex;
use tracing::warn;

/// Stopwords used when the configured stopword resource cannot be loaded.
pub const FALLBACK_STOPWORDS: [&str; 6] = ["国家重点", "风景名胜区", "景区", "路", "街", "大道"];

#[derive(Debug, Clone)]
struct Stopword {
    text: String,
    // Word-boundary pattern, present only for stopwords containing Latin letters.
    pattern: Option<Regex>,
}

/// Immutable, length-ordered stopword list.
///
/// Stopwords containing an ASCII Latin letter are removed only as whole
/// words (`\b...\b`); all others (CJK and other scripts without lexical word
/// boundaries) are removed wherever they occur.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    entries: Vec<Stopword>,
}

impl StopwordSet {
    /// Build a set from arbitrary words.
    ///
    /// Words are trimmed; blank words and duplicates are dropped. The result is
    /// ordered by descending character length, ties broken lexicographically.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut texts: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();
        texts.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });
        texts.dedup();

        let entries = texts
            .into_iter()
            .map(|text| {
                let pattern = if contains_latin(&text) {
                    compile_word_pattern(&text)
                } else {
                    None
                };
                Stopword { text, pattern }
            })
            .collect();

        Self { entries }
    }

    /// Parse a stopword resource: one stopword per line, UTF-8. A leading
    /// byte order mark is ignored.
    pub fn parse(text: &str) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        Self::new(text.lines())
    }

    /// The minimal built-in list, see [`FALLBACK_STOPWORDS`].
    pub fn fallback() -> Self {
        Self::new(FALLBACK_STOPWORDS)
    }

    /// A set that removes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stopwords in removal order (longest first).
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.text.as_str())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.iter().any(|e| e.text == word)
    }

    /// Remove every stopword occurrence from `text`, longest stopword first.
    ///
    /// Surrounding whitespace is left in place; trimming is the caller's job.
    pub fn strip(&self, text: &str) -> String {
        let mut out = text.to_string();
        for stopword in &self.entries {
            match &stopword.pattern {
                Some(re) => {
                    if re.is_match(&out) {
                        out = re.replace_all(&out, "").into_owned();
                    }
                }
                None => {
                    if out.contains(stopword.text.as_str()) {
                        out = out.replace(stopword.text.as_str(), "");
                    }
                }
            }
        }
        out
    }
}

/// True if `word` contains at least one ASCII Latin letter.
pub fn contains_latin(word: &str) -> bool {
    word.chars().any(|ch| ch.is_ascii_alphabetic())
}

fn compile_word_pattern(word: &str) -> Option<Regex> {
    match Regex::new(&format!(r"\b{}\b", regex::escape(word))) {
        Ok(re) => Some(re),
        Err(err) => {
            // Literal removal is still better than keeping the stopword.
            warn!(stopword = %word, error = %err, "stopword_pattern_rejected");
            None
        }
    }
}
