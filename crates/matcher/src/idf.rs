//! Inverse-document-frequency table.
//!
//! Resource format: one `token=value` entry per line, UTF-8. The token is
//! trimmed; the value is a non-negative float. Blank lines and `#` comments
//! are ignored; anything else that does not parse is skipped and counted.

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Outcome of parsing an IDF resource.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdfParseReport {
    /// Entries stored in the table (a later duplicate overwrites an earlier one).
    pub accepted: usize,
    /// Malformed lines that were skipped.
    pub skipped: usize,
}

/// Immutable token → IDF mapping.
///
/// A token missing from the table is not an error; the token scorer falls back
/// to its configured default.
#[derive(Debug, Clone, Default)]
pub struct IdfTable {
    weights: FxHashMap<String, f64>,
}

impl IdfTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a `token=value` resource, skipping malformed lines. A leading
    /// byte order mark is ignored.
    pub fn parse(text: &str) -> (Self, IdfParseReport) {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut weights = FxHashMap::default();
        let mut report = IdfParseReport::default();

        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            match parse_entry(trimmed) {
                Some((token, value)) => {
                    weights.insert(token.to_string(), value);
                    report.accepted += 1;
                }
                None => report.skipped += 1,
            }
        }

        (Self { weights }, report)
    }

    pub fn get(&self, token: &str) -> Option<f64> {
        self.weights.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for IdfTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

fn parse_entry(line: &str) -> Option<(&str, f64)> {
    let (token, value) = line.split_once('=')?;
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    let value: f64 = value.trim().parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some((token, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_byte_order_mark_is_not_part_of_the_token() {
        let (table, report) = IdfTable::parse("\u{feff}西湖=5.0\n");
        assert_eq!(report, IdfParseReport { accepted: 1, skipped: 0 });
        assert_eq!(table.get("西湖"), Some(5.0));
    }

    #[test]
    fn parses_well_formed_lines() {
        let (table, report) = IdfTable::parse("北京=12.5\n 西湖 = 3\n");
        assert_eq!(report, IdfParseReport { accepted: 2, skipped: 0 });
        assert_eq!(table.get("北京"), Some(12.5));
        assert_eq!(table.get("西湖"), Some(3.0));
        assert_eq!(table.get("黄山"), None);
    }

    #[test]
    fn malformed_lines_are_skipped_not_fatal() {
        let text = "no separator\n=4.0\n景区=abc\n路=-1\n街=NaN\n大道=2.0\n";
        let (table, report) = IdfTable::parse(text);
        assert_eq!(report.accepted, 1);
        assert_eq!(report.skipped, 5);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("大道"), Some(2.0));
    }

    #[test]
    fn splits_on_first_separator_only() {
        let (table, report) = IdfTable::parse("a=b=1\nx==2\n");
        // "b=1" and "=2" are not numbers.
        assert_eq!(report.skipped, 2);
        assert!(table.is_empty());
    }

    #[test]
    fn comments_and_blank_lines_ignored() {
        let (table, report) = IdfTable::parse("# trained on 2024 gazetteer\n\n   \n省=0.5\n");
        assert_eq!(report, IdfParseReport { accepted: 1, skipped: 0 });
        assert_eq!(table.get("省"), Some(0.5));
    }

    #[test]
    fn later_duplicates_win() {
        let (table, report) = IdfTable::parse("市=1\n市=2\n");
        assert_eq!(report.accepted, 2);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("市"), Some(2.0));
    }

    #[test]
    fn collects_from_pairs() {
        let table: IdfTable = [("a", 1.0), ("b", 2.0)].into_iter().collect();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("b"), Some(2.0));
    }
}
