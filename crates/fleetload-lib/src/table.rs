//! Header matching shared by the CSV readers.
//!
//! Input files come from spreadsheets with inconsistent column names, so
//! each canonical field accepts a list of synonyms, compared after
//! lowercasing and dropping punctuation.

use std::collections::BTreeMap;

use csv::StringRecord;

/// Lowercase and keep only ASCII alphanumerics and underscores.
pub(crate) fn normalize_header(s: &str) -> String {
    s.to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Canonical field name to column index.
#[derive(Debug, Clone, Default)]
pub(crate) struct HeaderIndex {
    columns: BTreeMap<&'static str, usize>,
}

impl HeaderIndex {
    /// Resolve each canonical field to the first header matching one of its synonyms.
    pub(crate) fn resolve(headers: &StringRecord, synonyms: &[(&'static str, &[&str])]) -> Self {
        let normalized: Vec<String> = headers.iter().map(normalize_header).collect();
        let mut columns = BTreeMap::new();

        for (canon, alts) in synonyms {
            'outer: for alt in *alts {
                let alt_n = normalize_header(alt);
                for (i, h) in normalized.iter().enumerate() {
                    if h == &alt_n {
                        columns.insert(*canon, i);
                        break 'outer;
                    }
                }
            }
        }

        Self { columns }
    }

    /// Required fields with no matching header.
    pub(crate) fn missing<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|c| !self.columns.contains_key(c))
            .collect()
    }

    /// Trimmed cell for `field`, or `None` when the column is absent or the cell is blank.
    pub(crate) fn get(&self, record: &StringRecord, field: &str) -> Option<String> {
        self.columns
            .get(field)
            .and_then(|&i| record.get(i))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}
