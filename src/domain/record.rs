// ==========================================
// Cross Check - raw row container
// ==========================================
// One untyped row from a tabular source. Lookup distinguishes
// "absent or blank" from a provided value, so the coercion layer
// never has to reason about sentinel emptiness.
// ==========================================

use std::collections::HashMap;

/// One untyped record as handed back by a file parser.
///
/// `row_number` is the 1-based spreadsheet row (header = row 1, first
/// data row = 2). Parsers tag every record before any further
/// processing, so error messages keep pointing at the row the user
/// sees even when blank rows are skipped.
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
    row_number: usize,
    fields: HashMap<String, String>,
}

impl RawRecord {
    pub fn new(row_number: usize) -> Self {
        Self {
            row_number,
            fields: HashMap::new(),
        }
    }

    pub fn row_number(&self) -> usize {
        self.row_number
    }

    /// Store a raw cell value under its column label.
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(label.into(), value.into());
    }

    /// Field lookup: `None` when the label is missing entirely or the
    /// stored value is blank after trimming. The returned value is
    /// untrimmed; trimming is the coercion layer's job.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .get(label)
            .map(|v| v.as_str())
            .filter(|v| !v.trim().is_empty())
    }

    /// True when every stored value is blank (parsers skip such rows).
    pub fn is_blank(&self) -> bool {
        self.fields.values().all(|v| v.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_present_value() {
        let mut record = RawRecord::new(2);
        record.insert("نام", "علی");
        assert_eq!(record.get("نام"), Some("علی"));
    }

    #[test]
    fn test_get_missing_label_is_absent() {
        let record = RawRecord::new(2);
        assert_eq!(record.get("نام"), None);
    }

    #[test]
    fn test_get_blank_value_is_absent() {
        let mut record = RawRecord::new(2);
        record.insert("نام", "   ");
        assert_eq!(record.get("نام"), None);
    }

    #[test]
    fn test_is_blank() {
        let mut record = RawRecord::new(3);
        record.insert("a", " ");
        record.insert("b", "");
        assert!(record.is_blank());

        record.insert("c", "x");
        assert!(!record.is_blank());
    }
}
