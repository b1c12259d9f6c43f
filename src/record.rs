//! The in-memory representation of one input data row.

/// An ordered set of `(column, value)` string pairs from one CSV row.
///
/// Values stay untyped until aggregation; the loader performs no numeric
/// conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Returns the value for `column`, if the row has that column.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Iterates over `(column, value)` pairs in input order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record::new(vec![
            ("Crop".to_string(), "Wheat".to_string()),
            ("Yield_tons_per_hectare".to_string(), "6.0".to_string()),
            ("Fertilizer_Used".to_string(), "true".to_string()),
        ])
    }

    #[test]
    fn test_get_existing_column() {
        assert_eq!(sample().get("Crop"), Some("Wheat"));
        assert_eq!(sample().get("Fertilizer_Used"), Some("true"));
    }

    #[test]
    fn test_get_missing_column() {
        assert_eq!(sample().get("Region"), None);
    }

    #[test]
    fn test_fields_preserve_order() {
        let sample = sample();
        let columns: Vec<&str> = sample.fields().map(|(k, _)| k).collect();
        assert_eq!(
            columns,
            vec!["Crop", "Yield_tons_per_hectare", "Fertilizer_Used"]
        );
    }
}
