//! In-memory tabular data loaded from a file.

use tracing::debug;

use crate::errors::IngestError;
use solr_indexer_shared::Record;

/// Header row plus the records read from a file.
///
/// Column checks go against the header, so they hold even when the file has
/// no data rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        Self { columns, records }
    }

    /// Column names in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Remove a column from the header and from every record.
    ///
    /// # Returns
    ///
    /// * `Ok(Dataset)` - The dataset without the column
    /// * `Err(IngestError::MissingColumn)` - If the column is not in the header
    pub fn exclude_column(mut self, column: &str) -> Result<Self, IngestError> {
        if !self.has_column(column) {
            return Err(IngestError::missing_column(column));
        }

        self.columns.retain(|c| c != column);
        for record in &mut self.records {
            record.remove(column);
        }

        debug!(column = %column, rows = self.records.len(), "Excluded column");
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::new(
            vec!["Employee_ID".to_string(), "Department".to_string()],
            vec![
                Record::new().with("Employee_ID", "E001").with("Department", "IT"),
                Record::new().with("Employee_ID", "E002").with("Department", "HR"),
            ],
        )
    }

    #[test]
    fn test_exclude_column() {
        let dataset = dataset().exclude_column("Department").unwrap();

        assert_eq!(dataset.columns(), ["Employee_ID".to_string()]);
        assert!(dataset.records().iter().all(|r| !r.contains("Department")));
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_exclude_missing_column() {
        let result = dataset().exclude_column("Gender");
        assert!(matches!(result, Err(IngestError::MissingColumn(c)) if c == "Gender"));
    }

    #[test]
    fn test_exclude_column_without_rows() {
        let empty = Dataset::new(vec!["Department".to_string()], vec![]);

        let dataset = empty.clone().exclude_column("Department").unwrap();
        assert!(dataset.columns().is_empty());
        assert!(dataset.is_empty());

        assert!(empty.exclude_column("Gender").is_err());
    }
}
