//! Header-labeled feed table parsing.
//!
//! Alongside the raw numeric rows, the upstream project publishes a
//! human-oriented TSV whose first line names the columns (`ID`, `Name`,
//! `Schedule`, ...). This module maps that header to per-record field
//! lookup and reproduces the lookup reply format: the `[<id> <name>]` label
//! line followed by the schedule text.

use thiserror::Error;

/// Errors from parsing a published feed table.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The document has no header line.
    #[error("feed table is empty")]
    Empty,

    /// A required column is missing from the header.
    #[error("feed table has no '{0}' column")]
    MissingColumn(String),
}

/// Convenience alias for results with [`FeedError`].
pub type Result<T> = std::result::Result<T, FeedError>;

/// A parsed header-labeled TSV document.
#[derive(Debug, Clone)]
pub struct FeedTable {
    columns: Vec<String>,
    records: Vec<Vec<String>>,
}

/// One record of a [`FeedTable`], borrowing the table's header.
#[derive(Debug, Clone, Copy)]
pub struct FeedRecord<'a> {
    table: &'a FeedTable,
    cells: &'a [String],
}

impl FeedTable {
    /// Parses a whole TSV document. The first non-empty line is the
    /// header; every following non-empty line is a record. Records may be
    /// ragged — missing cells read as empty.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines().filter(|line| !line.trim().is_empty());

        let header = lines.next().ok_or(FeedError::Empty)?;
        let columns: Vec<String> = header.split('\t').map(|cell| cell.trim().to_string()).collect();

        let records = lines
            .map(|line| {
                line.split('\t')
                    .map(|cell| cell.trim().to_string())
                    .collect()
            })
            .collect();

        Ok(Self { columns, records })
    }

    /// Column names in header order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates the table's records.
    pub fn iter(&self) -> impl Iterator<Item = FeedRecord<'_>> {
        self.records.iter().map(|cells| FeedRecord {
            table: self,
            cells,
        })
    }

    /// Finds the first record whose `column` cell equals `value`.
    ///
    /// Returns an error when the column does not exist, `None` when no
    /// record matches.
    pub fn find(&self, column: &str, value: &str) -> Result<Option<FeedRecord<'_>>> {
        let index = self.column_index(column)?;
        Ok(self
            .iter()
            .find(|record| record.cells.get(index).is_some_and(|cell| cell == value)))
    }

    fn column_index(&self, column: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|name| name == column)
            .ok_or_else(|| FeedError::MissingColumn(column.to_string()))
    }
}

impl<'a> FeedRecord<'a> {
    /// Cell value under the named column; `None` when the column is
    /// unknown, empty string when the record is too short.
    pub fn field(&self, column: &str) -> Option<&'a str> {
        let index = self.table.column_index(column).ok()?;
        Some(self.cells.get(index).map_or("", |cell| cell.as_str()))
    }

    /// Renders the lookup reply for this record: `[<id> <name>]` on the
    /// first line, the schedule text on the second.
    pub fn lookup_reply(&self, id_column: &str, name_column: &str, schedule_column: &str) -> String {
        let id = self.field(id_column).unwrap_or("");
        let name = self.field(name_column).unwrap_or("");
        let schedule = self.field(schedule_column).unwrap_or("");
        if name.is_empty() {
            format!("[{id}]\n{schedule}")
        } else {
            format!("[{id} {name}]\n{schedule}")
        }
    }
}
