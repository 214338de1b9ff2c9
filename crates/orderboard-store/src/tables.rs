use dashmap::DashMap;
use orderboard_core::types::Table;
use tracing::debug;

/// Thread-safe store for the restaurant's table list
///
/// Tables come from the backend as a full list on every refresh; a table
/// removed upstream disappears here on the next replace.
#[derive(Debug, Default)]
pub struct TableStore {
    /// Table number -> Table
    tables: DashMap<i32, Table>,
}

impl TableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the full table list with a freshly fetched one
    pub fn replace_all(&self, tables: Vec<Table>) {
        self.tables.retain(|number, _| {
            tables.iter().any(|table| table.number == *number)
        });
        let count = tables.len();
        for table in tables {
            self.tables.insert(table.number, table);
        }

        debug!(tables = count, "Table list replaced in memory store");
    }

    /// Get a table by number
    pub fn get(&self, number: i32) -> Option<Table> {
        self.tables.get(&number).map(|t| t.clone())
    }

    /// Get all tables, ordered by table number
    pub fn get_all(&self) -> Vec<Table> {
        let mut tables: Vec<Table> = self.tables.iter().map(|e| e.value().clone()).collect();
        tables.sort_by_key(|table| table.number);
        tables
    }

    /// Get total number of tables
    pub fn count(&self) -> usize {
        self.tables.len()
    }
}
