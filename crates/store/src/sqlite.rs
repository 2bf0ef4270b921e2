//! SQLite backend
//!
//! Each roster tab is a table of TEXT columns named after the sheet headers.
//! Row order is rowid order, which is insertion order for imported tabs.

use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use std::path::Path;
use tracing::{debug, info};

use skylark_roster::Roster;

use crate::error::{Result, StoreError};
use crate::workbook::{RosterTab, Workbook, Worksheet};
use crate::RosterStore;

/// Roster store backed by a SQLite database
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create or open a database at the specified path
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        info!(path = %path.display(), "Opening SQLite roster store");

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        Ok(Self { conn })
    }

    /// Private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Replace the tables named by `workbook` with its contents
    pub fn import_workbook(&mut self, workbook: &Workbook) -> Result<()> {
        let tx = self.conn.transaction()?;

        for sheet in &workbook.worksheets {
            let table = quote_ident(&sheet.title);
            let columns: Vec<String> = sheet
                .headers
                .iter()
                .map(|h| format!("{} TEXT", quote_ident(h.trim())))
                .collect();

            tx.execute_batch(&format!(
                "DROP TABLE IF EXISTS {table}; CREATE TABLE {table} ({});",
                columns.join(", ")
            ))?;

            let placeholders: Vec<String> =
                (1..=sheet.headers.len()).map(|i| format!("?{}", i)).collect();
            let mut stmt = tx.prepare(&format!(
                "INSERT INTO {table} VALUES ({})",
                placeholders.join(", ")
            ))?;

            for row in &sheet.rows {
                let cells: Vec<&str> = (0..sheet.headers.len())
                    .map(|i| row.get(i).map(String::as_str).unwrap_or(""))
                    .collect();
                stmt.execute(rusqlite::params_from_iter(cells))?;
            }

            debug!(table = %sheet.title, rows = sheet.rows.len(), "Worksheet imported");
        }

        tx.commit()?;
        Ok(())
    }

    /// Read one table back as a worksheet
    pub fn read_worksheet(&self, title: &str) -> Result<Worksheet> {
        self.require_table(title)?;

        let mut stmt = self
            .conn
            .prepare(&format!("SELECT * FROM {} ORDER BY rowid", quote_ident(title)))?;
        let headers: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let width = headers.len();

        let rows = stmt
            .query_map([], |row| {
                (0..width)
                    .map(|i| row.get_ref(i).map(cell_text))
                    .collect::<rusqlite::Result<Vec<String>>>()
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(Worksheet {
            title: title.to_string(),
            headers,
            rows,
        })
    }

    /// Read the three roster tables as a workbook
    pub fn export_workbook(&self) -> Result<Workbook> {
        let mut workbook = Workbook::new();
        for tab in RosterTab::ALL {
            workbook.insert(self.read_worksheet(tab.title())?);
        }
        Ok(workbook)
    }

    fn require_table(&self, title: &str) -> Result<()> {
        let exists = self
            .conn
            .query_row(
                "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1",
                [title],
                |_| Ok(()),
            )
            .optional()?
            .is_some();

        if exists {
            Ok(())
        } else {
            Err(StoreError::SheetNotFound(title.to_string()))
        }
    }

    fn require_column(&self, table: &str, column: &str) -> Result<()> {
        let stmt = self
            .conn
            .prepare(&format!("SELECT * FROM {} LIMIT 0", quote_ident(table)))?;

        if stmt.column_names().iter().any(|c| *c == column) {
            Ok(())
        } else {
            Err(StoreError::ColumnNotFound {
                tab: table.to_string(),
                column: column.to_string(),
            })
        }
    }
}

impl RosterStore for SqliteStore {
    fn load_roster(&self) -> Result<Roster> {
        self.export_workbook()?.load_roster()
    }

    fn update_field(
        &mut self,
        tab: &str,
        id_column: &str,
        id: &str,
        column: &str,
        value: &str,
    ) -> Result<()> {
        self.require_table(tab)?;
        self.require_column(tab, id_column)?;

        let table = quote_ident(tab);
        let rowid: Option<i64> = self
            .conn
            .query_row(
                &format!(
                    "SELECT rowid FROM {table} WHERE trim({}) = ?1 ORDER BY rowid LIMIT 1",
                    quote_ident(id_column)
                ),
                [id.trim()],
                |row| row.get(0),
            )
            .optional()?;

        let rowid = rowid.ok_or_else(|| StoreError::IdNotFound {
            tab: tab.to_string(),
            id: id.trim().to_string(),
        })?;

        self.require_column(tab, column)?;
        self.conn.execute(
            &format!("UPDATE {table} SET {} = ?1 WHERE rowid = ?2", quote_ident(column)),
            params![value, rowid],
        )?;

        info!(tab, id, column, value, "Table cell updated");
        Ok(())
    }
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn cell_text(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => String::new(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => String::from_utf8_lossy(bytes).into_owned(),
    }
}
