//! Spreadsheet-shaped roster workbook
//!
//! A [`Workbook`] is a list of [`Worksheet`]s, each a header row over data
//! rows of text cells. Row order is significant: it is the relation order
//! the ranking pass uses to break ties.

use serde::{Deserialize, Serialize};
use tracing::debug;

use skylark_roster::{Drone, Mission, Pilot, Record, RecordKind, Roster};

use crate::error::{Result, StoreError};

/// Column written by status updates
pub const STATUS_COLUMN: &str = "status";

/// The three roster tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RosterTab {
    /// `pilot_roster`
    Pilots,
    /// `drone_fleet`
    Drones,
    /// `missions`
    Missions,
}

impl RosterTab {
    /// All tabs in load order
    pub const ALL: [RosterTab; 3] = [RosterTab::Pilots, RosterTab::Drones, RosterTab::Missions];

    /// Worksheet title
    pub fn title(&self) -> &'static str {
        match self {
            RosterTab::Pilots => "pilot_roster",
            RosterTab::Drones => "drone_fleet",
            RosterTab::Missions => "missions",
        }
    }

    /// Identifier column of the tab
    pub fn id_column(&self) -> &'static str {
        match self {
            RosterTab::Pilots => Pilot::ID_COLUMN,
            RosterTab::Drones => Drone::ID_COLUMN,
            RosterTab::Missions => Mission::ID_COLUMN,
        }
    }
}

impl From<RecordKind> for RosterTab {
    fn from(kind: RecordKind) -> Self {
        match kind {
            RecordKind::Pilot => RosterTab::Pilots,
            RecordKind::Drone => RosterTab::Drones,
            RecordKind::Mission => RosterTab::Missions,
        }
    }
}

/// One tab: header row plus data rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worksheet {
    /// Tab title
    pub title: String,
    /// Header row
    pub headers: Vec<String>,
    /// Data rows; short rows read as blank trailing cells
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}

impl Worksheet {
    /// Create an empty worksheet
    pub fn new<S: Into<String>>(title: impl Into<String>, headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            title: title.into(),
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a data row
    pub fn push_row<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>) {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Builder-style [`Worksheet::push_row`]
    pub fn with_row<S: Into<String>>(mut self, cells: impl IntoIterator<Item = S>) -> Self {
        self.push_row(cells);
        self
    }

    /// Position of a header, or [`StoreError::ColumnNotFound`]
    pub fn column_index(&self, column: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h.trim() == column)
            .ok_or_else(|| StoreError::ColumnNotFound {
                tab: self.title.clone(),
                column: column.to_string(),
            })
    }

    /// Data rows keyed by header
    pub fn records(&self) -> Vec<Record> {
        self.rows
            .iter()
            .map(|row| {
                self.headers
                    .iter()
                    .enumerate()
                    .map(|(i, header)| {
                        (
                            header.trim().to_string(),
                            row.get(i).cloned().unwrap_or_default(),
                        )
                    })
                    .collect::<Record>()
            })
            .collect()
    }

    /// Index of the first row whose `id_column` cell equals `id`
    pub fn find_row(&self, id_column: &str, id: &str) -> Result<usize> {
        let column = self.column_index(id_column)?;
        let id = id.trim();

        self.rows
            .iter()
            .position(|row| row.get(column).map(|cell| cell.trim()) == Some(id))
            .ok_or_else(|| StoreError::IdNotFound {
                tab: self.title.clone(),
                id: id.to_string(),
            })
    }

    /// Point update of one cell, addressed by identifier and column name
    ///
    /// The identifier is resolved before the target column, so a bad
    /// identifier is reported even when the column is also missing.
    pub fn update_field(&mut self, id_column: &str, id: &str, column: &str, value: &str) -> Result<()> {
        let row = self.find_row(id_column, id)?;
        let column = self.column_index(column)?;

        let cells = &mut self.rows[row];
        if cells.len() <= column {
            cells.resize(column + 1, String::new());
        }
        cells[column] = value.to_string();
        Ok(())
    }
}

/// Collection of worksheets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workbook {
    /// Worksheets in tab order
    pub worksheets: Vec<Worksheet>,
}

impl Workbook {
    /// Create an empty workbook
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add or replace a worksheet
    pub fn with_worksheet(mut self, worksheet: Worksheet) -> Self {
        self.insert(worksheet);
        self
    }

    /// Add a worksheet, replacing any with the same title
    pub fn insert(&mut self, worksheet: Worksheet) {
        match self.worksheets.iter_mut().find(|w| w.title == worksheet.title) {
            Some(existing) => *existing = worksheet,
            None => self.worksheets.push(worksheet),
        }
    }

    /// Worksheet by title
    pub fn worksheet(&self, title: &str) -> Result<&Worksheet> {
        self.worksheets
            .iter()
            .find(|w| w.title == title)
            .ok_or_else(|| StoreError::SheetNotFound(title.to_string()))
    }

    /// Mutable worksheet by title
    pub fn worksheet_mut(&mut self, title: &str) -> Result<&mut Worksheet> {
        self.worksheets
            .iter_mut()
            .find(|w| w.title == title)
            .ok_or_else(|| StoreError::SheetNotFound(title.to_string()))
    }

    /// Parse the three roster tabs into a snapshot
    pub fn load_roster(&self) -> Result<Roster> {
        let pilots = self.worksheet(RosterTab::Pilots.title())?.records();
        let drones = self.worksheet(RosterTab::Drones.title())?.records();
        let missions = self.worksheet(RosterTab::Missions.title())?.records();

        debug!(
            pilots = pilots.len(),
            drones = drones.len(),
            missions = missions.len(),
            "Workbook tabs read"
        );

        Ok(Roster::from_records(&pilots, &drones, &missions)?)
    }

    /// Point update on one tab
    pub fn update_field(
        &mut self,
        tab: &str,
        id_column: &str,
        id: &str,
        column: &str,
        value: &str,
    ) -> Result<()> {
        self.worksheet_mut(tab)?.update_field(id_column, id, column, value)
    }
}
