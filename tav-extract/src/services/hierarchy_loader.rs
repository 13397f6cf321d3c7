//! Task encoding hierarchy loader
//!
//! The coding manual workbook lists tasks in column B, subtasks in column C
//! and subtask components in column D, starting on row 2 (row 1 is a header).
//! A task or subtask cell stays in effect for the rows below it until the
//! next non-empty cell in that column.

use crate::models::{HierarchyMap, TaskHierarchy};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;
use thiserror::Error;

/// Default worksheet holding the hierarchy
pub const DEFAULT_SHEET: &str = "Sheet1";

/// Hierarchy loading errors
#[derive(Debug, Error)]
pub enum HierarchyError {
    /// Workbook could not be opened or read
    #[error("Workbook error: {0}")]
    Workbook(String),

    /// Requested worksheet does not exist
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),
}

/// One spreadsheet row reduced to its three hierarchy cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HierarchyRow {
    pub task: Option<String>,
    pub subtask: Option<String>,
    pub component: Option<String>,
}

impl HierarchyRow {
    /// Build row; blank or whitespace-only cells become `None`
    pub fn new(task: Option<&str>, subtask: Option<&str>, component: Option<&str>) -> Self {
        Self {
            task: non_blank(task),
            subtask: non_blank(subtask),
            component: non_blank(component),
        }
    }
}

fn non_blank(cell: Option<&str>) -> Option<String> {
    cell.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Folds rows into task hierarchies
#[derive(Debug, Default)]
pub struct HierarchyBuilder {
    hierarchies: HierarchyMap,
    current_task: Option<String>,
    current_subtask: Option<String>,
}

impl HierarchyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one row
    ///
    /// Rows before the first task are skipped. A new task clears the current
    /// subtask; a component with no current subtask is dropped.
    pub fn push_row(&mut self, row: HierarchyRow) {
        if row.task.is_none() && self.current_task.is_none() {
            return;
        }

        if let Some(task) = row.task {
            self.hierarchies
                .entry(task.clone())
                .or_insert_with(|| TaskHierarchy::new(task.clone()));
            self.current_task = Some(task);
            self.current_subtask = None;
        }

        let Some(task) = self.current_task.as_ref() else {
            return;
        };
        let Some(hierarchy) = self.hierarchies.get_mut(task) else {
            return;
        };

        if let Some(subtask) = row.subtask {
            hierarchy.subtasks.entry(subtask.clone()).or_default();
            self.current_subtask = Some(subtask);
        }

        if let (Some(component), Some(subtask)) = (row.component, self.current_subtask.as_ref()) {
            if let Some(components) = hierarchy.subtasks.get_mut(subtask) {
                components.push(component);
            }
        }
    }

    pub fn finish(self) -> HierarchyMap {
        self.hierarchies
    }

    /// Fold a complete row sequence
    pub fn from_rows<I>(rows: I) -> HierarchyMap
    where
        I: IntoIterator<Item = HierarchyRow>,
    {
        let mut builder = Self::new();
        for row in rows {
            builder.push_row(row);
        }
        builder.finish()
    }
}

/// Load hierarchies from a workbook (xlsx, xls, ods)
///
/// # Errors
/// `Workbook` if the file cannot be opened, `SheetNotFound` if `sheet` is absent.
pub fn load_workbook(path: &Path, sheet: &str) -> Result<HierarchyMap, HierarchyError> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| HierarchyError::Workbook(format!("{}: {}", path.display(), e)))?;

    if !workbook.sheet_names().iter().any(|name| name == sheet) {
        return Err(HierarchyError::SheetNotFound(sheet.to_string()));
    }

    let range = workbook
        .worksheet_range(sheet)
        .map_err(|e| HierarchyError::Workbook(e.to_string()))?;

    let Some((last_row, _)) = range.end() else {
        tracing::warn!("Sheet {} is empty", sheet);
        return Ok(HierarchyMap::new());
    };

    // Positions are absolute: the used range may not begin at A1.
    let cell = |row: u32, col: u32| -> Option<String> {
        match range.get_value((row, col)) {
            None | Some(Data::Empty) => None,
            Some(value) => Some(value.to_string()),
        }
    };

    let rows = (1..=last_row).map(|row| {
        let task = cell(row, 1);
        let subtask = cell(row, 2);
        let component = cell(row, 3);
        HierarchyRow::new(task.as_deref(), subtask.as_deref(), component.as_deref())
    });

    let hierarchies = HierarchyBuilder::from_rows(rows);

    tracing::info!(
        tasks = hierarchies.len(),
        "Loaded task hierarchies from {}",
        path.display()
    );

    Ok(hierarchies)
}
