//! Response definitions
//!
//! Owned results of executed commands.

use std::fmt;

use crate::cell::ValueCell;

/// Result of a command
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Number of rows/tags a mutation touched (0: skipped by a guard)
    Applied(usize),

    Cells(Vec<ValueCell>),

    Rows(Vec<(i64, Vec<ValueCell>)>),

    Tags(Vec<String>),

    Length(usize),
}

impl Response {
    /// Applied response from a single guarded mutation
    pub fn applied(done: bool) -> Self {
        Response::Applied(usize::from(done))
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Applied(0) => write!(f, "SKIPPED"),
            Response::Applied(count) => write!(f, "OK ({} applied)", count),
            Response::Cells(cells) if cells.is_empty() => write!(f, "(empty)"),
            Response::Cells(cells) => write_cells(f, cells),
            Response::Rows(rows) if rows.is_empty() => write!(f, "(empty)"),
            Response::Rows(rows) => {
                for (index, (timestamp, cells)) in rows.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}: ", timestamp)?;
                    write_cells(f, cells)?;
                }
                Ok(())
            }
            Response::Tags(tags) if tags.is_empty() => write!(f, "(empty)"),
            Response::Tags(tags) => write!(f, "{}", tags.join(" ")),
            Response::Length(length) => write!(f, "{}", length),
        }
    }
}

fn write_cells(f: &mut fmt::Formatter<'_>, cells: &[ValueCell]) -> fmt::Result {
    for (index, cell) in cells.iter().enumerate() {
        if index > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", cell)?;
    }
    Ok(())
}
