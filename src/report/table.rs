use std::fmt::{self, Display};

use crate::algorithm::{Cell, StepRecord, Trace};
use crate::graph::{Cost, NodeId};

const UNREACHABLE_LABEL: &str = "inf";
const NO_PREDECESSOR_LABEL: &str = "N/A";

/// Renders a trace as a bordered ASCII table, one row per step
///
/// ```text
/// +------+-----------+------+------+
/// | Step | N         | D(x) | p(x) |
/// +------+-----------+------+------+
/// | 0    | {y}       | 10   | y    |
/// | 1    | {x, y}    |      |      |
/// +------+-----------+------+------+
/// ```
pub struct TraceTable<'a, N, W>
where
    N: NodeId,
    W: Cost,
{
    trace: &'a Trace<N, W>,
    columns: Vec<N>,
}

impl<'a, N, W> TraceTable<'a, N, W>
where
    N: NodeId + Display,
    W: Cost + Display,
{
    /// One `D(n) | p(n)` column pair per node in the trace, ascending
    pub fn new(trace: &'a Trace<N, W>) -> Self {
        TraceTable {
            trace,
            columns: trace.nodes().into_iter().collect(),
        }
    }

    /// Uses the given node order for the column pairs
    pub fn with_columns(trace: &'a Trace<N, W>, columns: Vec<N>) -> Self {
        TraceTable { trace, columns }
    }

    fn header(&self) -> Vec<String> {
        let mut row = vec!["Step".to_string(), "N".to_string()];
        for node in &self.columns {
            row.push(format!("D({})", node));
            row.push(format!("p({})", node));
        }
        row
    }

    fn row(&self, record: &StepRecord<N, W>) -> Vec<String> {
        let settled = record
            .settled()
            .iter()
            .map(|node| node.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let mut row = vec![record.step().to_string(), format!("{{{}}}", settled)];

        for node in &self.columns {
            match record.cell(node) {
                Some(Cell::Tentative { cost, predecessor }) => {
                    row.push(if cost.is_finite() {
                        cost.to_string()
                    } else {
                        UNREACHABLE_LABEL.to_string()
                    });
                    row.push(match predecessor {
                        Some(pred) => pred.to_string(),
                        None => NO_PREDECESSOR_LABEL.to_string(),
                    });
                }
                Some(Cell::Settled) | None => {
                    row.push(String::new());
                    row.push(String::new());
                }
            }
        }
        row
    }

    /// All rows, header first
    pub fn rows(&self) -> Vec<Vec<String>> {
        let mut rows = vec![self.header()];
        rows.extend(self.trace.iter().map(|record| self.row(record)));
        rows
    }
}

fn write_separator(f: &mut fmt::Formatter<'_>, widths: &[usize]) -> fmt::Result {
    write!(f, "+")?;
    for width in widths {
        write!(f, "{}+", "-".repeat(width + 2))?;
    }
    writeln!(f)
}

fn write_row(f: &mut fmt::Formatter<'_>, row: &[String], widths: &[usize]) -> fmt::Result {
    write!(f, "|")?;
    for (cell, width) in row.iter().zip(widths) {
        write!(f, " {:<width$} |", cell, width = width)?;
    }
    writeln!(f)
}

impl<'a, N, W> Display for TraceTable<'a, N, W>
where
    N: NodeId + Display,
    W: Cost + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows();
        let mut widths = vec![0; rows[0].len()];
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        write_separator(f, &widths)?;
        write_row(f, &rows[0], &widths)?;
        write_separator(f, &widths)?;
        for row in &rows[1..] {
            write_row(f, row, &widths)?;
        }
        write_separator(f, &widths)
    }
}
