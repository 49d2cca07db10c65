//! Line-oriented rendering of neighbour rows and the vertex mapping.
//!
//! Row format: `<source>: <id>,<distance> <id>,<distance> ...`, one row per
//! line, records separated by single spaces. Distances use the default
//! `f64` display (shortest round-trip form), so placeholders render as
//! `inf`. Mapping format: `<external id> <index>`, one pair per line in
//! assignment order.

use std::io::{self, Write};

use crate::{
    neighbour::{NeighbourRow, NeighbourTable},
    vertex::VertexRegistry,
};

/// Writes one neighbour row followed by a newline.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
///
/// # Examples
/// ```
/// use pathknn_core::{Neighbour, NeighbourRow, write_row};
///
/// let row = NeighbourRow::new(
///     0,
///     vec![Neighbour { id: 2, distance: 0.5 }, Neighbour::placeholder(1)],
/// );
/// let mut buffer = Vec::new();
/// write_row(&mut buffer, &row)?;
/// assert_eq!(String::from_utf8(buffer)?, "0: 2,0.5 1,inf\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_row(mut writer: impl Write, row: &NeighbourRow) -> io::Result<()> {
    write!(writer, "{}:", row.source())?;
    for neighbour in row.neighbours() {
        write!(writer, " {},{}", neighbour.id, neighbour.distance)?;
    }
    writeln!(writer)
}

/// Writes every row of `table` in ascending source order.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
pub fn write_table(mut writer: impl Write, table: &NeighbourTable) -> io::Result<()> {
    for row in table.rows() {
        write_row(&mut writer, row)?;
    }
    Ok(())
}

/// Writes the `external id -> index` mapping in assignment order.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
///
/// # Examples
/// ```
/// use pathknn_core::{VertexId, VertexRegistry, write_mapping};
///
/// let mut registry = VertexRegistry::new();
/// registry.normalize(VertexId::new(40));
/// registry.normalize(VertexId::new(7));
/// let mut buffer = Vec::new();
/// write_mapping(&mut buffer, &registry)?;
/// assert_eq!(String::from_utf8(buffer)?, "40 0\n7 1\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_mapping(mut writer: impl Write, registry: &VertexRegistry) -> io::Result<()> {
    for (id, index) in registry.entries() {
        writeln!(writer, "{id} {index}")?;
    }
    Ok(())
}
