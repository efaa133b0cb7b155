//! Plain-text board format.
//!
//! Two integers (rows, columns) followed by `rows * columns` cell tokens,
//! all separated by arbitrary whitespace. A cell token is `true`/`false`
//! or `1`/`0`, case-insensitive.

use std::path::Path;

use crate::error::{Error, Result};
use crate::grid::{Grid, ALIVE, DEAD};

pub fn parse_grid(text: &str) -> Result<Grid> {
    let mut tokens = text.split_whitespace();

    let rows = parse_dimension(tokens.next(), "row count")?;
    let cols = parse_dimension(tokens.next(), "column count")?;
    if rows == 0 || cols == 0 {
        return Err(Error::InvalidDimensions { rows, cols });
    }

    let expected = rows
        .checked_mul(cols)
        .ok_or(Error::InvalidDimensions { rows, cols })?;

    // Parse the body before allocating so a lying header cannot size the board.
    let mut cells = Vec::new();
    for (index, token) in tokens.enumerate() {
        if index == expected {
            return Err(Error::Parse(format!(
                "unexpected token '{token}' after {expected} cells"
            )));
        }
        cells.push(parse_cell(token, index)?);
    }
    if cells.len() < expected {
        return Err(Error::Parse(format!(
            "expected {expected} cells, found {}",
            cells.len()
        )));
    }

    Grid::from_cells(rows, cols, cells)
}

fn parse_dimension(token: Option<&str>, what: &str) -> Result<usize> {
    let token = token.ok_or_else(|| Error::Parse(format!("missing {what}")))?;
    token
        .parse()
        .map_err(|_| Error::Parse(format!("invalid {what} '{token}'")))
}

fn parse_cell(token: &str, index: usize) -> Result<bool> {
    if token.eq_ignore_ascii_case("true") || token == "1" {
        Ok(ALIVE)
    } else if token.eq_ignore_ascii_case("false") || token == "0" {
        Ok(DEAD)
    } else {
        Err(Error::Parse(format!("invalid cell #{index}: '{token}'")))
    }
}

pub fn load_grid<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let grid = parse_grid(&text)?;
    log::info!(
        "Loaded {}x{} grid from {}",
        grid.rows(),
        grid.cols(),
        path.display()
    );
    Ok(grid)
}

/// Header line then one line of `true`/`false` tokens per row.
pub fn format_grid(grid: &Grid) -> String {
    let mut out = format!("{} {}\n", grid.rows(), grid.cols());
    for row in grid.to_rows() {
        let line: Vec<&str> = row
            .iter()
            .map(|&cell| if cell { "true" } else { "false" })
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

pub fn write_grid<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    std::fs::write(path, format_grid(grid))?;
    Ok(())
}
