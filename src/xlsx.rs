//! Decode the first sheet of an `.xlsx` workbook into [`Sheet`] and encode a
//! table of cells back into workbook bytes.

use crate::sheet::{Cell, Sheet};
use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
use std::io::Cursor;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("The workbook contains no sheets")]
    NoSheets,
    #[error("The first sheet has no data rows")]
    NoDataRows,
    #[error(transparent)]
    Decode(#[from] calamine::XlsxError),
    #[error(transparent)]
    Write(#[from] rust_xlsxwriter::XlsxError),
}

/// Decode `bytes` as an `.xlsx` workbook and return its first sheet.
///
/// The first row becomes the headers; every following row is padded to the
/// header width so the caller can index columns without bounds checks. A
/// workbook without sheets, or whose first sheet lacks a header row or data
/// rows, is an error.
pub fn read_first_sheet(bytes: &[u8]) -> Result<Sheet, Error> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))?;
    let name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(Error::NoSheets)?;
    let range = workbook.worksheet_range_at(0).ok_or(Error::NoSheets)??;
    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .ok_or(Error::NoDataRows)?
        .iter()
        .map(|cell| cell.to_string())
        .collect();
    let rows: Vec<Vec<Cell>> = rows
        .map(|row| {
            (0..headers.len())
                .map(|at| row.get(at).map(cell_value).unwrap_or(Cell::Empty))
                .collect()
        })
        .collect();
    if rows.is_empty() {
        return Err(Error::NoDataRows);
    }
    Ok(Sheet {
        name,
        headers,
        rows,
    })
}

fn cell_value(cell: &Data) -> Cell {
    match cell {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(text) => Cell::Text(text.clone()),
        Data::Float(value) => Cell::Number(*value),
        Data::Int(value) => Cell::Number(*value as f64),
        Data::Bool(value) => Cell::Text(value.to_string()),
        Data::DateTime(value) => Cell::Number(value.as_f64()),
        Data::DateTimeIso(text) | Data::DurationIso(text) => Cell::Text(text.clone()),
    }
}

/// Encode a single-sheet workbook with `headers` on the first row and `rows`
/// below it, returning the finished file as bytes.
pub fn write_table(sheet_name: &str, headers: &[&str], rows: &[Vec<Cell>]) -> Result<Vec<u8>, Error> {
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let worksheet = workbook.add_worksheet().set_name(sheet_name)?;
    for (at, header) in headers.iter().enumerate() {
        worksheet.write_string(0, at as u16, *header)?;
    }
    for (line, row) in rows.iter().enumerate() {
        for (at, cell) in row.iter().enumerate() {
            match cell {
                Cell::Empty => {}
                Cell::Number(value) => {
                    worksheet.write_number(line as u32 + 1, at as u16, *value)?;
                }
                Cell::Text(text) => {
                    worksheet.write_string(line as u32 + 1, at as u16, text)?;
                }
            }
        }
    }
    Ok(workbook.save_to_buffer()?)
}
