//! Building, styling, merging and walking tables.

use crate::common::style::{Length, RGBColor};
use crate::ooxml::error::{PptxError, Result};
use crate::ooxml::pptx::data::TableData;
use crate::ooxml::pptx::model::{Slide, Table, TableCell};
use log::debug;

use super::style::{CellStyle, TableOptions};

/// Style every run of one cell and reset its color to black.
///
/// Font name, bold and italic follow `style` (switch-on only); the color is
/// set to black whatever the style says.
pub fn bold_table_cell(
    table: &mut Table,
    row_idx: usize,
    col_idx: usize,
    style: &CellStyle,
) -> Result<()> {
    let cell = table.cell_mut(row_idx, col_idx)?;
    for run in cell.text_frame_mut().runs_mut() {
        let font = run.font_mut();
        style.apply(font);
        font.color = Some(RGBColor::BLACK);
    }
    Ok(())
}

/// Build a table from `data` on `slide`.
///
/// Position and size are in centimeters. With `header`, row 0 holds the
/// column names and the data follows from row 1. Every cell gets the
/// stringified value and a middle vertical anchor.
///
/// The data needs at least one column, and at least one row unless `header`
/// is set; otherwise [`PptxError::EmptyTableData`] is returned.
///
/// # Examples
///
/// ```rust
/// use slidecraft::ooxml::pptx::{CellValue, Presentation, TableData};
/// use slidecraft::ooxml::pptx::helpers::create_table;
///
/// let mut data = TableData::new(["Team", "Wins"]);
/// data.push_row([CellValue::from("Red"), CellValue::Int(7)])?;
///
/// let mut pres = Presentation::new();
/// let slide = pres.add_slide();
/// let table = create_table(slide, &data, 1.0, 4.0, 12.0, 3.0, true)?;
/// assert_eq!(table.row_count(), 2);
/// assert_eq!(table.cell(0, 1)?.text(), "Wins");
/// assert_eq!(table.cell(1, 1)?.text(), "7");
/// # Ok::<(), slidecraft::PptxError>(())
/// ```
pub fn create_table<'a>(
    slide: &'a mut Slide,
    data: &TableData,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    header: bool,
) -> Result<&'a mut Table> {
    let options = TableOptions {
        header,
        ..TableOptions::default()
    };
    create_table_with_options(slide, data, left, top, width, height, &options)
}

/// [`create_table`] with full control over header, banding and anchor.
pub fn create_table_with_options<'a>(
    slide: &'a mut Slide,
    data: &TableData,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    options: &TableOptions,
) -> Result<&'a mut Table> {
    let n_cols = data.column_count();
    let n_rows = data.row_count() + usize::from(options.header);
    if n_cols == 0 || n_rows == 0 {
        return Err(PptxError::EmptyTableData);
    }
    data.validate()?;

    let frame = slide.add_table(
        n_rows,
        n_cols,
        Length::from_cm(left),
        Length::from_cm(top),
        Length::from_cm(width),
        Length::from_cm(height),
    );
    let shape_id = frame.shape_id();
    let table = frame.table_mut().ok_or(PptxError::NotATable(shape_id))?;
    table.set_first_row(options.first_row);
    table.set_band_row(options.band_row);

    let header_row = options.header.then(|| data.columns().to_vec());
    let body = data
        .rows()
        .iter()
        .map(|row| row.iter().map(ToString::to_string).collect::<Vec<_>>());

    for (row_idx, values) in header_row.into_iter().chain(body).enumerate() {
        for (col_idx, value) in values.iter().enumerate() {
            let cell = table.cell_mut(row_idx, col_idx)?;
            cell.set_text(value);
            cell.set_vertical_anchor(Some(options.anchor));
        }
    }

    debug!("created {}x{} table", n_rows, n_cols);
    Ok(table)
}

/// Merge cells `start_col_idx..=end_col_idx` of one row.
///
/// Sets the grid span of the leftmost cell to the number of columns covered.
/// The other cells in the range keep their content and are not marked as
/// covered.
pub fn merge_cells_horizontally(
    table: &mut Table,
    start_col_idx: usize,
    end_col_idx: usize,
    row_idx: usize,
) -> Result<()> {
    if end_col_idx < start_col_idx {
        return Err(PptxError::InvalidMergeRange {
            start: start_col_idx,
            end: end_col_idx,
        });
    }
    // Bounds-check the far end of the range as well as the anchor cell
    table.cell(row_idx, end_col_idx)?;

    let span = (end_col_idx - start_col_idx + 1) as u32;
    table
        .cell_mut(row_idx, start_col_idx)?
        .set_grid_span(Some(span));
    debug!(
        "merged columns {}..={} of row {}",
        start_col_idx, end_col_idx, row_idx
    );
    Ok(())
}

/// Every cell of the table, row by row.
///
/// The iterator is `Clone`, and calling this again starts a fresh pass.
///
/// # Examples
///
/// ```rust
/// use slidecraft::common::Length;
/// use slidecraft::ooxml::pptx::Table;
/// use slidecraft::ooxml::pptx::helpers::iter_cells;
///
/// let table = Table::new(2, 3, Length::from_cm(6.0), Length::from_cm(2.0));
/// assert_eq!(iter_cells(&table).count(), 6);
/// ```
pub fn iter_cells(table: &Table) -> impl Iterator<Item = &TableCell> + Clone {
    table.rows().iter().flat_map(|row| row.cells().iter())
}

/// Every cell of the table, row by row, for in-place changes.
pub fn iter_cells_mut(table: &mut Table) -> impl Iterator<Item = &mut TableCell> {
    table
        .rows_mut()
        .iter_mut()
        .flat_map(|row| row.cells_mut().iter_mut())
}
