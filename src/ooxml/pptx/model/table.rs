/// Table model for PowerPoint presentations.
///
/// Tables are DrawingML tables (`a:tbl`) hosted by a graphic frame shape.
/// They hold rows, which hold cells; column widths live on the table grid.
use crate::common::style::{Length, VerticalAnchor};
use crate::ooxml::error::{PptxError, Result};
use std::fmt::Write as FmtWrite;

use super::text::TextFrame;

/// Style id of "Medium Style 2 - Accent 1", the default for new tables.
pub const DEFAULT_TABLE_STYLE_ID: &str = "{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}";

/// A table in a PowerPoint presentation.
///
/// # Examples
///
/// ```rust
/// use slidecraft::common::Length;
/// use slidecraft::ooxml::pptx::Table;
///
/// let mut table = Table::new(2, 3, Length::from_cm(9.0), Length::from_cm(2.0));
/// table.cell_mut(0, 0)?.set_text("Region");
/// assert_eq!(table.row_count(), 2);
/// assert_eq!(table.column_count(), 3);
/// assert_eq!(table.cell(0, 0)?.text(), "Region");
/// # Ok::<(), slidecraft::PptxError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    rows: Vec<TableRow>,
    column_widths: Vec<Length>,
    first_row: bool,
    band_row: bool,
}

impl Table {
    /// Create an empty `rows` x `cols` table.
    ///
    /// `width` and `height` are divided evenly between columns and rows.
    pub fn new(rows: usize, cols: usize, width: Length, height: Length) -> Self {
        let column_width = width.split_even(cols);
        let row_height = height.split_even(rows);

        Self {
            rows: (0..rows).map(|_| TableRow::new(cols, row_height)).collect(),
            column_widths: vec![column_width; cols],
            first_row: true,
            band_row: true,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [TableRow] {
        &mut self.rows
    }

    pub fn column_widths(&self) -> &[Length] {
        &self.column_widths
    }

    /// Set the width of one column.
    pub fn set_column_width(&mut self, col_idx: usize, width: Length) -> Result<()> {
        let (rows, cols) = (self.row_count(), self.column_count());
        let slot = self
            .column_widths
            .get_mut(col_idx)
            .ok_or(PptxError::CellIndexOutOfRange {
                row: 0,
                col: col_idx,
                rows,
                cols,
            })?;
        *slot = width;
        Ok(())
    }

    /// Whether the first row gets the table style's header formatting.
    pub fn first_row(&self) -> bool {
        self.first_row
    }

    pub fn set_first_row(&mut self, value: bool) {
        self.first_row = value;
    }

    /// Whether rows get alternating band formatting.
    pub fn band_row(&self) -> bool {
        self.band_row
    }

    pub fn set_band_row(&mut self, value: bool) {
        self.band_row = value;
    }

    /// Get the cell at a zero-based row and column.
    pub fn cell(&self, row_idx: usize, col_idx: usize) -> Result<&TableCell> {
        let err = self.out_of_range(row_idx, col_idx);
        self.rows
            .get(row_idx)
            .and_then(|row| row.cells.get(col_idx))
            .ok_or(err)
    }

    /// Get the cell at a zero-based row and column, mutably.
    pub fn cell_mut(&mut self, row_idx: usize, col_idx: usize) -> Result<&mut TableCell> {
        let err = self.out_of_range(row_idx, col_idx);
        self.rows
            .get_mut(row_idx)
            .and_then(|row| row.cells.get_mut(col_idx))
            .ok_or(err)
    }

    fn out_of_range(&self, row: usize, col: usize) -> PptxError {
        PptxError::CellIndexOutOfRange {
            row,
            col,
            rows: self.row_count(),
            cols: self.column_count(),
        }
    }

    /// Write the `a:tbl` element.
    pub(crate) fn write_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:tbl>");

        write!(
            xml,
            r#"<a:tblPr firstRow="{}" bandRow="{}">"#,
            u8::from(self.first_row),
            u8::from(self.band_row)
        )?;
        write!(xml, "<a:tableStyleId>{}</a:tableStyleId>", DEFAULT_TABLE_STYLE_ID)?;
        xml.push_str("</a:tblPr>");

        xml.push_str("<a:tblGrid>");
        for width in &self.column_widths {
            write!(xml, r#"<a:gridCol w="{}"/>"#, width.emus())?;
        }
        xml.push_str("</a:tblGrid>");

        for row in &self.rows {
            row.write_xml(xml)?;
        }

        xml.push_str("</a:tbl>");
        Ok(())
    }
}

/// A row in a PowerPoint table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    height: Length,
    cells: Vec<TableCell>,
}

impl TableRow {
    fn new(cols: usize, height: Length) -> Self {
        Self {
            height,
            cells: vec![TableCell::new(); cols],
        }
    }

    pub fn height(&self) -> Length {
        self.height
    }

    pub fn set_height(&mut self, height: Length) {
        self.height = height;
    }

    pub fn cells(&self) -> &[TableCell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [TableCell] {
        &mut self.cells
    }

    fn write_xml(&self, xml: &mut String) -> Result<()> {
        write!(xml, r#"<a:tr h="{}">"#, self.height.emus())?;
        for cell in &self.cells {
            cell.write_xml(xml)?;
        }
        xml.push_str("</a:tr>");
        Ok(())
    }
}

/// A cell in a PowerPoint table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableCell {
    text_frame: TextFrame,
    vertical_anchor: Option<VerticalAnchor>,
    grid_span: Option<u32>,
}

impl TableCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the cell, paragraphs joined with newlines.
    pub fn text(&self) -> String {
        self.text_frame.text()
    }

    /// Replace the cell content, dropping any run formatting.
    pub fn set_text(&mut self, text: &str) {
        self.text_frame.set_text(text);
    }

    pub fn text_frame(&self) -> &TextFrame {
        &self.text_frame
    }

    pub fn text_frame_mut(&mut self) -> &mut TextFrame {
        &mut self.text_frame
    }

    pub fn vertical_anchor(&self) -> Option<VerticalAnchor> {
        self.vertical_anchor
    }

    pub fn set_vertical_anchor(&mut self, anchor: Option<VerticalAnchor>) {
        self.vertical_anchor = anchor;
    }

    /// Number of grid columns this cell covers (`gridSpan`), if set.
    pub fn grid_span(&self) -> Option<u32> {
        self.grid_span
    }

    pub fn set_grid_span(&mut self, span: Option<u32>) {
        self.grid_span = span;
    }

    fn write_xml(&self, xml: &mut String) -> Result<()> {
        match self.grid_span {
            Some(span) => write!(xml, r#"<a:tc gridSpan="{}">"#, span)?,
            None => xml.push_str("<a:tc>"),
        }

        self.text_frame.write_xml(xml, "a:txBody", "<a:bodyPr/>")?;

        match self.vertical_anchor {
            Some(anchor) => write!(xml, r#"<a:tcPr anchor="{}"/>"#, anchor.as_xml_value())?,
            None => xml.push_str("<a:tcPr/>"),
        }

        xml.push_str("</a:tc>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(table: &Table) -> String {
        let mut xml = String::new();
        table.write_xml(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_new_table_dimensions() {
        let table = Table::new(3, 4, Length::from_emus(4_000_000), Length::from_emus(900_000));
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 4);
        assert!(table.column_widths().iter().all(|w| w.emus() == 1_000_000));
        assert!(table.rows().iter().all(|r| r.height().emus() == 300_000));
        assert!(table.rows().iter().all(|r| r.cells().len() == 4));
        assert!(table.first_row());
        assert!(table.band_row());
    }

    #[test]
    fn test_cell_out_of_range() {
        let mut table = Table::new(2, 2, Length::from_cm(4.0), Length::from_cm(2.0));
        assert!(table.cell(1, 1).is_ok());
        assert!(matches!(
            table.cell(2, 0),
            Err(PptxError::CellIndexOutOfRange { row: 2, col: 0, rows: 2, cols: 2 })
        ));
        assert!(table.cell_mut(0, 5).is_err());
        assert!(table.set_column_width(2, Length::ZERO).is_err());
    }

    #[test]
    fn test_cell_text() {
        let mut table = Table::new(1, 1, Length::from_cm(4.0), Length::from_cm(1.0));
        table.cell_mut(0, 0).unwrap().set_text("42");
        assert_eq!(table.cell(0, 0).unwrap().text(), "42");
    }

    #[test]
    fn test_table_xml() {
        let mut table = Table::new(1, 2, Length::from_emus(200), Length::from_emus(50));
        table.set_band_row(false);
        let cell = table.cell_mut(0, 0).unwrap();
        cell.set_text("Name");
        cell.set_vertical_anchor(Some(VerticalAnchor::Middle));
        cell.set_grid_span(Some(2));

        let xml = render(&table);
        assert!(xml.starts_with(r#"<a:tbl><a:tblPr firstRow="1" bandRow="0">"#));
        assert!(xml.contains(DEFAULT_TABLE_STYLE_ID));
        assert!(xml.contains(r#"<a:tblGrid><a:gridCol w="100"/><a:gridCol w="100"/></a:tblGrid>"#));
        assert!(xml.contains(r#"<a:tr h="50"><a:tc gridSpan="2"><a:txBody>"#));
        assert!(xml.contains(r#"<a:t>Name</a:t>"#));
        assert!(xml.contains(r#"<a:tcPr anchor="ctr"/></a:tc><a:tc><a:txBody>"#));
        assert!(xml.ends_with("<a:tcPr/></a:tc></a:tr></a:tbl>"));
    }
}
