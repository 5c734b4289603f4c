//! Framebuffer of styled character cells.

use arrayvec::ArrayVec;
use unicode_width::UnicodeWidthChar;

use crate::core::{Surface, MAX_MARKS};
use crate::types::CellStyle;

/// Placeholder in the cell to the right of a double-width glyph.
pub const CONTINUATION: char = '\0';

/// A single terminal cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    /// Combining marks printed right after `ch`.
    pub marks: ArrayVec<char, MAX_MARKS>,
    pub style: CellStyle,
}

impl Cell {
    pub fn new(ch: char, style: CellStyle) -> Self {
        Self {
            ch,
            marks: ArrayVec::new(),
            style,
        }
    }

    pub fn is_continuation(&self) -> bool {
        self.ch == CONTINUATION
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(' ', CellStyle::default())
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible. Contents are
    /// not reflowed; callers redraw after a resize.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.clear();
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.idx(x, y).map(|i| &self.cells[i])
    }

    /// Store `cell` at `(x, y)`, keeping wide glyphs consistent.
    ///
    /// Overwriting either half of a double-width glyph blanks the other half.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        let Some(i) = self.idx(x, y) else {
            return;
        };

        if self.cells[i].is_continuation() && x > 0 {
            self.cells[i - 1] = Cell::new(' ', self.cells[i - 1].style);
        }
        if x + 1 < self.width && self.cells[i + 1].is_continuation() {
            self.cells[i + 1] = Cell::new(' ', self.cells[i + 1].style);
        }

        let wide = cell.ch.width() == Some(2);
        let style = cell.style;
        if wide && x + 1 >= self.width {
            // No room for the right half.
            self.cells[i] = Cell::new(' ', style);
            return;
        }
        self.cells[i] = cell;
        if wide {
            if x + 2 < self.width && self.cells[i + 2].is_continuation() {
                self.cells[i + 2] = Cell::new(' ', self.cells[i + 2].style);
            }
            self.cells[i + 1] = Cell::new(CONTINUATION, style);
        }
    }

    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell::new(ch, style));
    }

    /// Visible text of row `y`, marks included and continuations skipped.
    pub fn row_text(&self, y: u16) -> String {
        let mut out = String::new();
        for x in 0..self.width {
            if let Some(cell) = self.get(x, y) {
                if cell.is_continuation() {
                    continue;
                }
                out.push(cell.ch);
                out.extend(cell.marks.iter());
            }
        }
        out
    }
}

impl Surface for FrameBuffer {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn set_cell(&mut self, x: i32, y: i32, glyph: char, combining: &[char], style: CellStyle) {
        let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
            return;
        };
        let mut cell = Cell::new(glyph, style);
        cell.marks.extend(combining.iter().copied().take(MAX_MARKS));
        self.set(x, y, cell);
    }

    fn clear(&mut self) {
        self.fill(Cell::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::draw_line;
    use crate::types::Rgb;

    #[test]
    fn out_of_range_writes_are_ignored() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.set_cell(-1, 0, 'a', &[], CellStyle::BASE);
        fb.set_cell(0, 5, 'a', &[], CellStyle::BASE);
        fb.set_cell(3, 0, 'a', &[], CellStyle::BASE);
        assert!(fb.cells().iter().all(|c| *c == Cell::default()));
    }

    #[test]
    fn wide_glyph_takes_two_cells() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_char(1, 0, '漢', CellStyle::BASE);
        assert_eq!(fb.get(1, 0).unwrap().ch, '漢');
        assert!(fb.get(2, 0).unwrap().is_continuation());
        assert_eq!(fb.row_text(0), " 漢 ");

        // Overwriting the right half clears the left half.
        fb.put_char(2, 0, 'x', CellStyle::BASE);
        assert_eq!(fb.row_text(0), "  x ");
    }

    #[test]
    fn wide_glyph_at_the_edge_becomes_blank() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.put_char(1, 0, '漢', CellStyle::BASE);
        assert_eq!(fb.row_text(0), "  ");
    }

    #[test]
    fn combining_marks_stay_on_their_glyph() {
        let mut fb = FrameBuffer::new(5, 1);
        let end = draw_line(&mut fb, 0, 0, "e\u{301}x", CellStyle::BASE, 5);
        assert_eq!(end, 2);
        assert_eq!(fb.get(0, 0).unwrap().marks.as_slice(), &['\u{301}']);
        assert_eq!(fb.row_text(0), "e\u{301}x   ");
    }

    #[test]
    fn clear_resets_every_cell() {
        let mut fb = FrameBuffer::new(2, 2);
        let red = CellStyle::BASE.with_fg(Rgb::new(255, 0, 0));
        fb.put_char(1, 1, 'z', red);
        Surface::clear(&mut fb);
        assert_eq!(fb.get(1, 1), Some(&Cell::default()));
    }

    #[test]
    fn resize_blanks_contents() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.put_char(0, 0, 'a', CellStyle::BASE);
        fb.resize(3, 2);
        assert_eq!(fb.size(), (3, 2));
        assert_eq!(fb.row_text(0), "   ");
    }
}
