//! Render surface contract.
//!
//! The simulation never talks to a terminal directly. Entities draw onto a
//! [`Surface`]; the loop additionally needs a [`Display`] to present frames
//! and pick up size changes. `smudge-term` provides the crossterm-backed and
//! headless implementations.

use std::io;

use arrayvec::ArrayVec;
use unicode_width::UnicodeWidthChar;

use crate::types::CellStyle;

/// Most combining marks kept on a single glyph. Extra marks are dropped.
pub const MAX_MARKS: usize = 4;

/// A grid of styled character cells.
pub trait Surface {
    /// Width and height in cells.
    fn size(&self) -> (u16, u16);

    /// Put one glyph (plus combining marks) at `(x, y)`.
    ///
    /// Coordinates outside the surface are ignored.
    fn set_cell(&mut self, x: i32, y: i32, glyph: char, combining: &[char], style: CellStyle);

    /// Blank every cell.
    fn clear(&mut self);
}

/// A surface that can be shown to the user.
pub trait Display: Surface {
    /// Flush the current contents.
    fn present(&mut self) -> io::Result<()>;

    /// Re-read the backend size.
    ///
    /// Returns `true` when the size changed; the next `present` is then a full
    /// redraw.
    fn sync(&mut self) -> io::Result<bool>;
}

/// Draw one line of text starting at `(x, y)`.
///
/// Zero-width characters ride on the glyph before them as combining marks (a
/// leading mark goes on a blank). Wide glyphs advance two columns. The line is
/// truncated, not wrapped, at `max_width`: a glyph that would cross it is not
/// drawn, nor is anything after it. Returns the column after the last glyph
/// drawn.
pub fn draw_line(
    surface: &mut dyn Surface,
    x: i32,
    y: i32,
    line: &str,
    style: CellStyle,
    max_width: i32,
) -> i32 {
    let mut cx = x;
    let mut pending: Option<(char, i32)> = None;
    let mut marks: ArrayVec<char, MAX_MARKS> = ArrayVec::new();

    for ch in line.chars() {
        let w = ch.width().unwrap_or(1) as i32;
        if w == 0 {
            if pending.is_none() {
                pending = Some((' ', 1));
            }
            let _ = marks.try_push(ch);
            continue;
        }

        if let Some((glyph, gw)) = pending.take() {
            if cx + gw > max_width {
                return cx;
            }
            surface.set_cell(cx, y, glyph, &marks, style);
            marks.clear();
            cx += gw;
        }
        pending = Some((ch, w));
    }

    if let Some((glyph, gw)) = pending {
        if cx + gw > max_width {
            return cx;
        }
        surface.set_cell(cx, y, glyph, &marks, style);
        cx += gw;
    }
    cx
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingSurface;
    use super::*;

    #[test]
    fn truncates_at_max_width() {
        let mut s = RecordingSurface::new(10, 1);
        let end = draw_line(&mut s, 7, 0, "abcdef", CellStyle::default(), 10);
        assert_eq!(end, 10);
        let glyphs: Vec<char> = s.cells.iter().map(|c| c.2).collect();
        assert_eq!(glyphs, vec!['a', 'b', 'c']);
    }

    #[test]
    fn combining_marks_attach_to_previous_glyph() {
        let mut s = RecordingSurface::new(10, 1);
        draw_line(&mut s, 0, 0, "e\u{301}x", CellStyle::default(), 10);
        assert_eq!(s.cells.len(), 2);
        assert_eq!(s.cells[0].2, 'e');
        assert_eq!(s.cells[0].3, vec!['\u{301}']);
        assert_eq!(s.cells[1].0, 1);
        assert!(s.cells[1].3.is_empty());
    }

    #[test]
    fn leading_mark_lands_on_blank() {
        let mut s = RecordingSurface::new(10, 1);
        draw_line(&mut s, 0, 0, "\u{301}", CellStyle::default(), 10);
        assert_eq!(s.cells.len(), 1);
        assert_eq!(s.cells[0].2, ' ');
        assert_eq!(s.cells[0].3, vec!['\u{301}']);
    }

    #[test]
    fn wide_glyph_takes_two_columns() {
        let mut s = RecordingSurface::new(10, 1);
        let end = draw_line(&mut s, 0, 0, "火a", CellStyle::default(), 10);
        assert_eq!(end, 3);
        assert_eq!(s.cells[1].0, 2);

        let mut s = RecordingSurface::new(10, 1);
        let end = draw_line(&mut s, 9, 0, "火", CellStyle::default(), 10);
        assert_eq!(end, 9);
        assert!(s.cells.is_empty());
    }
}
