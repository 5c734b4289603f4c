//! [`Display`] implementations: the real terminal and an in-memory stand-in.

use std::io;

use crossterm::terminal;
use tracing::debug;

use crate::core::{Display, SmudgeError, Surface};
use crate::fb::FrameBuffer;
use crate::renderer::TerminalRenderer;
use crate::types::CellStyle;

/// Crossterm-backed display: raw mode, alternate screen, diffed output.
///
/// Call [`TerminalDisplay::close`] to restore the terminal. Dropping an open
/// display restores it too, ignoring errors.
pub struct TerminalDisplay {
    renderer: TerminalRenderer,
    fb: FrameBuffer,
    open: bool,
}

impl TerminalDisplay {
    pub fn open() -> Result<Self, SmudgeError> {
        let (width, height) = terminal::size().map_err(SmudgeError::Initialization)?;
        let mut renderer = TerminalRenderer::new();
        if let Err(err) = renderer.enter() {
            let _ = renderer.exit();
            return Err(SmudgeError::Initialization(err));
        }
        debug!(width, height, "terminal opened");
        Ok(Self {
            renderer,
            fb: FrameBuffer::new(width, height),
            open: true,
        })
    }

    /// Leave the alternate screen and raw mode. Idempotent.
    pub fn close(&mut self) -> io::Result<()> {
        if !self.open {
            return Ok(());
        }
        self.open = false;
        self.renderer.exit()
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

impl Surface for TerminalDisplay {
    fn size(&self) -> (u16, u16) {
        self.fb.size()
    }

    fn set_cell(&mut self, x: i32, y: i32, glyph: char, combining: &[char], style: CellStyle) {
        self.fb.set_cell(x, y, glyph, combining, style);
    }

    fn clear(&mut self) {
        Surface::clear(&mut self.fb);
    }
}

impl Display for TerminalDisplay {
    fn present(&mut self) -> io::Result<()> {
        self.renderer.draw_swap(&mut self.fb)
    }

    fn sync(&mut self) -> io::Result<bool> {
        let (width, height) = terminal::size()?;
        if (width, height) == self.fb.size() {
            return Ok(false);
        }
        self.fb.resize(width, height);
        self.renderer.invalidate();
        Ok(true)
    }
}

/// In-memory display that keeps the last presented frame.
#[derive(Debug, Clone)]
pub struct HeadlessDisplay {
    fb: FrameBuffer,
    last: Option<FrameBuffer>,
    pending_size: Option<(u16, u16)>,
    frames: u64,
}

impl HeadlessDisplay {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            fb: FrameBuffer::new(width, height),
            last: None,
            pending_size: None,
            frames: 0,
        }
    }

    /// Pretend the backend changed size; seen by the next `sync`.
    pub fn resize_to(&mut self, width: u16, height: u16) {
        self.pending_size = Some((width, height));
    }

    /// Number of frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_frame(&self) -> Option<&FrameBuffer> {
        self.last.as_ref()
    }

    /// Frame being drawn (not yet presented).
    pub fn current(&self) -> &FrameBuffer {
        &self.fb
    }
}

impl Surface for HeadlessDisplay {
    fn size(&self) -> (u16, u16) {
        self.fb.size()
    }

    fn set_cell(&mut self, x: i32, y: i32, glyph: char, combining: &[char], style: CellStyle) {
        self.fb.set_cell(x, y, glyph, combining, style);
    }

    fn clear(&mut self) {
        Surface::clear(&mut self.fb);
    }
}

impl Display for HeadlessDisplay {
    fn present(&mut self) -> io::Result<()> {
        match &mut self.last {
            Some(last) => last.clone_from(&self.fb),
            None => self.last = Some(self.fb.clone()),
        }
        self.frames += 1;
        Ok(())
    }

    fn sync(&mut self) -> io::Result<bool> {
        match self.pending_size.take() {
            Some(size) if size != self.fb.size() => {
                self.fb.resize(size.0, size.1);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
