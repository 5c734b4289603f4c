//! Entity composition model.
//!
//! Every simulated object implements [`Drawable`] around a shared [`Body`]
//! (position, size, sprite, optional style). Entities never point at the
//! [`World`](crate::World): they get a borrowed [`UpdateCtx`] while updating
//! and a [`RenderCtx`] while rendering.

use std::any::Any;
use std::fmt;

use crate::surface::{draw_line, Surface};
use crate::types::{CellStyle, Point};
use crate::world::UpdateCtx;

/// Stable identity of an entity inside one World.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub(crate) u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// World-wide values a sprite needs while drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderCtx {
    /// Used when a body has no style override.
    pub default_style: CellStyle,
    /// Lines are clipped at this column.
    pub max_width: i32,
}

/// Upcast helper so `dyn Drawable` can be downcast to its concrete type.
pub trait AsAny: Any + 'static {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Capability set shared by everything the World simulates.
pub trait Drawable: AsAny + 'static {
    /// Advance one simulation step.
    ///
    /// May mutate siblings through `ctx`, spawn new entities or remove itself.
    /// Spawns and removals take effect once the whole pass is done.
    fn update(&mut self, ctx: &mut UpdateCtx<'_>);

    fn body(&self) -> &Body;

    /// Emit the current sprite. The default draws [`Drawable::body`].
    fn render(&self, surface: &mut dyn Surface, ctx: &RenderCtx) {
        self.body().draw(surface, ctx);
    }
}

impl dyn Drawable {
    pub fn downcast_ref<T: Drawable>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Drawable>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }

    pub fn is<T: Drawable>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

/// Positioned, sprited base record of an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    /// Possibly multi-line text; line `i` is drawn at row `y + i`.
    pub sprite: String,
    /// Replaces the World default style when set.
    pub style: Option<CellStyle>,
}

impl Body {
    pub fn new(at: Point, sprite: impl Into<String>) -> Self {
        Self {
            x: at.x,
            y: at.y,
            w: 1,
            h: 1,
            sprite: sprite.into(),
            style: None,
        }
    }

    pub fn with_size(mut self, w: i32, h: i32) -> Self {
        self.w = w;
        self.h = h;
        self
    }

    pub fn with_style(mut self, style: CellStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Centre cell of the bounding box (the position itself for 1x1 bodies).
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    pub fn set_glyph(&mut self, glyph: char) {
        self.sprite.clear();
        self.sprite.push(glyph);
    }

    pub fn draw(&self, surface: &mut dyn Surface, ctx: &RenderCtx) {
        let style = self.style.unwrap_or(ctx.default_style);
        for (row, line) in self.sprite.split('\n').enumerate() {
            draw_line(surface, self.x, self.y + row as i32, line, style, ctx.max_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::testing::RecordingSurface;
    use crate::types::Rgb;

    fn ctx(max_width: i32) -> RenderCtx {
        RenderCtx {
            default_style: CellStyle::default(),
            max_width,
        }
    }

    #[test]
    fn multi_line_sprite_draws_each_row() {
        let body = Body::new(Point::new(2, 3), "ab\ncd");
        let mut s = RecordingSurface::new(20, 20);
        body.draw(&mut s, &ctx(20));
        assert_eq!(s.glyph_at(2, 3), Some('a'));
        assert_eq!(s.glyph_at(3, 3), Some('b'));
        assert_eq!(s.glyph_at(2, 4), Some('c'));
        assert_eq!(s.glyph_at(3, 4), Some('d'));
    }

    #[test]
    fn style_override_wins_over_default() {
        let red = CellStyle::BASE.with_fg(Rgb::new(255, 0, 0));
        let mut s = RecordingSurface::new(5, 1);
        Body::new(Point::new(0, 0), "a").draw(&mut s, &ctx(5));
        Body::new(Point::new(1, 0), "b")
            .with_style(red)
            .draw(&mut s, &ctx(5));
        assert_eq!(s.cells[0].4, CellStyle::default());
        assert_eq!(s.cells[1].4, red);
    }

    #[test]
    fn lines_clip_at_max_width() {
        let body = Body::new(Point::new(3, 0), "hello\nhi");
        let mut s = RecordingSurface::new(5, 2);
        body.draw(&mut s, &ctx(5));
        let row0: String = s.cells.iter().filter(|c| c.1 == 0).map(|c| c.2).collect();
        let row1: String = s.cells.iter().filter(|c| c.1 == 1).map(|c| c.2).collect();
        assert_eq!(row0, "he");
        assert_eq!(row1, "hi");
    }

    #[test]
    fn center_of_wide_body() {
        let body = Body::new(Point::new(10, 4), "xxx").with_size(3, 1);
        assert_eq!(body.center(), Point::new(11, 4));
        assert_eq!(Body::new(Point::new(1, 1), "x").center(), Point::new(1, 1));
    }
}
