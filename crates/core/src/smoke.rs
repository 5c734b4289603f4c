//! Smoke left behind by burnt-out cells.

use rand::Rng;

use crate::entity::{Body, Drawable};
use crate::types::{CellStyle, Point, Rgb, SMOKE_GRADIENT, SMOKE_GREY};
use crate::world::UpdateCtx;

/// A drifting, fading particle.
///
/// Each update it thins its glyph, picks a new grey, rises one row and
/// wanders at most one column sideways. It leaves the World when its decay
/// counter runs out or it rises above row 0, so a particle spawned with
/// counter `N` is gone after its `N`-th update at the latest.
#[derive(Debug, Clone, PartialEq)]
pub struct Smoke {
    body: Body,
    hitpoints: i32,
}

impl Smoke {
    pub fn new(at: Point, hitpoints: i32) -> Self {
        Self {
            body: Body::new(at, SMOKE_GRADIENT[0].to_string())
                .with_style(CellStyle::BASE.with_fg(Rgb::grey(SMOKE_GREY.1))),
            hitpoints,
        }
    }

    pub fn hitpoints(&self) -> i32 {
        self.hitpoints
    }

    pub fn position(&self) -> Point {
        self.body.point()
    }

    fn faded(&self) -> bool {
        self.hitpoints <= 0 || self.body.y < 0
    }
}

/// Gradient index for a particle with `hitpoints` left.
///
/// Anything at or above the gradient length maps to the densest glyph; one
/// hitpoint left maps to the sparsest.
pub fn gradient_index(hitpoints: i32) -> usize {
    let len = SMOKE_GRADIENT.len() as i32;
    (len - hitpoints).clamp(0, len - 1) as usize
}

impl Drawable for Smoke {
    fn update(&mut self, ctx: &mut UpdateCtx<'_>) {
        if self.faded() {
            ctx.remove_self();
            return;
        }

        self.body.set_glyph(SMOKE_GRADIENT[gradient_index(self.hitpoints)]);
        let shade = ctx.rng().gen_range(SMOKE_GREY.0..=SMOKE_GREY.1);
        self.body.style = Some(ctx.style().with_fg(Rgb::grey(shade)));

        self.hitpoints -= 1;
        let dx = ctx.rng().gen_range(-1..=1);
        self.body.translate(dx, -1);

        if self.faded() {
            ctx.remove_self();
        }
    }

    fn body(&self) -> &Body {
        &self.body
    }
}
