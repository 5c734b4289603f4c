//! Character cells and the fire that burns them.
//!
//! A cell is Unignited until something ignites it, then Burning: it loses one
//! hitpoint per step and flickers. When it runs out it spreads one last time
//! (if it never did), leaves a [`Smoke`] particle behind and removes itself.
//!
//! Spreading is a one-shot action per cell. It looks for unignited cells one
//! step away (see [`adjacent`]) and ignites a lone candidate for sure, or each
//! of several candidates with `fan_out_chance`. Early spreading while burning
//! makes fronts branch; the forced spread at death keeps fire moving.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

use crate::entity::{Body, Drawable, EntityId};
use crate::smoke::Smoke;
use crate::types::{adjacent, CellStyle, Point, Rgb, FIRE_BLUE, FIRE_GREEN, FIRE_RED};
use crate::world::{SimRng, UpdateCtx, World};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireState {
    Unignited,
    Burning,
}

/// One glyph of the smudge stick.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterCell {
    body: Body,
    ignited: bool,
    has_spread: bool,
    hitpoints: i32,
}

impl CharacterCell {
    pub fn new(at: Point, glyph: char, style: CellStyle, hitpoints: i32) -> Self {
        Self {
            body: Body::new(at, glyph.to_string()).with_style(style),
            ignited: false,
            has_spread: false,
            hitpoints,
        }
    }

    /// Builder form of [`CharacterCell::ignite`].
    pub fn ignited(mut self) -> Self {
        self.ignite();
        self
    }

    /// Unignited → Burning. No-op when already burning.
    pub fn ignite(&mut self) {
        self.ignited = true;
    }

    pub fn is_ignited(&self) -> bool {
        self.ignited
    }

    pub fn has_spread(&self) -> bool {
        self.has_spread
    }

    pub fn hitpoints(&self) -> i32 {
        self.hitpoints
    }

    pub fn state(&self) -> FireState {
        if self.ignited {
            FireState::Burning
        } else {
            FireState::Unignited
        }
    }

    pub fn position(&self) -> Point {
        self.body.point()
    }

    /// Try to ignite unignited neighbours. Latches `has_spread`.
    ///
    /// Returns how many cells were ignited.
    pub fn spread(&mut self, ctx: &mut UpdateCtx<'_>) -> usize {
        self.has_spread = true;

        let origin = self.body.center();
        let candidates = ctx.world().filter_ids(|d| {
            d.downcast_ref::<CharacterCell>()
                .is_some_and(|c| !c.ignited && adjacent(origin, c.body.center()))
        });

        let chosen: Vec<EntityId> = match candidates.len() {
            0 => return 0,
            1 => candidates,
            _ => {
                let chance = ctx.config().fan_out_chance;
                candidates
                    .into_iter()
                    .filter(|_| ctx.rng().gen_bool(chance))
                    .collect()
            }
        };

        for &id in &chosen {
            if let Some(cell) = ctx.get_as_mut::<CharacterCell>(id) {
                cell.ignite();
            }
        }
        trace!(from = %self.body.point(), ignited = chosen.len(), "spread");
        chosen.len()
    }

    fn die(&mut self, ctx: &mut UpdateCtx<'_>) {
        if !self.has_spread {
            self.spread(ctx);
        }
        let smoke = Smoke::new(self.body.point(), ctx.config().smoke_hitpoints);
        ctx.spawn(Box::new(smoke));
        ctx.remove_self();
        trace!(at = %self.body.point(), "burnt out");
    }

    fn flicker(&mut self, ctx: &mut UpdateCtx<'_>) {
        let style = ctx.style().with_fg(fire_color(ctx.rng()));
        self.body.style = Some(style);
    }
}

impl Drawable for CharacterCell {
    fn update(&mut self, ctx: &mut UpdateCtx<'_>) {
        if self.hitpoints <= 0 {
            self.die(ctx);
            return;
        }

        if !self.ignited {
            return;
        }

        self.flicker(ctx);
        self.hitpoints -= 1;
        if !self.has_spread {
            let chance = ctx.config().early_spread_chance;
            if ctx.rng().gen_bool(chance) {
                self.spread(ctx);
            }
        }
    }

    fn body(&self) -> &Body {
        &self.body
    }
}

/// Fire flicker: fixed red and blue, random green.
pub fn fire_color(rng: &mut SimRng) -> Rgb {
    Rgb::new(FIRE_RED, rng.gen_range(FIRE_GREEN.0..FIRE_GREEN.1), FIRE_BLUE)
}

/// Ignite up to `max` unignited cells picked at random.
///
/// Returns how many were ignited.
pub fn reignite(world: &mut World, max: usize) -> usize {
    let unlit = world.filter_ids(|d| {
        d.downcast_ref::<CharacterCell>()
            .is_some_and(|c| !c.is_ignited())
    });
    let picked: Vec<EntityId> = unlit
        .choose_multiple(world.rng(), max)
        .copied()
        .collect();
    for &id in &picked {
        if let Some(cell) = world.get_as_mut::<CharacterCell>(id) {
            cell.ignite();
        }
    }
    debug!(requested = max, available = unlit.len(), ignited = picked.len(), "reignite");
    picked.len()
}
