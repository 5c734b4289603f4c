//! World: the live, ordered collection of entities.
//!
//! Insertion order is both update order and draw order. While an update pass
//! is running, `add` and `remove` are queued and applied when the pass ends
//! (removals first, then additions in request order). Every member is
//! therefore updated exactly once per pass, entities spawned during a pass are
//! first updated in the next one, and nothing removed mid-pass is skipped or
//! visited twice.
//!
//! The entity being updated is detached from its slot for the duration of its
//! own `update`, so queries it makes never see itself and it can mutate its
//! siblings through the [`UpdateCtx`] without aliasing.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::config::FireConfig;
use crate::entity::{Drawable, EntityId, RenderCtx};
use crate::error::SmudgeError;
use crate::surface::Surface;
use crate::types::CellStyle;

/// Seedable generator owned by the World and threaded through every update.
pub type SimRng = ChaCha8Rng;

struct Slot {
    id: EntityId,
    /// `None` only while this entity is inside its own `update`.
    entity: Option<Box<dyn Drawable>>,
}

pub struct World {
    slots: Vec<Slot>,
    next_id: u64,
    in_pass: bool,
    spawned: Vec<Slot>,
    doomed: Vec<EntityId>,
    default_style: CellStyle,
    style: CellStyle,
    max_width: i32,
    rng: SimRng,
    config: FireConfig,
    ticks: u64,
}

impl World {
    /// Empty world clipping sprites at `max_width`, with RNG seeded by `seed`.
    pub fn new(max_width: i32, seed: u64) -> Self {
        Self {
            slots: Vec::new(),
            next_id: 0,
            in_pass: false,
            spawned: Vec::new(),
            doomed: Vec::new(),
            default_style: CellStyle::BASE,
            style: CellStyle::BASE,
            max_width,
            rng: SimRng::seed_from_u64(seed),
            config: FireConfig::default(),
            ticks: 0,
        }
    }

    /// Replace the fire tunables. Chances outside [0, 1] are rejected.
    pub fn with_config(mut self, config: FireConfig) -> Result<Self, SmudgeError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Style used for bodies without an override.
    pub fn with_default_style(mut self, style: CellStyle) -> Self {
        self.default_style = style;
        self
    }

    /// Base style entities derive their overrides from.
    pub fn with_style(mut self, style: CellStyle) -> Self {
        self.style = style;
        self
    }

    pub fn default_style(&self) -> CellStyle {
        self.default_style
    }

    pub fn style(&self) -> CellStyle {
        self.style
    }

    pub fn max_width(&self) -> i32 {
        self.max_width
    }

    pub fn set_max_width(&mut self, max_width: i32) {
        self.max_width = max_width;
    }

    pub fn config(&self) -> &FireConfig {
        &self.config
    }

    pub fn rng(&mut self) -> &mut SimRng {
        &mut self.rng
    }

    /// Number of completed update passes.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Members currently in the collection (pending spawns excluded).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn add(&mut self, drawable: Box<dyn Drawable>) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        let slot = Slot {
            id,
            entity: Some(drawable),
        };
        if self.in_pass {
            self.spawned.push(slot);
        } else {
            self.slots.push(slot);
        }
        id
    }

    pub fn spawn<T: Drawable>(&mut self, drawable: T) -> EntityId {
        self.add(Box::new(drawable))
    }

    /// Remove by identity. Returns whether `id` was a member.
    ///
    /// Mid-pass, the removal is applied when the pass ends.
    pub fn remove(&mut self, id: EntityId) -> bool {
        if let Some(i) = self.spawned.iter().position(|s| s.id == id) {
            self.spawned.remove(i);
            return true;
        }
        if !self.slots.iter().any(|s| s.id == id) {
            return false;
        }
        if self.in_pass {
            if !self.doomed.contains(&id) {
                self.doomed.push(id);
            }
        } else {
            self.slots.retain(|s| s.id != id);
        }
        true
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.slots.iter().any(|s| s.id == id) || self.spawned.iter().any(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &dyn Drawable)> + '_ {
        self.slots
            .iter()
            .filter_map(|s| s.entity.as_deref().map(|e| (s.id, e)))
    }

    pub fn get(&self, id: EntityId) -> Option<&dyn Drawable> {
        self.slots
            .iter()
            .find(|s| s.id == id)
            .and_then(|s| s.entity.as_deref())
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut dyn Drawable> {
        self.slots
            .iter_mut()
            .find(|s| s.id == id)
            .and_then(|s| s.entity.as_deref_mut())
    }

    pub fn get_as<T: Drawable>(&self, id: EntityId) -> Option<&T> {
        self.get(id).and_then(|e| e.downcast_ref::<T>())
    }

    pub fn get_as_mut<T: Drawable>(&mut self, id: EntityId) -> Option<&mut T> {
        self.get_mut(id).and_then(|e| e.downcast_mut::<T>())
    }

    /// First member matching `pred`, in insertion order.
    pub fn find(&self, mut pred: impl FnMut(&dyn Drawable) -> bool) -> Option<&dyn Drawable> {
        self.iter().map(|(_, e)| e).find(|e| pred(*e))
    }

    /// All members matching `pred`, in insertion order.
    pub fn filter(&self, mut pred: impl FnMut(&dyn Drawable) -> bool) -> Vec<&dyn Drawable> {
        self.iter().map(|(_, e)| e).filter(|e| pred(*e)).collect()
    }

    /// Ids of all members matching `pred`, in insertion order.
    pub fn filter_ids(&self, mut pred: impl FnMut(&dyn Drawable) -> bool) -> Vec<EntityId> {
        self.iter()
            .filter(|(_, e)| pred(*e))
            .map(|(id, _)| id)
            .collect()
    }

    /// Members of concrete type `T`, in insertion order.
    pub fn iter_as<T: Drawable>(&self) -> impl Iterator<Item = (EntityId, &T)> + '_ {
        self.iter()
            .filter_map(|(id, e)| e.downcast_ref::<T>().map(|t| (id, t)))
    }

    pub fn count<T: Drawable>(&self) -> usize {
        self.iter().filter(|(_, e)| e.is::<T>()).count()
    }

    /// Run one update pass over every member in insertion order.
    pub fn update_all(&mut self) {
        self.in_pass = true;
        for i in 0..self.slots.len() {
            let Some(mut entity) = self.slots[i].entity.take() else {
                continue;
            };
            let id = self.slots[i].id;
            entity.update(&mut UpdateCtx {
                world: &mut *self,
                id,
            });
            self.slots[i].entity = Some(entity);
        }
        self.in_pass = false;

        let removed = self.doomed.len();
        let spawned = self.spawned.len();
        self.apply_pending();
        self.ticks += 1;
        trace!(tick = self.ticks, removed, spawned, live = self.slots.len(), "update pass");
    }

    /// Render every member in insertion order.
    pub fn render_all(&self, surface: &mut dyn Surface) {
        let ctx = self.render_ctx();
        for (_, entity) in self.iter() {
            entity.render(surface, &ctx);
        }
    }

    pub fn render_ctx(&self) -> RenderCtx {
        RenderCtx {
            default_style: self.default_style,
            max_width: self.max_width,
        }
    }

    fn apply_pending(&mut self) {
        if !self.doomed.is_empty() {
            let mut doomed = std::mem::take(&mut self.doomed);
            doomed.sort_unstable();
            self.slots.retain(|s| doomed.binary_search(&s.id).is_err());
        }
        self.slots.append(&mut self.spawned);
    }
}

/// What an entity can reach while it updates.
///
/// Borrowed for the duration of one `update` call and never stored. Siblings
/// can be read, mutated in place, spawned and removed, but the World itself
/// is only ever lent out shared, so no update pass can start inside another.
///
/// ```compile_fail
/// use smudge_core::{Body, Drawable, UpdateCtx};
///
/// struct Nested(Body);
///
/// impl Drawable for Nested {
///     fn update(&mut self, ctx: &mut UpdateCtx<'_>) {
///         ctx.world_mut().update_all();
///     }
///     fn body(&self) -> &Body {
///         &self.0
///     }
/// }
/// ```
pub struct UpdateCtx<'w> {
    world: &'w mut World,
    id: EntityId,
}

impl<'w> UpdateCtx<'w> {
    /// Identity of the entity being updated.
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// The World, minus the entity being updated.
    pub fn world(&self) -> &World {
        &*self.world
    }

    /// Sibling `id` as a `T`, for in-place changes such as ignition.
    pub fn get_as_mut<T: Drawable>(&mut self, id: EntityId) -> Option<&mut T> {
        self.world.get_as_mut::<T>(id)
    }

    pub fn rng(&mut self) -> &mut SimRng {
        &mut self.world.rng
    }

    pub fn config(&self) -> &FireConfig {
        &self.world.config
    }

    pub fn style(&self) -> CellStyle {
        self.world.style
    }

    /// Queue a new entity; it joins the World when the pass ends.
    pub fn spawn(&mut self, drawable: Box<dyn Drawable>) -> EntityId {
        self.world.add(drawable)
    }

    /// Queue removal of `id`; applied when the pass ends.
    pub fn remove(&mut self, id: EntityId) -> bool {
        self.world.remove(id)
    }

    /// Queue removal of the entity being updated.
    pub fn remove_self(&mut self) {
        let id = self.id;
        self.world.remove(id);
    }
}
