//! Building the smudge stick out of the source texts.

use rand::Rng;
use tracing::info;
use unicode_width::UnicodeWidthChar;

use crate::cell::CharacterCell;
use crate::types::{Point, Rgb, EXHAUSTED_GLYPH, SOURCE_GREY, WHITESPACE_MARKER};
use crate::world::{SimRng, World};

/// Rectangle of screen cells, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Region {
    pub fn area(&self) -> usize {
        (self.w.max(0) as usize) * (self.h.max(0) as usize)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }
}

/// The middle third of a `width` x `height` screen, every row.
pub fn smudge_region(width: u16, height: u16) -> Region {
    let third = i32::from(width) / 3;
    Region {
        x: third,
        y: 0,
        w: third,
        h: i32::from(height),
    }
}

struct Stream {
    chars: Vec<char>,
    pos: usize,
    color: Rgb,
}

/// Round-robin interleaving of several character streams.
pub struct SourceMixer {
    streams: Vec<Stream>,
    current: usize,
}

impl SourceMixer {
    /// One stream per text, each with its own grey drawn from `rng`.
    pub fn new<S: AsRef<str>>(texts: &[S], rng: &mut SimRng) -> Self {
        let streams = texts
            .iter()
            .map(|t| Stream {
                chars: t.as_ref().chars().collect(),
                pos: 0,
                color: Rgb::grey(rng.gen_range(SOURCE_GREY.0..SOURCE_GREY.1)),
            })
            .collect();
        Self {
            streams,
            current: 0,
        }
    }

    pub fn stream_count(&self) -> usize {
        self.streams.len()
    }

    /// Next glyph and its stream's colour, then move on to the next stream.
    ///
    /// Characters that cannot fill exactly one cell (whitespace, controls,
    /// combining marks, wide glyphs) come out as the whitespace marker. A
    /// drained stream keeps yielding the exhausted glyph.
    pub fn next_glyph(&mut self) -> (char, Rgb) {
        let count = self.streams.len();
        let Some(stream) = self.streams.get_mut(self.current) else {
            return (EXHAUSTED_GLYPH, Rgb::grey(SOURCE_GREY.0));
        };
        self.current = (self.current + 1) % count;

        let glyph = match stream.chars.get(stream.pos) {
            Some(&c) => {
                stream.pos += 1;
                displayable(c)
            }
            None => EXHAUSTED_GLYPH,
        };
        (glyph, stream.color)
    }
}

fn displayable(c: char) -> char {
    if c.is_whitespace() || c.is_control() || c.width() != Some(1) {
        WHITESPACE_MARKER
    } else {
        c
    }
}

/// Fill `region` row by row with cells drawn from `mixer`.
///
/// The top row starts burning. Returns the number of cells created.
pub fn populate(world: &mut World, region: Region, mixer: &mut SourceMixer) -> usize {
    let hitpoints = world.config().cell_hitpoints;
    let base = world.style();
    let mut created = 0;

    for y in region.y..region.y + region.h {
        for x in region.x..region.x + region.w {
            let (glyph, color) = mixer.next_glyph();
            let mut cell =
                CharacterCell::new(Point::new(x, y), glyph, base.with_fg(color), hitpoints);
            if y == region.y {
                cell.ignite();
            }
            world.spawn(cell);
            created += 1;
        }
    }

    info!(
        x = region.x,
        w = region.w,
        h = region.h,
        cells = created,
        streams = mixer.stream_count(),
        "smudge populated"
    );
    created
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Drawable;
    use rand::SeedableRng;

    fn rng() -> SimRng {
        SimRng::seed_from_u64(17)
    }

    fn glyphs(mixer: &mut SourceMixer, n: usize) -> String {
        (0..n).map(|_| mixer.next_glyph().0).collect()
    }

    #[test]
    fn region_is_the_middle_third() {
        assert_eq!(smudge_region(30, 12), Region { x: 10, y: 0, w: 10, h: 12 });
        assert_eq!(smudge_region(32, 10), Region { x: 10, y: 0, w: 10, h: 10 });
        let r = smudge_region(12, 10);
        assert!(r.contains(Point::new(4, 9)));
        assert!(!r.contains(Point::new(8, 0)));
        assert_eq!(r.area(), 40);
    }

    #[test]
    fn streams_interleave_round_robin() {
        let mut m = SourceMixer::new(&["abc", "123"], &mut rng());
        assert_eq!(glyphs(&mut m, 6), "a1b2c3");
    }

    #[test]
    fn whitespace_and_controls_become_markers() {
        let mut m = SourceMixer::new(&["a b\n\tc"], &mut rng());
        assert_eq!(glyphs(&mut m, 6), "a+b++c");
    }

    #[test]
    fn drained_stream_yields_fallback() {
        let mut m = SourceMixer::new(&["ab", "wxyz"], &mut rng());
        assert_eq!(glyphs(&mut m, 8), "awbxxyxz");
    }

    #[test]
    fn each_stream_keeps_its_colour() {
        let mut m = SourceMixer::new(&["aaaa", "bbbb"], &mut rng());
        let first: Vec<Rgb> = (0..4).map(|_| m.next_glyph().1).collect();
        assert_eq!(first[0], first[2]);
        assert_eq!(first[1], first[3]);
        for c in first {
            assert_eq!(c.r, c.g);
            assert!((SOURCE_GREY.0..SOURCE_GREY.1).contains(&c.r));
        }
    }

    #[test]
    fn no_streams_yields_fallback() {
        let none: [&str; 0] = [];
        let mut m = SourceMixer::new(&none, &mut rng());
        assert_eq!(m.next_glyph().0, EXHAUSTED_GLYPH);
    }

    #[test]
    fn populate_fills_region_and_lights_top_row() {
        let mut world = World::new(12, 1);
        let region = smudge_region(12, 10);
        let mut m = SourceMixer::new(&["hello world"], world.rng());
        assert_eq!(populate(&mut world, region, &mut m), 40);
        assert_eq!(world.count::<CharacterCell>(), 40);

        for (_, c) in world.iter_as::<CharacterCell>() {
            assert!(region.contains(c.position()));
            assert_eq!(c.is_ignited(), c.position().y == 0);
            assert_eq!(c.hitpoints(), world.config().cell_hitpoints);
        }

        let top: String = world
            .iter_as::<CharacterCell>()
            .take(4)
            .map(|(_, c)| c.body().sprite.clone())
            .collect();
        assert_eq!(top, "hell");
    }
}
