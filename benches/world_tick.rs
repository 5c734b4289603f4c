use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use smudge::core::{populate, smudge_region, Display, Surface, SourceMixer, World};
use smudge::term::{encode_diff_into, FrameBuffer, HeadlessDisplay};

const SOURCE: &str = include_str!("../src/main.rs");

fn smudged_world(width: u16, height: u16) -> World {
    let mut world = World::new(i32::from(width), 12345);
    let mut mixer = SourceMixer::new(&[SOURCE, SOURCE], world.rng());
    populate(&mut world, smudge_region(width, height), &mut mixer);
    world
}

fn bench_update_pass(c: &mut Criterion) {
    c.bench_function("update_all_120x40", |b| {
        b.iter_batched(
            || smudged_world(120, 40),
            |mut world| {
                for _ in 0..10 {
                    world.update_all();
                }
                black_box(world.len())
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_render_pass(c: &mut Criterion) {
    let mut world = smudged_world(120, 40);
    for _ in 0..5 {
        world.update_all();
    }
    let mut display = HeadlessDisplay::new(120, 40);

    c.bench_function("render_all_120x40", |b| {
        b.iter(|| {
            display.clear();
            world.render_all(&mut display);
            display.present().unwrap();
        })
    });
}

fn bench_diff_encode(c: &mut Criterion) {
    let mut world = smudged_world(120, 40);
    let mut prev = FrameBuffer::new(120, 40);
    world.render_all(&mut prev);
    world.update_all();
    let mut next = FrameBuffer::new(120, 40);
    world.render_all(&mut next);
    let mut out = Vec::with_capacity(64 * 1024);

    c.bench_function("encode_diff_120x40", |b| {
        b.iter(|| {
            out.clear();
            encode_diff_into(black_box(&prev), black_box(&next), &mut out).unwrap();
        })
    });
}

criterion_group!(benches, bench_update_pass, bench_render_pass, bench_diff_encode);
criterion_main!(benches);
