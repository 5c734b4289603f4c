//! Ray construction table and adjacency

use smudge::types::{adjacent, Point, Ray};

fn line(a: (i32, i32), b: (i32, i32)) -> Vec<Point> {
    Ray::new(a.into(), b.into()).points().to_vec()
}

fn pts(raw: &[(i32, i32)]) -> Vec<Point> {
    raw.iter().map(|&p| p.into()).collect()
}

/// Inclusive straight line from `a` stepping by `(dx, dy)` `n` times.
fn walk(a: (i32, i32), dx: i32, dy: i32, n: i32) -> Vec<Point> {
    (0..=n).map(|i| Point::new(a.0 + i * dx, a.1 + i * dy)).collect()
}

#[test]
fn test_zero_ray() {
    assert!(line((0, 0), (0, 0)).is_empty());
    assert!(line((7, -3), (7, -3)).is_empty());
}

#[test]
fn test_unit_rays() {
    let cases = [
        ((0, 0), (1, 0)),
        ((1, 0), (0, 0)),
        ((0, 0), (0, 1)),
        ((0, 1), (0, 0)),
        ((1, 1), (0, 0)),
        ((1, 1), (2, 0)),
        ((1, 1), (2, 2)),
        ((1, 1), (0, 2)),
    ];
    for (a, b) in cases {
        assert_eq!(line(a, b), pts(&[a, b]), "{a:?} -> {b:?}");
    }
}

#[test]
fn test_straight_rays() {
    assert_eq!(line((0, 10), (0, 0)), walk((0, 10), 0, -1, 10));
    assert_eq!(line((0, 0), (0, 10)), walk((0, 0), 0, 1, 10));
    assert_eq!(line((0, 0), (10, 0)), walk((0, 0), 1, 0, 10));
    assert_eq!(line((10, 0), (0, 0)), walk((10, 0), -1, 0, 10));
}

#[test]
fn test_diagonal_rays() {
    assert_eq!(line((10, 10), (20, 0)), walk((10, 10), 1, -1, 10));
    assert_eq!(line((0, 0), (10, 10)), walk((0, 0), 1, 1, 10));
    assert_eq!(line((10, 0), (0, 10)), walk((10, 0), -1, 1, 10));
    assert_eq!(line((10, 10), (0, 0)), walk((10, 10), -1, -1, 10));
}

#[test]
fn test_flat_line_moves_diagonally_first() {
    assert_eq!(
        line((0, 0), (5, 1)),
        pts(&[(0, 0), (1, 1), (2, 1), (3, 1), (4, 1), (5, 1)])
    );
    assert_eq!(
        line((0, 0), (2, -5)),
        pts(&[(0, 0), (1, -1), (2, -2), (2, -3), (2, -4), (2, -5)])
    );
}

#[test]
fn test_ray_is_reusable() {
    let ray = Ray::new(Point::new(3, 3), Point::new(6, 4));
    let first: Vec<Point> = ray.iter().copied().collect();
    let second: Vec<Point> = (&ray).into_iter().copied().collect();
    assert_eq!(first, second);
    assert_eq!(ray.first(), Some(Point::new(3, 3)));
    assert_eq!(ray.last(), Some(Point::new(6, 4)));
}

#[test]
fn test_adjacency_is_chebyshev_one() {
    let c = Point::new(5, 5);
    for y in 2..=8 {
        for x in 2..=8 {
            let p = Point::new(x, y);
            assert_eq!(adjacent(c, p), c.chebyshev(p) == 1, "{p}");
        }
    }
}
