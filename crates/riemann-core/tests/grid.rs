// File: crates/riemann-core/tests/grid.rs
// Purpose: Grid line placement at multiples of the frequency and the x-axis position.

use riemann_core::config::{AxisConfig, GridLine};
use riemann_core::grid::{draw_axis, draw_grid, grid_lines, multiples_in, round_to_multiple, MAX_GRID_LINES};
use riemann_core::{DrawCommand, RecordingSurface, Rgba, Transform, Vec2};

#[test]
fn rounding_is_half_up() {
    assert_eq!(round_to_multiple(2.5, 1.0), 3.0);
    assert_eq!(round_to_multiple(-2.5, 1.0), -2.0);
    assert_eq!(round_to_multiple(7.4, 5.0), 5.0);
    assert_eq!(round_to_multiple(7.5, 5.0), 10.0);
    assert_eq!(round_to_multiple(-0.4, 1.0), 0.0);
}

#[test]
fn multiples_cover_rounded_range() {
    assert_eq!(multiples_in(-2.3, 2.6, 1.0), vec![-2.0, -1.0, 0.0, 1.0, 2.0, 3.0]);
    assert_eq!(multiples_in(-6.0, 6.0, 5.0), vec![-5.0, 0.0, 5.0]);
    assert!(multiples_in(0.1, 0.2, 1.0) == vec![0.0]);
}

#[test]
fn dense_grid_is_skipped() {
    assert!(multiples_in(-6.0, 6.0, 1e-9).is_empty());
    let at_limit = 12.0 / (MAX_GRID_LINES as f64 - 1.0);
    assert_eq!(multiples_in(0.0, 12.0, at_limit).len(), MAX_GRID_LINES);

    let t = Transform::new(Vec2::new(900.0, 600.0), Vec2::new(70.0, -70.0), Vec2::new(0.0, 0.0));
    let line = GridLine { frequency: 1e-9, line_width: 0.5, colour: Rgba::BLACK };
    let mut s = RecordingSurface::new(Vec2::new(900.0, 600.0));
    draw_grid(&mut s, &t, &line);
    assert!(s.commands().is_empty());
}

#[test]
fn lines_follow_visible_range() {
    // 900x600 at 70 px/unit centred on origin: x in [-6.43, 6.43], y in [-4.29, 4.29]
    let t = Transform::new(Vec2::new(900.0, 600.0), Vec2::new(70.0, -70.0), Vec2::new(0.0, 0.0));
    let g = grid_lines(&t, 1.0);
    assert_eq!(g.vertical.first(), Some(&-6.0));
    assert_eq!(g.vertical.last(), Some(&6.0));
    assert_eq!(g.vertical.len(), 13);
    assert_eq!(g.horizontal.first(), Some(&-4.0));
    assert_eq!(g.horizontal.last(), Some(&4.0));
    let coarse = grid_lines(&t, 5.0);
    assert_eq!(coarse.vertical, vec![-5.0, 0.0, 5.0]);
    assert_eq!(coarse.horizontal, vec![-5.0, 0.0, 5.0]);
}

#[test]
fn panning_shifts_lines() {
    let t = Transform::new(Vec2::new(900.0, 600.0), Vec2::new(70.0, -70.0), Vec2::new(100.0, 0.0));
    let g = grid_lines(&t, 1.0);
    assert_eq!(g.vertical.first(), Some(&94.0));
    assert_eq!(g.vertical.last(), Some(&106.0));
}

#[test]
fn grid_draws_full_span_lines() {
    let size = Vec2::new(200.0, 100.0);
    let t = Transform::new(size, Vec2::new(50.0, -50.0), Vec2::new(0.0, 0.0));
    let line = GridLine { frequency: 1.0, line_width: 0.5, colour: Rgba::rgb(0x77, 0x77, 0x77) };
    let mut s = RecordingSurface::new(size);
    draw_grid(&mut s, &t, &line);
    let expected = grid_lines(&t, 1.0);
    assert_eq!(s.commands().len(), expected.vertical.len() + expected.horizontal.len());
    match &s.commands()[0] {
        DrawCommand::Line { from, to, .. } => {
            assert_eq!(from.y, 0.0);
            assert_eq!(to.y, 100.0);
            assert_eq!(from.x, to.x);
        }
        other => panic!("expected a line, got {other:?}"),
    }
}

#[test]
fn axis_sits_at_real_zero() {
    let size = Vec2::new(200.0, 100.0);
    let t = Transform::new(size, Vec2::new(50.0, -50.0), Vec2::new(0.0, 0.5));
    let mut s = RecordingSurface::new(size);
    draw_axis(&mut s, &t, &AxisConfig::default());
    match &s.commands()[0] {
        DrawCommand::Line { from, to, .. } => {
            assert_eq!(*from, Vec2::new(0.0, 75.0));
            assert_eq!(*to, Vec2::new(200.0, 75.0));
        }
        other => panic!("expected axis line, got {other:?}"),
    }
}
