// File: crates/riemann-core/tests/partition.rs
// Purpose: Uniform partitions have n+1 strictly increasing breakpoints spanning the interval.

use riemann_core::{uniform_partition, Interval, Partition};

#[test]
fn ten_over_five() {
    let p = uniform_partition(Interval::new(0.0, 10.0), 5);
    assert_eq!(p, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
}

#[test]
fn breakpoints_increase_and_span_interval() {
    let intervals = [(0.0, 1.0), (-3.5, 2.25), (-1e-3, 1e-3), (100.0, 1000.0), (-7.0, -2.0)];
    for &(a, b) in &intervals {
        for n in [1usize, 2, 3, 7, 10, 64, 333] {
            let p = uniform_partition(Interval::new(a, b), n);
            assert_eq!(p.len(), n + 1, "[{a}, {b}] n={n}");
            assert_eq!(p[0], a);
            let tol = 1e-9 * (b - a).abs().max(1.0);
            assert!((p[n] - b).abs() <= tol, "last {} vs {b}", p[n]);
            assert!(p.windows(2).all(|w| w[0] < w[1]), "not increasing for n={n}");
        }
    }
}

#[test]
fn partition_iterates_subintervals() {
    let p = Partition::uniform(Interval::new(-1.0, 1.0), 4);
    assert_eq!(p.len(), 4);
    assert!(!p.is_empty());
    let subs: Vec<Interval> = p.subintervals().collect();
    assert_eq!(subs.len(), 4);
    assert_eq!(subs[0], Interval::new(-1.0, -0.5));
    assert_eq!(subs[3], Interval::new(0.5, 1.0));
    for s in &subs {
        assert!((s.width() - 0.5).abs() < 1e-12);
    }
}

#[test]
fn single_subinterval_is_whole_interval() {
    let p = Partition::uniform(Interval::new(2.0, 3.0), 1);
    assert_eq!(p.points(), &[2.0, 3.0]);
}
