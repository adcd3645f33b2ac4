// File: crates/riemann-core/tests/functions.rs
// Purpose: Built-in function table values, name lookup and the PlotFunction point cache.

use riemann_core::function::RECIPROCAL_AT_ZERO;
use riemann_core::{BuiltinFunction, InputError, Interval, PlotFunction};

#[test]
fn reciprocal_at_zero_is_sentinel() {
    let y = BuiltinFunction::Reciprocal.eval(0.0);
    assert_eq!(y, 1000.0);
    assert_eq!(y, RECIPROCAL_AT_ZERO);
    assert!(y.is_finite());
    assert_eq!(BuiltinFunction::Reciprocal.eval(-0.0), 1000.0);
    assert_eq!(BuiltinFunction::Reciprocal.eval(4.0), 0.25);
}

#[test]
fn sinc_at_zero_is_finite() {
    assert_eq!(BuiltinFunction::Sinc.eval(0.0), 1.0);
    let y = BuiltinFunction::Sinc.eval(std::f64::consts::FRAC_PI_2);
    assert!((y - 20.0 / std::f64::consts::PI).abs() < 1e-12);
}

#[test]
fn table_values() {
    assert!((BuiltinFunction::Sin.eval(1.0) - 1f64.sin()).abs() < 1e-15);
    assert!((BuiltinFunction::Cubic.eval(-1.0) + 0.2).abs() < 1e-15);
    assert_eq!(BuiltinFunction::Gaussian.eval(0.0), 3.0);
    assert_eq!(BuiltinFunction::Abs.eval(-2.5), 2.5);
}

#[test]
fn every_entry_finite_over_sample_grid() {
    for f in BuiltinFunction::ALL {
        for i in -200..=200 {
            let x = i as f64 * 0.05;
            assert!(f.eval(x).is_finite(), "{f} at {x}");
        }
    }
}

#[test]
fn names_resolve_both_ways() {
    for f in BuiltinFunction::ALL {
        assert_eq!(BuiltinFunction::from_name(f.name()), Some(f));
        assert_eq!(f.name().parse::<BuiltinFunction>(), Ok(f));
    }
    assert_eq!("tan(x)".parse::<BuiltinFunction>(), Err(InputError::UnknownFunction("tan(x)".into())));
    assert_eq!(BuiltinFunction::Sinc.next(), BuiltinFunction::Sin);
    assert_eq!(BuiltinFunction::Sin.next(), BuiltinFunction::Cubic);
}

#[test]
fn plot_function_caches_points_over_domain() {
    let f = PlotFunction::builtin(BuiltinFunction::Abs, Interval::new(-1.0, 1.0), 0.25);
    assert_eq!(f.name(), "|x|");
    assert_eq!(f.points().len(), 9);
    assert_eq!(f.points()[0], (-1.0, 1.0));
    assert_eq!(f.points()[4], (0.0, 0.0));
    assert_eq!(f.eval(-3.0), 3.0);
    assert_eq!(f.delta(), 0.25);
}
