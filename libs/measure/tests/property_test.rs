//! Property-based tests using QuickCheck

use ferrum_measure::{catalog, Measure, PhysicalDimension, UnitDef};
use quickcheck::{QuickCheck, TestResult};

fn units_of(dimension: PhysicalDimension) -> Vec<&'static UnitDef> {
    catalog().units_of(dimension).collect()
}

/// Picks a unit of `dimension` from an arbitrary index.
fn pick(dimension: PhysicalDimension, idx: u8) -> &'static UnitDef {
    let units = units_of(dimension);
    units[idx as usize % units.len()]
}

fn dimension_for(idx: u8) -> PhysicalDimension {
    let dims = [
        PhysicalDimension::Length,
        PhysicalDimension::Weight,
        PhysicalDimension::Time,
    ];
    dims[idx as usize % dims.len()]
}

fn usable(v: f64) -> bool {
    v.is_finite() && v.abs() < 1e12 && (v == 0.0 || v.abs() > 1e-12)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

/// Property: converting A -> B -> A gives back the original value
#[test]
fn prop_conversion_round_trip() {
    fn prop(dim: u8, a: u8, b: u8, v: f64) -> TestResult {
        if !usable(v) {
            return TestResult::discard();
        }
        let dimension = dimension_for(dim);
        let (ua, ub) = (pick(dimension, a), pick(dimension, b));

        let m = Measure::from_unit(*ua, v);
        let there = m.convert([(ua.name(), ub)]).unwrap();
        let back = there.convert([(ub.name(), ua)]).unwrap();

        TestResult::from_bool(close(back.value(), v) && back.exponent(ua.name()) == Some(1.0))
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(u8, u8, u8, f64) -> TestResult);
}

/// Property: A -> C equals A -> B -> C
#[test]
fn prop_conversion_transitive() {
    fn prop(dim: u8, a: u8, b: u8, c: u8, v: f64) -> TestResult {
        if !usable(v) {
            return TestResult::discard();
        }
        let dimension = dimension_for(dim);
        let (ua, ub, uc) = (pick(dimension, a), pick(dimension, b), pick(dimension, c));

        let m = Measure::from_unit(*ua, v);
        let direct = m.convert([(ua.name(), uc)]).unwrap();
        let chained = m
            .convert([(ua.name(), ub)])
            .unwrap()
            .convert([(ub.name(), uc)])
            .unwrap();

        TestResult::from_bool(close(direct.value(), chained.value()))
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(u8, u8, u8, u8, f64) -> TestResult);
}

/// Property: multiplying by one is the identity
#[test]
fn prop_multiplicative_identity() {
    fn prop(dim: u8, a: u8, v: f64) -> TestResult {
        if !v.is_finite() {
            return TestResult::discard();
        }
        let m = Measure::from_unit(*pick(dimension_for(dim), a), v);
        TestResult::from_bool(&m * 1.0 == m)
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(u8, u8, f64) -> TestResult);
}

/// Property: a measure divided by itself is adimensional one
/// Using manual test cases for compound units
#[test]
fn prop_self_division_is_adimensional() {
    let test_cases = vec![
        Measure::new("cm", 3.5).unwrap(),
        Measure::new("lb", -2.0).unwrap(),
        Measure::with_units(9.81, [("m", 1.0), ("s", -2.0)]).unwrap(),
        Measure::with_units(0.25, [("kg", 1.0), ("km", 2.0), ("hour", -3.0)]).unwrap(),
        Measure::with_units(1e-6, [("um", 0.5)]).unwrap(),
    ];

    for m in test_cases {
        let q = &m / &m;
        assert_eq!(q.value(), 1.0, "{m} / {m} should be 1");
        assert!(q.units().is_empty(), "{m} / {m} should be adimensional");
    }
}

/// Property: U^a * U^b = U^(a+b)
#[test]
fn prop_exponent_additivity() {
    fn prop(dim: u8, u: u8, a: i8, b: i8, v: u16) -> TestResult {
        let (a, b) = (f64::from(a % 4), f64::from(b % 4));
        let v = 1.0 + f64::from(v % 100) / 10.0;
        let unit = pick(dimension_for(dim), u);
        let m = Measure::from_unit(*unit, v);

        let product = m.powf(a) * m.powf(b);

        let exponent_ok = if a + b == 0.0 {
            product.is_adimensional()
        } else {
            product.exponent(unit.name()) == Some(a + b) && product.units().len() == 1
        };
        TestResult::from_bool(exponent_ok && close(product.value(), v.powf(a + b)))
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(u8, u8, i8, i8, u16) -> TestResult);
}

/// Property: only measures of the same compound unit can be added
#[test]
fn prop_addition_requires_same_dimension() {
    fn prop(da: u8, db: u8, a: u8, b: u8) -> TestResult {
        let (dim_a, dim_b) = (dimension_for(da), dimension_for(db));
        let lhs = Measure::from_unit(*pick(dim_a, a), 1.0);
        let rhs = Measure::from_unit(*pick(dim_b, b), 1.0);
        TestResult::from_bool(lhs.try_add(&rhs).is_ok() == (dim_a == dim_b))
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(u8, u8, u8, u8) -> TestResult);
}

/// Property: every map produced by multiplication keeps one unit per dimension
#[test]
fn prop_products_keep_one_unit_per_dimension() {
    fn prop(picks: Vec<(u8, u8, i8)>) -> TestResult {
        if picks.is_empty() {
            return TestResult::discard();
        }
        let product = picks
            .iter()
            .map(|&(dim, u, e)| {
                Measure::from_unit(*pick(dimension_for(dim), u), 2.0).powf(f64::from(e % 3))
            })
            .fold(Measure::adimensional(1.0), |acc, m| acc * m);

        let mut seen = Vec::new();
        for unit in product.units().units() {
            if seen.contains(&unit.dimension()) {
                return TestResult::failed();
            }
            seen.push(unit.dimension());
        }
        let no_zero_exponents = product.units().iter().all(|(_, e)| e != 0.0);
        TestResult::from_bool(no_zero_exponents)
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(Vec<(u8, u8, i8)>) -> TestResult);
}
