//! End-to-end tests across the static, runtime and formula layers

use approx::assert_relative_eq;
use quantis::eval::{EvalError, LiteralError, eval_quantity, eval_unit};
use quantis::prelude::*;
use quantis::units::ConversionError;

#[test]
fn static_division_carries_the_quotient_unit() {
    let d: Quantity<f64, Meter> = 23.0.with_unit();
    let t: Quantity<f64, Second> = 17.0.with_unit();
    let v: Quantity<f64, Quot<Meter, Second>> = d / t;

    assert_eq!(v.value(), 23.0 / 17.0);
    assert_eq!(Quantity::<f64, Quot<Meter, Second>>::symbol(), "m/s");
    assert_eq!(
        Quantity::<f64, Quot<Meter, Second>>::dimension(),
        Dimension::VELOCITY
    );
}

#[test]
fn pound_force_from_a_runtime_slug() {
    let slug = eval_unit("32.174_049 * lb", &[]).unwrap();
    let lbf = eval_quantity::<f32>("ft * my_slug / s^2", &[("my_slug", slug)]).unwrap();
    let newtons = lbf.init(1.0).convert_to_value(Newton::DEF).unwrap();
    assert!((newtons - 4.448_221_615).abs() < 1e-6);

    // Agrees with the statically defined pound-force
    assert_relative_eq!(lbf.unit().factor, PoundForce::DEF.factor, max_relative = 1e-7);
}

#[test]
fn incompatible_runtime_conversion_is_rejected() {
    let energy = DynQuantity::new(1.0_f64, Joule::DEF);
    let err = energy.convert_to(Meter::DEF).unwrap_err();
    assert_eq!(
        err,
        ConversionError::Incompatible {
            from: Dimension::ENERGY,
            to: Dimension::LENGTH,
        }
    );
}

#[test]
fn malformed_literal_names_the_defect() {
    let err = eval_unit("1_.5 * m", &[]).unwrap_err();
    let EvalError::MalformedLiteral { text, kind, .. } = &err else {
        panic!("expected a malformed literal, got {err:?}");
    };
    assert_eq!(text, "1_.5");
    assert_eq!(*kind, LiteralError::InvalidUnderscore { offset: 1 });
    assert!(err.to_string().contains("1_.5"));
}

#[test]
fn formula_and_algebra_agree() {
    let power = eval_unit("J / s", &[]).unwrap();
    assert!(power.same_as(&Watt::DEF));
    assert!(power.same_as(&Joule::DEF.divide(&Second::DEF)));

    let mg = eval_unit("mg", &[]).unwrap();
    assert!(mg.same_as(&Milligram::DEF));

    let kwh = eval_unit("kW * h", &[]).unwrap();
    assert!(kwh.same_as(&KilowattHour::DEF));
    assert!(kwh.is_compatible(&Joule::DEF));
    assert_relative_eq!(kwh.factor, 3.6e6);
}

#[test]
fn static_and_runtime_quantities_interoperate() {
    let speed: Quantity<f64, Knot> = 10.0.with_unit();
    let runtime = speed.into_dyn();
    let kmh = eval_unit("km / h", &[]).unwrap();
    assert_relative_eq!(runtime.convert_to_value(kmh).unwrap(), 18.52, epsilon = 1e-12);

    let back: Quantity<f64, Quot<Meter, Second>> = runtime.into_static().unwrap();
    assert_relative_eq!(back.value(), 18.52 / 3.6, epsilon = 1e-12);
}

#[test]
fn mixed_unit_sums_convert_to_the_left_operand() {
    let a: Quantity<f64, Meter> = 1.0.with_unit();
    let b: Quantity<f64, Foot> = 1.0.with_unit();
    let total = a + b.convert_to::<Meter>();
    assert_relative_eq!(total.value(), 1.3048);

    let runtime = DynQuantity::new(1.0_f64, Meter::DEF);
    let err = runtime
        .try_add(DynQuantity::new(1.0, Foot::DEF))
        .unwrap_err();
    assert!(matches!(err, ConversionError::UnitMismatch { .. }));
}

#[test]
fn custom_symbol_table() {
    let mut table = SymbolTable::defaults().clone();
    table.define("fortnight", eval_unit("14 * d", &[]).unwrap());
    let furlong = Meter::DEF.scale(201.168);
    table.define("furlong", furlong);

    let evaluator = Evaluator::new(&table);
    let ffn = evaluator.eval_unit("furlong / fortnight").unwrap();
    assert_eq!(ffn.dimension, Dimension::VELOCITY);
    assert_relative_eq!(ffn.factor, 201.168 / 1_209_600.0);
}

#[test]
fn extreme_exponents_render() {
    let unit = eval_unit("m^-128", &[]).unwrap();
    assert_eq!(unit.dimension.length, i8::MIN);
    assert_eq!(unit.to_string(), "1/m¹²⁸");
    assert_eq!(unit.dimension.to_string(), "1 / L¹²⁸");
}
