use std::f64::consts::TAU;

use proptest::prelude::*;

use crate::*;

const TOL: Tolerance = Tolerance::DEFAULT;

fn complex() -> impl Strategy<Value = Complex> {
    (-10.0..10.0_f64, -10.0..10.0_f64).prop_map(|(re, im)| Complex::canonical(re, im))
}

fn interior_point() -> impl Strategy<Value = InteriorPoint> {
    (-3.0..3.0_f64, 0.2..3.0_f64)
        .prop_map(|(re, im)| InteriorPoint::new(re, im, TOL).expect("positive imaginary part"))
}

/// Möbius transformation with real coefficients and positive determinant,
/// which is an isometry of the upper half-plane.
fn real_mobius() -> impl Strategy<Value = Mobius> {
    prop::array::uniform4(-2.0..2.0_f64)
        .prop_filter("determinant must be positive", |&[a, b, c, d]| {
            a * d - b * c > 0.1
        })
        .prop_map(|[a, b, c, d]| Mobius::from_real(a, b, c, d, TOL).expect("finite coefficients"))
}

fn denominator(m: &Mobius, z: Complex) -> Float {
    let [_, _, c, d] = m.coefficients();
    (c * z + d).modulus()
}

proptest! {
    #[test]
    fn proptest_complex_field_laws(a in complex(), b in complex(), c in complex()) {
        prop_assert_eq!(a + b, b + a);
        prop_assert_eq!(a * b, b * a);
        prop_assert!(TOL.eq((a + b) + c, a + (b + c)));
        prop_assert!(TOL.eq((a * b) * c, a * (b * c)));
        prop_assert!(TOL.eq(a * (b + c), a * b + a * c));
    }

    #[test]
    fn proptest_complex_inverse(z in complex()) {
        prop_assume!(z.modulus() > 0.1);
        let inv = z.inverse(TOL).expect("nonzero");
        prop_assert!(TOL.eq(Complex::ONE, z * inv));
        prop_assert!(TOL.eq(z, inv.inverse(TOL).expect("nonzero")));
        prop_assert!(TOL.eq(inv, Complex::ONE.checked_div(z, TOL).expect("nonzero")));
    }

    #[test]
    fn proptest_complex_root(z in complex(), n in 1..5_u32) {
        let root = z.root(n).expect("finite");
        let power = (0..n).fold(Complex::ONE, |acc, _| acc * root);
        prop_assert!(TOL.eq(z, power), "{root}^{n} = {power}, expected {z}");
    }

    #[test]
    fn proptest_mobius_compose_matches_apply(
        m in real_mobius(),
        n in real_mobius(),
        z in interior_point(),
    ) {
        let z = z.to_complex();
        let nz = n.apply(z, TOL);
        prop_assume!(denominator(&n, z) > 0.2);
        prop_assume!(denominator(&m, nz) > 0.2);
        prop_assert!(TOL.eq((m * n).apply(z, TOL), m.apply(nz, TOL)));
        prop_assert!(TOL.eq(m.compose(&n).determinant(), m.determinant() * n.determinant()));
    }

    #[test]
    fn proptest_mobius_reduce_and_inverse(m in real_mobius(), z in interior_point()) {
        let reduced = m.reduce(TOL);
        prop_assert!(TOL.eq(Complex::ONE, reduced.determinant()));
        prop_assert!(TOL.eq(m.apply(z.to_complex(), TOL), reduced.apply(z.to_complex(), TOL)));

        let inv = m.inverse(TOL).expect("invertible");
        prop_assert!((m * inv).is_ident(TOL));
        prop_assert!((inv * m).is_ident(TOL));
    }

    #[test]
    fn proptest_mobius_identity_and_inverse_apply(m in real_mobius(), z in complex()) {
        prop_assert_eq!(m, m * Mobius::IDENT);
        prop_assert_eq!(m, Mobius::IDENT * m);

        let inv = m.inverse(TOL).expect("invertible");
        prop_assume!(denominator(&m, z) > 0.2);
        let mz = m.apply(z, TOL);
        prop_assume!(denominator(&inv, mz) > 0.2);
        let back = inv.apply(mz, TOL);
        prop_assert!(TOL.eq(z, back), "{z} went to {mz} and back to {back}");
    }

    #[test]
    fn proptest_distance_is_symmetric(z in interior_point(), w in interior_point()) {
        let (z, w) = (UhpPoint::from(z), UhpPoint::from(w));
        prop_assert!(z.distance(w) >= 0.0);
        prop_assert!(TOL.eq(z.distance(w), w.distance(z)));
    }

    #[test]
    fn proptest_isometries_preserve_distance(
        m in real_mobius(),
        z in interior_point(),
        w in interior_point(),
    ) {
        let isometry = Isometry::new(m, TOL).expect("invertible");
        let (z, w) = (UhpPoint::from(z), UhpPoint::from(w));
        let z2 = isometry.apply(z, TOL).expect("point");
        let w2 = isometry.apply(w, TOL).expect("point");
        prop_assert!(z2.is_interior() && w2.is_interior());
        prop_assert!(TOL.eq(z.distance(w), z2.distance(w2)));
    }

    #[test]
    fn proptest_elliptic_periodicity(
        center in interior_point(),
        angle in -3.0..3.0_f64,
        z in interior_point(),
    ) {
        let e1 = Isometry::elliptic(center, angle, TOL).expect("valid");
        let e2 = Isometry::elliptic(center, angle + TAU, TOL).expect("valid");
        let z = UhpPoint::from(z);
        prop_assert!(TOL.eq(e1.apply(z, TOL).expect("point"), e2.apply(z, TOL).expect("point")));
        prop_assert!(TOL.eq(e1, e2));
    }

    #[test]
    fn proptest_classification_and_fixed_points(m in real_mobius()) {
        let [a, _, c, d] = m.coefficients();
        let det = m.determinant().re();
        let discriminant = (a + d).re().powi(2) / det - 4.0;
        prop_assume!(discriminant.abs() > 0.01);
        prop_assume!(m.reduce(TOL).coefficients()[2].modulus() > 0.1);
        prop_assume!(c.modulus() > 0.1);

        let isometry = Isometry::new(m, TOL).expect("invertible");
        match isometry.fixed_points(TOL).expect("consistent") {
            Some(FixedPoints::BoundaryPair(pair)) => {
                prop_assert!(discriminant > 0.0);
                prop_assert_eq!(IsometryKind::Hyperbolic, isometry.classify(TOL));
                for p in pair {
                    let p = UhpPoint::from(p);
                    prop_assert!(TOL.eq(p, isometry.apply(p, TOL).expect("point")));
                }
            }
            Some(FixedPoints::Interior(p)) => {
                prop_assert!(discriminant < 0.0);
                prop_assert_eq!(IsometryKind::Elliptic, isometry.classify(TOL));
                let p = UhpPoint::from(p);
                prop_assert!(TOL.eq(p, isometry.apply(p, TOL).expect("point")));
            }
            other => {
                prop_assert!(false, "unexpected fixed points {:?}", other);
            }
        }
    }
}
