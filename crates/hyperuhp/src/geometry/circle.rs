use std::f64::consts::TAU;

use crate::{Complex, Float, InteriorPoint, Tolerance, UhpError, UhpPoint, UhpResult};

/// Hyperbolic circle: the set of points at a fixed hyperbolic distance from
/// an interior center.
///
/// Every hyperbolic circle is also a Euclidean circle, but with a different
/// center and radius.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    center: InteriorPoint,
    radius: Float,
}

impl Circle {
    /// Constructs a circle from its center and hyperbolic radius.
    ///
    /// Returns [`UhpError::InvalidValue`] if the radius is negative or not
    /// finite, or [`UhpError::DegenerateInput`] if it is approximately zero.
    pub fn new(center: InteriorPoint, radius: Float, tol: Tolerance) -> UhpResult<Self> {
        if !radius.is_finite() || tol.is_neg(radius) {
            return Err(UhpError::invalid(format!(
                "circle radius must be finite and positive; got {radius}",
            )));
        }
        if tol.eq_zero(radius) {
            return Err(UhpError::degenerate("circle has zero radius"));
        }
        Ok(Self { center, radius })
    }

    /// Constructs the circle centered at `center` that passes through `point`.
    ///
    /// Returns an error if `point` is on the boundary (which would give an
    /// infinite radius) or coincides with `center`.
    pub fn through_point(
        center: InteriorPoint,
        point: UhpPoint,
        tol: Tolerance,
    ) -> UhpResult<Self> {
        Self::new(center, UhpPoint::from(center).distance(point), tol)
    }

    /// Returns the hyperbolic center.
    pub fn center(&self) -> InteriorPoint {
        self.center
    }
    /// Returns the hyperbolic radius.
    pub fn radius(&self) -> Float {
        self.radius
    }
    /// Returns the Euclidean center, which is directly above the hyperbolic
    /// center.
    pub fn euc_center(&self) -> Complex {
        Complex::canonical(self.center.re(), self.center.im() * self.radius.cosh())
    }
    /// Returns the Euclidean radius.
    pub fn euc_radius(&self) -> Float {
        self.center.im() * self.radius.sinh()
    }

    /// Returns the hyperbolic circumference.
    pub fn circumference(&self) -> Float {
        TAU * self.radius.sinh()
    }
    /// Returns the hyperbolic area of the enclosed disk.
    pub fn area(&self) -> Float {
        TAU * (self.radius.cosh() - 1.0)
    }

    /// Returns whether `point` lies on the circle.
    pub fn contains(&self, point: UhpPoint, tol: Tolerance) -> bool {
        tol.eq(UhpPoint::from(self.center).distance(point), self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: Tolerance = Tolerance::DEFAULT;

    #[test]
    fn test_circle_at_i() {
        let circle = Circle::new(InteriorPoint::I, 1.0, TOL).expect("valid radius");
        assert_approx_eq!(Complex::new(0.0, 1.0_f64.cosh()).expect("finite"), circle.euc_center());
        assert_approx_eq!(1.0_f64.sinh(), circle.euc_radius());

        // highest and lowest points are at distance 1 from the center
        let top = UhpPoint::new(0.0, 1.0_f64.exp(), TOL).expect("interior");
        let bottom = UhpPoint::new(0.0, (-1.0_f64).exp(), TOL).expect("interior");
        assert!(circle.contains(top, TOL));
        assert!(circle.contains(bottom, TOL));
        assert!(!circle.contains(UhpPoint::I, TOL));
    }

    #[test]
    fn test_circle_euclidean_shape() {
        let center = InteriorPoint::new(3.0, 0.5, TOL).expect("interior");
        let circle = Circle::new(center, 2.0, TOL).expect("valid radius");
        let c = circle.euc_center();
        let r = circle.euc_radius();
        assert_approx_eq!(3.0, c.re());
        // the Euclidean circle stays inside the upper half-plane
        assert!(c.im() - r > 0.0);
        for angle in [0.0, 1.0, 2.5, 4.0] {
            let p = UhpPoint::from_complex(c + Complex::from_polar(r, angle), TOL)
                .expect("interior");
            assert!(circle.contains(p, TOL), "{p} should be on the circle");
        }
    }

    #[test]
    fn test_circle_through_point() {
        let center = InteriorPoint::I;
        let point = UhpPoint::new(0.0, std::f64::consts::E, TOL).expect("interior");
        let circle = Circle::through_point(center, point, TOL).expect("finite radius");
        assert_approx_eq!(1.0, circle.radius());

        let boundary = UhpPoint::new(1.0, 0.0, TOL).expect("boundary");
        assert!(matches!(
            Circle::through_point(center, boundary, TOL),
            Err(UhpError::InvalidValue(_)),
        ));
        assert!(matches!(
            Circle::through_point(center, UhpPoint::I, TOL),
            Err(UhpError::DegenerateInput(_)),
        ));
        assert!(Circle::new(center, -1.0, TOL).is_err());
    }

    #[test]
    fn test_circle_measurements() {
        let circle = Circle::new(InteriorPoint::I, 2.0, TOL).expect("valid radius");
        assert_approx_eq!(TAU * 2.0_f64.sinh(), circle.circumference());
        assert_approx_eq!(TAU * (2.0_f64.cosh() - 1.0), circle.area());
    }
}
