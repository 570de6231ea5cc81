use crate::{
    BoundaryPoint, Complex, Float, InteriorPoint, Tolerance, UhpError, UhpPoint, UhpResult,
};

/// Horocycle: a curve tangent to the boundary at a single base point.
///
/// A horocycle based at a real point is a Euclidean circle tangent to the
/// real axis. A horocycle based at the point at infinity is a horizontal
/// line, which has infinite Euclidean radius.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Horocycle {
    /// Euclidean center, or the point at infinity for a horizontal line.
    center: UhpPoint,
    base_point: BoundaryPoint,
    /// Point on the horocycle.
    point: InteriorPoint,
    euc_radius: Float,
}

impl Horocycle {
    /// Constructs the horocycle with Euclidean center `center`.
    ///
    /// If `center` is an interior point, the horocycle is the Euclidean circle
    /// around it that touches the real axis. If `center` is the point at
    /// infinity, the horocycle is the horizontal line through `i`.
    ///
    /// Returns an error if `center` is a real boundary point.
    pub fn from_center(center: UhpPoint, tol: Tolerance) -> UhpResult<Self> {
        match center {
            UhpPoint::Interior(c) => Ok(Self {
                center,
                base_point: BoundaryPoint::real(c.re())?,
                point: InteriorPoint::new(c.re(), 2.0 * c.im(), tol)?,
                euc_radius: c.im(),
            }),
            UhpPoint::Boundary(b) if b.is_infinity() => Ok(Self::horizontal(InteriorPoint::I)),
            UhpPoint::Boundary(_) => Err(UhpError::invalid(format!(
                "horocycle center cannot be a real boundary point; got {center}",
            ))),
        }
    }

    /// Constructs the horocycle based at `base_point` that passes through
    /// `point`.
    pub fn from_base_and_point(
        base_point: BoundaryPoint,
        point: InteriorPoint,
    ) -> UhpResult<Self> {
        let Some(base_re) = base_point.real_part() else {
            return Ok(Self::horizontal(point));
        };
        let dx = point.re() - base_re;
        let euc_radius = (dx * dx + point.im() * point.im()) / (2.0 * point.im());
        Ok(Self {
            // can be within tolerance of the boundary when `point` is
            center: InteriorPoint::from_positive(base_re, euc_radius)?.into(),
            base_point,
            point,
            euc_radius,
        })
    }

    fn horizontal(point: InteriorPoint) -> Self {
        Self {
            center: UhpPoint::INFINITY,
            base_point: BoundaryPoint::INFINITY,
            point,
            euc_radius: Float::INFINITY,
        }
    }

    /// Returns the Euclidean center, which is the point at infinity for a
    /// horizontal line.
    pub fn center(&self) -> UhpPoint {
        self.center
    }
    /// Returns the point where the horocycle touches the boundary.
    pub fn base_point(&self) -> BoundaryPoint {
        self.base_point
    }
    /// Returns a point on the horocycle.
    pub fn point(&self) -> InteriorPoint {
        self.point
    }
    /// Returns the Euclidean radius, which is `+∞` for a horizontal line.
    pub fn euc_radius(&self) -> Float {
        self.euc_radius
    }

    /// Returns whether an interior point lies on the horocycle.
    pub fn contains(&self, point: UhpPoint, tol: Tolerance) -> bool {
        let UhpPoint::Interior(p) = point else {
            return false;
        };
        if self.center.is_infinity() {
            tol.eq(p.im(), self.point.im())
        } else {
            let center: Complex = self.center.into();
            tol.eq(center.distance(p.to_complex()), self.euc_radius)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const TOL: Tolerance = Tolerance::DEFAULT;

    fn pt(re: Float, im: Float) -> UhpPoint {
        UhpPoint::new(re, im, TOL).expect("valid point")
    }

    #[test]
    fn test_horocycle_from_center() {
        let h = Horocycle::from_center(UhpPoint::I, TOL).expect("interior center");
        assert_eq!(BoundaryPoint::ZERO, h.base_point());
        assert_approx_eq!(pt(0.0, 2.0), UhpPoint::from(h.point()));
        assert_approx_eq!(1.0, h.euc_radius());
        assert!(h.contains(pt(1.0, 1.0), TOL));
        assert!(!h.contains(pt(1.0, 0.5), TOL));

        let h = Horocycle::from_center(UhpPoint::INFINITY, TOL).expect("infinity");
        assert_eq!(UhpPoint::INFINITY, h.center());
        assert_eq!(BoundaryPoint::INFINITY, h.base_point());
        assert_eq!(InteriorPoint::I, h.point());
        assert_eq!(Float::INFINITY, h.euc_radius());
        assert!(h.contains(pt(-40.0, 1.0), TOL));
        assert!(!h.contains(pt(0.0, 2.0), TOL));

        assert!(Horocycle::from_center(pt(1.0, 0.0), TOL).is_err());
    }

    #[test]
    fn test_horocycle_from_base_and_point() {
        let base = BoundaryPoint::ZERO;
        let point = InteriorPoint::new(1.0, 1.0, TOL).expect("interior");
        let h = Horocycle::from_base_and_point(base, point).expect("valid");
        assert_approx_eq!(1.0, h.euc_radius());
        assert_approx_eq!(UhpPoint::I, h.center());
        assert!(h.contains(pt(0.0, 2.0), TOL));

        let base = BoundaryPoint::real(2.0).expect("finite");
        let point = InteriorPoint::new(2.0, 3.0, TOL).expect("interior");
        let h = Horocycle::from_base_and_point(base, point).expect("valid");
        assert_approx_eq!(1.5, h.euc_radius());
        assert_approx_eq!(pt(2.0, 1.5), h.center());

        let h = Horocycle::from_base_and_point(BoundaryPoint::INFINITY, point).expect("valid");
        assert!(h.center().is_infinity());
        assert!(h.contains(pt(-7.0, 3.0), TOL));

        // a point just above the base gives a center within tolerance of it
        let low = InteriorPoint::new(0.0, 1.5e-9, TOL).expect("interior");
        let h = Horocycle::from_base_and_point(BoundaryPoint::ZERO, low).expect("valid");
        assert!(h.euc_radius() > 0.0);
        assert!(h.contains(low.into(), TOL));
    }
}
