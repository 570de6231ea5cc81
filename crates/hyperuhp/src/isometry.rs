//! Isometries of the hyperbolic plane, represented by Möbius transformations
//! that preserve the upper half-plane.
//!
//! Most constructors work by conjugation: a configuration in general position
//! is moved to a standard position (a point to `i`, a geodesic to the
//! imaginary axis, or a boundary point to infinity), where the isometry has a
//! simple closed form, and then moved back.

use std::fmt;
use std::ops::Mul;

use crate::{
    ApproxEq, BoundaryPoint, Complex, Float, Geodesic, InteriorPoint, Mobius, Tolerance,
    UhpError, UhpPoint, UhpResult,
};

/// Classification of an isometry by its fixed points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IsometryKind {
    /// Fixes every point.
    Identity,
    /// Rotation about a single interior fixed point.
    Elliptic,
    /// Fixes a single boundary point.
    Parabolic,
    /// Translation along a geodesic, fixing its two endpoints.
    Hyperbolic,
}

/// Fixed points of an isometry other than the identity.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FixedPoints {
    /// Center of rotation of an elliptic isometry.
    Interior(InteriorPoint),
    /// Fixed point of a parabolic isometry.
    Boundary(BoundaryPoint),
    /// Endpoints of the axis of a hyperbolic isometry, in increasing order
    /// with the point at infinity last.
    BoundaryPair([BoundaryPoint; 2]),
}

/// Orientation-preserving isometry of the upper half-plane.
///
/// Two isometries are approximately equal if their Möbius transformations
/// differ only by a scale factor.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Isometry(Mobius);

impl Default for Isometry {
    fn default() -> Self {
        Isometry::IDENT
    }
}

impl fmt::Display for Isometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ApproxEq for Isometry {
    fn approx_eq(&self, other: &Self, tol: Tolerance) -> bool {
        let a = self.0.reduce(tol);
        let b = other.0.reduce(tol);
        tol.eq(a, b) || tol.eq(a, b.scale(Complex::NEG_ONE))
    }
}

impl Isometry {
    /// Identity isometry.
    pub const IDENT: Self = Self(Mobius::IDENT);

    /// Constructs an isometry from a Möbius transformation.
    ///
    /// Returns [`UhpError::NonInvertible`] if the determinant is
    /// approximately zero.
    pub fn new(mobius: Mobius, tol: Tolerance) -> UhpResult<Self> {
        if tol.eq_zero(mobius.determinant()) {
            return Err(UhpError::NonInvertible);
        }
        Ok(Self(mobius))
    }
    /// Constructs an isometry from real coefficients whose determinant is
    /// known to be positive.
    fn from_real_coefficients(coefficients: [Float; 4]) -> UhpResult<Self> {
        if let Some(x) = coefficients.iter().find(|x| !x.is_finite()) {
            return Err(UhpError::invalid(format!(
                "isometry coefficients must be finite; got {x}",
            )));
        }
        let [a, b, c, d] = coefficients.map(Complex::from);
        Ok(Self(Mobius::from_coefficients_unchecked(a, b, c, d)))
    }

    /// Returns the underlying Möbius transformation.
    pub fn mobius(&self) -> Mobius {
        self.0
    }

    /// Rotation about `i` with coefficients `(cos θ, sin θ, -sin θ, cos θ)`.
    pub fn elliptic_about_i(angle: Float) -> UhpResult<Self> {
        let (sin, cos) = angle.sin_cos();
        Self::from_real_coefficients([cos, sin, -sin, cos])
    }
    /// Translation by `distance` along the imaginary axis, moving `i` toward
    /// infinity.
    pub fn hyperbolic_along_imaginary_axis(distance: Float) -> UhpResult<Self> {
        let half = distance / 2.0;
        Self::from_real_coefficients([half.exp(), 0.0, 0.0, (-half).exp()])
    }
    /// Horizontal translation `z ↦ z + displacement`, which fixes the point at
    /// infinity.
    pub fn parabolic_at_infinity(displacement: Float) -> UhpResult<Self> {
        Self::from_real_coefficients([1.0, displacement, 0.0, 1.0])
    }

    /// Returns an isometry taking `point` to `i`.
    pub fn moving_point_to_i(point: InteriorPoint) -> Self {
        let [re, im] = [point.re(), point.im()].map(Complex::from);
        Self(Mobius::from_coefficients_unchecked(
            Complex::ONE,
            -re,
            Complex::ZERO,
            im,
        ))
    }
    /// Returns an isometry taking `e0` to `0` and `e1` to infinity, and
    /// therefore the geodesic between them to the imaginary axis.
    ///
    /// Returns [`UhpError::DegenerateInput`] if the endpoints coincide.
    pub fn moving_geodesic_to_imaginary_axis(
        e0: BoundaryPoint,
        e1: BoundaryPoint,
        tol: Tolerance,
    ) -> UhpResult<Self> {
        match (e0.real_part(), e1.real_part()) {
            (Some(x0), Some(x1)) if tol.ne(x0, x1) => {
                // z ↦ s(z - x0) / (z - x1), with the sign chosen so that the
                // determinant s(x0 - x1) is positive
                let s = if x0 > x1 { 1.0 } else { -1.0 };
                Self::from_real_coefficients([s, -s * x0, 1.0, -x1])
            }
            (Some(x0), None) => Self::from_real_coefficients([1.0, -x0, 0.0, 1.0]),
            (None, Some(x1)) => Self::from_real_coefficients([0.0, -1.0, 1.0, -x1]),
            _ => Err(UhpError::degenerate(format!(
                "geodesic endpoints {e0} and {e1} coincide",
            ))),
        }
    }
    /// Returns an isometry taking `point` to infinity. This is the identity if
    /// `point` is already the point at infinity.
    pub fn moving_point_to_infinity(point: BoundaryPoint) -> Self {
        match point.real_part() {
            None => Self::IDENT,
            Some(x) => Self(Mobius::from_coefficients_unchecked(
                Complex::ZERO,
                Complex::NEG_ONE,
                Complex::ONE,
                Complex::from(-x),
            )),
        }
    }

    /// Rotation about `center`, conjugate to [`Isometry::elliptic_about_i()`].
    ///
    /// Rotating by `angle` turns tangent vectors at `center` by `2 * angle`.
    pub fn elliptic(center: InteriorPoint, angle: Float, tol: Tolerance) -> UhpResult<Self> {
        Self::elliptic_about_i(angle)?.conjugate(&Self::moving_point_to_i(center), tol)
    }
    /// Translation along the geodesic through `z` and `w`, moving `z` toward
    /// `w` by `distance`.
    ///
    /// If `distance` is `None`, it defaults to the distance from `z` to `w`,
    /// so that the result takes `z` to `w`. Returns the identity if the points
    /// coincide or the distance is zero.
    pub fn hyperbolic(
        z: UhpPoint,
        w: UhpPoint,
        distance: Option<Float>,
        tol: Tolerance,
    ) -> UhpResult<Self> {
        let distance = distance.unwrap_or_else(|| z.distance(w));
        if tol.eq(z, w) || tol.eq_zero(distance) {
            log::debug!("hyperbolic isometry from {z} to {w} is the identity");
            return Ok(Self::IDENT);
        }
        if !distance.is_finite() {
            return Err(UhpError::invalid(format!(
                "translation distance must be finite; got {distance}",
            )));
        }
        let [e0, e1] = Geodesic::through_points(z, w, tol)?.oriented_endpoints(z, w);
        Self::hyperbolic_along_imaginary_axis(distance)?
            .conjugate(&Self::moving_geodesic_to_imaginary_axis(e0, e1, tol)?, tol)
    }
    /// Parabolic isometry fixing `base`, conjugate to
    /// [`Isometry::parabolic_at_infinity()`].
    pub fn parabolic(base: BoundaryPoint, displacement: Float, tol: Tolerance) -> UhpResult<Self> {
        Self::parabolic_at_infinity(displacement)?
            .conjugate(&Self::moving_point_to_infinity(base), tol)
    }

    /// Applies the isometry to a point.
    pub fn apply(&self, point: UhpPoint, tol: Tolerance) -> UhpResult<UhpPoint> {
        UhpPoint::from_complex(self.0.apply(point.to_complex(), tol), tol)
    }
    /// Returns the isometry that applies `other` and then `self`.
    #[must_use]
    pub fn compose(&self, other: &Isometry) -> Isometry {
        Isometry(self.0.compose(&other.0))
    }
    /// Returns the inverse isometry.
    pub fn inverse(&self, tol: Tolerance) -> UhpResult<Isometry> {
        self.0.inverse(tol).map(Isometry)
    }
    /// Returns `by⁻¹ ∘ self ∘ by`.
    pub fn conjugate(&self, by: &Isometry, tol: Tolerance) -> UhpResult<Isometry> {
        self.0.conjugate(&by.0, tol).map(Isometry)
    }
    /// Returns whether this is approximately the identity.
    pub fn is_ident(&self, tol: Tolerance) -> bool {
        self.0.is_ident(tol)
    }

    /// Returns the square of the trace of the determinant-1 representative.
    fn trace_squared(&self, tol: Tolerance) -> Float {
        let t = self.0.reduce(tol).trace();
        (t * t).re()
    }

    /// Classifies the isometry by comparing its squared trace to 4.
    pub fn classify(&self, tol: Tolerance) -> IsometryKind {
        if self.is_ident(tol) {
            log::trace!("classified {self} as identity");
            return IsometryKind::Identity;
        }
        let tr2 = self.trace_squared(tol);
        let kind = if tol.eq(tr2, 4.0) {
            IsometryKind::Parabolic
        } else if tr2 > 4.0 {
            IsometryKind::Hyperbolic
        } else {
            IsometryKind::Elliptic
        };
        log::trace!("classified {self} as {kind:?} (trace² = {tr2})");
        kind
    }

    /// Returns the fixed points, or `None` for the identity.
    ///
    /// Fixed points are the roots of `cz² + (d - a)z - b = 0`. Returns
    /// [`UhpError::InternalInconsistency`] if a root does not have the type
    /// that the classification predicts, which means the tolerance is too
    /// tight for the numerical error in the coefficients.
    pub fn fixed_points(&self, tol: Tolerance) -> UhpResult<Option<FixedPoints>> {
        let kind = self.classify(tol);
        let [a, b, c, d] = self.0.reduce(tol).coefficients();
        let t = a + d;
        let sqrt_disc = (t * t - Complex::from(4.0)).sqrt()?;

        let boundary = |z: Complex| {
            BoundaryPoint::from_complex(z, tol).map_err(|_| {
                UhpError::inconsistent(format!(
                    "{kind:?} isometry {self} has fixed point {z} off the boundary",
                ))
            })
        };

        match kind {
            IsometryKind::Identity => Ok(None),

            IsometryKind::Parabolic => {
                if tol.eq_zero(c) {
                    return Ok(Some(FixedPoints::Boundary(BoundaryPoint::INFINITY)));
                }
                let z = (a - d).checked_div(c.scale(2.0), tol)?;
                Ok(Some(FixedPoints::Boundary(boundary(z)?)))
            }

            IsometryKind::Hyperbolic => {
                if tol.eq_zero(c) {
                    // z ↦ (az + b) / d fixes infinity and b / (d - a)
                    let z = b.checked_div(d - a, tol)?;
                    let pair = [boundary(z)?, BoundaryPoint::INFINITY];
                    return Ok(Some(FixedPoints::BoundaryPair(pair)));
                }
                let two_c = c.scale(2.0);
                let z1 = boundary((a - d - sqrt_disc).checked_div(two_c, tol)?)?;
                let z2 = boundary((a - d + sqrt_disc).checked_div(two_c, tol)?)?;
                let mut pair = [z1, z2];
                pair.sort_by(|p, q| p.to_complex().re().total_cmp(&q.to_complex().re()));
                Ok(Some(FixedPoints::BoundaryPair(pair)))
            }

            IsometryKind::Elliptic => {
                let candidates = if tol.eq_zero(c) {
                    vec![b.checked_div(d - a, tol)?]
                } else {
                    let two_c = c.scale(2.0);
                    vec![
                        (a - d + sqrt_disc).checked_div(two_c, tol)?,
                        (a - d - sqrt_disc).checked_div(two_c, tol)?,
                    ]
                };
                candidates
                    .into_iter()
                    .find_map(|z| InteriorPoint::from_complex(z, tol).ok())
                    .map(|p| Some(FixedPoints::Interior(p)))
                    .ok_or_else(|| {
                        UhpError::inconsistent(format!(
                            "elliptic isometry {self} has no interior fixed point",
                        ))
                    })
            }
        }
    }

    /// Returns the distance that a hyperbolic isometry moves points along its
    /// axis, or `None` if the isometry is not hyperbolic.
    pub fn translation_length(&self, tol: Tolerance) -> Option<Float> {
        match self.classify(tol) {
            IsometryKind::Hyperbolic => Some(2.0 * (self.trace_squared(tol).sqrt() / 2.0).acosh()),
            _ => None,
        }
    }

    /// Returns the angle by which an elliptic isometry turns tangent vectors
    /// at its fixed point, in the range `(0, π]`, or `None` if the isometry is
    /// not elliptic.
    ///
    /// Rotations in opposite directions by the same angle are not
    /// distinguished.
    pub fn rotation_angle(&self, tol: Tolerance) -> Option<Float> {
        match self.classify(tol) {
            IsometryKind::Elliptic => {
                let half_trace = (self.trace_squared(tol).max(0.0).sqrt() / 2.0).min(1.0);
                Some(2.0 * half_trace.acos())
            }
            _ => None,
        }
    }
}

impl Mul for Isometry {
    type Output = Isometry;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(&rhs)
    }
}
impl_forward_bin_ops_to_copy! {
    impl Mul for Isometry { fn mul() }
}
