//! Geodesics, circles, horocycles, and polygons in the upper half-plane.

mod circle;
mod geodesic;
mod horocycle;
mod polygon;

pub use circle::Circle;
pub use geodesic::{Geodesic, GeodesicSegment};
pub use horocycle::Horocycle;
pub use polygon::Polygon;

use crate::{Float, Tolerance, UhpPoint, UhpResult};

/// Returns the hyperbolic distance between two points, which is `+∞` if
/// either is a boundary point.
///
/// For interior points `z` and `w` this is `2 asinh(|z - w| / (2
/// sqrt(z.im * w.im)))`.
pub fn distance(z: UhpPoint, w: UhpPoint) -> Float {
    z.distance(w)
}

/// Returns the angle at vertex `q` between the geodesics from `q` to `p` and
/// from `q` to `r`, in the range `[0, π]`.
///
/// The angle is zero if `q` is the point at infinity or if `p` and `r` are
/// approximately equal. Returns [`crate::UhpError::DegenerateInput`] if `q`
/// coincides with `p` or `r`.
pub fn angle_at(p: UhpPoint, q: UhpPoint, r: UhpPoint, tol: Tolerance) -> UhpResult<Float> {
    if q.is_infinity() || tol.eq(p, r) {
        return Ok(0.0);
    }
    let toward_p = Geodesic::through_points(q, p, tol)?.tangent_at(q, p);
    let toward_r = Geodesic::through_points(q, r, tol)?.tangent_at(q, r);
    Ok(toward_p.angle_between(toward_r).unwrap_or(0.0))
}
