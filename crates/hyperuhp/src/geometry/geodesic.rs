use std::f64::consts::{FRAC_PI_4, PI};
use std::fmt;

use crate::{
    BoundaryPoint, Complex, Float, InteriorPoint, Tolerance, UhpError, UhpPoint, UhpResult,
};

/// Geodesic in the upper half-plane: either a semicircle centered on the real
/// axis or a vertical ray.
///
/// The geodesic is described by its two boundary endpoints and two interior
/// witness points. The order of [`Geodesic::points()`] follows the direction
/// in which the geodesic was specified.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Geodesic {
    /// Euclidean center, which is the point at infinity for vertical
    /// geodesics.
    center: BoundaryPoint,
    /// Euclidean radius, which is infinite for vertical geodesics.
    radius: Float,
    /// Real coordinate of the center, or of the line for a vertical geodesic.
    axis: Float,
    endpoints: [BoundaryPoint; 2],
    witnesses: [InteriorPoint; 2],
}

impl fmt::Display for Geodesic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [e0, e1] = self.endpoints;
        if self.is_vertical() {
            write!(f, "vertical geodesic from {e0} to {e1}")
        } else {
            write!(
                f,
                "geodesic from {e0} to {e1} (center {}, radius {})",
                self.center, self.radius,
            )
        }
    }
}

impl Geodesic {
    /// Constructs the geodesic through two distinct points, which may be
    /// interior or boundary points.
    ///
    /// For a semicircle, the endpoint on the side of `p` comes first. For a
    /// vertical geodesic, the real endpoint comes first and the point at
    /// infinity comes last.
    ///
    /// Returns [`UhpError::DegenerateInput`] if the points are approximately
    /// equal.
    pub fn through_points(p: UhpPoint, q: UhpPoint, tol: Tolerance) -> UhpResult<Self> {
        if tol.eq(p, q) {
            return Err(UhpError::degenerate(format!(
                "geodesic requires two distinct points; got {p} and {q}",
            )));
        }
        if p.is_infinity() {
            return Self::vertical_through(q, tol);
        }
        if q.is_infinity() {
            return Self::vertical_through(p, tol);
        }
        if tol.eq(p.re(), q.re()) {
            return Self::vertical_between(p, q, tol);
        }

        match (p, q) {
            (UhpPoint::Boundary(_), UhpPoint::Boundary(_)) => {
                let (a, b) = (p.re(), q.re());
                let axis = (a + b) / 2.0;
                let radius = (b - a).abs() / 2.0;
                let (p_side, q_side) = if a < b {
                    (3.0 * FRAC_PI_4, FRAC_PI_4)
                } else {
                    (FRAC_PI_4, 3.0 * FRAC_PI_4)
                };
                Self::semicircle(
                    axis,
                    radius,
                    [BoundaryPoint::real(a)?, BoundaryPoint::real(b)?],
                    [
                        point_at_angle(axis, radius, p_side)?,
                        point_at_angle(axis, radius, q_side)?,
                    ],
                )
            }
            (UhpPoint::Boundary(b), UhpPoint::Interior(z)) => {
                Self::through_boundary_and_interior(b, z, true)
            }
            (UhpPoint::Interior(z), UhpPoint::Boundary(b)) => {
                Self::through_boundary_and_interior(b, z, false)
            }
            (UhpPoint::Interior(z), UhpPoint::Interior(w)) => {
                let axis = bisector_center(z.to_complex(), w.to_complex());
                let radius = z.to_complex().distance(Complex::from(axis));
                let (left, right) = (
                    BoundaryPoint::real(axis - radius)?,
                    BoundaryPoint::real(axis + radius)?,
                );
                let endpoints = if z.re() < w.re() {
                    [left, right]
                } else {
                    [right, left]
                };
                Self::semicircle(axis, radius, endpoints, [z, w])
            }
        }
    }

    fn through_boundary_and_interior(
        b: BoundaryPoint,
        z: InteriorPoint,
        boundary_first: bool,
    ) -> UhpResult<Self> {
        let b_re = b.to_complex().re();
        let axis = bisector_center(b.to_complex(), z.to_complex());
        let radius = z.to_complex().distance(Complex::from(axis));
        let other = BoundaryPoint::real(2.0 * axis - b_re)?;
        let z_angle = angular_position(axis, z.to_complex());
        let other_angle = if b_re < axis { 0.0 } else { PI };
        // witness between `z` and the endpoint that was not given
        let w = point_at_angle(axis, radius, (z_angle + other_angle) / 2.0)?;

        if boundary_first {
            Self::semicircle(axis, radius, [b, other], [z, w])
        } else {
            Self::semicircle(axis, radius, [other, b], [w, z])
        }
    }

    fn vertical_between(p: UhpPoint, q: UhpPoint, tol: Tolerance) -> UhpResult<Self> {
        match (p, q) {
            (UhpPoint::Boundary(b), UhpPoint::Interior(z))
            | (UhpPoint::Interior(z), UhpPoint::Boundary(b)) => {
                let x = b.to_complex().re();
                let above = InteriorPoint::new(x, 2.0 * z.im(), tol)?;
                Ok(Self::vertical(x, [b, BoundaryPoint::INFINITY], [z, above]))
            }
            (UhpPoint::Interior(z), UhpPoint::Interior(w)) => {
                let x = z.re();
                let (lower, upper) = if z.im() < w.im() { (z, w) } else { (w, z) };
                let foot = BoundaryPoint::real(x)?;
                Ok(Self::vertical(x, [foot, BoundaryPoint::INFINITY], [lower, upper]))
            }
            (UhpPoint::Boundary(_), UhpPoint::Boundary(_)) => Err(UhpError::degenerate(
                format!("distinct boundary points {p} and {q} cannot share a real part"),
            )),
        }
    }

    /// Constructs the vertical geodesic that has the point at infinity as one
    /// endpoint and passes through `point`.
    ///
    /// If `point` is on the boundary, the witness points are directly above
    /// it. If `point` is in the interior, it is the lower witness point and
    /// the other is twice as high.
    ///
    /// Returns [`UhpError::DegenerateInput`] if `point` is itself the point
    /// at infinity.
    pub fn vertical_through(point: UhpPoint, tol: Tolerance) -> UhpResult<Self> {
        let (x, witnesses) = match point {
            UhpPoint::Interior(z) => {
                let above = InteriorPoint::new(z.re(), z.im() * 2.0, tol)?;
                (z.re(), [z, above])
            }
            UhpPoint::Boundary(b) => match b.real_part() {
                Some(x) => {
                    let witnesses = [
                        InteriorPoint::new(x, 1.0, tol)?,
                        InteriorPoint::new(x, 2.0, tol)?,
                    ];
                    (x, witnesses)
                }
                None => {
                    return Err(UhpError::degenerate(
                        "geodesic requires a finite point besides infinity",
                    ));
                }
            },
        };
        Ok(Self::vertical(
            x,
            [BoundaryPoint::real(x)?, BoundaryPoint::INFINITY],
            witnesses,
        ))
    }

    /// Constructs the geodesic through `base` that is tangent to `direction`
    /// there.
    ///
    /// The points are ordered in the direction of travel: the endpoint
    /// behind `base`, then `base`, then a witness point ahead of `base`, then
    /// the endpoint ahead.
    ///
    /// Returns [`UhpError::DegenerateInput`] if `direction` is approximately
    /// zero or infinite.
    pub fn from_base_and_direction(
        base: InteriorPoint,
        direction: Complex,
        tol: Tolerance,
    ) -> UhpResult<Self> {
        if direction.is_infinite() || tol.eq_zero(direction) {
            return Err(UhpError::degenerate(format!(
                "geodesic direction must be finite and nonzero; got {direction}",
            )));
        }

        let (x, y) = (base.re(), base.im());
        if tol.eq_zero(direction.re()) {
            let foot = BoundaryPoint::real(x)?;
            return Ok(if direction.im() > 0.0 {
                let ahead = InteriorPoint::new(x, y * 2.0, tol)?;
                Self::vertical(x, [foot, BoundaryPoint::INFINITY], [base, ahead])
            } else {
                let ahead = InteriorPoint::from_positive(x, y / 2.0)?;
                Self::vertical(x, [BoundaryPoint::INFINITY, foot], [base, ahead])
            });
        }

        let slope = direction.im() / direction.re();
        let axis = x + slope * y;
        let radius = base.to_complex().distance(Complex::from(axis));
        let angle = angular_position(axis, base.to_complex());
        let left = BoundaryPoint::real(axis - radius)?;
        let right = BoundaryPoint::real(axis + radius)?;
        // increasing angle moves toward the left endpoint
        let heading_left = direction.dot(increasing_angle_tangent(angle)) > 0.0;
        if heading_left {
            let ahead = point_at_angle(axis, radius, (angle + PI) / 2.0)?;
            Self::semicircle(axis, radius, [right, left], [base, ahead])
        } else {
            let ahead = point_at_angle(axis, radius, angle / 2.0)?;
            Self::semicircle(axis, radius, [left, right], [base, ahead])
        }
    }

    fn vertical(x: Float, endpoints: [BoundaryPoint; 2], witnesses: [InteriorPoint; 2]) -> Self {
        Self {
            center: BoundaryPoint::INFINITY,
            radius: Float::INFINITY,
            axis: x,
            endpoints,
            witnesses,
        }
    }
    fn semicircle(
        axis: Float,
        radius: Float,
        endpoints: [BoundaryPoint; 2],
        witnesses: [InteriorPoint; 2],
    ) -> UhpResult<Self> {
        Ok(Self {
            center: BoundaryPoint::real(axis)?,
            radius,
            axis,
            endpoints,
            witnesses,
        })
    }

    /// Returns whether the geodesic is a vertical ray.
    pub fn is_vertical(&self) -> bool {
        self.center.is_infinity()
    }
    /// Returns the Euclidean center, which is the point at infinity for a
    /// vertical geodesic.
    pub fn center(&self) -> BoundaryPoint {
        self.center
    }
    /// Returns the Euclidean radius, which is `+∞` for a vertical geodesic.
    pub fn radius(&self) -> Float {
        self.radius
    }
    /// Returns the two boundary endpoints.
    pub fn endpoints(&self) -> [BoundaryPoint; 2] {
        self.endpoints
    }
    /// Returns the endpoint, two interior witness points, and the other
    /// endpoint, in order along the geodesic.
    pub fn points(&self) -> [UhpPoint; 4] {
        let [e0, e1] = self.endpoints;
        let [w0, w1] = self.witnesses;
        [e0.into(), w0.into(), w1.into(), e1.into()]
    }

    /// Returns the parametric position of a point along the geodesic: its
    /// height for a vertical geodesic, or its angular position around the
    /// center for a semicircle. The point at infinity has position `+∞`.
    pub fn position_of(&self, point: UhpPoint) -> Float {
        if point.is_infinity() {
            Float::INFINITY
        } else if self.is_vertical() {
            point.im()
        } else {
            angular_position(self.axis, point.to_complex())
        }
    }

    /// Returns whether `point` lies on the geodesic, including its endpoints.
    pub fn contains(&self, point: UhpPoint, tol: Tolerance) -> bool {
        if self.is_vertical() {
            point.is_infinity() || tol.eq(point.re(), self.axis)
        } else {
            !point.is_infinity()
                && tol.eq(point.to_complex().distance(Complex::from(self.axis)), self.radius)
        }
    }

    /// Returns the endpoints ordered so that travelling along the geodesic
    /// from `from` toward `to` heads toward the second one.
    pub fn oriented_endpoints(&self, from: UhpPoint, to: UhpPoint) -> [BoundaryPoint; 2] {
        let [e0, e1] = self.endpoints;
        let travel = self.position_of(to) - self.position_of(from);
        let span = self.position_of(e1.into()) - self.position_of(e0.into());
        if travel * span < 0.0 {
            [e1, e0]
        } else {
            [e0, e1]
        }
    }

    /// Returns the unit tangent vector to the geodesic at `point`, pointing
    /// toward `heading`. Both points should lie on the geodesic.
    pub fn tangent_at(&self, point: UhpPoint, heading: UhpPoint) -> Complex {
        if self.is_vertical() {
            return if heading.is_infinity() || heading.im() > point.im() {
                Complex::I
            } else {
                Complex::NEG_I
            };
        }
        if point.is_infinity() {
            debug_panic!("no tangent at infinity on non-vertical geodesic {self}");
            return Complex::ZERO;
        }
        let angle = self.position_of(point);
        let tangent = increasing_angle_tangent(angle);
        if self.position_of(heading) < angle {
            -tangent
        } else {
            tangent
        }
    }
}

/// Segment of a geodesic between two points, or a ray from an interior point
/// to the boundary.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeodesicSegment {
    geodesic: Geodesic,
    points: [UhpPoint; 2],
    positions: [Float; 2],
    length: Float,
}

impl GeodesicSegment {
    /// Constructs the geodesic segment between two distinct points.
    ///
    /// Returns [`UhpError::DegenerateInput`] if the points are approximately
    /// equal.
    pub fn between(p: UhpPoint, q: UhpPoint, tol: Tolerance) -> UhpResult<Self> {
        let geodesic = Geodesic::through_points(p, q, tol)?;
        Ok(Self::on_geodesic(geodesic, [p, q]))
    }
    /// Constructs the geodesic ray from `base` in the direction `direction`.
    ///
    /// Returns [`UhpError::DegenerateInput`] if `direction` is approximately
    /// zero or infinite.
    pub fn ray(base: InteriorPoint, direction: Complex, tol: Tolerance) -> UhpResult<Self> {
        let geodesic = Geodesic::from_base_and_direction(base, direction, tol)?;
        let [_, ahead] = geodesic.endpoints();
        Ok(Self::on_geodesic(geodesic, [base.into(), ahead.into()]))
    }
    fn on_geodesic(geodesic: Geodesic, points: [UhpPoint; 2]) -> Self {
        let [p, q] = points;
        Self {
            geodesic,
            points,
            positions: [geodesic.position_of(p), geodesic.position_of(q)],
            length: p.distance(q),
        }
    }

    /// Returns the geodesic containing the segment.
    pub fn geodesic(&self) -> &Geodesic {
        &self.geodesic
    }
    /// Returns the start and end points of the segment.
    pub fn points(&self) -> [UhpPoint; 2] {
        self.points
    }
    /// Returns the parametric positions of the start and end points along the
    /// geodesic. See [`Geodesic::position_of()`].
    pub fn positions(&self) -> [Float; 2] {
        self.positions
    }
    /// Returns the hyperbolic length, which is `+∞` if either end is on the
    /// boundary.
    pub fn length(&self) -> Float {
        self.length
    }
}

/// Returns the real coordinate of the point on the real axis that is
/// equidistant from `z` and `w`, which must have different real parts.
fn bisector_center(z: Complex, w: Complex) -> Float {
    let mid = (z + w).scale(0.5);
    let slope = (w.im() - z.im()) / (w.re() - z.re());
    mid.re() + slope * mid.im()
}

fn angular_position(axis: Float, z: Complex) -> Float {
    Float::atan2(z.im(), z.re() - axis)
}

fn increasing_angle_tangent(angle: Float) -> Complex {
    Complex::from_polar(1.0, angle + PI / 2.0)
}

/// Returns the point at `angle` on a semicircle. `angle` must be strictly
/// between 0 and π, in which case the point may lie arbitrarily close to the
/// boundary.
fn point_at_angle(axis: Float, radius: Float, angle: Float) -> UhpResult<InteriorPoint> {
    InteriorPoint::from_positive(axis + radius * angle.cos(), radius * angle.sin())
}
