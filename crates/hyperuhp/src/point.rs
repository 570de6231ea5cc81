//! Points of the upper half-plane and its boundary.

use std::fmt;

use crate::{ApproxEq, Complex, Float, Tolerance, UhpError, UhpResult};

/// Classification of a [`UhpPoint`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PointKind {
    /// Point with positive imaginary part.
    Interior,
    /// Point on the boundary of the upper half-plane.
    Boundary(BoundaryKind),
}

/// Classification of a [`BoundaryPoint`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BoundaryKind {
    /// Point on the real axis.
    Finite,
    /// The point at infinity.
    Infinity,
}

/// Point in the interior of the upper half-plane, with finite real part and
/// finite positive imaginary part.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InteriorPoint(Complex);

/// Point on the boundary of the upper half-plane: either a real number or
/// the point at infinity.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundaryPoint(Option<Float>);

/// Point in the upper half-plane or on its boundary.
///
/// Points are validated on construction and classified once. Consumers match
/// on the variant instead of inspecting coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum UhpPoint {
    /// Point in the interior.
    Interior(InteriorPoint),
    /// Point on the boundary, possibly the point at infinity.
    Boundary(BoundaryPoint),
}

impl InteriorPoint {
    /// The point `i`.
    pub const I: Self = Self(Complex::I);

    /// Constructs an interior point.
    ///
    /// Returns an error unless `re` is finite and `im` is finite and
    /// positive (not approximately zero).
    pub fn new(re: Float, im: Float, tol: Tolerance) -> UhpResult<Self> {
        Self::from_complex(Complex::new(re, im)?, tol)
    }
    /// Constructs an interior point from a complex number.
    ///
    /// Returns an error unless `z` is finite with positive imaginary part.
    pub fn from_complex(z: Complex, tol: Tolerance) -> UhpResult<Self> {
        if z.is_infinite() || !tol.is_pos(z.im()) {
            return Err(UhpError::invalid(format!(
                "interior point must have positive imaginary part; got {z}",
            )));
        }
        Ok(Self(z))
    }

    /// Constructs an interior point whose imaginary part is positive by
    /// construction. Unlike [`InteriorPoint::new()`], this accepts points
    /// within tolerance of the boundary, such as witness points below a valid
    /// interior point.
    pub(crate) fn from_positive(re: Float, im: Float) -> UhpResult<Self> {
        if !(re.is_finite() && im.is_finite() && im > 0.0) {
            return Err(UhpError::inconsistent(format!(
                "constructed point ({re}, {im}) is not in the upper half-plane",
            )));
        }
        Ok(Self(Complex::canonical(re, im)))
    }

    /// Returns the point as a complex number.
    pub fn to_complex(self) -> Complex {
        self.0
    }
    /// Returns the real part.
    pub fn re(self) -> Float {
        self.0.re()
    }
    /// Returns the imaginary part, which is always positive.
    pub fn im(self) -> Float {
        self.0.im()
    }

    /// Returns the hyperbolic distance to another interior point.
    pub fn distance(self, other: InteriorPoint) -> Float {
        let chord = self.0.distance(other.0);
        2.0 * (chord / (2.0 * (self.im() * other.im()).sqrt())).asinh()
    }
}

impl BoundaryPoint {
    /// The point at infinity.
    pub const INFINITY: Self = Self(None);
    /// The origin.
    pub const ZERO: Self = Self(Some(0.0));

    /// Constructs a boundary point.
    ///
    /// Returns an error unless `re` is finite and `im` is approximately zero,
    /// or both are `+∞`.
    pub fn new(re: Float, im: Float, tol: Tolerance) -> UhpResult<Self> {
        Self::from_complex(Complex::new(re, im)?, tol)
    }
    /// Constructs a boundary point from a complex number.
    ///
    /// Returns an error unless `z` is infinite or approximately real.
    pub fn from_complex(z: Complex, tol: Tolerance) -> UhpResult<Self> {
        if z.is_infinite() {
            Ok(Self::INFINITY)
        } else if tol.eq_zero(z.im()) {
            Ok(Self(Some(z.re())))
        } else {
            Err(UhpError::invalid(format!(
                "boundary point must have zero imaginary part; got {z}",
            )))
        }
    }
    /// Constructs a boundary point on the real axis.
    ///
    /// Returns an error if `re` is not finite.
    pub fn real(re: Float) -> UhpResult<Self> {
        if !re.is_finite() {
            return Err(UhpError::invalid(format!(
                "real boundary point must be finite; got {re}",
            )));
        }
        Ok(Self(Some(re)))
    }

    /// Returns whether this is a real point or the point at infinity.
    pub fn kind(self) -> BoundaryKind {
        match self.0 {
            Some(_) => BoundaryKind::Finite,
            None => BoundaryKind::Infinity,
        }
    }
    /// Returns the real coordinate, or `None` for the point at infinity.
    pub fn real_part(self) -> Option<Float> {
        self.0
    }
    /// Returns whether this is the point at infinity.
    pub fn is_infinity(self) -> bool {
        self.0.is_none()
    }
    /// Returns the point as a complex number.
    pub fn to_complex(self) -> Complex {
        match self.0 {
            Some(re) => Complex::from(re),
            None => Complex::INFINITY,
        }
    }
}

impl UhpPoint {
    /// The point `i`.
    pub const I: Self = Self::Interior(InteriorPoint::I);
    /// The point at infinity.
    pub const INFINITY: Self = Self::Boundary(BoundaryPoint::INFINITY);

    /// Constructs a point in the upper half-plane or on its boundary.
    ///
    /// Returns an error if `im` is negative, if `re` is not finite (except
    /// for the point at infinity `(+∞, +∞)`), or if the components are
    /// inconsistent.
    pub fn new(re: Float, im: Float, tol: Tolerance) -> UhpResult<Self> {
        Self::from_complex(Complex::new(re, im)?, tol)
    }
    /// Classifies a complex number as a point in the upper half-plane or on
    /// its boundary.
    ///
    /// An imaginary part that is approximately zero is snapped to zero.
    /// Returns an error if the imaginary part is negative.
    pub fn from_complex(z: Complex, tol: Tolerance) -> UhpResult<Self> {
        if z.is_infinite() || tol.eq_zero(z.im()) {
            BoundaryPoint::from_complex(z, tol).map(Self::Boundary)
        } else if z.im() > 0.0 {
            Ok(Self::Interior(InteriorPoint(z)))
        } else {
            Err(UhpError::invalid(format!(
                "point must not have negative imaginary part; got {z}",
            )))
        }
    }

    /// Returns the classification of the point.
    pub fn kind(self) -> PointKind {
        match self {
            Self::Interior(_) => PointKind::Interior,
            Self::Boundary(b) => PointKind::Boundary(b.kind()),
        }
    }
    /// Returns whether the point is in the interior.
    pub fn is_interior(self) -> bool {
        matches!(self, Self::Interior(_))
    }
    /// Returns whether the point is on the boundary, including infinity.
    pub fn is_boundary(self) -> bool {
        matches!(self, Self::Boundary(_))
    }
    /// Returns whether the point is the point at infinity.
    pub fn is_infinity(self) -> bool {
        matches!(self, Self::Boundary(b) if b.is_infinity())
    }
    /// Returns the interior point, if this is one.
    pub fn as_interior(self) -> Option<InteriorPoint> {
        match self {
            Self::Interior(p) => Some(p),
            Self::Boundary(_) => None,
        }
    }
    /// Returns the boundary point, if this is one.
    pub fn as_boundary(self) -> Option<BoundaryPoint> {
        match self {
            Self::Interior(_) => None,
            Self::Boundary(b) => Some(b),
        }
    }

    /// Returns the point as a complex number.
    pub fn to_complex(self) -> Complex {
        match self {
            Self::Interior(p) => p.to_complex(),
            Self::Boundary(b) => b.to_complex(),
        }
    }
    /// Returns the real part, which is `+∞` for the point at infinity.
    pub fn re(self) -> Float {
        self.to_complex().re()
    }
    /// Returns the imaginary part, which is `+∞` for the point at infinity.
    pub fn im(self) -> Float {
        self.to_complex().im()
    }

    /// Returns the hyperbolic distance to another point, which is `+∞` if
    /// either is a boundary point.
    pub fn distance(self, other: UhpPoint) -> Float {
        match (self, other) {
            (Self::Interior(p), Self::Interior(q)) => p.distance(q),
            _ => Float::INFINITY,
        }
    }
}

impl From<InteriorPoint> for UhpPoint {
    fn from(value: InteriorPoint) -> Self {
        Self::Interior(value)
    }
}
impl From<BoundaryPoint> for UhpPoint {
    fn from(value: BoundaryPoint) -> Self {
        Self::Boundary(value)
    }
}
impl From<InteriorPoint> for Complex {
    fn from(value: InteriorPoint) -> Self {
        value.to_complex()
    }
}
impl From<BoundaryPoint> for Complex {
    fn from(value: BoundaryPoint) -> Self {
        value.to_complex()
    }
}
impl From<UhpPoint> for Complex {
    fn from(value: UhpPoint) -> Self {
        value.to_complex()
    }
}

impl ApproxEq for InteriorPoint {
    fn approx_eq(&self, other: &Self, tol: Tolerance) -> bool {
        tol.eq(self.0, other.0)
    }
}
impl ApproxEq for BoundaryPoint {
    fn approx_eq(&self, other: &Self, tol: Tolerance) -> bool {
        match (self.0, other.0) {
            (Some(a), Some(b)) => tol.eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}
impl ApproxEq for UhpPoint {
    fn approx_eq(&self, other: &Self, tol: Tolerance) -> bool {
        tol.eq(self.to_complex(), other.to_complex())
    }
}

impl fmt::Display for InteriorPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
impl fmt::Display for BoundaryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(re) => fmt::Display::fmt(&re, f),
            None => write!(f, "∞"),
        }
    }
}
impl fmt::Display for UhpPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interior(p) => fmt::Display::fmt(p, f),
            Self::Boundary(b) => fmt::Display::fmt(b, f),
        }
    }
}
