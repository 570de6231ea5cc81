//! Approximate comparison using a combined relative and absolute tolerance.

use crate::{Float, UhpError, UhpResult};

/// Relative and absolute tolerance used for every approximate comparison.
///
/// Two finite numbers `a` and `b` are considered equal if `|a - b| <= abs +
/// rel * max(|a|, |b|)`. Infinities are only equal to themselves.
///
/// This is an immutable value that is passed explicitly to each operation
/// that needs it.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawTolerance")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerance {
    rel: Float,
    abs: Float,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTolerance {
    rel: Float,
    abs: Float,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTolerance> for Tolerance {
    type Error = UhpError;

    fn try_from(raw: RawTolerance) -> Result<Self, Self::Error> {
        Tolerance::new(raw.rel, raw.abs)
    }
}

impl Tolerance {
    /// Default tolerance: `1e-9` relative and `1e-9` absolute.
    pub const DEFAULT: Tolerance = Tolerance {
        rel: 1e-9,
        abs: 1e-9,
    };

    /// Constructs a tolerance. Returns an error unless both values are finite
    /// and strictly positive.
    pub fn new(rel: Float, abs: Float) -> UhpResult<Self> {
        if !(rel.is_finite() && rel > 0.0) {
            return Err(UhpError::invalid(format!(
                "relative tolerance must be positive; got {rel}",
            )));
        }
        if !(abs.is_finite() && abs > 0.0) {
            return Err(UhpError::invalid(format!(
                "absolute tolerance must be positive; got {abs}",
            )));
        }
        Ok(Self { rel, abs })
    }

    /// Returns the relative tolerance.
    pub fn rel(self) -> Float {
        self.rel
    }
    /// Returns the absolute tolerance.
    pub fn abs(self) -> Float {
        self.abs
    }

    /// Returns whether `a` and `b` are approximately equal.
    pub fn eq<T: ApproxEq>(self, a: T, b: T) -> bool {
        a.approx_eq(&b, self)
    }
    /// Returns whether `a` and `b` are not approximately equal.
    pub fn ne<T: ApproxEq>(self, a: T, b: T) -> bool {
        !self.eq(a, b)
    }
    /// Returns whether `x` is approximately zero.
    pub fn eq_zero<T: ApproxEqZero>(self, x: T) -> bool {
        x.approx_eq_zero(self)
    }
    /// Returns whether `x` is not approximately zero.
    pub fn ne_zero<T: ApproxEqZero>(self, x: T) -> bool {
        !self.eq_zero(x)
    }

    /// Returns whether `a` is less than `b` and not approximately equal to it.
    pub fn lt(self, a: Float, b: Float) -> bool {
        a < b && !self.eq(a, b)
    }
    /// Returns whether `a` is greater than `b` and not approximately equal to
    /// it.
    pub fn gt(self, a: Float, b: Float) -> bool {
        a > b && !self.eq(a, b)
    }
    /// Returns whether `x` is positive and not approximately zero.
    pub fn is_pos(self, x: Float) -> bool {
        x > 0.0 && self.ne_zero(x)
    }
    /// Returns whether `x` is negative and not approximately zero.
    pub fn is_neg(self, x: Float) -> bool {
        x < 0.0 && self.ne_zero(x)
    }
}

/// Approximate equality with respect to a [`Tolerance`].
pub trait ApproxEq {
    /// Returns whether `self` and `other` are equal within `tol`.
    fn approx_eq(&self, other: &Self, tol: Tolerance) -> bool;
}

/// Approximate comparison to zero with respect to a [`Tolerance`].
pub trait ApproxEqZero {
    /// Returns whether `self` is zero within `tol`.
    fn approx_eq_zero(&self, tol: Tolerance) -> bool;
}

impl<T: ApproxEq + ?Sized> ApproxEq for &T {
    fn approx_eq(&self, other: &Self, tol: Tolerance) -> bool {
        T::approx_eq(self, other, tol)
    }
}
impl<T: ApproxEqZero + ?Sized> ApproxEqZero for &T {
    fn approx_eq_zero(&self, tol: Tolerance) -> bool {
        T::approx_eq_zero(self, tol)
    }
}

impl ApproxEq for Float {
    fn approx_eq(&self, other: &Self, tol: Tolerance) -> bool {
        // use native float equality to handle infinities
        if self == other {
            return true;
        }
        if !(self.is_finite() && other.is_finite()) {
            return false;
        }
        let largest = Float::max(self.abs(), other.abs());
        (self - other).abs() <= tol.abs + tol.rel * largest
    }
}
impl ApproxEqZero for Float {
    fn approx_eq_zero(&self, tol: Tolerance) -> bool {
        self.approx_eq(&0.0, tol)
    }
}

impl<T: ApproxEq, const N: usize> ApproxEq for [T; N] {
    fn approx_eq(&self, other: &Self, tol: Tolerance) -> bool {
        std::iter::zip(self, other).all(|(a, b)| a.approx_eq(b, tol))
    }
}
