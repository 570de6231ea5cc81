//! Möbius (fractional linear) transformations of the extended complex plane.

use std::fmt;
use std::ops::Mul;

use crate::{ApproxEq, Complex, Float, Tolerance, UhpError, UhpResult};

/// Möbius transformation `z ↦ (az + b) / (cz + d)`.
///
/// Coefficients are stored as written, without normalization. Use
/// [`Mobius::reduce()`] to obtain the representative with determinant 1.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mobius {
    a: Complex,
    b: Complex,
    c: Complex,
    d: Complex,
}

impl Default for Mobius {
    fn default() -> Self {
        Mobius::IDENT
    }
}

impl fmt::Display for Mobius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { a, b, c, d } = self;
        write!(f, "z ↦ (({a})z + ({b})) / (({c})z + ({d}))")
    }
}

impl Mobius {
    /// Identity transformation.
    pub const IDENT: Self = Self {
        a: Complex::ONE,
        b: Complex::ZERO,
        c: Complex::ZERO,
        d: Complex::ONE,
    };
    /// Cayley transform `z ↦ (z - i) / (z + i)`, which takes the upper
    /// half-plane to the unit disk.
    pub const CAYLEY: Self = Self {
        a: Complex::ONE,
        b: Complex::NEG_I,
        c: Complex::ONE,
        d: Complex::I,
    };

    /// Constructs the transformation `z ↦ (az + b) / (cz + d)`.
    ///
    /// Returns an error if `c` and `d` are both approximately zero.
    pub fn new(a: Complex, b: Complex, c: Complex, d: Complex, tol: Tolerance) -> UhpResult<Self> {
        if [a, b, c, d].iter().any(|x| x.is_infinite()) {
            return Err(UhpError::invalid("Möbius coefficients must be finite"));
        }
        if tol.eq_zero(c) && tol.eq_zero(d) {
            return Err(UhpError::invalid(
                "Möbius transformation has zero denominator",
            ));
        }
        Ok(Self { a, b, c, d })
    }
    /// Constructs a transformation with real coefficients.
    ///
    /// Returns an error if `c` and `d` are both approximately zero or any
    /// coefficient is not finite.
    pub fn from_real(a: Float, b: Float, c: Float, d: Float, tol: Tolerance) -> UhpResult<Self> {
        let [a, b, c, d] = [a, b, c, d].map(|x| {
            if x.is_finite() {
                Ok(Complex::from(x))
            } else {
                Err(UhpError::invalid(format!(
                    "Möbius coefficients must be finite; got {x}",
                )))
            }
        });
        Self::new(a?, b?, c?, d?, tol)
    }
    /// Constructs a transformation from coefficients that are known to be
    /// valid.
    pub(crate) const fn from_coefficients_unchecked(
        a: Complex,
        b: Complex,
        c: Complex,
        d: Complex,
    ) -> Self {
        Self { a, b, c, d }
    }

    /// Returns the coefficients `[a, b, c, d]`.
    pub fn coefficients(&self) -> [Complex; 4] {
        [self.a, self.b, self.c, self.d]
    }
    /// Returns the determinant `ad - bc`.
    pub fn determinant(&self) -> Complex {
        self.a * self.d - self.b * self.c
    }
    /// Returns the trace `a + d`.
    pub fn trace(&self) -> Complex {
        self.a + self.d
    }

    /// Applies the transformation to a point of the extended complex plane.
    ///
    /// This is total: wherever the denominator is approximately zero, the
    /// result is [`Complex::INFINITY`].
    pub fn apply(&self, z: Complex, tol: Tolerance) -> Complex {
        let Self { a, b, c, d } = *self;
        if z.is_infinite() {
            // limit of (az + b) / (cz + d) as z → ∞
            return a.checked_div(c, tol).unwrap_or(Complex::INFINITY);
        }
        (a * z + b)
            .checked_div(c * z + d, tol)
            .unwrap_or(Complex::INFINITY)
    }

    /// Returns the transformation that applies `other` and then `self`.
    ///
    /// This is equivalent to `self * other`. Composing with a singular
    /// transformation may produce a singular result.
    #[must_use]
    pub fn compose(&self, other: &Mobius) -> Mobius {
        let [a, b, c, d] = self.coefficients();
        let [p, q, r, s] = other.coefficients();
        Mobius {
            a: a * p + b * r,
            b: a * q + b * s,
            c: c * p + d * r,
            d: c * q + d * s,
        }
    }
    /// Returns the inverse transformation.
    ///
    /// Returns [`UhpError::NonInvertible`] if the determinant is approximately
    /// zero.
    pub fn inverse(&self, tol: Tolerance) -> UhpResult<Mobius> {
        let det = self.determinant();
        if tol.eq_zero(det) {
            return Err(UhpError::NonInvertible);
        }
        let inv_det = det.inverse(tol)?;
        let Self { a, b, c, d } = *self;
        Ok(Mobius {
            a: d * inv_det,
            b: -b * inv_det,
            c: -c * inv_det,
            d: a * inv_det,
        })
    }
    /// Returns `by⁻¹ ∘ self ∘ by`, which is `self` as seen from the frame of
    /// reference in which `by` has been applied.
    ///
    /// Returns [`UhpError::NonInvertible`] if `by` is not invertible.
    pub fn conjugate(&self, by: &Mobius, tol: Tolerance) -> UhpResult<Mobius> {
        Ok(by.inverse(tol)?.compose(&self.compose(by)))
    }
    /// Returns the representative of the same transformation whose
    /// determinant is 1, by scaling every coefficient by `1/sqrt(ad - bc)`.
    ///
    /// If the determinant is approximately zero, returns the transformation
    /// unchanged.
    #[must_use]
    pub fn reduce(&self, tol: Tolerance) -> Mobius {
        let det = self.determinant();
        if tol.eq_zero(det) {
            log::debug!("not reducing singular transformation {self}");
            return *self;
        }
        match det.sqrt().and_then(|s| s.inverse(tol)) {
            Ok(k) => self.scale(k),
            Err(e) => {
                log::debug!("not reducing transformation {self}: {e}");
                *self
            }
        }
    }
    pub(crate) fn scale(&self, k: Complex) -> Mobius {
        let Self { a, b, c, d } = *self;
        Mobius {
            a: a * k,
            b: b * k,
            c: c * k,
            d: d * k,
        }
    }

    /// Returns whether the transformation is approximately the identity,
    /// regardless of the scale of its coefficients.
    pub fn is_ident(&self, tol: Tolerance) -> bool {
        let reduced = self.reduce(tol);
        tol.eq(reduced, Self::IDENT) || tol.eq(reduced.scale(Complex::NEG_ONE), Self::IDENT)
    }
}

impl ApproxEq for Mobius {
    /// Compares coefficients. Transformations that differ only by a scale
    /// factor are **not** considered equal; use [`Mobius::reduce()`] first to
    /// compare actions.
    fn approx_eq(&self, other: &Self, tol: Tolerance) -> bool {
        tol.eq(self.coefficients(), other.coefficients())
    }
}

impl Mul for Mobius {
    type Output = Mobius;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(&rhs)
    }
}
impl_forward_bin_ops_to_copy! {
    impl Mul for Mobius { fn mul() }
}
