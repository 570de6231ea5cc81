//! Complex numbers extended with a single point at infinity.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};
use num_traits::{One, Zero};

use crate::{ApproxEq, ApproxEqZero, Float, Tolerance, UhpError, UhpResult};

/// Complex number, or the single point at infinity of the extended complex
/// plane.
///
/// Infinity is encoded canonically as `(+∞, +∞)`. A value never has exactly
/// one infinite component, and never has a `NaN` component; arithmetic that
/// would produce either of those produces [`Complex::INFINITY`] instead.
///
/// `==` compares exactly. Use [`Tolerance::eq()`] for approximate comparison.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Complex {
    re: Float,
    im: Float,
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_infinite() {
            return write!(f, "∞");
        }
        fmt::Display::fmt(&self.re, f)?;
        write!(f, " {} ", if self.im.is_sign_negative() { '-' } else { '+' })?;
        fmt::Display::fmt(&self.im.abs(), f)?;
        write!(f, "i")
    }
}

impl Complex {
    /// Zero.
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };
    /// One.
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };
    /// The imaginary unit.
    pub const I: Self = Self { re: 0.0, im: 1.0 };
    /// Negative one.
    pub const NEG_ONE: Self = Self { re: -1.0, im: 0.0 };
    /// Negative imaginary unit.
    pub const NEG_I: Self = Self { re: 0.0, im: -1.0 };
    /// The point at infinity.
    pub const INFINITY: Self = Self {
        re: Float::INFINITY,
        im: Float::INFINITY,
    };

    /// Constructs a complex number from its real and imaginary parts.
    ///
    /// Returns an error if either component is `NaN`, if exactly one
    /// component is infinite, or if either component is negative infinity.
    /// Passing `+∞` for both components constructs [`Complex::INFINITY`].
    pub fn new(re: Float, im: Float) -> UhpResult<Self> {
        if re.is_nan() || im.is_nan() {
            return Err(UhpError::invalid(format!(
                "complex number cannot have NaN component; got ({re}, {im})",
            )));
        }
        match (re.is_finite(), im.is_finite()) {
            (true, true) => Ok(Self { re, im }),
            (false, false) if re > 0.0 && im > 0.0 => Ok(Self::INFINITY),
            _ => Err(UhpError::invalid(format!(
                "infinite complex number must be (+∞, +∞); got ({re}, {im})",
            ))),
        }
    }
    /// Constructs a complex number from components that are already known to
    /// be valid, collapsing any non-finite result to infinity.
    pub(crate) fn canonical(re: Float, im: Float) -> Self {
        if re.is_finite() && im.is_finite() {
            Self { re, im }
        } else {
            Self::INFINITY
        }
    }
    /// Constructs a complex number from its modulus and argument.
    pub fn from_polar(modulus: Float, argument: Float) -> Self {
        Self::canonical(modulus * argument.cos(), modulus * argument.sin())
    }

    /// Returns the real part, which is `+∞` for infinity.
    pub fn re(self) -> Float {
        self.re
    }
    /// Returns the imaginary part, which is `+∞` for infinity.
    pub fn im(self) -> Float {
        self.im
    }
    /// Returns whether this is the point at infinity.
    pub fn is_infinite(self) -> bool {
        self.re.is_infinite()
    }
    /// Returns whether this is a finite complex number.
    pub fn is_finite(self) -> bool {
        !self.is_infinite()
    }

    /// Returns the complex conjugate. Infinity is its own conjugate.
    #[must_use]
    pub fn conj(self) -> Self {
        if self.is_infinite() {
            return self;
        }
        Self {
            re: self.re,
            im: -self.im,
        }
    }
    /// Multiplies the number by a real scalar. Infinity scaled by anything is
    /// infinity.
    #[must_use]
    pub fn scale(self, scalar: Float) -> Self {
        if self.is_infinite() {
            return self;
        }
        Self::canonical(self.re * scalar, self.im * scalar)
    }

    /// Returns the modulus (absolute value), which is `+∞` for infinity.
    pub fn modulus(self) -> Float {
        Float::hypot(self.re, self.im)
    }
    /// Returns the argument in the range `(-π, π]`, or `None` for infinity.
    pub fn argument(self) -> Option<Float> {
        self.is_finite().then(|| Float::atan2(self.im, self.re))
    }
    /// Returns the dot product of the two numbers viewed as 2D vectors.
    pub fn dot(self, other: Self) -> Float {
        self.re * other.re + self.im * other.im
    }
    /// Returns the Euclidean distance between two numbers.
    ///
    /// The distance from infinity to itself is zero and the distance from
    /// infinity to anything else is `+∞`.
    pub fn distance(self, other: Self) -> Float {
        match (self.is_infinite(), other.is_infinite()) {
            (true, true) => 0.0,
            (false, false) => (self - other).modulus(),
            _ => Float::INFINITY,
        }
    }
    /// Returns the unsigned angle between two numbers viewed as 2D vectors,
    /// in the range `[0, π]`. Returns `None` if either is zero or infinite.
    pub fn angle_between(self, other: Self) -> Option<Float> {
        if self.is_infinite() || other.is_infinite() {
            return None;
        }
        if self == Self::ZERO || other == Self::ZERO {
            return None;
        }
        // `acos` of the cosine loses precision near 0 and π
        let cross = self.re * other.im - self.im * other.re;
        Some(Float::atan2(cross.abs(), self.dot(other)))
    }

    /// Returns the multiplicative inverse. The inverse of infinity is zero.
    ///
    /// Returns [`UhpError::DivisionByZero`] if `self` is approximately zero.
    pub fn inverse(self, tol: Tolerance) -> UhpResult<Self> {
        if self.is_infinite() {
            return Ok(Self::ZERO);
        }
        if tol.eq_zero(self) {
            return Err(UhpError::DivisionByZero);
        }
        let mag2 = self.dot(self);
        Ok(Self::canonical(self.re / mag2, -self.im / mag2))
    }
    /// Divides `self` by `rhs`.
    ///
    /// Returns [`UhpError::DivisionByZero`] if `rhs` is approximately zero, or
    /// [`UhpError::InvalidValue`] if both are infinite.
    pub fn checked_div(self, rhs: Self, tol: Tolerance) -> UhpResult<Self> {
        if tol.eq_zero(rhs) {
            return Err(UhpError::DivisionByZero);
        }
        match (self.is_infinite(), rhs.is_infinite()) {
            (true, true) => Err(UhpError::invalid("cannot divide infinity by infinity")),
            (true, false) => Ok(Self::INFINITY),
            (false, true) => Ok(Self::ZERO),
            (false, false) => {
                let mag2 = rhs.dot(rhs);
                Ok(Self::canonical(
                    (self.re * rhs.re + self.im * rhs.im) / mag2,
                    (self.im * rhs.re - self.re * rhs.im) / mag2,
                ))
            }
        }
    }

    /// Returns the principal `n`th root, which has modulus `|z|^(1/n)` and
    /// argument `arg(z) / n`. The zeroth root of anything is one.
    ///
    /// Returns an error for infinity.
    pub fn root(self, n: u32) -> UhpResult<Self> {
        let Some(argument) = self.argument() else {
            return Err(UhpError::invalid("infinity has no root"));
        };
        if n == 0 {
            return Ok(Self::ONE);
        }
        let n = n as Float;
        Ok(Self::from_polar(self.modulus().powf(1.0 / n), argument / n))
    }
    /// Returns the principal square root. Returns an error for infinity.
    pub fn sqrt(self) -> UhpResult<Self> {
        self.root(2)
    }
}

impl ApproxEq for Complex {
    fn approx_eq(&self, other: &Self, tol: Tolerance) -> bool {
        if self.is_infinite() || other.is_infinite() {
            return self.is_infinite() && other.is_infinite();
        }
        tol.eq(self.re, other.re) && tol.eq(self.im, other.im)
    }
}
impl ApproxEqZero for Complex {
    fn approx_eq_zero(&self, tol: Tolerance) -> bool {
        self.approx_eq(&Self::ZERO, tol)
    }
}

impl AbsDiffEq for Complex {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        Tolerance::DEFAULT.abs()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        if self.is_infinite() || other.is_infinite() {
            return self.is_infinite() && other.is_infinite();
        }
        self.re.abs_diff_eq(&other.re, epsilon) && self.im.abs_diff_eq(&other.im, epsilon)
    }
}
impl RelativeEq for Complex {
    fn default_max_relative() -> Self::Epsilon {
        Tolerance::DEFAULT.rel()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        if self.is_infinite() || other.is_infinite() {
            return self.is_infinite() && other.is_infinite();
        }
        self.re.relative_eq(&other.re, epsilon, max_relative)
            && self.im.relative_eq(&other.im, epsilon, max_relative)
    }
}

impl Zero for Complex {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}
impl One for Complex {
    fn one() -> Self {
        Self::ONE
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Self::Output {
        if self.is_infinite() {
            return self;
        }
        Complex {
            re: -self.re,
            im: -self.im,
        }
    }
}
impl Neg for &Complex {
    type Output = Complex;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Self) -> Self::Output {
        Complex::canonical(self.re + rhs.re, self.im + rhs.im)
    }
}
impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Self) -> Self::Output {
        if self.is_infinite() || rhs.is_infinite() {
            return Complex::INFINITY;
        }
        Complex::canonical(self.re - rhs.re, self.im - rhs.im)
    }
}
impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.is_infinite() || rhs.is_infinite() {
            return Complex::INFINITY;
        }
        Complex::canonical(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}
impl Mul<Float> for Complex {
    type Output = Complex;

    fn mul(self, rhs: Float) -> Self::Output {
        self.scale(rhs)
    }
}

impl_forward_bin_ops_to_copy! {
    impl Add for Complex { fn add() }
    impl Sub for Complex { fn sub() }
    impl Mul for Complex { fn mul() }
    impl Mul<Float> for Complex { fn mul() -> Complex }
}

impl From<Float> for Complex {
    /// Converts a real number to a complex number. Any infinite or `NaN`
    /// input becomes [`Complex::INFINITY`].
    fn from(re: Float) -> Self {
        Self::canonical(re, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    const TOL: Tolerance = Tolerance::DEFAULT;

    fn c(re: Float, im: Float) -> Complex {
        Complex::new(re, im).expect("valid complex number")
    }

    #[test]
    fn test_complex_construction() {
        assert_eq!(Complex::INFINITY, c(Float::INFINITY, Float::INFINITY));
        assert!(c(Float::INFINITY, Float::INFINITY).is_infinite());
        for (re, im) in [
            (Float::INFINITY, 0.0),
            (0.0, Float::INFINITY),
            (Float::NEG_INFINITY, Float::NEG_INFINITY),
            (Float::NAN, 1.0),
        ] {
            assert!(
                matches!(Complex::new(re, im), Err(UhpError::InvalidValue(_))),
                "({re}, {im}) should be rejected",
            );
        }
        assert_eq!(Complex::INFINITY, Complex::from(Float::INFINITY));
    }

    #[test]
    fn test_complex_arithmetic() {
        let a = c(1.0, 2.0);
        let b = c(3.0, -1.0);
        assert_eq!(c(4.0, 1.0), a + b);
        assert_eq!(c(-2.0, 3.0), a - b);
        assert_eq!(c(5.0, 5.0), a * b);
        assert_eq!(c(5.0, 5.0), &a * &b);
        assert_eq!(c(-1.0, -2.0), -a);
        assert_eq!(c(1.0, -2.0), a.conj());
        assert_eq!(c(2.5, 5.0), a * 2.5);
        assert_eq!(Complex::NEG_ONE, Complex::I * Complex::I);

        assert_eq!(Complex::INFINITY, Complex::INFINITY + a);
        assert_eq!(Complex::INFINITY, a * Complex::INFINITY);
        assert_eq!(Complex::INFINITY, -Complex::INFINITY);
    }

    #[test]
    fn test_complex_division() {
        let a = c(1.0, 2.0);
        let b = c(3.0, -1.0);
        assert_approx_eq!(a, (a * b).checked_div(b, TOL).expect("nonzero divisor"));
        assert_approx_eq!(c(0.2, -0.4), a.inverse(TOL).expect("nonzero"));
        assert_approx_eq!(Complex::NEG_I, Complex::I.inverse(TOL).expect("nonzero"));

        assert_eq!(Err(UhpError::DivisionByZero), Complex::ZERO.inverse(TOL));
        assert_eq!(Err(UhpError::DivisionByZero), c(1e-12, 0.0).inverse(TOL));
        assert_eq!(
            Err(UhpError::DivisionByZero),
            a.checked_div(c(0.0, 1e-11), TOL),
        );

        assert_eq!(Ok(Complex::ZERO), Complex::INFINITY.inverse(TOL));
        assert_eq!(Ok(Complex::ZERO), a.checked_div(Complex::INFINITY, TOL));
        assert_eq!(Ok(Complex::INFINITY), Complex::INFINITY.checked_div(a, TOL));
        assert!(
            Complex::INFINITY
                .checked_div(Complex::INFINITY, TOL)
                .is_err()
        );
    }

    #[test]
    fn test_complex_polar() {
        let z = c(-1.0, 1.0);
        assert_approx_eq!(2.0_f64.sqrt(), z.modulus());
        assert_approx_eq!(3.0 * PI / 4.0, z.argument().expect("finite"));
        assert_eq!(None, Complex::INFINITY.argument());
        assert_eq!(Float::INFINITY, Complex::INFINITY.modulus());
        assert_approx_eq!(z, Complex::from_polar(2.0_f64.sqrt(), 3.0 * PI / 4.0));
    }

    #[test]
    fn test_complex_roots() {
        assert_approx_eq!(Complex::I, Complex::NEG_ONE.sqrt().expect("finite"));
        assert_approx_eq!(c(2.0, 0.0), c(4.0, 0.0).sqrt().expect("finite"));
        assert_eq!(Ok(Complex::ONE), c(7.0, 3.0).root(0));
        assert_eq!(Ok(Complex::ZERO), Complex::ZERO.root(3));
        let cube_root = c(0.0, 8.0).root(3).expect("finite");
        assert_approx_eq!(Complex::from_polar(2.0, PI / 6.0), cube_root);
        assert_approx_eq!(c(0.0, 8.0), cube_root * cube_root * cube_root);
        assert!(Complex::INFINITY.root(2).is_err());
    }

    #[test]
    fn test_complex_distance_and_angle() {
        assert_approx_eq!(5.0, c(1.0, 1.0).distance(c(4.0, 5.0)));
        assert_eq!(0.0, Complex::INFINITY.distance(Complex::INFINITY));
        assert_eq!(Float::INFINITY, Complex::ONE.distance(Complex::INFINITY));

        assert_approx_eq!(PI / 2.0, Complex::ONE.angle_between(Complex::I).expect("nonzero"));
        assert_approx_eq!(0.0, c(2.0, 2.0).angle_between(c(1.0, 1.0)).expect("nonzero"));
        // parallel vectors whose cosine rounds above 1
        assert_approx_eq!(0.0, c(0.1, 0.3).angle_between(c(0.1, 0.3)).expect("nonzero"));
        assert_approx_eq!(PI, c(1.0, 1.0).angle_between(c(-3.0, -3.0)).expect("nonzero"));
        assert_eq!(Some(0.0), c(0.3, 0.7).angle_between(c(0.6, 1.4)));
        assert_eq!(Some(PI), c(0.1, 0.3).angle_between(c(-0.2, -0.6)));
        let tiny = c(1.0, 1e-12).angle_between(Complex::ONE).expect("nonzero");
        assert!((tiny - 1e-12).abs() < 1e-20, "{tiny}");
        assert_eq!(None, Complex::ZERO.angle_between(Complex::ONE));
    }

    #[test]
    fn test_complex_approx_eq() {
        assert!(TOL.eq(c(1.0, 1.0), c(1.0 + 1e-12, 1.0 - 1e-12)));
        assert!(TOL.ne(c(1.0, 1.0), c(1.0, 1.001)));
        assert!(TOL.eq(Complex::INFINITY, Complex::INFINITY));
        assert!(TOL.ne(Complex::INFINITY, c(1e300, 1e300)));
        assert!(TOL.eq_zero(c(1e-12, -1e-12)));
        approx::assert_relative_eq!(c(1.0, 2.0), c(1.0, 2.0 + 1e-12));
    }

    #[test]
    fn test_complex_display() {
        assert_eq!("1 + 2i", c(1.0, 2.0).to_string());
        assert_eq!("1.50 - 0.25i", format!("{:.2}", c(1.5, -0.25)));
        assert_eq!("∞", Complex::INFINITY.to_string());
    }
}
