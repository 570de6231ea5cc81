//! Complex arithmetic, Möbius transformations, and hyperbolic geometry in the
//! Poincaré upper half-plane.
//!
//! Every comparison is made against an explicit [`Tolerance`], which is passed
//! to each operation that needs one. No value is ever mutated after
//! construction, so everything here is safe to share between threads.

pub use {approx, num_traits as num};

/// Floating-point type used for geometry.
pub type Float = f64;

/// Asserts that both arguments are approximately equal using
/// [`Tolerance::DEFAULT`].
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {{
        let (a, b) = (&$a, &$b);
        assert!(
            $crate::Tolerance::DEFAULT.eq(a, b),
            "assertion `left ≈ right` failed\n  left: {a:?}\n right: {b:?}",
        );
    }};
}

macro_rules! debug_panic {
    ($($tok:tt)*) => {
        match cfg!(debug_assertions) {
            true => panic!($($tok)*),
            false => log::error!($($tok)*),
        }
    };
}

#[macro_use]
mod impl_macros;

pub mod complex;
pub mod error;
pub mod geometry;
pub mod isometry;
pub mod mobius;
pub mod point;
pub mod tolerance;

/// Structs, traits, and constants.
pub mod prelude {
    pub use crate::complex::Complex;
    pub use crate::error::{UhpError, UhpResult};
    pub use crate::geometry::{
        Circle, Geodesic, GeodesicSegment, Horocycle, Polygon, angle_at, distance,
    };
    pub use crate::isometry::{FixedPoints, Isometry, IsometryKind};
    pub use crate::mobius::Mobius;
    pub use crate::point::{BoundaryKind, BoundaryPoint, InteriorPoint, PointKind, UhpPoint};
    pub use crate::tolerance::{ApproxEq, ApproxEqZero, Tolerance};
    pub use crate::Float;
}
pub use prelude::*;

#[cfg(test)]
mod tests;
