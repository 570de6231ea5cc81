use std::f64::consts::PI;

use itertools::Itertools;

use super::{GeodesicSegment, angle_at};
use crate::{Float, Tolerance, UhpError, UhpPoint, UhpResult};

/// Hyperbolic polygon with geodesic sides.
///
/// Vertices may be interior or boundary points. Boundary ("ideal") vertices
/// have zero interior angle and make the perimeter infinite.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<UhpPoint>,
    /// Side `i` goes from vertex `i` to vertex `i + 1`.
    sides: Vec<GeodesicSegment>,
    /// Interior angle at each vertex.
    angles: Vec<Float>,
}

impl Polygon {
    /// Constructs a polygon from its vertices in order.
    ///
    /// Returns [`UhpError::DegenerateInput`] if there are fewer than three
    /// vertices or if two consecutive vertices coincide.
    pub fn new(vertices: impl IntoIterator<Item = UhpPoint>, tol: Tolerance) -> UhpResult<Self> {
        let vertices = vertices.into_iter().collect_vec();
        let n = vertices.len();
        if n < 3 {
            return Err(UhpError::degenerate(format!(
                "polygon requires at least 3 vertices; got {n}",
            )));
        }

        let sides = vertices
            .iter()
            .circular_tuple_windows()
            .map(|(&p, &q)| GeodesicSegment::between(p, q, tol))
            .collect::<UhpResult<Vec<_>>>()?;
        let angles = (0..n)
            .map(|i| angle_at(vertices[(i + n - 1) % n], vertices[i], vertices[(i + 1) % n], tol))
            .collect::<UhpResult<Vec<_>>>()?;

        Ok(Self {
            vertices,
            sides,
            angles,
        })
    }

    /// Returns the vertices.
    pub fn vertices(&self) -> &[UhpPoint] {
        &self.vertices
    }
    /// Returns the sides. Side `i` goes from vertex `i` to vertex `i + 1`.
    pub fn sides(&self) -> &[GeodesicSegment] {
        &self.sides
    }
    /// Returns the interior angle at each vertex.
    pub fn angles(&self) -> &[Float] {
        &self.angles
    }
    /// Returns the hyperbolic area, computed using the Gauss-Bonnet formula
    /// `(n - 2)π - Σ angles`.
    pub fn area(&self) -> Float {
        (self.vertices.len() as Float - 2.0) * PI - self.angles.iter().sum::<Float>()
    }
    /// Returns the hyperbolic perimeter, which is `+∞` if any vertex is on the
    /// boundary.
    pub fn perimeter(&self) -> Float {
        self.sides.iter().map(|side| side.length()).sum()
    }
}
