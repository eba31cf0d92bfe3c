//! Fixed-dimension vectors over decimal scalars.

use std::fmt;
use std::ops::{Add, Index, Neg, Sub};

use echelon_scalar::Scalar;
use smallvec::SmallVec;

/// An ordered tuple of decimal coordinates.
///
/// The dimension is fixed at construction and never changes; arithmetic
/// operations return new vectors. Most systems live in dimension 2 or 3,
/// so coordinates are stored inline up to dimension 4.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vector {
    coords: SmallVec<[Scalar; 4]>,
}

impl Vector {
    /// Creates a vector from its coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `coords` is empty.
    #[must_use]
    pub fn new(coords: impl IntoIterator<Item = Scalar>) -> Self {
        let coords: SmallVec<[Scalar; 4]> = coords.into_iter().collect();
        assert!(!coords.is_empty(), "a vector needs at least one coordinate");
        Self { coords }
    }

    /// Creates the zero vector of the given dimension.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is zero.
    #[must_use]
    pub fn zero(dimension: usize) -> Self {
        assert!(dimension > 0, "a vector needs at least one coordinate");
        Self {
            coords: std::iter::repeat(Scalar::ZERO).take(dimension).collect(),
        }
    }

    /// Returns the number of coordinates.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    /// Returns the coordinate at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Scalar> {
        self.coords.get(index).copied()
    }

    /// Returns the coordinates as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Scalar] {
        &self.coords
    }

    /// Returns an iterator over the coordinates.
    pub fn iter(&self) -> impl Iterator<Item = &Scalar> {
        self.coords.iter()
    }

    /// Multiplies every coordinate by `factor`.
    #[must_use]
    pub fn scale(&self, factor: Scalar) -> Self {
        Self {
            coords: self.coords.iter().map(|&c| c * factor).collect(),
        }
    }

    /// Computes the dot product.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    #[must_use]
    pub fn dot(&self, other: &Self) -> Scalar {
        assert_eq!(self.dimension(), other.dimension(), "dimension mismatch");
        self.coords
            .iter()
            .zip(other.coords.iter())
            .map(|(&a, &b)| a * b)
            .sum()
    }

    /// Computes the Euclidean magnitude.
    #[must_use]
    pub fn magnitude(&self) -> Scalar {
        self.dot(self)
            .sqrt()
            .expect("sum of squares is non-negative")
    }

    /// Returns the unit vector in this direction, or `None` for a
    /// near-zero vector.
    #[must_use]
    pub fn normalized(&self) -> Option<Self> {
        self.magnitude().recip().map(|f| self.scale(f))
    }

    /// Returns true if every coordinate is near zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coords.iter().all(|c| c.is_near_zero())
    }

    /// Returns the index of the first coordinate that is not near zero,
    /// or `None` if every coordinate is near zero.
    #[must_use]
    pub fn first_nonzero_index(&self) -> Option<usize> {
        self.coords.iter().position(|c| !c.is_near_zero())
    }

    /// Returns true if the two vectors differ by a near-zero vector.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        assert_eq!(self.dimension(), other.dimension(), "dimension mismatch");
        self.coords
            .iter()
            .zip(other.coords.iter())
            .all(|(&a, &b)| a.approx_eq(b))
    }

    /// Computes the angle to another vector, in radians.
    ///
    /// The arc cosine is transcendental, so this is the one operation
    /// computed in `f64` rather than decimal; the cosine is clamped to
    /// [-1, 1] to absorb rounding past the ends of the domain. Returns
    /// `None` when either vector is near zero.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    #[must_use]
    pub fn angle_with(&self, other: &Self) -> Option<f64> {
        let cos = self.normalized()?.dot(&other.normalized()?);
        Some(cos.to_f64()?.clamp(-1.0, 1.0).acos())
    }

    /// Returns true if the vectors point along the same line.
    ///
    /// The zero vector is parallel to everything.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    #[must_use]
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        assert_eq!(self.dimension(), other.dimension(), "dimension mismatch");
        let (Some(u), Some(v)) = (self.normalized(), other.normalized()) else {
            return true;
        };
        u.approx_eq(&v) || u.approx_eq(&-&v)
    }

    /// Returns true if the dot product is near zero.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    #[must_use]
    pub fn is_orthogonal_to(&self, other: &Self) -> bool {
        self.dot(other).is_near_zero()
    }

    /// Computes the component of `self` parallel to `basis`, or `None`
    /// for a near-zero basis.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    #[must_use]
    pub fn project_onto(&self, basis: &Self) -> Option<Self> {
        let unit = basis.normalized()?;
        let weight = self.dot(&unit);
        Some(unit.scale(weight))
    }

    /// Computes the component of `self` orthogonal to `basis`, or
    /// `None` for a near-zero basis.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    #[must_use]
    pub fn component_orthogonal_to(&self, basis: &Self) -> Option<Self> {
        let parallel = self.project_onto(basis)?;
        Some(self - &parallel)
    }

    /// Computes the cross product.
    ///
    /// Dimension-2 vectors are embedded in 3-space with a zero third
    /// coordinate, so the result is always 3-dimensional.
    ///
    /// # Panics
    ///
    /// Panics unless both vectors have dimension 2 or 3.
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        assert_eq!(self.dimension(), other.dimension(), "dimension mismatch");
        assert!(
            self.dimension() == 2 || self.dimension() == 3,
            "cross product is defined for dimensions 2 and 3"
        );

        let coord = |v: &Self, i: usize| v.get(i).unwrap_or(Scalar::ZERO);
        let (x1, y1, z1) = (coord(self, 0), coord(self, 1), coord(self, 2));
        let (x2, y2, z2) = (coord(other, 0), coord(other, 1), coord(other, 2));

        Self::new([
            y1 * z2 - z1 * y2,
            z1 * x2 - x1 * z2,
            x1 * y2 - y1 * x2,
        ])
    }

    /// Area of the parallelogram spanned by the two vectors.
    ///
    /// # Panics
    ///
    /// Panics unless both vectors have dimension 2 or 3.
    #[must_use]
    pub fn area_of_parallelogram_with(&self, other: &Self) -> Scalar {
        self.cross(other).magnitude()
    }

    /// Area of the triangle spanned by the two vectors.
    ///
    /// # Panics
    ///
    /// Panics unless both vectors have dimension 2 or 3.
    #[must_use]
    pub fn area_of_triangle_with(&self, other: &Self) -> Scalar {
        self.area_of_parallelogram_with(other) * Scalar::new(5, 1)
    }
}

impl Index<usize> for Vector {
    type Output = Scalar;

    fn index(&self, index: usize) -> &Self::Output {
        &self.coords[index]
    }
}

impl Add for &Vector {
    type Output = Vector;

    /// # Panics
    ///
    /// Panics if the dimensions differ.
    fn add(self, rhs: Self) -> Vector {
        assert_eq!(self.dimension(), rhs.dimension(), "dimension mismatch");
        Vector {
            coords: self
                .coords
                .iter()
                .zip(rhs.coords.iter())
                .map(|(&a, &b)| a + b)
                .collect(),
        }
    }
}

impl Sub for &Vector {
    type Output = Vector;

    /// # Panics
    ///
    /// Panics if the dimensions differ.
    fn sub(self, rhs: Self) -> Vector {
        assert_eq!(self.dimension(), rhs.dimension(), "dimension mismatch");
        Vector {
            coords: self
                .coords
                .iter()
                .zip(rhs.coords.iter())
                .map(|(&a, &b)| a - b)
                .collect(),
        }
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.scale(-Scalar::ONE)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(coords: &[i64]) -> Vector {
        Vector::new(coords.iter().map(|&n| Scalar::from(n)))
    }

    fn vd(coords: &[(i64, u32)]) -> Vector {
        Vector::new(coords.iter().map(|&(m, s)| Scalar::new(m, s)))
    }

    #[test]
    fn test_add_sub() {
        let a = v(&[1, 2, 3]);
        let b = v(&[4, 5, 6]);
        assert_eq!(&a + &b, v(&[5, 7, 9]));
        assert_eq!(&b - &a, v(&[3, 3, 3]));
    }

    #[test]
    fn test_scale() {
        let a = vd(&[(15, 1), (-2, 0)]); // (1.5, -2)
        assert_eq!(a.scale(Scalar::from(2)), v(&[3, -4]));
    }

    #[test]
    fn test_dot_and_magnitude() {
        let a = v(&[1, 2, 3]);
        let b = v(&[4, 5, 6]);
        assert_eq!(a.dot(&b), Scalar::from(32));
        assert_eq!(v(&[3, 4]).magnitude(), Scalar::from(5));
    }

    #[test]
    fn test_normalized() {
        let a = v(&[3, 4]);
        let unit = a.normalized().unwrap();
        assert!(unit.magnitude().approx_eq(Scalar::ONE));
        assert!(unit.approx_eq(&vd(&[(6, 1), (8, 1)]))); // (0.6, 0.8)
        assert_eq!(v(&[0, 0]).normalized(), None);
    }

    #[test]
    fn test_zero_predicates() {
        assert!(Vector::zero(3).is_zero());
        assert!(vd(&[(1, 11), (0, 0)]).is_zero()); // 1e-11 is residue
        assert!(!v(&[0, 1]).is_zero());
    }

    #[test]
    fn test_first_nonzero_index() {
        assert_eq!(v(&[0, 0, 7]).first_nonzero_index(), Some(2));
        assert_eq!(v(&[5, 0]).first_nonzero_index(), Some(0));
        assert_eq!(Vector::zero(4).first_nonzero_index(), None);
    }

    #[test]
    fn test_angle() {
        let right = v(&[1, 0]).angle_with(&v(&[0, 1])).unwrap();
        assert!((right - std::f64::consts::FRAC_PI_2).abs() < 1e-9);

        let opposite = v(&[1, 0]).angle_with(&v(&[-3, 0])).unwrap();
        assert!((opposite - std::f64::consts::PI).abs() < 1e-9);

        assert_eq!(v(&[1, 0]).angle_with(&v(&[0, 0])), None);
    }

    #[test]
    fn test_parallel_orthogonal() {
        let a = v(&[2, 4]);
        assert!(a.is_parallel_to(&v(&[1, 2])));
        assert!(a.is_parallel_to(&v(&[-1, -2])));
        assert!(!a.is_parallel_to(&v(&[1, 0])));
        assert!(a.is_parallel_to(&Vector::zero(2)));

        assert!(v(&[1, 0]).is_orthogonal_to(&v(&[0, 3])));
        assert!(Vector::zero(2).is_orthogonal_to(&a));
        assert!(!a.is_orthogonal_to(&a));
    }

    #[test]
    fn test_projection() {
        let a = v(&[3, 3]);
        let basis = v(&[4, 0]);

        let parallel = a.project_onto(&basis).unwrap();
        let orthogonal = a.component_orthogonal_to(&basis).unwrap();

        assert!(parallel.approx_eq(&v(&[3, 0])));
        assert!(orthogonal.approx_eq(&v(&[0, 3])));
        assert!((&parallel + &orthogonal).approx_eq(&a));
        assert!(orthogonal.is_orthogonal_to(&basis));

        assert_eq!(a.project_onto(&Vector::zero(2)), None);
    }

    #[test]
    fn test_cross() {
        let a = v(&[1, 0, 0]);
        let b = v(&[0, 1, 0]);
        assert_eq!(a.cross(&b), v(&[0, 0, 1]));
        assert_eq!(b.cross(&a), v(&[0, 0, -1]));

        // 2-D inputs embed with a zero third coordinate
        assert_eq!(v(&[1, 0]).cross(&v(&[0, 1])), v(&[0, 0, 1]));
    }

    #[test]
    fn test_areas() {
        let a = v(&[3, 0]);
        let b = v(&[0, 4]);
        assert_eq!(a.area_of_parallelogram_with(&b), Scalar::from(12));
        assert_eq!(a.area_of_triangle_with(&b), Scalar::from(6));
    }

    #[test]
    fn test_display() {
        assert_eq!(v(&[1, -2]).to_string(), "(1, -2)");
        assert_eq!(vd(&[(25, 1), (0, 0)]).to_string(), "(2.5, 0)");
    }

    #[test]
    #[should_panic(expected = "at least one coordinate")]
    fn test_empty_rejected() {
        let _ = Vector::new([]);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn test_mismatched_add_rejected() {
        let _ = &v(&[1, 2]) + &v(&[1, 2, 3]);
    }
}
