//! Fixed-size square matrices for Jacobian chains.
//!
//! Error propagation from catalog astrometry into derived quantities works with
//! small dense matrices: a transformation is split into stages, each stage is a
//! matrix of partial derivatives, and the stages compose by multiplication.
//!
//! # Composing Stages
//!
//! Matrices compose right to left. If stage A is applied to the input first and
//! stage B second, the combined Jacobian is `B * A`.
//!
//! ```
//! use celestial_core::Matrix4;
//!
//! let mut scale = Matrix4::identity();
//! scale[(0, 0)] = 2.0;
//!
//! let mut shear = Matrix4::identity();
//! shear[(1, 0)] = 0.5;
//!
//! // scale acts first, then shear
//! let combined = shear * scale;
//! assert_eq!(combined[(1, 0)], 1.0);
//! ```
//!
//! # Storage Layout
//!
//! Elements are stored row-major as `[[f64; N]; N]`. The element at row `i`,
//! column `j` is `matrix[(i, j)]` or `matrix.get(i, j)`.

use std::fmt;

/// An `N x N` matrix of `f64` with row-major storage.
///
/// Construction starts from [`zeros`](Self::zeros) or
/// [`identity`](Self::identity); entries that are never written stay exactly
/// zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareMatrix<const N: usize> {
    elements: [[f64; N]; N],
}

/// 4x4 matrix.
pub type Matrix4 = SquareMatrix<4>;

/// 6x6 matrix.
pub type Matrix6 = SquareMatrix<6>;

impl<const N: usize> SquareMatrix<N> {
    /// Matrix dimension.
    pub const DIM: usize = N;

    /// The all-zero matrix.
    pub fn zeros() -> Self {
        Self {
            elements: [[0.0; N]; N],
        }
    }

    /// The identity matrix.
    ///
    /// ```
    /// use celestial_core::Matrix6;
    ///
    /// let m = Matrix6::identity();
    /// assert_eq!(m[(3, 3)], 1.0);
    /// assert_eq!(m[(3, 4)], 0.0);
    /// ```
    pub fn identity() -> Self {
        Self::from_diagonal([1.0; N])
    }

    /// A diagonal matrix with the given diagonal entries.
    pub fn from_diagonal(diagonal: [f64; N]) -> Self {
        let mut m = Self::zeros();
        for (i, value) in diagonal.into_iter().enumerate() {
            m.elements[i][i] = value;
        }
        m
    }

    /// Creates a matrix from a row-major array: `elements[i][j]` is row `i`, column `j`.
    pub fn from_array(elements: [[f64; N]; N]) -> Self {
        Self { elements }
    }

    /// Returns the element at `row`, `col`. Panics if either index is `>= N`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    /// Sets the element at `row`, `col`. Panics if either index is `>= N`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.elements[row][col] = value;
    }

    pub fn elements(&self) -> &[[f64; N]; N] {
        &self.elements
    }

    pub fn into_array(self) -> [[f64; N]; N] {
        self.elements
    }

    pub fn row(&self, row: usize) -> [f64; N] {
        self.elements[row]
    }

    pub fn column(&self, col: usize) -> [f64; N] {
        let mut out = [0.0; N];
        for (i, cell) in out.iter_mut().enumerate() {
            *cell = self.elements[i][col];
        }
        out
    }

    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[0.0; N]; N];

        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..N {
                    *cell += self.elements[i][k] * other.elements[k][j];
                }
            }
        }

        Self::from_array(result)
    }

    pub fn apply_to_vector(&self, vector: [f64; N]) -> [f64; N] {
        let mut out = [0.0; N];
        for (i, cell) in out.iter_mut().enumerate() {
            for (k, v) in vector.iter().enumerate() {
                *cell += self.elements[i][k] * v;
            }
        }
        out
    }

    pub fn transpose(&self) -> Self {
        let mut result = [[0.0; N]; N];
        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.elements[j][i];
            }
        }
        Self::from_array(result)
    }

    /// Largest absolute element-wise difference between two matrices.
    pub fn max_difference(&self, other: &Self) -> f64 {
        let mut max_diff: f64 = 0.0;

        for i in 0..N {
            for j in 0..N {
                let diff = (self.elements[i][j] - other.elements[i][j]).abs();
                max_diff = max_diff.max(diff);
            }
        }

        max_diff
    }

    /// `true` when every element is finite (no NaN or infinity).
    pub fn is_finite(&self) -> bool {
        self.elements.iter().flatten().all(|v| v.is_finite())
    }
}

impl<const N: usize> Default for SquareMatrix<N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const N: usize> From<[[f64; N]; N]> for SquareMatrix<N> {
    fn from(elements: [[f64; N]; N]) -> Self {
        Self::from_array(elements)
    }
}

impl<const N: usize> std::ops::Mul for SquareMatrix<N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<const N: usize> std::ops::Mul<&SquareMatrix<N>> for SquareMatrix<N> {
    type Output = SquareMatrix<N>;

    fn mul(self, rhs: &SquareMatrix<N>) -> SquareMatrix<N> {
        self.multiply(rhs)
    }
}

impl<const N: usize> std::ops::Mul<SquareMatrix<N>> for &SquareMatrix<N> {
    type Output = SquareMatrix<N>;

    fn mul(self, rhs: SquareMatrix<N>) -> SquareMatrix<N> {
        self.multiply(&rhs)
    }
}

impl<const N: usize> std::ops::Mul<&SquareMatrix<N>> for &SquareMatrix<N> {
    type Output = SquareMatrix<N>;

    fn mul(self, rhs: &SquareMatrix<N>) -> SquareMatrix<N> {
        self.multiply(rhs)
    }
}

impl<const N: usize> std::ops::Index<(usize, usize)> for SquareMatrix<N> {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.elements[row][col]
    }
}

impl<const N: usize> std::ops::IndexMut<(usize, usize)> for SquareMatrix<N> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.elements[row][col]
    }
}

impl<const N: usize> fmt::Display for SquareMatrix<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SquareMatrix<{}>:", N)?;
        for row in &self.elements {
            write!(f, "  [")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:14.6e}", value)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

// serde has no impls for `[T; N]` with a generic `N`; rows go through `Vec`.
#[cfg(feature = "serde")]
impl<const N: usize> serde::Serialize for SquareMatrix<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rows: Vec<Vec<f64>> = self.elements.iter().map(|r| r.to_vec()).collect();
        rows.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, const N: usize> serde::Deserialize<'de> for SquareMatrix<N> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let rows: Vec<Vec<f64>> = Vec::deserialize(deserializer)?;
        if rows.len() != N {
            return Err(D::Error::invalid_length(rows.len(), &"N rows"));
        }
        let mut m = Self::zeros();
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != N {
                return Err(D::Error::invalid_length(row.len(), &"N columns"));
            }
            for (j, value) in row.into_iter().enumerate() {
                m.elements[i][j] = value;
            }
        }
        Ok(m)
    }
}
