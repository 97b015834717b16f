//! Dense square matrices of runtime size with determinant and inverse.
//!
//! Sizes 1-3 use closed-form kernels; everything larger runs Gaussian
//! elimination with partial pivoting (determinant) or Gauss-Jordan
//! elimination on an augmented identity (inverse). Elimination updates go
//! through fused multiply-add, which keeps one rounding per update instead
//! of two.
//!
//! Matrices are mutable through [`SquareMatrix::set`] and the in-place
//! [`SquareMatrix::add`] / [`SquareMatrix::scale`], but every other
//! operation returns a fresh value and nothing is cached between calls.
//! Singularity is an expected outcome, not an error: [`SquareMatrix::inverse`]
//! returns `None` for a singular matrix while
//! [`SquareMatrix::determinant`] returns the numeric value 0.0.
//!
//! Entries must be finite; constructors and mutators reject NaN and
//! infinities so downstream elimination never has to reason about them.
use alloc::vec;
use alloc::vec::Vec;
use num_traits::Float;

/// A dense N x N matrix with row-major storage, N >= 1.
///
/// Equality is element-wise IEEE `==`, so it is exact and sign-of-zero
/// and NaN sensitive. No `Hash` implementation is provided: IEEE equality
/// (`-0.0 == 0.0` across distinct bit patterns) cannot satisfy the
/// `Eq`/`Hash` contract.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T> {
    /// Number of rows and columns
    n: usize,

    /// Entries, row-major, size n * n
    vals: Vec<T>,
}

impl<T: Float> SquareMatrix<T> {
    /// Build a zero matrix of the given size.
    ///
    /// # Errors
    /// * If the size is less than 1
    pub fn zeros(n: usize) -> Result<Self, &'static str> {
        if n < 1 {
            return Err("Matrix size must be at least 1");
        }
        Ok(Self {
            n,
            vals: vec![T::zero(); n * n],
        })
    }

    /// Build an identity matrix of the given size.
    ///
    /// # Errors
    /// * If the size is less than 1
    pub fn identity(n: usize) -> Result<Self, &'static str> {
        let mut out = Self::zeros(n)?;
        for i in 0..n {
            out.vals[i * n + i] = T::one();
        }
        Ok(out)
    }

    /// Build a diagonal matrix from the given diagonal entries.
    ///
    /// # Errors
    /// * If the diagonal is empty
    /// * If any entry is not finite
    pub fn from_diagonal(diag: &[T]) -> Result<Self, &'static str> {
        let n = diag.len();
        let mut out = Self::zeros(n)?;
        for (i, &v) in diag.iter().enumerate() {
            if !v.is_finite() {
                return Err("All entries must be finite");
            }
            out.vals[i * n + i] = v;
        }
        Ok(out)
    }

    /// Build a matrix from a flat row-major sequence of entries whose
    /// length is a perfect square.
    ///
    /// # Errors
    /// * If the sequence is empty
    /// * If the entry count is not a perfect square
    /// * If any entry is not finite
    pub fn from_flat(vals: &[T]) -> Result<Self, &'static str> {
        if vals.is_empty() {
            return Err("Matrix size must be at least 1");
        }
        let mut n = 1_usize;
        while n * n < vals.len() {
            n += 1;
        }
        if n * n != vals.len() {
            return Err("Entry count must be a perfect square");
        }
        if !vals.iter().all(|v| v.is_finite()) {
            return Err("All entries must be finite");
        }
        Ok(Self {
            n,
            vals: vals.to_vec(),
        })
    }

    /// Build a matrix from explicit rows.
    ///
    /// # Errors
    /// * If there are no rows
    /// * If any row length differs from the row count
    /// * If any entry is not finite
    pub fn from_rows(rows: &[&[T]]) -> Result<Self, &'static str> {
        let n = rows.len();
        if n < 1 {
            return Err("Matrix size must be at least 1");
        }
        if !rows.iter().all(|r| r.len() == n) {
            return Err("Rows must form a square grid");
        }
        let vals: Vec<T> = rows.iter().flat_map(|r| r.iter().copied()).collect();
        if !vals.iter().all(|v| v.is_finite()) {
            return Err("All entries must be finite");
        }
        Ok(Self { n, vals })
    }

    /// Number of rows and columns.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Entry at the given row and column.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.vals[row * self.n + col]
    }

    /// Overwrite the entry at the given row and column.
    ///
    /// # Errors
    /// * If the value is not finite
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), &'static str> {
        if !value.is_finite() {
            return Err("All entries must be finite");
        }
        self.vals[row * self.n + col] = value;
        Ok(())
    }

    /// Element-wise sum, returning a new matrix.
    ///
    /// # Errors
    /// * If the sizes differ
    pub fn sum(&self, other: &Self) -> Result<Self, &'static str> {
        let mut out = self.clone();
        out.add(other)?;
        Ok(out)
    }

    /// Element-wise sum in place.
    ///
    /// # Errors
    /// * If the sizes differ
    pub fn add(&mut self, other: &Self) -> Result<(), &'static str> {
        if self.n != other.n {
            return Err("Matrix sizes must match");
        }
        for i in 0..self.vals.len() {
            self.vals[i] = self.vals[i] + other.vals[i];
        }
        Ok(())
    }

    /// Matrix product `self * other`, returning a new matrix. O(n^3).
    ///
    /// # Errors
    /// * If the sizes differ
    pub fn product(&self, other: &Self) -> Result<Self, &'static str> {
        if self.n != other.n {
            return Err("Matrix sizes must match");
        }
        let n = self.n;
        let mut out = Self::zeros(n)?;
        for i in 0..n {
            for j in 0..n {
                let mut acc = T::zero();
                for k in 0..n {
                    acc = acc + self.get(i, k) * other.get(k, j);
                }
                out.vals[i * n + j] = acc;
            }
        }
        Ok(out)
    }

    /// Element-wise scalar multiple, returning a new matrix.
    ///
    /// # Errors
    /// * If the scalar is not finite
    pub fn scalar_product(&self, scalar: T) -> Result<Self, &'static str> {
        let mut out = self.clone();
        out.scale(scalar)?;
        Ok(out)
    }

    /// Element-wise scalar multiple in place.
    ///
    /// # Errors
    /// * If the scalar is not finite
    pub fn scale(&mut self, scalar: T) -> Result<(), &'static str> {
        if !scalar.is_finite() {
            return Err("Scalar must be finite");
        }
        for v in self.vals.iter_mut() {
            *v = *v * scalar;
        }
        Ok(())
    }

    /// The transpose, returning a new matrix. O(n^2).
    pub fn transpose(&self) -> Self {
        let n = self.n;
        let mut vals = vec![T::zero(); n * n];
        for i in 0..n {
            for j in 0..n {
                vals[j * n + i] = self.vals[i * n + j];
            }
        }
        Self { n, vals }
    }

    /// True iff every diagonal entry is within `epsilon` of 1 and every
    /// off-diagonal entry is within `epsilon` of 0.
    pub fn is_identity(&self, epsilon: T) -> bool {
        let n = self.n;
        for i in 0..n {
            for j in 0..n {
                let expected = if i == j { T::one() } else { T::zero() };
                if (self.vals[i * n + j] - expected).abs() > epsilon {
                    return false;
                }
            }
        }
        true
    }

    /// The determinant.
    ///
    /// Sizes 1-3 use closed-form expansion; larger sizes run Gaussian
    /// elimination with partial pivoting on a working copy. A singular
    /// matrix gives 0.0 (possibly with rounding noise), not an error.
    pub fn determinant(&self) -> T {
        match self.n {
            1 => self.vals[0],
            2 => det2(&self.vals),
            3 => det3(&self.vals),
            _ => self.determinant_elimination(),
        }
    }

    /// The inverse, or `None` if this matrix is singular.
    ///
    /// Sizes 1-3 use closed-form kernels; larger sizes run Gauss-Jordan
    /// elimination with partial pivoting against an augmented identity.
    pub fn inverse(&self) -> Option<Self> {
        match self.n {
            1 => {
                let v = self.vals[0];
                if v == T::zero() {
                    None
                } else {
                    Some(Self {
                        n: 1,
                        vals: vec![v.recip()],
                    })
                }
            }
            2 => self.inverse_2(),
            3 => self.inverse_3(),
            _ => self.inverse_elimination(),
        }
    }

    /// Gaussian elimination with partial pivoting to upper-triangular form;
    /// the determinant is the diagonal product, negated once per row swap.
    fn determinant_elimination(&self) -> T {
        let n = self.n;
        let mut m = self.vals.clone();
        let mut negate = false;

        for col in 0..n {
            // Partial pivot: the largest-magnitude candidate in this column
            let mut pivot_row = col;
            let mut pivot_mag = m[col * n + col].abs();
            for row in col + 1..n {
                let mag = m[row * n + col].abs();
                if mag > pivot_mag {
                    pivot_mag = mag;
                    pivot_row = row;
                }
            }
            if pivot_mag == T::zero() {
                return T::zero();
            }
            if pivot_row != col {
                for j in 0..n {
                    m.swap(col * n + j, pivot_row * n + j);
                }
                negate = !negate;
            }

            // Eliminate below the pivot
            let pivot = m[col * n + col];
            for row in col + 1..n {
                let factor = m[row * n + col] / pivot;
                for j in col..n {
                    m[row * n + j] = (-factor).mul_add(m[col * n + j], m[row * n + j]);
                }
            }
        }

        let det = (0..n).fold(T::one(), |acc, i| acc * m[i * n + i]);
        if negate { -det } else { det }
    }

    /// Gauss-Jordan elimination with partial pivoting against an augmented
    /// identity. Forward elimination accumulates the determinant to detect
    /// singularity, then back substitution reduces the working copy to the
    /// identity, leaving the inverse on the augmented side.
    fn inverse_elimination(&self) -> Option<Self> {
        let n = self.n;
        let mut m = self.vals.clone();
        let mut inv = vec![T::zero(); n * n];
        for i in 0..n {
            inv[i * n + i] = T::one();
        }

        let mut det = T::one();
        for col in 0..n {
            let mut pivot_row = col;
            let mut pivot_mag = m[col * n + col].abs();
            for row in col + 1..n {
                let mag = m[row * n + col].abs();
                if mag > pivot_mag {
                    pivot_mag = mag;
                    pivot_row = row;
                }
            }
            if pivot_mag == T::zero() {
                return None;
            }
            if pivot_row != col {
                for j in 0..n {
                    m.swap(col * n + j, pivot_row * n + j);
                    inv.swap(col * n + j, pivot_row * n + j);
                }
                det = -det;
            }

            let pivot = m[col * n + col];
            det = det * pivot;
            for row in col + 1..n {
                let factor = m[row * n + col] / pivot;
                for j in col..n {
                    m[row * n + j] = (-factor).mul_add(m[col * n + j], m[row * n + j]);
                }
                for j in 0..n {
                    inv[row * n + j] = (-factor).mul_add(inv[col * n + j], inv[row * n + j]);
                }
            }
        }
        if det == T::zero() {
            return None;
        }

        // Back substitution: normalize each pivot row, then clear the
        // entries above it.
        for row in 0..n {
            let scale = m[row * n + row].recip();
            for j in 0..n {
                m[row * n + j] = m[row * n + j] * scale;
                inv[row * n + j] = inv[row * n + j] * scale;
            }
            for above in 0..row {
                let factor = m[above * n + row];
                for j in 0..n {
                    m[above * n + j] = (-factor).mul_add(m[row * n + j], m[above * n + j]);
                    inv[above * n + j] = (-factor).mul_add(inv[row * n + j], inv[above * n + j]);
                }
            }
        }

        Some(Self { n, vals: inv })
    }

    fn inverse_2(&self) -> Option<Self> {
        let (a, b, c, d) = (self.vals[0], self.vals[1], self.vals[2], self.vals[3]);
        let det = det2(&self.vals);
        if det == T::zero() {
            return None;
        }
        let s = det.recip();
        Some(Self {
            n: 2,
            vals: vec![d * s, -b * s, -c * s, a * s],
        })
    }

    fn inverse_3(&self) -> Option<Self> {
        let det = det3(&self.vals);
        if det == T::zero() {
            return None;
        }
        let s = det.recip();
        let (a, b, c) = (self.vals[0], self.vals[1], self.vals[2]);
        let (d, e, f) = (self.vals[3], self.vals[4], self.vals[5]);
        let (g, h, i) = (self.vals[6], self.vals[7], self.vals[8]);
        // Transposed cofactor (adjugate) matrix over the determinant
        let vals = vec![
            (e * i - f * h) * s,
            (c * h - b * i) * s,
            (b * f - c * e) * s,
            (f * g - d * i) * s,
            (a * i - c * g) * s,
            (c * d - a * f) * s,
            (d * h - e * g) * s,
            (b * g - a * h) * s,
            (a * e - b * d) * s,
        ];
        Some(Self { n: 3, vals })
    }
}

#[inline]
fn det2<T: Float>(m: &[T]) -> T {
    m[0] * m[3] - m[1] * m[2]
}

/// Cofactor expansion along the first row.
#[inline]
fn det3<T: Float>(m: &[T]) -> T {
    let (a, b, c) = (m[0], m[1], m[2]);
    let (d, e, f) = (m[3], m[4], m[5]);
    let (g, h, i) = (m[6], m[7], m[8]);
    a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
}

#[cfg(test)]
mod test {
    use super::SquareMatrix;
    use crate::testing::*;

    fn random_matrix(n: usize, rng: &mut rand::rngs::StdRng) -> SquareMatrix<f64> {
        SquareMatrix::from_flat(&randn::<f64>(rng, n * n)).unwrap()
    }

    #[test]
    fn test_constructors() {
        let z = SquareMatrix::<f64>::zeros(3).unwrap();
        assert_eq!(z.n(), 3);
        assert!(z.vals.iter().all(|&v| v == 0.0));

        let eye = SquareMatrix::<f64>::identity(4).unwrap();
        assert!(eye.is_identity(0.0));

        let d = SquareMatrix::from_diagonal(&[1.0_f64, 2.0, 3.0]).unwrap();
        assert_eq!(d.get(1, 1), 2.0);
        assert_eq!(d.get(0, 1), 0.0);

        let m = SquareMatrix::from_flat(&[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(m.n(), 2);
        assert_eq!(m.get(1, 0), 3.0);

        let r = SquareMatrix::from_rows(&[&[1.0_f64, 2.0][..], &[3.0, 4.0][..]]).unwrap();
        assert_eq!(r, m);
    }

    #[test]
    fn test_constructors_reject_bad_inputs() {
        assert!(SquareMatrix::<f64>::zeros(0).is_err());
        assert!(SquareMatrix::<f64>::identity(0).is_err());
        assert!(SquareMatrix::<f64>::from_diagonal(&[]).is_err());
        assert!(SquareMatrix::<f64>::from_flat(&[]).is_err());
        // Five entries are not a perfect square
        assert!(SquareMatrix::from_flat(&[1.0_f64; 5]).is_err());
        // Non-finite entries
        assert!(SquareMatrix::from_flat(&[1.0_f64, f64::NAN, 0.0, 1.0]).is_err());
        assert!(SquareMatrix::from_diagonal(&[f64::INFINITY]).is_err());
        // Ragged rows
        assert!(SquareMatrix::from_rows(&[&[1.0_f64, 2.0][..], &[3.0][..]]).is_err());
    }

    #[test]
    fn test_set_rejects_non_finite() {
        let mut m = SquareMatrix::<f64>::zeros(2).unwrap();
        m.set(0, 1, 7.0).unwrap();
        assert_eq!(m.get(0, 1), 7.0);
        assert!(m.set(0, 0, f64::NAN).is_err());
        assert!(m.set(1, 1, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_sum_and_add() {
        let a = SquareMatrix::from_flat(&[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
        let b = SquareMatrix::from_flat(&[10.0_f64, 20.0, 30.0, 40.0]).unwrap();
        let s = a.sum(&b).unwrap();
        assert_eq!(s, SquareMatrix::from_flat(&[11.0, 22.0, 33.0, 44.0]).unwrap());

        let mut c = a.clone();
        c.add(&b).unwrap();
        assert_eq!(c, s);
        // The value-returning form leaves its receiver untouched
        assert_eq!(a.get(0, 0), 1.0);

        let wrong_size = SquareMatrix::<f64>::zeros(3).unwrap();
        assert!(a.sum(&wrong_size).is_err());
    }

    #[test]
    fn test_product() {
        let a = SquareMatrix::from_flat(&[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
        let b = SquareMatrix::from_flat(&[5.0_f64, 6.0, 7.0, 8.0]).unwrap();
        let p = a.product(&b).unwrap();
        assert_eq!(p, SquareMatrix::from_flat(&[19.0, 22.0, 43.0, 50.0]).unwrap());

        let eye = SquareMatrix::<f64>::identity(2).unwrap();
        assert_eq!(a.product(&eye).unwrap(), a);

        let wrong_size = SquareMatrix::<f64>::zeros(3).unwrap();
        assert!(a.product(&wrong_size).is_err());
    }

    #[test]
    fn test_scalar_product_and_scale() {
        let a = SquareMatrix::from_flat(&[1.0_f64, -2.0, 0.5, 4.0]).unwrap();
        let b = a.scalar_product(2.0).unwrap();
        assert_eq!(b, SquareMatrix::from_flat(&[2.0, -4.0, 1.0, 8.0]).unwrap());

        let mut c = a.clone();
        c.scale(2.0).unwrap();
        assert_eq!(c, b);

        assert!(a.scalar_product(f64::NAN).is_err());
    }

    #[test]
    fn test_transpose_involution() {
        let mut rng = rng_fixed_seed();
        for n in 1..=6 {
            let a = random_matrix(n, &mut rng);
            assert_eq!(a.transpose().transpose(), a);
        }

        let a = SquareMatrix::from_flat(&[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(
            a.transpose(),
            SquareMatrix::from_flat(&[1.0, 3.0, 2.0, 4.0]).unwrap()
        );
    }

    #[test]
    fn test_determinant_small_sizes() {
        let m1 = SquareMatrix::from_flat(&[-4.5_f64]).unwrap();
        assert_eq!(m1.determinant(), -4.5);

        let m2 = SquareMatrix::from_flat(&[3.0_f64, 8.0, 4.0, 6.0]).unwrap();
        assert_eq!(m2.determinant(), 3.0 * 6.0 - 8.0 * 4.0);

        let m3 = SquareMatrix::from_rows(&[
            &[17.5_f64, -12.4, 9.1][..],
            &[6.5, 3.2, -4.4][..],
            &[1.9, -8.1, 15.4][..],
        ])
        .unwrap();
        assert!((m3.determinant() - 1049.161).abs() < 1e-9);
    }

    #[test]
    fn test_determinant_elimination() {
        // Independently computed by cofactor expansion along the second row
        let m4 = SquareMatrix::from_rows(&[
            &[1.0_f64, 2.0, 0.0, 1.0][..],
            &[0.0, 1.0, 3.0, 0.0][..],
            &[2.0, 0.0, 1.0, 1.0][..],
            &[1.0, 1.0, 0.0, 2.0][..],
        ])
        .unwrap();
        assert!((m4.determinant() - 16.0).abs() < 1e-9);

        // Triangular: the determinant is the diagonal product
        let tri = SquareMatrix::from_rows(&[
            &[2.0_f64, 1.0, -1.0, 3.0][..],
            &[0.0, 3.0, 2.0, 1.0][..],
            &[0.0, 0.0, -1.0, 4.0][..],
            &[0.0, 0.0, 0.0, 5.0][..],
        ])
        .unwrap();
        assert!((tri.determinant() + 30.0).abs() < 1e-9);

        // The elimination path agrees with the closed forms: embed a 3x3
        // block alongside a unit diagonal and compare.
        let mut rng = rng_fixed_seed();
        for _ in 0..10 {
            let m3 = random_matrix(3, &mut rng);
            let mut m4 = SquareMatrix::<f64>::identity(4).unwrap();
            for r in 0..3 {
                for c in 0..3 {
                    m4.set(r, c, m3.get(r, c)).unwrap();
                }
            }
            let reference = m3.determinant();
            assert!((m4.determinant() - reference).abs() < 1e-9 * reference.abs().max(1.0));
        }
    }

    #[test]
    fn test_row_swap_negates_determinant() {
        let rows: [&[f64]; 4] = [
            &[1.0, 2.0, 0.0, 1.0],
            &[0.0, 1.0, 3.0, 0.0],
            &[2.0, 0.0, 1.0, 1.0],
            &[1.0, 1.0, 0.0, 2.0],
        ];
        let swapped: [&[f64]; 4] = [rows[2], rows[1], rows[0], rows[3]];
        let a = SquareMatrix::from_rows(&rows).unwrap();
        let b = SquareMatrix::from_rows(&swapped).unwrap();
        assert!((a.determinant() + b.determinant()).abs() < 1e-12);
    }

    #[test]
    fn test_determinant_of_singular_is_zero() {
        // Duplicate rows eliminate to an exactly-zero pivot column
        let m = SquareMatrix::from_rows(&[
            &[1.0_f64, 2.0, 3.0, 4.0][..],
            &[1.0, 2.0, 3.0, 4.0][..],
            &[5.0, 6.0, 7.0, 8.0][..],
            &[9.0, 1.0, 2.0, 3.0][..],
        ])
        .unwrap();
        assert_eq!(m.determinant(), 0.0);
    }

    #[test]
    fn test_inverse_small_sizes() {
        let m1 = SquareMatrix::from_flat(&[4.0_f64]).unwrap();
        assert_eq!(m1.inverse().unwrap().get(0, 0), 0.25);

        let m2 = SquareMatrix::from_flat(&[4.0_f64, 7.0, 2.0, 6.0]).unwrap();
        let inv2 = m2.inverse().unwrap();
        let expected = [0.6, -0.7, -0.2, 0.4];
        for i in 0..4 {
            assert!((inv2.vals[i] - expected[i]).abs() < 1e-12);
        }

        let m3 = SquareMatrix::from_rows(&[
            &[17.5_f64, -12.4, 9.1][..],
            &[6.5, 3.2, -4.4][..],
            &[1.9, -8.1, 15.4][..],
        ])
        .unwrap();
        let p = m3.product(&m3.inverse().unwrap()).unwrap();
        assert!(p.is_identity(1e-12));
    }

    /// A * A^-1 is the identity within a small epsilon for every dispatch
    /// path, closed-form and elimination alike.
    #[test]
    fn test_inverse_round_trip_1_to_10() {
        let mut rng = rng_fixed_seed();
        for n in 1..=10 {
            let a = random_matrix(n, &mut rng);
            let inv = a.inverse().unwrap();
            assert!(a.product(&inv).unwrap().is_identity(1e-8));
            assert!(inv.product(&a).unwrap().is_identity(1e-8));
        }
    }

    /// det(A) * det(A^-1) is 1 within rounding, which cross-checks the
    /// determinant and inverse paths against each other at sizes where no
    /// closed form exists.
    #[test]
    fn test_determinant_inverse_reciprocal() {
        let mut rng = rng_fixed_seed();
        for n in [2_usize, 4, 7, 10] {
            let a = random_matrix(n, &mut rng);
            let det = a.determinant();
            let det_inv = a.inverse().unwrap().determinant();
            assert!((det * det_inv - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_inverse_of_singular_is_none() {
        // Zero entry at size 1
        assert!(SquareMatrix::from_flat(&[0.0_f64]).unwrap().inverse().is_none());

        // Duplicate rows at every other size
        let mut rng = rng_fixed_seed();
        for n in 2..=10 {
            let mut m = random_matrix(n, &mut rng);
            for c in 0..n {
                m.set(1, c, m.get(0, c)).unwrap();
            }
            assert!(m.inverse().is_none());
        }
    }

    #[test]
    fn test_equality_is_exact() {
        let a = SquareMatrix::from_flat(&[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
        let b = a.clone();
        assert_eq!(a, b);

        // A single differing entry breaks equality
        let mut c = a.clone();
        c.set(1, 1, 4.0 + 1e-15).unwrap();
        assert_ne!(a, c);

        // Signed zero compares equal under IEEE semantics
        let pos = SquareMatrix::from_flat(&[0.0_f64]).unwrap();
        let neg = SquareMatrix::from_flat(&[-0.0_f64]).unwrap();
        assert_eq!(pos, neg);

        // Different sizes are never equal
        let z2 = SquareMatrix::<f64>::zeros(2).unwrap();
        let z3 = SquareMatrix::<f64>::zeros(3).unwrap();
        assert_ne!(z2, z3);
    }
}
