//! Dense row-major matrices over exact rings.

use std::ops::{Index, IndexMut};

use polyrec_rings::traits::{Field, Ring};

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMatrix<R> {
    /// Entries in row-major order.
    data: Vec<R>,
    num_rows: usize,
    num_cols: usize,
}

/// Reduced row echelon form together with its pivot structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Echelon<R> {
    /// The reduced matrix.
    pub matrix: DenseMatrix<R>,
    /// Pivot column of each non-zero row, strictly increasing.
    pub pivots: Vec<usize>,
}

impl<R> Echelon<R> {
    /// The rank of the reduced matrix.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }

    /// Columns without a pivot, in increasing order.
    #[must_use]
    pub fn free_columns(&self) -> Vec<usize> {
        let mut pivots = self.pivots.iter().peekable();
        (0..self.matrix.num_cols)
            .filter(|col| {
                if pivots.peek() == Some(&col) {
                    pivots.next();
                    false
                } else {
                    true
                }
            })
            .collect()
    }
}

impl<R: Ring> DenseMatrix<R> {
    /// Creates a matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![R::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from its rows.
    ///
    /// # Panics
    ///
    /// Panics if the rows have different lengths.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<R>>) -> Self {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|row| row.len() == num_cols),
            "all rows must have the same length"
        );
        Self {
            data: rows.into_iter().flatten().collect(),
            num_rows,
            num_cols,
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// The entry at (row, col), or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&R> {
        (row < self.num_rows && col < self.num_cols).then(|| &self.data[row * self.num_cols + col])
    }

    /// A row as a slice.
    #[must_use]
    pub fn row(&self, row: usize) -> &[R] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// A column as a vector.
    #[must_use]
    pub fn col(&self, col: usize) -> Vec<R> {
        (0..self.num_rows).map(|row| self[(row, col)].clone()).collect()
    }

    /// Matrix-vector product A * x.
    ///
    /// # Panics
    ///
    /// Panics if `x.len()` differs from the number of columns.
    #[must_use]
    pub fn mv(&self, x: &[R]) -> Vec<R> {
        assert_eq!(x.len(), self.num_cols);
        (0..self.num_rows)
            .map(|row| {
                self.row(row)
                    .iter()
                    .zip(x)
                    .fold(R::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
            })
            .collect()
    }

    /// Appends `column` on the right, producing the augmented matrix [A | b].
    ///
    /// # Panics
    ///
    /// Panics if `column.len()` differs from the number of rows.
    #[must_use]
    pub fn augment(&self, column: &[R]) -> Self {
        assert_eq!(column.len(), self.num_rows);
        let rows = (0..self.num_rows)
            .map(|row| {
                let mut entries = self.row(row).to_vec();
                entries.push(column[row].clone());
                entries
            })
            .collect();
        let mut augmented = Self::from_rows(rows);
        augmented.num_cols = self.num_cols + 1;
        augmented
    }

    /// Swaps two rows in place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        for k in 0..self.num_cols {
            self.data.swap(i * self.num_cols + k, j * self.num_cols + k);
        }
    }

    /// row[target] += scale * row[source].
    pub fn add_scaled_row(&mut self, target: usize, source: usize, scale: &R) {
        for k in 0..self.num_cols {
            let val = self[(source, k)].clone() * scale.clone();
            self[(target, k)] = self[(target, k)].clone() + val;
        }
    }

    /// Scales a row by a scalar.
    pub fn scale_row(&mut self, row: usize, scale: &R) {
        for k in 0..self.num_cols {
            self[(row, k)] = self[(row, k)].clone() * scale.clone();
        }
    }
}

impl<R: Field> DenseMatrix<R> {
    /// Reduced row echelon form by Gauss-Jordan elimination.
    ///
    /// Pivots are normalized to one and cleared above and below, so each
    /// pivot column is a unit vector. The search for a pivot only ever
    /// needs a non-zero entry since arithmetic is exact.
    #[must_use]
    pub fn rref(&self) -> Echelon<R> {
        let mut m = self.clone();
        let mut pivots = Vec::new();

        for col in 0..m.num_cols {
            let pivot_row = pivots.len();
            if pivot_row == m.num_rows {
                break;
            }

            let Some(found) = (pivot_row..m.num_rows).find(|&row| !m[(row, col)].is_zero()) else {
                continue;
            };
            m.swap_rows(pivot_row, found);

            if let Some(inv) = m[(pivot_row, col)].inv() {
                m.scale_row(pivot_row, &inv);
            }

            for row in 0..m.num_rows {
                if row != pivot_row && !m[(row, col)].is_zero() {
                    let factor = -m[(row, col)].clone();
                    m.add_scaled_row(row, pivot_row, &factor);
                }
            }

            pivots.push(col);
        }

        Echelon { matrix: m, pivots }
    }

    /// The rank of the matrix.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.rref().rank()
    }

    /// A basis of the null space, one vector per free column.
    ///
    /// The basis vector for free column `f` has a one at `f`, zero at the
    /// other free columns, and is determined at the pivot columns.
    #[must_use]
    pub fn null_space(&self) -> Vec<Vec<R>> {
        let echelon = self.rref();
        echelon
            .free_columns()
            .into_iter()
            .map(|free| kernel_vector(&echelon, free, self.num_cols))
            .collect()
    }
}

/// The null space vector of an echelon form attached to one free column.
pub(crate) fn kernel_vector<R: Field>(echelon: &Echelon<R>, free: usize, num_unknowns: usize) -> Vec<R> {
    let mut v = vec![R::zero(); num_unknowns];
    v[free] = R::one();
    for (row, &pivot) in echelon.pivots.iter().enumerate() {
        v[pivot] = -echelon.matrix[(row, free)].clone();
    }
    v
}

impl<R> Index<(usize, usize)> for DenseMatrix<R> {
    type Output = R;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl<R> IndexMut<(usize, usize)> for DenseMatrix<R> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}
