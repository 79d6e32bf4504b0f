//! Complete solution sets of linear systems A x = b.

use tracing::trace;

use polyrec_rings::traits::Field;

use crate::dense_matrix::{kernel_vector, DenseMatrix};

/// The full solution set of a consistent system A x = b:
/// `x = particular + sum_f t_f * kernel[f]` for free parameters `t_f`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffineSolution<R> {
    /// The solution with every free unknown set to zero.
    pub particular: Vec<R>,
    /// Unknowns that remain free, in increasing order.
    pub free: Vec<usize>,
    /// One null space vector per free unknown, in the order of `free`.
    pub kernel: Vec<Vec<R>>,
}

impl<R: Field> AffineSolution<R> {
    /// Returns true if the solution is unique.
    #[must_use]
    pub fn is_unique(&self) -> bool {
        self.free.is_empty()
    }

    /// The solution obtained by assigning `values[k]` to the k-th free
    /// unknown.
    ///
    /// # Panics
    ///
    /// Panics if `values` does not have one entry per free unknown.
    #[must_use]
    pub fn instantiate(&self, values: &[R]) -> Vec<R> {
        assert_eq!(values.len(), self.free.len(), "one value per free unknown");
        let mut x = self.particular.clone();
        for (direction, t) in self.kernel.iter().zip(values) {
            for (xi, di) in x.iter_mut().zip(direction) {
                *xi = xi.clone() + di.clone() * t.clone();
            }
        }
        x
    }
}

impl<R: Field> DenseMatrix<R> {
    /// Solves A x = b completely.
    ///
    /// Returns `None` if the system is inconsistent, i.e. the reduced
    /// augmented matrix has a row `[0 ... 0 | c]` with `c != 0`.
    ///
    /// # Panics
    ///
    /// Panics if `b.len()` differs from the number of rows.
    #[must_use]
    pub fn solve_affine(&self, b: &[R]) -> Option<AffineSolution<R>> {
        let n = self.num_cols();
        let echelon = self.augment(b).rref();

        // A pivot in the augmented column means 0 = c.
        if echelon.pivots.last() == Some(&n) {
            trace!(rank = echelon.rank(), "inconsistent linear system");
            return None;
        }

        let mut particular = vec![R::zero(); n];
        for (row, &pivot) in echelon.pivots.iter().enumerate() {
            particular[pivot] = echelon.matrix[(row, n)].clone();
        }

        let free: Vec<usize> = echelon.free_columns().into_iter().filter(|&c| c < n).collect();
        let kernel = free
            .iter()
            .map(|&f| kernel_vector(&echelon, f, n))
            .collect();

        trace!(unknowns = n, rank = echelon.rank(), free = free.len(), "solved linear system");

        Some(AffineSolution { particular, free, kernel })
    }
}
