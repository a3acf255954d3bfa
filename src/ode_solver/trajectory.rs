use nalgebra::{DMatrix, DVector};

use crate::Scalar;

/// The time series of states produced by one integration run.
///
/// Stored as a dense matrix with one row per time-grid point and one column per state.
/// Row 0 is a copy of the initial state; only the integrator writes rows, consumers get
/// read-only access.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<T: Scalar> {
    y: DMatrix<T>,
}

impl<T: Scalar> Trajectory<T> {
    /// Allocate a trajectory for `ntimes` points with row 0 set to `x0`.
    pub(crate) fn new(x0: &DVector<T>, ntimes: usize) -> Self {
        debug_assert!(ntimes >= 1);
        let mut y = DMatrix::zeros(ntimes, x0.len());
        y.row_mut(0).tr_copy_from(x0);
        Self { y }
    }

    pub(crate) fn set_row(&mut self, n: usize, x: &DVector<T>) {
        debug_assert!(n > 0, "row 0 holds the initial state");
        self.y.row_mut(n).tr_copy_from(x);
    }

    /// Number of time points (rows).
    pub fn len(&self) -> usize {
        self.y.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.y.nrows() == 0
    }

    /// Number of state dimensions (columns).
    pub fn nstates(&self) -> usize {
        self.y.ncols()
    }

    /// A copy of the state at time-grid index `n`.
    pub fn row(&self, n: usize) -> DVector<T> {
        self.y.row(n).transpose()
    }

    pub fn initial_state(&self) -> DVector<T> {
        self.row(0)
    }

    pub fn final_state(&self) -> DVector<T> {
        self.row(self.len() - 1)
    }

    /// Iterate over the states in time order.
    pub fn rows(&self) -> impl Iterator<Item = DVector<T>> + '_ {
        (0..self.len()).map(|n| self.row(n))
    }

    /// The time series of state component `i`, suitable for plotting against the time grid.
    pub fn component(&self, i: usize) -> Vec<T> {
        self.y.column(i).iter().copied().collect()
    }

    pub fn as_matrix(&self) -> &DMatrix<T> {
        &self.y
    }

    pub fn into_inner(self) -> DMatrix<T> {
        self.y
    }

    /// True when both trajectories have the same shape and every entry has the same bit pattern.
    ///
    /// Stricter than `==`, which treats `0.0` and `-0.0` as equal.
    pub fn bitwise_eq(&self, other: &Self) -> bool {
        self.y.shape() == other.y.shape()
            && self
                .y
                .iter()
                .zip(other.y.iter())
                .all(|(a, b)| a.as_f64().to_bits() == b.as_f64().to_bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_copies_initial_state_into_row_zero() {
        let x0 = DVector::from_vec(vec![1.0, 2.0, 3.0]);
        let trajectory = Trajectory::new(&x0, 4);
        assert_eq!(trajectory.len(), 4);
        assert_eq!(trajectory.nstates(), 3);
        assert_eq!(trajectory.initial_state(), x0);
        assert_eq!(trajectory.row(3), DVector::zeros(3));
    }

    #[test]
    fn test_rows_and_components() {
        let x0 = DVector::from_vec(vec![0.0, 1.0]);
        let mut trajectory = Trajectory::new(&x0, 3);
        trajectory.set_row(1, &DVector::from_vec(vec![0.5, 1.5]));
        trajectory.set_row(2, &DVector::from_vec(vec![1.0, 2.0]));
        assert_eq!(trajectory.component(0), vec![0.0, 0.5, 1.0]);
        assert_eq!(trajectory.component(1), vec![1.0, 1.5, 2.0]);
        assert_eq!(trajectory.final_state().as_slice(), &[1.0, 2.0]);
        let rows: Vec<_> = trajectory.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].as_slice(), &[0.5, 1.5]);
        assert_eq!(trajectory.as_matrix()[(2, 1)], 2.0);
        assert_eq!(trajectory.into_inner().shape(), (3, 2));
    }

    #[test]
    fn test_bitwise_eq_distinguishes_signed_zero() {
        let a = Trajectory::new(&DVector::from_vec(vec![0.0]), 1);
        let b = Trajectory::new(&DVector::from_vec(vec![-0.0]), 1);
        assert_eq!(a, b);
        assert!(!a.bitwise_eq(&b));
        assert!(a.bitwise_eq(&a.clone()));
    }
}
