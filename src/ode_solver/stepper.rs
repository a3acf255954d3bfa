use nalgebra::DVector;

use crate::Scalar;

/// One explicit Euler update `x_next = x + dxdt * dt`, returned as a new vector.
///
/// `dt` may be negative (backward marching) or zero (identity step).
pub fn euler_step<T: Scalar>(x: &DVector<T>, dxdt: &DVector<T>, dt: T) -> DVector<T> {
    let mut x_next = x.clone();
    euler_step_inplace(&mut x_next, dxdt, dt);
    x_next
}

/// One explicit Euler update that overwrites `x` with `x + dxdt * dt`.
///
/// Produces bit-identical results to [euler_step] without allocating.
#[inline]
pub fn euler_step_inplace<T: Scalar>(x: &mut DVector<T>, dxdt: &DVector<T>, dt: T) {
    debug_assert_eq!(x.len(), dxdt.len(), "state and derivative lengths differ");
    x.axpy(dt, dxdt, T::one());
}
