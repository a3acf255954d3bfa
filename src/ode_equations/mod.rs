//! Concrete ODE systems used to exercise and benchmark the integrator.
//!
//! Each model provides its derivative as an [OdeSystem](crate::OdeSystem) implementation, and
//! where it makes sense also as a free function usable as a [DerivativeFn](crate::DerivativeFn),
//! together with a `*_problem` constructor returning the initial state, time grid and exact
//! reference solution.

pub mod test_models;
