pub mod integrator;
pub mod solution;
pub mod stepper;
pub mod time_grid;
pub mod trajectory;
