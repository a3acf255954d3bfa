pub mod exponential_decay;
pub mod harmonic_oscillator;
