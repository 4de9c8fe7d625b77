//! Equiripple polynomial fitting.
//!
//! Fits a degree-M polynomial to a two-band step target on [0, 1] (one in
//! the passband [0, A], zero in the stopband [B, 1]) so as to minimize the
//! maximum weighted error, using the Remez exchange algorithm. The entry
//! points are [`approx::fit_minimax`] and [`approx::locate_extrema`];
//! [`approx::fit_interpolating`] provides the plain interpolation baseline.

pub mod approx;
pub mod opts;
pub mod utils;
