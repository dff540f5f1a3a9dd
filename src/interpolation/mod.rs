//! One-dimensional modulating functions fitted to (anchor, ordinate) tables

pub mod interpolator;
pub use interpolator::{Interpolator, InterpolatorTrait};

mod linear_system;

pub mod method;
pub use method::{DEFAULT_SPLINE_DEGREE, InterpolationMethod};

pub mod polynomial;
pub use polynomial::PolynomialInterpolator;

pub mod spline;
pub use spline::{MAX_SPLINE_DEGREE, SplineInterpolator, effective_spline_degree};
