pub(super) use crate::anchors::Anchors;
pub(super) use crate::float_trait::Float;

use enum_dispatch::enum_dispatch;
use ndarray::{Array1, ArrayView1};
pub(super) use schemars::JsonSchema;
pub(super) use serde::{Deserialize, Serialize};
pub(super) use std::fmt::Debug;

#[enum_dispatch]
pub trait InterpolatorTrait<T: Float>: Clone + Debug + Send + Sync {
    /// Evaluate the modulating function at a single point
    fn eval(&self, x: T) -> T;

    /// Degree of the polynomial pieces
    fn degree(&self) -> usize;

    /// Abscissa values the function reproduces exactly
    fn anchors(&self) -> &Anchors<T>;

    /// Evaluate the modulating function element-wise
    fn eval_array(&self, x: ArrayView1<T>) -> Array1<T> {
        x.mapv(|x| self.eval(x))
    }
}

/// A fitted one-dimensional modulating function
#[enum_dispatch(InterpolatorTrait<T>)]
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(bound = "T: Float")]
#[non_exhaustive]
pub enum Interpolator<T: Float> {
    Spline(super::spline::SplineInterpolator<T>),
    Polynomial(super::polynomial::PolynomialInterpolator<T>),
}
