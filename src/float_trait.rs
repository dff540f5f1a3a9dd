use conv::{ApproxFrom, ValueFrom, ValueInto};
use ndarray::{LinalgScalar, ScalarOperand};
use num_traits::NumAssignOps;
use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::{Debug, Display};
use std::iter::Sum;

/// Floating point type accepted by profile bias models, implemented for `f32` and `f64`
pub trait Float:
    'static
    + Sized
    + num_traits::Float
    + NumAssignOps
    + LinalgScalar
    + ScalarOperand
    + Sum
    + ValueFrom<f32>
    + ValueInto<f64>
    + ApproxFrom<f64>
    + Send
    + Sync
    + Debug
    + Display
    + Default
    + Serialize
    + DeserializeOwned
    + JsonSchema
{
    fn half() -> Self;
}

impl Float for f32 {
    #[inline]
    fn half() -> Self {
        0.5
    }
}

impl Float for f64 {
    #[inline]
    fn half() -> Self {
        0.5
    }
}
