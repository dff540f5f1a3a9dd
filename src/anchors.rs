use crate::error::AnchorsError;
use crate::float_trait::Float;

use ndarray::{Array1, ArrayView1};
use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::ops::Deref;

// Underlying array is guaranteed to be non-empty, finite, strictly increasing and contiguous
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "Vec<T>", into = "Vec<T>")]
#[serde(bound = "T: Float")]
pub struct Anchors<T>(Array1<T>);

impl<T> Anchors<T>
where
    T: Float,
{
    pub fn new(anchors: impl Into<Vec<T>>) -> Result<Self, AnchorsError> {
        let anchors = anchors.into();
        if anchors.is_empty() {
            return Err(AnchorsError::Empty);
        }
        if !anchors.iter().all(|x| x.is_finite()) {
            return Err(AnchorsError::NonFinite);
        }
        if !anchors.windows(2).all(|w| w[0] < w[1]) {
            return Err(AnchorsError::NotStrictlyIncreasing);
        }
        Ok(Self(Array1::from_vec(anchors)))
    }

    pub fn minimum(&self) -> T {
        self[0]
    }

    pub fn maximum(&self) -> T {
        self[self.len() - 1]
    }

    pub fn view(&self) -> ArrayView1<'_, T> {
        self.0.view()
    }

    /// Number of anchors less than or equal to `x`
    pub fn count_not_greater(&self, x: T) -> usize {
        self.partition_point(|&a| a <= x)
    }
}

impl<T> TryFrom<Vec<T>> for Anchors<T>
where
    T: Float,
{
    type Error = AnchorsError;

    fn try_from(v: Vec<T>) -> Result<Self, Self::Error> {
        Self::new(v)
    }
}

impl<T> TryFrom<&[T]> for Anchors<T>
where
    T: Float,
{
    type Error = AnchorsError;

    fn try_from(s: &[T]) -> Result<Self, Self::Error> {
        Self::new(s.to_vec())
    }
}

impl<T> From<Anchors<T>> for Vec<T> {
    fn from(anchors: Anchors<T>) -> Self {
        anchors.0.into_raw_vec_and_offset().0
    }
}

impl<T> Deref for Anchors<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice().unwrap()
    }
}

impl<T> AsRef<[T]> for Anchors<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> JsonSchema for Anchors<T>
where
    T: JsonSchema,
{
    fn inline_schema() -> bool {
        true
    }

    fn schema_name() -> Cow<'static, str> {
        Cow::Borrowed("Anchors")
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        <[T] as JsonSchema>::json_schema(generator)
    }
}
