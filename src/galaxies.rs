use crate::error::ProfileBiasError;
use crate::float_trait::Float;

use ndarray::{Array1, ArrayView1};
use std::collections::BTreeMap;

/// Collection of galaxies of a single type with per-galaxy property columns
pub trait GalaxyCollection<T> {
    /// Galaxy type tag, e.g. `satellites`
    fn galaxy_type(&self) -> &str;

    /// Number of galaxies
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Property column of length [GalaxyCollection::len]
    ///
    /// `None` if the collection has no such property.
    fn property(&self, name: &str) -> Option<ArrayView1<'_, T>>;
}

/// In-memory galaxy collection storing properties as named columns
#[derive(Clone, Debug, PartialEq)]
pub struct MockGalaxies<T> {
    gal_type: String,
    len: usize,
    properties: BTreeMap<String, Array1<T>>,
}

impl<T> MockGalaxies<T>
where
    T: Float,
{
    pub fn new(gal_type: impl Into<String>, len: usize) -> Self {
        Self {
            gal_type: gal_type.into(),
            len,
            properties: BTreeMap::new(),
        }
    }

    /// Add or replace a property column, its length must be equal to the collection length
    pub fn insert_property(
        &mut self,
        name: impl Into<String>,
        values: impl Into<Array1<T>>,
    ) -> Result<(), ProfileBiasError> {
        let name = name.into();
        let values = values.into();
        if values.len() != self.len {
            return Err(ProfileBiasError::PropertyLengthMismatch {
                property: name,
                expected: self.len,
                actual: values.len(),
            });
        }
        self.properties.insert(name, values);
        Ok(())
    }

    pub fn with_property(
        mut self,
        name: impl Into<String>,
        values: impl Into<Array1<T>>,
    ) -> Result<Self, ProfileBiasError> {
        self.insert_property(name, values)?;
        Ok(self)
    }

    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }
}

impl<T> GalaxyCollection<T> for MockGalaxies<T>
where
    T: Float,
{
    fn galaxy_type(&self) -> &str {
        &self.gal_type
    }

    fn len(&self) -> usize {
        self.len
    }

    fn property(&self, name: &str) -> Option<ArrayView1<'_, T>> {
        self.properties.get(name).map(Array1::view)
    }
}
