use crate::error::ProfileBiasError;
use crate::galaxies::GalaxyCollection;

use ndarray::ArrayView1;

/// Source of the halo profile parameters to be modulated
pub enum ProfileInput<'a, T> {
    /// One array per requested profile parameter, in the same order
    Arrays(Vec<ArrayView1<'a, T>>),
    /// Galaxy collection having a property column per requested profile parameter
    Galaxies(&'a dyn GalaxyCollection<T>),
}

impl<'a, T> ProfileInput<'a, T> {
    pub fn arrays<I, A>(arrays: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<ArrayView1<'a, T>>,
    {
        Self::Arrays(arrays.into_iter().map(Into::into).collect())
    }

    pub fn galaxies(galaxies: &'a dyn GalaxyCollection<T>) -> Self {
        Self::Galaxies(galaxies)
    }

    /// Build the input from optional parts, exactly one of them must be given
    ///
    /// An empty `arrays` vector counts as absent.
    pub fn from_parts(
        arrays: Vec<ArrayView1<'a, T>>,
        galaxies: Option<&'a dyn GalaxyCollection<T>>,
    ) -> Result<Self, ProfileBiasError> {
        match (arrays.is_empty(), galaxies) {
            (false, Some(_)) => Err(ProfileBiasError::AmbiguousInput),
            (false, None) => Ok(Self::Arrays(arrays)),
            (true, Some(galaxies)) => Ok(Self::Galaxies(galaxies)),
            (true, None) => Err(ProfileBiasError::MissingInput),
        }
    }

    /// Pair every requested parameter name with its input array
    pub(crate) fn resolve<'k>(
        &self,
        keys: &[&'k str],
    ) -> Result<Vec<(&'k str, ArrayView1<'a, T>)>, ProfileBiasError> {
        match self {
            Self::Arrays(arrays) => {
                if arrays.is_empty() {
                    return Err(ProfileBiasError::MissingInput);
                }
                if arrays.len() != keys.len() {
                    return Err(ProfileBiasError::InputCountMismatch {
                        expected: keys.len(),
                        actual: arrays.len(),
                    });
                }
                Ok(keys.iter().copied().zip(arrays.iter().cloned()).collect())
            }
            Self::Galaxies(galaxies) => {
                let galaxies: &'a dyn GalaxyCollection<T> = *galaxies;
                keys.iter()
                    .map(|&key| {
                        galaxies
                            .property(key)
                            .map(|column| (key, column))
                            .ok_or_else(|| ProfileBiasError::MissingGalaxyProperty(key.to_owned()))
                    })
                    .collect()
            }
        }
    }
}
