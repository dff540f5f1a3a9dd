use crate::error::ProfileBiasError;
use crate::interpolation::interpolator::*;
use crate::interpolation::polynomial::PolynomialInterpolator;
use crate::interpolation::spline::SplineInterpolator;

use std::fmt;
use std::str::FromStr;

/// Default requested degree of spline interpolation
pub const DEFAULT_SPLINE_DEGREE: usize = 3;

/// How the modulating function is built from its anchors and ordinates
#[derive(Clone, Copy, Debug, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum InterpolationMethod {
    /// Interpolating spline, its degree never exceeds 5 nor the number of anchors minus one
    Spline { degree: usize },
    /// The unique polynomial passing through all anchors
    Polynomial,
}

impl InterpolationMethod {
    pub fn spline(degree: usize) -> Self {
        Self::Spline { degree }
    }

    pub fn polynomial() -> Self {
        Self::Polynomial
    }

    /// Parse a method name, using `spline_degree` if it names spline interpolation
    pub fn from_name(name: &str, spline_degree: usize) -> Result<Self, ProfileBiasError> {
        match name {
            "spline" => Ok(Self::spline(spline_degree)),
            "polynomial" => Ok(Self::Polynomial),
            _ => Err(ProfileBiasError::InvalidOption(name.to_owned())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Spline { .. } => "spline",
            Self::Polynomial => "polynomial",
        }
    }

    /// Fit the modulating function of `parameter`
    pub fn fit<T>(
        &self,
        parameter: &str,
        anchors: &Anchors<T>,
        ordinates: &[T],
    ) -> Result<Interpolator<T>, ProfileBiasError>
    where
        T: Float,
    {
        if anchors.len() != ordinates.len() {
            return Err(ProfileBiasError::ShapeMismatch {
                parameter: parameter.to_owned(),
                anchors: anchors.len(),
                ordinates: ordinates.len(),
            });
        }
        if let Some(index) = ordinates.iter().position(|y| !y.is_finite()) {
            return Err(ProfileBiasError::NonFiniteOrdinate {
                parameter: parameter.to_owned(),
                index,
            });
        }
        let interpolator: Interpolator<T> = match *self {
            Self::Spline { degree } => {
                SplineInterpolator::new(anchors.clone(), ordinates.to_vec(), degree)
                    .ok_or_else(|| ProfileBiasError::SingularSystem(parameter.to_owned()))?
                    .into()
            }
            Self::Polynomial => PolynomialInterpolator::new(anchors.clone(), ordinates.to_vec())
                .ok_or_else(|| ProfileBiasError::ShapeMismatch {
                    parameter: parameter.to_owned(),
                    anchors: anchors.len(),
                    ordinates: ordinates.len(),
                })?
                .into(),
        };
        Ok(interpolator)
    }
}

impl Default for InterpolationMethod {
    fn default() -> Self {
        Self::spline(DEFAULT_SPLINE_DEGREE)
    }
}

impl FromStr for InterpolationMethod {
    type Err = ProfileBiasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s, DEFAULT_SPLINE_DEGREE)
    }
}

impl fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spline { degree } => write!(f, "spline (degree {degree})"),
            Self::Polynomial => f.write_str("polynomial"),
        }
    }
}
