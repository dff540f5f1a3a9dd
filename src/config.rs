use crate::float_trait::Float;
use crate::interpolation::DEFAULT_SPLINE_DEGREE;

use conv::ConvUtil;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Anchors and ordinates used for every parameter given by name only
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(bound = "T: Float")]
pub struct DefaultProfileTemplate<T: Float> {
    pub profile_abcissa: Vec<T>,
    pub profile_ordinates: Vec<T>,
}

impl<T> Default for DefaultProfileTemplate<T>
where
    T: Float,
{
    fn default() -> Self {
        Self {
            profile_abcissa: vec![
                12.0_f32.value_as::<T>().unwrap(),
                15.0_f32.value_as::<T>().unwrap(),
            ],
            profile_ordinates: vec![T::half(), T::one()],
        }
    }
}

/// Configuration of [crate::RadProfBias]
///
/// Either `profile_params` or both `abcissa` and `ordinates` must be given. Parameters listed
/// in `profile_params` are modulated by the functions defined by `defaults`, otherwise
/// `abcissa` and `ordinates` map every modulated parameter to its own table.
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(bound = "T: Float", default)]
pub struct RadProfBiasConfig<T: Float> {
    pub gal_type: String,
    pub profile_params: Vec<String>,
    pub abcissa: BTreeMap<String, Vec<T>>,
    pub ordinates: BTreeMap<String, Vec<T>>,
    /// `spline` or `polynomial`
    pub interpol_method: String,
    /// Requested spline degree, ignored by polynomial interpolation
    pub spline_degree: usize,
    pub defaults: DefaultProfileTemplate<T>,
    /// Reject galaxy collections of a different galaxy type
    pub check_galaxy_type: bool,
}

impl<T> Default for RadProfBiasConfig<T>
where
    T: Float,
{
    fn default() -> Self {
        Self {
            gal_type: String::new(),
            profile_params: vec![],
            abcissa: BTreeMap::new(),
            ordinates: BTreeMap::new(),
            interpol_method: "spline".to_owned(),
            spline_degree: DEFAULT_SPLINE_DEGREE,
            defaults: DefaultProfileTemplate::default(),
            check_galaxy_type: true,
        }
    }
}

impl<T> RadProfBiasConfig<T>
where
    T: Float,
{
    /// Modulate `profile_params` with the default template
    pub fn with_profile_params<I, S>(gal_type: impl Into<String>, profile_params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            gal_type: gal_type.into(),
            profile_params: profile_params.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Start an explicitly tabulated configuration, add tables with [Self::table]
    pub fn with_tables(gal_type: impl Into<String>) -> Self {
        Self {
            gal_type: gal_type.into(),
            ..Self::default()
        }
    }

    pub fn table(
        mut self,
        parameter: impl Into<String>,
        abcissa: impl Into<Vec<T>>,
        ordinates: impl Into<Vec<T>>,
    ) -> Self {
        let parameter = parameter.into();
        self.abcissa.insert(parameter.clone(), abcissa.into());
        self.ordinates.insert(parameter, ordinates.into());
        self
    }

    pub fn interpol_method(mut self, method: impl Into<String>) -> Self {
        self.interpol_method = method.into();
        self
    }

    pub fn spline_degree(mut self, degree: usize) -> Self {
        self.spline_degree = degree;
        self
    }

    pub fn defaults(mut self, defaults: DefaultProfileTemplate<T>) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn check_galaxy_type(mut self, check: bool) -> Self {
        self.check_galaxy_type = check;
        self
    }
}
