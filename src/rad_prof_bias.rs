use crate::anchors::Anchors;
use crate::config::RadProfBiasConfig;
use crate::error::ProfileBiasError;
use crate::float_trait::Float;
use crate::halo_profile::HaloProfileModel;
use crate::input::ProfileInput;
use crate::interpolation::{InterpolationMethod, Interpolator, InterpolatorTrait};
use crate::param_key::{ParamKey, table_keys};

use itertools::Itertools;
use log::{debug, trace};
use macro_const::macro_const;
use ndarray::{Array1, ArrayView1};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

macro_const! {
    const DOC: &str = r"
Radial profile bias of a galaxy population

Profile parameters of galaxies, e.g. the concentration of the satellite distribution, are
set to be a multiple of the corresponding profile parameter $p$ of their host halo:
$$
p_\mathrm{gal} = f(p)\,p,
$$
where the modulating function $f$ is fully determined by its values (ordinates) at a small
number of anchors. Between the anchors $f$ is either an interpolating spline or the unique
polynomial passing through all of them.

The classical NFW satellite model with a mass-independent concentration bias is the special
case of a single anchor. Ordinates are addressable by flat keys
`<parameter>_biasfunc_par<i>_<gal_type>` so an external optimizer can vary them; the
interpolators must be rebuilt after that with `rebuild_interpolators`.
";
}

#[derive(Clone, Debug, PartialEq)]
struct ModulatedParameter<T: Float> {
    anchors: Anchors<T>,
    ordinates: Vec<T>,
    interpolator: Interpolator<T>,
    stale: bool,
}

#[doc = DOC!()]
#[derive(Clone, Debug, PartialEq)]
pub struct RadProfBias<T: Float> {
    gal_type: String,
    halo_param_keys: BTreeSet<String>,
    method: InterpolationMethod,
    check_galaxy_type: bool,
    parameters: BTreeMap<String, ModulatedParameter<T>>,
}

impl<T> RadProfBias<T>
where
    T: Float,
{
    /// Validate the configuration against the halo profile model and fit all interpolators
    ///
    /// Spline anchors must be strictly increasing. Polynomial anchors may be given in any order,
    /// they are sorted together with their ordinates, so ordinate keys follow the sorted order.
    pub fn new<M>(
        config: RadProfBiasConfig<T>,
        halo_prof_model: &M,
    ) -> Result<Self, ProfileBiasError>
    where
        M: HaloProfileModel + ?Sized,
    {
        let tables = parameter_tables(&config)?;
        let method = InterpolationMethod::from_name(&config.interpol_method, config.spline_degree)?;
        Self::build(
            config.gal_type,
            halo_prof_model.param_keys(),
            tables,
            method,
            config.check_galaxy_type,
        )
    }

    /// Build from explicit `(parameter, anchors, ordinates)` tables
    pub fn from_tables<M, I, S>(
        gal_type: impl Into<String>,
        halo_prof_model: &M,
        tables: I,
        method: InterpolationMethod,
    ) -> Result<Self, ProfileBiasError>
    where
        M: HaloProfileModel + ?Sized,
        I: IntoIterator<Item = (S, Vec<T>, Vec<T>)>,
        S: Into<String>,
    {
        let mut config = RadProfBiasConfig::with_tables(gal_type);
        for (parameter, abcissa, ordinates) in tables {
            config = config.table(parameter, abcissa, ordinates);
        }
        let tables = parameter_tables(&config)?;
        Self::build(
            config.gal_type,
            halo_prof_model.param_keys(),
            tables,
            method,
            config.check_galaxy_type,
        )
    }

    fn build(
        gal_type: String,
        halo_param_keys: BTreeSet<String>,
        tables: BTreeMap<String, (Vec<T>, Vec<T>)>,
        method: InterpolationMethod,
        check_galaxy_type: bool,
    ) -> Result<Self, ProfileBiasError> {
        if gal_type.is_empty() {
            return Err(ProfileBiasError::Configuration(
                "gal_type must not be empty".to_owned(),
            ));
        }
        if let Some(parameter) = tables.keys().find(|p| !halo_param_keys.contains(*p)) {
            return Err(ProfileBiasError::UnknownParameter {
                parameter: parameter.clone(),
                known: halo_param_keys,
            });
        }

        let parameters = tables
            .into_iter()
            .map(|(parameter, (abcissa, ordinates))| {
                let (abcissa, ordinates) = match method {
                    InterpolationMethod::Polynomial => sort_by_anchors(abcissa, ordinates),
                    _ => (abcissa, ordinates),
                };
                let anchors = Anchors::new(abcissa).map_err(|source| ProfileBiasError::Anchors {
                    parameter: parameter.clone(),
                    source,
                })?;
                let interpolator = method.fit(&parameter, &anchors, &ordinates)?;
                debug!(
                    "{gal_type}: {parameter} modulated by {} interpolation of degree {}",
                    method.name(),
                    interpolator.degree()
                );
                let modulated = ModulatedParameter {
                    anchors,
                    ordinates,
                    interpolator,
                    stale: false,
                };
                Ok((parameter, modulated))
            })
            .collect::<Result<BTreeMap<_, _>, ProfileBiasError>>()?;

        debug!(
            "{gal_type}: radial profile bias of {} parameter(s) with {method} interpolation",
            parameters.len()
        );
        Ok(Self {
            gal_type,
            halo_param_keys,
            method,
            check_galaxy_type,
            parameters,
        })
    }

    pub const fn doc() -> &'static str {
        DOC
    }

    pub fn gal_type(&self) -> &str {
        &self.gal_type
    }

    pub fn method(&self) -> InterpolationMethod {
        self.method
    }

    /// Profile parameters of the halo profile model this model was built against
    pub fn halo_param_keys(&self) -> &BTreeSet<String> {
        &self.halo_param_keys
    }

    /// Names of the modulated profile parameters, sorted
    pub fn prof_param_keys(&self) -> impl Iterator<Item = &str> {
        self.parameters.keys().map(String::as_str)
    }

    pub fn is_modulated(&self, parameter: &str) -> bool {
        self.parameters.contains_key(parameter)
    }

    fn parameter(&self, parameter: &str) -> Result<&ModulatedParameter<T>, ProfileBiasError> {
        self.parameters
            .get(parameter)
            .ok_or_else(|| ProfileBiasError::UnmodulatedParameter(parameter.to_owned()))
    }

    /// Effective spline degree of the parameter's modulating function
    ///
    /// `None` for polynomial interpolation or parameters which are not modulated.
    pub fn spline_degree(&self, parameter: &str) -> Option<usize> {
        match self.parameters.get(parameter)?.interpolator {
            Interpolator::Spline(ref spline) => Some(spline.degree()),
            _ => None,
        }
    }

    pub fn interpolator(&self, parameter: &str) -> Option<&Interpolator<T>> {
        self.parameters.get(parameter).map(|p| &p.interpolator)
    }

    /// Anchors and current ordinates of the parameter's modulating function
    pub fn model_abcissa_ordinates(
        &self,
        parameter: &str,
    ) -> Result<(&[T], &[T]), ProfileBiasError> {
        let p = self.parameter(parameter)?;
        Ok((&p.anchors[..], &p.ordinates[..]))
    }

    /// Keys of all ordinates of `parameter`, ordered by their index
    pub fn ordinate_keys(&self, parameter: &str) -> Result<Vec<ParamKey>, ProfileBiasError> {
        let p = self.parameter(parameter)?;
        Ok((0..p.ordinates.len())
            .map(|i| ParamKey::new(parameter, i, self.gal_type.as_str()))
            .collect())
    }

    /// Flat keys of the anchor and ordinate tables of `parameter`
    pub fn table_keys(&self, parameter: &str) -> Result<(String, String), ProfileBiasError> {
        self.parameter(parameter)?;
        Ok(table_keys(parameter, &self.gal_type))
    }

    /// All ordinates keyed by their flat string keys
    pub fn flat_parameters(&self) -> BTreeMap<String, T> {
        self.parameters
            .iter()
            .flat_map(|(parameter, p)| {
                p.ordinates.iter().enumerate().map(move |(i, &value)| {
                    let key = ParamKey::new(parameter.as_str(), i, self.gal_type.as_str());
                    (key.to_string(), value)
                })
            })
            .collect()
    }

    fn check_key(&self, key: &ParamKey) -> Result<(), ProfileBiasError> {
        let invalid = || ProfileBiasError::InvalidParamKey(key.to_string());
        if key.gal_type != self.gal_type {
            return Err(invalid());
        }
        let p = self.parameter(&key.parameter)?;
        if key.index >= p.ordinates.len() {
            return Err(invalid());
        }
        Ok(())
    }

    /// Replace a single ordinate, the parameter must be rebuilt before next evaluation
    pub fn set_ordinate(&mut self, key: &ParamKey, value: T) -> Result<(), ProfileBiasError> {
        self.check_key(key)?;
        if let Some(p) = self.parameters.get_mut(&key.parameter) {
            p.ordinates[key.index] = value;
            p.stale = true;
        }
        Ok(())
    }

    /// Replace a single ordinate addressed by its flat key
    pub fn set_flat_parameter(&mut self, key: &str, value: T) -> Result<(), ProfileBiasError> {
        let key: ParamKey = key.parse()?;
        self.set_ordinate(&key, value)
    }

    /// Replace several ordinates addressed by flat keys
    ///
    /// Nothing is changed if any of the keys is invalid.
    pub fn update_flat_parameters<I, K>(&mut self, values: I) -> Result<(), ProfileBiasError>
    where
        I: IntoIterator<Item = (K, T)>,
        K: AsRef<str>,
    {
        let updates = values
            .into_iter()
            .map(|(key, value)| {
                let key: ParamKey = key.as_ref().parse()?;
                self.check_key(&key)?;
                Ok((key, value))
            })
            .collect::<Result<Vec<_>, ProfileBiasError>>()?;
        for (key, value) in updates {
            self.set_ordinate(&key, value)?;
        }
        Ok(())
    }

    /// Has the parameter's ordinates been changed since its interpolator was built?
    pub fn is_stale(&self, parameter: &str) -> bool {
        self.parameters.get(parameter).is_some_and(|p| p.stale)
    }

    /// Refit interpolators of all parameters whose ordinates were changed
    pub fn rebuild_interpolators(&mut self) -> Result<(), ProfileBiasError> {
        for (parameter, p) in self.parameters.iter_mut().filter(|(_, p)| p.stale) {
            p.interpolator = self.method.fit(parameter, &p.anchors, &p.ordinates)?;
            p.stale = false;
            debug!(
                "{}: {parameter} interpolator rebuilt, ordinates {:?}",
                self.gal_type, p.ordinates
            );
        }
        Ok(())
    }

    /// Value of the modulating function of `parameter` at every element of `x`
    pub fn modulation_factor(
        &self,
        parameter: &str,
        x: ArrayView1<T>,
    ) -> Result<Array1<T>, ProfileBiasError> {
        let p = self.parameter(parameter)?;
        if p.stale {
            return Err(ProfileBiasError::StaleInterpolator(parameter.to_owned()));
        }
        Ok(p.interpolator.eval_array(x))
    }

    /// Modulate halo profile parameters named by `prof_param_keys`
    ///
    /// Every input array is multiplied element-wise by the modulating function evaluated on it.
    pub fn modulated_parameters(
        &self,
        prof_param_keys: &[&str],
        input: &ProfileInput<T>,
    ) -> Result<BTreeMap<String, Array1<T>>, ProfileBiasError> {
        if let Some(&parameter) = prof_param_keys.iter().duplicates().next() {
            return Err(ProfileBiasError::DuplicateParameter(parameter.to_owned()));
        }
        if let ProfileInput::Galaxies(galaxies) = input {
            if self.check_galaxy_type && galaxies.galaxy_type() != self.gal_type {
                return Err(ProfileBiasError::GalaxyTypeMismatch {
                    expected: self.gal_type.clone(),
                    actual: galaxies.galaxy_type().to_owned(),
                });
            }
        }
        input
            .resolve(prof_param_keys)?
            .into_iter()
            .map(|(parameter, x)| {
                trace!("{}: modulating {} values of {parameter}", self.gal_type, x.len());
                let factor = self.modulation_factor(parameter, x.view())?;
                Ok((parameter.to_owned(), factor * &x))
            })
            .collect()
    }
}

/// Order (anchor, ordinate) pairs by anchor, tables of different lengths are left as is
fn sort_by_anchors<T>(abcissa: Vec<T>, ordinates: Vec<T>) -> (Vec<T>, Vec<T>)
where
    T: Float,
{
    if abcissa.len() != ordinates.len() {
        return (abcissa, ordinates);
    }
    abcissa
        .into_iter()
        .zip(ordinates)
        .sorted_by(|(a, _), (b, _)| a.partial_cmp(b).unwrap_or(Ordering::Equal))
        .unzip()
}

/// Validate mutual exclusivity of the configuration modes and collect per-parameter tables
fn parameter_tables<T>(
    config: &RadProfBiasConfig<T>,
) -> Result<BTreeMap<String, (Vec<T>, Vec<T>)>, ProfileBiasError>
where
    T: Float,
{
    let explicit = !config.abcissa.is_empty() || !config.ordinates.is_empty();
    match (config.profile_params.is_empty(), explicit) {
        (false, true) => Err(ProfileBiasError::Configuration(
            "profile_params cannot be combined with explicit abcissa and ordinates".to_owned(),
        )),
        (true, false) => Err(ProfileBiasError::Configuration(
            "either profile_params or explicit abcissa and ordinates must be given".to_owned(),
        )),
        (false, false) => Ok(config
            .profile_params
            .iter()
            .map(|parameter| {
                (
                    parameter.clone(),
                    (
                        config.defaults.profile_abcissa.clone(),
                        config.defaults.profile_ordinates.clone(),
                    ),
                )
            })
            .collect()),
        (true, true) => {
            if !config.abcissa.keys().eq(config.ordinates.keys()) {
                return Err(ProfileBiasError::Configuration(format!(
                    "abcissa and ordinates must be given for the same parameters, got {:?} and {:?}",
                    config.abcissa.keys().collect::<Vec<_>>(),
                    config.ordinates.keys().collect::<Vec<_>>(),
                )));
            }
            Ok(config
                .abcissa
                .iter()
                .zip(config.ordinates.values())
                .map(|((parameter, abcissa), ordinates)| {
                    (parameter.clone(), (abcissa.clone(), ordinates.clone()))
                })
                .collect())
        }
    }
}
