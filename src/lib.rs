#![doc = include_str!("../README.md")]


mod anchors;
pub use anchors::Anchors;

mod config;
pub use config::{DefaultProfileTemplate, RadProfBiasConfig};

mod error;
pub use error::{AnchorsError, ProfileBiasError};

mod float_trait;
pub use float_trait::Float;

mod galaxies;
pub use galaxies::{GalaxyCollection, MockGalaxies};

mod halo_profile;
pub use halo_profile::{HaloProfileModel, HaloProfileVocabulary};

mod input;
pub use input::ProfileInput;

pub mod interpolation;
pub use interpolation::{
    DEFAULT_SPLINE_DEGREE, InterpolationMethod, Interpolator, InterpolatorTrait,
    MAX_SPLINE_DEGREE, PolynomialInterpolator, SplineInterpolator, effective_spline_degree,
};

mod param_key;
pub use param_key::{ParamKey, table_keys};

pub mod prelude;

mod rad_prof_bias;
pub use rad_prof_bias::RadProfBias;

pub use ndarray;
