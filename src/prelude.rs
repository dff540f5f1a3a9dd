pub use crate::float_trait::Float;
pub use crate::galaxies::GalaxyCollection;
pub use crate::halo_profile::HaloProfileModel;
pub use crate::interpolation::InterpolatorTrait;
