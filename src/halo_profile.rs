use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Halo profile model whose parameters a profile bias model may modulate
pub trait HaloProfileModel {
    /// Names of the profile parameters, e.g. `conc` for NFW profiles
    fn param_keys(&self) -> BTreeSet<String>;
}

/// Halo profile model known only by its parameter names
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HaloProfileVocabulary {
    param_keys: BTreeSet<String>,
}

impl HaloProfileVocabulary {
    pub fn new<I, S>(param_keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            param_keys: param_keys.into_iter().map(Into::into).collect(),
        }
    }

    /// NFW profile is described by its concentration only
    pub fn nfw() -> Self {
        Self::new(["conc"])
    }
}

impl HaloProfileModel for HaloProfileVocabulary {
    fn param_keys(&self) -> BTreeSet<String> {
        self.param_keys.clone()
    }
}

impl<M> HaloProfileModel for &M
where
    M: HaloProfileModel + ?Sized,
{
    fn param_keys(&self) -> BTreeSet<String> {
        (**self).param_keys()
    }
}
