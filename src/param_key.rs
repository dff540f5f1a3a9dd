use crate::error::ProfileBiasError;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const BIASFUNC_INFIX: &str = "_biasfunc_par";

/// Address of a single ordinate of a modulating function
///
/// Flat optimizers see it as `<parameter>_biasfunc_par<index + 1>_<gal_type>`, which is what
/// `Display` produces and `FromStr` parses back.
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParamKey {
    pub parameter: String,
    /// Zero-based ordinal of the ordinate
    pub index: usize,
    pub gal_type: String,
}

impl ParamKey {
    pub fn new(parameter: impl Into<String>, index: usize, gal_type: impl Into<String>) -> Self {
        Self {
            parameter: parameter.into(),
            index,
            gal_type: gal_type.into(),
        }
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}_{}",
            self.parameter,
            BIASFUNC_INFIX,
            self.index + 1,
            self.gal_type
        )
    }
}

impl FromStr for ParamKey {
    type Err = ProfileBiasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ProfileBiasError::InvalidParamKey(s.to_owned());

        let (parameter, rest) = s.split_once(BIASFUNC_INFIX).ok_or_else(invalid)?;
        let (ordinal, gal_type) = rest.split_once('_').ok_or_else(invalid)?;
        if parameter.is_empty() || gal_type.is_empty() {
            return Err(invalid());
        }
        if !ordinal.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let ordinal: usize = ordinal.parse().map_err(|_| invalid())?;
        let index = ordinal.checked_sub(1).ok_or_else(invalid)?;
        Ok(Self::new(parameter, index, gal_type))
    }
}

/// Keys of the whole anchor and ordinate tables of `parameter`
///
/// Returns `(<parameter>_model_abcissa_<gal_type>, <parameter>_model_ordinates_<gal_type>)`
pub fn table_keys(parameter: &str, gal_type: &str) -> (String, String) {
    (
        format!("{parameter}_model_abcissa_{gal_type}"),
        format!("{parameter}_model_ordinates_{gal_type}"),
    )
}
