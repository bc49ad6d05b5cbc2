pub mod colours;
pub mod flags;

use serde::Deserialize;

pub use self::{colours::ColourConfig, flags::FlagConfig};

/// The overall config file.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub flags: Option<FlagConfig>,
    pub colors: Option<ColourConfig>,
}
