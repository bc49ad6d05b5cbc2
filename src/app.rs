pub mod presenter;
pub mod series;

pub use presenter::Presenter;
pub use series::ThroughputSeries;

/// Settings that affect how the app looks, resolved from the arguments and
/// the config file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfigFields {
    pub title: String,
    pub use_dot: bool,
    pub hide_legend: bool,
    pub hide_time: bool,
}

impl Default for AppConfigFields {
    fn default() -> Self {
        Self {
            title: crate::constants::DEFAULT_TITLE.to_string(),
            use_dot: false,
            hide_legend: false,
            hide_time: false,
        }
    }
}
