use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FlagConfig {
    pub dot_marker: Option<bool>,
    pub hide_legend: Option<bool>,
    pub hide_time: Option<bool>,
    pub title: Option<String>,
}
