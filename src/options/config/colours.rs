use serde::Deserialize;

/// Colour overrides. Values are parsed when the app starts, so a bad colour is
/// reported before anything is drawn.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ColourConfig {
    pub tx_color: Option<String>,
    pub border_color: Option<String>,
    pub graph_color: Option<String>,
    pub title_color: Option<String>,
}
