use std::time::Duration;

/// How many samples the chart keeps.
pub const SERIES_CAPACITY: usize = 60;

/// How often the network counters are sampled.
pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

/// How long the input thread waits for a terminal event before checking
/// whether it should stop.
pub const INPUT_POLL_RATE: Duration = Duration::from_millis(20);

pub const DEFAULT_TITLE: &str = " Network Monitor ";
pub const LEGEND_NAME: &str = "Bytes sent/s";

// Config and flags
pub const DEFAULT_CONFIG_FILE_LOCATION: &str = "netgraph/netgraph.toml";

/// Default text for the config file, written out if one does not exist.
pub const CONFIG_TEXT: &str = r##"# This is a default config file for netgraph. All of the settings are commented
# out by default; if you wish to change them uncomment and modify as you see
# fit.

[flags]
# Whether to use dot markers rather than braille.
#dot_marker = false
# Hides the "Bytes sent/s" legend.
#hide_legend = false
# Hides the time axis labels.
#hide_time = false
# The title shown at the top of the chart.
#title = " Network Monitor "

# Colours can be a name ("light cyan"), a hex string ("#00acee") or an RGB
# triple ("0, 172, 238").
[colors]
#tx_color = "#00acee"
#border_color = "gray"
#graph_color = "gray"
#title_color = "white"
"##;
