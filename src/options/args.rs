// Argument parsing via clap.
//
// This file is also pulled into build.rs via `include!`, so keep it self-contained
// and without inner doc comments.

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "netgraph [OPTIONS]";

/// The arguments for netgraph.
#[derive(Parser, Debug, Default)]
#[command(
    name = crate_name!(),
    version = crate_version!(),
    about = crate_description!(),
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub struct Args {
    #[command(flatten)]
    pub general_args: GeneralArgs,

    #[command(flatten)]
    pub graph_args: GraphArgs,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "General Options", rename_all = "snake_case")]
pub struct GeneralArgs {
    #[arg(
        short = 'C',
        long,
        value_name = "PATH",
        help = "Sets the location of the config file.",
        long_help = "Sets the location of the config file. Expects a config file in the TOML format. \
                    If it doesn't exist, a default config file is created at the path."
    )]
    pub config_location: Option<String>,

    #[arg(
        long,
        help = "Disables writing a default config file.",
        long_help = "Disables writing a default config file if one does not already exist at the \
                    config location."
    )]
    pub no_write: bool,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Graph Options", rename_all = "snake_case")]
pub struct GraphArgs {
    #[arg(
        long,
        help = "Uses a dot marker for the graph.",
        long_help = "Uses a dot marker for the graph as opposed to the default braille marker."
    )]
    pub dot_marker: bool,

    #[arg(long, help = "Hides the legend of the graph.")]
    pub hide_legend: bool,

    #[arg(
        long,
        help = "Hides the time scale of the graph.",
        long_help = "Hides the time axis labels and title of the graph."
    )]
    pub hide_time: bool,

    #[arg(
        long,
        value_name = "TITLE",
        help = "Sets the title of the graph.",
        long_help = "Sets the title drawn at the top of the graph. Defaults to ' Network Monitor '."
    )]
    pub title: Option<String>,
}
