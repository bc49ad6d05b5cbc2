//! How netgraph handles arguments and config files. The general process is:
//!
//! 1. Parse the arguments.
//! 2. Find (or create) and parse the config file.
//! 3. Merge the two; arguments win over the config file.

pub mod args;
pub mod config;
pub mod error;

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use clap::Parser;

use self::{
    args::Args,
    config::{Config, FlagConfig},
    error::{OptionError, OptionResult},
};
use crate::{
    app::AppConfigFields,
    canvas::styling::CanvasStyles,
    constants::{CONFIG_TEXT, DEFAULT_CONFIG_FILE_LOCATION, DEFAULT_TITLE},
};

/// Returns the parsed command-line arguments.
pub fn get_args() -> Args {
    Args::parse()
}

/// Returns the config path to use. If `override_config_path` is given, then
/// we use that; otherwise, the default location for the platform.
pub fn get_config_path(override_config_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(conf_loc) = override_config_path {
        return Some(conf_loc.to_path_buf());
    }

    dirs::config_dir().map(|path| path.join(DEFAULT_CONFIG_FILE_LOCATION))
}

/// Get the config at `config_path`. If there is no config file at the
/// location, one is created with the default settings unless `no_write` is
/// set.
pub fn get_or_create_config(config_path: Option<&Path>, no_write: bool) -> OptionResult<Config> {
    let adjusted_config_path = get_config_path(config_path);

    match &adjusted_config_path {
        Some(path) => {
            if let Ok(config_string) = fs::read_to_string(path) {
                log::debug!("Reading config from {}.", path.display());
                Ok(toml_edit::de::from_str(&config_string)?)
            } else {
                if !no_write {
                    log::info!("Writing a default config to {}.", path.display());
                    if let Some(parent_path) = path.parent() {
                        fs::create_dir_all(parent_path)?;
                    }

                    fs::File::create(path)?.write_all(CONFIG_TEXT.as_bytes())?;
                }

                Ok(Config::default())
            }
        }
        None => {
            // No config path was found, so just use the defaults.
            Ok(Config::default())
        }
    }
}

#[inline]
fn is_flag_enabled(arg: bool, config_flag: Option<bool>) -> bool {
    arg || config_flag.unwrap_or(false)
}

/// Resolves the title, which must fit on a single line.
fn get_title(args: &Args, flags: &FlagConfig) -> OptionResult<String> {
    let is_multiline = |title: &str| title.contains(['\n', '\r']);

    if let Some(title) = &args.graph_args.title {
        if is_multiline(title) {
            return Err(OptionError::arg("'--title' must be a single line."));
        }

        Ok(title.clone())
    } else if let Some(title) = &flags.title {
        if is_multiline(title) {
            return Err(OptionError::config("'title' must be a single line."));
        }

        Ok(title.clone())
    } else {
        Ok(DEFAULT_TITLE.to_string())
    }
}

/// Builds the app settings and the drawing styles from the arguments and
/// config file.
pub fn init_app(args: &Args, config: &Config) -> OptionResult<(AppConfigFields, CanvasStyles)> {
    let default_flags = FlagConfig::default();
    let flags = config.flags.as_ref().unwrap_or(&default_flags);
    let graph_args = &args.graph_args;

    let app_config_fields = AppConfigFields {
        title: get_title(args, flags)?,
        use_dot: is_flag_enabled(graph_args.dot_marker, flags.dot_marker),
        hide_legend: is_flag_enabled(graph_args.hide_legend, flags.hide_legend),
        hide_time: is_flag_enabled(graph_args.hide_time, flags.hide_time),
    };
    let styles = CanvasStyles::new(config.colors.as_ref())?;

    Ok((app_config_fields, styles))
}

#[cfg(test)]
mod test {
    use tui::style::{Color, Style};

    use super::*;
    use crate::options::config::ColourConfig;

    fn args(cli: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("netgraph").chain(cli.iter().copied())).unwrap()
    }

    fn config(text: &str) -> Config {
        toml_edit::de::from_str(text).unwrap()
    }

    #[test]
    fn defaults_without_config() {
        let (fields, styles) = init_app(&args(&[]), &Config::default()).unwrap();

        assert_eq!(fields, AppConfigFields::default());
        assert_eq!(styles, CanvasStyles::default());
    }

    #[test]
    fn config_flags_apply() {
        let config = config(
            r#"
            [flags]
            dot_marker = true
            hide_legend = true
            title = "Uplink"
            "#,
        );
        let (fields, _) = init_app(&args(&[]), &config).unwrap();

        assert!(fields.use_dot);
        assert!(fields.hide_legend);
        assert!(!fields.hide_time);
        assert_eq!(fields.title, "Uplink");
    }

    #[test]
    fn args_override_config() {
        let config = config(
            r#"
            [flags]
            hide_time = false
            title = "From config"
            "#,
        );
        let (fields, _) =
            init_app(&args(&["--hide_time", "--title", "From args"]), &config).unwrap();

        assert!(fields.hide_time);
        assert_eq!(fields.title, "From args");
    }

    #[test]
    fn flags_use_underscores() {
        let args = args(&[
            "-C",
            "/tmp/netgraph.toml",
            "--no_write",
            "--dot_marker",
            "--hide_legend",
            "--hide_time",
        ]);

        assert_eq!(
            args.general_args.config_location.as_deref(),
            Some("/tmp/netgraph.toml")
        );
        assert!(args.general_args.no_write);

        let (fields, _) = init_app(&args, &Config::default()).unwrap();
        assert!(fields.use_dot);
        assert!(fields.hide_legend);
        assert!(fields.hide_time);

        let long = Args::try_parse_from(["netgraph", "--config_location", "a.toml"]).unwrap();
        assert_eq!(long.general_args.config_location.as_deref(), Some("a.toml"));
        assert!(Args::try_parse_from(["netgraph", "--hide-time"]).is_err());
    }

    #[test]
    fn multiline_titles_are_rejected() {
        assert!(matches!(
            init_app(&args(&["--title", "a\nb"]), &Config::default()),
            Err(OptionError::Argument(_))
        ));

        let config = Config {
            flags: Some(FlagConfig {
                title: Some("a\r\nb".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(matches!(
            init_app(&args(&[]), &config),
            Err(OptionError::Config(_))
        ));
    }

    #[test]
    fn colours_apply() {
        let config = Config {
            colors: Some(ColourConfig {
                tx_color: Some("#00acee".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let (_, styles) = init_app(&args(&[]), &config).unwrap();

        assert_eq!(styles.tx_style, Style::default().fg(Color::Rgb(0, 172, 238)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = toml_edit::de::from_str::<Config>("[flags]\nrate = 200\n");
        assert!(result.is_err());

        let result = toml_edit::de::from_str::<Config>("[network]\nfilter = []\n");
        assert!(result.is_err());
    }

    #[test]
    fn missing_config_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("netgraph.toml");

        let config = get_or_create_config(Some(&path), false).unwrap();
        assert!(config.flags.is_none());
        assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG_TEXT);

        // Reading it back gives the (commented-out) defaults.
        let config = get_or_create_config(Some(&path), false).unwrap();
        assert_eq!(config.flags, Some(FlagConfig::default()));
    }

    #[test]
    fn no_write_leaves_disk_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("netgraph.toml");

        get_or_create_config(Some(&path), true).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn bad_toml_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("netgraph.toml");
        fs::write(&path, "[flags]\ndot_marker = \"yes\"\n").unwrap();

        match get_or_create_config(Some(&path), true) {
            Err(OptionError::Config(reason)) => assert!(reason.contains("invalid type")),
            other => panic!("expected a config error, got {other:?}"),
        }
    }

    #[test]
    fn explicit_config_path_wins() {
        let path = Path::new("/tmp/elsewhere.toml");
        assert_eq!(get_config_path(Some(path)), Some(path.to_path_buf()));
    }
}
