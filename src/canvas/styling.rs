//! Colours and styles for the chart.

use tui::style::{Color, Modifier, Style};

use crate::options::{
    config::ColourConfig,
    error::{OptionError, OptionResult},
};

/// The styles the [`Painter`](super::Painter) draws with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanvasStyles {
    pub tx_style: Style,
    pub border_style: Style,
    pub graph_style: Style,
    pub title_style: Style,
    pub hint_style: Style,
}

impl Default for CanvasStyles {
    fn default() -> Self {
        Self {
            // Close to the classic "#00acee" line colour, but safe on 16-colour terminals.
            tx_style: Style::default().fg(Color::LightCyan),
            border_style: Style::default().fg(Color::Gray),
            graph_style: Style::default().fg(Color::Gray),
            title_style: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            hint_style: Style::default().fg(Color::DarkGray),
        }
    }
}

macro_rules! set_colour {
    ($style:expr, $colours:expr, $field:ident) => {
        if let Some(colour) = &$colours.$field {
            $style = $style.fg(str_to_colour(colour).map_err(|err| {
                OptionError::config(format!(
                    "Please update 'colors.{}' in your config file. {err}",
                    stringify!($field)
                ))
            })?);
        }
    };
}

impl CanvasStyles {
    /// Builds the styles, overriding the defaults with anything set in the config.
    pub fn new(colours: Option<&ColourConfig>) -> OptionResult<Self> {
        let mut styles = Self::default();

        if let Some(colours) = colours {
            set_colour!(styles.tx_style, colours, tx_color);
            set_colour!(styles.border_style, colours, border_color);
            set_colour!(styles.graph_style, colours, graph_color);
            set_colour!(styles.title_style, colours, title_color);
        }

        Ok(styles)
    }
}

/// Convert a hex string like `#12ab3c` or `#1a2` to a colour.
fn try_hex_to_colour(hex: &str) -> Result<Color, String> {
    let invalid_hex_format = || {
        format!(
            "'{hex}' is an invalid hex color. It must be either a 7 character hex string of the form '#12ab3c' or a 3 character hex string of the form '#1a2'.",
        )
    };

    let digits = hex.strip_prefix('#').ok_or_else(invalid_hex_format)?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid_hex_format());
    }

    let component = |pair: &str| {
        u8::from_str_radix(pair, 16)
            .map_err(|_| format!("'{hex}' is an invalid hex color, could not decode."))
    };

    match digits.len() {
        6 => Ok(Color::Rgb(
            component(&digits[0..2])?,
            component(&digits[2..4])?,
            component(&digits[4..6])?,
        )),
        3 => {
            let doubled = digits
                .chars()
                .map(|c| component(&format!("{c}{c}")))
                .collect::<Result<Vec<_>, _>>()?;

            Ok(Color::Rgb(doubled[0], doubled[1], doubled[2]))
        }
        _ => Err(invalid_hex_format()),
    }
}

fn convert_rgb_to_colour(rgb_str: &str) -> Result<Color, String> {
    let rgb = rgb_str
        .split(',')
        .map(|val| val.trim().parse::<u8>())
        .collect::<Result<Vec<_>, _>>();

    match rgb.as_deref() {
        Ok([r, g, b]) => Ok(Color::Rgb(*r, *g, *b)),
        _ => Err(format!(
            "Value '{rgb_str}' is an invalid RGB colour. It must be a comma separated value with 3 integers from 0 to 255 (ie: '255, 0, 155').",
        )),
    }
}

fn convert_name_to_colour(colour_name: &str) -> Result<Color, String> {
    match colour_name.to_lowercase().trim() {
        "reset" => Ok(Color::Reset),
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "gray" | "grey" => Ok(Color::Gray),
        "darkgray" | "darkgrey" | "dark gray" | "dark grey" => Ok(Color::DarkGray),
        "lightred" | "light red" => Ok(Color::LightRed),
        "lightgreen" | "light green" => Ok(Color::LightGreen),
        "lightyellow" | "light yellow" => Ok(Color::LightYellow),
        "lightblue" | "light blue" => Ok(Color::LightBlue),
        "lightmagenta" | "light magenta" => Ok(Color::LightMagenta),
        "lightcyan" | "light cyan" => Ok(Color::LightCyan),
        "white" => Ok(Color::White),
        _ => Err(format!(
            "'{colour_name}' is an invalid named color. Named colors, hex colors or RGB color codes are valid."
        )),
    }
}

/// Parses a colour from a name (`"light cyan"`), a hex string (`"#00acee"`)
/// or a comma separated RGB triple (`"0, 172, 238"`).
pub fn str_to_colour(input_val: &str) -> Result<Color, String> {
    if input_val.len() > 1 {
        if input_val.starts_with('#') {
            try_hex_to_colour(input_val)
        } else if input_val.contains(',') {
            convert_rgb_to_colour(input_val)
        } else {
            convert_name_to_colour(input_val)
        }
    } else {
        Err(format!("Value '{input_val}' is not valid."))
    }
}
