//! Command line parsing and [`Action`] construction.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

/// An RGB colour as given on the command line.
pub type Rgb = [i32; 3];

/// Global options and the action to carry out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cli {
    /// Explicit config file.
    pub config: Option<PathBuf>,
    /// Device address override.
    pub address: Option<String>,
    /// Display size override.
    pub size: Option<usize>,
    /// Number of `-v` flags.
    pub verbosity: u8,
    /// The action to carry out.
    pub action: Action,
}

/// The action to carry out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Draw text over a background and push it.
    Text {
        text: String,
        x: usize,
        y: usize,
        color: Rgb,
        background: Rgb,
    },
    /// Fill the display with one colour and push it.
    Fill { color: Rgb },
    /// Light a single pixel on a black frame and push it.
    Pixel { x: usize, y: usize, color: Rgb },
    /// Set screen brightness.
    Brightness { level: u8 },
    /// Turn the screen on.
    On,
    /// Turn the screen off.
    Off,
    /// Reset the device's frame tracking.
    Reset,
}

/// Parses the process arguments, exiting with usage on error.
pub fn get_cli() -> Cli {
    try_parse_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
}

/// Parses `args` (including the binary name).
pub fn try_parse_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Ok(from_matches(&command_parser().try_get_matches_from(args)?))
}

/// Parses `R,G,B` into a colour.
pub fn parse_color(s: &str) -> Result<Rgb, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [r, g, b] = parts.as_slice() else {
        return Err(format!("expected R,G,B but got {s:?}"));
    };

    let channel = |v: &str| {
        v.parse::<i32>()
            .map_err(|e| format!("invalid channel {v:?}: {e}"))
    };
    Ok([channel(r)?, channel(g)?, channel(b)?])
}

fn from_matches(matches: &ArgMatches) -> Cli {
    let Some((subcommand_name, subcommand_matches)) = matches.subcommand() else {
        unreachable!("subcommand is required");
    };

    let color = |name: &str| {
        subcommand_matches
            .get_one::<Rgb>(name)
            .copied()
            .unwrap_or_default()
    };
    let coordinate = |name: &str| {
        subcommand_matches
            .get_one::<usize>(name)
            .copied()
            .unwrap_or_default()
    };

    let action = match subcommand_name {
        "text" => Action::Text {
            text: subcommand_matches
                .get_one::<String>("text")
                .cloned()
                .unwrap_or_default(),
            x: coordinate("x"),
            y: coordinate("y"),
            color: color("color"),
            background: color("background"),
        },
        "fill" => Action::Fill {
            color: color("color"),
        },
        "pixel" => Action::Pixel {
            x: coordinate("x"),
            y: coordinate("y"),
            color: color("color"),
        },
        "brightness" => Action::Brightness {
            level: subcommand_matches
                .get_one::<u8>("level")
                .copied()
                .unwrap_or_default(),
        },
        "on" => Action::On,
        "off" => Action::Off,
        "reset" => Action::Reset,
        _ => unreachable!("unexpected subcommand: {subcommand_name:?}"),
    };

    Cli {
        config: matches.get_one::<PathBuf>("config").cloned(),
        address: matches.get_one::<String>("address").cloned(),
        size: matches.get_one::<usize>("size").copied(),
        verbosity: matches.get_count("verbose"),
        action,
    }
}

/// Returns the command parser for all [`Action`]s.
fn command_parser() -> Command {
    let color_arg = |name: &'static str, default: &'static str| {
        Arg::new(name)
            .long(name)
            .value_name("R,G,B")
            .value_parser(parse_color)
            .default_value(default)
    };

    Command::new("pixoo")
        .about("Draw on and control a Pixoo pixel-matrix display")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .global(true)
                .help("Config file (default: ./pixoo.toml, then built-in defaults)"),
        )
        .arg(
            Arg::new("address")
                .long("address")
                .short('a')
                .env("PIXOO_ADDRESS")
                .global(true)
                .help("Device address, overrides the config file"),
        )
        .arg(
            Arg::new("size")
                .long("size")
                .value_parser(value_parser!(usize))
                .global(true)
                .help("Display side length in pixels, overrides the config file"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .global(true)
                .help("Increase log output (repeatable)"),
        )
        .subcommand(
            Command::new("text")
                .about("Draw text and push the frame")
                .arg(Arg::new("text").required(true))
                .arg(
                    Arg::new("x")
                        .long("x")
                        .value_parser(value_parser!(usize))
                        .default_value("0"),
                )
                .arg(
                    Arg::new("y")
                        .long("y")
                        .value_parser(value_parser!(usize))
                        .default_value("0"),
                )
                .arg(color_arg("color", "255,255,255"))
                .arg(color_arg("background", "0,0,0")),
        )
        .subcommand(
            Command::new("fill")
                .about("Fill the display with one colour and push the frame")
                .arg(
                    Arg::new("color")
                        .value_name("R,G,B")
                        .value_parser(parse_color)
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("pixel")
                .about("Light one pixel on a black frame and push it")
                .arg(
                    Arg::new("x")
                        .value_parser(value_parser!(usize))
                        .required(true),
                )
                .arg(
                    Arg::new("y")
                        .value_parser(value_parser!(usize))
                        .required(true),
                )
                .arg(color_arg("color", "255,255,255")),
        )
        .subcommand(
            Command::new("brightness")
                .about("Set screen brightness (0-100)")
                .arg(
                    Arg::new("level")
                        .value_parser(value_parser!(u8))
                        .required(true),
                ),
        )
        .subcommand(Command::new("on").about("Turn the screen on"))
        .subcommand(Command::new("off").about("Turn the screen off"))
        .subcommand(Command::new("reset").about("Reset the device's frame tracking"))
        .subcommand_required(true)
        .arg_required_else_help(true)
}
