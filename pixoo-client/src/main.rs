//! `pixoo` command-line client
//!
//! Loads configuration, opens a display session over HTTP and runs one
//! action against the device.

mod cli;
mod config;
mod logger;
mod transport;

use anyhow::Context;
use log::info;
use pixoo_display::Display;

use crate::cli::{get_cli, Action};
use crate::transport::HttpTransport;

fn main() -> anyhow::Result<()> {
    let cli = get_cli();
    logger::init(logger::level_for_verbosity(cli.verbosity));

    let settings = config::load_config(cli.config.as_deref())
        .context("failed to load configuration")?
        .resolve(cli.address, cli.size)
        .context("invalid configuration")?;

    info!(
        "Pixoo at {} ({}x{})",
        settings.address, settings.size, settings.size
    );

    let transport = HttpTransport::new(settings.timeout);
    let mut display = Display::new(settings.address, settings.size, transport);

    if let Some(level) = settings.brightness {
        display
            .set_brightness(level)
            .context("failed to apply configured brightness")?;
    }

    run(&mut display, cli.action)
}

fn run(display: &mut Display<HttpTransport>, action: Action) -> anyhow::Result<()> {
    match action {
        Action::Text {
            text,
            x,
            y,
            color: [r, g, b],
            background: [br, bg, bb],
        } => {
            // Glyphs are uppercase only
            let text = text.to_uppercase();
            display.fill(br, bg, bb);
            display
                .draw_text(&text, x, y, r, g, b)
                .with_context(|| format!("cannot draw {text:?} at ({x}, {y})"))?;
            info!("Drawing {:?} at ({}, {})", text, x, y);
            display.push().context("failed to push frame")?;
        }
        Action::Fill { color: [r, g, b] } => {
            display.fill(r, g, b);
            info!("Filling with ({}, {}, {})", r, g, b);
            display.push().context("failed to push frame")?;
        }
        Action::Pixel {
            x,
            y,
            color: [r, g, b],
        } => {
            display.clear();
            display
                .set_pixel(x, y, r, g, b)
                .with_context(|| format!("cannot set pixel ({x}, {y})"))?;
            info!("Setting pixel ({}, {}) to ({}, {}, {})", x, y, r, g, b);
            display.push().context("failed to push frame")?;
        }
        Action::Brightness { level } => {
            info!("Setting brightness to {}", level);
            display
                .set_brightness(level)
                .context("failed to set brightness")?;
        }
        Action::On => {
            info!("Turning screen on");
            display.turn_on().context("failed to turn screen on")?;
        }
        Action::Off => {
            info!("Turning screen off");
            display.turn_off().context("failed to turn screen off")?;
        }
        Action::Reset => {
            info!("Resetting frame tracking");
            display.reset().context("failed to reset device")?;
        }
    }

    Ok(())
}
