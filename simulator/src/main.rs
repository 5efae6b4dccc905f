//! Honeycomb watch face simulator for desktop.
//!
//! Renders the face with the embedded-graphics-simulator crate, either into an
//! SDL window (with the `window` feature) or once into a PNG snapshot.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

mod clock_source;
mod config;
#[cfg(feature = "window")]
mod timing;

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveTime;
use clap::Parser;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay};
use honeycomb_common::{BACKGROUND, ClockState, DisplaySurface, FaceOptions, MinuteHand, TimeSource, WatchFace};
use log::{debug, info};

use crate::clock_source::{ClockReader, parse_time};
use crate::config::{DEFAULT_SNAPSHOT, SCALE, SCREEN_HEIGHT, SCREEN_WIDTH};

#[derive(Parser, Debug)]
#[command(version, about = "Honeycomb watch face simulator", long_about = None)]
struct Args {
    /// Fast-forward: minute, hour and weekday follow the seconds, redraw every second
    #[arg(short, long)]
    accelerated: bool,

    /// Minute hand creeps forward with the seconds instead of jumping
    #[arg(long)]
    sweep: bool,

    /// Viewport width in pixels
    #[arg(long, default_value_t = SCREEN_WIDTH)]
    width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = SCREEN_HEIGHT)]
    height: u32,

    /// Pixel scale of the window or snapshot
    #[arg(long, default_value_t = SCALE, value_parser = clap::value_parser!(u32).range(1..=8))]
    scale: u32,

    /// Render one frame to this PNG file and exit
    #[arg(long, value_name = "PATH")]
    snapshot: Option<PathBuf>,

    /// Show a fixed time instead of the local clock
    #[arg(long, value_name = "HH:MM[:SS]", value_parser = parse_time)]
    at: Option<NaiveTime>,

    /// Show a fixed weekday, 0 = Sunday
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..7))]
    weekday: Option<u8>,

    /// Open an SDL window and keep redrawing
    #[cfg(feature = "window")]
    #[arg(long)]
    window: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let source = if args.accelerated { TimeSource::AcceleratedClock } else { TimeSource::SystemClock };
    let options = FaceOptions {
        minute_hand: if args.sweep { MinuteHand::Sweep } else { MinuteHand::Stepped },
    };
    let viewport = Rectangle::new(Point::zero(), Size::new(args.width, args.height));
    let mut face = WatchFace::new(viewport, options).context("cannot lay out the watch face")?;
    let clock = ClockReader::new(source, args.at, args.weekday);

    info!(
        "viewport {}x{}, cell height {}, {:?}, {:?} minute hand",
        args.width,
        args.height,
        face.layout().cell.height,
        source,
        options.minute_hand
    );

    #[cfg(feature = "window")]
    if args.window && args.snapshot.is_none() {
        return run_window(&mut face, &clock, args.scale);
    }

    let path = args.snapshot.unwrap_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT));
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(viewport.size);
    let now = clock.now();
    draw_frame(&mut display, &mut face, &now);
    write_snapshot(&display, &path, args.scale)?;
    info!("wrote {} for {}", path.display(), describe(&now));

    Ok(())
}

/// Clear the display and draw one full face.
fn draw_frame<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    face: &mut WatchFace,
    clock: &ClockState,
) {
    display.clear(BACKGROUND).ok();
    face.render(&mut DisplaySurface::new(display), clock);
}

fn write_snapshot(
    display: &SimulatorDisplay<Rgb565>,
    path: &Path,
    scale: u32,
) -> anyhow::Result<()> {
    let output_settings = OutputSettingsBuilder::new().scale(scale).build();
    display
        .to_rgb_output_image(&output_settings)
        .save_png(path)
        .with_context(|| format!("failed to write snapshot to {}", path.display()))
}

fn describe(clock: &ClockState) -> String {
    format!(
        "{:02}:{:02}:{:02} weekday {}",
        clock.hour, clock.minute, clock.second, clock.weekday
    )
}

#[cfg(feature = "window")]
fn run_window(
    face: &mut WatchFace,
    clock: &ClockReader,
    scale: u32,
) -> anyhow::Result<()> {
    use std::thread;
    use std::time::Instant;

    use embedded_graphics_simulator::Window;
    use honeycomb_common::RedrawDriver;

    use crate::config::WINDOW_TITLE;
    use crate::timing::POLL_INTERVAL;

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(face.layout().viewport.size);
    let output_settings = OutputSettingsBuilder::new().scale(scale).build();
    let mut window = Window::new(WINDOW_TITLE, &output_settings);

    let mut driver = RedrawDriver::new(clock.source().tick_unit());
    driver.on_load();
    info!("window loaded, face changes every {:?}", clock.source().redraw_interval());

    loop {
        let frame_start = Instant::now();

        let now = clock.now();
        if driver.on_tick(&now) {
            draw_frame(&mut display, face, &now);
            driver.end_frame();
            debug!("frame {} at {}", driver.frames_drawn(), describe(&now));
        }

        window.update(&display);

        for ev in window.events() {
            if handle_event(ev, &mut driver) {
                info!("window closed after {} frames", driver.frames_drawn());
                return Ok(());
            }
        }

        if let Some(rest) = POLL_INTERVAL.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }
}

/// Apply one window event to the driver. Returns true when the window closes.
///
/// `R` forces a full redraw within the current tick.
#[cfg(feature = "window")]
fn handle_event(
    ev: embedded_graphics_simulator::SimulatorEvent,
    driver: &mut honeycomb_common::RedrawDriver,
) -> bool {
    use embedded_graphics_simulator::SimulatorEvent;
    use embedded_graphics_simulator::sdl2::Keycode;

    match ev {
        SimulatorEvent::Quit => {
            driver.on_unload();
            true
        },
        SimulatorEvent::KeyDown {
            keycode: Keycode::R,
            repeat: false,
            ..
        } => {
            driver.invalidate();
            debug!("manual refresh");
            false
        },
        _ => false,
    }
}
