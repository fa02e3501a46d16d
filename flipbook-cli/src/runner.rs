use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::ArgMatches;
use crossterm::terminal;
use log::{error, info};

use flipbook_lib::config::{AnimationConfig, DriverMode};
use flipbook_lib::engine::AnimationEngine;
use flipbook_lib::sink::{AudioSink, DisplaySink, NullAudioSink, NullDisplaySink, RodioAudioSink};

use crate::{controls, display};

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Primary entry for CLI execution; wires config, sinks, and engine together.
pub fn run(args: &ArgMatches) -> Result<i32, Box<dyn std::error::Error>> {
    let quiet = args.get_flag("quiet");

    let config = match args.get_one::<String>("config") {
        Some(path) => AnimationConfig::from_json_file(Path::new(path))?,
        None => {
            let frames = args.get_one::<String>("frames").unwrap().parse::<u32>()?;
            let loops = args.get_one::<String>("loops").unwrap().parse::<u32>()?;
            let fps = args.get_one::<String>("fps").unwrap().parse::<f64>()?;
            let driver_mode = match args.get_one::<String>("driver").unwrap().as_str() {
                "busy-poll" => DriverMode::BusyPoll,
                _ => DriverMode::Timer,
            };
            AnimationConfig::new(frames, loops, fps).with_driver_mode(driver_mode)
        }
    };

    let gain = args.get_one::<String>("gain").unwrap().parse::<f32>()?;
    let audio: Arc<dyn AudioSink> = match args.get_one::<String>("audio") {
        Some(path) => Arc::new(
            RodioAudioSink::new(PathBuf::from(path), config.loop_count).with_volume(gain / 100.0),
        ),
        None => Arc::new(NullAudioSink),
    };

    let display: Arc<dyn DisplaySink> = if quiet {
        Arc::new(NullDisplaySink)
    } else {
        Arc::new(display::TerminalDisplaySink::new(config.frame_count))
    };

    let engine = AnimationEngine::new(config, display, audio);
    if let Err(err) = engine
        .start(Some(Box::new(|| info!("animation run complete"))))
    {
        error!("{}", err);
        return Ok(-1);
    }

    let _raw_mode = RawModeGuard::enable().ok();

    // Input loop; the engine's driver thread handles the frame timing.
    while engine.is_running() {
        if !controls::handle_key_event(&engine) {
            break;
        }
    }
    engine.wait_until_finished();

    if !quiet {
        println!();
    }

    Ok(0)
}
