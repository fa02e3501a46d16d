//! CLI argument definitions for `flipbook-cli`.

use clap::{Arg, ArgAction, Command};

/// Build the CLI argument parser and command definitions.
pub fn build_cli() -> Command {
    Command::new("Flipbook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Play a looped frame animation in the terminal, in sync with audio")
        .arg(
            Arg::new("frames")
                .long("frames")
                .short('n')
                .value_name("COUNT")
                .default_value("12")
                .help("Number of frames in one animation pass"),
        )
        .arg(
            Arg::new("loops")
                .long("loops")
                .short('l')
                .value_name("COUNT")
                .default_value("1")
                .help("Number of full passes before the run completes"),
        )
        .arg(
            Arg::new("fps")
                .long("fps")
                .short('r')
                .value_name("RATE")
                .default_value("12")
                .help("Target frame rate"),
        )
        .arg(
            Arg::new("driver")
                .long("driver")
                .short('d')
                .value_name("MODE")
                .value_parser(["timer", "busy-poll"])
                .default_value("timer")
                .help("Tick driver: recurring timer or busy-poll loop"),
        )
        .arg(
            Arg::new("audio")
                .long("audio")
                .short('a')
                .value_name("PATH")
                .help("Audio track to play alongside the animation"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .conflicts_with_all(["frames", "loops", "fps", "driver"])
                .help("Path to a JSON AnimationConfig, replacing the timing flags"),
        )
        .arg(
            Arg::new("gain")
                .long("gain")
                .short('g')
                .value_name("GAIN")
                .default_value("80")
                .help("The audio playback gain (0-100)"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .action(ArgAction::SetTrue)
                .help("Suppress the terminal frame display"),
        )
}
