use std::path::PathBuf;

use clap::Parser;

use chip8vm::constants::DEFAULT_CLOCK_SPEED;

mod audio;
mod keymap;
mod run;

/// Runs a Chip-8 ROM in a window.
#[derive(Parser, Debug)]
#[command(name = "chip8", version)]
pub struct Config {
    /// Path to the ROM to run
    rom: PathBuf,

    /// Instructions executed per second
    #[arg(long, default_value_t = DEFAULT_CLOCK_SPEED)]
    clock_speed: u32,

    /// Size of each Chip-8 pixel on screen
    #[arg(long, default_value_t = 10)]
    scale: u32,

    /// How keyboard keys map onto the hex keypad
    #[arg(long, value_enum, default_value_t = keymap::Layout::Grid)]
    layout: keymap::Layout,

    /// Never play the tone
    #[arg(long)]
    mute: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = Config::parse();
    run::run(&config)
}
