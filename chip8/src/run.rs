use std::fs::File;
use std::io::BufReader;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context};
use log::{error, info, warn};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use chip8vm::{Chip8, Clock};
use display::Display;

use crate::audio::Beeper;
use crate::Config;

/// How much faster than normal the machine runs while fast forward is held.
const FAST_FORWARD: u32 = 4;

/// Longest stretch of wall time the machine will try to catch up on at once, e.g. after the
/// window was dragged.
const MAX_FRAME_TIME: Duration = Duration::from_millis(100);

/// Time to sleep between iterations of the event loop.
const IDLE: Duration = Duration::from_millis(1);

pub fn run(config: &Config) -> anyhow::Result<()> {
    // Get SDL2 context
    let sdl = sdl2::init().map_err(|e| anyhow!(e))?;
    let title = format!("Chip-8 - {}", config.rom.display());
    let mut display =
        Display::new(&sdl, &title, config.scale).map_err(|e| anyhow!(e).context("creating window"))?;
    let mut events = sdl.event_pump().map_err(|e| anyhow!(e))?;

    let mut chip8 = Chip8::new();
    if !config.mute {
        match Beeper::new(&sdl) {
            Ok(beeper) => chip8 = chip8.with_audio(Box::new(beeper)),
            Err(e) => warn!("continuing without sound: {}", e),
        }
    }

    // Load ROM
    let file = File::open(&config.rom)
        .with_context(|| format!("unable to open {}", config.rom.display()))?;
    chip8
        .load_rom_from(&mut BufReader::new(file))
        .with_context(|| format!("unable to load {}", config.rom.display()))?;
    info!(
        "loaded {}, running at {} Hz",
        config.rom.display(),
        config.clock_speed
    );

    let mut clock = Clock::new(config.clock_speed);
    let mut last_cycle = Instant::now();

    // Whether or not the default clock speed should be respected
    let mut fast_forward = false;

    'event: loop {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, config.layout.key(key)) {
                    (_, Some(kc)) => chip8.key_press(kc),
                    (Keycode::Space, _) => fast_forward = true,
                    (Keycode::Escape, _) => break 'event,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, config.layout.key(key)) {
                    (_, Some(kc)) => chip8.key_release(kc),
                    (Keycode::Space, _) => fast_forward = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        // Update state
        let current_time = Instant::now();
        let mut elapsed = (current_time - last_cycle).min(MAX_FRAME_TIME);
        if fast_forward {
            elapsed *= FAST_FORWARD;
        }
        last_cycle = current_time;

        if let Err(e) = chip8.run_for(&mut clock, elapsed) {
            error!("halted: {}", e);
            return Err(e).context("program stopped");
        }

        // Only redraw when the frame changed
        if let Some(frame) = chip8.take_frame() {
            display.render(frame).map_err(|e| anyhow!(e))?;
        }

        std::thread::sleep(IDLE);
    }

    info!("window closed");
    Ok(())
}
