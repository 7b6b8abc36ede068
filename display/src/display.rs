use sdl2::pixels::PixelFormatEnum;

use chip8vm::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use chip8vm::Frame;

/// Bytes per pixel in an RGB24 texture.
const RGB: usize = 3;

/// # Display
/// An SDL2 window showing a 64x32 monochrome Frame, each Chip-8 pixel scaled up to a square.
/// Callers only need to `render` when `Chip8::take_frame` hands them a changed Frame.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
    width: usize,
    height: usize,
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `title` the window title
    /// * `scale` the size multiplier for each pixel
    pub fn new(sdl: &sdl2::Sdl, title: &str, scale: u32) -> Result<Self, String> {
        let video_subsystem = sdl.video()?;
        let window = video_subsystem
            .window(
                title,
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window
            .into_canvas()
            .build()
            .map_err(|e| e.to_string())?;

        Ok(Display {
            canvas,
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
        })
    }

    /// Unpacks a Frame into tightly packed RGB24 bytes, row by row.
    /// Column 0 is the most significant bit of each row; lit pixels are white.
    fn frame_to_sdl_texture(frame: &Frame) -> Vec<u8> {
        frame
            .rows()
            .iter()
            .flat_map(|row| (0..DISPLAY_WIDTH).rev().map(move |bit| (row >> bit) & 1))
            .flat_map(|pixel| std::iter::repeat(pixel as u8 * 255).take(RGB))
            .collect()
    }

    /// Draws `frame` stretched over the whole window.
    pub fn render(&mut self, frame: &Frame) -> Result<(), String> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                self.width as u32,
                self.height as u32,
            )
            .map_err(|e| e.to_string())?;

        let pixels = Display::frame_to_sdl_texture(frame);
        texture.with_lock(None, |buffer: &mut [u8], pitch: usize| {
            for (y, line) in pixels.chunks(self.width * RGB).enumerate() {
                buffer[y * pitch..y * pitch + line.len()].copy_from_slice(line);
            }
        })?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}
