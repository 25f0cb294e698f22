//! Window that shows a finished frame.

use anyhow::{Context, Result};
use glint_renderer::Framebuffer;
use minifb::{Key, Scale, Window, WindowOptions};

/// Open a window showing `frame` until it is closed or ESC is pressed.
///
/// The framebuffer's `0xAARRGGBB` layout is what minifb expects, so the
/// pixels are uploaded as-is.
pub fn show(frame: &Framebuffer, title: &str) -> Result<()> {
    let (width, height) = (frame.width as usize, frame.height as usize);

    let mut window = Window::new(
        title,
        width,
        height,
        WindowOptions {
            scale: Scale::X1,
            ..WindowOptions::default()
        },
    )
    .context("Failed to create window")?;
    window.set_target_fps(60);

    log::info!("Press ESC or close window to exit...");

    while window.is_open() && !window.is_key_down(Key::Escape) {
        window
            .update_with_buffer(frame.pixels(), width, height)
            .context("Failed to present frame")?;
    }

    log::info!("Window closed");
    Ok(())
}
