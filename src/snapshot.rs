// Render a single frame without a window and save it as a PNG.
// Visual: the same picture the window would show on its first frame after
// the pointer moved to `pointer` (or with no pointer at all).

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use image::{ImageBuffer, Rgb};
use tracing::info;

use crate::color;
use crate::config::DotConfig;
use crate::engine::DotGrid;
use crate::error::Error;
use crate::headless::HeadlessHost;
use crate::surface::Surface;
use crate::types::{Bounds, FrameBuffer, Point};

/// Mount the engine headlessly, advance one frame and return the surface.
pub fn render_frame(
    config: &DotConfig,
    width: f32,
    height: f32,
    device_pixel_ratio: f32,
    pointer: Option<Point>,
) -> Surface {
    let bounds = Bounds::new(0.0, 0.0, width, height);
    let host = Rc::new(HeadlessHost::new(bounds, device_pixel_ratio));
    let surface = Rc::new(RefCell::new(Surface::new()));
    let engine = DotGrid::mount(Rc::clone(&host), &surface, config.clone());

    if let Some(p) = pointer {
        host.move_pointer(p.x, p.y);
    }
    host.advance_frame();
    engine.stop();

    surface.borrow().clone()
}

/// Convert 0x00RRGGBB pixels into an RGB image.
pub fn to_image(frame: &FrameBuffer) -> ImageBuffer<Rgb<u8>, Vec<u8>> {
    ImageBuffer::from_fn(frame.width as u32, frame.height as u32, |x, y| {
        let px = frame.pixel(x as usize, y as usize).unwrap_or(0);
        let c = color::Rgb::from_u32(px);
        Rgb([c.r, c.g, c.b])
    })
}

/// Render one frame and write it to `path` as PNG.
pub fn render_png(
    config: &DotConfig,
    width: f32,
    height: f32,
    device_pixel_ratio: f32,
    pointer: Option<Point>,
    path: impl AsRef<Path>,
) -> Result<(), Error> {
    let surface = render_frame(config, width, height, device_pixel_ratio, pointer);
    let img = to_image(surface.frame());
    img.save(path.as_ref())?;
    info!(
        path = %path.as_ref().display(),
        width = img.width(),
        height = img.height(),
        "snapshot written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_under_pointer_is_active_color() {
        let config = DotConfig::default();
        let colors = crate::color::ColorConfig::from_hex(&config.base_color, &config.active_color);
        let surface = render_frame(&config, 300.0, 100.0, 1.0, Some(Point::new(1.5, 9.5)));
        assert_eq!(surface.frame().pixel(1, 9), Some(colors.active.to_u32()));
        // far corner stays base
        assert_eq!(surface.frame().pixel(298, 90), Some(colors.base.to_u32()));
    }

    #[test]
    fn png_round_trips_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.png");
        render_png(&DotConfig::default(), 120.0, 80.0, 2.0, None, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (240, 160));
    }

    #[test]
    fn zero_density_window_still_exports() {
        let window = crate::config::WindowConfig {
            width: 96,
            height: 54,
            device_pixel_ratio: 0.0,
            ..Default::default()
        };
        let (width, height) = window.css_size();
        let dpr = window.effective_device_pixel_ratio();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zero.png");
        render_png(&DotConfig::default(), width, height, dpr, None, &path).unwrap();
        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (96, 54));
    }
}
