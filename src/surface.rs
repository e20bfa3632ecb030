// The drawable surface and the resize path that rebuilds it.
// Visual: dots keep the same on-screen size on any pixel density, and stay crisp.

use tracing::debug;

use crate::config::DotConfig;
use crate::draw::fill_circle;
use crate::grid;
use crate::types::{Dot, FrameBuffer};

/// Backing pixels sized `display size x density`, drawn to in CSS pixel units.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    frame: FrameBuffer,
    css_width: f32,
    css_height: f32,
    scale: f32,
}

impl Default for Surface {
    fn default() -> Self {
        Self { frame: FrameBuffer::new(0, 0), css_width: 0.0, css_height: 0.0, scale: 1.0 }
    }
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resize the backing store to `css size x device_pixel_ratio` and set the
    /// drawing transform to that ratio. Non-positive sizes give an empty buffer.
    pub fn resize(&mut self, css_width: f32, css_height: f32, device_pixel_ratio: f32) {
        let scale = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        let physical = |css: f32| {
            let px = (css * scale).round();
            if px.is_finite() && px > 0.0 { px as usize } else { 0 }
        };

        self.frame = FrameBuffer::new(physical(css_width), physical(css_height));
        self.css_width = css_width.max(0.0);
        self.css_height = css_height.max(0.0);
        self.scale = scale;
    }

    /// CSS-level size; unscaled by density.
    pub fn css_size(&self) -> (f32, f32) {
        (self.css_width, self.css_height)
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Clear every backing pixel to black.
    pub fn clear(&mut self) {
        self.frame.pixels.fill(0);
    }

    /// Draw a filled dot of `diameter` CSS pixels centered at (x,y) CSS pixels.
    pub fn fill_dot(&mut self, x: f32, y: f32, diameter: f32, color: u32) {
        let s = self.scale;
        fill_circle(&mut self.frame, x * s, y * s, diameter * s / 2.0, color);
    }
}

/// React to a container size change: rescale the surface, then lay out a
/// fresh grid generation for the unscaled size.
pub fn apply_resize(
    surface: &mut Surface,
    width: f32,
    height: f32,
    device_pixel_ratio: f32,
    config: &DotConfig,
) -> Vec<Dot> {
    surface.resize(width, height, device_pixel_ratio);
    let dots = grid::rebuild(width, height, config.dot_diameter, config.gap);
    debug!(
        width,
        height,
        device_pixel_ratio = surface.scale(),
        backing_width = surface.frame().width,
        backing_height = surface.frame().height,
        dots = dots.len(),
        "grid rebuilt"
    );
    dots
}
