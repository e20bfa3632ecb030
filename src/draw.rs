// Software drawing into the framebuffer.
// Visual: each dot is a small solid disc; nothing else is drawn.

use crate::types::FrameBuffer;

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
/// Visual: the exact pixel at (x,y) changes color.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Fill a disc of `radius` around (cx,cy), both in physical pixels.
/// A pixel is covered when its center lies inside the circle, so a disc
/// centered between pixels stays symmetric.
pub fn fill_circle(fb: &mut FrameBuffer, cx: f32, cy: f32, radius: f32, color: u32) {
    if !(radius > 0.0) {
        return;
    }
    let r2 = radius * radius;

    // Scan just the bounding box, clipped to the buffer
    let x0 = (cx - radius).floor().max(0.0) as i32;
    let y0 = (cy - radius).floor().max(0.0) as i32;
    let x1 = ((cx + radius).ceil() as i32).min(fb.width as i32 - 1);
    let y1 = ((cy + radius).ceil() as i32).min(fb.height as i32 - 1);

    for y in y0..=y1 {
        let dy = y as f32 + 0.5 - cy;
        for x in x0..=x1 {
            let dx = x as f32 + 0.5 - cx;
            if dx * dx + dy * dy <= r2 {
                put_pixel(fb, x, y, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(fb: &FrameBuffer) -> usize {
        fb.pixels.iter().filter(|&&p| p != 0).count()
    }

    #[test]
    fn put_pixel_ignores_out_of_bounds() {
        let mut fb = FrameBuffer::new(4, 4);
        put_pixel(&mut fb, -1, 0, 0xFF);
        put_pixel(&mut fb, 0, 4, 0xFF);
        put_pixel(&mut fb, 4, 0, 0xFF);
        assert_eq!(lit(&fb), 0);
        put_pixel(&mut fb, 3, 3, 0xFF);
        assert_eq!(fb.pixel(3, 3), Some(0xFF));
    }

    #[test]
    fn small_dot_covers_center_pixels() {
        let mut fb = FrameBuffer::new(10, 10);
        // diameter 3 centered on pixel (4,4)'s center
        fill_circle(&mut fb, 4.5, 4.5, 1.5, 0x00AB_CDEF);
        assert_eq!(fb.pixel(4, 4), Some(0x00AB_CDEF));
        assert_eq!(fb.pixel(3, 4), Some(0x00AB_CDEF));
        assert_eq!(fb.pixel(5, 4), Some(0x00AB_CDEF));
        assert_eq!(fb.pixel(4, 3), Some(0x00AB_CDEF));
        assert_eq!(fb.pixel(4, 5), Some(0x00AB_CDEF));
        // corners of the 3x3 box are sqrt(2) away: still inside 1.5
        assert_eq!(fb.pixel(3, 3), Some(0x00AB_CDEF));
        assert_eq!(fb.pixel(2, 4), Some(0));
        assert_eq!(lit(&fb), 9);
    }

    #[test]
    fn disc_is_clipped_at_edges() {
        let mut fb = FrameBuffer::new(8, 8);
        fill_circle(&mut fb, 0.0, 0.0, 3.0, 1);
        assert!(lit(&fb) > 0);
        fill_circle(&mut fb, 100.0, 100.0, 3.0, 2);
        assert!(!fb.pixels.contains(&2));
    }

    #[test]
    fn zero_radius_or_empty_buffer_draws_nothing() {
        let mut fb = FrameBuffer::new(8, 8);
        fill_circle(&mut fb, 4.0, 4.0, 0.0, 1);
        assert_eq!(lit(&fb), 0);

        let mut empty = FrameBuffer::new(0, 0);
        fill_circle(&mut empty, 0.0, 0.0, 2.0, 1);
        assert!(empty.pixels.is_empty());
    }
}
