// One frame of the dot grid.
// Visual: dots within the proximity radius glow towards the active color,
// brightest right under the pointer; everything else keeps the base color.

use tracing::trace;

use crate::color::{blend, ColorConfig, Rgb};
use crate::pointer::PointerTracker;
use crate::surface::Surface;
use crate::types::{Dot, Point};

/// Color for a single dot given the pointer position.
///
/// At or beyond `proximity` the dot keeps the base color; inside it the
/// blend factor is `1 - distance / proximity`. A radius of zero or less
/// only lights a dot the pointer sits exactly on.
#[inline]
pub fn dot_color(dot: Dot, pointer: Point, proximity: f32, colors: &ColorConfig) -> Rgb {
    let distance_sq = dot.center().distance_squared(pointer);
    if !(proximity > 0.0) {
        return if distance_sq == 0.0 { colors.active } else { colors.base };
    }
    if distance_sq > proximity * proximity {
        return colors.base;
    }
    let t = 1.0 - distance_sq.sqrt() / proximity;
    blend(colors.base, colors.active, t.clamp(0.0, 1.0))
}

/// Clear the surface and paint every dot of `grid`.
pub fn paint_frame(
    surface: &mut Surface,
    grid: &[Dot],
    pointer: &PointerTracker,
    dot_diameter: f32,
    proximity: f32,
    colors: &ColorConfig,
) {
    surface.clear();
    let base = colors.base.to_u32();
    let position = pointer.position();
    let mut highlighted = 0usize;
    for &dot in grid {
        let color = dot_color(dot, position, proximity, colors).to_u32();
        if color != base {
            highlighted += 1;
        }
        surface.fill_dot(dot.x, dot.y, dot_diameter, color);
    }
    trace!(
        dots = grid.len(),
        highlighted,
        pointer_present = pointer.is_present(),
        "frame painted"
    );
}
