// Grid layout: how many dots fit the container and where their centers go.
// Visual: a centered lattice of dots with even margins, never clipped at the edges.

use crate::types::Dot;

/// Number of whole cells along one axis. `n` dots need `n*cell - gap` pixels.
#[inline]
fn cells_along(extent: f32, dot_diameter: f32, gap: f32) -> usize {
    let cell = dot_diameter + gap;
    if !(cell > 0.0) || !extent.is_finite() {
        return 0;
    }
    let n = ((extent + gap) / cell).floor();
    if n > 0.0 { n as usize } else { 0 }
}

/// Lay out dots row-major for a `width` x `height` container.
///
/// The grid footprint is centered: the leftover space on each axis is split
/// evenly, and the first center sits half a diameter past that margin.
/// Containers smaller than one dot produce an empty grid.
pub fn rebuild(width: f32, height: f32, dot_diameter: f32, gap: f32) -> Vec<Dot> {
    let columns = cells_along(width, dot_diameter, gap);
    let rows = cells_along(height, dot_diameter, gap);
    if columns == 0 || rows == 0 {
        return Vec::new();
    }

    let cell = dot_diameter + gap;
    let grid_width = cell * columns as f32 - gap;
    let grid_height = cell * rows as f32 - gap;
    let offset_x = (width - grid_width) / 2.0 + dot_diameter / 2.0;
    let offset_y = (height - grid_height) / 2.0 + dot_diameter / 2.0;

    let mut dots = Vec::with_capacity(columns * rows);
    for row in 0..rows {
        let y = offset_y + row as f32 * cell;
        for col in 0..columns {
            dots.push(Dot { x: offset_x + col as f32 * cell, y });
        }
    }
    dots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_count(w: f32, h: f32, d: f32, g: f32) -> usize {
        let cols = ((w + g) / (d + g)).floor().max(0.0) as usize;
        let rows = ((h + g) / (d + g)).floor().max(0.0) as usize;
        cols * rows
    }

    #[test]
    fn wide_strip_scenario() {
        let dots = rebuild(300.0, 100.0, 3.0, 24.0);
        assert_eq!(dots.len(), 12 * 4);

        // footprint is 300 x 84: no slack horizontally, 16px vertically
        assert_eq!(dots[0], Dot { x: 1.5, y: 9.5 });
        assert_eq!(dots[11], Dot { x: 1.5 + 11.0 * 27.0, y: 9.5 });
        assert_eq!(dots[12].y, 9.5 + 27.0);
        assert!(dots[0].x > 0.0 && dots[0].y > 0.0);
    }

    #[test]
    fn count_matches_formula_and_dots_stay_inside() {
        let cases = [
            (300.0, 100.0, 3.0, 24.0),
            (1920.0, 1080.0, 3.0, 24.0),
            (27.0, 27.0, 3.0, 24.0),
            (3.0, 3.0, 3.0, 24.0),
            (641.5, 479.25, 5.0, 10.0),
            (100.0, 100.0, 10.0, 0.0),
        ];
        for (w, h, d, g) in cases {
            let dots = rebuild(w, h, d, g);
            assert_eq!(dots.len(), expected_count(w, h, d, g), "{w}x{h} d={d} g={g}");
            for dot in &dots {
                assert!((0.0..=w).contains(&dot.x), "x={} outside {w}", dot.x);
                assert!((0.0..=h).contains(&dot.y), "y={} outside {h}", dot.y);
            }
        }
    }

    #[test]
    fn grid_is_symmetric_about_container_center() {
        let (w, h) = (500.0, 333.0);
        let dots = rebuild(w, h, 3.0, 24.0);
        let first = dots.first().copied().unwrap();
        let last = dots.last().copied().unwrap();
        assert!((first.x + last.x - w).abs() < 1e-3);
        assert!((first.y + last.y - h).abs() < 1e-3);
    }

    #[test]
    fn rows_are_row_major() {
        let dots = rebuild(100.0, 100.0, 3.0, 24.0);
        for pair in dots.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(b.y > a.y || (b.y == a.y && b.x > a.x));
        }
    }

    #[test]
    fn degenerate_sizes_are_empty() {
        assert!(rebuild(0.0, 0.0, 3.0, 24.0).is_empty());
        assert!(rebuild(2.9, 500.0, 3.0, 24.0).is_empty());
        assert!(rebuild(500.0, -10.0, 3.0, 24.0).is_empty());
        assert!(rebuild(-500.0, -500.0, 3.0, 24.0).is_empty());
        assert!(rebuild(f32::NAN, 100.0, 3.0, 24.0).is_empty());
        assert!(rebuild(100.0, 100.0, 0.0, 0.0).is_empty());
    }

    #[test]
    fn rebuild_is_deterministic() {
        let a = rebuild(1280.0, 720.0, 3.0, 24.0);
        let b = rebuild(1280.0, 720.0, 3.0, 24.0);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.x.to_bits(), y.x.to_bits());
            assert_eq!(x.y.to_bits(), y.y.to_bits());
        }
    }
}
