//! Diagonal stripe pattern
//!
//! Striped progress bars and sliders fill their bar with the same repeating
//! pattern. Stripes are parallelograms leaning at [`STRIPE_ANGLE_DEGREES`],
//! laid out left to right and clipped to the target rectangle.

use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::path::{Path, PathBuilder};

/// Width of a single stripe
pub const STRIPE_WIDTH: f32 = 2.0;
/// Gap between neighbouring stripes
pub const STRIPE_SPACING: f32 = 4.0;
/// Stripe lean, measured from the positive x axis
pub const STRIPE_ANGLE_DEGREES: f32 = 135.0;

/// Upper bound on the stripes in one pattern
pub const MAX_STRIPES: usize = 65_536;

/// Polygons thinner than this are dropped after clipping
const MIN_AREA: f32 = 1e-4;

/// A stripe path paired with its fill color and clip rectangle
#[derive(Clone, Debug, PartialEq)]
pub struct StripedFill {
    pub path: Path,
    pub clip: Rect,
    pub color: Color,
}

/// Build the stripe pattern for `rect`.
///
/// Every vertex of the returned path lies inside `rect`. Empty or non-finite
/// rectangles produce an empty path. The pattern is anchored at the left edge
/// and stops after [`MAX_STRIPES`] stripes.
pub fn stripe_path(rect: Rect) -> Path {
    let (w, h) = (rect.width(), rect.height());
    if rect.is_empty() || !w.is_finite() || !h.is_finite() {
        return Path::new();
    }

    let step = f64::from(STRIPE_WIDTH + STRIPE_SPACING);
    let dx = h * STRIPE_ANGLE_DEGREES.to_radians().tan();
    // One step before the first stripe that can reach x = 0
    let start = f64::from(-dx.max(0.0)) - step;
    let span = f64::from(w) + f64::from(dx.abs()) + step;
    let count = ((span / step).floor() as usize).min(MAX_STRIPES);

    let mut builder = PathBuilder::new();
    let mut stripes = 0;
    for i in 0..=count {
        if stripes == MAX_STRIPES {
            break;
        }
        let x = (start + i as f64 * step) as f32;
        let left = x.min(x + dx);
        let right = x.max(x + dx) + STRIPE_WIDTH;
        if right <= 0.0 || left >= w {
            continue;
        }

        let stripe = [
            Point::new(x, 0.0),
            Point::new(x + STRIPE_WIDTH, 0.0),
            Point::new(x + STRIPE_WIDTH + dx, h),
            Point::new(x + dx, h),
        ];

        let clipped = clip_to_width(&stripe, w);
        if clipped.len() >= 3 && polygon_area(&clipped) > MIN_AREA {
            let placed: Vec<Point> = clipped
                .iter()
                .map(|p| p.offset(rect.x(), rect.y()))
                .collect();
            builder = builder.polygon(&placed);
            stripes += 1;
        }
    }

    let path = builder.build();
    tracing::trace!(width = w, height = h, stripes, "built stripe path");
    path
}

/// Stripe pattern for `rect` drawn in `color`
pub fn striped_fill(rect: Rect, color: Color) -> StripedFill {
    StripedFill {
        path: stripe_path(rect),
        clip: rect,
        color,
    }
}

/// Clip a polygon spanning `0..=h` vertically to the band `0..=width`.
fn clip_to_width(polygon: &[Point], width: f32) -> Vec<Point> {
    let left = clip_edge(polygon, |p| p.x >= 0.0, |a, b| intersect_x(a, b, 0.0));
    clip_edge(&left, |p| p.x <= width, |a, b| intersect_x(a, b, width))
}

/// One Sutherland-Hodgman pass against a single boundary
fn clip_edge(
    polygon: &[Point],
    inside: impl Fn(&Point) -> bool,
    intersect: impl Fn(Point, Point) -> Point,
) -> Vec<Point> {
    let mut out = Vec::with_capacity(polygon.len() + 2);
    let Some(&last) = polygon.last() else {
        return out;
    };

    let mut prev = last;
    for &current in polygon {
        match (inside(&current), inside(&prev)) {
            (true, true) => out.push(current),
            (true, false) => {
                out.push(intersect(prev, current));
                out.push(current);
            }
            (false, true) => out.push(intersect(prev, current)),
            (false, false) => {}
        }
        prev = current;
    }
    out
}

fn intersect_x(a: Point, b: Point, x: f32) -> Point {
    let t = (x - a.x) / (b.x - a.x);
    Point::new(x, a.y + (b.y - a.y) * t)
}

/// Absolute shoelace area
fn polygon_area(points: &[Point]) -> f32 {
    let twice: f32 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum();
    twice.abs() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_vertex_lies_inside_rect() {
        let rect = Rect::new(12.0, 40.0, 150.0, 20.0);
        let path = stripe_path(rect);
        assert!(!path.is_empty());

        let eps = 1e-3;
        for p in path.points() {
            assert!(p.x >= rect.x() - eps && p.x <= rect.max_x() + eps, "{p:?}");
            assert!(p.y >= rect.y() - eps && p.y <= rect.max_y() + eps, "{p:?}");
        }
    }

    #[test]
    fn stripe_count_follows_spacing() {
        // Unclipped stripes start every 6px across w + 2h; a wide bar keeps
        // roughly width / 6 of them after clipping.
        let path = stripe_path(Rect::new(0.0, 0.0, 600.0, 10.0));
        let count = path.polygons().len();
        assert!((95..=105).contains(&count), "got {count}");
    }

    #[test]
    fn stripes_keep_their_width_inside_the_rect() {
        let path = stripe_path(Rect::new(0.0, 0.0, 300.0, 8.0));
        let interior = path
            .polygons()
            .into_iter()
            .find(|poly| poly.iter().all(|p| p.x > 20.0 && p.x < 280.0))
            .expect("an unclipped stripe");
        let area = polygon_area(&interior);
        assert!((area - STRIPE_WIDTH * 8.0).abs() < 1e-2);
    }

    #[test]
    fn very_wide_rect_is_bounded() {
        let rect = Rect::new(0.0, 0.0, 2.0e8, 10.0);
        let path = stripe_path(rect);
        let count = path.polygons().len();
        assert_eq!(count, MAX_STRIPES);
        for p in path.points() {
            assert!(p.x >= -1e-3 && p.x <= rect.max_x(), "{p:?}");
            assert!(p.y >= -1e-3 && p.y <= 10.0 + 1e-3, "{p:?}");
        }
    }

    #[test]
    fn pattern_is_anchored_at_the_left_edge() {
        // A longer bar keeps the stripes of a shorter one in place
        let short = stripe_path(Rect::new(0.0, 0.0, 60.0, 10.0)).polygons();
        let long = stripe_path(Rect::new(0.0, 0.0, 120.0, 10.0)).polygons();
        let interior = short
            .iter()
            .find(|poly| poly.iter().all(|p| p.x > 12.0 && p.x < 48.0))
            .expect("an unclipped stripe");
        assert!(long.contains(interior));
    }

    #[test]
    fn empty_rect_has_no_stripes() {
        assert!(stripe_path(Rect::new(0.0, 0.0, 0.0, 10.0)).is_empty());
        assert!(stripe_path(Rect::new(0.0, 0.0, 10.0, -1.0)).is_empty());
    }

    #[test]
    fn striped_fill_carries_color_and_clip() {
        let rect = Rect::new(0.0, 0.0, 50.0, 12.0);
        let fill = striped_fill(rect, Color::WHITE);
        assert_eq!(fill.clip, rect);
        assert_eq!(fill.color, Color::WHITE);
        assert_eq!(fill.path, stripe_path(rect));
    }
}
