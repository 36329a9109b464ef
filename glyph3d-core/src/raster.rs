/// Software rasterizer over any [`Surface`]
///
/// All operations are best-effort: cells outside the grid are dropped,
/// never reported.
use crate::color::Attr;
use crate::surface::{Cell, Surface};
use nalgebra::{Point2, Vector2};

/// Row and column limits for [`Canvas::fill_scanline`].
///
/// `None` means the viewport edge: `0` for the minimums, `height`/`width`
/// for the maximums.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanBounds {
    pub y_min: Option<i32>,
    pub y_max: Option<i32>,
    pub x_min: Option<i32>,
    pub x_max: Option<i32>,
}

impl ScanBounds {
    pub fn viewport() -> Self {
        Self::default()
    }
}

/// Polygon edge with rounded endpoints
#[derive(Debug, Clone, Copy)]
struct ScanEdge {
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    dx_dy: f64,
}

impl ScanEdge {
    fn new(from: &Point2<f32>, to: &Point2<f32>) -> Self {
        let (x1, y1) = round_cell(from);
        let (x2, y2) = round_cell(to);
        // endpoints may sit anywhere in i32, so the deltas are taken in i64
        let dy = (i64::from(y2) - i64::from(y1)) as f64;
        let dx = (i64::from(x2) - i64::from(x1)) as f64;
        let dx_dy = if y2 == y1 { 0.0 } else { dx / dy };
        Self {
            x1,
            y1,
            x2,
            y2,
            dx_dy,
        }
    }

    /// Push this edge's intersections with row `y`
    fn intersect(&self, y: i32, out: &mut Vec<i32>) {
        if (self.y1 >= y && self.y2 < y) || (self.y1 < y && self.y2 >= y) {
            let rise = (i64::from(y) - i64::from(self.y1)) as f64;
            out.push((f64::from(self.x1) + self.dx_dy * rise) as i32);
        } else if self.y1 == y && self.y2 == y {
            out.push(self.x1);
            out.push(self.x2);
        }
    }
}

fn round_cell(p: &Point2<f32>) -> (i32, i32) {
    (p.x.round() as i32, p.y.round() as i32)
}

/// Minor-axis offset of Bresenham step `step`: the number of times the
/// error term has crossed zero before it. Closed form of the incremental
/// walk, so a line can start at any step.
fn minor_offset(step: i64, major: i64, minor: i64) -> i64 {
    if major == 0 {
        return 0;
    }
    let (step, major, minor) = (i128::from(step), i128::from(major), i128::from(minor));
    ((2 * minor * step + major) / (2 * major)) as i64
}

/// Drawing operations, available on every [`Surface`]
pub trait Canvas: Surface {
    /// Write one cell if it lies inside the grid
    fn draw_cell(&mut self, x: i32, y: i32, glyph: char, color: Attr) {
        if self.contains(x, y) {
            self.set(x, y, Cell::new(glyph, color));
        }
    }

    /// Bresenham line, both endpoints inclusive.
    ///
    /// Endpoints are put in lexicographic order first so that swapping them
    /// yields the same cells. Only the steps whose major-axis coordinate lies
    /// inside the grid are walked, so the cost is bounded by the grid size
    /// whatever the endpoints.
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, glyph: char, color: Attr) {
        let ((x1, y1), (x2, y2)) = if (x1, y1) <= (x2, y2) {
            ((x1, y1), (x2, y2))
        } else {
            ((x2, y2), (x1, y1))
        };
        let (x1, y1, x2, y2) = (i64::from(x1), i64::from(y1), i64::from(x2), i64::from(y2));

        let sign_x = if x2 > x1 { 1 } else { -1 };
        let sign_y = if y2 > y1 { 1 } else { -1 };
        let delta_x = (x2 - x1).abs();
        let delta_y = (y2 - y1).abs();
        let x_major = delta_x >= delta_y;

        let (major, minor, start, sign, limit) = if x_major {
            (delta_x, delta_y, x1, sign_x, i64::from(self.width()))
        } else {
            (delta_y, delta_x, y1, sign_y, i64::from(self.height()))
        };
        let (first, last) = if sign > 0 {
            ((-start).max(0), major.min(limit - 1 - start))
        } else {
            ((start - (limit - 1)).max(0), major.min(start))
        };

        for step in first..=last {
            let offset = minor_offset(step, major, minor);
            let (x, y) = if x_major {
                (x1 + sign_x * step, y1 + sign_y * offset)
            } else {
                (x1 + sign_x * offset, y1 + sign_y * step)
            };
            // both coordinates lie between the endpoints, so they fit in i32
            self.draw_cell(x as i32, y as i32, glyph, color);
        }
    }

    /// Closed outline through `points`, rounded to cells
    fn draw_polygon(&mut self, points: &[Point2<f32>], glyph: char, color: Attr) {
        let Some(first) = points.first() else {
            return;
        };
        let closing = std::iter::once((points[points.len() - 1], *first));
        for (a, b) in points.windows(2).map(|w| (w[0], w[1])).chain(closing) {
            let (x1, y1) = round_cell(&a);
            let (x2, y2) = round_cell(&b);
            self.draw_line(x1, y1, x2, y2, glyph, color);
        }
    }

    /// Inclusive rectangle, each corner clamped into the grid
    fn fill_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, glyph: char, color: Attr) {
        let (x1, y1) = self.clamp(x1, y1);
        let (x2, y2) = self.clamp(x2, y2);
        for x in x1..=x2 {
            for y in y1..=y2 {
                self.draw_cell(x, y, glyph, color);
            }
        }
    }

    /// Clamp a coordinate pair to the last valid cell
    fn clamp(&self, x: i32, y: i32) -> (i32, i32) {
        (
            x.clamp(0, (self.width() - 1).max(0)),
            y.clamp(0, (self.height() - 1).max(0)),
        )
    }

    /// Scanline polygon fill.
    ///
    /// Rows run over `[max(minY, y_min), min(maxY, y_max))`; the bottom-most
    /// vertex row is never filled. Intersections on each row are sorted and
    /// consecutive pairs are drawn as spans clamped to `[x_min, x_max]`;
    /// spans outside that range are skipped.
    fn fill_scanline(
        &mut self,
        points: &[Point2<f32>],
        glyph: char,
        color: Attr,
        bounds: ScanBounds,
    ) {
        if points.is_empty() {
            return;
        }

        let edges: Vec<ScanEdge> = points
            .iter()
            .zip(points.iter().cycle().skip(1))
            .map(|(a, b)| ScanEdge::new(a, b))
            .collect();

        let min_y = edges.iter().map(|e| e.y2).min().unwrap_or(0);
        let max_y = edges.iter().map(|e| e.y2).max().unwrap_or(0);

        let y_min = bounds.y_min.unwrap_or(0);
        let y_max = bounds.y_max.unwrap_or(self.height());
        let x_min = bounds.x_min.unwrap_or(0);
        let x_max = bounds.x_max.unwrap_or(self.width());

        let mut crossings = Vec::with_capacity(edges.len() * 2);
        for y in min_y.max(y_min)..max_y.min(y_max) {
            crossings.clear();
            for edge in &edges {
                edge.intersect(y, &mut crossings);
            }
            crossings.sort_unstable();

            for span in crossings.chunks_exact(2) {
                let x1 = span[0].max(x_min);
                let x2 = span[1].min(x_max);
                // span lies wholly outside the column range
                if x1 > x2 {
                    continue;
                }
                self.draw_line(x1, y, x2, y, glyph, color);
            }
        }
    }

    /// Seeded flood fill of the region around the polygon's centroid.
    ///
    /// The outline must already be drawn in `edge_color`. When the centroid
    /// is off-grid it is pulled towards the on-grid vertices. The fill grows
    /// 4-connected from the seed and stops at cells holding `edge_color` or
    /// `color`, and at the grid border.
    fn flood_fill(&mut self, points: &[Point2<f32>], glyph: char, color: Attr, edge_color: Attr) {
        if points.is_empty() {
            return;
        }
        let (w, h) = (self.width() as f32, self.height() as f32);

        let sum = points
            .iter()
            .fold(Vector2::zeros(), |acc: Vector2<f32>, p| acc + p.coords);
        let mut center = (sum / points.len() as f32).map(f32::round);

        if center.x <= 0.0 || center.x >= w || center.y <= 0.0 || center.y >= h {
            let on_grid = points
                .iter()
                .filter(|p| p.x >= 0.0 && p.x < w && p.y >= 0.0 && p.y < h);
            let (visible_sum, count) = on_grid.fold((center, 1usize), |(acc, n), p| {
                (acc + p.coords, n + 1)
            });
            center = visible_sum / count as f32;
        }

        if !(center.x >= 0.0 && center.x < w && center.y >= 0.0 && center.y < h) {
            return;
        }
        let seed = (center.x as i32, center.y as i32);

        let fillable = |grid: &Self, x: i32, y: i32| {
            grid.get(x, y)
                .map_or(false, |c| c.color != edge_color && c.color != color)
        };
        if !fillable(self, seed.0, seed.1) {
            return;
        }

        let width = self.width();
        let mut visited = vec![false; (self.width() * self.height()) as usize];
        let mut stack = vec![seed];
        visited[(seed.1 * width + seed.0) as usize] = true;

        while let Some((x, y)) = stack.pop() {
            self.draw_cell(x, y, glyph, color);
            for (nx, ny) in [(x, y - 1), (x, y + 1), (x - 1, y), (x + 1, y)] {
                if !self.contains(nx, ny) {
                    continue;
                }
                let i = (ny * width + nx) as usize;
                if !visited[i] && fillable(self, nx, ny) {
                    visited[i] = true;
                    stack.push((nx, ny));
                }
            }
        }
    }

    /// Draw the one-cell border of the grid
    fn outline_viewport(&mut self, glyph: char, color: Attr) {
        let (right, bottom) = (self.width() - 1, self.height() - 1);
        if right < 0 || bottom < 0 {
            return;
        }
        self.draw_line(0, 0, right, 0, glyph, color);
        self.draw_line(0, 0, 0, bottom, glyph, color);
        self.draw_line(right, 0, right, bottom, glyph, color);
        self.draw_line(0, bottom, right, bottom, glyph, color);
    }
}

impl<S: Surface + ?Sized> Canvas for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::glyph;
    use crate::surface::CharGrid;
    use quickcheck_macros::quickcheck;
    use std::collections::BTreeSet;

    const INK: Attr = Attr::FG_WHITE;
    const EDGE: Attr = Attr::FG_YELLOW;
    const FILL: Attr = Attr::FG_RED;

    fn painted(grid: &CharGrid, color: Attr) -> BTreeSet<(i32, i32)> {
        let mut cells = BTreeSet::new();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if grid.get(x, y).map(|c| c.color) == Some(color) {
                    cells.insert((x, y));
                }
            }
        }
        cells
    }

    fn square(x1: f32, y1: f32, x2: f32, y2: f32) -> Vec<Point2<f32>> {
        vec![
            Point2::new(x1, y1),
            Point2::new(x2, y1),
            Point2::new(x2, y2),
            Point2::new(x1, y2),
        ]
    }

    #[test]
    fn test_draw_cell_ignores_out_of_range() {
        let mut grid = CharGrid::new(5, 5);
        grid.draw_cell(-1, 2, glyph::SOLID, INK);
        grid.draw_cell(2, 5, glyph::SOLID, INK);
        grid.draw_cell(2, 2, glyph::SOLID, INK);
        assert_eq!(painted(&grid, INK), BTreeSet::from([(2, 2)]));
    }

    #[test]
    fn test_horizontal_line_is_inclusive() {
        let mut grid = CharGrid::new(10, 3);
        grid.draw_line(0, 0, 5, 0, glyph::SOLID, INK);
        let expected: BTreeSet<_> = (0..=5).map(|x| (x, 0)).collect();
        assert_eq!(painted(&grid, INK), expected);
    }

    #[test]
    fn test_steep_line() {
        let mut grid = CharGrid::new(10, 10);
        grid.draw_line(1, 0, 3, 8, glyph::SOLID, INK);
        let cells = painted(&grid, INK);
        assert_eq!(cells.len(), 9);
        // exactly one cell per row
        for y in 0..=8 {
            assert_eq!(cells.iter().filter(|c| c.1 == y).count(), 1);
        }
    }

    #[test]
    fn test_tie_break_is_symmetric() {
        let mut forward = CharGrid::new(5, 5);
        let mut backward = CharGrid::new(5, 5);
        forward.draw_line(0, 0, 2, 1, glyph::SOLID, INK);
        backward.draw_line(2, 1, 0, 0, glyph::SOLID, INK);
        assert_eq!(painted(&forward, INK), painted(&backward, INK));
    }

    #[test]
    fn test_line_clipped_at_border() {
        let mut grid = CharGrid::new(4, 4);
        grid.draw_line(-3, 1, 10, 1, glyph::SOLID, INK);
        let expected: BTreeSet<_> = (0..4).map(|x| (x, 1)).collect();
        assert_eq!(painted(&grid, INK), expected);
    }

    #[quickcheck]
    fn prop_line_endpoint_symmetry(x1: i8, y1: i8, x2: i8, y2: i8) -> bool {
        let wrap = |v: i8| (v as i32).rem_euclid(40);
        let (x1, y1, x2, y2) = (wrap(x1), wrap(y1), wrap(x2), wrap(y2));
        let mut forward = CharGrid::new(40, 40);
        let mut backward = CharGrid::new(40, 40);
        forward.draw_line(x1, y1, x2, y2, glyph::SOLID, INK);
        backward.draw_line(x2, y2, x1, y1, glyph::SOLID, INK);
        let cells = painted(&forward, INK);
        cells == painted(&backward, INK) && cells.contains(&(x1, y1)) && cells.contains(&(x2, y2))
    }

    /// Incremental Bresenham over every step, canonical endpoint order
    fn stepped_line(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<(i32, i32)> {
        let ((x1, y1), (x2, y2)) = if (x1, y1) <= (x2, y2) {
            ((x1, y1), (x2, y2))
        } else {
            ((x2, y2), (x1, y1))
        };
        let sign_x = if x2 > x1 { 1 } else { -1 };
        let sign_y = if y2 > y1 { 1 } else { -1 };
        let (dx, dy) = ((x2 - x1).abs(), (y2 - y1).abs());
        let (mut x, mut y) = (x1, y1);
        let mut cells = Vec::new();
        if dx >= dy {
            let mut balance = 2 * dy - dx;
            while x != x2 {
                cells.push((x, y));
                if balance >= 0 {
                    y += sign_y;
                    balance -= 2 * dx;
                }
                balance += 2 * dy;
                x += sign_x;
            }
        } else {
            let mut balance = 2 * dx - dy;
            while y != y2 {
                cells.push((x, y));
                if balance >= 0 {
                    x += sign_x;
                    balance -= 2 * dy;
                }
                balance += 2 * dx;
                y += sign_y;
            }
        }
        cells.push((x, y));
        cells
    }

    #[quickcheck]
    fn prop_clipped_walk_matches_stepped_line(x1: i8, y1: i8, x2: i8, y2: i8) -> bool {
        // endpoints well outside a 12 x 9 grid on every side
        let (x1, y1, x2, y2) = (x1 as i32 / 4, y1 as i32 / 4, x2 as i32 / 4, y2 as i32 / 4);
        let mut grid = CharGrid::new(12, 9);
        grid.draw_line(x1, y1, x2, y2, glyph::SOLID, INK);
        let expected: BTreeSet<_> = stepped_line(x1, y1, x2, y2)
            .into_iter()
            .filter(|&(x, y)| grid.contains(x, y))
            .collect();
        painted(&grid, INK) == expected
    }

    #[test]
    fn test_line_with_extreme_endpoints() {
        let mut grid = CharGrid::new(8, 4);
        grid.draw_line(i32::MIN + 10, 2, i32::MAX - 10, 2, glyph::SOLID, INK);
        let expected: BTreeSet<_> = (0..8).map(|x| (x, 2)).collect();
        assert_eq!(painted(&grid, INK), expected);

        let mut grid = CharGrid::new(4, 4);
        grid.draw_line(i32::MAX, i32::MAX, i32::MIN, i32::MIN, glyph::SOLID, INK);
        let diagonal: BTreeSet<_> = (0..4).map(|i| (i, i)).collect();
        assert_eq!(painted(&grid, INK), diagonal);
    }

    #[test]
    fn test_line_missing_the_grid() {
        let mut grid = CharGrid::new(4, 4);
        grid.draw_line(-50, -3, 50, -1, glyph::SOLID, INK);
        grid.draw_line(10, -20, 12, 40, glyph::SOLID, INK);
        assert_eq!(grid.count_color(INK), 0);
    }

    #[test]
    fn test_polygon_outline_closes() {
        let mut grid = CharGrid::new(8, 8);
        grid.draw_polygon(&square(1.0, 1.0, 4.0, 4.0), glyph::SOLID, EDGE);
        let cells = painted(&grid, EDGE);
        assert_eq!(cells.len(), 12);
        // closing edge from (1,4) back to (1,1)
        assert!((1..=4).all(|y| cells.contains(&(1, y))));
        assert!(!cells.contains(&(2, 2)));
    }

    #[test]
    fn test_polygon_with_no_points() {
        let mut grid = CharGrid::new(4, 4);
        let before = grid.clone();
        grid.draw_polygon(&[], glyph::SOLID, EDGE);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_fill_rect_clamps_corners() {
        let mut grid = CharGrid::new(6, 4);
        grid.fill_rect(-5, 2, 100, 100, glyph::SOLID, INK);
        assert_eq!(grid.count_color(INK), 6 * 2);
        assert!(painted(&grid, INK).iter().all(|&(_, y)| y >= 2));
    }

    #[test]
    fn test_fill_rect_whole_grid() {
        let mut grid = CharGrid::new(6, 4);
        grid.fill_rect(0, 0, 6, 4, glyph::SOLID, INK);
        assert_eq!(grid.count_color(INK), 24);
    }

    #[test]
    fn test_scanline_square() {
        let mut grid = CharGrid::new(10, 10);
        grid.fill_scanline(&square(2.0, 2.0, 6.0, 6.0), glyph::SOLID, FILL, ScanBounds::viewport());
        let cells = painted(&grid, FILL);
        for y in 2..6 {
            let row: Vec<_> = cells.iter().filter(|c| c.1 == y).map(|c| c.0).collect();
            assert_eq!(row, (2..=6).collect::<Vec<_>>(), "row {y}");
        }
        // bottom vertex row is exclusive
        assert!(cells.iter().all(|&(x, y)| (2..6).contains(&y) && (2..=6).contains(&x)));
        assert_eq!(cells.len(), 4 * 5);
    }

    #[test]
    fn test_scanline_triangle() {
        let mut grid = CharGrid::new(12, 12);
        let tri = [Point2::new(0.0, 0.0), Point2::new(8.0, 8.0), Point2::new(0.0, 8.0)];
        grid.fill_scanline(&tri, glyph::SOLID, FILL, ScanBounds::viewport());
        let cells = painted(&grid, FILL);
        // row y spans x in [0, y]
        for y in 1..8 {
            let row: Vec<_> = cells.iter().filter(|c| c.1 == y).map(|c| c.0).collect();
            assert_eq!(row, (0..=y).collect::<Vec<_>>(), "row {y}");
        }
    }

    #[test]
    fn test_scanline_respects_bounds() {
        let mut grid = CharGrid::new(10, 10);
        let bounds = ScanBounds {
            y_min: Some(3),
            y_max: Some(5),
            x_min: Some(4),
            x_max: Some(5),
        };
        grid.fill_scanline(&square(2.0, 2.0, 6.0, 6.0), glyph::SOLID, FILL, bounds);
        assert_eq!(
            painted(&grid, FILL),
            BTreeSet::from([(4, 3), (5, 3), (4, 4), (5, 4)])
        );
    }

    #[test]
    fn test_scanline_skips_spans_outside_columns() {
        let mut grid = CharGrid::new(12, 10);
        let right_of_square = ScanBounds {
            x_min: Some(10),
            ..ScanBounds::viewport()
        };
        grid.fill_scanline(&square(2.0, 2.0, 6.0, 6.0), glyph::SOLID, FILL, right_of_square);
        assert_eq!(grid.count_color(FILL), 0);

        // left of the grid with viewport bounds; column 0 stays untouched
        let left_of_grid = square(-30.0, 2.0, -5.0, 6.0);
        grid.fill_scanline(&left_of_grid, glyph::SOLID, FILL, ScanBounds::viewport());
        assert_eq!(grid.count_color(FILL), 0);
    }

    #[test]
    fn test_scanline_with_saturated_vertices() {
        let mut grid = CharGrid::new(10, 6);
        let huge = [
            Point2::new(-2.0e10, 0.0),
            Point2::new(2.0e10, 5.0),
            Point2::new(0.0, -2.0e10),
        ];
        grid.fill_scanline(&huge, glyph::SOLID, FILL, ScanBounds::viewport());
        assert!(grid.count_color(FILL) > 0);
        assert!(grid.count_color(FILL) <= 60);
    }

    #[test]
    fn test_scanline_off_grid_polygon() {
        let mut grid = CharGrid::new(6, 6);
        let covering = square(-10.0, -10.0, 20.0, 20.0);
        grid.fill_scanline(&covering, glyph::SOLID, FILL, ScanBounds::viewport());
        assert_eq!(grid.count_color(FILL), 36);
    }

    #[test]
    fn test_flood_fill_inside_outline() {
        let mut grid = CharGrid::new(12, 12);
        let poly = square(2.0, 2.0, 8.0, 7.0);
        grid.draw_polygon(&poly, glyph::SOLID, EDGE);
        grid.flood_fill(&poly, glyph::SOLID, FILL, EDGE);
        let inside: BTreeSet<_> = (3..8).flat_map(|x| (3..7).map(move |y| (x, y))).collect();
        assert_eq!(painted(&grid, FILL), inside);
    }

    #[test]
    fn test_flood_fill_skips_painted_seed() {
        let mut grid = CharGrid::new(12, 12);
        let poly = square(2.0, 2.0, 8.0, 8.0);
        grid.draw_polygon(&poly, glyph::SOLID, EDGE);
        grid.draw_cell(5, 5, glyph::SOLID, FILL);
        grid.flood_fill(&poly, glyph::SOLID, FILL, EDGE);
        assert_eq!(grid.count_color(FILL), 1);
    }

    #[test]
    fn test_flood_fill_off_grid_centroid_uses_visible_vertices() {
        let mut grid = CharGrid::new(10, 10);
        // centroid (-8, 4) is off-grid and no vertex is on-grid to pull it back
        let far = [Point2::new(-20.0, 4.0), Point2::new(-8.0, -4.0), Point2::new(4.0, 12.0)];
        grid.flood_fill(&far, glyph::SOLID, FILL, EDGE);
        assert_eq!(grid.count_color(FILL), 0);

        // centroid (0, 4) sits on the border; averaging it with the on-grid
        // vertices (2, 4) and (4, 8) moves the seed to (2, 5)
        let edge = [Point2::new(-6.0, 0.0), Point2::new(2.0, 4.0), Point2::new(4.0, 8.0)];
        grid.outline_viewport(glyph::SOLID, EDGE);
        grid.flood_fill(&edge, glyph::SOLID, FILL, EDGE);
        assert_eq!(grid.count_color(FILL), 8 * 8);
    }

    #[test]
    fn test_flood_fill_open_grid_is_bounded_by_border() {
        let mut grid = CharGrid::new(7, 5);
        grid.flood_fill(&[Point2::new(3.0, 2.0)], glyph::SOLID, FILL, EDGE);
        assert_eq!(grid.count_color(FILL), 35);
    }

    #[test]
    fn test_flood_fill_large_region_terminates() {
        let mut grid = CharGrid::new(400, 300);
        grid.flood_fill(&[Point2::new(200.0, 150.0)], glyph::SOLID, FILL, EDGE);
        assert_eq!(grid.count_color(FILL), 400 * 300);
    }

    #[quickcheck]
    fn prop_flood_fill_stays_inside_rectangle(x1: u8, y1: u8, w: u8, h: u8) -> bool {
        let (x1, y1) = (x1 as f32 % 20.0, y1 as f32 % 20.0);
        let (x2, y2) = (x1 + 2.0 + w as f32 % 15.0, y1 + 2.0 + h as f32 % 15.0);
        let mut grid = CharGrid::new(40, 40);
        let poly = square(x1, y1, x2, y2);
        grid.draw_polygon(&poly, glyph::SOLID, EDGE);
        grid.flood_fill(&poly, glyph::SOLID, FILL, EDGE);
        painted(&grid, FILL)
            .iter()
            .all(|&(x, y)| x > x1 as i32 && x < x2 as i32 && y > y1 as i32 && y < y2 as i32)
    }

    #[test]
    fn test_outline_viewport() {
        let mut grid = CharGrid::new(5, 4);
        grid.outline_viewport(glyph::SOLID, EDGE);
        assert_eq!(grid.count_color(EDGE), 2 * 5 + 2 * 2);
        assert_ne!(grid.get(2, 2).map(|c| c.color), Some(EDGE));
    }
}
