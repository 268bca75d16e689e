//! Pure chart geometry: axis ticks, scales and SVG path builders.

use std::fmt::Write;

/// Axis steps are one of these times a power of ten.
const NICE_FACTORS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Zero-based y ticks covering `max` with roughly `target` ticks.
pub fn nice_ticks(max: f64, target: usize) -> Vec<f64> {
    if !(max > 0.0) || target < 2 {
        return vec![0.0, 1.0];
    }
    let step = nice_step(max / (target - 1) as f64);
    let steps = (max / step).ceil() as usize;
    (0..=steps).map(|i| i as f64 * step).collect()
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    NICE_FACTORS
        .iter()
        .map(|factor| factor * magnitude)
        .find(|candidate| *candidate >= raw)
        .unwrap_or(10.0 * magnitude)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Linear mapping from a data domain onto a pixel range.
///
/// The range may be inverted (`range.0 > range.1`) for y axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 {
            return self.range.0;
        }
        let t = (value - self.domain.0) / span;
        self.range.0 + t * (self.range.1 - self.range.0)
    }
}

/// Evenly spaced points from edge to edge of the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointScale {
    pub count: usize,
    pub range: (f64, f64),
}

impl PointScale {
    pub fn new(count: usize, range: (f64, f64)) -> Self {
        Self { count, range }
    }

    pub fn position(&self, index: usize) -> f64 {
        if self.count <= 1 {
            return (self.range.0 + self.range.1) / 2.0;
        }
        self.range.0 + self.step() * index as f64
    }

    /// Distance between neighbouring points.
    pub fn step(&self) -> f64 {
        if self.count <= 1 {
            self.range.1 - self.range.0
        } else {
            (self.range.1 - self.range.0) / (self.count - 1) as f64
        }
    }

    /// Horizontal slice of the range owned by `index`, for hover targets.
    pub fn hover_band(&self, index: usize) -> (f64, f64) {
        let half = self.step() / 2.0;
        let center = self.position(index);
        let start = (center - half).max(self.range.0);
        let end = (center + half).min(self.range.1);
        (start, end - start)
    }
}

/// Equal-width bands with proportional inner/outer padding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandScale {
    pub count: usize,
    pub range: (f64, f64),
    pub padding: f64,
}

impl BandScale {
    pub fn new(count: usize, range: (f64, f64)) -> Self {
        Self {
            count,
            range,
            padding: 0.1,
        }
    }

    /// Distance from one band start to the next.
    pub fn step(&self) -> f64 {
        let n = self.count.max(1) as f64;
        (self.range.1 - self.range.0) / (n - self.padding + 2.0 * self.padding)
    }

    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    pub fn start(&self, index: usize) -> f64 {
        self.range.0 + self.step() * (self.padding + index as f64)
    }

    pub fn center(&self, index: usize) -> f64 {
        self.start(index) + self.bandwidth() / 2.0
    }

    /// Full step around a band, including its share of the padding.
    pub fn hover_band(&self, index: usize) -> (f64, f64) {
        let step = self.step();
        (self.center(index) - step / 2.0, step)
    }
}

/// Monotone cubic curve through `points` (sorted by x).
///
/// Tangents follow Fritsch-Carlson, so the curve never leaves the y range of
/// two monotone neighbours.
pub fn monotone_path(points: &[Point]) -> String {
    let mut path = String::new();
    let Some(first) = points.first() else {
        return path;
    };
    let _ = write!(path, "M{:.2},{:.2}", first.x, first.y);
    if points.len() == 1 {
        return path;
    }
    if points.len() == 2 {
        let _ = write!(path, "L{:.2},{:.2}", points[1].x, points[1].y);
        return path;
    }
    append_monotone_segments(&mut path, points);
    path
}

fn append_monotone_segments(path: &mut String, points: &[Point]) {
    let tangents = monotone_tangents(points);
    for (window, t) in points.windows(2).zip(tangents.windows(2)) {
        let (p0, p1) = (window[0], window[1]);
        let dx = (p1.x - p0.x) / 3.0;
        let _ = write!(
            path,
            "C{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            p0.x + dx,
            p0.y + dx * t[0],
            p1.x - dx,
            p1.y - dx * t[1],
            p1.x,
            p1.y
        );
    }
}

fn monotone_tangents(points: &[Point]) -> Vec<f64> {
    let n = points.len();
    let mut tangents = vec![0.0; n];
    for i in 1..n - 1 {
        tangents[i] = interior_slope(points[i - 1], points[i], points[i + 1]);
    }
    tangents[0] = end_slope(points[0], points[1], tangents[1]);
    tangents[n - 1] = end_slope(points[n - 2], points[n - 1], tangents[n - 2]);
    tangents
}

fn interior_slope(p0: Point, p1: Point, p2: Point) -> f64 {
    let h0 = p1.x - p0.x;
    let h1 = p2.x - p1.x;
    let s0 = if h0 != 0.0 { (p1.y - p0.y) / h0 } else { 0.0 };
    let s1 = if h1 != 0.0 { (p2.y - p1.y) / h1 } else { 0.0 };
    if h0 + h1 == 0.0 {
        return 0.0;
    }
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let slope = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if slope.is_finite() {
        slope
    } else {
        0.0
    }
}

fn end_slope(p0: Point, p1: Point, neighbour: f64) -> f64 {
    let h = p1.x - p0.x;
    if h != 0.0 {
        (3.0 * (p1.y - p0.y) / h - neighbour) / 2.0
    } else {
        neighbour
    }
}

fn sign(value: f64) -> f64 {
    if value < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Monotone top edge closed straight down to `baseline`.
pub fn area_path(points: &[Point], baseline: f64) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    let mut path = monotone_path(points);
    let _ = write!(
        path,
        "L{:.2},{:.2}L{:.2},{:.2}Z",
        last.x, baseline, first.x, baseline
    );
    path
}

/// Bar rising from `y + height` to `y`, with its top corners rounded.
pub fn rounded_top_bar(x: f64, y: f64, width: f64, height: f64, radius: f64) -> String {
    let width = width.max(0.0);
    let height = height.max(0.0);
    let r = radius.min(width / 2.0).min(height).max(0.0);
    let bottom = y + height;
    format!(
        "M{x:.2},{bottom:.2}L{x:.2},{top_r:.2}A{r:.2},{r:.2},0,0,1,{left_r:.2},{y:.2}\
         L{right_r:.2},{y:.2}A{r:.2},{r:.2},0,0,1,{right:.2},{top_r:.2}L{right:.2},{bottom:.2}Z",
        top_r = y + r,
        left_r = x + r,
        right_r = x + width - r,
        right = x + width,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_ticks_cover_the_maximum() {
        assert_eq!(
            nice_ticks(67_000.0, 5),
            vec![0.0, 20_000.0, 40_000.0, 60_000.0, 80_000.0]
        );
        assert_eq!(nice_ticks(4_900.0, 5), vec![0.0, 2_000.0, 4_000.0, 6_000.0]);
        assert_eq!(
            nice_ticks(12_500.0, 5),
            vec![0.0, 5_000.0, 10_000.0, 15_000.0]
        );
    }

    #[test]
    fn nice_ticks_keep_exact_multiples() {
        assert_eq!(nice_ticks(100.0, 5), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn nice_ticks_degenerate_inputs() {
        assert_eq!(nice_ticks(0.0, 5), vec![0.0, 1.0]);
        assert_eq!(nice_ticks(-3.0, 5), vec![0.0, 1.0]);
        assert_eq!(nice_ticks(f64::NAN, 5), vec![0.0, 1.0]);
    }

    #[test]
    fn linear_scale_inverts_for_y_axis() {
        let scale = LinearScale::new((0.0, 100.0), (250.0, 10.0));
        assert_eq!(scale.map(0.0), 250.0);
        assert_eq!(scale.map(100.0), 10.0);
        assert_eq!(scale.map(50.0), 130.0);
    }

    #[test]
    fn point_scale_spans_edge_to_edge() {
        let scale = PointScale::new(6, (60.0, 560.0));
        assert_eq!(scale.position(0), 60.0);
        assert_eq!(scale.position(5), 560.0);
        assert_eq!(scale.step(), 100.0);
        assert_eq!(scale.hover_band(0), (60.0, 50.0));
        assert_eq!(scale.hover_band(2), (210.0, 100.0));
    }

    #[test]
    fn band_scale_stays_inside_range() {
        let scale = BandScale::new(5, (0.0, 510.0));
        assert!((scale.step() - 100.0).abs() < 1e-9);
        assert!((scale.bandwidth() - 90.0).abs() < 1e-9);
        assert!((scale.start(0) - 10.0).abs() < 1e-9);
        let last_end = scale.start(4) + scale.bandwidth();
        assert!((last_end - 500.0).abs() < 1e-9);
        assert!(last_end <= 510.0);
    }

    #[test]
    fn monotone_path_short_inputs() {
        assert_eq!(monotone_path(&[]), "");
        assert_eq!(monotone_path(&[Point::new(1.0, 2.0)]), "M1.00,2.00");
        assert_eq!(
            monotone_path(&[Point::new(0.0, 0.0), Point::new(10.0, 5.0)]),
            "M0.00,0.00L10.00,5.00"
        );
    }

    #[test]
    fn collinear_points_get_their_common_slope() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
        ];
        assert_eq!(monotone_tangents(&points), vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn local_extremum_gets_flat_tangent() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 5.0),
            Point::new(2.0, 0.0),
        ];
        assert_eq!(monotone_tangents(&points)[1], 0.0);
    }

    #[test]
    fn monotone_controls_never_overshoot() {
        let points: Vec<_> = [45.0, 52.0, 48.0, 61.0, 55.0, 67.0]
            .iter()
            .enumerate()
            .map(|(i, y)| Point::new(i as f64 * 10.0, *y))
            .collect();
        let tangents = monotone_tangents(&points);
        for (i, pair) in points.windows(2).enumerate() {
            let (p0, p1) = (pair[0], pair[1]);
            let dx = (p1.x - p0.x) / 3.0;
            let lo = p0.y.min(p1.y) - 1e-9;
            let hi = p0.y.max(p1.y) + 1e-9;
            let c1 = p0.y + dx * tangents[i];
            let c2 = p1.y - dx * tangents[i + 1];
            assert!((lo..=hi).contains(&c1), "segment {i} first control {c1}");
            assert!((lo..=hi).contains(&c2), "segment {i} second control {c2}");
        }
    }

    #[test]
    fn area_path_closes_on_baseline() {
        let path = area_path(
            &[Point::new(0.0, 10.0), Point::new(50.0, 20.0)],
            100.0,
        );
        assert_eq!(path, "M0.00,10.00L50.00,20.00L50.00,100.00L0.00,100.00Z");
        assert_eq!(area_path(&[], 100.0), "");
    }

    #[test]
    fn bar_radius_is_clamped() {
        let path = rounded_top_bar(0.0, 95.0, 40.0, 5.0, 8.0);
        assert!(path.starts_with("M0.00,100.00L0.00,100.00A5.00,5.00"));
        assert!(path.ends_with("L40.00,100.00Z"));
        let flat = rounded_top_bar(0.0, 100.0, 40.0, 0.0, 8.0);
        assert!(flat.contains("A0.00,0.00"));
    }
}
