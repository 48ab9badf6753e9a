use crate::error::GeometryError;
use crate::error::Result;
use crate::geometry::Bounds;
use crate::geometry::Segment;
use crate::utils::math::DVec2MathUtils;
use crate::utils::math::F64MathUtils;
use arrayvec::ArrayVec;
use glam::DVec2;

/// How an obstacle is decomposed into segments for intersection tests.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CollisionMode {
    /// Single corner-to-corner segment from top-left to bottom-right.
    #[default]
    Diagonal,
    /// The four boundary edges.
    Edges,
}

/// Axis-aligned rectangle carrying a text label. The label is never inspected by the geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    label: String,
    center: DVec2,
    half_width: f64,
    half_height: f64,
}

impl Obstacle {
    pub fn new(label: &str, center: DVec2, half_width: f64, half_height: f64) -> Result<Self> {
        let center = center.ensure_finite("obstacle center")?;
        let half_width = half_width.ensure_finite("obstacle half width")?;
        let half_height = half_height.ensure_finite("obstacle half height")?;

        if half_width <= 0.0 || half_height <= 0.0 {
            return Err(GeometryError::InvalidGeometry(format!(
                "obstacle \"{}\" is degenerate ({} x {})",
                label,
                half_width * 2.0,
                half_height * 2.0
            )));
        }

        // Far from zero the corners can round onto each other
        let bounds = Bounds::from_center(center, half_width, half_height);
        if bounds.left >= bounds.right || bounds.top >= bounds.bottom {
            return Err(GeometryError::InvalidGeometry(format!(
                "obstacle \"{}\" collapses at ({}, {}), left {} right {} top {} bottom {}",
                label, center.x, center.y, bounds.left, bounds.right, bounds.top, bounds.bottom
            )));
        }

        Ok(Self { label: label.to_string(), center, half_width, half_height })
    }

    /// Builds an obstacle centered on `center` from a full measured label size.
    pub fn from_label_size(label: &str, center: DVec2, size: DVec2) -> Result<Self> {
        Self::new(label, center, size.x / 2.0, size.y / 2.0)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn half_size(&self) -> DVec2 {
        DVec2::new(self.half_width, self.half_height)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_center(self.center, self.half_width, self.half_height)
    }

    pub fn diagonal(&self) -> Segment {
        let bounds = self.bounds();
        Segment::new(bounds.top_left(), bounds.bottom_right())
    }

    pub fn edges(&self) -> [Segment; 4] {
        let bounds = self.bounds();
        let (a, b, c, d) = (bounds.top_left(), bounds.top_right(), bounds.bottom_right(), bounds.bottom_left());

        [Segment::new(a, b), Segment::new(d, c), Segment::new(a, d), Segment::new(b, c)]
    }

    pub fn segments(&self, mode: CollisionMode) -> ArrayVec<Segment, 4> {
        match mode {
            CollisionMode::Diagonal => {
                let mut segments = ArrayVec::new();
                segments.push(self.diagonal());
                segments
            }
            CollisionMode::Edges => ArrayVec::from(self.edges()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn bounds_follow_center_and_half_size() {
        let obstacle = Obstacle::new("works", DVec2::new(100.0, 50.0), 40.0, 12.0).unwrap();
        let bounds = obstacle.bounds();

        assert_eq!(obstacle.label(), "works");
        assert_relative_eq!(bounds.left, 60.0);
        assert_relative_eq!(bounds.right, 140.0);
        assert_relative_eq!(bounds.top, 38.0);
        assert_relative_eq!(bounds.bottom, 62.0);
    }

    #[test]
    fn label_size_is_split_around_center() {
        let obstacle = Obstacle::from_label_size("home", DVec2::new(0.0, 0.0), DVec2::new(80.0, 24.0)).unwrap();

        assert_eq!(obstacle.half_size(), DVec2::new(40.0, 12.0));
        assert_eq!(obstacle.bounds(), Bounds::new(-40.0, 40.0, -12.0, 12.0));
    }

    #[test]
    fn diagonal_runs_top_left_to_bottom_right() {
        let obstacle = Obstacle::new("contact", DVec2::new(10.0, 0.0), 1.0, 2.0).unwrap();
        let diagonal = obstacle.diagonal();

        assert_eq!(diagonal.a, DVec2::new(9.0, -2.0));
        assert_eq!(diagonal.b, DVec2::new(11.0, 2.0));
    }

    #[test]
    fn edges_cover_the_boundary() {
        let obstacle = Obstacle::new("box", DVec2::ZERO, 1.0, 1.0).unwrap();
        let edges = obstacle.edges();
        let perimeter: f64 = edges.iter().map(|p| p.length()).sum();

        assert_relative_eq!(perimeter, 8.0);
        for edge in &edges {
            assert!(edge.a.x == edge.b.x || edge.a.y == edge.b.y);
        }
    }

    #[test]
    fn segments_depend_on_mode() {
        let obstacle = Obstacle::new("box", DVec2::ZERO, 1.0, 1.0).unwrap();

        assert_eq!(obstacle.segments(CollisionMode::Diagonal).as_slice(), &[obstacle.diagonal()]);
        assert_eq!(obstacle.segments(CollisionMode::Edges).as_slice(), &obstacle.edges());
    }

    #[test]
    fn empty_label_is_accepted() {
        assert!(Obstacle::new("", DVec2::ZERO, 1.0, 1.0).is_ok());
    }

    #[test]
    fn degenerate_or_non_finite_input_is_rejected() {
        assert!(matches!(Obstacle::new("flat", DVec2::ZERO, 1.0, 0.0), Err(GeometryError::InvalidGeometry(_))));
        assert!(matches!(Obstacle::new("negative", DVec2::ZERO, -1.0, 1.0), Err(GeometryError::InvalidGeometry(_))));
        assert!(matches!(Obstacle::new("nan", DVec2::new(f64::NAN, 0.0), 1.0, 1.0), Err(GeometryError::InvalidGeometry(_))));
        assert!(matches!(Obstacle::new("inf", DVec2::ZERO, f64::INFINITY, 1.0), Err(GeometryError::InvalidGeometry(_))));
        assert!(matches!(Obstacle::new("far", DVec2::new(1e17, 0.0), 1.0, 1.0), Err(GeometryError::InvalidGeometry(_))));
        assert!(matches!(Obstacle::new("low", DVec2::new(0.0, -1e17), 1.0, 1.0), Err(GeometryError::InvalidGeometry(_))));
    }

    #[test]
    fn accepted_obstacles_have_ordered_bounds() {
        let obstacle = Obstacle::new("far", DVec2::new(1e6, -1e6), 1e-3, 1e-3).unwrap();
        let bounds = obstacle.bounds();

        assert!(bounds.left < bounds.right);
        assert!(bounds.top < bounds.bottom);
    }
}
