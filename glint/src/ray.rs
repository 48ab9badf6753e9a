use crate::error::GeometryError;
use crate::error::Result;
use crate::geometry::Segment;
use crate::utils::math::DVec2MathUtils;
use glam::DVec2;

/// Half-line starting at `origin` and extending along `direction`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    origin: DVec2,
    direction: DVec2,
}

impl Ray {
    pub fn new(origin: DVec2, direction: DVec2) -> Result<Self> {
        let origin = origin.ensure_finite("ray origin")?;
        let direction = direction.ensure_finite("ray direction")?;

        if direction == DVec2::ZERO {
            return Err(GeometryError::InvalidGeometry("ray direction is zero".to_string()));
        }

        Ok(Self { origin, direction })
    }

    /// Unit ray at `angle` radians, counted from +X towards +Y.
    pub fn from_angle(origin: DVec2, angle: f64) -> Result<Self> {
        Self::new(origin, DVec2::from_angle(angle))
    }

    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    pub fn direction(&self) -> DVec2 {
        self.direction
    }

    pub fn at(&self, t: f64) -> DVec2 {
        self.origin + t * self.direction
    }

    pub fn with_origin(&self, origin: DVec2) -> Self {
        Self { origin, direction: self.direction }
    }

    /// Intersection with `segment`, excluding both endpoints and anything at or behind the origin.
    /// Parallel and collinear segments never intersect, the denominator is compared to exact zero.
    pub fn intersect(&self, segment: &Segment) -> Option<DVec2> {
        let (x1, y1) = (segment.a.x, segment.a.y);
        let (x2, y2) = (segment.b.x, segment.b.y);
        let (x3, y3) = (self.origin.x, self.origin.y);
        let (x4, y4) = (self.origin.x + self.direction.x, self.origin.y + self.direction.y);

        let den = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
        if den == 0.0 {
            return None;
        }

        // t runs along the segment, u along the ray
        let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / den;
        let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / den;

        if t > 0.0 && t < 1.0 && u > 0.0 {
            Some(DVec2::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1)))
        } else {
            None
        }
    }
}
