use crate::error::GeometryError;
use crate::error::Result;
use glam::DVec2;
use std::f64::consts;

pub trait F64MathUtils {
    fn normalize_angle(&self) -> f64;
    fn ensure_finite(self, name: &str) -> Result<f64>;
}

pub trait DVec2MathUtils {
    fn angle_from(&self, origin: DVec2) -> f64;
    fn ensure_finite(self, name: &str) -> Result<DVec2>;
}

impl F64MathUtils for f64 {
    fn normalize_angle(&self) -> f64 {
        let angle = self.rem_euclid(consts::TAU);

        if angle > consts::PI {
            angle - consts::TAU
        } else {
            angle
        }
    }

    fn ensure_finite(self, name: &str) -> Result<f64> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(GeometryError::InvalidGeometry(format!("{} is not finite ({})", name, self)))
        }
    }
}

impl DVec2MathUtils for DVec2 {
    fn angle_from(&self, origin: DVec2) -> f64 {
        let d = *self - origin;
        d.y.atan2(d.x)
    }

    fn ensure_finite(self, name: &str) -> Result<DVec2> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(GeometryError::InvalidGeometry(format!("{} is not finite ({}, {})", name, self.x, self.y)))
        }
    }
}

/// Angular interval `(from, to)` in radians covered by `points` as seen from `origin`, measured
/// relative to the first point so that spans crossing the -PI/PI seam stay contiguous. Only
/// meaningful when the points lie within a half-turn of each other, which holds for any convex
/// shape not containing the origin.
pub fn angular_span(origin: DVec2, points: &[DVec2]) -> Option<(f64, f64)> {
    let first = points.first()?.angle_from(origin);
    let mut min = 0.0f64;
    let mut max = 0.0f64;

    for point in &points[1..] {
        let relative = (point.angle_from(origin) - first).normalize_angle();
        min = min.min(relative);
        max = max.max(relative);
    }

    Some((first + min, first + max))
}
