use crate::error::GeometryError;
use crate::error::Result;
use crate::obstacle::CollisionMode;
use glam::DVec2;

pub mod emitter;

/// Upper limit on rays per emitter, a step of 0.001 degrees.
pub const MAX_RAYS: usize = 360_000;

/// Segment drawn for a single ray, from the emitter origin to the nearest obstacle crossing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hit {
    pub from: DVec2,
    pub to: DVec2,
}

impl Hit {
    pub fn new(from: DVec2, to: DVec2) -> Self {
        Self { from, to }
    }

    pub fn length(&self) -> f64 {
        self.from.distance(self.to)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EmitterSettings {
    /// Angular increment between neighbouring rays, in degrees.
    pub step_degrees: f64,
    pub mode: CollisionMode,
}

impl EmitterSettings {
    pub fn new(step_degrees: f64, mode: CollisionMode) -> Self {
        Self { step_degrees, mode }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.step_degrees.is_finite() || self.step_degrees <= 0.0 || self.step_degrees > 360.0 {
            return Err(GeometryError::InvalidGeometry(format!("ray step {} is outside (0, 360] degrees", self.step_degrees)));
        }

        if self.ray_count() > MAX_RAYS {
            return Err(GeometryError::InvalidGeometry(format!(
                "ray step {} gives {} rays, more than {}",
                self.step_degrees,
                self.ray_count(),
                MAX_RAYS
            )));
        }

        Ok(())
    }

    /// Number of rays in a full turn, `floor(360 / step)`.
    pub fn ray_count(&self) -> usize {
        (360.0 / self.step_degrees).floor() as usize
    }
}

impl Default for EmitterSettings {
    fn default() -> Self {
        Self { step_degrees: 1.0, mode: CollisionMode::Diagonal }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_settings_cast_one_ray_per_degree() {
        let settings = EmitterSettings::default();

        assert!(settings.validate().is_ok());
        assert_eq!(settings.ray_count(), 360);
        assert_eq!(settings.mode, CollisionMode::Diagonal);
    }

    #[test]
    fn uneven_steps_round_down() {
        assert_eq!(EmitterSettings::new(7.0, CollisionMode::Diagonal).ray_count(), 51);
        assert_eq!(EmitterSettings::new(360.0, CollisionMode::Edges).ray_count(), 1);
        assert_eq!(EmitterSettings::new(0.5, CollisionMode::Edges).ray_count(), 720);
    }

    #[test]
    fn unusable_steps_are_rejected() {
        for step in [0.0, -1.0, 360.5, f64::NAN, f64::INFINITY, 1e-12, f64::MIN_POSITIVE] {
            assert!(matches!(EmitterSettings::new(step, CollisionMode::Diagonal).validate(), Err(GeometryError::InvalidGeometry(_))));
        }
    }

    #[test]
    fn finest_allowed_step_is_accepted() {
        let settings = EmitterSettings::new(0.001, CollisionMode::Diagonal);

        assert!(settings.validate().is_ok());
        assert!(settings.ray_count() <= MAX_RAYS);
    }

    #[test]
    fn hit_length() {
        let hit = Hit::new(DVec2::new(1.0, 1.0), DVec2::new(4.0, 5.0));
        assert_relative_eq!(hit.length(), 5.0);
    }
}
