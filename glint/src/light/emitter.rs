use super::*;
use crate::obstacle::Obstacle;
use crate::ray::Ray;
use crate::utils::math::DVec2MathUtils;
use log::debug;
use log::trace;
use log::warn;

/// Fixed fan of rays anchored at a movable origin.
#[derive(Clone, Debug)]
pub struct Emitter {
    origin: DVec2,
    settings: EmitterSettings,

    // Anchored at zero, translated to the current origin when cast
    rays: Vec<Ray>,
}

impl Emitter {
    pub fn new(origin: DVec2, settings: EmitterSettings) -> Result<Self> {
        if let Err(err) = settings.validate() {
            warn!("Rejected emitter settings ({})", err);
            return Err(err);
        }

        let origin = origin.ensure_finite("emitter origin")?;
        let rays = (0..settings.ray_count())
            .map(|i| Ray::from_angle(DVec2::ZERO, (i as f64 * settings.step_degrees).to_radians()))
            .collect::<Result<Vec<Ray>>>()?;

        debug!("Emitter created with {} rays ({} degree step, {:?} collision)", rays.len(), settings.step_degrees, settings.mode);
        Ok(Self { origin, settings, rays })
    }

    pub fn set_origin(&mut self, origin: DVec2) -> Result<()> {
        self.origin = origin.ensure_finite("emitter origin")?;
        Ok(())
    }

    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    pub fn settings(&self) -> &EmitterSettings {
        &self.settings
    }

    pub fn len(&self) -> usize {
        self.rays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rays.is_empty()
    }

    /// Rays in ascending angle order, anchored at the current origin.
    pub fn rays(&self) -> impl Iterator<Item = Ray> + '_ {
        self.rays.iter().map(|p| p.with_origin(self.origin))
    }

    pub fn resolve(&self, obstacles: &[Obstacle]) -> Vec<Hit> {
        let mut hits = Vec::with_capacity(self.rays.len());
        self.resolve_into(obstacles, &mut hits);

        hits
    }

    /// Same as [`Emitter::resolve`], but writes into `hits` so the buffer can be reused across frames.
    pub fn resolve_into(&self, obstacles: &[Obstacle], hits: &mut Vec<Hit>) {
        hits.clear();

        for ray in self.rays() {
            let mut closest = None;
            let mut record = f64::INFINITY;

            for obstacle in obstacles {
                for segment in obstacle.segments(self.settings.mode) {
                    if let Some(point) = ray.intersect(&segment) {
                        // Strict comparison keeps the first obstacle on equal distances
                        let distance = self.origin.distance(point);
                        if distance < record {
                            record = distance;
                            closest = Some(point);
                        }
                    }
                }
            }

            if let Some(point) = closest {
                hits.push(Hit::new(self.origin, point));
            }
        }

        trace!("Resolved {} rays against {} obstacles, {} hits", self.rays.len(), obstacles.len(), hits.len());
    }
}
