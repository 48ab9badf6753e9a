use crate::dump::FrameSnapshot;
use crate::labels;
use crate::pointer::PointerPath;
use crate::presentation::HoverZone;
use crate::presentation::Presentation;
use crate::scene::Scene;
use crate::settings::SketchConfig;
use anyhow::Result;
use glint::glam::DVec2;
use glint::light::emitter::Emitter;
use glint::light::EmitterSettings;
use glint::light::Hit;
use glint::obstacle::Obstacle;
use glint::utils::math::angular_span;
use instant::Instant;
use log::debug;
use log::info;
use log::log_enabled;
use log::trace;
use log::Level;

const IMAGE_COUNT: usize = 7;

#[derive(Debug, Default)]
pub struct FrameStats {
    pub frames: usize,
    pub hovered_frames: usize,
    pub hits: usize,
    pub resolve_time: f32,
}

pub struct SketchScene {
    config: SketchConfig,
    emitter: Emitter,
    obstacles: Vec<Obstacle>,
    pointer: PointerPath,
    zone: HoverZone,
    presentation: Presentation,
    stats: FrameStats,

    hits: Vec<Hit>,
    last_snapshot: Option<FrameSnapshot>,
}

impl SketchScene {
    pub fn new(config: SketchConfig) -> Result<Self> {
        let canvas = DVec2::new(config.width, config.height);
        let center = canvas / 2.0;

        let obstacles = labels::create_obstacles(canvas, config.font_size)?;
        let emitter = Emitter::new(center, EmitterSettings::new(config.ray_step, config.collision))?;
        let pointer = PointerPath::new(center, DVec2::splat(config.hover_radius * 1.5), config.noise_speed, config.seed);
        let zone = HoverZone::new(center, config.hover_radius);
        let presentation = Presentation::new(IMAGE_COUNT, config.transition_speed);

        Ok(Self {
            config,
            emitter,
            obstacles,
            pointer,
            zone,
            presentation,
            stats: Default::default(),
            hits: Vec::new(),
            last_snapshot: None,
        })
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    pub fn last_snapshot(&self) -> Option<&FrameSnapshot> {
        self.last_snapshot.as_ref()
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    fn cast(&mut self, index: usize, pointer: DVec2) -> Result<()> {
        self.emitter.set_origin(pointer)?;

        let now = Instant::now();
        self.emitter.resolve_into(&self.obstacles, &mut self.hits);
        self.stats.resolve_time += now.elapsed().as_secs_f32();
        self.stats.hovered_frames += 1;
        self.stats.hits += self.hits.len();

        if log_enabled!(Level::Trace) {
            for obstacle in &self.obstacles {
                let segments = obstacle.segments(self.emitter.settings().mode);
                let points = segments.iter().flat_map(|p| [p.a, p.b]).collect::<Vec<DVec2>>();

                if let Some((from, to)) = angular_span(pointer, &points) {
                    trace!("Frame {}: \"{}\" spans {:.1} to {:.1} degrees", index, obstacle.label(), from.to_degrees(), to.to_degrees());
                }
            }
        }

        self.last_snapshot = Some(FrameSnapshot { frame: index, origin: pointer, hits: self.hits.clone() });
        Ok(())
    }
}

impl Scene for SketchScene {
    fn activation(&mut self) -> Result<()> {
        info!("Canvas {}x{}, {} rays, seed {}", self.config.width, self.config.height, self.emitter.len(), self.config.seed);

        for obstacle in &self.obstacles {
            let bounds = obstacle.bounds();
            debug!(
                "Obstacle \"{}\" at ({:.1}, {:.1}), {:.1}x{:.1}",
                obstacle.label(),
                obstacle.center().x,
                obstacle.center().y,
                bounds.width(),
                bounds.height()
            );
        }

        Ok(())
    }

    fn deactivation(&mut self) -> Result<()> {
        let average = if self.stats.hovered_frames > 0 { self.stats.resolve_time / self.stats.hovered_frames as f32 } else { 0.0 };
        info!(
            "{} frames, {} hovered, {} hits, average resolve {:.3} ms",
            self.stats.frames,
            self.stats.hovered_frames,
            self.stats.hits,
            average * 1000.0
        );

        if let Some(path) = &self.config.dump {
            match &self.last_snapshot {
                Some(snapshot) => {
                    snapshot.write(path, &self.obstacles)?;
                    info!("Frame {} written to {}", snapshot.frame, path);
                }
                None => info!("Pointer never entered the hover zone, nothing written to {}", path),
            }
        }

        Ok(())
    }

    fn frame(&mut self, index: usize, _: f32) -> Result<()> {
        self.stats.frames += 1;

        let pointer = self.pointer.advance();
        let hovered = self.zone.contains(pointer);
        self.presentation.update(hovered);

        // Outside the zone the rays are not cast at all
        if hovered {
            self.cast(index, pointer)?;
            let (current, next) = self.presentation.image_alphas();
            trace!("Frame {}: pointer ({:.1}, {:.1}), {} hits, image alphas {:.2}/{:.2}", index, pointer.x, pointer.y, self.hits.len(), current, next);
        }

        Ok(())
    }
}
