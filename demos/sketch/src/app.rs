use crate::scene::Scene;
use anyhow::Result;
use glint::error_continue;
use log::info;

pub struct Application {
    scene: Box<dyn Scene>,
    timestep: f32,
    frames: usize,
}

impl Application {
    pub fn new(scene: Box<dyn Scene>, frames: usize) -> Self {
        Self { scene, timestep: 1.0 / 60.0, frames }
    }

    /// Runs `frames` fixed steps and returns how many of them completed. A failing frame is logged and skipped.
    pub fn run(mut self) -> Result<usize> {
        self.scene.activation()?;
        info!("Running {} frames at {:.1} fps", self.frames, 1.0 / self.timestep);

        let mut completed = 0;
        for index in 0..self.frames {
            if let Err(err) = self.scene.frame(index, self.timestep) {
                error_continue!("Failed to process frame {} ({})", index, err);
            }

            completed += 1;
        }

        info!("{} of {} frames completed", completed, self.frames);
        self.scene.deactivation()?;

        Ok(completed)
    }
}
