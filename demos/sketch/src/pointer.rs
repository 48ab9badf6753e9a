use glint::glam::DVec2;
use noise::NoiseFn;
use noise::Perlin;

/// Coherent-noise wander standing in for the mouse, drifting around `center` by up to `amplitude`.
pub struct PointerPath {
    pub center: DVec2,
    pub amplitude: DVec2,
    pub speed: f64,

    noise: Perlin,
    offset: DVec2,
}

impl PointerPath {
    pub fn new(center: DVec2, amplitude: DVec2, speed: f64, seed: u32) -> Self {
        Self { center, amplitude, speed, noise: Perlin::new(seed), offset: DVec2::new(0.0, 1000.0) }
    }

    pub fn position(&self) -> DVec2 {
        let x = self.noise.get([self.offset.x, 0.0]);
        let y = self.noise.get([self.offset.y, 0.0]);

        self.center + DVec2::new(x, y).clamp(DVec2::NEG_ONE, DVec2::ONE) * self.amplitude
    }

    pub fn advance(&mut self) -> DVec2 {
        let position = self.position();
        self.offset += DVec2::splat(self.speed);

        position
    }
}
