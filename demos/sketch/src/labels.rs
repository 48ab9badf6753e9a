use anyhow::Result;
use glint::glam::DVec2;
use glint::obstacle::Obstacle;

pub const LABELS: [&str; 3] = ["works", "contact", "home"];

// Label anchors as fractions of the canvas size
const PLACEMENTS: [(f64, f64); 3] = [(0.2, 0.2), (0.8, 0.3), (0.5, 0.8)];

const GLYPH_ADVANCE: f64 = 0.55;
const LINE_HEIGHT: f64 = 0.75;

/// Fixed-advance approximation of the rendered text bounds.
pub fn measure_label(text: &str, font_size: f64) -> DVec2 {
    DVec2::new(text.chars().count() as f64 * GLYPH_ADVANCE * font_size, LINE_HEIGHT * font_size)
}

pub fn create_obstacles(canvas: DVec2, font_size: f64) -> Result<Vec<Obstacle>> {
    let mut obstacles = Vec::with_capacity(LABELS.len());

    for (label, (x, y)) in LABELS.iter().zip(PLACEMENTS) {
        let position = DVec2::new(canvas.x * x, canvas.y * y);
        obstacles.push(Obstacle::from_label_size(label, position, measure_label(label, font_size))?);
    }

    Ok(obstacles)
}
