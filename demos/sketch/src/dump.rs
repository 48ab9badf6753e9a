use anyhow::anyhow;
use anyhow::Context;
use anyhow::Result;
use glint::glam::DVec2;
use glint::light::Hit;
use glint::obstacle::Obstacle;
use std::collections::HashMap;
use std::fs;
use tinyjson::JsonValue;

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameSnapshot {
    pub frame: usize,
    pub origin: DVec2,
    pub hits: Vec<Hit>,
}

impl FrameSnapshot {
    pub fn to_json(&self, obstacles: &[Obstacle]) -> JsonValue {
        let mut root = HashMap::new();
        root.insert("frame".to_string(), JsonValue::Number(self.frame as f64));
        root.insert("origin".to_string(), write_point(self.origin));
        root.insert("obstacles".to_string(), JsonValue::Array(obstacles.iter().map(write_obstacle).collect()));
        root.insert(
            "hits".to_string(),
            JsonValue::Array(
                self.hits
                    .iter()
                    .map(|p| JsonValue::Array(vec![p.from.x, p.from.y, p.to.x, p.to.y].into_iter().map(JsonValue::Number).collect()))
                    .collect(),
            ),
        );

        JsonValue::Object(root)
    }

    pub fn write(&self, path: &str, obstacles: &[Obstacle]) -> Result<()> {
        let content = self.to_json(obstacles).stringify().map_err(|err| anyhow!("Failed to serialize frame {} ({:?})", self.frame, err))?;
        fs::write(path, content).with_context(|| format!("Failed to write frame dump {}", path))
    }
}

fn write_point(point: DVec2) -> JsonValue {
    JsonValue::Array(vec![JsonValue::Number(point.x), JsonValue::Number(point.y)])
}

fn write_obstacle(obstacle: &Obstacle) -> JsonValue {
    let bounds = obstacle.bounds();
    let mut object = HashMap::new();

    object.insert("label".to_string(), JsonValue::String(obstacle.label().to_string()));
    object.insert("left".to_string(), JsonValue::Number(bounds.left));
    object.insert("right".to_string(), JsonValue::Number(bounds.right));
    object.insert("top".to_string(), JsonValue::Number(bounds.top));
    object.insert("bottom".to_string(), JsonValue::Number(bounds.bottom));

    JsonValue::Object(object)
}
