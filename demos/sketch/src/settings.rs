use crate::cli::Args;
use anyhow::anyhow;
use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use glint::obstacle::CollisionMode;
use log::warn;
use rustc_hash::FxHashMap;
use std::fs;
use std::str::FromStr;

const KNOWN_KEYS: [&str; 7] = ["ray_step", "hover_radius", "font_size", "transition_speed", "collision", "frames", "noise_speed"];

/// Flat `key=value` settings, one pair per line. Blank lines and `#` comments are skipped.
#[derive(Debug, Default)]
pub struct Settings {
    values: FxHashMap<String, String>,
}

impl Settings {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path).with_context(|| format!("Failed to read settings file {}", path))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut values = FxHashMap::default();

        for (index, line) in content.lines().map(|p| p.trim()).enumerate() {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (name, value) = line.split_once('=').ok_or_else(|| anyhow!("Invalid settings line {}: {}", index + 1, line))?;
            let name = name.trim();

            if name.is_empty() {
                bail!("Missing key on settings line {}", index + 1);
            }
            if !KNOWN_KEYS.contains(&name) {
                warn!("Ignoring unknown setting {}", name);
                continue;
            }

            values.insert(name.to_string(), value.trim().to_string());
        }

        Ok(Self { values })
    }

    pub fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: FromStr,
    {
        match self.values.get(key) {
            Some(value) => Ok(Some(value.parse().map_err(|_| anyhow!("Invalid value of setting {}: {}", key, value))?)),
            None => Ok(None),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SketchConfig {
    pub width: f64,
    pub height: f64,
    pub frames: usize,
    pub seed: u32,
    pub ray_step: f64,
    pub hover_radius: f64,
    pub font_size: f64,
    pub transition_speed: f64,
    pub noise_speed: f64,
    pub collision: CollisionMode,
    pub dump: Option<String>,
}

impl SketchConfig {
    pub fn new(args: &Args) -> Result<Self> {
        let settings = match &args.settings {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        let mut config = Self { width: args.width, height: args.height, ..Default::default() };
        config.apply(&settings)?;

        if let Some(frames) = args.frames {
            config.frames = frames;
        }
        config.seed = args.seed.unwrap_or_else(|| fastrand::u32(..));
        if args.edges {
            config.collision = CollisionMode::Edges;
        }
        config.dump = args.dump.clone();

        config.validate()?;
        Ok(config)
    }

    pub fn apply(&mut self, settings: &Settings) -> Result<()> {
        if let Some(value) = settings.get("ray_step")? {
            self.ray_step = value;
        }
        if let Some(value) = settings.get("hover_radius")? {
            self.hover_radius = value;
        }
        if let Some(value) = settings.get("font_size")? {
            self.font_size = value;
        }
        if let Some(value) = settings.get("transition_speed")? {
            self.transition_speed = value;
        }
        if let Some(value) = settings.get("noise_speed")? {
            self.noise_speed = value;
        }
        if let Some(value) = settings.get("frames")? {
            self.frames = value;
        }
        if let Some(value) = settings.get::<String>("collision")? {
            self.collision = match value.as_str() {
                "diagonal" => CollisionMode::Diagonal,
                "edges" => CollisionMode::Edges,
                _ => bail!("Invalid value of setting collision: {}", value),
            };
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.width > 0.0 && self.height > 0.0) {
            bail!("Canvas size {}x{} is not positive", self.width, self.height);
        }
        if !(self.hover_radius > 0.0) {
            bail!("Hover radius {} is not positive", self.hover_radius);
        }
        if !(self.font_size > 0.0) {
            bail!("Font size {} is not positive", self.font_size);
        }

        Ok(())
    }
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            frames: 600,
            seed: 0,
            ray_step: 1.0,
            hover_radius: 200.0,
            font_size: 32.0,
            transition_speed: 0.01,
            noise_speed: 0.01,
            collision: CollisionMode::Diagonal,
            dump: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parses_pairs_and_skips_comments() {
        let settings = Settings::parse("# sketch\n\nray_step = 2.5\nhover_radius=150\n").unwrap();

        assert_eq!(settings.get::<f64>("ray_step").unwrap(), Some(2.5));
        assert_eq!(settings.get::<f64>("hover_radius").unwrap(), Some(150.0));
        assert_eq!(settings.get::<f64>("font_size").unwrap(), None);
    }

    #[test]
    fn unknown_keys_are_dropped() {
        let settings = Settings::parse("colour=red\nframes=10").unwrap();

        assert_eq!(settings.get::<String>("colour").unwrap(), None);
        assert_eq!(settings.get::<usize>("frames").unwrap(), Some(10));
    }

    #[test]
    fn malformed_lines_and_values_fail() {
        assert!(Settings::parse("ray_step").is_err());
        assert!(Settings::parse("=3").is_err());

        let settings = Settings::parse("frames=many").unwrap();
        let err = settings.get::<usize>("frames").unwrap_err();
        assert!(err.to_string().contains("frames"));
    }

    #[test]
    fn settings_override_defaults() {
        let settings = Settings::parse("ray_step=5\ncollision=edges\nnoise_speed=0.02\ntransition_speed=0.05").unwrap();
        let mut config = SketchConfig::default();
        config.apply(&settings).unwrap();

        assert_relative_eq!(config.ray_step, 5.0);
        assert_relative_eq!(config.noise_speed, 0.02);
        assert_relative_eq!(config.transition_speed, 0.05);
        assert_eq!(config.collision, CollisionMode::Edges);
        assert_relative_eq!(config.hover_radius, 200.0);
    }

    #[test]
    fn unknown_collision_mode_fails() {
        let settings = Settings::parse("collision=circles").unwrap();
        assert!(SketchConfig::default().apply(&settings).is_err());
    }

    #[test]
    fn non_positive_sizes_fail_validation() {
        assert!(SketchConfig::default().validate().is_ok());
        assert!(SketchConfig { hover_radius: 0.0, ..Default::default() }.validate().is_err());
        assert!(SketchConfig { width: f64::NAN, ..Default::default() }.validate().is_err());
    }
}
