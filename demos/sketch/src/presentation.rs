use glint::glam::DVec2;
use log::info;

const OPACITY_HOVERED: f64 = 1.0;
const OPACITY_IDLE: f64 = 0.2;
const OPACITY_EASING: f64 = 0.1;
const ROTATION_STEP_DEGREES: f64 = 0.5;

/// Circle the pointer has to be inside of for rays to be cast.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HoverZone {
    pub center: DVec2,
    pub radius: f64,
}

impl HoverZone {
    pub fn new(center: DVec2, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn contains(&self, point: DVec2) -> bool {
        self.center.distance(point) < self.radius
    }
}

/// State the image, crossfade and music collaborators would be driven by.
#[derive(Clone, Debug)]
pub struct Presentation {
    pub opacity: f64,
    pub rotation: f64,
    pub transition_progress: f64,
    pub transition_speed: f64,
    pub current_image: usize,
    pub next_image: usize,
    pub image_count: usize,
    pub music_playing: bool,
}

impl Presentation {
    pub fn new(image_count: usize, transition_speed: f64) -> Self {
        Self {
            opacity: 0.6,
            rotation: 0.0,
            transition_progress: 0.0,
            transition_speed,
            current_image: 0,
            next_image: 1 % image_count.max(1),
            image_count: image_count.max(1),
            music_playing: false,
        }
    }

    pub fn update(&mut self, hovered: bool) {
        if hovered {
            self.opacity += (OPACITY_HOVERED - self.opacity) * OPACITY_EASING;
            self.rotation += ROTATION_STEP_DEGREES.to_radians();

            self.transition_progress += self.transition_speed;
            if self.transition_progress >= 1.0 {
                self.current_image = self.next_image;
                self.next_image = (self.next_image + 1) % self.image_count;
                self.transition_progress = 0.0;
            }

            if !self.music_playing {
                info!("Pointer entered the hover zone, music started");
                self.music_playing = true;
            }
        } else {
            self.opacity += (OPACITY_IDLE - self.opacity) * OPACITY_EASING;
            self.transition_progress = 0.0;

            if self.music_playing {
                info!("Pointer left the hover zone, music stopped");
                self.music_playing = false;
            }
        }
    }

    /// Alpha of the outgoing and incoming image of the crossfade.
    pub fn image_alphas(&self) -> (f64, f64) {
        ((1.0 - self.transition_progress) * self.opacity, self.transition_progress * self.opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use approx::assert_relative_eq;

    #[test]
    fn hover_zone_is_open() {
        let zone = HoverZone::new(DVec2::new(100.0, 100.0), 50.0);

        assert!(zone.contains(DVec2::new(120.0, 110.0)));
        assert!(!zone.contains(DVec2::new(150.0, 100.0)));
        assert!(!zone.contains(DVec2::new(0.0, 0.0)));
    }

    #[test]
    fn opacity_eases_towards_target() {
        let mut presentation = Presentation::new(7, 0.01);

        presentation.update(true);
        assert_relative_eq!(presentation.opacity, 0.64, epsilon = 1e-12);

        for _ in 0..200 {
            presentation.update(false);
        }
        assert_abs_diff_eq!(presentation.opacity, 0.2, epsilon = 1e-6);
    }

    #[test]
    fn crossfade_wraps_through_images() {
        let mut presentation = Presentation::new(3, 0.5);

        presentation.update(true);
        assert_eq!((presentation.current_image, presentation.next_image), (0, 1));
        presentation.update(true);
        assert_eq!((presentation.current_image, presentation.next_image), (1, 2));
        assert_relative_eq!(presentation.transition_progress, 0.0);

        presentation.update(true);
        presentation.update(true);
        assert_eq!((presentation.current_image, presentation.next_image), (2, 0));
        presentation.update(true);
        presentation.update(true);
        assert_eq!((presentation.current_image, presentation.next_image), (0, 1));
    }

    #[test]
    fn leaving_resets_transition_and_music() {
        let mut presentation = Presentation::new(7, 0.25);

        presentation.update(true);
        assert!(presentation.music_playing);
        assert_relative_eq!(presentation.transition_progress, 0.25);

        presentation.update(false);
        assert!(!presentation.music_playing);
        assert_relative_eq!(presentation.transition_progress, 0.0);
        assert_relative_eq!(presentation.rotation, 0.5f64.to_radians());
    }

    #[test]
    fn alphas_split_the_opacity() {
        let mut presentation = Presentation::new(7, 0.25);
        presentation.update(true);
        let (current, next) = presentation.image_alphas();

        assert_relative_eq!(current + next, presentation.opacity, epsilon = 1e-12);
        assert_relative_eq!(next, 0.25 * presentation.opacity, epsilon = 1e-12);
    }
}
