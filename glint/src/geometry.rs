use glam::DVec2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    pub a: DVec2,
    pub b: DVec2,
}

impl Segment {
    pub fn new(a: DVec2, b: DVec2) -> Self {
        Self { a, b }
    }

    pub fn length(&self) -> f64 {
        self.a.distance(self.b)
    }
}

/// Axis-aligned bounds in screen orientation, `top` has the smaller y.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }

    pub fn from_center(center: DVec2, half_width: f64, half_height: f64) -> Self {
        Self { left: center.x - half_width, right: center.x + half_width, top: center.y - half_height, bottom: center.y + half_height }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn top_left(&self) -> DVec2 {
        DVec2::new(self.left, self.top)
    }

    pub fn top_right(&self) -> DVec2 {
        DVec2::new(self.right, self.top)
    }

    pub fn bottom_left(&self) -> DVec2 {
        DVec2::new(self.left, self.bottom)
    }

    pub fn bottom_right(&self) -> DVec2 {
        DVec2::new(self.right, self.bottom)
    }

    pub fn corners(&self) -> [DVec2; 4] {
        [self.top_left(), self.top_right(), self.bottom_right(), self.bottom_left()]
    }
}
