use glam::Vec2;

/// Size of the drawing surface in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Map client coordinates (origin top-left, +y down) to the
    /// window-centered space the ripple layer draws in (+y up).
    #[inline]
    pub fn centered(&self, client_x: f32, client_y: f32) -> Vec2 {
        Vec2::new(client_x - self.width * 0.5, self.height * 0.5 - client_y)
    }

    /// Orthographic half-extent covering the viewport one unit per pixel.
    #[inline]
    pub fn half_extent(&self) -> Vec2 {
        Vec2::new(self.width.max(1.0) * 0.5, self.height.max(1.0) * 0.5)
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width.max(1.0) / self.height.max(1.0)
    }
}

/// Pointer position at this frame and the one before.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub current: Vec2,
    pub previous: Vec2,
}

impl PointerSample {
    #[inline]
    pub fn displacement(&self) -> f32 {
        self.current.distance(self.previous)
    }
}

/// Pointer state fed by mouse-move events and sampled once per frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    current: Vec2,
    previous: Vec2,
}

impl PointerTracker {
    pub fn move_to(&mut self, position: Vec2) {
        self.current = position;
    }

    pub fn move_to_client(&mut self, client_x: f32, client_y: f32, viewport: &Viewport) {
        self.move_to(viewport.centered(client_x, client_y));
    }

    /// Read the pair for this frame and make `current` the next `previous`.
    pub fn sample(&mut self) -> PointerSample {
        let s = PointerSample {
            current: self.current,
            previous: self.previous,
        };
        self.previous = self.current;
        s
    }
}
