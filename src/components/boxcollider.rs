use bevy_ecs::prelude::Component;

use crate::components::mapposition::MapPosition;

/// Axis-aligned rectangle in world space. Used as the bounding shape handed
/// to detection strategies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns true if the interiors overlap. Touching edges do not count,
    /// and an empty rectangle intersects nothing.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.width <= 0.0 || self.height <= 0.0 || other.width <= 0.0 || other.height <= 0.0 {
            return false;
        }
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub width: f32,
    pub height: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl BoxCollider {
    /// Create a BoxCollider with given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// Square collider, as used by the demo game objects.
    pub fn square(size: f32) -> Self {
        Self::new(size, size)
    }

    /// World-space rectangle for an entity at `position`.
    /// Handles negative size by normalizing to proper min/max.
    pub fn rect_at(&self, position: &MapPosition) -> Rect {
        let x0 = position.x + self.offset_x;
        let y0 = position.y + self.offset_y;
        let x1 = x0 + self.width;
        let y1 = y0 + self.height;
        Rect::new(x0.min(x1), y0.min(y1), (x1 - x0).abs(), (y1 - y0).abs())
    }
}
