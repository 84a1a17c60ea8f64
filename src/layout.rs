//! Placing vertices for drawing.

use std::f64::consts::PI;

/// Canvas and vertex geometry for the renderers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
    /// Radius of the circle the vertices sit on.
    pub radius: f64,
    /// Radius of each vertex disc.
    pub vertex_radius: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            width: 800.0,
            height: 600.0,
            radius: 250.0,
            vertex_radius: 20.0,
        }
    }
}

/// A point on the canvas, `y` growing downwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl LayoutConfig {
    /// The middle of the canvas.
    pub fn center(&self) -> Point {
        Point { x: self.width / 2.0, y: self.height / 2.0 }
    }

    /// Places `vertex_count` vertices evenly on a circle around the
    /// center, vertex 0 to the right and the rest clockwise on screen.
    pub fn circle(&self, vertex_count: usize) -> Vec<Point> {
        let center = self.center();
        (0 .. vertex_count).map(|i| {
            let angle = i as f64 * 2.0 * PI / vertex_count as f64;
            Point {
                x: center.x + self.radius * angle.cos(),
                y: center.y + self.radius * angle.sin(),
            }
        }).collect()
    }
}
