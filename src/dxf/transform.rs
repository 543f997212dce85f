//! Non-destructive transforms over the target entities.  Each method
//! returns a new value and leaves the receiver alone.

use std::f64::consts::PI;

use crate::dxf::entity::*;

fn rotate_around(x: f64, y: f64, cx: f64, cy: f64, sin: f64, cos: f64) -> (f64, f64) {
    let (dx, dy) = (x - cx, y - cy);
    (dx * cos - dy * sin + cx, dx * sin + dy * cos + cy)
}

impl Line {
    pub fn translated(&self, dx: f64, dy: f64) -> Line {
        Line {
            x1: self.x1 + dx,
            y1: self.y1 + dy,
            x2: self.x2 + dx,
            y2: self.y2 + dy,
        }
    }
    /// Rotates around `(cx, cy)` by the given angle in degrees.
    pub fn rotated(&self, angle_deg: f64, cx: f64, cy: f64) -> Line {
        let (sin, cos) = (angle_deg * PI / 180.0).sin_cos();
        let (x1, y1) = rotate_around(self.x1, self.y1, cx, cy, sin, cos);
        let (x2, y2) = rotate_around(self.x2, self.y2, cx, cy, sin, cos);
        Line { x1, y1, x2, y2 }
    }
    /// Scales from `(cx, cy)` by the given factor.
    pub fn scaled(&self, factor: f64, cx: f64, cy: f64) -> Line {
        Line {
            x1: cx + (self.x1 - cx) * factor,
            y1: cy + (self.y1 - cy) * factor,
            x2: cx + (self.x2 - cx) * factor,
            y2: cy + (self.y2 - cy) * factor,
        }
    }
}

impl Circle {
    pub fn translated(&self, dx: f64, dy: f64) -> Circle {
        Circle {
            center_x: self.center_x + dx,
            center_y: self.center_y + dy,
            radius: self.radius,
        }
    }
    /// Scales the radius in place; the center does not move.
    pub fn scaled(&self, factor: f64) -> Circle {
        Circle {
            center_x: self.center_x,
            center_y: self.center_y,
            radius: self.radius * factor,
        }
    }
}

impl Arc {
    pub fn translated(&self, dx: f64, dy: f64) -> Arc {
        Arc {
            center_x: self.center_x + dx,
            center_y: self.center_y + dy,
            ..*self
        }
    }
    /// Scales the radius in place; the angles do not change.
    pub fn scaled(&self, factor: f64) -> Arc {
        Arc {
            radius: self.radius * factor,
            ..*self
        }
    }
}

impl Ellipse {
    pub fn translated(&self, dx: f64, dy: f64) -> Ellipse {
        Ellipse {
            center_x: self.center_x + dx,
            center_y: self.center_y + dy,
            ..*self
        }
    }
    /// Scales both axes; the ratio is unchanged.
    pub fn scaled(&self, factor: f64) -> Ellipse {
        Ellipse {
            major_axis_x: self.major_axis_x * factor,
            major_axis_y: self.major_axis_y * factor,
            ..*self
        }
    }
}

impl ModelPoint {
    pub fn translated(&self, dx: f64, dy: f64) -> ModelPoint {
        ModelPoint {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Text {
    pub fn translated(&self, dx: f64, dy: f64) -> Text {
        Text {
            x: self.x + dx,
            y: self.y + dy,
            ..self.clone()
        }
    }
    /// Adds to the rotation angle; the insertion point stays put.
    pub fn rotated(&self, angle_deg: f64) -> Text {
        Text {
            rotation: self.rotation + angle_deg,
            ..self.clone()
        }
    }
    pub fn scaled(&self, factor: f64) -> Text {
        Text {
            height: self.height * factor,
            ..self.clone()
        }
    }
}

impl Solid {
    pub fn translated(&self, dx: f64, dy: f64) -> Solid {
        Solid {
            x1: self.x1 + dx,
            y1: self.y1 + dy,
            x2: self.x2 + dx,
            y2: self.y2 + dy,
            x3: self.x3 + dx,
            y3: self.y3 + dy,
            x4: self.x4 + dx,
            y4: self.y4 + dy,
        }
    }
    /// Rotates around `(cx, cy)` by the given angle in degrees.
    pub fn rotated(&self, angle_deg: f64, cx: f64, cy: f64) -> Solid {
        let (sin, cos) = (angle_deg * PI / 180.0).sin_cos();
        let (x1, y1) = rotate_around(self.x1, self.y1, cx, cy, sin, cos);
        let (x2, y2) = rotate_around(self.x2, self.y2, cx, cy, sin, cos);
        let (x3, y3) = rotate_around(self.x3, self.y3, cx, cy, sin, cos);
        let (x4, y4) = rotate_around(self.x4, self.y4, cx, cy, sin, cos);
        Solid {
            x1,
            y1,
            x2,
            y2,
            x3,
            y3,
            x4,
            y4,
        }
    }
    /// Scales from `(cx, cy)` by the given factor.
    pub fn scaled(&self, factor: f64, cx: f64, cy: f64) -> Solid {
        Solid {
            x1: cx + (self.x1 - cx) * factor,
            y1: cy + (self.y1 - cy) * factor,
            x2: cx + (self.x2 - cx) * factor,
            y2: cy + (self.y2 - cy) * factor,
            x3: cx + (self.x3 - cx) * factor,
            y3: cy + (self.y3 - cy) * factor,
            x4: cx + (self.x4 - cx) * factor,
            y4: cy + (self.y4 - cy) * factor,
        }
    }
}

impl Insert {
    pub fn translated(&self, dx: f64, dy: f64) -> Insert {
        Insert {
            x: self.x + dx,
            y: self.y + dy,
            ..self.clone()
        }
    }
    /// Adds to the rotation angle.
    pub fn rotated(&self, angle_deg: f64) -> Insert {
        Insert {
            rotation: self.rotation + angle_deg,
            ..self.clone()
        }
    }
    /// Scales both axis factors uniformly.
    pub fn scaled(&self, factor: f64) -> Insert {
        Insert {
            scale_x: self.scale_x * factor,
            scale_y: self.scale_y * factor,
            ..self.clone()
        }
    }
}
