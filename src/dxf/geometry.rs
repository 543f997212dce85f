//! Geometric queries over the target entities: lengths, areas, and bounding
//! boxes.  These operate on the converted drawing and never touch the
//! writer.

use std::f64::consts::PI;

use crate::dxf::drawing::Drawing;
use crate::dxf::entity::*;

/// An axis-aligned bounding box as `(min_x, min_y, max_x, max_y)`.
pub type Bounds = (f64, f64, f64, f64);

//------------------------------------------------------------------------------
//                                                                          Line
//------------------------------------------------------------------------------
impl Line {
    pub fn length(&self) -> f64 {
        let dx = self.x2 - self.x1;
        let dy = self.y2 - self.y1;
        (dx * dx + dy * dy).sqrt()
    }
    pub fn mid_point(&self) -> (f64, f64) {
        ((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }
    /// The direction of the line in degrees, in [0, 360).
    pub fn angle(&self) -> f64 {
        let angle = (self.y2 - self.y1).atan2(self.x2 - self.x1) * 180.0 / PI;
        if angle < 0.0 {
            angle + 360.0
        } else {
            angle
        }
    }
    pub fn bounding_box(&self) -> Bounds {
        (
            self.x1.min(self.x2),
            self.y1.min(self.y2),
            self.x1.max(self.x2),
            self.y1.max(self.y2),
        )
    }
}

//------------------------------------------------------------------------------
//                                                                        Circle
//------------------------------------------------------------------------------
impl Circle {
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }
    pub fn bounding_box(&self) -> Bounds {
        (
            self.center_x - self.radius,
            self.center_y - self.radius,
            self.center_x + self.radius,
            self.center_y + self.radius,
        )
    }
}

//------------------------------------------------------------------------------
//                                                                           Arc
//------------------------------------------------------------------------------
impl Arc {
    fn sweep_radians(&self) -> f64 {
        let mut sweep = self.end_angle - self.start_angle;
        if sweep < 0.0 {
            sweep += 360.0;
        }
        sweep * PI / 180.0
    }
    pub fn arc_length(&self) -> f64 {
        self.radius * self.sweep_radians()
    }
    /// The area of the pie sector the arc spans.
    pub fn sector_area(&self) -> f64 {
        0.5 * self.radius * self.radius * self.sweep_radians()
    }
    /// Whether the arc sweep contains the given angle in degrees.
    pub fn contains_angle(&self, angle: f64) -> bool {
        let start = normalize_degrees(self.start_angle);
        let end = normalize_degrees(self.end_angle);
        let angle = normalize_degrees(angle);
        if start <= end {
            angle >= start && angle <= end
        } else {
            // the sweep crosses 0 degrees
            angle >= start || angle <= end
        }
    }
    pub fn bounding_box(&self) -> Bounds {
        let mut bounds = (self.center_x, self.center_y, self.center_x, self.center_y);
        let mut cover = |angle_deg: f64| {
            let angle = angle_deg * PI / 180.0;
            let x = self.center_x + self.radius * angle.cos();
            let y = self.center_y + self.radius * angle.sin();
            bounds.0 = bounds.0.min(x);
            bounds.1 = bounds.1.min(y);
            bounds.2 = bounds.2.max(x);
            bounds.3 = bounds.3.max(y);
        };
        cover(self.start_angle);
        cover(self.end_angle);
        for quadrant in [0.0, 90.0, 180.0, 270.0].iter() {
            if self.contains_angle(*quadrant) {
                cover(*quadrant);
            }
        }
        bounds
    }
}

fn normalize_degrees(mut angle: f64) -> f64 {
    while angle < 0.0 {
        angle += 360.0;
    }
    while angle >= 360.0 {
        angle -= 360.0;
    }
    angle
}

//------------------------------------------------------------------------------
//                                                                       Ellipse
//------------------------------------------------------------------------------
impl Ellipse {
    pub fn bounding_box(&self) -> Bounds {
        let major_length = (self.major_axis_x * self.major_axis_x
            + self.major_axis_y * self.major_axis_y)
            .sqrt();
        let minor_length = major_length * self.minor_ratio;
        let tilt = self.major_axis_y.atan2(self.major_axis_x);
        let (sin, cos) = tilt.sin_cos();

        // extrema of a rotated ellipse along each axis
        let half_width = ((major_length * cos).powi(2) + (minor_length * sin).powi(2)).sqrt();
        let half_height = ((major_length * sin).powi(2) + (minor_length * cos).powi(2)).sqrt();

        (
            self.center_x - half_width,
            self.center_y - half_height,
            self.center_x + half_width,
            self.center_y + half_height,
        )
    }
}

//------------------------------------------------------------------------------
//                                                                    ModelPoint
//------------------------------------------------------------------------------
impl ModelPoint {
    pub fn bounding_box(&self) -> Bounds {
        (self.x, self.y, self.x, self.y)
    }
}

//------------------------------------------------------------------------------
//                                                                          Text
//------------------------------------------------------------------------------
impl Text {
    /// An estimate; no font metrics are consulted.
    pub fn bounding_box(&self) -> Bounds {
        let estimated_width = self.height * self.content.chars().count() as f64 * 0.6;
        if self.rotation == 0.0 {
            return (self.x, self.y, self.x + estimated_width, self.y + self.height);
        }

        let angle = self.rotation * PI / 180.0;
        let (sin, cos) = angle.sin_cos();
        let corners = [
            (0.0, 0.0),
            (estimated_width, 0.0),
            (estimated_width, self.height),
            (0.0, self.height),
        ];
        let mut bounds = (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
        for &(cx, cy) in corners.iter() {
            let x = self.x + cx * cos - cy * sin;
            let y = self.y + cx * sin + cy * cos;
            bounds.0 = bounds.0.min(x);
            bounds.1 = bounds.1.min(y);
            bounds.2 = bounds.2.max(x);
            bounds.3 = bounds.3.max(y);
        }
        bounds
    }
}

//------------------------------------------------------------------------------
//                                                                         Solid
//------------------------------------------------------------------------------
impl Solid {
    pub fn bounding_box(&self) -> Bounds {
        (
            self.x1.min(self.x2).min(self.x3).min(self.x4),
            self.y1.min(self.y2).min(self.y3).min(self.y4),
            self.x1.max(self.x2).max(self.x3).max(self.x4),
            self.y1.max(self.y2).max(self.y3).max(self.y4),
        )
    }
    /// The area of the quadrilateral by the shoelace formula.
    pub fn area(&self) -> f64 {
        0.5 * (self.x1 * (self.y2 - self.y4)
            + self.x2 * (self.y3 - self.y1)
            + self.x3 * (self.y4 - self.y2)
            + self.x4 * (self.y1 - self.y3))
            .abs()
    }
    /// A solid whose fourth corner repeats the third is a triangle.
    pub fn is_triangle(&self) -> bool {
        self.x3 == self.x4 && self.y3 == self.y4
    }
}

//------------------------------------------------------------------------------
//                                                                       Drawing
//------------------------------------------------------------------------------
impl Drawing {
    /// The bounding box of every entity with a defined extent.  Inserts are
    /// skipped; resolving them would need the block geometry and its
    /// transform.
    pub fn bounding_box(&self) -> Option<Bounds> {
        let mut bounds: Option<Bounds> = None;
        for entity in &self.entities {
            let entity_bounds = match entity.specific {
                EntityType::Line(ref line) => line.bounding_box(),
                EntityType::Circle(ref circle) => circle.bounding_box(),
                EntityType::Arc(ref arc) => arc.bounding_box(),
                EntityType::Ellipse(ref ellipse) => ellipse.bounding_box(),
                EntityType::ModelPoint(ref point) => point.bounding_box(),
                EntityType::Text(ref text) => text.bounding_box(),
                EntityType::Solid(ref solid) => solid.bounding_box(),
                EntityType::Insert(_) => continue,
            };
            bounds = Some(match bounds {
                None => entity_bounds,
                Some(existing) => (
                    existing.0.min(entity_bounds.0),
                    existing.1.min(entity_bounds.1),
                    existing.2.max(entity_bounds.2),
                    existing.3.max(entity_bounds.3),
                ),
            });
        }
        bounds
    }
}
