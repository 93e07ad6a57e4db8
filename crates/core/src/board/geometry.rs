#![forbid(unsafe_code)]

use crate::model::Status;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis-aligned screen rectangle, half-open on the right and bottom edges so
/// adjacent columns never both claim a shared border.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        if !(self.width > 0.0 && self.height > 0.0) {
            return false;
        }
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BucketRegion {
    pub bucket: Status,
    pub rect: Rect,
}

/// Which bucket's screen region holds `point`. The first matching region wins.
pub fn hit_test(regions: &[BucketRegion], point: Point) -> Option<Status> {
    regions
        .iter()
        .find(|region| region.rect.contains(point))
        .map(|region| region.bucket)
}
