//! Rectangle value objects.
//!
//! ```
//! use shapes::make_rectangle;
//!
//! let rect = make_rectangle(3.0, 4.0);
//! assert_eq!(rect.area(), 12.0);
//! ```

use serde::{Deserialize, Serialize};

/// A width/height pair with a computed area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Builds a [`Rectangle`]. No validation: negative or NaN sides are kept as
/// given.
pub fn make_rectangle(width: f64, height: f64) -> Rectangle {
    Rectangle::new(width, height)
}
