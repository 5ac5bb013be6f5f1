//! JSON text round-tripping.
//!
//! - [`to_text`] serializes any [`Serialize`] value. Object keys keep their
//!   insertion order.
//! - [`from_text`] parses text into plain [`Value`] data and attaches a
//!   [`Prototype`], giving back a [`Revived`] value that reads like the data
//!   and answers the prototype's operations.
//! - [`from_text_as`] parses straight into a typed value, whose own methods
//!   play the part of the prototype.
//!
//! ```
//! use json_bridge::{MethodTable, from_text, to_text};
//! use serde_json::json;
//!
//! let text = to_text(&json!({ "width": 3, "height": 4 })).unwrap();
//! assert_eq!(text, r#"{"width":3,"height":4}"#);
//!
//! let proto = MethodTable::new().method("area", |this| {
//!     json!(this["width"].as_f64().unwrap_or(0.0) * this["height"].as_f64().unwrap_or(0.0))
//! });
//! let rect = from_text(proto, &text).unwrap();
//! assert_eq!(rect["width"], 3);
//! assert_eq!(rect.call("area").unwrap(), json!(12.0));
//! ```

pub mod error;
pub mod prototype;

pub use error::JsonError;
pub use prototype::{MethodTable, Prototype, Revived};
pub use serde_json::Value;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Serializes `value` to compact JSON text.
pub fn to_text<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string(value).map_err(|e| JsonError::Serialize(e.to_string()))
}

/// Parses `text` and attaches `proto` to the resulting data.
///
/// The parsed fields are not checked against what the prototype expects.
pub fn from_text<P: Prototype>(proto: P, text: &str) -> Result<Revived<P>, JsonError> {
    let data: Value = serde_json::from_str(text).map_err(|e| {
        log::debug!("json: rejected input: {e}");
        JsonError::Parse(e.to_string())
    })?;
    Ok(Revived::new(data, proto))
}

/// Parses `text` directly into `T`.
pub fn from_text_as<T: DeserializeOwned>(text: &str) -> Result<T, JsonError> {
    serde_json::from_str(text).map_err(|e| JsonError::Parse(e.to_string()))
}
