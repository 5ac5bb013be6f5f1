//! Capability sets attached to parsed JSON data.
//!
//! A [`Prototype`] is a named set of operations that read a JSON value.
//! [`Revived`] pairs parsed data with a prototype so the data can be read
//! directly (it derefs to [`Value`]) and can also answer the prototype's
//! operations. The prototype never stores the data; it receives it on each
//! call.

use std::fmt;
use std::ops::Deref;

use serde_json::Value;

use crate::JsonError;

/// A set of named operations over a JSON value.
pub trait Prototype {
    /// Names of the operations this prototype defines.
    fn operations(&self) -> Vec<&str>;

    /// Runs `op` against `this`, or returns `None` if `op` is not defined.
    fn invoke(&self, op: &str, this: &Value) -> Option<Value>;

    fn responds_to(&self, op: &str) -> bool {
        self.operations().contains(&op)
    }
}

impl<P: Prototype + ?Sized> Prototype for &P {
    fn operations(&self) -> Vec<&str> {
        (**self).operations()
    }

    fn invoke(&self, op: &str, this: &Value) -> Option<Value> {
        (**self).invoke(op, this)
    }
}

type Method = Box<dyn Fn(&Value) -> Value>;

/// A prototype assembled from closures at runtime.
///
/// ```
/// use json_bridge::{MethodTable, Prototype};
/// use serde_json::json;
///
/// let proto = MethodTable::new().method("double", |this| json!(this["n"].as_i64().unwrap_or(0) * 2));
/// assert_eq!(proto.invoke("double", &json!({"n": 21})), Some(json!(42)));
/// ```
#[derive(Default)]
pub struct MethodTable {
    methods: Vec<(String, Method)>,
}

impl MethodTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an operation, replacing any existing one with the same name.
    pub fn method<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Value) -> Value + 'static,
    {
        let name = name.into();
        self.methods.retain(|(existing, _)| *existing != name);
        self.methods.push((name, Box::new(f)));
        self
    }
}

impl Prototype for MethodTable {
    fn operations(&self) -> Vec<&str> {
        self.methods.iter().map(|(name, _)| name.as_str()).collect()
    }

    fn invoke(&self, op: &str, this: &Value) -> Option<Value> {
        self.methods
            .iter()
            .find(|(name, _)| name == op)
            .map(|(_, f)| f(this))
    }
}

impl fmt::Debug for MethodTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodTable")
            .field("operations", &self.operations())
            .finish()
    }
}

/// Parsed JSON data with a prototype attached.
#[derive(Debug, Clone, PartialEq)]
pub struct Revived<P> {
    data: Value,
    proto: P,
}

impl<P: Prototype> Revived<P> {
    pub fn new(data: Value, proto: P) -> Self {
        Self { data, proto }
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn proto(&self) -> &P {
        &self.proto
    }

    pub fn into_data(self) -> Value {
        self.data
    }

    pub fn responds_to(&self, op: &str) -> bool {
        self.proto.responds_to(op)
    }

    /// Invokes a prototype operation on the parsed data.
    pub fn call(&self, op: &str) -> Result<Value, JsonError> {
        log::trace!("json: calling {op}");
        self.proto
            .invoke(op, &self.data)
            .ok_or_else(|| JsonError::UnknownOperation(op.to_string()))
    }
}

impl<P> Deref for Revived<P> {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}
