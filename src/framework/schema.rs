//! # Schema Validation
//!
//! Untyped JSON is turned into domain values in one place: a [`Schema`].
//! A schema either returns the typed value or a [`Diagnostics`] list that
//! describes every problem it found.
//!
//! The default implementation is [`SerdeSchema`], which deserializes with
//! `serde_json` and then runs the type's [`Validate`] constraints. Clients hold
//! schemas behind `Arc<dyn Schema<T>>` (bundled in [`Schemas`]) so tests and
//! callers can inject their own.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::{Post, PostDto, UserDto};

/// One schema violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Dotted path of the offending field, empty for the document root.
    pub path: String,
    pub message: String,
}

impl Issue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// The issues reported by a failed validation. Never empty when returned as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    issues: Vec<Issue>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// A diagnostics list holding a single issue.
    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            issues: vec![Issue::new(path, message)],
        }
    }

    pub fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.issues.push(Issue::new(path, message));
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// `Ok(())` when nothing was reported, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for issue in &self.issues {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{issue}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostics {}

/// Constraint checks that run after a value has been deserialized.
///
/// Implementations should report every violation, not stop at the first.
pub trait Validate {
    fn validate(&self) -> Result<(), Diagnostics> {
        Ok(())
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<(), Diagnostics> {
        match self {
            Some(inner) => inner.validate(),
            None => Ok(()),
        }
    }
}

/// Validates untyped JSON against a declared shape.
pub trait Schema<T>: Send + Sync {
    fn validate(&self, value: &Value) -> Result<T, Diagnostics>;
}

/// A [`Schema`] backed by `serde` deserialization plus [`Validate`] constraints.
///
/// The document root must be a JSON object. `null` is passed through so that
/// `Option<T>` shapes can accept it; every other root type is rejected before
/// deserializing, since serde would otherwise fill a struct from an array by
/// position.
pub struct SerdeSchema<T> {
    _shape: PhantomData<fn() -> T>,
}

impl<T> SerdeSchema<T> {
    pub fn new() -> Self {
        Self {
            _shape: PhantomData,
        }
    }
}

impl<T> Default for SerdeSchema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Schema<T> for SerdeSchema<T>
where
    T: DeserializeOwned + Validate,
{
    fn validate(&self, value: &Value) -> Result<T, Diagnostics> {
        if !matches!(value, Value::Object(_) | Value::Null) {
            return Err(Diagnostics::single(
                "",
                format!("expected object, received {}", json_type(value)),
            ));
        }
        let typed: T = serde_json::from_value(value.clone())
            .map_err(|error| Diagnostics::single("", error.to_string()))?;
        typed.validate()?;
        Ok(typed)
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The schemas the clients validate against.
#[derive(Clone)]
pub struct Schemas {
    /// Caller-supplied post input.
    pub post: Arc<dyn Schema<Post>>,
    /// Post returned by the remote service.
    pub post_dto: Arc<dyn Schema<PostDto>>,
    /// User lookup result; JSON `null` is a valid, absent user.
    pub user_dto: Arc<dyn Schema<Option<UserDto>>>,
}

impl Default for Schemas {
    fn default() -> Self {
        Self {
            post: Arc::new(SerdeSchema::<Post>::new()),
            post_dto: Arc::new(SerdeSchema::<PostDto>::new()),
            user_dto: Arc::new(SerdeSchema::<Option<UserDto>>::new()),
        }
    }
}
