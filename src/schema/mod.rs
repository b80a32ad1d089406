//! Payload validation.
//!
//! A [`ValidationSchema`] pairs a declarative [`ObjectShape`] with the typed
//! value it produces. Validation is pure: the shape is checked first so that
//! every mismatching field is reported, then the payload is decoded into `T`.

mod error;
mod shape;

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Value;

pub use error::{FieldIssue, IssueKind, ValidationError};
pub use shape::{json_type, FieldSpec, FieldType, ObjectShape, ROOT_PATH};

/// Expected shape of a remote payload, producing values of type `T`.
pub struct ValidationSchema<T> {
    name: &'static str,
    shape: ObjectShape,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ValidationSchema<T> {
    pub fn new(name: &'static str, shape: ObjectShape) -> Self {
        Self {
            name,
            shape,
            _marker: PhantomData,
        }
    }
}

impl<T: DeserializeOwned> ValidationSchema<T> {
    /// Validate untyped data and narrow it to `T`.
    pub fn validate(&self, raw: &Value) -> Result<T, ValidationError> {
        let mut issues = Vec::new();
        self.shape.check(raw, ROOT_PATH, &mut issues);
        if !issues.is_empty() {
            return Err(ValidationError::new(self.name, issues));
        }

        T::deserialize(raw).map_err(|err| {
            ValidationError::new(
                self.name,
                vec![FieldIssue::new(
                    ROOT_PATH,
                    IssueKind::Decode {
                        reason: err.to_string(),
                    },
                )],
            )
        })
    }
}

impl<T> fmt::Debug for ValidationSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationSchema")
            .field("name", &self.name)
            .field("shape", &self.shape)
            .finish()
    }
}
