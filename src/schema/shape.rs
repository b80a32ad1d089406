//! Declarative description of an expected JSON object.

use serde_json::{Map, Value};

use super::error::{FieldIssue, IssueKind};

/// Path label used for the payload root.
pub const ROOT_PATH: &str = "$";

/// Primitive type a field must hold.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    String,
    Object(ObjectShape),
    ArrayOf(ObjectShape),
}

impl FieldType {
    fn label(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Object(_) => "object",
            FieldType::ArrayOf(_) => "array",
        }
    }
}

/// A required field of an object.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub ty: FieldType,
}

/// Ordered set of required fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectShape {
    fields: Vec<FieldSpec>,
}

impl ObjectShape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn string(mut self, name: &'static str) -> Self {
        self.fields.push(FieldSpec {
            name,
            ty: FieldType::String,
        });
        self
    }

    pub fn object(mut self, name: &'static str, shape: ObjectShape) -> Self {
        self.fields.push(FieldSpec {
            name,
            ty: FieldType::Object(shape),
        });
        self
    }

    pub fn array_of(mut self, name: &'static str, shape: ObjectShape) -> Self {
        self.fields.push(FieldSpec {
            name,
            ty: FieldType::ArrayOf(shape),
        });
        self
    }

    /// Check `value` against this shape, appending every mismatch to `issues`.
    pub fn check(&self, value: &Value, path: &str, issues: &mut Vec<FieldIssue>) {
        let Some(object) = value.as_object() else {
            issues.push(FieldIssue::new(
                path,
                IssueKind::WrongType {
                    expected: "object",
                    found: json_type(value),
                },
            ));
            return;
        };
        self.check_fields(object, path, issues);
    }

    fn check_fields(&self, object: &Map<String, Value>, path: &str, issues: &mut Vec<FieldIssue>) {
        for field in &self.fields {
            let field_path = join_path(path, field.name);
            match object.get(field.name) {
                None => issues.push(FieldIssue::new(
                    field_path,
                    IssueKind::Missing {
                        expected: field.ty.label(),
                    },
                )),
                Some(value) => check_field(&field.ty, value, &field_path, issues),
            }
        }
    }
}

fn check_field(ty: &FieldType, value: &Value, path: &str, issues: &mut Vec<FieldIssue>) {
    match (ty, value) {
        (FieldType::String, Value::String(_)) => {}
        (FieldType::Object(shape), Value::Object(_)) => shape.check(value, path, issues),
        (FieldType::ArrayOf(shape), Value::Array(items)) => {
            for (index, item) in items.iter().enumerate() {
                shape.check(item, &format!("{}[{}]", path, index), issues);
            }
        }
        (ty, value) => issues.push(FieldIssue::new(
            path,
            IssueKind::WrongType {
                expected: ty.label(),
                found: json_type(value),
            },
        )),
    }
}

fn join_path(parent: &str, name: &str) -> String {
    if parent == ROOT_PATH {
        name.to_string()
    } else {
        format!("{}.{}", parent, name)
    }
}

/// Name of the JSON type held by `value`.
pub fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
