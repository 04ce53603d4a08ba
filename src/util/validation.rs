use serde::Serialize;
use validator::{ValidationErrors, ValidationErrorsKind};

/// A single schema violation, reported with the wire-facing (camelCase)
/// field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Flatten `validator` errors into a list of field violations. Nested
/// struct errors are reported with a dotted path (`dimensions.length`).
pub fn collect_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    flatten_errors(errors, "", &mut violations);
    violations
}

fn flatten_errors(errors: &ValidationErrors, prefix: &str, out: &mut Vec<FieldViolation>) {
    for (field, kind) in errors.errors() {
        let name = if prefix.is_empty() {
            to_camel_case(&field.to_string())
        } else {
            format!("{}.{}", prefix, to_camel_case(&field.to_string()))
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for err in field_errors {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());
                    out.push(FieldViolation {
                        field: name.clone(),
                        message,
                    });
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                flatten_errors(nested, &name, out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    flatten_errors(nested, &format!("{}[{}]", name, index), out);
                }
            }
        }
    }
}

/// Rust field identifiers are snake_case; the wire format is camelCase.
fn to_camel_case(field: &str) -> String {
    let mut result = String::with_capacity(field.len());
    let mut capitalize = false;
    for c in field.chars() {
        if c == '_' {
            capitalize = true;
        } else if capitalize {
            result.extend(c.to_uppercase());
            capitalize = false;
        } else {
            result.push(c);
        }
    }
    result
}
