//! Structural and semantic rules a résumé document must satisfy before it is rendered.
//!
//! Every rule runs; failures are appended in a fixed order (contact block, then each
//! work entry in index order, field by field) so the same input always yields the
//! same list. An empty list means the document may be rendered.

use serde_json::{Map, Value};

use crate::resume::dates::is_month_token_value;
use crate::resume::loader::Document;

const CONTACT_FIELDS: &[&str] = &["name", "email", "phone"];

/// Truthiness of an optional JSON value.
///
/// Absent, `null`, `false`, numeric zero, `""`, `[]` and `{}` are falsy.
pub fn is_falsy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f == 0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(a)) => a.is_empty(),
        Some(Value::Object(o)) => o.is_empty(),
    }
}

/// Validates a document, returning every failure message in evaluation order.
pub fn validate_resume(doc: &Document) -> Vec<String> {
    let mut errors = Vec::new();

    validate_contact(doc.get("contact"), &mut errors);

    match doc.get("work") {
        Some(Value::Array(entries)) if !entries.is_empty() => {
            for (idx, entry) in entries.iter().enumerate() {
                validate_work_entry(idx, entry, &mut errors);
            }
        }
        _ => errors.push("work must be a non-empty array".to_string()),
    }

    errors
}

fn validate_contact(contact: Option<&Value>, errors: &mut Vec<String>) {
    // A missing or falsy block is checked as an empty mapping.
    if is_falsy(contact) {
        for field in CONTACT_FIELDS {
            errors.push(format!("contact.{field} is required"));
        }
        return;
    }

    let Some(Value::Object(contact)) = contact else {
        errors.push("contact must be an object".to_string());
        return;
    };

    for field in CONTACT_FIELDS {
        if is_falsy(contact.get(*field)) {
            errors.push(format!("contact.{field} is required"));
        }
    }
}

fn validate_work_entry(idx: usize, entry: &Value, errors: &mut Vec<String>) {
    let ctx = format!("work[{idx}]");

    let Value::Object(work) = entry else {
        errors.push(format!("{ctx} must be an object"));
        return;
    };

    if is_falsy(work.get("employer")) {
        errors.push(format!("{ctx}.employer is required"));
    }
    if is_falsy(work.get("title")) {
        errors.push(format!("{ctx}.title is required"));
    }

    if let Some(msg) = check_hours(work) {
        errors.push(format!("{ctx}.{msg}"));
    }

    let start = work.get("start");
    if is_falsy(start) {
        errors.push(format!("{ctx}.start is required"));
    } else if !start.is_some_and(is_month_token_value) {
        errors.push(format!("{ctx}.start must be YYYY-MM"));
    }

    let present_raw = work.get("present").unwrap_or(&Value::Bool(false));
    let present = !is_falsy(Some(present_raw));
    if !matches!(present_raw, Value::Bool(_) | Value::Null) {
        errors.push(format!("{ctx}.present must be a boolean if provided"));
    }

    if !present {
        let end = work.get("end");
        if is_falsy(end) {
            errors.push(format!("{ctx}.end is required unless present=true"));
        } else if !end.is_some_and(is_month_token_value) {
            errors.push(format!("{ctx}.end must be YYYY-MM"));
        }
    }
}

/// At most one `hours_per_week` failure per entry.
fn check_hours(work: &Map<String, Value>) -> Option<&'static str> {
    match work.get("hours_per_week") {
        None | Some(Value::Null) => Some("hours_per_week is required"),
        Some(Value::String(s)) if s.is_empty() => Some("hours_per_week is required"),
        // Booleans are not hours.
        Some(Value::Number(n)) => match n.as_f64() {
            Some(h) if h <= 0.0 => Some("hours_per_week must be > 0"),
            _ => None,
        },
        Some(_) => Some("hours_per_week must be a number"),
    }
}
