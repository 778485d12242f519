//! HTML rendering for accepted résumé documents.
//!
//! The renderer trusts nothing beyond what validation guarantees: optional sections are
//! read loosely and skipped when missing or oddly shaped. All text is escaped by `maud`.

use maud::{html, Markup, PreEscaped, DOCTYPE};
use serde_json::{Map, Value};
use url::form_urlencoded;

use crate::resume::dates::format_value;
use crate::resume::loader::Document;
use crate::resume::validation::is_falsy;

const STYLES: &str = r#"
body { font-family: system-ui, -apple-system, "Segoe UI", Roboto, Arial, sans-serif;
       line-height: 1.4; max-width: 50rem; margin: 2rem auto; padding: 0 1rem; color: #111; }
header.contact { border-bottom: 2px solid #222; margin-bottom: 1rem; }
header.contact h1 { margin-bottom: 0.25rem; }
h2 { font-size: 1.1rem; text-transform: uppercase; letter-spacing: 0.05em; border-bottom: 1px solid #999; }
article.job { margin-bottom: 1.25rem; page-break-inside: avoid; }
article.job h3 { margin: 0; }
.employer, .dates { margin: 0.1rem 0; }
.dates { color: #444; }
ul.facts { list-style: none; padding-left: 0; margin: 0.4rem 0; }
@media print { body { margin: 0; max-width: none; } }
"#;

fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Text of `obj[key]`, or `None` when the value is falsy.
fn text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    let value = obj.get(key).filter(|v| !is_falsy(Some(*v)))?;
    Some(plain(value))
}

/// Like [`text`], with month tokens shown as `Mar 2020`.
fn date(obj: &Map<String, Value>, key: &str) -> Option<String> {
    let value = obj.get(key).filter(|v| !is_falsy(Some(*v)))?;
    Some(format_value(value))
}

/// A list field that may also be given as a single string.
fn items(obj: &Map<String, Value>, key: &str) -> Vec<String> {
    match obj.get(key) {
        Some(Value::Array(values)) => values
            .iter()
            .filter(|v| !is_falsy(Some(*v)))
            .map(plain)
            .collect(),
        value if !is_falsy(value) => value.map(plain).into_iter().collect(),
        _ => Vec::new(),
    }
}

fn objects<'a>(doc: &'a Document, key: &str) -> Vec<&'a Map<String, Value>> {
    doc.get(key)
        .and_then(Value::as_array)
        .map(|values| values.iter().filter_map(Value::as_object).collect())
        .unwrap_or_default()
}

fn yes_no(value: Option<&Value>) -> Option<&'static str> {
    match value {
        Some(Value::Bool(true)) => Some("Yes"),
        Some(Value::Bool(false)) => Some("No"),
        _ => None,
    }
}

fn work_entry(entry: &Map<String, Value>) -> Markup {
    let start = date(entry, "start").unwrap_or_default();
    let end = if is_falsy(entry.get("present")) {
        date(entry, "end").unwrap_or_default()
    } else {
        "Present".to_string()
    };
    let duties = items(entry, "duties");
    let accomplishments = items(entry, "accomplishments");

    html! {
        article.job {
            h3 { (text(entry, "title").unwrap_or_default()) }
            p.employer {
                strong { (text(entry, "employer").unwrap_or_default()) }
                @if let Some(location) = text(entry, "location") {
                    ", " (location)
                }
            }
            p.dates { (start) " – " (end) }
            ul.facts {
                @if let Some(hours) = text(entry, "hours_per_week") {
                    li { "Hours per week: " (hours) }
                }
                @if let Some(salary) = text(entry, "salary") {
                    li { "Salary: " (salary) }
                }
                @if let Some(grade) = text(entry, "grade") {
                    li { "Series/Grade: " (grade) }
                }
                @if let Some(supervisor) = text(entry, "supervisor") {
                    li {
                        "Supervisor: " (supervisor)
                        @if let Some(phone) = text(entry, "supervisor_phone") {
                            " (" (phone) ")"
                        }
                        @if let Some(contact_ok) = yes_no(entry.get("may_contact")) {
                            "; may contact: " (contact_ok)
                        }
                    }
                }
            }
            @if !duties.is_empty() {
                h4 { "Duties" }
                ul { @for duty in &duties { li { (duty) } } }
            }
            @if !accomplishments.is_empty() {
                h4 { "Accomplishments" }
                ul { @for item in &accomplishments { li { (item) } } }
            }
        }
    }
}

fn education_entry(entry: &Map<String, Value>) -> Markup {
    html! {
        li {
            @if let Some(degree) = text(entry, "degree") {
                strong { (degree) }
                @if let Some(major) = text(entry, "major") { ", " (major) }
                " · "
            }
            (text(entry, "school").unwrap_or_default())
            @if let Some(graduated) = date(entry, "graduated") { " (" (graduated) ")" }
            @if let Some(gpa) = text(entry, "gpa") { " · GPA " (gpa) }
        }
    }
}

/// Renders an accepted document as a standalone HTML page.
pub fn render_resume(doc: &Document) -> String {
    let empty = Map::new();
    let contact = doc
        .get("contact")
        .and_then(Value::as_object)
        .unwrap_or(&empty);
    let name = text(contact, "name").unwrap_or_default();
    let work = objects(doc, "work");
    let education = objects(doc, "education");
    let certifications = items(doc, "certifications");
    let skills = items(doc, "skills");

    let page = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (name) " · Resume" }
                style { (PreEscaped(STYLES)) }
            }
            body {
                header.contact {
                    h1 { (name) }
                    p {
                        (text(contact, "email").unwrap_or_default())
                        " · "
                        (text(contact, "phone").unwrap_or_default())
                    }
                    @if let Some(address) = text(contact, "address") {
                        p { (address) }
                    }
                    @if let Some(citizenship) = text(contact, "citizenship") {
                        p { strong { "Citizenship: " } (citizenship) }
                    }
                    @if let Some(preference) = text(contact, "veterans_preference") {
                        p { strong { "Veterans' preference: " } (preference) }
                    }
                    @if let Some(clearance) = text(contact, "clearance") {
                        p { strong { "Security clearance: " } (clearance) }
                    }
                }
                @if let Some(summary) = text(doc, "summary") {
                    section.summary {
                        h2 { "Summary" }
                        p { (summary) }
                    }
                }
                section.work {
                    h2 { "Work Experience" }
                    @for entry in &work { (work_entry(entry)) }
                }
                @if !education.is_empty() {
                    section.education {
                        h2 { "Education" }
                        ul { @for entry in &education { (education_entry(entry)) } }
                    }
                }
                @if !certifications.is_empty() {
                    section.certifications {
                        h2 { "Certifications" }
                        ul { @for cert in &certifications { li { (cert) } } }
                    }
                }
                @if !skills.is_empty() {
                    section.skills {
                        h2 { "Skills" }
                        p { (skills.join(", ")) }
                    }
                }
            }
        }
    };

    page.into_string()
}

/// Landing page describing the two ways to request a render.
pub fn render_index(default_src: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("src", default_src)
        .finish();
    let href = format!("/render?{query}");
    let page = html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { "Resume Renderer" }
            }
            body style="font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; line-height:1.4;" {
                p {
                    "Minimal Federal Resume Renderer. "
                    "Use GET /render?src=" (default_src) " or POST /render with JSON body."
                }
                ul {
                    li { a href=(href) { "Render sample " (default_src) } }
                }
            }
        }
    };

    page.into_string()
}
