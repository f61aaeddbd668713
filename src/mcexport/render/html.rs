//! Self-contained HTML page with the snippets embedded as JSON.
//!
//! The page reads its data from a `<script type="application/json">` element.
//! The HTML parser ends that element at the first `</script`, whatever the
//! JSON means, so the blob is passed through [`script_safe_json`], which
//! rewrites every character that could start markup as a `\uXXXX` escape. The
//! result is still valid JSON for the same value.

use super::templates::{HTML_TEMPLATE, HTML_TEMPLATE_NAME};
use super::template_error;
use crate::error::{ExportError, Result};
use crate::model::OutputData;
use chrono::{DateTime, Utc};
use minijinja::{context, Environment, Value};
use once_cell::sync::Lazy;
use serde::Serialize;

static HTML_ENV: Lazy<std::result::Result<Environment<'static>, String>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.add_template(HTML_TEMPLATE_NAME, HTML_TEMPLATE)
        .map_err(|e| e.to_string())?;
    Ok(env)
});

pub fn render(data: &OutputData) -> Result<String> {
    render_at(data, Utc::now())
}

pub fn render_at(data: &OutputData, generated_at: DateTime<Utc>) -> Result<String> {
    let env = match &*HTML_ENV {
        Ok(env) => env,
        Err(e) => return Err(ExportError::Template(e.clone())),
    };
    let tmpl = env.get_template(HTML_TEMPLATE_NAME).map_err(template_error)?;

    let blob = script_safe_json(&data.snippets)?;
    tmpl.render(context! {
        snippets_json => Value::from_safe_string(blob),
        snippet_count => data.snippets.len(),
        generated_at => generated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
    })
    .map_err(template_error)
}

/// Serializes `value` as JSON that is safe to place inside a `<script>` element.
pub fn script_safe_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value).map_err(ExportError::Serialization)?;
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContentBlock, SnippetOutput};
    use chrono::TimeZone;

    const DATA_OPEN: &str = r#"<script id="snippet-data" type="application/json">"#;

    fn embedded_blob(html: &str) -> &str {
        let start = html.find(DATA_OPEN).unwrap() + DATA_OPEN.len();
        let len = html[start..].find("</script>").unwrap();
        &html[start..start + len]
    }

    fn hostile() -> OutputData {
        OutputData {
            snippets: vec![SnippetOutput {
                name: "</script><script>alert(1)</script>".into(),
                folder_path: "A & B".into(),
                tags: vec!["<!--".into()],
                content: vec![ContentBlock::new(
                    "main",
                    "html",
                    "</SCRIPT>\u{2028}line sep & more",
                )],
            }],
        }
    }

    #[test]
    fn test_script_safe_json_escapes_markup() {
        let out = script_safe_json("</script>&\u{2029}").unwrap();
        assert_eq!(out, "\"\\u003c/script\\u003e\\u0026\\u2029\"");
    }

    #[test]
    fn test_script_safe_json_is_still_json() {
        let data = hostile();
        let out = script_safe_json(&data.snippets).unwrap();
        let back: Vec<SnippetOutput> = serde_json::from_str(&out).unwrap();
        assert_eq!(back, data.snippets);
    }

    #[test]
    fn test_hostile_content_cannot_break_out() {
        let html = render(&hostile()).unwrap();

        let blob = embedded_blob(&html);
        assert!(!blob.contains('<'));
        assert!(!blob.contains('>'));

        let back: Vec<SnippetOutput> = serde_json::from_str(blob).unwrap();
        assert_eq!(back, hostile().snippets);
        assert!(!html.contains("alert(1)</script>"));
    }

    #[test]
    fn test_empty_data_renders_page() {
        let html = render(&OutputData::default()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(embedded_blob(&html), "[]");
    }

    #[test]
    fn test_page_metadata() {
        let at = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 0).unwrap();
        let data = OutputData {
            snippets: vec![SnippetOutput {
                name: "Hi".into(),
                folder_path: "Root/Child".into(),
                tags: vec![],
                content: vec![],
            }],
        };

        let html = render_at(&data, at).unwrap();
        assert!(html.contains("generated 2026-03-14 09:26 UTC"));
        assert!(html.contains(r#"<span id="shown">1</span> / 1 snippets"#));
        assert!(embedded_blob(&html).contains(r#""folderPath":"Root/Child""#));
    }
}
