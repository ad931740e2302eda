//! View rendering seam.
//!
//! Handlers hand a template name and a JSON context across this boundary.
//! Template internals are out of scope here; the default renderer emits a
//! minimal shell the asset pipeline hydrates from the embedded context.

use serde_json::Value;

pub trait ViewRenderer: Send + Sync {
    fn render(&self, template: &str, context: &Value) -> String;
}

#[derive(Debug, Default)]
pub struct BasicRenderer;

impl ViewRenderer for BasicRenderer {
    fn render(&self, template: &str, context: &Value) -> String {
        format!(
            "<!doctype html>\n<html>\n<head><meta charset=\"utf-8\"><title>{template}</title></head>\n<body data-template=\"{template}\">\n<script type=\"application/json\" id=\"view-context\">{context}</script>\n</body>\n</html>\n"
        )
    }
}
