use super::styles::{register_style_filter, EXPORT_THEME};
use super::templates::{TEXT_TEMPLATE, TEXT_TEMPLATE_NAME};
use super::template_error;
use crate::error::Result;
use crate::model::OutputData;
use minijinja::{context, Environment};

pub const SEPARATOR_WIDTH: usize = 40;

/// Renders the plain-text listing. `use_color` only adds ANSI styling to the
/// fixed labels; the text content is identical either way.
pub fn render(data: &OutputData, use_color: bool) -> Result<String> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    register_style_filter(&mut env, EXPORT_THEME.clone(), use_color);
    env.add_template(TEXT_TEMPLATE_NAME, TEXT_TEMPLATE)
        .map_err(template_error)?;

    let tmpl = env.get_template(TEXT_TEMPLATE_NAME).map_err(template_error)?;
    tmpl.render(context! {
        snippets => &data.snippets,
        separator => "-".repeat(SEPARATOR_WIDTH),
    })
    .map_err(template_error)
}
