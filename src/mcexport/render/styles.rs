use console::Style;
use minijinja::{Environment, Value};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Named styles applied through the `style` template filter.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, replacing any existing style with that name.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Styles `text`. Unknown names leave the text untouched.
    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.apply_to(text).to_string(),
            None => text.to_string(),
        }
    }
}

pub static EXPORT_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add("label", Style::new().bold())
        .add("part", Style::new().cyan())
        .add("separator", Style::new().dim())
});

/// Registers `{{ value | style("name") }}`. With `use_color` off the filter
/// passes text through, so plain output never carries escape codes.
pub fn register_style_filter(env: &mut Environment<'static>, theme: Theme, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        if use_color {
            theme.apply(&name, &text)
        } else {
            text
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_style_is_plain() {
        let theme = Theme::new();
        assert_eq!(theme.apply("missing", "hello"), "hello");
    }

    #[test]
    fn test_known_style_emits_ansi() {
        let theme = Theme::new().add("bold", Style::new().bold().force_styling(true));
        let styled = theme.apply("bold", "hello");
        assert!(styled.contains("hello"));
        assert!(styled.contains("\x1b[1m"));
    }

    #[test]
    fn test_export_theme_covers_template_names() {
        console::set_colors_enabled(true);
        for name in ["label", "part", "separator"] {
            assert_ne!(EXPORT_THEME.apply(name, "x"), "x", "missing style {name}");
        }
    }

    #[test]
    fn test_filter_without_color_is_passthrough() {
        let theme = Theme::new().add("label", Style::new().red().force_styling(true));
        let mut env = Environment::new();
        register_style_filter(&mut env, theme, false);
        env.add_template("t", r#"{{ "Snippet:" | style("label") }}"#)
            .unwrap();

        let out = env
            .get_template("t")
            .unwrap()
            .render(minijinja::context! {})
            .unwrap();
        assert_eq!(out, "Snippet:");
    }

    #[test]
    fn test_filter_with_color_styles() {
        let theme = Theme::new().add("label", Style::new().red().force_styling(true));
        let mut env = Environment::new();
        register_style_filter(&mut env, theme, true);
        env.add_template("t", r#"{{ "Snippet:" | style("label") }}"#)
            .unwrap();

        let out = env
            .get_template("t")
            .unwrap()
            .render(minijinja::context! {})
            .unwrap();
        assert!(out.contains("\x1b[31m"));
    }
}
