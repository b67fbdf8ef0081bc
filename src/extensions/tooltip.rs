use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::core::{SeriesDatum, SeriesKey};
use crate::render::Color;

/// CSS class of the tooltip container; title and content spans append `-title`/`-content`.
pub const TOOLTIP_CLASS: &str = "sparkline-tooltip";

/// Tooltip fields. Unset fields fall back to the chart defaults when merged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipContent {
    pub title: Option<String>,
    pub content: Option<String>,
    pub color: Option<Color>,
    pub background_color: Option<Color>,
    pub opacity: Option<f64>,
}

impl TooltipContent {
    /// Fills every unset field from `defaults`.
    #[must_use]
    pub fn merged_over(self, defaults: &Self) -> Self {
        Self {
            title: self.title.or_else(|| defaults.title.clone()),
            content: self.content.or_else(|| defaults.content.clone()),
            color: self.color.or(defaults.color),
            background_color: self.background_color.or(defaults.background_color),
            opacity: self.opacity.or(defaults.opacity),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TooltipRendererParams<'a> {
    pub datum: &'a SeriesDatum,
    pub title: Option<&'a str>,
    pub background_color: Option<Color>,
    pub x_value: &'a SeriesKey,
    pub y_value: Option<f64>,
}

/// What a tooltip renderer hands back: finished markup, or fields merged over the defaults.
#[derive(Debug, Clone, PartialEq)]
pub enum TooltipRendererResult {
    Html(String),
    Content(TooltipContent),
}

/// Caller-supplied tooltip renderer.
pub type TooltipRenderer = Box<dyn Fn(&TooltipRendererParams<'_>) -> TooltipRendererResult>;

/// Formats a number with at most one decimal, dropping a trailing `.0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    let text = format!("{value:.1}");
    let text = text.strip_suffix(".0").unwrap_or(&text);
    // Avoid printing "-0".
    if text == "-0" {
        "0".to_owned()
    } else {
        text.to_owned()
    }
}

#[must_use]
pub fn format_key(key: &SeriesKey) -> String {
    match key {
        SeriesKey::Number(value) => format_number(value.0),
        SeriesKey::Category(value) => value.clone(),
        SeriesKey::Time(value) => value.format("%a %b %d %Y").to_string(),
    }
}

#[must_use]
pub fn format_value(value: Option<f64>) -> String {
    value.map(format_number).unwrap_or_default()
}

/// Default tooltip text: `"{x}: {y}"` for categorical or time x, `"{y}"` for numeric x.
#[must_use]
pub fn default_content(datum: &SeriesDatum) -> String {
    if datum.x.is_numeric() {
        format_value(datum.y)
    } else {
        format!("{}: {}", format_key(&datum.x), format_value(datum.y))
    }
}

/// Renders tooltip markup. Raw HTML results are returned untouched.
///
/// Title and content are inserted as markup, not escaped.
#[must_use]
pub fn to_tooltip_html(input: TooltipRendererResult, defaults: &TooltipContent) -> String {
    let content = match input {
        TooltipRendererResult::Html(html) => return html,
        TooltipRendererResult::Content(content) => content.merged_over(defaults),
    };

    let color_style = content
        .color
        .map(|color| format!(" style=\"color: {}\"", color.to_css()))
        .unwrap_or_default();

    let mut html = String::new();
    let mut style = format!("opacity: {}", content.opacity.unwrap_or(1.0));
    if let Some(background) = content.background_color {
        let _ = write!(style, "; background-color: {}", background.to_css());
    }

    let _ = write!(html, "<div class=\"{TOOLTIP_CLASS}\" style=\"{style}\">");
    if let Some(title) = content.title.as_deref().filter(|title| !title.is_empty()) {
        let _ = write!(
            html,
            "<span class=\"{TOOLTIP_CLASS}-title\"{color_style}>{title}</span>"
        );
    }
    let _ = write!(
        html,
        "<span class=\"{TOOLTIP_CLASS}-content\"{color_style}>{}</span></div>",
        content.content.as_deref().unwrap_or_default()
    );
    html
}
