use crate::core::NodeDatum;
use crate::extensions::{
    TooltipContent, TooltipRenderer, TooltipRendererParams, TooltipRendererResult,
    default_content, to_tooltip_html,
};
use crate::render::Renderer;

use super::MiniAreaChart;

impl<R: Renderer> MiniAreaChart<R> {
    pub fn set_tooltip_renderer(&mut self, renderer: Option<TooltipRenderer>) {
        self.tooltip_renderer = renderer;
    }

    /// Defaults a tooltip for `datum` starts from: title, text and marker fill.
    #[must_use]
    pub fn tooltip_defaults(&self, datum: &NodeDatum) -> TooltipContent {
        TooltipContent {
            title: self.title.clone(),
            content: Some(default_content(&datum.series_datum)),
            color: None,
            background_color: self.marker.fill,
            opacity: None,
        }
    }

    /// Tooltip markup for `datum`, or `None` while tooltips are disabled.
    ///
    /// A tooltip renderer, when set, sees the raw values and may return
    /// markup or fields that replace the defaults.
    #[must_use]
    pub fn get_tooltip_html(&self, datum: &NodeDatum) -> Option<String> {
        if !self.tooltip.enabled {
            return None;
        }

        let defaults = self.tooltip_defaults(datum);
        let result = match &self.tooltip_renderer {
            Some(renderer) => renderer(&TooltipRendererParams {
                datum: &datum.series_datum,
                title: self.title.as_deref(),
                background_color: self.marker.fill,
                x_value: &datum.series_datum.x,
                y_value: datum.series_datum.y,
            }),
            None => TooltipRendererResult::Content(TooltipContent::default()),
        };

        Some(to_tooltip_html(result, &defaults))
    }
}
