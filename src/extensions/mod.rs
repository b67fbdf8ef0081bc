//! Marker overlay and tooltip building blocks used by the mini area chart.

pub mod markers;
pub mod tooltip;

pub use markers::{
    HighlightStyle, MarkerFormat, MarkerFormatter, MarkerFormatterParams, MarkerId, MarkerNode,
    MarkerOverlay, MarkerStyle, MarkerVisual, OverlayDiff, resolve_marker_visual,
};
pub use tooltip::{
    TOOLTIP_CLASS, TooltipContent, TooltipRenderer, TooltipRendererParams,
    TooltipRendererResult, default_content, format_key, format_number, format_value,
    to_tooltip_html,
};
