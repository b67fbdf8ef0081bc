mod data_controller;
mod highlight_controller;
mod invalidation;
mod json_contract;
mod marker_controller;
mod mini_area_chart;
mod node_data_generator;
mod options;
mod path_builders;
mod render_coordinator;
mod style_controller;
mod tooltip_builder;

pub use invalidation::InvalidationLevel;
pub use json_contract::{SPARKLINE_FRAME_JSON_SCHEMA_V1, SparklineFrameJsonContractV1};
pub use mini_area_chart::MiniAreaChart;
pub use node_data_generator::{NodeDataSet, generate_node_data};
pub use options::{AxisStyle, LineStyle, MiniAreaChartOptions, Padding, TooltipOptions};
pub use path_builders::{MIN_PATH_SAMPLES, build_fill_path, build_stroke_path};
