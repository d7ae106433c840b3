/*!
This crate renders charts to static svg on the server. Each chart type has a `draw_*` function producing the svg and a component in [`components`] that wraps it with a title and legend.
*/

pub mod bar_chart;
mod common;
pub mod components;
mod config;
pub mod line_chart;
pub mod pie_chart;

pub use self::common::{GridLineInterval, Point, Rect};
pub use self::components::*;
pub use self::config::{ChartConfig, CHART_COLORS, CHART_CONFIG};
