//! Charts of the roster
//!
//! [`DashboardData`] collects what the six panels show. The `ascii` charts
//! render them as terminal text; with the `visualization` feature the
//! `dashboard` module draws them to an SVG or PNG image with plotters.

pub mod ascii;
pub mod panels;
pub mod text;

#[cfg(feature = "visualization")]
pub mod dashboard;

pub use self::panels::{histogram_bins, BoxSummary, DashboardData, HistogramBin, PieSlice};
pub use self::text::render_text_dashboard;

#[cfg(feature = "visualization")]
pub use self::dashboard::{render_dashboard, PlotSettings};
