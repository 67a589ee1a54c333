//! u508: анализ товара Wildberries по артикулу, региону и поисковому запросу

mod api;
mod help_dialog;
pub mod model;
mod recommendation_table;
mod region_picker;
mod results_table;
pub mod view;
pub mod view_model;

pub use view::ProductAnalysisPage;
