pub mod content_table;
pub mod filter_panel;
pub mod table;
pub mod ui;

pub use content_table::ContentTable;
pub use filter_panel::{FacetSelects, FilterPanel, FilterTag};
