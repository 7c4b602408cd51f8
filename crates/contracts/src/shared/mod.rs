pub mod content_selection;
