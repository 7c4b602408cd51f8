//! Общая подсистема списка выбираемого контента:
//! элементы, колонки, фасеты, поиск/фильтрация, выбор.

pub mod column;
pub mod facet;
pub mod filter;
pub mod item;
pub mod selection;

#[cfg(test)]
pub(crate) mod fixtures;

pub use column::{BadgeTone, CellContent, CellRenderer, ColumnDescriptor, ColumnKind, ColumnSet, LayoutError, GRID_COLUMNS};
pub use facet::{FacetError, FacetOption, FacetSet, FilterFacet, ALL};
pub use filter::{evaluate, DelegatedFilter, FilterState, FilterStrategy, LocalSubstringFilter};
pub use item::{ContentItem, ItemBase, ItemExtension, ItemField, NoExtension, NoField};
pub use selection::{
    header_state, selected_count, selected_items, selection_label, set_selected, toggle, HeaderCheckState,
};
