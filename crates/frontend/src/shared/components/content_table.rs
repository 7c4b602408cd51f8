//! Универсальная таблица выбора контента
//!
//! Таблица не владеет данными: коллекция, состояние фильтров и выбор
//! принадлежат панели провайдера и приходят через props/callbacks.
//! Видимое подмножество пересчитывается из (коллекция, запрос, фасеты)
//! на каждое изменение.

use super::filter_panel::{FacetSelects, FilterPanel};
use super::table::{TableCellCheckbox, TableHeaderCheckbox};
use super::ui::Badge;
use crate::shared::config::use_panel_config;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use contracts::shared::content_selection::{
    header_state, selection_label, CellContent, ColumnDescriptor, ColumnKind, ColumnSet,
    ContentItem, FilterState, FilterStrategy, ItemExtension, ALL,
};
use leptos::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

/// CSS-класс ячейки для доли сетки
pub fn cell_class(width: u8) -> String {
    format!("content-table__cell col-span-{}", width)
}

/// Отрисовать содержимое ячейки. Подсветка применяется только к тексту.
fn render_cell(content: CellContent, query: &str, min_len: usize) -> AnyView {
    match content {
        CellContent::Text(text) => highlight_matches(&text, query, min_len),
        CellContent::Badge { label, tone } => view! {
            <Badge tone=tone label=label />
        }
        .into_any(),
        CellContent::Checkbox { checked } => view! {
            <input type="checkbox" class="table__checkbox" prop:checked=checked disabled=true />
        }
        .into_any(),
        CellContent::Empty => view! { <span class="content-table__empty-cell">"—"</span> }.into_any(),
    }
}

#[component]
pub fn ContentTable<X>(
    /// Коллекция, переданная панелью (в делегированном режиме уже отфильтрована)
    #[prop(into)]
    items: Signal<Vec<ContentItem<X>>>,
    columns: ColumnSet<X>,
    /// Запрос и фасеты; принадлежат панели
    filter: RwSignal<FilterState<X::Field>>,
    strategy: Arc<dyn FilterStrategy<X>>,
    /// Количество выбранных по всей коллекции панели
    #[prop(into)]
    selected_count: Signal<usize>,
    on_toggle: Callback<String>,
    /// (ID видимых элементов, выбрать/снять)
    on_set_selected: Callback<(HashSet<String>, bool)>,
) -> impl IntoView
where
    X: ItemExtension,
{
    if let Err(err) = columns.validate_grid() {
        log::warn!("ContentTable: invalid column layout: {}", err);
    }

    let config = use_panel_config();
    let columns = StoredValue::new(columns);
    let strategy = StoredValue::new(strategy);
    let filters_expanded = RwSignal::new(false);

    let visible = Memo::new(move |_| {
        items.with(|items| {
            filter.with(|state| {
                columns.with_value(|columns| {
                    strategy.with_value(|strategy| {
                        state
                            .apply(items, columns, strategy.as_ref())
                            .into_iter()
                            .cloned()
                            .collect::<Vec<_>>()
                    })
                })
            })
        })
    });

    let query = Signal::derive(move || filter.with(|state| state.query.clone()));
    let facets = Signal::derive(move || filter.with(|state| state.facets.clone()));
    let active_count = Signal::derive(move || filter.with(|state| state.active_count()));
    let tags = Signal::derive(move || filter.with(|state| state.active_tags()));
    let check_state = Signal::derive(move || {
        visible.with(|items| header_state(&items.iter().collect::<Vec<_>>()))
    });

    let on_query = Callback::new(move |value: String| {
        strategy.with_value(|strategy| strategy.forward_query(&value));
        filter.update(|state| state.set_query(value));
    });

    let on_facet = Callback::new(move |(key, value): (&'static str, String)| {
        filter.update(|state| {
            state.set_facet(key, &value);
        });
    });

    let on_remove_tag = Callback::new(move |key: &'static str| {
        filter.update(|state| {
            state.set_facet(key, ALL);
        });
    });

    let on_reset = Callback::new(move |_: ()| {
        filter.update(|state| state.reset());
        strategy.with_value(|strategy| strategy.forward_query(""));
    });

    let on_check_all = Callback::new(move |check_all: bool| {
        let ids: HashSet<String> =
            visible.with_untracked(|items| items.iter().map(|item| item.id().to_string()).collect());
        on_set_selected.run((ids, check_all));
    });

    let header = move || {
        columns.with_value(|columns| {
            columns
                .iter()
                .map(|column| match column.kind {
                    ColumnKind::SelectCheckbox => view! {
                        <TableHeaderCheckbox
                            state=check_state
                            on_change=on_check_all
                            width=column.width
                        />
                    }
                    .into_any(),
                    _ => view! {
                        <div class=format!("content-table__header-cell col-span-{}", column.width)>
                            {column.label}
                        </div>
                    }
                    .into_any(),
                })
                .collect_view()
        })
    };

    let render_row = move |item: ContentItem<X>| {
        let id = item.id().to_string();
        let row_id = id.clone();
        let query_text = query.get();
        let cells = columns.with_value(|columns: &ColumnSet<X>| {
            columns
                .iter()
                .map(|column: &ColumnDescriptor<X>| match column.kind {
                    ColumnKind::SelectCheckbox => view! {
                        <TableCellCheckbox
                            item_id=id.clone()
                            checked=item.is_selected()
                            on_toggle=on_toggle
                            width=column.width
                        />
                    }
                    .into_any(),
                    _ => {
                        let highlight = if column.searchable { query_text.as_str() } else { "" };
                        view! {
                            <div class=cell_class(column.width)>
                                {render_cell(column.render(&item), highlight, config.highlight_min_len)}
                            </div>
                        }
                        .into_any()
                    }
                })
                .collect_view()
        });
        let row_class = if item.is_selected() {
            "content-table__row content-table__row--selected"
        } else {
            "content-table__row"
        };
        view! {
            <div class=row_class on:click=move |_| on_toggle.run(row_id.clone())>
                {cells}
            </div>
        }
    };

    view! {
        <div class="content-table">
            <div class="content-table__toolbar">
                <SearchInput
                    value=query
                    on_change=on_query
                    placeholder=config.search_placeholder.to_string()
                />
                <span class="content-table__selection">
                    {move || selection_label(selected_count.get())}
                </span>
            </div>

            <FilterPanel
                is_expanded=filters_expanded
                active_filters_count=active_count
                on_reset=on_reset
                tags=tags
                on_remove_tag=on_remove_tag
            >
                <FacetSelects facets=facets on_change=on_facet />
            </FilterPanel>

            <div class="content-table__grid">
                <div class="content-table__header">{header}</div>
                {move || {
                    let rows = visible.get();
                    if rows.is_empty() {
                        view! {
                            <div class="content-table__empty">
                                {filter.with(|state| state.empty_message())}
                            </div>
                        }
                        .into_any()
                    } else {
                        rows.into_iter().map(render_row).collect_view().into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_class_uses_grid_share() {
        assert_eq!(cell_class(5), "content-table__cell col-span-5");
        assert_eq!(cell_class(1), "content-table__cell col-span-1");
    }
}
