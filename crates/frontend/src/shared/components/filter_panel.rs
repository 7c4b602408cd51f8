use crate::shared::icons::{icon, Icon};
use contracts::shared::content_selection::FacetSet;
use leptos::prelude::*;

/// FilterPanel - сворачиваемая панель фильтров с бейджем активных фильтров
#[component]
pub fn FilterPanel(
    /// Развёрнута ли панель
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Количество активных фильтров (для бейджа)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Сброс всех фильтров
    on_reset: Callback<()>,

    /// Теги активных фильтров: (ключ, подпись)
    #[prop(into)]
    tags: Signal<Vec<(&'static str, String)>>,

    /// Удаление одного тега по ключу фильтра
    on_remove_tag: Callback<&'static str>,

    /// Поля фильтров
    children: ChildrenFn,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=toggle_expanded
                >
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon(Icon::ChevronDown)}
                    </span>
                    {icon(Icon::Filter)}
                    <span class="filter-panel__title">"Фильтры"</span>
                    {move || {
                        let count = active_filters_count.get();
                        if count > 0 {
                            view! {
                                <span class="badge badge--primary">{count}</span>
                            }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>
                <div class="filter-panel-header__right">
                    <button
                        class="button button--ghost"
                        disabled=move || active_filters_count.get() == 0
                        on:click=move |_| on_reset.run(())
                    >
                        "Сбросить"
                    </button>
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {children()}
                </div>
            </div>
            <div class="filter-panel__tags">
                {move || {
                    tags.get()
                        .into_iter()
                        .map(|(key, label)| view! {
                            <FilterTag
                                label=label
                                on_remove=Callback::new(move |_: ()| on_remove_tag.run(key))
                            />
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

/// FilterTag - чип активного фильтра
#[component]
pub fn FilterTag(
    #[prop(into)]
    label: String,

    /// Callback при удалении
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon(Icon::Close)}
            </span>
        </div>
    }
}

/// Выпадающие списки фасетов: одно значение на фасет
#[component]
pub fn FacetSelects<F>(
    #[prop(into)]
    facets: Signal<FacetSet<F>>,
    /// (ключ фасета, новое значение)
    on_change: Callback<(&'static str, String)>,
) -> impl IntoView
where
    F: Copy + Eq + Send + Sync + 'static,
{
    move || {
        facets.with(|facets| {
            facets
                .iter()
                .map(|facet| {
                    let key = facet.key;
                    let current = facet.current_value.clone();
                    let options = facet
                        .options
                        .iter()
                        .map(|option| {
                            let selected = option.value == current;
                            view! {
                                <option value=option.value.clone() selected=selected>
                                    {option.label.clone()}
                                </option>
                            }
                        })
                        .collect_view();
                    view! {
                        <div class="form__group">
                            <label class="form__label">{facet.label}</label>
                            <select
                                class="form__select"
                                prop:value=current.clone()
                                on:change=move |ev| on_change.run((key, event_target_value(&ev)))
                            >
                                {options}
                            </select>
                        </div>
                    }
                })
                .collect_view()
        })
    }
}
