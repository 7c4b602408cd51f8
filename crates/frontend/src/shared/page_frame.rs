//! Корневая обёртка страницы интеграций и панели провайдера.
//!
//! На корневом `div` выставляются `id` вида `"{entity}--{category}"`
//! и атрибут `data-page-category`, по которым стили отличают
//! страницу от модальной панели.

use leptos::prelude::*;

/// Системная страница (настройки)
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Форма/панель одной записи
pub const PAGE_CAT_DETAIL: &str = "detail";

pub fn page_class(category: &str, class: &str) -> String {
    let base_class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        _ => "page",
    };
    if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    }
}

#[component]
pub fn PageFrame(
    /// HTML id в формате `{entity}--{category}`
    page_id: &'static str,
    category: &'static str,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=page_id
            class=page_class(category, class)
            data-page-category=category
        >
            {children()}
        </div>
    }
}
