//! Чекбокс выбора строки таблицы
//!
//! # Примеры
//!
//! ```ignore
//! <TableCellCheckbox
//!     item_id=item.id().to_string()
//!     checked=item.is_selected()
//!     on_toggle=Callback::new(move |id| vm.toggle(id))
//! />
//! ```

use leptos::prelude::*;

/// Останавливает propagation клика, чтобы клик по чекбоксу
/// не считался ещё и кликом по строке
#[component]
pub fn TableCellCheckbox(
    #[prop(into)]
    item_id: String,

    checked: bool,

    /// Callback с ID элемента
    on_toggle: Callback<String>,

    /// Доля сетки
    #[prop(default = 1)]
    width: u8,
) -> impl IntoView {
    view! {
        <div
            class=format!("content-table__cell content-table__cell--checkbox col-span-{}", width)
            on:click=|e| e.stop_propagation()
        >
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                on:change=move |_| on_toggle.run(item_id.clone())
            />
        </div>
    }
}
