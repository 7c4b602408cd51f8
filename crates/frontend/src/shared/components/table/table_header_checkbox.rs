//! Чекбокс в заголовке таблицы: выбрать или снять все видимые строки
//!
//! # Примеры
//!
//! ```ignore
//! <TableHeaderCheckbox
//!     state=header_state
//!     on_change=Callback::new(move |check_all: bool| set_visible(check_all))
//! />
//! ```

use contracts::shared::content_selection::HeaderCheckState;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Три состояния: unchecked, checked, indeterminate.
/// При клике переключает между «выбрать все» и «снять все».
#[component]
pub fn TableHeaderCheckbox(
    #[prop(into)]
    state: Signal<HeaderCheckState>,

    /// true = выбрать все, false = снять все
    on_change: Callback<bool>,

    #[prop(default = 1)]
    width: u8,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate выставляется только через DOM
    Effect::new(move |_| {
        if let Some(input) = checkbox_ref.get() {
            let is_indeterminate = state.get() == HeaderCheckState::Indeterminate;
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(is_indeterminate);
            }
        }
    });

    view! {
        <div class=format!("content-table__header-cell col-span-{}", width)>
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || state.get() == HeaderCheckState::Checked
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </div>
    }
}
