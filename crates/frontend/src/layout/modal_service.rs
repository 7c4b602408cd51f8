use leptos::prelude::*;

/// Модальное окно: клик по подложке вызывает `on_close`
///
/// ```ignore
/// view! {
///     <Modal on_close=Callback::new(move |_| ctx.close_panel())>
///         <MyPanel />
///     </Modal>
/// }
/// ```
#[component]
pub fn Modal(on_close: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <div
            class="modal-overlay"
            on:click=move |_| on_close.run(())
        >
            <div
                class="modal-content"
                on:click=|e| e.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}
