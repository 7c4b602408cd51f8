use super::view_model::ProviderPanelVm;
use crate::shared::icons::{icon, Icon};
use contracts::domain::a001_provider_connection::{ConnectionPhase, ContentProvider};
use leptos::prelude::*;
use thaw::*;

/// Форма учётных данных и кнопка подключения
#[component]
pub fn CredentialsForm<P: ContentProvider>(vm: ProviderPanelVm<P>) -> impl IntoView {
    let fields = vm.credentials.with_untracked(|form| form.fields().to_vec());
    let phase = vm.phase();
    let can_connect = vm.can_connect();

    let inputs = fields
        .into_iter()
        .map(|field| {
            let key = field.key;
            let label = if field.required {
                format!("{} *", field.label)
            } else {
                field.label.to_string()
            };
            view! {
                <div class="form__group">
                    <label class="form__label">{label}</label>
                    <input
                        class="form__input"
                        type=if field.secret { "password" } else { "text" }
                        placeholder=field.placeholder
                        prop:value=move || vm.credentials.with(|form| form.value(key).to_string())
                        on:input=move |ev| vm.set_credential(key, event_target_value(&ev))
                    />
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="provider-panel__credentials">
            {inputs}

            {move || match phase.get() {
                ConnectionPhase::Failed { reason } => view! {
                    <div class="warning-box">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">
                            {format!("Не удалось подключиться: {}", reason)}
                        </span>
                    </div>
                }.into_any(),
                _ => view! { <></> }.into_any(),
            }}

            <div class="provider-panel__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !can_connect.get())
                    on_click=move |_| vm.connect_command()
                >
                    {icon(Icon::Plug)}
                    " Подключить"
                </Button>
            </div>
        </div>
    }
}
