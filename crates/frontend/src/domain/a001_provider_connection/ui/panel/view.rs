use super::credentials::CredentialsForm;
use super::view_model::ProviderPanelVm;
use crate::shared::components::ContentTable;
use crate::shared::icons::{icon, Icon};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use contracts::domain::a001_provider_connection::{ConnectionPhase, ContentProvider};
use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;

/// Панель провайдера: подключение → выбор контента → сохранение
#[component]
pub fn ProviderPanel<P: ContentProvider>(
    vm: ProviderPanelVm<P>,
    /// Вызывается после закрытия (с сохранением или без)
    on_close: Callback<()>,
) -> impl IntoView {
    let kind = P::KIND;
    let phase = vm.phase();
    let can_save = vm.can_save();

    view! {
        <PageFrame page_id="provider_panel--detail" category=PAGE_CAT_DETAIL class="provider-panel">
            <div class="page__header">
                <div class="page__header-left">
                    <h2 class="page__title">{kind.title()}</h2>
                    <span class="page__subtitle">{kind.category().as_str()}</span>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || !can_save.get())
                        on_click=move |_| vm.save_command(on_close)
                    >
                        {icon(Icon::Save)}
                        " Сохранить"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.close_command(on_close)
                    >
                        "Закрыть"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || vm.error.get().map(|err| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{err}</span>
                    </div>
                })}

                {move || match phase.get() {
                    ConnectionPhase::Disconnected | ConnectionPhase::Failed { .. } => view! {
                        <CredentialsForm vm=vm />
                    }.into_any(),
                    ConnectionPhase::Connecting => view! {
                        <Flex gap=FlexGap::Small align=FlexAlign::Center class="provider-panel__connecting">
                            <Spinner />
                            <span>"Подключение..."</span>
                        </Flex>
                    }.into_any(),
                    ConnectionPhase::Connected => {
                        if vm.is_loading.get() {
                            view! {
                                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                                    <Spinner />
                                    <span>"Загрузка..."</span>
                                </Flex>
                            }.into_any()
                        } else {
                            view! {
                                <ContentTable
                                    items=vm.table_items()
                                    columns=vm.columns()
                                    filter=vm.filter
                                    strategy=vm.strategy()
                                    selected_count=vm.selected_count()
                                    on_toggle=Callback::new(move |id: String| vm.toggle(id))
                                    on_set_selected=Callback::new(move |(ids, selected): (HashSet<String>, bool)| {
                                        vm.set_selected(ids, selected)
                                    })
                                />
                            }.into_any()
                        }
                    }
                    ConnectionPhase::Closed { .. } => view! { <></> }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}
