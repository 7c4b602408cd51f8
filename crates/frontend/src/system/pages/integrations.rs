use crate::domain::a002_competitor_battlecard::ui::panel::CrayonPanel;
use crate::domain::a003_knowledge_card::ui::panel::GuruPanel;
use crate::domain::a004_enablement_asset::ui::panel::HighspotPanel;
use crate::layout::{AppGlobalContext, Modal};
use crate::shared::connection_store::use_connection_store;
use crate::shared::icons::{icon, Icon};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use contracts::domain::a001_provider_connection::ProviderKind;
use leptos::prelude::*;
use thaw::*;

/// Панель провайдера по виду
fn provider_panel(kind: ProviderKind, on_close: Callback<()>) -> AnyView {
    match kind {
        ProviderKind::Crayon => view! { <CrayonPanel on_close=on_close /> }.into_any(),
        ProviderKind::Guru => view! { <GuruPanel on_close=on_close /> }.into_any(),
        ProviderKind::Highspot => view! { <HighspotPanel on_close=on_close /> }.into_any(),
    }
}

#[component]
fn ProviderCard(kind: ProviderKind) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let store = use_connection_store();

    view! {
        <div class="integration-card" on:click=move |_| ctx.open_panel(kind)>
            <div class="integration-card__header">
                <div class="integration-card__title">{kind.title()}</div>
                <div class="integration-card__category">{kind.category().as_str()}</div>
            </div>
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                {move || {
                    if store.is_connected(kind) {
                        let count = store.selected_count(kind).unwrap_or(0);
                        view! {
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                                {icon(Icon::Check)}
                                {format!(" Подключено · {}", count)}
                            </Badge>
                        }.into_any()
                    } else {
                        view! {
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                                "Не подключено"
                            </Badge>
                        }.into_any()
                    }
                }}
                <Button appearance=ButtonAppearance::Secondary>
                    {move || if store.is_connected(kind) { "Настроить" } else { "Подключить" }}
                </Button>
            </Flex>
        </div>
    }
}

/// Настройки интеграций: карточки провайдеров и панель выбранного провайдера
#[component]
pub fn IntegrationsPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let on_close = Callback::new(move |_: ()| ctx.close_panel());

    view! {
        <PageFrame page_id="integrations--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <h1 class="page__title">"Интеграции контента"</h1>
            </div>

            <div class="page__content">
                <div class="integration-grid">
                    {ProviderKind::ALL
                        .into_iter()
                        .map(|kind| view! { <ProviderCard kind=kind /> })
                        .collect_view()}
                </div>
            </div>

            {move || ctx.open_provider.get().map(|kind| view! {
                <Modal on_close=on_close>
                    {provider_panel(kind, on_close)}
                </Modal>
            })}
        </PageFrame>
    }
}
