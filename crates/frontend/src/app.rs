use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::PanelConfig;
use crate::shared::connection_store::ConnectionStore;
use crate::system::pages::integrations::IntegrationsPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    provide_context(ConnectionStore::new());
    provide_context(PanelConfig::default());

    ctx.init_url_sync();

    view! {
        <IntegrationsPage />
    }
}
