pub mod model;

use crate::domain::a001_provider_connection::ui::panel::{ProviderPanel, ProviderPanelVm};
use crate::shared::config::use_panel_config;
use crate::shared::connection_store::use_connection_store;
use contracts::domain::a002_competitor_battlecard::Crayon;
use leptos::prelude::*;

#[component]
pub fn CrayonPanel(on_close: Callback<()>) -> impl IntoView {
    let vm = ProviderPanelVm::<Crayon>::new(
        use_connection_store(),
        use_panel_config(),
        model::fetch_items(),
    );

    view! { <ProviderPanel vm=vm on_close=on_close /> }
}
