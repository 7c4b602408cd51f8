use contracts::domain::a001_provider_connection::{ProviderId, ProviderKind};
use contracts::domain::common::AggregateId;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Глобальное состояние страницы интеграций.
///
/// Открытая панель провайдера отражается в URL (`?provider=<id>`).
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub open_provider: RwSignal<Option<ProviderKind>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            open_provider: RwSignal::new(None),
        }
    }

    pub fn open_panel(&self, kind: ProviderKind) {
        log::debug!("open_panel: provider='{}'", kind.code());
        self.open_provider.set(Some(kind));
    }

    pub fn close_panel(&self) {
        log::debug!("close_panel");
        self.open_provider.set(None);
    }

    /// Восстановить открытую панель из URL и синхронизировать URL с состоянием
    pub fn init_url_sync(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(kind) = provider_from_query(&search) {
            self.open_provider.set(Some(kind));
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = query_for_provider(this.open_provider.get());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let target = if new_url.is_empty() {
                            w.location().pathname().unwrap_or_default()
                        } else {
                            new_url
                        };
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&target),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Провайдер из строки запроса (`?provider=guru`)
pub fn provider_from_query(search: &str) -> Option<ProviderKind> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    let id = ProviderId::from_string(params.get("provider")?).ok()?;
    ProviderKind::from_id(&id)
}

/// Строка запроса для открытой панели; пустая, если панель закрыта
pub fn query_for_provider(kind: Option<ProviderKind>) -> String {
    match kind {
        Some(kind) => {
            let query_string = serde_qs::to_string(&HashMap::from([(
                "provider".to_string(),
                kind.id().as_string(),
            )]))
            .unwrap_or_default();
            format!("?{}", query_string)
        }
        None => String::new(),
    }
}
