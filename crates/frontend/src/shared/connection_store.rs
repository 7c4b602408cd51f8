//! Хранилище сохранённых конфигураций интеграций (в памяти)
//!
//! Передаётся через контекст; панели читают его один раз при открытии
//! и пишут один раз при сохранении.

use contracts::domain::a001_provider_connection::{
    CommitAdapter, ConnectionLookup, ProviderId, ProviderKind,
};
use leptos::prelude::*;
use std::collections::HashMap;

#[derive(Clone, Copy)]
pub struct ConnectionStore {
    connections: RwSignal<HashMap<ProviderId, serde_json::Value>>,
}

impl ConnectionStore {
    pub fn new() -> Self {
        Self {
            connections: RwSignal::new(HashMap::new()),
        }
    }

    /// Реактивная проверка: есть ли сохранённая конфигурация провайдера
    pub fn is_connected(&self, kind: ProviderKind) -> bool {
        let id = kind.id();
        self.connections.with(|map| map.contains_key(&id))
    }

    /// Количество выбранных элементов в сохранённой конфигурации
    pub fn selected_count(&self, kind: ProviderKind) -> Option<usize> {
        let id = kind.id();
        self.connections.with(|map| {
            map.get(&id)
                .and_then(|payload| payload.get("selectedItems"))
                .and_then(|items| items.as_array())
                .map(|items| items.len())
        })
    }
}

impl Default for ConnectionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectionLookup for ConnectionStore {
    fn connection(&self, provider_id: &ProviderId) -> Option<serde_json::Value> {
        self.connections
            .with_untracked(|map| map.get(provider_id).cloned())
    }
}

impl CommitAdapter for ConnectionStore {
    fn configure(&self, provider_id: &ProviderId, payload: serde_json::Value) {
        log::info!("Saving configuration for provider '{}'", provider_id);
        self.connections.update(|map| {
            map.insert(provider_id.clone(), payload);
        });
    }
}

/// Хранилище из контекста
pub fn use_connection_store() -> ConnectionStore {
    use_context::<ConnectionStore>().expect("ConnectionStore not provided in context")
}
