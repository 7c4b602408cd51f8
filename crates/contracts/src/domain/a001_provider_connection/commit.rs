//! Граница с внешним хранилищем конфигураций интеграций
//!
//! Хранилище передаётся в панель явно (трейты), а не через глобальный синглтон.

use super::aggregate::ProviderId;
use crate::domain::common::AggregateId;
use crate::shared::content_selection::ContentItem;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

// ============================================================================
// Boundary traits
// ============================================================================

/// Сохранение конфигурации провайдера. Вызывается ровно один раз на успешное
/// сохранение; результат не возвращается, повтор не предусмотрен.
pub trait CommitAdapter {
    fn configure(&self, provider_id: &ProviderId, payload: serde_json::Value);
}

/// Поиск уже сохранённой конфигурации провайдера
pub trait ConnectionLookup {
    fn connection(&self, provider_id: &ProviderId) -> Option<serde_json::Value>;
}

impl ConnectionLookup for HashMap<ProviderId, serde_json::Value> {
    fn connection(&self, provider_id: &ProviderId) -> Option<serde_json::Value> {
        self.get(provider_id).cloned()
    }
}

impl ConnectionLookup for BTreeMap<ProviderId, serde_json::Value> {
    fn connection(&self, provider_id: &ProviderId) -> Option<serde_json::Value> {
        self.get(provider_id).cloned()
    }
}

// ============================================================================
// Payload
// ============================================================================

/// Уникальный идентификатор сохранения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommitId(pub Uuid);

impl CommitId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for CommitId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CommitId)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Содержимое сохранения: выбранные элементы, учётные данные, время
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitPayload<X> {
    pub commit_id: CommitId,
    pub provider_id: ProviderId,
    pub selected_items: Vec<ContentItem<X>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<BTreeMap<String, String>>,
    /// RFC 3339 / ISO-8601
    pub configured_at: String,
}
