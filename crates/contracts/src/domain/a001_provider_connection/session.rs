//! Жизненный цикл панели провайдера: подключение → настройка → сохранение
//!
//! ```text
//! Disconnected --begin_connect--> Connecting --resolve(Ok)--> Connected --save--> Closed{committed}
//!      ^                              |
//!      |                         resolve(Err)
//!      +------ begin_connect ------ Failed
//! ```
//!
//! `close()` доступен из любого состояния. Каждое подключение получает
//! билет с номером поколения; `close()` и повторное подключение меняют
//! поколение, поэтому запоздавший результат старого подключения игнорируется.

use super::aggregate::ProviderId;
use super::commit::{CommitAdapter, CommitId, CommitPayload, ConnectionLookup};
use super::credentials::CredentialForm;
use crate::shared::content_selection::{selected_items, ContentItem, ItemExtension};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionPhase {
    Disconnected,
    Connecting,
    Connected,
    Failed { reason: String },
    Closed { committed: bool },
}

impl ConnectionPhase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Disconnected => "disconnected",
            Self::Connecting => "connecting",
            Self::Connected => "connected",
            Self::Failed { .. } => "failed",
            Self::Closed { .. } => "closed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("required credentials are empty: {}", .0.join(", "))]
    MissingCredentials(Vec<String>),
    #[error("'{action}' is not allowed while {phase}")]
    InvalidPhase {
        action: &'static str,
        phase: &'static str,
    },
    #[error("failed to serialize payload: {0}")]
    Payload(String),
}

/// Билет подключения, привязанный к поколению сессии
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectTicket {
    generation: u64,
}

#[derive(Debug, Clone)]
pub struct ProviderSession {
    provider_id: ProviderId,
    phase: ConnectionPhase,
    generation: u64,
    /// Учётные данные из ранее сохранённой конфигурации
    stored_credentials: Option<BTreeMap<String, String>>,
}

impl ProviderSession {
    /// Начальное состояние: `Connected`, если конфигурация уже сохранена
    pub fn open(provider_id: ProviderId, lookup: &dyn ConnectionLookup) -> Self {
        let stored = lookup.connection(&provider_id);
        let phase = if stored.is_some() {
            ConnectionPhase::Connected
        } else {
            ConnectionPhase::Disconnected
        };
        let stored_credentials = stored
            .and_then(|payload| payload.get("credentials").cloned())
            .and_then(|credentials| serde_json::from_value(credentials).ok());
        Self {
            provider_id,
            phase,
            generation: 0,
            stored_credentials,
        }
    }

    pub fn stored_credentials(&self) -> Option<&BTreeMap<String, String>> {
        self.stored_credentials.as_ref()
    }

    pub fn provider_id(&self) -> &ProviderId {
        &self.provider_id
    }

    pub fn phase(&self) -> &ConnectionPhase {
        &self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase == ConnectionPhase::Connecting
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.phase, ConnectionPhase::Closed { .. })
    }

    /// Таблица выбора показывается только в `Connected`
    pub fn shows_table(&self) -> bool {
        self.phase == ConnectionPhase::Connected
    }

    fn accepts_connect(&self) -> bool {
        matches!(
            self.phase,
            ConnectionPhase::Disconnected | ConnectionPhase::Failed { .. }
        )
    }

    /// Доступна ли кнопка подключения
    pub fn can_connect(&self, form: &CredentialForm) -> bool {
        self.accepts_connect() && form.is_complete()
    }

    pub fn begin_connect(&mut self, form: &CredentialForm) -> Result<ConnectTicket, SessionError> {
        if !self.accepts_connect() {
            return Err(SessionError::InvalidPhase {
                action: "connect",
                phase: self.phase.name(),
            });
        }
        let missing = form.missing_required();
        if !missing.is_empty() {
            return Err(SessionError::MissingCredentials(missing));
        }

        self.generation += 1;
        self.phase = ConnectionPhase::Connecting;
        Ok(ConnectTicket {
            generation: self.generation,
        })
    }

    /// Применить результат подключения. Возвращает `false`, если билет устарел
    /// (панель закрыта или начато новое подключение).
    pub fn resolve_connect(&mut self, ticket: ConnectTicket, outcome: Result<(), String>) -> bool {
        if ticket.generation != self.generation || self.phase != ConnectionPhase::Connecting {
            return false;
        }
        self.phase = match outcome {
            Ok(()) => ConnectionPhase::Connected,
            Err(reason) => ConnectionPhase::Failed { reason },
        };
        true
    }

    /// Закрыть без сохранения. Отменяет ожидающее подключение.
    pub fn close(&mut self) -> bool {
        if self.is_closed() {
            return false;
        }
        self.generation += 1;
        self.phase = ConnectionPhase::Closed { committed: false };
        true
    }

    /// Сохранить выбор: выбранные элементы в исходном порядке, учётные данные
    /// и время передаются в хранилище один раз, после чего панель закрывается.
    ///
    /// Пустая форма не затирает учётные данные прежней конфигурации.
    pub fn save<X>(
        &mut self,
        items: &[ContentItem<X>],
        form: &CredentialForm,
        committed_at: DateTime<Utc>,
        adapter: &dyn CommitAdapter,
    ) -> Result<CommitPayload<X>, SessionError>
    where
        X: ItemExtension + Serialize,
    {
        if self.phase != ConnectionPhase::Connected {
            return Err(SessionError::InvalidPhase {
                action: "save",
                phase: self.phase.name(),
            });
        }

        let payload = CommitPayload {
            commit_id: CommitId::new_v4(),
            provider_id: self.provider_id.clone(),
            selected_items: selected_items(items),
            credentials: form.captured().or_else(|| self.stored_credentials.clone()),
            configured_at: committed_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        };
        let json = serde_json::to_value(&payload).map_err(|e| SessionError::Payload(e.to_string()))?;

        adapter.configure(&self.provider_id, json);
        self.generation += 1;
        self.phase = ConnectionPhase::Closed { committed: true };
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_provider_connection::credentials::CredentialField;
    use crate::shared::content_selection::fixtures::{dish_columns, dish_facets, dish_item, Dish};
    use crate::shared::content_selection::{evaluate, selected_count, toggle, LocalSubstringFilter};
    use chrono::TimeZone;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct RecordingAdapter {
        calls: RefCell<Vec<(ProviderId, serde_json::Value)>>,
    }

    impl CommitAdapter for RecordingAdapter {
        fn configure(&self, provider_id: &ProviderId, payload: serde_json::Value) {
            self.calls.borrow_mut().push((provider_id.clone(), payload));
        }
    }

    fn no_connections() -> HashMap<ProviderId, serde_json::Value> {
        HashMap::new()
    }

    fn api_key_form() -> CredentialForm {
        CredentialForm::new(vec![CredentialField::required("api_key", "API Key", "").secret()])
    }

    fn connected_session() -> ProviderSession {
        let mut session = ProviderSession::open(ProviderId::new("crayon"), &no_connections());
        let mut form = api_key_form();
        form.set("api_key", "secret");
        let ticket = session.begin_connect(&form).unwrap();
        assert!(session.resolve_connect(ticket, Ok(())));
        session
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap()
    }

    #[test]
    fn test_opens_disconnected_without_stored_connection() {
        let session = ProviderSession::open(ProviderId::new("crayon"), &no_connections());
        assert_eq!(session.phase(), &ConnectionPhase::Disconnected);
        assert!(!session.shows_table());
    }

    #[test]
    fn test_opens_connected_when_already_configured() {
        let mut connections = no_connections();
        connections.insert(ProviderId::new("crayon"), serde_json::json!({}));

        let session = ProviderSession::open(ProviderId::new("crayon"), &connections);
        assert_eq!(session.phase(), &ConnectionPhase::Connected);
        assert!(session.shows_table());
    }

    #[test]
    fn test_blank_required_field_blocks_connect() {
        let mut session = ProviderSession::open(ProviderId::new("crayon"), &no_connections());
        let mut form = api_key_form();
        form.set("api_key", "   ");

        assert!(!session.can_connect(&form));
        assert_eq!(
            session.begin_connect(&form),
            Err(SessionError::MissingCredentials(vec!["api_key".to_string()]))
        );
        assert_eq!(session.phase(), &ConnectionPhase::Disconnected);
    }

    #[test]
    fn test_connect_goes_through_connecting() {
        let mut session = ProviderSession::open(ProviderId::new("crayon"), &no_connections());
        let mut form = api_key_form();
        form.set("api_key", "secret");

        let ticket = session.begin_connect(&form).unwrap();
        assert!(session.is_busy());
        assert!(!session.can_connect(&form));
        assert!(session.begin_connect(&form).is_err());

        assert!(session.resolve_connect(ticket, Ok(())));
        assert_eq!(session.phase(), &ConnectionPhase::Connected);
    }

    #[test]
    fn test_late_resolution_after_close_is_ignored() {
        let mut session = ProviderSession::open(ProviderId::new("crayon"), &no_connections());
        let mut form = api_key_form();
        form.set("api_key", "secret");

        let ticket = session.begin_connect(&form).unwrap();
        assert!(session.close());
        assert!(!session.resolve_connect(ticket, Ok(())));
        assert_eq!(session.phase(), &ConnectionPhase::Closed { committed: false });
    }

    #[test]
    fn test_failed_connect_allows_retry_and_stale_ticket_is_ignored() {
        let mut session = ProviderSession::open(ProviderId::new("crayon"), &no_connections());
        let mut form = api_key_form();
        form.set("api_key", "secret");

        let first = session.begin_connect(&form).unwrap();
        assert!(session.resolve_connect(first, Err("timeout".to_string())));
        assert_eq!(
            session.phase(),
            &ConnectionPhase::Failed {
                reason: "timeout".to_string()
            }
        );

        let second = session.begin_connect(&form).unwrap();
        assert!(!session.resolve_connect(first, Ok(())));
        assert!(session.is_busy());
        assert!(session.resolve_connect(second, Ok(())));
        assert!(session.shows_table());
    }

    #[test]
    fn test_save_outside_connected_does_not_commit() {
        let adapter = RecordingAdapter::default();
        let mut session = ProviderSession::open(ProviderId::new("crayon"), &no_connections());
        let items = vec![dish_item("c1", "Apple Pie", true)];

        let result = session.save(&items, &api_key_form(), fixed_time(), &adapter);
        assert_eq!(
            result,
            Err(SessionError::InvalidPhase {
                action: "save",
                phase: "disconnected"
            })
        );
        assert!(adapter.calls.borrow().is_empty());
    }

    #[test]
    fn test_close_is_idempotent_and_blocks_save() {
        let adapter = RecordingAdapter::default();
        let mut session = connected_session();
        assert!(session.close());
        assert!(!session.close());

        let items = vec![dish_item("c1", "Apple Pie", true)];
        assert!(session.save(&items, &api_key_form(), fixed_time(), &adapter).is_err());
        assert!(adapter.calls.borrow().is_empty());
    }

    #[test]
    fn test_search_toggle_and_save_scenario() {
        let adapter = RecordingAdapter::default();
        let mut session = connected_session();
        let mut items = vec![
            dish_item("c1", "Apple Pie", false),
            dish_item("c2", "Banana Bread", true),
        ];

        let visible = evaluate(&items, &dish_columns(), "apple", &dish_facets(), &LocalSubstringFilter);
        let visible_ids: Vec<&str> = visible.iter().map(|i| i.id()).collect();
        assert_eq!(visible_ids, vec!["c1"]);

        toggle(&mut items, "c1");
        assert!(items[0].is_selected());
        assert_eq!(selected_count(&items), 2);

        let mut form = api_key_form();
        form.set("api_key", "secret");
        let payload: CommitPayload<Dish> = session.save(&items, &form, fixed_time(), &adapter).unwrap();

        let ids: Vec<&str> = payload.selected_items.iter().map(|i| i.id()).collect();
        assert_eq!(ids, vec!["c1", "c2"]);
        assert_eq!(payload.configured_at, "2024-03-15T14:02:26Z");
        assert_eq!(payload.credentials.as_ref().map(|c| c["api_key"].as_str()), Some("secret"));
        assert_eq!(session.phase(), &ConnectionPhase::Closed { committed: true });

        let calls = adapter.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, ProviderId::new("crayon"));
        assert_eq!(calls[0].1["selectedItems"][0]["id"], "c1");
        assert_eq!(calls[0].1["selectedItems"][1]["id"], "c2");
    }

    #[test]
    fn test_reopened_provider_keeps_stored_credentials() {
        let adapter = RecordingAdapter::default();
        let mut connections = no_connections();
        connections.insert(
            ProviderId::new("crayon"),
            serde_json::json!({"selectedItems": [], "credentials": {"api_key": "secret"}}),
        );

        let mut session = ProviderSession::open(ProviderId::new("crayon"), &connections);
        assert_eq!(
            session.stored_credentials().map(|c| c["api_key"].as_str()),
            Some("secret")
        );

        let items = vec![dish_item("c1", "Apple Pie", true)];
        let payload = session.save(&items, &api_key_form(), fixed_time(), &adapter).unwrap();
        assert_eq!(payload.credentials.as_ref().map(|c| c["api_key"].as_str()), Some("secret"));
        assert_eq!(adapter.calls.borrow()[0].1["credentials"]["api_key"], "secret");
    }

    #[test]
    fn test_entered_credentials_replace_stored_ones() {
        let adapter = RecordingAdapter::default();
        let mut connections = no_connections();
        connections.insert(
            ProviderId::new("crayon"),
            serde_json::json!({"credentials": {"api_key": "old"}}),
        );

        let mut session = ProviderSession::open(ProviderId::new("crayon"), &connections);
        let mut form = api_key_form();
        form.set("api_key", "new");
        let payload: CommitPayload<Dish> = session.save(&[], &form, fixed_time(), &adapter).unwrap();
        assert_eq!(payload.credentials.as_ref().map(|c| c["api_key"].as_str()), Some("new"));
    }

    #[test]
    fn test_save_with_nothing_selected_commits_empty_list() {
        let adapter = RecordingAdapter::default();
        let mut session = connected_session();
        let items = vec![dish_item("c1", "Apple Pie", false)];

        let payload = session
            .save(&items, &CredentialForm::default(), fixed_time(), &adapter)
            .unwrap();
        assert!(payload.selected_items.is_empty());
        assert_eq!(payload.credentials, None);
        assert_eq!(adapter.calls.borrow().len(), 1);
    }
}
