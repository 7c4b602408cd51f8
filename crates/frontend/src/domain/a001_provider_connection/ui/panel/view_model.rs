use crate::shared::config::PanelConfig;
use crate::shared::connection_store::ConnectionStore;
use chrono::Utc;
use contracts::domain::a001_provider_connection::{
    ConnectTicket, ConnectionPhase, ContentProvider, CredentialForm, ExtField, FilterMode,
    ProviderSession,
};
use contracts::shared::content_selection::{
    selected_count, set_selected, toggle, ColumnSet, ContentItem, DelegatedFilter, FilterState,
    FilterStrategy, LocalSubstringFilter,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;

/// ViewModel панели провайдера: подключение, таблица выбора, сохранение
pub struct ProviderPanelVm<P: ContentProvider> {
    pub session: RwSignal<ProviderSession>,
    pub credentials: RwSignal<CredentialForm>,
    pub items: RwSignal<Vec<ContentItem<P::Item>>>,
    pub filter: RwSignal<FilterState<ExtField<P>>>,
    /// Запрос, переданный таблицей в делегированном режиме
    pub delegated_query: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub is_loading: RwSignal<bool>,
    store: ConnectionStore,
    config: PanelConfig,
}

impl<P: ContentProvider> Clone for ProviderPanelVm<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: ContentProvider> Copy for ProviderPanelVm<P> {}

impl<P: ContentProvider> ProviderPanelVm<P> {
    /// Открыть панель и запустить загрузку коллекции
    pub fn new<F>(store: ConnectionStore, config: PanelConfig, fetch: F) -> Self
    where
        F: Future<Output = Result<Vec<ContentItem<P::Item>>, String>> + 'static,
    {
        let vm = Self::open(store, config);
        vm.load(fetch);
        vm
    }

    /// Состояние подключения читается из хранилища один раз; сохранённые
    /// учётные данные подставляются в форму.
    pub fn open(store: ConnectionStore, config: PanelConfig) -> Self {
        let session = ProviderSession::open(P::KIND.id(), &store);
        log::debug!(
            "Panel '{}' opened in phase '{}'",
            P::KIND.code(),
            session.phase().name()
        );

        let mut form = CredentialForm::new(P::credential_fields());
        if let Some(stored) = session.stored_credentials() {
            form.restore(stored);
        }

        Self {
            session: RwSignal::new(session),
            credentials: RwSignal::new(form),
            items: RwSignal::new(Vec::new()),
            filter: RwSignal::new(FilterState::new(P::facets())),
            delegated_query: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            is_loading: RwSignal::new(true),
            store,
            config,
        }
    }

    fn load<F>(&self, fetch: F)
    where
        F: Future<Output = Result<Vec<ContentItem<P::Item>>, String>> + 'static,
    {
        let items = self.items;
        let error = self.error;
        let is_loading = self.is_loading;

        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch.await;
            // панель могла быть закрыта до окончания загрузки
            match result {
                Ok(loaded) => {
                    let _ = items.try_set(loaded);
                }
                Err(e) => {
                    log::error!("Failed to load items: {}", e);
                    let _ = error.try_set(Some(format!("Ошибка загрузки: {}", e)));
                }
            }
            let _ = is_loading.try_set(false);
        });
    }

    pub fn columns(&self) -> ColumnSet<P::Item> {
        P::columns()
    }

    pub fn phase(&self) -> Signal<ConnectionPhase> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.phase().clone()))
    }

    pub fn can_connect(&self) -> Signal<bool> {
        let session = self.session;
        let credentials = self.credentials;
        Signal::derive(move || credentials.with(|form| session.with(|s| s.can_connect(form))))
    }

    pub fn can_save(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.shows_table()))
    }

    pub fn selected_count(&self) -> Signal<usize> {
        let items = self.items;
        Signal::derive(move || items.with(|items| selected_count(items)))
    }

    /// Коллекция для таблицы: в делегированном режиме отфильтрована предикатом панели
    pub fn table_items(&self) -> Signal<Vec<ContentItem<P::Item>>> {
        let items = self.items;
        let query = self.delegated_query;
        Signal::derive(move || {
            items.with(|items| {
                query.with(|query| P::prefilter(items, query).into_iter().cloned().collect())
            })
        })
    }

    pub fn strategy(&self) -> Arc<dyn FilterStrategy<P::Item>> {
        match P::filter_mode() {
            FilterMode::Local => Arc::new(LocalSubstringFilter),
            FilterMode::Delegated => {
                let query = self.delegated_query;
                Arc::new(DelegatedFilter::new(move |value: &str| {
                    query.set(value.to_string());
                }))
            }
        }
    }

    pub fn set_credential(&self, key: &str, value: String) {
        self.credentials.update(|form| {
            form.set(key, value);
        });
    }

    pub fn toggle(&self, id: String) {
        self.items.update(|items| {
            if !toggle(items, &id) {
                log::debug!("toggle: unknown item '{}'", id);
            }
        });
    }

    pub fn set_selected(&self, ids: HashSet<String>, selected: bool) {
        self.items.update(|items| {
            set_selected(items, &ids, selected);
        });
    }

    /// Подключиться: имитация с фиксированной задержкой, всегда успешна
    pub fn connect_command(&self) {
        let Some(ticket) = self.start_connect() else {
            return;
        };

        let session = self.session;
        let delay = self.config.connect_delay_ms;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(delay).await;
            Self::finish_connect(session, ticket);
        });
    }

    /// Перевести сессию в `Connecting`; `None`, если подключение не начато
    pub fn start_connect(&self) -> Option<ConnectTicket> {
        let session = self.session;
        let started = self
            .credentials
            .try_with_untracked(|form| session.try_update(|session| session.begin_connect(form)))
            .flatten();

        match started {
            Some(Ok(ticket)) => {
                let _ = self.error.try_set(None);
                Some(ticket)
            }
            Some(Err(e)) => {
                log::debug!("connect rejected: {}", e);
                None
            }
            None => None,
        }
    }

    /// Применить результат подключения. `None`, если панель уже уничтожена.
    pub fn finish_connect(session: RwSignal<ProviderSession>, ticket: ConnectTicket) -> Option<bool> {
        let code = P::KIND.code();
        let applied = session.try_update(|session| session.resolve_connect(ticket, Ok(())));
        match applied {
            Some(true) => log::info!("Provider '{}' connected", code),
            Some(false) => log::debug!("Provider '{}': stale connect result ignored", code),
            None => log::debug!("Provider '{}': panel disposed before connect finished", code),
        }
        applied
    }

    /// Сохранить выбор и закрыть панель
    pub fn save_command(&self, on_saved: Callback<()>) {
        let store = self.store;
        let session = self.session;
        let credentials = self.credentials;
        let result = self
            .items
            .try_with_untracked(|items| {
                credentials
                    .try_with_untracked(|form| {
                        session.try_update(|session| session.save(items, form, Utc::now(), &store))
                    })
                    .flatten()
            })
            .flatten();

        match result {
            Some(Ok(payload)) => {
                log::info!(
                    "Provider '{}' configured with {} item(s)",
                    payload.provider_id,
                    payload.selected_items.len()
                );
                on_saved.run(());
            }
            Some(Err(e)) => {
                let _ = self.error.try_set(Some(e.to_string()));
            }
            None => {}
        }
    }

    /// Закрыть без сохранения
    pub fn close_command(&self, on_close: Callback<()>) {
        let _ = self.session.try_update(|session| session.close());
        on_close.run(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_provider_connection::ConnectionLookup;
    use contracts::domain::a002_competitor_battlecard::{battlecard, Crayon};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, Callback<()>) {
        let runs = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&runs);
        let callback = Callback::new(move |_: ()| {
            sink.fetch_add(1, Ordering::SeqCst);
        });
        (runs, callback)
    }

    fn connected_panel(store: ConnectionStore) -> ProviderPanelVm<Crayon> {
        let vm = ProviderPanelVm::<Crayon>::open(store, PanelConfig::default());
        vm.items.set(vec![
            battlecard("bc-1", "Acme: ценовые возражения", "Acme", "published", Some(62)),
            battlecard("bc-2", "Globex: интеграции", "Globex", "draft", None),
        ]);
        vm.set_credential("api_key", "secret".to_string());
        let ticket = vm.start_connect().unwrap();
        assert_eq!(ProviderPanelVm::<Crayon>::finish_connect(vm.session, ticket), Some(true));
        vm
    }

    #[test]
    fn test_save_command_commits_once_then_notifies() {
        let owner = Owner::new();
        owner.set();

        let store = ConnectionStore::new();
        let vm = connected_panel(store);
        vm.toggle("bc-2".to_string());

        let (saved, on_saved) = counter();
        vm.save_command(on_saved);

        assert_eq!(saved.load(Ordering::SeqCst), 1);
        assert!(store.is_connected(Crayon::KIND));
        assert_eq!(store.selected_count(Crayon::KIND), Some(1));
        assert_eq!(
            vm.session.get_untracked().phase(),
            &ConnectionPhase::Closed { committed: true }
        );

        // повторное сохранение из закрытой панели не пишет в хранилище
        let (saved_again, on_saved_again) = counter();
        vm.save_command(on_saved_again);
        assert_eq!(saved_again.load(Ordering::SeqCst), 0);
        assert!(vm.error.get_untracked().is_some());
        assert_eq!(store.selected_count(Crayon::KIND), Some(1));

        owner.cleanup();
    }

    #[test]
    fn test_connect_result_after_dispose_leaves_store_untouched() {
        let root = Owner::new();
        root.set();
        let store = ConnectionStore::new();

        let panel_owner = root.child();
        let (vm, ticket) = panel_owner.with(|| {
            let vm = ProviderPanelVm::<Crayon>::open(store, PanelConfig::default());
            vm.set_credential("api_key", "secret".to_string());
            let ticket = vm.start_connect().unwrap();
            (vm, ticket)
        });
        assert!(vm.session.get_untracked().is_busy());

        let (closed, on_close) = counter();
        vm.close_command(on_close);
        assert_eq!(closed.load(Ordering::SeqCst), 1);
        panel_owner.cleanup();

        assert_eq!(ProviderPanelVm::<Crayon>::finish_connect(vm.session, ticket), None);
        let (saved, on_saved) = counter();
        vm.save_command(on_saved);

        assert_eq!(saved.load(Ordering::SeqCst), 0);
        assert!(store.connection(&Crayon::KIND.id()).is_none());
        assert!(!store.is_connected(Crayon::KIND));

        root.cleanup();
    }

    #[test]
    fn test_reopened_panel_restores_credentials() {
        let owner = Owner::new();
        owner.set();

        let store = ConnectionStore::new();
        let vm = connected_panel(store);
        let (_, on_saved) = counter();
        vm.save_command(on_saved);

        let reopened = ProviderPanelVm::<Crayon>::open(store, PanelConfig::default());
        assert!(reopened.can_save().get_untracked());
        assert_eq!(reopened.credentials.with_untracked(|f| f.value("api_key").to_string()), "secret");
        assert!(reopened.start_connect().is_none());

        owner.cleanup();
    }
}
