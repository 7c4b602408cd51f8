//! Поиск и фильтрация коллекции элементов
//!
//! Видимое подмножество всегда вычисляется заново из
//! (коллекция, запрос, фасеты) и никогда не изменяется напрямую.
//! Поиск выполняется через [`FilterStrategy`]:
//! - [`LocalSubstringFilter`]: подстрока по searchable-колонкам;
//! - [`DelegatedFilter`]: таблица не фильтрует по запросу, коллекция
//!   уже отфильтрована владельцем, запрос передаётся наверх.
//!
//! Фасеты применяются всегда, независимо от стратегии, по И с поиском.

use super::column::ColumnSet;
use super::facet::{FacetSet, ALL};
use super::item::{ContentItem, ItemExtension};
use std::fmt;
use std::sync::Arc;

// ============================================================================
// Strategy
// ============================================================================

pub trait FilterStrategy<X: ItemExtension>: Send + Sync {
    /// Соответствует ли элемент поисковому запросу
    fn matches_query(&self, item: &ContentItem<X>, columns: &ColumnSet<X>, query: &str) -> bool;

    /// Уведомление о новом запросе (ввод в строке поиска или сброс)
    fn forward_query(&self, _query: &str) {}

    fn is_delegated(&self) -> bool {
        false
    }
}

/// Локальный поиск: регистронезависимая подстрока в значениях searchable-колонок
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSubstringFilter;

impl<X: ItemExtension> FilterStrategy<X> for LocalSubstringFilter {
    fn matches_query(&self, item: &ContentItem<X>, columns: &ColumnSet<X>, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        columns
            .search_haystack(item)
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}

/// Делегированный поиск: запрос уходит владельцу коллекции через `on_query`
#[derive(Clone)]
pub struct DelegatedFilter {
    on_query: Arc<dyn Fn(&str) + Send + Sync>,
}

impl DelegatedFilter {
    pub fn new(on_query: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self {
            on_query: Arc::new(on_query),
        }
    }
}

impl fmt::Debug for DelegatedFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DelegatedFilter")
    }
}

impl<X: ItemExtension> FilterStrategy<X> for DelegatedFilter {
    fn matches_query(&self, _item: &ContentItem<X>, _columns: &ColumnSet<X>, _query: &str) -> bool {
        true
    }

    fn forward_query(&self, query: &str) {
        (self.on_query)(query)
    }

    fn is_delegated(&self) -> bool {
        true
    }
}

// ============================================================================
// Evaluation
// ============================================================================

/// Видимое подмножество: порядок исходной коллекции сохраняется
pub fn evaluate<'a, X: ItemExtension>(
    items: &'a [ContentItem<X>],
    columns: &ColumnSet<X>,
    query: &str,
    facets: &FacetSet<X::Field>,
    strategy: &dyn FilterStrategy<X>,
) -> Vec<&'a ContentItem<X>> {
    items
        .iter()
        .filter(|item| strategy.matches_query(item, columns, query) && facets.matches(*item))
        .collect()
}

// ============================================================================
// Filter state (query + facets)
// ============================================================================

/// Состояние фильтров таблицы: строка поиска и значения фасетов.
///
/// Хранится одним значением, чтобы сброс был одним обновлением.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState<F> {
    pub query: String,
    pub facets: FacetSet<F>,
}

impl<F: Copy + Eq> FilterState<F> {
    pub fn new(facets: FacetSet<F>) -> Self {
        Self {
            query: String::new(),
            facets,
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_facet(&mut self, key: &str, value: &str) -> bool {
        self.facets.set(key, value)
    }

    /// Очистить поиск и вернуть все фасеты в «all»
    pub fn reset(&mut self) {
        self.query.clear();
        self.facets.reset();
    }

    pub fn is_pristine(&self) -> bool {
        self.query.is_empty() && self.facets.active_count() == 0
    }

    /// Количество активных фильтров: фасеты не в «all» + непустой поиск
    pub fn active_count(&self) -> usize {
        let query = usize::from(!self.query.trim().is_empty());
        self.facets.active_count() + query
    }

    /// Теги активных фасетов: (ключ, «Подпись: значение»)
    pub fn active_tags(&self) -> Vec<(&'static str, String)> {
        self.facets
            .iter()
            .filter(|f| f.current_value != ALL)
            .map(|f| {
                let value = f.current_label().unwrap_or(f.current_value.as_str());
                (f.key, format!("{}: {}", f.label, value))
            })
            .collect()
    }

    /// Текст для пустого результата с учётом активного запроса и фасетов
    pub fn empty_message(&self) -> String {
        let query = self.query.trim();
        let tags: Vec<String> = self.active_tags().into_iter().map(|(_, t)| t).collect();
        match (query.is_empty(), tags.is_empty()) {
            (true, true) => "Нет элементов".to_string(),
            (false, true) => format!("Ничего не найдено по запросу «{}»", query),
            (true, false) => format!("Нет элементов для фильтра: {}", tags.join(", ")),
            (false, false) => format!(
                "Ничего не найдено по запросу «{}» с фильтром: {}",
                query,
                tags.join(", ")
            ),
        }
    }
}

impl<F: Copy + Eq> FilterState<F> {
    /// Вычислить видимое подмножество для текущего состояния
    pub fn apply<'a, X>(
        &self,
        items: &'a [ContentItem<X>],
        columns: &ColumnSet<X>,
        strategy: &dyn FilterStrategy<X>,
    ) -> Vec<&'a ContentItem<X>>
    where
        X: ItemExtension<Field = F>,
    {
        evaluate(items, columns, &self.query, &self.facets, strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::content_selection::fixtures::{
        dish_collection, dish_columns, dish_facets, dish_item, Dish,
    };
    use std::sync::Mutex;

    fn ids<X: ItemExtension>(items: &[&ContentItem<X>]) -> Vec<String> {
        items.iter().map(|i| i.base.id.clone()).collect()
    }

    #[test]
    fn test_identity_filter_returns_full_collection_in_order() {
        let items = dish_collection();
        let visible = evaluate(&items, &dish_columns(), "", &dish_facets(), &LocalSubstringFilter);
        assert_eq!(ids(&visible), vec!["c1", "c2", "c3", "c4"]);
    }

    #[test]
    fn test_local_search_is_case_insensitive_substring() {
        let items = dish_collection();
        let columns = dish_columns();
        let facets = dish_facets();

        let visible = evaluate(&items, &columns, "apple", &facets, &LocalSubstringFilter);
        assert_eq!(ids(&visible), vec!["c1"]);

        let visible = evaluate(&items, &columns, "BREAD", &facets, &LocalSubstringFilter);
        assert_eq!(ids(&visible), vec!["c2", "c4"]);
    }

    #[test]
    fn test_local_search_reads_extension_columns() {
        let items = dish_collection();
        let visible = evaluate(&items, &dish_columns(), "FRIED", &dish_facets(), &LocalSubstringFilter);
        assert_eq!(ids(&visible), vec!["c3"]);
    }

    #[test]
    fn test_non_searchable_column_is_ignored() {
        // значение select-колонки ("true"/"false") не ищется
        let items = vec![dish_item("c1", "Apple Pie", true)];
        let visible = evaluate(&items, &dish_columns(), "true", &dish_facets(), &LocalSubstringFilter);
        assert!(visible.is_empty());
    }

    #[test]
    fn test_visible_never_exceeds_collection() {
        let items = dish_collection();
        let columns = dish_columns();
        for query in ["", "a", "pie", "zzz", "e"] {
            let visible = evaluate(&items, &columns, query, &dish_facets(), &LocalSubstringFilter);
            assert!(visible.len() <= items.len());
        }
    }

    #[test]
    fn test_all_facet_equals_omitted_facet() {
        let items = dish_collection();
        let columns = dish_columns();

        let mut with_course = dish_facets();
        with_course.set("course", "dessert");
        let omitted = FacetSet::new(
            with_course
                .iter()
                .filter(|f| f.key == "course")
                .cloned()
                .collect(),
        );

        // в with_course фасет method стоит в «all», в omitted его нет вовсе
        assert!(omitted.get("method").is_none());
        assert_eq!(with_course.get("method").map(|f| f.current_value.as_str()), Some(ALL));
        assert_eq!(
            ids(&evaluate(&items, &columns, "", &with_course, &LocalSubstringFilter)),
            ids(&evaluate(&items, &columns, "", &omitted, &LocalSubstringFilter)),
        );
    }

    #[test]
    fn test_query_and_facets_are_and_combined() {
        let items = dish_collection();
        let mut facets = dish_facets();
        facets.set("course", "main");

        let visible = evaluate(&items, &dish_columns(), "bread", &facets, &LocalSubstringFilter);
        assert_eq!(ids(&visible), vec!["c4"]);
    }

    #[test]
    fn test_delegated_ignores_query_but_applies_facets() {
        let forwarded = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&forwarded);
        let strategy = DelegatedFilter::new(move |q| sink.lock().unwrap().push(q.to_string()));

        let items = dish_collection();
        let mut facets = dish_facets();

        let visible = evaluate(&items, &dish_columns(), "apple", &facets, &strategy);
        assert_eq!(visible.len(), items.len());

        facets.set("course", "dessert");
        let visible = evaluate(&items, &dish_columns(), "apple", &facets, &strategy);
        assert_eq!(ids(&visible), vec!["c1", "c2"]);

        FilterStrategy::<Dish>::forward_query(&strategy, "app");
        assert_eq!(*forwarded.lock().unwrap(), vec!["app".to_string()]);
    }

    #[test]
    fn test_filter_state_reset_is_single_step() {
        let mut state = FilterState::new(dish_facets());
        state.set_query("pie");
        state.set_facet("course", "dessert");
        assert_eq!(state.active_count(), 2);
        assert!(!state.is_pristine());

        state.reset();
        assert!(state.is_pristine());
        assert_eq!(state, FilterState::new(dish_facets()));
    }

    #[test]
    fn test_filter_state_apply_uses_query_and_facets() {
        let items = dish_collection();
        let mut state = FilterState::new(dish_facets());
        state.set_query("pie");
        let visible = state.apply(&items, &dish_columns(), &LocalSubstringFilter);
        assert_eq!(ids(&visible), vec!["c1"]);
    }

    #[test]
    fn test_empty_message_mentions_query_and_tags() {
        let mut state = FilterState::new(dish_facets());
        assert_eq!(state.empty_message(), "Нет элементов");

        state.set_query("soup");
        assert_eq!(state.empty_message(), "Ничего не найдено по запросу «soup»");

        state.set_facet("course", "dessert");
        assert_eq!(
            state.empty_message(),
            "Ничего не найдено по запросу «soup» с фильтром: Блюдо: Десерты"
        );
    }
}
