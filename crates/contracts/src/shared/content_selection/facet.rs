use super::item::{ContentItem, ItemExtension, ItemField};
use std::collections::HashSet;
use thiserror::Error;

/// Значение фасета «без ограничения»
pub const ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FacetError {
    #[error("facet '{facet}' has duplicate option '{value}'")]
    DuplicateOption { facet: String, value: String },
    #[error("duplicate facet key '{0}'")]
    DuplicateKey(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOption {
    pub value: String,
    pub label: String,
}

impl FacetOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    pub fn all(label: impl Into<String>) -> Self {
        Self::new(ALL, label)
    }
}

/// Фасет фильтра: одно выбранное значение из упорядоченного списка опций
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterFacet<F> {
    pub key: &'static str,
    pub label: &'static str,
    /// Поле элемента, с которым сравнивается текущее значение
    pub field: ItemField<F>,
    pub options: Vec<FacetOption>,
    pub current_value: String,
}

impl<F: Copy + Eq> FilterFacet<F> {
    /// Новый фасет в состоянии «все»
    pub fn new(
        key: &'static str,
        label: &'static str,
        field: ItemField<F>,
        options: Vec<FacetOption>,
    ) -> Self {
        Self {
            key,
            label,
            field,
            options,
            current_value: ALL.to_string(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.current_value != ALL
    }

    pub fn has_option(&self, value: &str) -> bool {
        value == ALL || self.options.iter().any(|o| o.value == value)
    }

    /// Подпись текущего значения (для тегов активных фильтров)
    pub fn current_label(&self) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == self.current_value)
            .map(|o| o.label.as_str())
    }

    /// Проверка элемента: «all» пропускает всё, иначе точное совпадение поля.
    /// Элемент без поля фасета не проходит.
    pub fn matches<X>(&self, item: &ContentItem<X>) -> bool
    where
        X: ItemExtension<Field = F>,
    {
        if !self.is_active() {
            return true;
        }
        item.field_value(self.field)
            .is_some_and(|value| value == self.current_value)
    }
}

/// Набор независимых фасетов; условия объединяются по И
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetSet<F> {
    facets: Vec<FilterFacet<F>>,
}

impl<F> Default for FacetSet<F> {
    fn default() -> Self {
        Self { facets: Vec::new() }
    }
}

impl<F: Copy + Eq> FacetSet<F> {
    pub fn new(facets: Vec<FilterFacet<F>>) -> Self {
        Self { facets }
    }

    /// Уникальность ключей фасетов и значений опций внутри фасета
    pub fn validate(&self) -> Result<(), FacetError> {
        let mut keys = HashSet::new();
        for facet in &self.facets {
            if !keys.insert(facet.key) {
                return Err(FacetError::DuplicateKey(facet.key.to_string()));
            }
            let mut values = HashSet::new();
            for option in &facet.options {
                if !values.insert(option.value.as_str()) {
                    return Err(FacetError::DuplicateOption {
                        facet: facet.key.to_string(),
                        value: option.value.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FilterFacet<F>> {
        self.facets.iter()
    }

    pub fn get(&self, key: &str) -> Option<&FilterFacet<F>> {
        self.facets.iter().find(|f| f.key == key)
    }

    /// Установить значение фасета. Неизвестный ключ или опция игнорируются.
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        match self.facets.iter_mut().find(|f| f.key == key) {
            Some(facet) if facet.has_option(value) => {
                facet.current_value = value.to_string();
                true
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        for facet in &mut self.facets {
            facet.current_value = ALL.to_string();
        }
    }

    pub fn active_count(&self) -> usize {
        self.facets.iter().filter(|f| f.is_active()).count()
    }

    pub fn matches<X>(&self, item: &ContentItem<X>) -> bool
    where
        X: ItemExtension<Field = F>,
    {
        self.facets.iter().all(|f| f.matches(item))
    }
}
