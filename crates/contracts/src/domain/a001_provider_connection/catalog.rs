//! Каталог провайдера: всё, что нужно панели для отрисовки таблицы выбора

use super::aggregate::ProviderKind;
use super::credentials::CredentialField;
use crate::shared::content_selection::{
    ColumnSet, ContentItem, FacetError, FacetSet, ItemExtension, LayoutError,
};
use serde::Serialize;
use thiserror::Error;

/// Кто фильтрует коллекцию по строке поиска
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Таблица сама ищет подстроку по searchable-колонкам
    Local,
    /// Панель фильтрует коллекцию своим предикатом, таблица только передаёт запрос
    Delegated,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Facet(#[from] FacetError),
}

pub type ExtField<P> = <<P as ContentProvider>::Item as ItemExtension>::Field;

pub trait ContentProvider: 'static {
    type Item: ItemExtension + Serialize;

    const KIND: ProviderKind;

    fn columns() -> ColumnSet<Self::Item>;

    fn facets() -> FacetSet<ExtField<Self>>;

    fn credential_fields() -> Vec<CredentialField>;

    fn filter_mode() -> FilterMode {
        FilterMode::Local
    }

    /// Предикат панели для делегированного поиска
    fn panel_matches(_item: &ContentItem<Self::Item>, _query: &str) -> bool {
        true
    }

    /// Коллекция, которую панель передаёт в таблицу.
    /// В делегированном режиме уже отфильтрована предикатом панели.
    fn prefilter<'a>(items: &'a [ContentItem<Self::Item>], query: &str) -> Vec<&'a ContentItem<Self::Item>> {
        let query = query.trim();
        match Self::filter_mode() {
            FilterMode::Delegated if !query.is_empty() => items
                .iter()
                .filter(|item| Self::panel_matches(item, query))
                .collect(),
            _ => items.iter().collect(),
        }
    }
}

/// Проверка описания таблицы провайдера: сетка колонок и уникальность фасетов
pub fn validate_catalog<P: ContentProvider>() -> Result<(), CatalogError> {
    P::columns().validate_grid()?;
    P::facets().validate()?;
    Ok(())
}
