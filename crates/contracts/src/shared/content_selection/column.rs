//! Описание колонок таблицы выбора контента
//!
//! Ширина колонки задаётся в долях 12-колоночной сетки. Сумма ширин
//! колонок одной таблицы должна быть равна [`GRID_COLUMNS`].

use super::item::{ContentItem, ItemExtension, ItemField};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Количество долей в сетке строки таблицы
pub const GRID_COLUMNS: u8 = 12;

// ============================================================================
// Cell content
// ============================================================================

/// Тон бейджа в ячейке
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Brand,
    Success,
    Warning,
    Danger,
}

/// Отображаемый фрагмент ячейки.
///
/// UI-слой превращает его в разметку; сам фрагмент ничего не знает о DOM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    Text(String),
    Badge { label: String, tone: BadgeTone },
    Checkbox { checked: bool },
    Empty,
}

/// Пользовательская стратегия отрисовки ячейки. Должна быть чистой функцией.
pub trait CellRenderer<X: ItemExtension>: Send + Sync {
    fn render(&self, item: &ContentItem<X>) -> CellContent;
}

impl<X, F> CellRenderer<X> for F
where
    X: ItemExtension,
    F: Fn(&ContentItem<X>) -> CellContent + Send + Sync,
{
    fn render(&self, item: &ContentItem<X>) -> CellContent {
        self(item)
    }
}

/// Вид колонки: закрытый набор встроенных видов + пользовательский рендерер
pub enum ColumnKind<X: ItemExtension> {
    Text,
    /// Значение поля как бейдж; тон выбирается по значению
    Badge(fn(&str) -> BadgeTone),
    SelectCheckbox,
    Custom(Arc<dyn CellRenderer<X>>),
}

impl<X: ItemExtension> Clone for ColumnKind<X> {
    fn clone(&self) -> Self {
        match self {
            Self::Text => Self::Text,
            Self::Badge(tone) => Self::Badge(*tone),
            Self::SelectCheckbox => Self::SelectCheckbox,
            Self::Custom(renderer) => Self::Custom(Arc::clone(renderer)),
        }
    }
}

impl<X: ItemExtension> fmt::Debug for ColumnKind<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("Text"),
            Self::Badge(_) => f.write_str("Badge"),
            Self::SelectCheckbox => f.write_str("SelectCheckbox"),
            Self::Custom(_) => f.write_str("Custom"),
        }
    }
}

// ============================================================================
// Column descriptor
// ============================================================================

#[derive(Debug, Clone)]
pub struct ColumnDescriptor<X: ItemExtension> {
    pub key: &'static str,
    pub label: &'static str,
    /// Доля сетки, 1..=12
    pub width: u8,
    pub field: ItemField<X::Field>,
    pub kind: ColumnKind<X>,
    pub searchable: bool,
}

impl<X: ItemExtension> ColumnDescriptor<X> {
    /// Текстовая колонка; по умолчанию участвует в поиске
    pub fn text(key: &'static str, label: &'static str, width: u8, field: ItemField<X::Field>) -> Self {
        Self {
            key,
            label,
            width,
            field,
            kind: ColumnKind::Text,
            searchable: true,
        }
    }

    pub fn badge(
        key: &'static str,
        label: &'static str,
        width: u8,
        field: ItemField<X::Field>,
        tone: fn(&str) -> BadgeTone,
    ) -> Self {
        Self {
            kind: ColumnKind::Badge(tone),
            ..Self::text(key, label, width, field)
        }
    }

    /// Колонка с чекбоксом выбора; в поиске не участвует
    pub fn select_checkbox(key: &'static str, width: u8) -> Self {
        Self {
            key,
            label: "",
            width,
            field: ItemField::Selected,
            kind: ColumnKind::SelectCheckbox,
            searchable: false,
        }
    }

    pub fn custom(
        key: &'static str,
        label: &'static str,
        width: u8,
        field: ItemField<X::Field>,
        renderer: impl CellRenderer<X> + 'static,
    ) -> Self {
        Self {
            kind: ColumnKind::Custom(Arc::new(renderer)),
            ..Self::text(key, label, width, field)
        }
    }

    pub fn not_searchable(mut self) -> Self {
        self.searchable = false;
        self
    }

    /// Отрисовать ячейку для элемента
    pub fn render(&self, item: &ContentItem<X>) -> CellContent {
        match &self.kind {
            ColumnKind::Text => item
                .field_value(self.field)
                .filter(|v| !v.is_empty())
                .map(CellContent::Text)
                .unwrap_or(CellContent::Empty),
            ColumnKind::Badge(tone) => match item.field_value(self.field) {
                Some(value) if !value.is_empty() => CellContent::Badge {
                    tone: tone(&value),
                    label: value,
                },
                _ => CellContent::Empty,
            },
            ColumnKind::SelectCheckbox => CellContent::Checkbox {
                checked: item.is_selected(),
            },
            ColumnKind::Custom(renderer) => renderer.render(item),
        }
    }

    /// Строковое значение колонки для локального поиска
    pub fn search_text(&self, item: &ContentItem<X>) -> Option<String> {
        if !self.searchable {
            return None;
        }
        item.field_value(self.field)
    }
}

// ============================================================================
// Column set
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("column widths sum to {total}, expected 12")]
    WidthSum { total: u32 },
    #[error("column '{key}' has width {width}, expected 1..=12")]
    WidthOutOfRange { key: String, width: u8 },
}

/// Упорядоченный набор колонок одной таблицы
#[derive(Debug, Clone)]
pub struct ColumnSet<X: ItemExtension> {
    columns: Vec<ColumnDescriptor<X>>,
}

impl<X: ItemExtension> ColumnSet<X> {
    pub fn new(columns: Vec<ColumnDescriptor<X>>) -> Self {
        Self { columns }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColumnDescriptor<X>> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn total_width(&self) -> u32 {
        self.columns.iter().map(|c| u32::from(c.width)).sum()
    }

    /// Проверка инварианта сетки: каждая ширина в 1..=12, сумма ровно 12
    pub fn validate_grid(&self) -> Result<(), LayoutError> {
        if let Some(col) = self
            .columns
            .iter()
            .find(|c| c.width == 0 || c.width > GRID_COLUMNS)
        {
            return Err(LayoutError::WidthOutOfRange {
                key: col.key.to_string(),
                width: col.width,
            });
        }

        let total = self.total_width();
        if total != u32::from(GRID_COLUMNS) {
            return Err(LayoutError::WidthSum { total });
        }
        Ok(())
    }

    /// Текст элемента для локального поиска: значения всех searchable-колонок через пробел
    pub fn search_haystack(&self, item: &ContentItem<X>) -> String {
        self.columns
            .iter()
            .filter_map(|c| c.search_text(item))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<'a, X: ItemExtension> IntoIterator for &'a ColumnSet<X> {
    type Item = &'a ColumnDescriptor<X>;
    type IntoIter = std::slice::Iter<'a, ColumnDescriptor<X>>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
