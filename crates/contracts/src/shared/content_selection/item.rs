use serde::{Deserialize, Serialize};

// ============================================================================
// Base item
// ============================================================================

/// Общие поля любого элемента контента, независимо от провайдера
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemBase {
    /// Уникальный в пределах коллекции идентификатор
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Единственное поле, которое меняется после создания
    #[serde(rename = "isSelected")]
    pub is_selected: bool,
}

impl ItemBase {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            is_selected: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn selected(mut self, is_selected: bool) -> Self {
        self.is_selected = is_selected;
        self
    }
}

// ============================================================================
// Provider-specific extension
// ============================================================================

/// Расширение элемента, специфичное для провайдера.
///
/// `Field` это закрытый перечень полей провайдера, по которым строятся колонки
/// и фасеты. Отсутствующее поле даёт `None`.
pub trait ItemExtension: Clone + PartialEq + Send + Sync + 'static {
    type Field: Copy + Eq + std::fmt::Debug + Send + Sync + 'static;

    fn value(&self, field: Self::Field) -> Option<String>;
}

/// Расширение-пустышка для провайдеров без собственных полей
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NoExtension {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoField {}

impl ItemExtension for NoExtension {
    type Field = NoField;

    fn value(&self, field: NoField) -> Option<String> {
        match field {}
    }
}

/// Ссылка на поле элемента: базовое поле или поле расширения
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField<F> {
    Name,
    Description,
    Selected,
    Ext(F),
}

// ============================================================================
// Content item
// ============================================================================

/// Элемент коллекции: базовые поля + расширение провайдера
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem<X> {
    #[serde(flatten)]
    pub base: ItemBase,
    #[serde(flatten)]
    pub extra: X,
}

impl<X: ItemExtension> ContentItem<X> {
    pub fn new(base: ItemBase, extra: X) -> Self {
        Self { base, extra }
    }

    pub fn id(&self) -> &str {
        &self.base.id
    }

    pub fn is_selected(&self) -> bool {
        self.base.is_selected
    }

    /// Строковое значение поля для поиска, фасетов и отображения
    pub fn field_value(&self, field: ItemField<X::Field>) -> Option<String> {
        match field {
            ItemField::Name => Some(self.base.name.clone()),
            ItemField::Description => self.base.description.clone(),
            ItemField::Selected => Some(self.base.is_selected.to_string()),
            ItemField::Ext(f) => self.extra.value(f),
        }
    }
}
