//! Выбор элементов коллекции
//!
//! Состояние выбора хранится только во флаге `is_selected` элементов.
//! Счётчики и подписи считаются по всей коллекции,
//! а не по видимому подмножеству.

use super::item::{ContentItem, ItemExtension};
use std::collections::HashSet;

/// Переключить выбор ровно одного элемента с указанным id.
///
/// Возвращает `false`, если такого элемента нет (коллекция не меняется).
pub fn toggle<X: ItemExtension>(items: &mut [ContentItem<X>], id: &str) -> bool {
    match items.iter_mut().find(|item| item.base.id == id) {
        Some(item) => {
            item.base.is_selected = !item.base.is_selected;
            true
        }
        None => false,
    }
}

/// Установить флаг выбора для набора id (выбрать/снять все видимые)
pub fn set_selected<X: ItemExtension>(items: &mut [ContentItem<X>], ids: &HashSet<String>, selected: bool) -> usize {
    let mut changed = 0;
    for item in items.iter_mut().filter(|item| ids.contains(&item.base.id)) {
        if item.base.is_selected != selected {
            item.base.is_selected = selected;
            changed += 1;
        }
    }
    changed
}

pub fn selected_count<X: ItemExtension>(items: &[ContentItem<X>]) -> usize {
    items.iter().filter(|item| item.is_selected()).count()
}

/// Выбранные элементы в исходном порядке коллекции
pub fn selected_items<X: ItemExtension>(items: &[ContentItem<X>]) -> Vec<ContentItem<X>> {
    items.iter().filter(|item| item.is_selected()).cloned().collect()
}

pub fn selection_label(count: usize) -> String {
    format!("Выбрано: {}", count)
}

/// Состояние чекбокса в заголовке таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Состояние «выбрать все» по видимым элементам
pub fn header_state<X: ItemExtension>(visible: &[&ContentItem<X>]) -> HeaderCheckState {
    if visible.is_empty() {
        return HeaderCheckState::Unchecked;
    }
    let selected = visible.iter().filter(|item| item.is_selected()).count();
    if selected == 0 {
        HeaderCheckState::Unchecked
    } else if selected == visible.len() {
        HeaderCheckState::Checked
    } else {
        HeaderCheckState::Indeterminate
    }
}
