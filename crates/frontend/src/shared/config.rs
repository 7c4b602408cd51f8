//! Настройки панелей интеграций, доступные через контекст

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelConfig {
    /// Задержка имитации подключения к провайдеру, мс
    pub connect_delay_ms: u32,
    pub search_placeholder: &'static str,
    /// Минимальная длина запроса для подсветки совпадений
    pub highlight_min_len: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            connect_delay_ms: 1500,
            search_placeholder: "Поиск...",
            highlight_min_len: 2,
        }
    }
}

/// Конфигурация из контекста или значения по умолчанию
pub fn use_panel_config() -> PanelConfig {
    use_context::<PanelConfig>().unwrap_or_default()
}
