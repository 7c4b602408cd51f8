//! Утилиты для списков: поиск и подсветка совпадений
use crate::shared::icons::{icon, Icon};
use leptos::prelude::*;

/// Разбить текст на фрагменты (текст, совпадение?) по вхождениям `filter`
/// без учёта регистра.
///
/// Если нижний регистр меняет байтовую длину хотя бы одного символа,
/// подсветка не выполняется: смещения в нижнем регистре не совпадут
/// с границами символов исходного текста.
pub fn match_segments<'a>(text: &'a str, filter: &str, min_len: usize) -> Vec<(&'a str, bool)> {
    let filter = filter.trim();
    if filter.is_empty() || filter.chars().count() < min_len {
        return vec![(text, false)];
    }

    let filter_lower = filter.to_lowercase();
    if !text.chars().all(keeps_width_in_lowercase) {
        return vec![(text, false)];
    }
    let text_lower = text.to_lowercase();
    if !text_lower.contains(&filter_lower) {
        return vec![(text, false)];
    }

    let mut segments = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;
        if actual_pos > last_pos {
            segments.push((&text[last_pos..actual_pos], false));
        }
        let match_end = actual_pos + filter_lower.len();
        segments.push((&text[actual_pos..match_end], true));
        last_pos = match_end;
    }
    if last_pos < text.len() {
        segments.push((&text[last_pos..], false));
    }
    segments
}

fn keeps_width_in_lowercase(c: char) -> bool {
    c.to_lowercase().map(char::len_utf8).sum::<usize>() == c.len_utf8()
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str, min_len: usize) -> AnyView {
    let parts: Vec<AnyView> = match_segments(text, filter, min_len)
        .into_iter()
        .map(|(part, is_match)| {
            let part = part.to_string();
            if is_match {
                view! { <mark class="search-highlight">{part}</mark> }.into_any()
            } else {
                view! { <span>{part}</span> }.into_any()
            }
        })
        .collect();

    view! { <>{parts}</> }.into_any()
}

/// Строка поиска с кнопкой очистки. Каждое изменение сразу уходит в `on_change`.
#[component]
pub fn SearchInput(
    /// Текущее значение запроса
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления запроса
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Поиск...".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon(Icon::Search)}</span>
            <input
                type="text"
                placeholder=placeholder
                class=move || {
                    if is_filter_active() {
                        "search-input__field search-input__field--active"
                    } else {
                        "search-input__field"
                    }
                }
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            {move || if !value.get().is_empty() {
                view! {
                    <button
                        class="search-input__clear"
                        on:click=move |_| on_change.run(String::new())
                        title="Очистить"
                    >
                        {icon(Icon::Close)}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_mark_every_match() {
        let segments = match_segments("Banana Bread", "an", 2);
        assert_eq!(
            segments,
            vec![
                ("B", false),
                ("an", true),
                ("an", true),
                ("a Bread", false)
            ]
        );
    }

    #[test]
    fn test_segments_ignore_short_or_missing_filter() {
        assert_eq!(match_segments("Apple Pie", "a", 2), vec![("Apple Pie", false)]);
        assert_eq!(match_segments("Apple Pie", "zz", 2), vec![("Apple Pie", false)]);
        assert_eq!(match_segments("Apple Pie", "  ", 2), vec![("Apple Pie", false)]);
    }

    #[test]
    fn test_segments_are_case_insensitive() {
        assert_eq!(
            match_segments("Apple Pie", "APPLE", 2),
            vec![("Apple", true), (" Pie", false)]
        );
    }

    #[test]
    fn test_segments_handle_cyrillic() {
        assert_eq!(
            match_segments("Пирог с яблоком", "ЯБЛ", 2),
            vec![("Пирог с ", false), ("ябл", true), ("оком", false)]
        );
    }

    #[test]
    fn test_segments_skip_text_with_width_changing_lowercase() {
        // Ⱥ растёт до 3 байт, знак Кельвина сжимается до 1: суммы равны
        let text = "ȺȺ\u{212A}";
        assert_eq!(match_segments(text, "ȺȺ", 2), vec![(text, false)]);
        assert_eq!(match_segments("Ⱥ pie", "pie", 2), vec![("Ⱥ pie", false)]);
    }
}
