use contracts::shared::content_selection::BadgeTone;
use leptos::prelude::*;

/// CSS-модификатор бейджа для тона ячейки
pub fn tone_class(tone: BadgeTone) -> &'static str {
    match tone {
        BadgeTone::Brand => "badge--primary",
        BadgeTone::Success => "badge--success",
        BadgeTone::Warning => "badge--warning",
        BadgeTone::Danger => "badge--error",
        BadgeTone::Neutral => "badge--neutral",
    }
}

fn badge_text(label: String) -> String {
    if label.trim().is_empty() {
        "—".to_string()
    } else {
        label
    }
}

/// Бейдж значения в ячейке таблицы (статус, тип, проверка)
#[component]
pub fn Badge(
    #[prop(optional)]
    tone: BadgeTone,
    /// Текст бейджа; пустая строка рисуется как прочерк
    #[prop(into)]
    label: String,
) -> impl IntoView {
    let text = badge_text(label);
    let title = text.clone();

    view! {
        <span class=format!("badge {}", tone_class(tone)) title=title>
            {text}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_classes() {
        assert_eq!(tone_class(BadgeTone::Brand), "badge--primary");
        assert_eq!(tone_class(BadgeTone::Danger), "badge--error");
        assert_eq!(tone_class(BadgeTone::default()), "badge--neutral");
    }

    #[test]
    fn test_blank_label_renders_dash() {
        assert_eq!(badge_text("  ".to_string()), "—");
        assert_eq!(badge_text("Проверено".to_string()), "Проверено");
    }
}
