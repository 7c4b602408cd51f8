use leptos::prelude::*;

/// Иконки интерфейса интеграций
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Close,
    Filter,
    Search,
    Plug,
    Save,
    Check,
    ChevronDown,
}

impl Icon {
    fn size(self) -> u8 {
        match self {
            Icon::Close | Icon::Check => 14,
            _ => 16,
        }
    }
}

pub fn icon(kind: Icon) -> AnyView {
    let size = kind.size();
    let shape = match kind {
        Icon::Close => view! {
            <line x1="18" y1="6" x2="6" y2="18"/>
            <line x1="6" y1="6" x2="18" y2="18"/>
        }
        .into_any(),
        Icon::Filter => view! { <polygon points="22 3 2 3 10 12.46 10 19 14 21 14 12.46 22 3"/> }.into_any(),
        Icon::Search => view! {
            <circle cx="11" cy="11" r="8"/>
            <line x1="21" y1="21" x2="16.65" y2="16.65"/>
        }
        .into_any(),
        Icon::Plug => view! {
            <path d="M12 22v-5"/>
            <path d="M9 8V2"/>
            <path d="M15 8V2"/>
            <path d="M18 8v5a4 4 0 0 1-4 4h-4a4 4 0 0 1-4-4V8z"/>
        }
        .into_any(),
        Icon::Save => view! {
            <path d="M19 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11l5 5v11a2 2 0 0 1-2 2z"/>
            <polyline points="17 21 17 13 7 13 7 21"/>
            <polyline points="7 3 7 8 15 8"/>
        }
        .into_any(),
        Icon::Check => view! { <polyline points="20 6 9 17 4 12"/> }.into_any(),
        Icon::ChevronDown => view! { <polyline points="6 9 12 15 18 9"/> }.into_any(),
    };

    view! {
        <svg
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {shape}
        </svg>
    }
    .into_any()
}
