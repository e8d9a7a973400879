use leptos::prelude::*;

/// Inline SVG icon by name; unknown names fall back to a neutral circle.
pub fn icon(name: &str) -> AnyView {
    let size = match name {
        "orders" | "users" => 20,
        _ => 16,
    };
    let body = match name {
        "orders" => view! {
            <path d="M21 15V5a2 2 0 0 0-2-2H7l-4 4v8a2 2 0 0 0 2 2h6"/>
            <path d="M3 7h4V3"/>
            <path d="M16 21l2-2 4 4"/>
            <path d="M22 19a3 3 0 1 0-6 0 3 3 0 0 0 6 0z"/>
        }
        .into_any(),
        "users" => view! {
            <path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2"/>
            <circle cx="12" cy="7" r="4"/>
        }
        .into_any(),
        "chevron-right" => view! { <polyline points="9 18 15 12 9 6"/> }.into_any(),
        "chevron-down" => view! { <polyline points="6 9 12 15 18 9"/> }.into_any(),
        "chevron-left" => view! { <polyline points="15 18 9 12 15 6"/> }.into_any(),
        "chevrons-left" => view! {
            <polyline points="11 17 6 12 11 7"/>
            <polyline points="18 17 13 12 18 7"/>
        }
        .into_any(),
        "chevrons-right" => view! {
            <polyline points="13 17 18 12 13 7"/>
            <polyline points="6 17 11 12 6 7"/>
        }
        .into_any(),
        "x" => view! {
            <line x1="18" y1="6" x2="6" y2="18"/>
            <line x1="6" y1="6" x2="18" y2="18"/>
        }
        .into_any(),
        "search" => view! {
            <circle cx="11" cy="11" r="8"/>
            <line x1="21" y1="21" x2="16.65" y2="16.65"/>
        }
        .into_any(),
        "refresh" => view! {
            <polyline points="23 4 23 10 17 10"/>
            <path d="M20.49 15a9 9 0 1 1-2.12-9.36L23 10"/>
        }
        .into_any(),
        _ => view! {
            <circle cx="12" cy="12" r="10"/>
            <path d="M12 8v4l3 3"/>
        }
        .into_any(),
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
            {body}
        </svg>
    }
    .into_any()
}
