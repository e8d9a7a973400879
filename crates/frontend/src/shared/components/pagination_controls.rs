use crate::shared::icons::icon;
use crate::shared::list_state::pagination::PageWindow;
use leptos::prelude::*;

pub const PAGE_SIZE_OPTIONS: [u32; 4] = [25, 50, 100, 200];

/// Offset-based pagination: first/prev/next/last, range label and page size.
#[component]
pub fn PaginationControls(
    #[prop(into)] window: Signal<PageWindow>,

    /// New offset
    on_offset_change: Callback<u32>,

    /// New page size
    on_page_size_change: Callback<u32>,

    #[prop(into, default = Signal::from(false))] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_offset_change.run(0)
                disabled=move || disabled.get() || !window.get().has_prev()
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_offset_change.run(window.get_untracked().prev_offset())
                disabled=move || disabled.get() || !window.get().has_prev()
                title="Previous"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let w = window.get();
                    format!("{} · page {} / {}", w.range_label(), w.page_index() + 1, w.page_count())
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_offset_change.run(window.get_untracked().next_offset())
                disabled=move || disabled.get() || !window.get().has_next()
                title="Next"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_offset_change.run(window.get_untracked().last_offset())
                disabled=move || disabled.get() || !window.get().has_next()
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || window.get().limit.to_string()
            >
                {PAGE_SIZE_OPTIONS
                    .iter()
                    .map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || window.get().limit == size>
                                {size.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
