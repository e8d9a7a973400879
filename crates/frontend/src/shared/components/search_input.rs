use crate::shared::icons::icon;
use crate::shared::list_state::debounce::{Debouncer, SEARCH_DEBOUNCE_MS};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Search box with a debounced commit and a clear button.
///
/// Typing only edits the local draft; `on_commit` fires after the input has
/// been quiet for [`SEARCH_DEBOUNCE_MS`]. A change of `value` from outside
/// (back/forward) replaces the draft and drops the pending commit, and so
/// does unmounting.
#[component]
pub fn DebouncedSearchInput(
    /// Committed value (from the URL)
    #[prop(into)]
    value: Signal<String>,
    on_commit: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search…".to_string()
    } else {
        placeholder
    };

    let debouncer = StoredValue::new(Debouncer::new(value.get_untracked()));
    let draft = RwSignal::new(value.get_untracked());

    Effect::new(move |_| {
        let committed = value.get();
        let replaced = debouncer
            .try_update_value(|d| d.sync_committed(&committed))
            .unwrap_or(false);
        if replaced {
            draft.set(committed);
        }
    });

    on_cleanup(move || {
        let _ = debouncer.try_update_value(|d| d.cancel());
    });

    let handle_input = move |text: String| {
        draft.set(text.clone());
        let Some(ticket) = debouncer.try_update_value(|d| d.input(text)) else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            // disposed after unmount, so a late timer commits nothing
            if let Some(Some(text)) = debouncer.try_update_value(|d| d.fire(ticket)) {
                on_commit.run(text);
            }
        });
    };

    let clear = move |_| {
        draft.set(String::new());
        if let Some(Some(text)) = debouncer.try_update_value(|d| d.clear()) {
            on_commit.run(text);
        }
    };

    let is_filter_active = move || !value.get().is_empty();

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                placeholder=placeholder
                prop:value=move || draft.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !draft.get().is_empty()>
                <button class="search-input__clear" on:click=clear title="Clear">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
