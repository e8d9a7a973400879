//! Sidebar navigation between list pages

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// (path, label, icon)
const MENU_ITEMS: [(&str, &str, &str); 2] = [
    ("/orders", "Orders", "orders"),
    ("/users", "Users", "users"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="app-sidebar__content">
            <div class="app-sidebar__group-label">"Admin"</div>
            {MENU_ITEMS
                .into_iter()
                .map(|(path, label, icon_name)| {
                    let is_active = move || pathname.get().starts_with(path);
                    view! {
                        <A href=path attr:class="app-sidebar__link">
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=is_active
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(icon_name)}
                                    <span>{label}</span>
                                </div>
                            </div>
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}
