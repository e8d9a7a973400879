use crate::domain::orders::ui::list::OrdersListPage;
use crate::layout::Shell;
use crate::system::users::ui::list::UsersListPage;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Page not found"</h1>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=|| view! { <Redirect path="/orders" /> } />
                    <Route path=path!("/orders") view=OrdersListPage />
                    <Route path=path!("/users") view=UsersListPage />
                </Routes>
            </Shell>
        </Router>
    }
}
