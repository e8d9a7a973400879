//! PageFrame: root wrapper for every routed page.
//!
//! ```rust,ignore
//! view! {
//!     <PageFrame page_id="orders--list" title="Orders">
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use leptos::prelude::*;

/// Sets the page `id` and renders the standard header with a title and an
/// optional right-hand toolbar.
#[component]
pub fn PageFrame(
    /// `{entity}--{category}`, e.g. `"orders--list"`
    page_id: &'static str,
    title: &'static str,
    /// Badge / counters next to the title
    #[prop(optional, into)]
    header_left: Option<ViewFn>,
    /// Buttons on the right side of the header
    #[prop(optional, into)]
    header_right: Option<ViewFn>,
    children: Children,
) -> impl IntoView {
    view! {
        <div id=page_id class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                    {header_left.map(|f| f.run())}
                </div>
                <div class="page__header-right">
                    {header_right.map(|f| f.run())}
                </div>
            </div>
            {children()}
        </div>
    }
}
