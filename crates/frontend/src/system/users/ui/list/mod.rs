use crate::system::users::api::UsersEndpoint;
use crate::system::users::columns::user_columns;
use crate::shared::components::data_table::DataTable;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::DebouncedSearchInput;
use crate::shared::components::table::format_count;
use crate::shared::icons::icon;
use crate::shared::list_state::use_list_controller;
use crate::shared::page_frame::PageFrame;
use contracts::shared::list_query::SortOrder;
use leptos::prelude::*;
use thaw::*;

const TABLE_ID: &str = "users-table";

#[component]
pub fn UsersListPage() -> impl IntoView {
    let ctl = use_list_controller::<UsersEndpoint>();
    let model = ctl.table_model(user_columns());
    let loading = ctl.loading();
    let total = ctl.total();
    let error = ctl.error();
    let search = Signal::derive(move || ctl.query().get().search);

    view! {
        <PageFrame
            page_id="users--list"
            title="Users"
            header_left=move || view! {
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                    {move || format_count(total.get() as i64)}
                </Badge>
            }
            header_right=move || view! {
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| ctl.refresh()
                    disabled=loading
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Loading…" } else { " Refresh" }}
                </Button>
            }
        >
            <div class="page__content">
                <div class="filter-panel-header">
                    <div class="filter-panel-header__left">
                        <DebouncedSearchInput
                            value=search
                            on_commit=Callback::new(move |text: String| ctl.set_search(text))
                            placeholder="Search by name…"
                        />
                    </div>
                    <div class="filter-panel-header__center">
                        <PaginationControls
                            window=ctl.page_window()
                            on_offset_change=Callback::new(move |offset: u32| ctl.go_to_offset(offset))
                            on_page_size_change=Callback::new(move |size: u32| ctl.set_page_size(size))
                            disabled=loading
                        />
                    </div>
                </div>

                {move || {
                    error.get().map(|e| view! {
                        <div class="alert alert--error">
                            {format!("Last refresh failed: {}", e)}
                        </div>
                    })
                }}

                <DataTable
                    model=model
                    on_sort=Callback::new(move |(column, order): (String, SortOrder)| {
                        ctl.set_sort(&column, order)
                    })
                    on_toggle_row=Callback::new(move |key: String| ctl.toggle_row(&key))
                    loading=loading
                    table_id=TABLE_ID
                />
            </div>
        </PageFrame>
    }
}
