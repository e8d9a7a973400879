//! Reactive wiring of the list state pieces for one page.

use super::endpoint::{fetch_page, ListEndpoint};
use super::expansion::ExpansionMap;
use super::fetch::{FetchError, FetchOrchestrator, FetchOutcome, FetchTicket};
use super::pagination::PageWindow;
use super::query_store::{QueryPatch, UrlQueryStore};
use super::table_model::{ColumnDef, ListRow, SortSpec, TableModel};
use contracts::shared::list_query::{ListQuery, SortOrder};
use contracts::shared::pagination::PageEnvelope;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::marker::PhantomData;
use std::sync::Arc;

pub struct ListController<E: ListEndpoint> {
    pub url: UrlQueryStore,
    state: RwSignal<FetchOrchestrator<E::Row>>,
    expansion: RwSignal<ExpansionMap>,
    _endpoint: PhantomData<fn() -> E>,
}

impl<E: ListEndpoint> Clone for ListController<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: ListEndpoint> Copy for ListController<E> {}

/// Creates the controller and starts fetching whenever the typed URL state
/// changes. Must be called inside a component.
pub fn use_list_controller<E: ListEndpoint>() -> ListController<E> {
    let controller = ListController::<E> {
        url: UrlQueryStore::new(),
        state: RwSignal::new(FetchOrchestrator::new()),
        expansion: RwSignal::new(ExpansionMap::default()),
        _endpoint: PhantomData,
    };

    Effect::new(move |_| {
        let query = controller.url.query.get();
        let ticket = controller
            .state
            .try_maybe_update(|o| {
                let ticket = o.begin(&query);
                (ticket.is_some(), ticket)
            })
            .flatten();
        if let Some(ticket) = ticket {
            controller.spawn_fetch(query, ticket);
        }
    });

    controller
}

impl<E: ListEndpoint> ListController<E> {
    fn spawn_fetch(self, query: ListQuery, ticket: FetchTicket) {
        let state = self.state;
        spawn_local(async move {
            let result = fetch_page::<E>(&query).await;
            let outcome = state.try_maybe_update(|o| {
                let outcome = o.resolve(ticket, result);
                (outcome != FetchOutcome::Superseded, outcome)
            });
            if outcome.is_none() {
                log::debug!("{} response arrived after the page was left", E::PATH);
            }
        });
    }

    pub fn query(&self) -> Memo<ListQuery> {
        self.url.query
    }

    pub fn set_search(&self, text: String) {
        self.url.update(QueryPatch::new().search(text));
    }

    pub fn go_to_offset(&self, offset: u32) {
        self.url.update(QueryPatch::new().offset(offset));
    }

    pub fn set_page_size(&self, limit: u32) {
        self.url.update(QueryPatch::new().limit(limit));
    }

    pub fn set_sort(&self, column: &str, order: SortOrder) {
        self.url.update(QueryPatch::new().sort(column, order));
    }

    /// Re-fetches the current query even though its key did not change.
    pub fn refresh(&self) {
        let query = self.url.read();
        let ticket = self.state.try_update(|o| o.refresh(&query));
        if let Some(ticket) = ticket {
            self.spawn_fetch(query, ticket);
        }
    }

    pub fn toggle_row(&self, key: &str) {
        self.expansion.update(|m| {
            m.toggle(key);
        });
    }

    pub fn snapshot(&self) -> Signal<Option<Arc<PageEnvelope<E::Row>>>> {
        let state = self.state;
        Signal::derive(move || state.with(|o| o.snapshot()))
    }

    pub fn loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|o| o.is_loading()))
    }

    pub fn error(&self) -> Signal<Option<FetchError>> {
        let state = self.state;
        Signal::derive(move || state.with(|o| o.last_error().cloned()))
    }

    pub fn total(&self) -> Signal<u64> {
        let state = self.state;
        Signal::derive(move || {
            state.with(|o| o.snapshot().map(|s| s.pagination.total).unwrap_or(0))
        })
    }

    pub fn page_window(&self) -> Signal<PageWindow> {
        let query = self.url.query;
        let total = self.total();
        Signal::derive(move || {
            let q = query.get();
            PageWindow::new(total.get(), q.limit, q.offset)
        })
    }
}

impl<E> ListController<E>
where
    E: ListEndpoint,
    E::Row: ListRow,
{
    pub fn table_model(&self, columns: Vec<ColumnDef<E::Row>>) -> Memo<TableModel> {
        let state = self.state;
        let expansion = self.expansion;
        let query = self.url.query;
        Memo::new(move |_| {
            let sort = SortSpec::from_query(&query.get());
            let snapshot = state.with(|o| o.snapshot());
            let rows = snapshot.as_ref().map(|s| s.data.as_slice()).unwrap_or(&[]);
            expansion.with(|m| TableModel::build(&columns, rows, &sort, m))
        })
    }
}
