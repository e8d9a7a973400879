//! Table-state controller shared by every list page.
//!
//! - `query_store`: URL query string ⇄ [`ListQuery`](contracts::shared::list_query::ListQuery)
//! - `debounce`: search box draft vs committed value
//! - `fetch` / `endpoint`: one request per effective change, latest wins
//! - `table_model` / `expansion` / `pagination`: what the table renders
//! - `controller`: reactive glue for a page

pub mod controller;
pub mod debounce;
pub mod endpoint;
pub mod expansion;
pub mod fetch;
pub mod pagination;
pub mod query_store;
pub mod table_model;

pub use controller::{use_list_controller, ListController};
pub use endpoint::ListEndpoint;
pub use query_store::QueryPatch;
pub use table_model::{CellValue, ColumnDef, ListRow, TableModel};

#[cfg(test)]
mod tests {
    use super::expansion::ExpansionMap;
    use super::fetch::{FetchOrchestrator, FetchOutcome};
    use super::pagination::PageWindow;
    use super::query_store::{MemoryLocation, QueryPatch, QueryStore};
    use super::table_model::{SortSpec, TableModel};
    use crate::domain::orders::columns::order_columns;
    use contracts::domain::orders::{Order, OrderCustomer};
    use contracts::shared::list_query::{ListQuery, SortOrder};
    use contracts::shared::pagination::{PageEnvelope, Pagination};

    fn order(id: i64, customer: &str, total: f64) -> Order {
        Order {
            order_id: id,
            status: "paid".into(),
            total,
            created_at: None,
            user: OrderCustomer {
                user_id: id * 10,
                name: customer.into(),
                email: None,
            },
            items: vec![],
        }
    }

    /// Stands in for the upstream: filter on customer name, sort by total,
    /// slice by limit/offset.
    fn fixture_backend(query: &ListQuery) -> PageEnvelope<Order> {
        let mut matching: Vec<Order> = vec![
            order(1, "Acme Corp", 10.0),
            order(2, "Globex", 99.0),
            order(3, "ACME Ltd", 30.0),
            order(4, "acme inc", 20.0),
        ]
        .into_iter()
        .filter(|o| {
            o.user
                .name
                .to_lowercase()
                .contains(&query.search.to_lowercase())
        })
        .collect();
        if query.sort == "total" {
            matching.sort_by(|a, b| a.total.total_cmp(&b.total));
            if query.order == SortOrder::Desc {
                matching.reverse();
            }
        }
        let total = matching.len() as u64;
        let data: Vec<Order> = matching
            .into_iter()
            .skip(query.offset as usize)
            .take(query.limit as usize)
            .collect();
        PageEnvelope {
            pagination: Pagination {
                total,
                limit: u64::from(query.limit),
                offset: u64::from(query.offset),
                count: data.len() as u64,
            },
            data,
        }
    }

    fn totals(model: &TableModel) -> Vec<String> {
        model
            .rows
            .iter()
            .map(|r| r.cells[3].0.display())
            .collect()
    }

    #[test]
    fn test_acme_paging_scenario() {
        let store = QueryStore::new(MemoryLocation::new(
            "?search=acme&limit=2&offset=0&sort=total&order=desc",
        ));
        let mut orchestrator = FetchOrchestrator::<Order>::new();
        let expansion = ExpansionMap::default();

        let query = store.read();
        let ticket = orchestrator.begin(&query).unwrap();
        let outcome = orchestrator.resolve(ticket, Ok(fixture_backend(&query)));
        assert_eq!(outcome, FetchOutcome::Applied);

        let page = orchestrator.snapshot().unwrap();
        assert_eq!(page.pagination.total, 3);
        let model = TableModel::build(
            &order_columns(),
            &page.data,
            &SortSpec::from_query(&query),
            &expansion,
        );
        assert_eq!(totals(&model), vec!["$30.00", "$20.00"]);

        let window = PageWindow::new(page.pagination.total, query.limit, query.offset);
        store.update(&QueryPatch::new().offset(window.next_offset()));

        let query = store.read();
        assert_eq!(query.offset, 2);
        assert_eq!(query.search, "acme");
        let ticket = orchestrator.begin(&query).unwrap();
        orchestrator.resolve(ticket, Ok(fixture_backend(&query)));

        let page = orchestrator.snapshot().unwrap();
        let model = TableModel::build(
            &order_columns(),
            &page.data,
            &SortSpec::from_query(&query),
            &expansion,
        );
        assert_eq!(totals(&model), vec!["$10.00"]);
        assert_eq!(page.pagination.total, 3);
        assert_eq!(
            PageWindow::new(page.pagination.total, query.limit, query.offset).range_label(),
            "3–3 of 3"
        );
    }

    #[test]
    fn test_sort_click_resets_to_first_page() {
        let store = QueryStore::new(MemoryLocation::new("?limit=2&offset=4&sort=total&order=desc"));
        let query = store.read();
        let model = TableModel::build(
            &order_columns(),
            &fixture_backend(&query).data,
            &SortSpec::from_query(&query),
            &ExpansionMap::default(),
        );
        let header = model.headers.iter().find(|h| h.id == "total").unwrap();
        let next = header.next_order().unwrap();
        assert_eq!(next, SortOrder::Asc);

        store.update(&QueryPatch::new().sort(header.id, next));
        let query = store.read();
        assert_eq!(query.offset, 0);
        assert_eq!(query.order, SortOrder::Asc);
    }
}
