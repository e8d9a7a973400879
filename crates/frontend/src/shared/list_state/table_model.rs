//! Renderer-independent table model.
//!
//! Columns describe how to pull a cell out of a row; [`TableModel::build`]
//! turns the current page, sort spec and expansion map into plain data the
//! `DataTable` component renders. Rows keep server order.

use super::expansion::ExpansionMap;
use crate::shared::components::table::number_format::format_currency;
use crate::shared::date_utils::format_datetime;
use contracts::shared::list_query::{ListQuery, SortOrder};

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Money(f64),
    DateTime(Option<String>),
    Status(String),
    Empty,
}

impl CellValue {
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(s) | CellValue::Status(s) => s.clone(),
            CellValue::Integer(v) => v.to_string(),
            CellValue::Money(v) => format_currency(*v),
            CellValue::DateTime(Some(s)) => format_datetime(s),
            CellValue::DateTime(None) | CellValue::Empty => "—".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

impl Align {
    pub fn class(self) -> &'static str {
        match self {
            Align::Left => "",
            Align::Right => "text-right",
        }
    }
}

pub struct ColumnDef<T> {
    pub id: &'static str,
    pub header: &'static str,
    pub sortable: bool,
    pub align: Align,
    pub min_width: f64,
    pub value: fn(&T) -> CellValue,
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ColumnDef<T> {}

/// Column and direction, always derived from the URL state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub column: String,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn from_query(query: &ListQuery) -> Self {
        Self {
            column: query.sort.clone(),
            order: query.order,
        }
    }

    pub fn header_sort(&self, column: &str) -> HeaderSort {
        if self.column != column {
            return HeaderSort::Unsorted;
        }
        match self.order {
            SortOrder::Asc => HeaderSort::Asc,
            SortOrder::Desc => HeaderSort::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderSort {
    Unsorted,
    Asc,
    Desc,
}

impl HeaderSort {
    /// unsorted → asc → desc → asc …
    pub fn next(self) -> SortOrder {
        match self {
            HeaderSort::Unsorted | HeaderSort::Desc => SortOrder::Asc,
            HeaderSort::Asc => SortOrder::Desc,
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            HeaderSort::Unsorted => " ⇅",
            HeaderSort::Asc => " ▲",
            HeaderSort::Desc => " ▼",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            HeaderSort::Unsorted => "table__sort-icon",
            _ => "table__sort-icon table__sort-icon--active",
        }
    }
}

/// Rows the table can render.
pub trait ListRow {
    fn row_key(&self) -> String;

    /// Nested lines shown when the row is expanded. `None` means the row
    /// gets no expand toggle.
    fn detail(&self) -> Option<RowDetail> {
        None
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailColumn {
    pub header: &'static str,
    pub align: Align,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowDetail {
    pub columns: Vec<DetailColumn>,
    pub lines: Vec<Vec<CellValue>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCellModel {
    pub id: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub align: Align,
    pub min_width: f64,
    pub sort: HeaderSort,
}

impl HeaderCellModel {
    /// Direction a click requests, `None` for non-sortable columns.
    pub fn next_order(&self) -> Option<SortOrder> {
        self.sortable.then(|| self.sort.next())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyRowModel {
    pub key: String,
    pub cells: Vec<(CellValue, Align)>,
    pub expanded: bool,
    pub detail: Option<RowDetail>,
}

impl BodyRowModel {
    pub fn is_expandable(&self) -> bool {
        self.detail.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableModel {
    pub headers: Vec<HeaderCellModel>,
    pub rows: Vec<BodyRowModel>,
    /// Any row on the page has nested detail.
    pub expandable: bool,
}

impl TableModel {
    pub fn build<T: ListRow>(
        columns: &[ColumnDef<T>],
        rows: &[T],
        sort: &SortSpec,
        expansion: &ExpansionMap,
    ) -> Self {
        let headers = columns
            .iter()
            .map(|c| HeaderCellModel {
                id: c.id,
                label: c.header,
                sortable: c.sortable,
                align: c.align,
                min_width: c.min_width,
                sort: if c.sortable {
                    sort.header_sort(c.id)
                } else {
                    HeaderSort::Unsorted
                },
            })
            .collect();

        let rows: Vec<BodyRowModel> = rows
            .iter()
            .map(|row| {
                let key = row.row_key();
                let detail = row.detail();
                BodyRowModel {
                    expanded: detail.is_some() && expansion.is_expanded(&key),
                    cells: columns
                        .iter()
                        .map(|c| ((c.value)(row), c.align))
                        .collect(),
                    key,
                    detail,
                }
            })
            .collect();

        let expandable = rows.iter().any(BodyRowModel::is_expandable);
        Self {
            headers,
            rows,
            expandable,
        }
    }

    pub fn column_count(&self) -> usize {
        self.headers.len() + usize::from(self.expandable)
    }
}
