//! Generic table renderer over [`TableModel`].
//!
//! Knows nothing about URLs or fetching: headers report clicks through
//! `on_sort`, expand toggles through `on_toggle_row`.

use crate::shared::components::table::{SortableHeaderCell, TableCellMoney};
use crate::shared::icons::icon;
use crate::shared::list_state::table_model::{
    Align, BodyRowModel, CellValue, RowDetail, TableModel,
};
use contracts::shared::list_query::SortOrder;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn DataTable(
    #[prop(into)] model: Signal<TableModel>,
    on_sort: Callback<(String, SortOrder)>,
    on_toggle_row: Callback<String>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(optional, into)] table_id: Option<String>,
) -> impl IntoView {
    view! {
        <div class="table-wrapper" class:table-wrapper--loading=move || loading.get()>
            <Table attr:id=table_id attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        {move || {
                            let m = model.get();
                            let toggle_column = m.expandable.then(|| {
                                view! { <TableHeaderCell min_width=40.0>""</TableHeaderCell> }
                            });
                            let headers = m
                                .headers
                                .into_iter()
                                .map(|header| view! { <SortableHeaderCell header=header on_sort=on_sort /> })
                                .collect_view();
                            view! { {toggle_column} {headers} }
                        }}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || render_body(model.get(), loading.get(), on_toggle_row)}
                </TableBody>
            </Table>
        </div>
    }
}

fn render_body(model: TableModel, loading: bool, on_toggle_row: Callback<String>) -> AnyView {
    let colspan = model.column_count().max(1).to_string();
    if model.rows.is_empty() {
        let text = if loading { "Loading…" } else { "No results" };
        return view! {
            <TableRow>
                <TableCell attr:colspan=colspan attr:style="padding: 40px; text-align: center;">
                    {text}
                </TableCell>
            </TableRow>
        }
        .into_any();
    }

    let expandable = model.expandable;
    model
        .rows
        .into_iter()
        .map(|row| render_row(row, expandable, colspan.clone(), on_toggle_row))
        .collect_view()
        .into_any()
}

fn render_row(
    row: BodyRowModel,
    expandable: bool,
    colspan: String,
    on_toggle_row: Callback<String>,
) -> AnyView {
    let toggle = expandable.then(|| {
        if !row.is_expandable() {
            return view! { <TableCell>""</TableCell> }.into_any();
        }
        let key = row.key.clone();
        let expanded = row.expanded;
        view! {
            <TableCell>
                <button
                    class="table__expand-btn"
                    title=if expanded { "Collapse" } else { "Expand" }
                    on:click=move |_| on_toggle_row.run(key.clone())
                >
                    {icon(if expanded { "chevron-down" } else { "chevron-right" })}
                </button>
            </TableCell>
        }
        .into_any()
    });

    let cells = row
        .cells
        .into_iter()
        .map(|(value, align)| render_cell(value, align))
        .collect_view();

    let detail = match (row.expanded, row.detail) {
        (true, Some(detail)) => Some(render_detail(detail, colspan)),
        _ => None,
    };

    view! {
        <TableRow class:table__row--expanded=row.expanded>
            {toggle}
            {cells}
        </TableRow>
        {detail}
    }
    .into_any()
}

fn render_cell(value: CellValue, align: Align) -> AnyView {
    match value {
        CellValue::Money(v) => view! { <TableCellMoney value=Some(v) /> }.into_any(),
        CellValue::Status(status) => {
            let color = status_color(&status);
            view! {
                <TableCell>
                    <TableCellLayout>
                        <Badge appearance=BadgeAppearance::Tint color=color>
                            {status}
                        </Badge>
                    </TableCellLayout>
                </TableCell>
            }
            .into_any()
        }
        other => {
            let text = other.display();
            view! {
                <TableCell class=align.class()>
                    <TableCellLayout truncate=true>{text}</TableCellLayout>
                </TableCell>
            }
            .into_any()
        }
    }
}

fn render_detail(detail: RowDetail, colspan: String) -> AnyView {
    let aligns: Vec<Align> = detail.columns.iter().map(|c| c.align).collect();
    let headers = detail
        .columns
        .into_iter()
        .map(|c| view! { <th class=c.align.class()>{c.header}</th> })
        .collect_view();
    let lines = detail
        .lines
        .into_iter()
        .map(|line| {
            let cells = line
                .into_iter()
                .zip(aligns.iter().copied())
                .map(|(value, align)| view! { <td class=align.class()>{value.display()}</td> })
                .collect_view();
            view! { <tr>{cells}</tr> }
        })
        .collect_view();

    view! {
        <TableRow attr:class="table__row--detail">
            <TableCell attr:colspan=colspan>
                <table class="table__nested">
                    <thead>
                        <tr>{headers}</tr>
                    </thead>
                    <tbody>{lines}</tbody>
                </table>
            </TableCell>
        </TableRow>
    }
    .into_any()
}

/// Badge color for an order status.
pub fn status_color(status: &str) -> BadgeColor {
    match status.to_ascii_lowercase().as_str() {
        "paid" | "completed" | "delivered" | "shipped" => BadgeColor::Success,
        "cancelled" | "canceled" | "refunded" | "failed" => BadgeColor::Danger,
        "pending" | "new" | "processing" => BadgeColor::Warning,
        _ => BadgeColor::Brand,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_color() {
        assert!(matches!(status_color("Paid"), BadgeColor::Success));
        assert!(matches!(status_color("cancelled"), BadgeColor::Danger));
        assert!(matches!(status_color("pending"), BadgeColor::Warning));
        assert!(matches!(status_color("on_hold"), BadgeColor::Brand));
    }
}
