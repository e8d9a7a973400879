//! Компонент ячейки таблицы для денежных значений
//!
//! ```rust,ignore
//! <TableCellMoney value=Some(order.total) />
//! ```

use super::number_format::format_currency;
use leptos::prelude::*;
use thaw::*;

/// Денежное значение: `$1,234.50`, по правому краю, `—` если значения нет.
#[component]
pub fn TableCellMoney(value: Option<f64>) -> impl IntoView {
    let text = value.map(format_currency).unwrap_or_else(|| "—".to_string());

    view! {
        <TableCell class="text-right">
            <TableCellLayout truncate=true>
                {text}
            </TableCellLayout>
        </TableCell>
    }
}
