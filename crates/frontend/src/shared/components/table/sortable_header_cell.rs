//! Компонент сортируемой ячейки заголовка таблицы
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     header=header_model
//!     on_sort=Callback::new(move |(column, order)| ctl.set_sort(&column, order))
//! />
//! ```

use crate::shared::list_state::table_model::{Align, HeaderCellModel};
use contracts::shared::list_query::SortOrder;
use leptos::prelude::*;
use thaw::*;

/// Ячейка заголовка.
///
/// Сортируемая колонка показывает текущее направление и по клику запрашивает
/// следующее по циклу unsorted → asc → desc → asc. Остальные колонки выводят
/// только подпись.
#[component]
pub fn SortableHeaderCell(
    header: HeaderCellModel,

    /// Callback при клике: (колонка, следующее направление)
    on_sort: Callback<(String, SortOrder)>,
) -> impl IntoView {
    let justify = match header.align {
        Align::Left => "",
        Align::Right => "justify-content: flex-end;",
    };

    let Some(next) = header.next_order() else {
        return view! {
            <TableHeaderCell min_width=header.min_width>
                <div class="table__header" style=justify>
                    {header.label}
                </div>
            </TableHeaderCell>
        }
        .into_any();
    };

    let column = header.id.to_string();
    let sort = header.sort;
    view! {
        <TableHeaderCell min_width=header.min_width>
            <div
                class="table__sortable-header"
                style=format!("cursor: pointer; padding-right: 12px; {}", justify)
                title="Sort"
                on:click=move |_| on_sort.run((column.clone(), next))
            >
                {header.label}
                <span class=sort.class()>{sort.indicator()}</span>
            </div>
        </TableHeaderCell>
    }
    .into_any()
}
