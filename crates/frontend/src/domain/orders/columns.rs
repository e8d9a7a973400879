use crate::shared::list_state::table_model::{
    Align, CellValue, ColumnDef, DetailColumn, ListRow, RowDetail,
};
use contracts::domain::orders::Order;

/// Orders list columns. `id` is the server-side sort key.
pub fn order_columns() -> Vec<ColumnDef<Order>> {
    vec![
        ColumnDef {
            id: "order_id",
            header: "Order ID",
            sortable: true,
            align: Align::Left,
            min_width: 100.0,
            value: |o| CellValue::Integer(o.order_id),
        },
        ColumnDef {
            id: "status",
            header: "Status",
            sortable: true,
            align: Align::Left,
            min_width: 110.0,
            value: |o| CellValue::Status(o.status.clone()),
        },
        // the API cannot sort on the joined customer name
        ColumnDef {
            id: "customer",
            header: "Customer",
            sortable: false,
            align: Align::Left,
            min_width: 200.0,
            value: |o| CellValue::Text(o.user.name.clone()),
        },
        ColumnDef {
            id: "total",
            header: "Total",
            sortable: true,
            align: Align::Right,
            min_width: 120.0,
            value: |o| CellValue::Money(o.total),
        },
        ColumnDef {
            id: "created_at",
            header: "Created",
            sortable: true,
            align: Align::Left,
            min_width: 150.0,
            value: |o| CellValue::DateTime(o.created_at.clone()),
        },
    ]
}

impl ListRow for Order {
    fn row_key(&self) -> String {
        self.order_id.to_string()
    }

    fn detail(&self) -> Option<RowDetail> {
        if self.items.is_empty() {
            return None;
        }
        let columns = vec![
            DetailColumn { header: "Product", align: Align::Left },
            DetailColumn { header: "SKU", align: Align::Left },
            DetailColumn { header: "Qty", align: Align::Right },
            DetailColumn { header: "Unit price", align: Align::Right },
            DetailColumn { header: "Line total", align: Align::Right },
        ];
        let lines = self
            .items
            .iter()
            .map(|item| {
                vec![
                    CellValue::Text(item.product.title.clone()),
                    item.product
                        .sku
                        .clone()
                        .map(CellValue::Text)
                        .unwrap_or(CellValue::Empty),
                    CellValue::Integer(item.qty),
                    CellValue::Money(item.unit_price),
                    CellValue::Money(item.line_total()),
                ]
            })
            .collect();
        Some(RowDetail { columns, lines })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::orders::{OrderCustomer, OrderItem, ProductRef};

    fn sample(items: Vec<OrderItem>) -> Order {
        Order {
            order_id: 7,
            status: "paid".into(),
            total: 1234.5,
            created_at: Some("2024-03-01T10:00:00Z".into()),
            user: OrderCustomer {
                user_id: 1,
                name: "Acme Corp".into(),
                email: None,
            },
            items,
        }
    }

    #[test]
    fn test_cells() {
        let order = sample(vec![]);
        let cells: Vec<String> = order_columns()
            .iter()
            .map(|c| (c.value)(&order).display())
            .collect();
        assert_eq!(
            cells,
            vec!["7", "paid", "Acme Corp", "$1,234.50", "2024-03-01 10:00"]
        );
        assert!(order.detail().is_none());
    }

    #[test]
    fn test_detail_lines() {
        let order = sample(vec![OrderItem {
            order_item_id: 1,
            qty: 3,
            unit_price: 2.5,
            product: ProductRef {
                product_id: 9,
                title: "Widget".into(),
                sku: None,
            },
        }]);
        let detail = order.detail().unwrap();
        assert_eq!(detail.columns.len(), 5);
        let line: Vec<String> = detail.lines[0].iter().map(CellValue::display).collect();
        assert_eq!(line, vec!["Widget", "—", "3", "$2.50", "$7.50"]);
    }
}
