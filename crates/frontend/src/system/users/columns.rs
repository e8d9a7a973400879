use crate::shared::list_state::table_model::{Align, CellValue, ColumnDef, ListRow};
use contracts::system::users::User;

pub fn user_columns() -> Vec<ColumnDef<User>> {
    vec![
        ColumnDef {
            id: "id",
            header: "ID",
            sortable: true,
            align: Align::Left,
            min_width: 80.0,
            value: |u| CellValue::Integer(u.id),
        },
        ColumnDef {
            id: "name",
            header: "Name",
            sortable: true,
            align: Align::Left,
            min_width: 200.0,
            value: |u| CellValue::Text(u.name.clone()),
        },
        ColumnDef {
            id: "email",
            header: "Email",
            sortable: true,
            align: Align::Left,
            min_width: 220.0,
            value: |u| CellValue::Text(u.email.clone()),
        },
        ColumnDef {
            id: "created_at",
            header: "Created",
            sortable: true,
            align: Align::Left,
            min_width: 150.0,
            value: |u| CellValue::DateTime(u.created_at.clone()),
        },
    ]
}

impl ListRow for User {
    fn row_key(&self) -> String {
        self.id.to_string()
    }
}
