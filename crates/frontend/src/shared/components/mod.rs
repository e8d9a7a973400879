pub mod data_table;
pub mod pagination_controls;
pub mod search_input;
pub mod table;
