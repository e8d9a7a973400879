pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod icons;
pub mod list_state;
pub mod page_frame;
