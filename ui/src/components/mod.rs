pub mod app;
pub mod completion_banner;
pub mod filter_panel;
pub mod list_state;
pub mod product_form;
pub mod product_table;
pub mod view_state;
