pub mod hooks;
pub mod list_view;
pub mod ui;
