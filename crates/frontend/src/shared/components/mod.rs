pub mod page_header;
pub mod ui;
