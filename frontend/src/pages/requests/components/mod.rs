pub mod create_modal;
pub mod detail_modal;
pub mod fields;
pub mod filter;
pub mod pager;
pub mod status_label;
pub mod summary;
pub mod table;
