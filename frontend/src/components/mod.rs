pub mod charts;
pub mod data_table;
pub mod filter_bar;
pub mod layout;
pub mod metric_card;
pub mod notice;
pub mod pagination;
pub mod record_table;
