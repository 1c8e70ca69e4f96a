pub mod dashboard;
pub mod filter_form;
pub mod forms;
pub mod header;
pub mod login_view;
pub mod transactions;
