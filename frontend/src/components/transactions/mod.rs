pub mod transaction_filters;
pub mod transaction_form_modal;
pub mod transaction_page;
pub mod transaction_table;

pub use transaction_filters::TransactionFilters;
pub use transaction_form_modal::TransactionFormModal;
pub use transaction_page::TransactionPage;
pub use transaction_table::TransactionTable;
