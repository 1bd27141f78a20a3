pub mod product_filters;
pub mod product_form_modal;
pub mod product_page;
pub mod product_table;

pub use product_filters::ProductFilters;
pub use product_form_modal::ProductFormModal;
pub use product_page::ProductPage;
pub use product_table::ProductTable;
