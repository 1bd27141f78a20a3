pub mod use_alerts;
pub mod use_api_activity;
pub mod use_dashboard;
pub mod use_debounce;
pub mod use_modal;
pub mod use_products;
pub mod use_reload;
pub mod use_transactions;
