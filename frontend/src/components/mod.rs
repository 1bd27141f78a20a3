pub mod alert;
pub mod confirm_modal;
pub mod dashboard;
pub mod export_buttons;
pub mod header;
pub mod loading_overlay;
pub mod products;
pub mod transactions;

pub use alert::AlertStack;
pub use dashboard::DashboardPage;
pub use header::{Header, Page};
pub use loading_overlay::LoadingOverlay;
