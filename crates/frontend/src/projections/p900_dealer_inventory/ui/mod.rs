pub mod inventory_page;
pub mod order_list;
pub mod route;
pub mod sidebar;
pub mod states;
pub mod stock_page;

pub use inventory_page::InventoryPage;
pub use states::{AccessDenied, EmptyState, LoadingState, NotFound};
pub use stock_page::StockPage;
