//! Склад дилера: доступ, фильтрация заказов, модели страниц и выгрузка в Excel

pub mod access;
pub mod excel;
pub mod filter;
pub mod view_model;

pub use access::{has_access, ConfigState, IncludedDealer};
pub use excel::{build_export, ExportCategory, ExportFile};
pub use filter::decode_orders;
pub use view_model::{InventoryViewModel, MemberSummary, PageState, PortalInputs, StockViewModel};
