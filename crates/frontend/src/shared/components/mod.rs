pub mod page_header;
pub mod stat_card;

pub use page_header::PortalHeader;
pub use stat_card::StatCard;
