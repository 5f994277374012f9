pub mod cabinet_query;
pub mod clients;
pub mod log;
pub mod membership;
pub mod scraper;
pub mod store;

pub use cabinet_query::{membership_query, CabinetQuery, QueryOptions};
pub use membership::Membership;
pub use scraper::CabinetScraper;
pub use store::Store;
