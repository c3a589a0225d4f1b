mod paginated;
mod types;

pub use paginated::PaginatedFetcher;
pub use paginated::parse_page;
pub use types::Fetcher;
