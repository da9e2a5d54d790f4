pub mod search_mode;

pub use search_mode::SearchMode;
