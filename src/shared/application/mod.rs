pub mod pagination;

pub use pagination::{Page, PageRequest, PAGE_SIZE};
