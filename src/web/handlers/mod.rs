pub mod pages;

pub use pages::{index_page, search_page, DownloadForm};
