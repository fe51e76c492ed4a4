pub mod paginator;
pub mod window;

pub use paginator::{page_query, LinkRel, PaginationLink, Paginator};
pub use window::PageWindow;
