pub mod category;
pub mod item;
pub mod request;

pub use category::FeedCategory;
pub use item::{Item, ItemId};
pub use request::{ItemTask, PageRequest, PageResult};
