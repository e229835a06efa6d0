pub mod error;
pub mod paginator;
pub mod request;
pub mod view;

pub use error::{PaginatorError, Result};
pub use paginator::{Paginator, DEFAULT_ENTRIES_PER_PAGE};
pub use request::PageRequest;
pub use view::{CompactView, FullView};
