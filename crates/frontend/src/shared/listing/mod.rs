//! Generic resource-listing engine.
//!
//! Every admin listing page (products, categories, brands, departments,
//! banners, customers) is one configuration of [`table_shell::ResourceTable`]:
//! the page supplies an already-fetched dataset, a column schema, a row key
//! extractor, filter settings and row-action callbacks, and the engine owns
//! search, date filtering, pagination, export, loading/error presentation and
//! the delete confirmation workflow. Filtering, pagination and serialization
//! are plain functions over in-memory data so they stay unit-testable.

pub mod column;
pub mod confirm;
pub mod export;
pub mod filter;
pub mod pagination;
pub mod status;
pub mod table_shell;

pub use column::Column;
pub use confirm::{DeleteAction, DeleteFlow, DeleteFuture, Settled};
pub use filter::{apply_filters, DateRange, FilterConfig, FilterState};
pub use pagination::{paginate, PaginationState};
pub use table_shell::ResourceTable;
