//! REST resource services for the back-office API.
//!
//! ```text
//! filters ──→ clean_filter_params ──→ ApiClient ──→ HTTP
//!                                        │
//!                   typed data ←── status mapping / decode
//! ```
//!
//! All services share one `ApiClient`, which carries the injected
//! auth provider.

pub mod category;
pub mod client;
pub mod customer;
pub mod error;
pub mod location;
pub mod pagination;
pub mod query;
pub mod stock;

pub use category::{
    Category, CategoryDetails, CategoryFilters, CategoryForDropdown, CategoryInsert,
    CategoryService, CategoryUpdate,
};
pub use client::ApiClient;
pub use customer::{Customer, CustomerFilters, CustomerInsert, CustomerService, GenderType};
pub use error::{Operation, ServiceError};
pub use location::{
    Location, LocationFilters, LocationForDropdown, LocationInsert, LocationService,
    LocationUpdate,
};
pub use pagination::{Paginated, SortDirection};
pub use query::{clean_filter_params, QueryParams};
pub use stock::{
    LowStockQuery, StockAlert, StockOperation, StockService, StockUpdate, StockUpdateResult,
    StockUpdater,
};
