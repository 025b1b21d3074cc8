//! Business logic services for the application layer.

pub mod category_service;
pub mod order_service;
pub mod product_service;
pub mod review_service;
pub mod user_service;

pub use category_service::CategoryService;
pub use order_service::{OrderLine, OrderService};
pub use product_service::ProductService;
pub use review_service::ReviewService;
pub use user_service::UserService;
