pub mod handlers;
pub mod routes;
pub mod visit_handlers;

pub use handlers::*;
pub use routes::*;
pub use visit_handlers::*;
