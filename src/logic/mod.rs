pub mod error;
pub mod owner_details;
pub mod visit_flow;

pub use error::*;
pub use owner_details::*;
pub use visit_flow::*;
