pub mod common;
pub mod owner;
pub mod pet;
pub mod vet;
pub mod visit;

pub use common::*;
pub use owner::*;
pub use pet::*;
pub use vet::*;
pub use visit::*;
