//! Infrastructure layer.

pub mod backend;
pub mod database;

pub use self::{
    backend::Backend,
    database::{Database, InMemory},
};
