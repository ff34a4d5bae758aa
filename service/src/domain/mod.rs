//! Domain definitions.

pub mod cart;
pub mod favorites;
pub mod inquiry;
pub mod listing;
pub mod session;
pub mod transaction;
pub mod user;
pub mod view;

pub use self::{
    cart::Cart, favorites::Favorites, inquiry::Inquiry, listing::Listing,
    session::Session, transaction::Transaction, user::User, view::Router,
};
