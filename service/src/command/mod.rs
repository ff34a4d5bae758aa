//! [`Command`] definition.

pub mod add_interest;
pub mod browse_photos;
pub mod checkout;
pub mod log_in;
pub mod log_out;
pub mod navigate;
pub mod remove_interest;
pub mod set_quantity;
pub mod submit_contact;
pub mod toggle_favorite;
pub mod update_user_email;
pub mod update_user_name;
pub mod update_user_phone;
pub mod update_user_settings;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    add_interest::AddInterest, browse_photos::BrowsePhotos,
    checkout::Checkout, log_in::LogIn, log_out::LogOut, navigate::Navigate,
    remove_interest::RemoveInterest, set_quantity::SetQuantity,
    submit_contact::SubmitContact, toggle_favorite::ToggleFavorite,
    update_user_email::UpdateUserEmail, update_user_name::UpdateUserName,
    update_user_phone::UpdateUserPhone,
    update_user_settings::UpdateUserSettings,
};
