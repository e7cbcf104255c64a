//! HTTP request handlers for the web surface.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod export;
pub mod links;
pub mod redirect;

pub use auth::{
    login_form_handler, login_handler, logout_handler, register_form_handler, register_handler,
};
pub use export::export_handler;
pub use links::{
    create_link_handler, delete_link_handler, index_handler, new_link_form_handler, root_handler,
    show_link_handler, update_link_handler,
};
pub use redirect::redirect_handler;
