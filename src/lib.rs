//! In-memory session and feed stores backing the social-feed demo.
//!
//! [`App`] wires a [`SessionStore`] and a [`FeedStore`] together and is
//! handed to the view layer as an explicit context; nothing here is global.

pub mod app;
pub mod auth;
pub mod config;
pub mod core;
pub mod models;
pub mod posts;
pub mod users;

pub use app::{App, Interaction, Submission};
pub use auth::SessionStore;
pub use config::Config;
pub use crate::core::errors::{ApiError, AuthError};
pub use models::models::{
    Author, KnownUser, Post, SessionState, SignInCredentials, SignUpCredentials, User,
};
pub use posts::FeedStore;
pub use users::KnownUsers;
