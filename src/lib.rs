//! Around API Library
//!
//! REST backend for user profiles and picture cards: public sign-in/sign-up,
//! bearer-token protected resources, and a single error translator that
//! turns every failure into `{ "message": "caught <category> error: <message>" }`.

pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod state;
