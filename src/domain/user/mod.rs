// User domain module
// Contains the user entity and its value objects

#![allow(clippy::module_inception)]

pub mod user;
pub mod value_objects;

pub use user::{Profile, User, DEFAULT_ABOUT, DEFAULT_AVATAR, DEFAULT_NAME};
