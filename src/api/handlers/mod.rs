// HTTP handlers, one module per resource

pub mod auth;
pub mod cards;
pub mod diagnostics;
pub mod users;
pub mod wrongs;
