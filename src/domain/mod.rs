// Domain layer module exports
// Domain is independent of infrastructure concerns

pub mod card;
pub mod repositories;
pub mod user;
pub mod value_objects;
