// Card domain module

#![allow(clippy::module_inception)]

pub mod card;

pub use card::Card;
