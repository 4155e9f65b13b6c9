#![doc = include_str!("../README.md")]

pub mod config;
pub mod constants;

mod catalog;
pub use catalog::Catalog;

mod category;
pub use category::ErrorCategory;

mod code;
pub use code::ErrorCode;

mod error;
pub use error::CatalogError;

mod object;
pub use object::ErrorObject;

#[cfg(test)]
mod tests;
