//! Client module for the contact form HTTP endpoint

mod client;
mod error;
mod traits;

pub use client::ContactClient;
pub use error::SubmitError;
pub use traits::ContactClientTrait;

#[cfg(test)]
pub use traits::MockContactClientTrait;
