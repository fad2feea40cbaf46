//! # Application Layer
//!
//! Use cases built on the pricing domain, and the errors a host sees.

pub mod error;
pub mod services;
