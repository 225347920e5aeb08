//! Networking modules for the kitchen REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` owns request shaping (origin, JSON headers, bearer injection) and
//! the transport seam; `auth` and `restaurants` are thin facades over single
//! endpoints; `types` defines the wire schema.

pub mod auth;
pub mod client;
pub mod restaurants;
pub mod types;

#[cfg(test)]
#[path = "test_support.rs"]
pub(crate) mod test_support;
