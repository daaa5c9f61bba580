//! Graph generation core: domain model, domain services and policies.
//!
//! Nothing in here performs I/O; reading the edge list, creating node
//! directories and running the builder go through the outbound ports.
pub mod domain;
pub mod policies;
pub mod services;
