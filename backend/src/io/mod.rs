//! # IO Module
//!
//! Interface layer that exposes the domain services to clients. Currently a
//! single REST surface; handlers map DTOs from the `shared` crate straight
//! onto service calls and translate failures into HTTP statuses.

pub mod rest;
