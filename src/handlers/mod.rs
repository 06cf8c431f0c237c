//! HTTP handlers for the supplier resource.

pub mod supplier;
