//! Field setters, one module per protocol section
//!
//! Every setter stores one protocol parameter. Unconstrained fields return
//! `&mut QueryBuilder`; fields with a byte ceiling, sign or index constraint
//! return `Result<&mut QueryBuilder>`.

mod custom;
mod ecommerce;
mod enhanced;
mod event;
mod general;
mod hit;
mod system;
mod timing;
mod traffic;
