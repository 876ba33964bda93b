//! Parties domain module (customers placing orders).

pub mod customer;

pub use customer::Customer;
