//! Wrap-around continuous space and neighbor queries

pub mod space;

pub use space::ToroidalSpace;
