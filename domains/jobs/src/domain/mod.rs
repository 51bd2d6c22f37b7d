//! Domain layer for the Jobs domain

pub mod entities;
pub mod validation;
