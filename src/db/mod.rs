// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export the per-domain aggregate repositories

pub mod bike_rack_repository;
pub mod client_repository;
pub mod rent_repository;
pub mod user_repository;

pub use bike_rack_repository::*;
pub use client_repository::*;
pub use rent_repository::*;
pub use user_repository::*;
