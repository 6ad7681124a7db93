//! Memory pressure generation for paging experiments
//!
//! This crate allocates a configured amount of memory, forces the operating
//! system to physically back every region, holds onto the allocation for a
//! configured duration, then releases it. Running it on a busy host starves
//! other processes of RAM so that their data can be observed spilling to
//! secondary storage.

#![deny(missing_docs)]

pub mod block;
pub mod config;
pub mod driver;
