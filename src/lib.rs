//! Holiday Calendar Engine
//!
//! This crate computes the dates of national holidays for a given year and
//! answers whether a date is a holiday. Holidays are fixed dates or offsets
//! from Easter Sunday, optionally observed on the following Monday.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
