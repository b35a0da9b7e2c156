//! # skywatch-types
//!
//! Core types for weather observations. This crate defines the canonical
//! shape of a reading and an alert as delivered by any weather backend, so
//! that the dashboard core never depends on a particular transport.
//!
//! ## Design Goals
//!
//! - **Zero required dependencies**: Core types work without any serialization framework
//! - **Optional serialization**: Enable the `serde` feature as needed
//! - **Tolerant numerics**: Measurements that fail coercion are stored as absent,
//!   never as NaN or a placeholder zero
//! - **Ergonomic builders**: Fluent API for constructing readings
//!
//! ## Features
//!
//! - `std` (default): Standard library support (wall-clock [`Timestamp::now`])
//! - `serde`: JSON/etc. serialization via serde
//!
//! ## Example
//!
//! ```rust
//! use skywatch_types::{ReadingRecord, Timestamp, WeatherCondition};
//!
//! let reading = ReadingRecord::builder("Delhi", Timestamp::from_secs(1_700_000_000))
//!     .temperature(31.5)
//!     .raw_feels_like("bad")
//!     .humidity(40.0)
//!     .condition(WeatherCondition::Clear)
//!     .build();
//!
//! assert_eq!(reading.temperature, Some(31.5));
//! assert_eq!(reading.feels_like, None);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod alert;
mod measurement;
mod reading;
mod timestamp;

pub use alert::*;
pub use measurement::*;
pub use reading::*;
pub use timestamp::*;
