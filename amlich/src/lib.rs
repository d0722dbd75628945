//! # amlich
//!
//! Vietnamese lunisolar calendar (âm lịch) and day selection.
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates. Application code should depend on this crate rather
//! than on the individual `amlich-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! amlich = "0.1"
//! ```
//!
//! ```rust
//! use amlich::fengshui::can_chi::year_can_chi;
//! use amlich::time::{solar_to_lunar, SolarDate, TimeZone};
//!
//! let tet = SolarDate::from_ymd(2024, 2, 10).unwrap();
//! let lunar = solar_to_lunar(tet, TimeZone::VIETNAM);
//! assert_eq!((lunar.day, lunar.month, lunar.year), (1, 1, 2024));
//! assert_eq!(year_can_chi(lunar.year).label(), "Giáp Thìn");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use amlich_core as core;

/// Civil dates, the ephemeris, and solar/lunar conversion.
pub use amlich_time as time;

/// Can-Chi, day stars, compatibility, and day evaluation.
pub use amlich_fengshui as fengshui;
