//! Astronomical calculator: moon phase and solunar periods.
//!
//! Everything here is a pure function of `(date, latitude, longitude)`.
//! No clocks are read and no I/O happens, so results are reproducible for
//! any injected evaluation instant.

pub mod moon;
pub mod solunar;

pub use moon::{moon_phase, FeedingActivity, FishingQuality, MoonPhase, MoonPhaseData};
pub use solunar::{
    is_in_solunar_period, solunar_periods, solunar_rating_at, SolunarPeriods, SolunarRating,
    SolunarStatus, SolunarWindow, WindowKind,
};
