// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod forecast;
pub mod session;
pub mod spot;

pub use forecast::{Forecast, ForecastHour, ForecastSource, TideExtreme, TideTable};
pub use session::{Board, Conditions, Crowd, NewSession, Session, SessionPatch};
pub use spot::{spot_id, FavoriteSpot, NewSpot};
