// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - external provider wrappers.

pub mod photos;
pub mod weather;

pub use photos::{PhotoService, StorageClient};
pub use weather::{WeatherClient, WeatherService};
