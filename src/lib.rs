// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Surf Buddy: log surf sessions, save spots, chart your progress
//!
//! This crate provides the backend API for the surf log: session and
//! favorite-spot storage over a local JSON store, chart aggregation,
//! a marine weather proxy, and photo uploads to object storage.

pub mod analytics;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod time_utils;

use config::Config;
use services::{PhotoService, WeatherService};
use store::{FavoriteRepository, SessionRepository};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub sessions: SessionRepository,
    pub favorites: FavoriteRepository,
    pub weather: WeatherService,
    pub photos: PhotoService,
}
