//! Studiolink - profile and booking platform backend
//!
//! HTTP API for profile initialization, studio access checks, and
//! subscription lifecycle operations backed by an external billing provider.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
