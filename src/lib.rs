//! Shift Scribe - Guided Shift Report Collection
//!
//! This crate implements a step-by-step report dialogue that walks a
//! requester from shift date to a confirmed record, appended to an
//! external report store.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
