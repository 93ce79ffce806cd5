//! # windchill-client
//!
//! Leptos + WASM frontend for the Windchill PLM backend. Replaces the
//! React `windchill-frontend/` with a Rust-native UI layer.
//!
//! This crate contains pages, components, application state, the persisted
//! session store, and the HTTP client that talks to the REST API. The
//! browser-only code paths are gated behind the `csr` feature so the crate
//! (and its unit tests) also compile natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod storage;
