#![warn(missing_docs)]

//! # ERP Dashboard Theming Engine
//!
//! Turns a small declarative theme configuration into a complete, deterministic
//! style specification for the dashboard's rendering layer, and lets an
//! external agent change that configuration through free text.
//!
//! ## Overview
//!
//! The engine consists of several key components:
//!
//! - **[resolve](theme::resolve)**: Maps a variant and mode to a base [StyleSpec](style::StyleSpec)
//! - **[apply](parameters::apply)**: Applies tuning parameters to a base spec
//! - **[interpret](interpreter::interpret)**: Classifies free text into a configuration delta
//! - **[ThemeManager](manager::ThemeManager)**: Holds the current configuration, merges updates and notifies subscribers
//! - **[ThemeConfig](config::ThemeConfig)**: The configuration itself, with startup loading from TOML and environment variables
//!
//! ## Quick Start
//!
//! ```rust
//! use erp_theme::config::ThemeMode;
//! use erp_theme::manager::ThemeManager;
//!
//! let mut manager = ThemeManager::new();
//! manager.subscribe(|config, spec| {
//!     println!("now {} with radius {}", config.mode, spec.shape_radius);
//! });
//!
//! let spec = manager.apply_natural_language_command("Dunkelmodus mit großer Schrift");
//! assert_eq!(manager.config().mode, ThemeMode::Dark);
//! assert_eq!(&spec, manager.style_spec());
//! ```
//!
//! ## Structured Updates
//!
//! ```rust
//! use erp_theme::manager::ThemeManager;
//! use erp_theme::request::ThemeUpdateRequest;
//!
//! let mut manager = ThemeManager::new();
//! let request = ThemeUpdateRequest::from_json(r#"{"variant":"default"}"#).unwrap();
//! manager.apply_request(&request).unwrap();
//!
//! let invalid = ThemeUpdateRequest::from_json(r#"{"variant":"neon"}"#).unwrap();
//! assert!(manager.apply_request(&invalid).is_err());
//! ```
//!
//! ## Architecture
//!
//! 1. **Configuration Layer**: [config] and [request] define and validate inputs
//! 2. **Resolution Layer**: [theme] builds base specs from palette tables
//! 3. **Parameter Layer**: [parameters] tunes a base spec
//! 4. **Manager Layer**: [manager] composes the layers and fans out changes
//!
//! Nothing in the engine performs I/O after startup, and every operation runs
//! to completion on the caller's thread.

/// Contains the [config::ThemeConfig] struct and its enums.
pub mod config;
/// Contains the [error::ThemeError] type.
pub mod error;
/// Contains the free-text command interpreter.
pub mod interpreter;
/// Contains the [manager::ThemeManager] state handle.
pub mod manager;
/// Contains parameter application.
pub mod parameters;
/// Contains untyped agent requests and their validation.
pub mod request;
/// Contains hex color serialization helpers.
pub mod serde_color;
/// Contains the [style::StyleSpec] output types.
pub mod style;
/// Contains variant resolution and palette tables.
pub mod theme;
