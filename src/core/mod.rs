//! Core domain logic for sigowners
//!
//! This module contains the resolution pipeline. Everything that talks to the
//! outside world (fetching the registry, posting comments) goes through the
//! port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Registry, Group, Contact, events, tiers)
//! - `policy` - Immutable reply policy compiled from configuration
//! - `services/` - Loading, lookup, matching, composing
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod policy;
pub mod ports;
pub mod services;
