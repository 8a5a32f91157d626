//! # TEG Models
//!
//! Steady-state models of thermoelectric generator (TEG) arrays built on
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! An array is a set of identical modules, each clamped between a hot-side
//! and a cold-side liquid heat exchanger. The central model couples the
//! fluid loops, the thermal resistance chain and the module electrical
//! behavior, then accounts for pumping, heat rejection and electronics loads
//! to report net electrical output.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations and
//!   the analyses built on them (sizing, fuel demand, cost).
//! - [`support`]: Supporting utilities used by models, including fluid
//!   properties, convection and friction correlations, and module data.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Model-specific code starts in a model's internal `core` module and only
//! moves to [`support`] once more than one model needs it.

pub mod models;
pub mod support;
