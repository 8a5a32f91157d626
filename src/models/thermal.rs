//! Thermal systems models.
//!
//! This module contains models for heat-driven power generation, starting with
//! liquid-coupled thermoelectric generator arrays.

pub mod teg_array;
