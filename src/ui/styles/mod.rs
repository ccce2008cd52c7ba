// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles.

pub mod button;
pub mod container;
pub mod overlay;

pub use button::primary as button_primary;
