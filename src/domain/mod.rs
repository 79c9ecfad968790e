// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`gallery`]: Gallery model ([`Item`](gallery::Item), [`Group`](gallery::Group),
//!   [`LoadState`](gallery::LoadState)) and bounded values
//!   ([`GroupSize`](gallery::GroupSize), [`Spacing`](gallery::Spacing))

pub mod gallery;
