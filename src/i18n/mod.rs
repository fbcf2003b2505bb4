// SPDX-License-Identifier: MPL-2.0
//! Localization via Fluent message catalogs embedded at build time.

pub mod fluent;

pub use fluent::I18n;
