// SPDX-License-Identifier: MPL-2.0
//! Shared widget style functions.

pub mod button;
pub mod container;
