// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! - [`search_bar`] - Keyword input and submit button
//! - [`grid`] - Paginated thumbnail grid with load-more control
//! - [`overlay`] - Full-size image overlay
//! - [`empty_state`] - Landing view before the first search
//! - [`error_banner`] - Inline error display under the toolbar
//! - [`notifications`] - Toast notification system for user feedback
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod empty_state;
pub mod error_banner;
pub mod grid;
pub mod notifications;
pub mod overlay;
pub mod search_bar;
pub mod styles;
pub mod theming;
pub mod widgets;
