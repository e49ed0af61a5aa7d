// SPDX-License-Identifier: MPL-2.0
//! UI components for the portfolio page.

pub mod contact;
pub mod design_tokens;
pub mod modal;
pub mod navbar;
pub mod notifications;
pub mod sections;
pub mod styles;
pub mod theming;
pub mod widgets;
