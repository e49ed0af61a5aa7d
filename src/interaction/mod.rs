// SPDX-License-Identifier: MPL-2.0
//! Interaction state machines, decoupled from the widget tree.
//!
//! Everything in this module is pure state: visibility watchers consume
//! synthetic intersection events computed from the scroll position, the
//! gauge animation is an explicit step function, and smooth scrolling is a
//! stepped interpolation that any clock can drive. The `app` module wires
//! these machines to real scroll offsets and tick subscriptions; tests feed
//! them directly.

pub mod gauge;
pub mod scroll;
pub mod visibility;
