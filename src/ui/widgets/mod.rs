// SPDX-License-Identifier: MPL-2.0
//! Custom drawing widgets.

pub mod skill_gauge;
