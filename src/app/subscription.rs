// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Interval between animation frames for smooth scrolling and gauges.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Routes native events: Escape for dialog dismissal and window resizes for
/// the visibility viewport.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match &event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => match status {
            event::Status::Ignored => Some(Message::EscapePressed),
            event::Status::Captured => None,
        },
        event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(*size))
        }
        _ => None,
    })
}

/// Frame ticks, active only while something is animating (an in-flight
/// scroll, a running gauge, or a toast waiting to expire). Each tick drives
/// one animation step; the chain stops by itself once everything settles.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
