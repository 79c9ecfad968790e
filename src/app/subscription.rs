// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window geometry drives the gallery: the first size event is the first
//! render, later ones only re-run layout. Scrolling arrives through the
//! scrollable itself, not through here.

use super::Message;
use iced::{event, keyboard, window, Subscription};

/// Routes window size changes and the preview's close key.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window::Event::Opened { size, .. })
        | event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => match status {
            event::Status::Ignored => Some(Message::ClosePreview),
            event::Status::Captured => None,
        },
        _ => None,
    })
}
