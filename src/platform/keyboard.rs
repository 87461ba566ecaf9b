//! Keyboard input from winit
//!
//! Bindings: arrows steer, R restarts, closing the window quits.

use winit::event::WindowEvent;
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::game::{FrameEvents, InputSource};

/// Collects window events between frames
#[derive(Debug, Default)]
pub struct KeyboardInput {
    left: bool,
    right: bool,
    pending: FrameEvents,
}

impl KeyboardInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a window event. Returns true if the event was used.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CloseRequested => {
                self.request_quit();
                true
            }
            WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
                PhysicalKey::Code(code) => {
                    self.key_changed(code, event.state.is_pressed(), event.repeat)
                }
                PhysicalKey::Unidentified(_) => false,
            },
            // Key-up events are not delivered while unfocused
            WindowEvent::Focused(false) => {
                self.left = false;
                self.right = false;
                true
            }
            _ => false,
        }
    }

    /// Apply a key transition. Returns true if the key is bound.
    pub fn key_changed(&mut self, code: KeyCode, pressed: bool, repeat: bool) -> bool {
        match code {
            KeyCode::ArrowLeft => self.left = pressed,
            KeyCode::ArrowRight => self.right = pressed,
            KeyCode::KeyR => {
                if pressed && !repeat {
                    self.pending.restart = true;
                }
            }
            _ => return false,
        }
        true
    }

    pub fn request_quit(&mut self) {
        self.pending.quit = true;
    }
}

impl InputSource for KeyboardInput {
    fn poll_events(&mut self) -> FrameEvents {
        std::mem::take(&mut self.pending)
    }

    fn is_left_pressed(&self) -> bool {
        self.left
    }

    fn is_right_pressed(&self) -> bool {
        self.right
    }
}
