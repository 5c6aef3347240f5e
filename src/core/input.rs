//! Keyboard sampling behind a small capability so players can be driven without a window.
use raylib::prelude::*;

pub trait InputSource {
    fn key_down(&self, key: KeyboardKey) -> bool;
}

impl InputSource for RaylibHandle {
    fn key_down(&self, key: KeyboardKey) -> bool {
        self.is_key_down(key)
    }
}

/// Fixed set of held keys, for tests.
#[cfg(test)]
#[derive(Default)]
pub struct HeldKeys(pub Vec<KeyboardKey>);

#[cfg(test)]
impl InputSource for HeldKeys {
    fn key_down(&self, key: KeyboardKey) -> bool {
        self.0.contains(&key)
    }
}
