//! Keyboard bindings
//!
//! The presentation layer reports keys by name ("W", "Space", "Numpad0", ...).
//! `KeyBindings` turns the set of held keys and the keys pressed this frame
//! into a `TickInput`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::sim::{PlayerSlot, TickInput};

/// A bindable control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    Up(PlayerSlot),
    Down(PlayerSlot),
    Left(PlayerSlot),
    Right(PlayerSlot),
    Fire(PlayerSlot),
    Ability(PlayerSlot),
    Confirm,
    Pause,
    Restart,
    Menu,
    Quit,
}

/// Key name to control. Several keys may share a control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyBindings {
    keys: BTreeMap<String, Control>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        use Control::*;
        use PlayerSlot::{One, Two};

        let defaults = [
            ("W", Up(One)),
            ("S", Down(One)),
            ("A", Left(One)),
            ("D", Right(One)),
            ("F", Fire(One)),
            ("E", Ability(One)),
            ("Up", Up(Two)),
            ("Down", Down(Two)),
            ("Left", Left(Two)),
            ("Right", Right(Two)),
            ("Numpad0", Fire(Two)),
            ("Numpad1", Ability(Two)),
            ("Enter", Confirm),
            ("Escape", Pause),
            ("P", Pause),
            ("R", Restart),
            ("M", Menu),
            ("Q", Quit),
        ];

        Self {
            keys: defaults
                .into_iter()
                .map(|(key, control)| (key.to_string(), control))
                .collect(),
        }
    }
}

impl KeyBindings {
    /// Bindings with nothing bound
    pub fn empty() -> Self {
        Self {
            keys: BTreeMap::new(),
        }
    }

    /// Bind `key` to `control`, replacing whatever it did before
    pub fn bind(&mut self, key: impl Into<String>, control: Control) -> Option<Control> {
        self.keys.insert(key.into(), control)
    }

    pub fn unbind(&mut self, key: &str) -> Option<Control> {
        self.keys.remove(key)
    }

    pub fn control_for(&self, key: &str) -> Option<Control> {
        self.keys.get(key).copied()
    }

    /// Every key bound to `control`, in name order
    pub fn keys_for(&self, control: Control) -> impl Iterator<Item = &str> {
        self.keys
            .iter()
            .filter(move |(_, c)| **c == control)
            .map(|(key, _)| key.as_str())
    }

    /// Build this frame's input. Movement and fire follow `held`; abilities
    /// and menu keys only react to `pressed` (this frame's key-down events).
    pub fn to_tick_input<'a>(
        &self,
        held: impl IntoIterator<Item = &'a str>,
        pressed: impl IntoIterator<Item = &'a str>,
    ) -> TickInput {
        let mut input = TickInput::default();

        for control in held.into_iter().filter_map(|key| self.control_for(key)) {
            match control {
                Control::Up(slot) => input.players[slot.index()].up = true,
                Control::Down(slot) => input.players[slot.index()].down = true,
                Control::Left(slot) => input.players[slot.index()].left = true,
                Control::Right(slot) => input.players[slot.index()].right = true,
                Control::Fire(slot) => input.players[slot.index()].fire = true,
                _ => {}
            }
        }

        for control in pressed.into_iter().filter_map(|key| self.control_for(key)) {
            match control {
                Control::Ability(slot) => input.players[slot.index()].ability = true,
                Control::Confirm => input.confirm = true,
                Control::Pause => input.pause = true,
                Control::Restart => input.restart = true,
                Control::Menu => input.menu = true,
                Control::Quit => input.quit = true,
                _ => {}
            }
        }

        input
    }
}
