//! Key input decoding.
//!
//! Translates raw terminal key events into the small DPAD vocabulary the
//! navigator consumes: four directions, the center (activation) key with a
//! repeat count, center release, and back. Everything else is ignored so the
//! host's own bindings keep working.
//!
//! Terminals report key repeat as separate events rather than a running
//! count, so [`KeyDecoder`] is stateful: it counts `Repeat` events for the
//! center key and resets the count on release. Directions are stateless.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A directional key on the DPAD / arrow cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
}

impl Direction {
    /// All four directions, for exhaustive iteration in tests.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns true for `Up`/`Down`.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Row delta applied by one move in this direction.
    #[must_use]
    pub const fn row_delta(self) -> isize {
        match self {
            Self::Up => -1,
            Self::Down => 1,
            Self::Left | Self::Right => 0,
        }
    }

    /// Column delta applied by one move in this direction.
    #[must_use]
    pub const fn col_delta(self) -> isize {
        match self {
            Self::Left => -1,
            Self::Right => 1,
            Self::Up | Self::Down => 0,
        }
    }
}

/// Key binding helper for mapping extra keys onto the DPAD vocabulary,
/// e.g. vim-style `hjkl` on keyboards without a comfortable arrow cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    /// Key code to match.
    pub code: KeyCode,
    /// Required modifier keys.
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a binding for a simple key.
    #[must_use]
    pub const fn key(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Create a binding with Ctrl modifier.
    #[must_use]
    pub const fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    /// Create a binding with Alt modifier.
    #[must_use]
    pub const fn alt(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::ALT,
        }
    }

    /// Create a binding with Shift modifier.
    #[must_use]
    pub const fn shift(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::SHIFT,
        }
    }

    /// Check if this binding matches a key event.
    #[must_use]
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.code == event.code && self.modifiers == event.modifiers
    }
}

/// A decoded DPAD event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DpadEvent {
    /// A directional press (initial press or auto-repeat).
    Direction(Direction),
    /// Center/activation key held down. `repeat` is 0 for the initial press
    /// and increments for every auto-repeat while held.
    Center {
        /// Auto-repeat count since the initial press.
        repeat: u32,
    },
    /// Center/activation key released.
    CenterRelease,
    /// Back key (Esc or Backspace).
    Back,
}

/// Stateful decoder from [`crossterm`] key events to [`DpadEvent`]s.
///
/// One decoder per input stream; the only mutable state is the center-key
/// repeat counter. Extra keys can be mapped onto directions with
/// [`with_binding`](Self::with_binding); the built-in arrow/Enter/Esc
/// decoding always wins over custom bindings.
#[derive(Debug, Default)]
pub struct KeyDecoder {
    center_repeats: u32,
    bindings: Vec<(KeyBinding, Direction)>,
}

impl KeyDecoder {
    /// Create a decoder with no key held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Map an extra key onto a direction.
    #[must_use]
    pub fn with_binding(mut self, binding: KeyBinding, direction: Direction) -> Self {
        self.bindings.push((binding, direction));
        self
    }

    /// Decode one key event. Returns `None` for keys outside the DPAD
    /// vocabulary.
    pub fn decode(&mut self, key: &KeyEvent) -> Option<DpadEvent> {
        match (key.code, key.kind) {
            (KeyCode::Up, KeyEventKind::Press | KeyEventKind::Repeat) => {
                Some(DpadEvent::Direction(Direction::Up))
            }
            (KeyCode::Down, KeyEventKind::Press | KeyEventKind::Repeat) => {
                Some(DpadEvent::Direction(Direction::Down))
            }
            (KeyCode::Left, KeyEventKind::Press | KeyEventKind::Repeat) => {
                Some(DpadEvent::Direction(Direction::Left))
            }
            (KeyCode::Right, KeyEventKind::Press | KeyEventKind::Repeat) => {
                Some(DpadEvent::Direction(Direction::Right))
            }
            (KeyCode::Enter, KeyEventKind::Press) => {
                self.center_repeats = 0;
                Some(DpadEvent::Center { repeat: 0 })
            }
            (KeyCode::Enter, KeyEventKind::Repeat) => {
                self.center_repeats = self.center_repeats.saturating_add(1);
                Some(DpadEvent::Center {
                    repeat: self.center_repeats,
                })
            }
            (KeyCode::Enter, KeyEventKind::Release) => {
                self.center_repeats = 0;
                Some(DpadEvent::CenterRelease)
            }
            (KeyCode::Esc | KeyCode::Backspace, KeyEventKind::Press) => Some(DpadEvent::Back),
            (_, KeyEventKind::Press | KeyEventKind::Repeat) => self
                .bindings
                .iter()
                .find(|(binding, _)| binding.matches(key))
                .map(|(_, direction)| DpadEvent::Direction(*direction)),
            _ => None,
        }
    }

    /// Forget any held key, e.g. when the input stream is torn down while a
    /// key is still down.
    pub fn reset(&mut self) {
        self.center_repeats = 0;
    }
}
