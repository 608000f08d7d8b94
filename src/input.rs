//! Button panel input.
//!
//! The panel has four active-low buttons.  [`Panel`] stores them as
//! "pressed" flags in wiring order; each game reads its own named view.

/// Electrical level of a button line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

/// Pressed state of the four panel buttons, in wiring order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Panel(pub [bool; 4]);

impl Panel {
    /// Decode raw line levels.  The buttons pull their line low when pressed.
    pub fn from_levels(levels: [Level; 4]) -> Self {
        Panel(levels.map(|l| l == Level::Low))
    }

    pub fn pressed(&self, idx: usize) -> bool {
        self.0.get(idx).copied().unwrap_or(false)
    }

    /// Buttons pressed here that are not in `held`.
    pub fn without(&self, held: &Panel) -> Panel {
        Panel(std::array::from_fn(|i| self.0[i] && !held.0[i]))
    }

    /// Buttons both here and in `other`.
    pub fn intersect(&self, other: &Panel) -> Panel {
        Panel(std::array::from_fn(|i| self.0[i] && other.0[i]))
    }
}

/// Shooter (and menu) view of the panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Buttons {
    pub pause: bool,
    pub shoot: bool,
    pub up: bool,
    pub down: bool,
}

impl From<&Panel> for Buttons {
    fn from(p: &Panel) -> Self {
        Buttons {
            pause: p.pressed(0),
            shoot: p.pressed(1),
            down: p.pressed(2),
            up: p.pressed(3),
        }
    }
}

/// Snake view of the panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SnakeInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl From<&Panel> for SnakeInput {
    fn from(p: &Panel) -> Self {
        SnakeInput {
            down: p.pressed(0),
            up: p.pressed(1),
            right: p.pressed(2),
            left: p.pressed(3),
        }
    }
}

/// Jump view of the panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JumpInput {
    pub jump: bool,
}

impl From<&Panel> for JumpInput {
    fn from(p: &Panel) -> Self {
        JumpInput { jump: p.pressed(0) }
    }
}
