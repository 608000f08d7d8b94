//! Play-Box launcher menu.

use crate::input::Buttons;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameKind {
    Shooter,
    Snake,
    Jump,
    ButtonTest,
}

impl GameKind {
    pub const ALL: [GameKind; 4] = [
        GameKind::Shooter,
        GameKind::Snake,
        GameKind::Jump,
        GameKind::ButtonTest,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GameKind::Shooter => "Shooting",
            GameKind::Snake => "Snake",
            GameKind::Jump => "Jump",
            GameKind::ButtonTest => "Buttons",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Menu {
    pub selected: usize,
    /// Buttons from the previous tick; the menu reacts to presses only.
    prev: Buttons,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Menu that ignores buttons already held when it opens.
    pub fn opened_with(held: Buttons) -> Self {
        Menu {
            selected: 0,
            prev: held,
        }
    }

    pub fn current(&self) -> GameKind {
        GameKind::ALL[self.selected]
    }

    /// Move the cursor or launch.  Returns the game to start, if any.
    pub fn handle(&mut self, input: &Buttons) -> Option<GameKind> {
        let n = GameKind::ALL.len();
        let pressed = |now: bool, before: bool| now && !before;

        if pressed(input.up, self.prev.up) {
            self.selected = (self.selected + n - 1) % n;
        }
        if pressed(input.down, self.prev.down) {
            self.selected = (self.selected + 1) % n;
        }
        let launch = pressed(input.shoot, self.prev.shoot);
        self.prev = *input;

        launch.then(|| self.current())
    }
}
