//! Screen routing for the Play-Box: the launcher menu plus each game.

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};
use log::{debug, info};
use rand::Rng;

use crate::compute;
use crate::config::ArcadeConfig;
use crate::display;
use crate::entities::GameState;
use crate::event::FrameEvent;
use crate::input::{Buttons, JumpInput, Panel, SnakeInput};
use crate::jump::{self, JumpState};
use crate::menu::{GameKind, Menu};
use crate::scores::HighScores;
use crate::snake::{self, SnakeState};

#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    Menu(Menu),
    Shooter(GameState),
    Snake(SnakeState),
    Jump(JumpState),
    ButtonTest(Panel),
}

pub struct App {
    pub screen: Screen,
    pub scores: HighScores,
    config: ArcadeConfig,
    /// Buttons down when the current game started, ignored until released.
    held_at_launch: Panel,
}

impl App {
    pub fn new(config: ArcadeConfig, scores: HighScores) -> Self {
        App {
            screen: Screen::Menu(Menu::new()),
            scores,
            config,
            held_at_launch: Panel::default(),
        }
    }

    /// Game currently on screen, `None` in the menu.
    pub fn current_game(&self) -> Option<GameKind> {
        match self.screen {
            Screen::Menu(_) => None,
            Screen::Shooter(_) => Some(GameKind::Shooter),
            Screen::Snake(_) => Some(GameKind::Snake),
            Screen::Jump(_) => Some(GameKind::Jump),
            Screen::ButtonTest(_) => Some(GameKind::ButtonTest),
        }
    }

    /// Start `game`.  Buttons in `held` stay masked until they are released,
    /// so the press that picked the game doesn't also act in it.
    pub fn launch(
        &mut self,
        game: GameKind,
        held: &Panel,
        rng: &mut impl Rng,
    ) -> Vec<FrameEvent> {
        info!("starting {}", game.label());
        self.held_at_launch = *held;
        self.screen = match game {
            GameKind::Shooter => Screen::Shooter(compute::init_state(self.config.shooter)),
            GameKind::Snake => Screen::Snake(SnakeState::new(self.config.snake, rng)),
            GameKind::Jump => Screen::Jump(JumpState::new(self.config.jump)),
            GameKind::ButtonTest => Screen::ButtonTest(Panel::default()),
        };
        vec![FrameEvent::GameStarted(game)]
    }

    /// Leave the running game, keeping any new best.  `held` is the panel
    /// at that moment so the menu doesn't act on a button still down.
    pub fn back_to_menu(&mut self, held: &Panel) -> Vec<FrameEvent> {
        let mut events = Vec::new();
        let mut shooter_score = None;
        let result = match &self.screen {
            Screen::Menu(_) => return events,
            Screen::Shooter(s) => {
                shooter_score = Some(s.score);
                Some((GameKind::Shooter, s.stage))
            }
            Screen::Snake(s) => Some((GameKind::Snake, s.score())),
            Screen::Jump(s) => Some((GameKind::Jump, s.score)),
            Screen::ButtonTest(_) => None,
        };
        if let Some((game, value)) = result {
            self.record(game, value, &mut events);
        }
        if let Some(score) = shooter_score {
            self.record_shooter_score(score, &mut events);
        }
        self.screen = Screen::Menu(Menu::opened_with(Buttons::from(held)));
        events.push(FrameEvent::ReturnedToMenu);
        events
    }

    fn record(&mut self, game: GameKind, value: u32, events: &mut Vec<FrameEvent>) {
        if self.scores.record(game, value) {
            info!("new best for {}: {value}", game.label());
            events.push(FrameEvent::NewBest { game, value });
        }
    }

    fn record_shooter_score(&mut self, value: u32, events: &mut Vec<FrameEvent>) {
        if self.scores.record_shooter_score(value) {
            info!("new best shooter score: {value}");
            events.push(FrameEvent::NewBestScore { value });
        }
    }

    /// Run one simulation tick of whatever is on screen.
    pub fn step(&mut self, panel: &Panel, now: u64, rng: &mut impl Rng) -> Vec<FrameEvent> {
        if let Screen::Menu(menu) = &mut self.screen {
            return match menu.handle(&Buttons::from(panel)) {
                Some(game) => self.launch(game, panel, rng),
                None => Vec::new(),
            };
        }
        let live = panel.without(&self.held_at_launch);
        self.held_at_launch = self.held_at_launch.intersect(panel);
        self.step_game(&live, panel, now, rng)
    }

    /// `panel` has the launch buttons masked out; `raw` is what is really down.
    fn step_game(
        &mut self,
        panel: &Panel,
        raw: &Panel,
        now: u64,
        rng: &mut impl Rng,
    ) -> Vec<FrameEvent> {
        let mut events = Vec::new();
        let mut finished = false;

        match &mut self.screen {
            Screen::Menu(_) => {}
            Screen::Shooter(state) => {
                let (next, ev) = compute::tick(state, &Buttons::from(panel), now, rng);
                *state = next;
                events = ev;
            }
            Screen::Snake(state) => {
                let (next, ev) = snake::tick(state, &SnakeInput::from(panel), now, rng);
                finished = next.finished;
                *state = next;
                events = ev;
            }
            Screen::Jump(state) => {
                let (next, ev) = jump::tick(state, &JumpInput::from(panel), now);
                finished = next.finished;
                *state = next;
                events = ev;
            }
            Screen::ButtonTest(shown) => *shown = *panel,
        }

        let game_over = events.iter().find_map(|e| match e {
            FrameEvent::GameOver { stage, score } => Some((*stage, *score)),
            _ => None,
        });
        if let Some((stage, score)) = game_over {
            self.record(GameKind::Shooter, stage, &mut events);
            self.record_shooter_score(score, &mut events);
        }

        if finished {
            debug!("game finished, returning to menu");
            events.extend(self.back_to_menu(raw));
        }
        events
    }

    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        match &self.screen {
            Screen::Menu(menu) => display::menu::render(menu, &self.scores, target),
            Screen::Shooter(state) => display::shooter::render(state, target),
            Screen::Snake(state) => display::snake::render(state, target),
            Screen::Jump(state) => display::jump::render(state, target),
            Screen::ButtonTest(panel) => display::menu::render_button_test(panel, target),
        }
    }
}
