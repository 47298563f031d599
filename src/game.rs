//! Top-level orchestrator
//!
//! Owns the session and its collaborators. One `step` is one tick:
//! music beat -> simulation -> event dispatch -> draw. Collaborators are
//! fire-and-forget; nothing here can stall or fail a tick.

use rand_pcg::Pcg32;

use crate::audio::{AudioDirector, AudioPlayer};
use crate::highscores::ScoreStore;
use crate::renderer::Renderer;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, tick};

pub struct Game<S: ScoreStore, A: AudioPlayer, R: Renderer> {
    pub state: GameState,
    pub audio: AudioDirector<A>,
    pub store: S,
    pub renderer: R,
}

impl<S: ScoreStore, A: AudioPlayer, R: Renderer> Game<S, A, R> {
    pub fn new(settings: &Settings, rng: Pcg32, store: S, player: A, renderer: R) -> Self {
        let mut state = GameState::with_rng(rng, settings.arena(), settings.asteroid_drift);
        state.highscore = store.load().unwrap_or(0);
        state.events.clear();

        Self {
            state,
            audio: AudioDirector::new(player, settings.sound_on, settings.music_on),
            store,
            renderer,
        }
    }

    /// Run one fixed tick with the given intents
    pub fn step(&mut self, input: &TickInput) {
        self.audio.tick_music();
        tick(&mut self.state, input);

        let events = std::mem::take(&mut self.state.events);
        for event in &events {
            self.dispatch(event);
        }
        self.state.events = events;

        self.renderer.draw(&self.state);
    }

    fn dispatch(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::HighScore(score) => self.store.save(score),
            GameEvent::NewGame => {
                self.state.highscore = self.store.load().unwrap_or(0);
            }
            _ => {}
        }
        self.audio.handle(event);
    }
}
