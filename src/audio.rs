//! Audio collaborator
//!
//! The simulation only emits events. This module turns them into sound
//! triggers and keeps the background beat, whose tempo speeds up as the belt
//! thins out. Playback is fire-and-forget: players never block or fail a tick.

use crate::secs_to_ticks;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Laser fired
    Laser,
    /// Asteroid destroyed
    Hit,
    /// Ship exploded
    Explode,
    /// Thruster loop
    Thrust,
}

impl SoundEffect {
    const COUNT: usize = 4;

    /// Playback volume in `0.0..=1.0`
    pub fn volume(self) -> f32 {
        match self {
            SoundEffect::Laser => 0.1,
            SoundEffect::Hit | SoundEffect::Explode | SoundEffect::Thrust => 0.8,
        }
    }

    /// Voices that may overlap; rapid retriggers rotate through them
    pub fn max_streams(self) -> usize {
        match self {
            SoundEffect::Laser | SoundEffect::Hit => 5,
            SoundEffect::Explode | SoundEffect::Thrust => 1,
        }
    }
}

/// Round-robin voice selection per effect
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamCursor {
    current: [usize; SoundEffect::COUNT],
}

impl StreamCursor {
    /// Advance to the next voice for `effect` and return its index
    pub fn next(&mut self, effect: SoundEffect) -> usize {
        let slot = &mut self.current[effect as usize];
        *slot = (*slot + 1) % effect.max_streams();
        *slot
    }

    /// Voice most recently started for `effect` (the one `stop` silences)
    pub fn current(&self, effect: SoundEffect) -> usize {
        self.current[effect as usize]
    }
}

/// One of the two alternating music notes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Beat {
    Low,
    High,
}

/// Sound output contract
pub trait AudioPlayer {
    /// Start a one-shot effect (or the thruster loop)
    fn play(&mut self, effect: SoundEffect);
    /// Stop a looping effect
    fn stop(&mut self, effect: SoundEffect);
    /// Play one music beat
    fn beat(&mut self, beat: Beat);
}

/// Background beat state: alternating low/high notes, tempo in seconds per beat
#[derive(Debug, Clone, PartialEq)]
pub struct Music {
    next: Beat,
    tempo: f32,
    /// Ticks left until the next beat
    beat_time: u32,
}

impl Default for Music {
    fn default() -> Self {
        Self::new()
    }
}

impl Music {
    pub fn new() -> Self {
        Self {
            next: Beat::Low,
            tempo: 1.0,
            beat_time: 0,
        }
    }

    pub fn tempo(&self) -> f32 {
        self.tempo
    }

    /// Speed up from 1.0 s/beat (full belt) to 0.25 s/beat (nearly cleared)
    pub fn set_asteroid_ratio(&mut self, ratio: f32) {
        self.tempo = 1.0 - 0.75 * (1.0 - ratio.clamp(0.0, 1.0));
    }

    /// Advance one tick; returns the beat to play, if any
    pub fn tick(&mut self) -> Option<Beat> {
        if self.beat_time == 0 {
            let beat = self.next;
            self.next = match beat {
                Beat::Low => Beat::High,
                Beat::High => Beat::Low,
            };
            self.beat_time = secs_to_ticks(self.tempo);
            Some(beat)
        } else {
            self.beat_time -= 1;
            None
        }
    }
}

/// Audio side of a game: toggles, the beat tracker and the output device
#[derive(Debug)]
pub struct AudioDirector<A: AudioPlayer> {
    pub player: A,
    pub music: Music,
    pub sound_on: bool,
    pub music_on: bool,
}

impl<A: AudioPlayer> AudioDirector<A> {
    pub fn new(player: A, sound_on: bool, music_on: bool) -> Self {
        Self {
            player,
            music: Music::new(),
            sound_on,
            music_on,
        }
    }

    /// Called once per tick before the simulation steps
    pub fn tick_music(&mut self) {
        if let Some(beat) = self.music.tick() {
            if self.music_on {
                self.player.beat(beat);
            }
        }
    }

    /// Route simulation events to sound triggers
    pub fn handle(&mut self, event: &GameEvent) {
        if let GameEvent::AsteroidRatio(ratio) = *event {
            self.music.set_asteroid_ratio(ratio);
        }

        if !self.sound_on {
            return;
        }
        match event {
            GameEvent::LaserFired => self.player.play(SoundEffect::Laser),
            GameEvent::AsteroidHit { .. } => self.player.play(SoundEffect::Hit),
            GameEvent::ShipExploded => self.player.play(SoundEffect::Explode),
            GameEvent::ThrustStarted => self.player.play(SoundEffect::Thrust),
            GameEvent::ThrustStopped => self.player.stop(SoundEffect::Thrust),
            _ => {}
        }
    }
}

/// Player that only logs triggers (headless host)
#[derive(Debug, Clone, Default)]
pub struct LogAudio {
    streams: StreamCursor,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioPlayer for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        let stream = self.streams.next(effect);
        log::trace!(
            "play {:?} on stream {} at volume {}",
            effect,
            stream,
            effect.volume()
        );
    }

    fn stop(&mut self, effect: SoundEffect) {
        log::trace!("stop {:?} on stream {}", effect, self.streams.current(effect));
    }

    fn beat(&mut self, beat: Beat) {
        log::trace!("beat {:?}", beat);
    }
}

/// Player that records every trigger in order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingAudio {
    pub played: Vec<SoundEffect>,
    pub stopped: Vec<SoundEffect>,
    pub beats: Vec<Beat>,
}

impl AudioPlayer for RecordingAudio {
    fn play(&mut self, effect: SoundEffect) {
        self.played.push(effect);
    }

    fn stop(&mut self, effect: SoundEffect) {
        self.stopped.push(effect);
    }

    fn beat(&mut self, beat: Beat) {
        self.beats.push(beat);
    }
}
