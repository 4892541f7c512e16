//! Browser binding
//!
//! The page owns the canvas, the DOM controls and the refresh loop. It calls
//! `tick()` from `requestAnimationFrame`, draws from the returned JSON and
//! forwards pointer, keyboard and control input through the methods below.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::audio::WebAudio;
use crate::config::{Difficulty, GameConfig};
use crate::platform::SystemClock;
use crate::sim::{GameEvent, Snapshot, TickInput};
use crate::simulation::Simulation;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Rally Pong starting...");
}

/// One frame of output for the page
#[derive(Serialize)]
struct Frame<'a> {
    state: Snapshot<'a>,
    events: Vec<GameEvent>,
}

#[wasm_bindgen]
pub struct WebGame {
    sim: Simulation,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game from an optional JSON config
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WebGame, JsValue> {
        let config = match config_json {
            Some(json) => GameConfig::from_json(&json),
            None => Ok(GameConfig::default()),
        }
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let seed = js_sys::Date::now() as u64;
        let sim = Simulation::new(
            config,
            seed,
            Box::new(SystemClock::new()),
            Box::new(WebAudio::new()),
        )
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WebGame { sim })
    }

    /// Advance one frame; returns `{ state, events }` as JSON
    pub fn tick(&mut self) -> Result<String, JsValue> {
        let events = self.sim.step(&TickInput::default()).to_vec();
        let frame = Frame {
            state: self.sim.snapshot(),
            events,
        };
        serde_json::to_string(&frame).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Pointer or touch y, in field coordinates
    pub fn set_player_target(&mut self, y: f32) {
        self.sim.set_player_target(y);
    }

    pub fn toggle_pause(&mut self) {
        self.sim.toggle_pause();
    }

    /// Returns false for an unknown difficulty name
    pub fn set_difficulty(&mut self, name: &str) -> bool {
        match Difficulty::from_str(name) {
            Some(difficulty) => {
                self.sim.set_difficulty(difficulty);
                true
            }
            None => {
                log::warn!("Unknown difficulty '{name}'");
                false
            }
        }
    }

    pub fn restart(&mut self) {
        self.sim.restart();
    }

    pub fn field_width(&self) -> f32 {
        self.sim.state().config.field_width
    }

    pub fn field_height(&self) -> f32 {
        self.sim.state().config.field_height
    }
}
