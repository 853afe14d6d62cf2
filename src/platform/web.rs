//! JavaScript bindings
//!
//! The page owns the camera, the hand-pose model and the canvas. It forwards
//! each detection to [`WebGame::on_hand_keypoints`], calls
//! [`WebGame::update`] from `requestAnimationFrame` and draws from
//! [`WebGame::scene`].

use std::sync::Once;

use glam::Vec2;
use wasm_bindgen::prelude::*;

use crate::game::Game;
use crate::settings::Settings;
use crate::sim::Field;

static INIT_LOGGING: Once = Once::new();

fn init_logging() {
    INIT_LOGGING.call_once(|| {
        console_error_panic_hook::set_once();
        // Fails only if the page already installed a logger
        let _ = console_log::init_with_level(log::Level::Info);
    });
}

/// Game handle exported to JavaScript
#[wasm_bindgen]
pub struct WebGame {
    game: Game,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game for a `width` x `height` canvas. `settings_json` may be
    /// empty to use the defaults. The canvas size overrides the field size in
    /// the settings; a non-positive or non-finite size is an error.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, settings_json: &str) -> Result<WebGame, JsError> {
        init_logging();
        let settings = if settings_json.trim().is_empty() {
            Settings::default()
        } else {
            Settings::from_json(settings_json)?
        };
        Ok(Self {
            game: Game::initialize(Field::new(width, height), &settings)?,
        })
    }

    /// Forward one hand as a flat `[x0, y0, x1, y1, ...]` keypoint array.
    /// An empty array means no hand was detected. Returns false if the sample
    /// was rejected.
    pub fn on_hand_keypoints(&mut self, coords: &[f32]) -> bool {
        if coords.is_empty() {
            self.clear_hands();
            return true;
        }
        let keypoints: Vec<Vec2> = coords
            .chunks_exact(2)
            .map(|xy| Vec2::new(xy[0], xy[1]))
            .collect();
        self.game.on_hand_keypoints(&[keypoints]).is_ok()
    }

    /// No hand this detection
    pub fn clear_hands(&mut self) {
        let _ = self.game.on_hand_keypoints(&[]);
    }

    /// Run one frame; returns true if the round was reset
    pub fn update(&mut self) -> bool {
        self.game.update().reset
    }

    /// Flat render snapshot, see [`crate::scene::Scene::to_flat`]
    pub fn scene(&self) -> Vec<f32> {
        self.game.scene().to_flat()
    }

    pub fn round(&self) -> u32 {
        self.game.state().round
    }
}
