//! Pinch Pong entry point
//!
//! The browser build is driven from JavaScript through `platform::web`. The
//! native binary runs a headless session with a scripted hand so the
//! simulation can be watched in the log:
//!
//! ```text
//! RUST_LOG=info pinch-pong [settings.json] [frames]
//! ```

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Pinch Pong (native) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => match pinch_pong::Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => pinch_pong::Settings::default(),
    };
    let frames = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(1800);

    if let Err(e) = headless::run(&settings, frames) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::WebGame, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;
    use pinch_pong::consts::FRAME_DT;
    use pinch_pong::{ConfigError, Game, Settings};

    /// Frames per simulated tracking dropout cycle
    const DROPOUT_PERIOD: u64 = 240;
    /// Frames without a hand at the end of each cycle
    const DROPOUT_FRAMES: u64 = 30;

    /// Scripted hand: a pinch held under the ball, chasing it with some lag
    struct ScriptedHand {
        x: f32,
        span: f32,
    }

    impl ScriptedHand {
        fn sample(&mut self, ball: Vec2, field_height: f32, frame: u64) -> (Vec2, Vec2) {
            self.x += (ball.x - self.x) * 0.15;
            let tilt = (frame as f32 * FRAME_DT * 1.3).sin() * 15.0;
            let y = field_height * 0.8;
            (
                Vec2::new(self.x - self.span, y + tilt),
                Vec2::new(self.x + self.span, y - tilt),
            )
        }
    }

    pub fn run(settings: &Settings, frames: u64) -> Result<(), ConfigError> {
        let field = settings.field();
        let mut game = Game::initialize(field, settings)?;
        let mut hand = ScriptedHand {
            x: field.center().x,
            span: 60.0,
        };

        let mut bounces = 0u32;
        let mut resets = 0u32;
        for frame in 0..frames {
            let tracking = frame % DROPOUT_PERIOD < DROPOUT_PERIOD - DROPOUT_FRAMES;
            if tracking {
                let (thumb, index) = hand.sample(game.ball().pos, field.height, frame);
                if let Err(e) = game.on_pose_sample(thumb, index) {
                    log::warn!("frame {frame}: {e}");
                }
            } else {
                let _ = game.on_hand_keypoints(&[]);
            }

            let report = game.update();
            if report.bounced {
                bounces += 1;
            }
            if report.reset {
                resets += 1;
            }
            if frame % 60 == 0 {
                let ball = game.ball();
                log::info!(
                    "t={:>5.1}s round {} ball ({:>6.1}, {:>6.1}) vel ({:>6.2}, {:>6.2}){}",
                    frame as f32 * FRAME_DT,
                    game.state().round,
                    ball.pos.x,
                    ball.pos.y,
                    ball.vel.x,
                    ball.vel.y,
                    if tracking { "" } else { " [no hand]" }
                );
            }
        }

        log::info!(
            "Finished {} frames: {} paddle hits, {} resets",
            frames,
            bounces,
            resets
        );
        Ok(())
    }
}
