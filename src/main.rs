//! Rally Pong entry point
//!
//! On native targets this is a headless runner: it plays a match between the
//! scripted opponent and a simple follower on the player side, on a manual
//! clock, and logs what happens. The browser build is driven through the
//! library's `web` module instead.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use rally_pong::audio::NullAudio;
    use rally_pong::platform::ManualClock;
    use rally_pong::sim::{GameEvent, TickInput};
    use rally_pong::{ConfigError, Difficulty, GameConfig, Simulation};
    use std::path::PathBuf;

    pub use clap::Parser;

    /// 60 Hz display refresh
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Player follower step per tick
    const FOLLOW_STEP: f32 = 4.0;

    #[derive(Parser, Debug)]
    #[command(name = "rally-pong")]
    #[command(about = "Headless Rally Pong match runner")]
    #[command(version)]
    pub struct Args {
        /// JSON config file (defaults apply to missing fields)
        pub config: Option<PathBuf>,

        /// RNG seed, random when omitted
        #[arg(short, long)]
        pub seed: Option<u64>,

        /// Stop after this many ticks
        #[arg(short, long, default_value = "100000")]
        pub ticks: u64,

        /// Difficulty override (easy, medium, hard)
        #[arg(short, long, value_parser = parse_difficulty)]
        pub difficulty: Option<Difficulty>,
    }

    fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
        Difficulty::from_str(s).ok_or_else(|| format!("unknown difficulty '{s}'"))
    }

    pub fn run(args: Args) -> Result<(), ConfigError> {
        let seed = args.seed.unwrap_or_else(rand::random);
        let mut config = match &args.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(difficulty) = args.difficulty {
            config.difficulty = difficulty;
        }

        let clock = ManualClock::new(0.0);
        let mut sim = Simulation::new(
            config,
            seed,
            Box::new(clock.clone()),
            Box::new(NullAudio),
        )?;

        let mut ticks = 0;
        while ticks < args.ticks && !sim.state().is_game_over() {
            ticks += 1;
            clock.advance(FRAME_MS);

            // Follow the ball with a capped step so the player can miss
            let state = sim.state();
            let paddle_center = state.player.center_y(&state.config);
            let error = state.ball.center().y - paddle_center;
            let target = paddle_center + error.clamp(-FOLLOW_STEP, FOLLOW_STEP);
            let input = TickInput {
                player_target: Some(target),
                ..Default::default()
            };

            for event in sim.step(&input) {
                match event {
                    GameEvent::Score { side, .. } => log::info!("tick {ticks}: {side:?} scores"),
                    GameEvent::PowerUpCollected { kind } => {
                        log::info!("tick {ticks}: {kind:?} collected")
                    }
                    GameEvent::GameOver { winner } => log::info!("tick {ticks}: {winner:?} wins"),
                    other => log::trace!("tick {ticks}: {other:?}"),
                }
            }
        }

        let state = sim.state();
        println!(
            "seed {} | {} ticks | player {} - {} opponent{}",
            seed,
            ticks,
            state.player_score,
            state.opponent_score,
            match state.winner {
                Some(winner) => format!(" | winner: {winner:?}"),
                None => String::new(),
            }
        );
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_args_parse() {
            let args = Args::try_parse_from([
                "rally-pong",
                "match.json",
                "--seed",
                "42",
                "--ticks",
                "500",
                "--difficulty",
                "hard",
            ])
            .unwrap();
            assert_eq!(args.config, Some(PathBuf::from("match.json")));
            assert_eq!(args.seed, Some(42));
            assert_eq!(args.ticks, 500);
            assert_eq!(args.difficulty, Some(Difficulty::Hard));
        }

        #[test]
        fn test_args_defaults() {
            let args = Args::try_parse_from(["rally-pong"]).unwrap();
            assert!(args.config.is_none());
            assert!(args.seed.is_none());
            assert_eq!(args.ticks, 100_000);
            assert!(args.difficulty.is_none());
        }

        #[test]
        fn test_args_reject_unknown_difficulty() {
            assert!(Args::try_parse_from(["rally-pong", "--difficulty", "insane"]).is_err());
        }

        #[test]
        fn test_run_plays_to_the_tick_limit() {
            let args = Args {
                config: None,
                seed: Some(7),
                ticks: 300,
                difficulty: Some(Difficulty::Easy),
            };
            assert!(run(args).is_ok());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use headless::Parser;

    let args = headless::Args::parse();
    env_logger::init();
    log::info!("Rally Pong (headless) starting...");

    if let Err(e) = headless::run(args) {
        log::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::start, this is just to satisfy the compiler
}
