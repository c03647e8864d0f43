//! Mini Soccer entry point
//!
//! The native build runs the game headless: the autopilot plays, events are
//! logged, and the high score is kept in the data directory. The browser
//! build is driven from JavaScript through `platform::web`.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::io;
    use std::path::PathBuf;

    use clap::Parser;

    use mini_soccer::persistence::FileStore;
    use mini_soccer::platform::FramePacer;
    use mini_soccer::sim::{GameEvent, TickInput};
    use mini_soccer::ui::prompt_level;
    use mini_soccer::{Game, Screen};

    #[derive(Parser)]
    #[command(name = "mini-soccer")]
    #[command(about = "Headless Mini Soccer: the autopilot dribbles, you watch the log")]
    struct Args {
        /// Starting level (asked for on stdin when omitted)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=5))]
        level: Option<u32>,

        /// Frame limit per run
        #[arg(long, default_value_t = 60 * 120)]
        frames: u64,

        /// Number of runs to play back to back
        #[arg(long, default_value_t = 1)]
        runs: u32,

        /// Hold 60 fps and honour the tackle / level-up pauses
        #[arg(long)]
        realtime: bool,

        /// Where highscore.json and settings.json live
        #[arg(long, default_value = ".")]
        data_dir: PathBuf,
    }

    pub fn run() {
        env_logger::init();
        let args = Args::parse();
        log::info!("Mini Soccer (native) starting...");

        let level = match args.level {
            Some(level) => level,
            None => {
                let stdin = io::stdin();
                match prompt_level(&mut stdin.lock(), &mut io::stdout()) {
                    Ok(Some(level)) => level,
                    Ok(None) => {
                        log::info!("No level entered, exiting");
                        return;
                    }
                    Err(e) => {
                        log::error!("Could not read level: {e}");
                        return;
                    }
                }
            }
        };

        let mut game = Game::new(FileStore::new(&args.data_dir));
        let mut pacer = FramePacer::new();

        for run in 1..=args.runs {
            game.start_run(level);
            let mut frames = 0;

            while game.screen() == Screen::Playing && frames < args.frames {
                if args.realtime {
                    pacer.wait(game.target_fps());
                }

                for event in game.frame(&TickInput::idle()) {
                    if let GameEvent::LevelAdvanced { level } = event {
                        println!("run {run}: reached level {level}");
                    }
                }
                frames += 1;

                if let Some(pause) = game.take_stall() {
                    if args.realtime {
                        pacer.stall(pause);
                    }
                }
                // Cues have nowhere to go without an audio device
                game.take_cues();
            }

            let session = game.session();
            if game.screen() == Screen::Playing {
                log::info!("Run {run} hit the frame limit ({frames} frames)");
            }
            println!(
                "run {run}: level {} score {} lives {} best {}",
                session.level, session.score, session.lives, session.high_score
            );
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::WebGame, this is just to satisfy the compiler
}
