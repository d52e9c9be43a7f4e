//! Twenty48 entry point
//!
//! Line-oriented terminal shell: one command per line, the board is redrawn
//! after every state update.

use std::io::{self, BufRead, Write};
use std::path::Path;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use twenty48::settings::SETTINGS_FILE;
use twenty48::{GameSession, JsonFileStore, ScoreStore, Settings, ui};

/// Shell command parsed from one input line
enum Command {
    Key(String),
    Reset,
    Quit,
}

fn parse_command(line: &str) -> Command {
    match line.trim().to_lowercase().as_str() {
        "q" | "quit" | "exit" => Command::Quit,
        "r" | "reset" | "new" => Command::Reset,
        other => Command::Key(other.to_string()),
    }
}

fn draw<S, R>(session: &GameSession<S, R>, color: bool) {
    print!("\n{}", ui::render(session, color));
    print!("> ");
    let _ = io::stdout().flush();
}

/// Ask the play-again question until the answer is yes or no
fn ask_play_again(lines: &mut impl Iterator<Item = io::Result<String>>) -> bool {
    loop {
        let _ = io::stdout().flush();
        match lines.next() {
            Some(Ok(answer)) => match answer.trim().to_lowercase().as_str() {
                "y" | "yes" => return true,
                "n" | "no" | "q" => return false,
                _ => print!("Please answer y or n: "),
            },
            _ => return false,
        }
    }
}

fn run<S: ScoreStore>(mut session: GameSession<S>, color: bool) {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    draw(&session, color);
    while let Some(Ok(line)) = lines.next() {
        match parse_command(&line) {
            Command::Quit => break,
            Command::Reset => {
                session.reset();
            }
            Command::Key(key) => {
                let Some(update) = session.handle_key(&key) else {
                    println!("Unknown command {:?} (w/a/s/d, r to restart, q to quit)", key);
                    draw(&session, color);
                    continue;
                };
                if update.won {
                    println!("{}", ui::win_message());
                }
                if update.terminal {
                    draw(&session, color);
                    println!();
                    print!("{}", ui::game_over_message(session.score()));
                    print!(" ");
                    if !ask_play_again(&mut lines) {
                        break;
                    }
                    session.reset();
                }
            }
        }
        draw(&session, color);
    }

    log::info!(
        "Exiting with score {} (best {})",
        session.score(),
        session.high_score()
    );
}

fn main() {
    env_logger::init();
    log::info!("Twenty48 starting...");

    let settings_path = Path::new(SETTINGS_FILE);
    let settings = Settings::load(settings_path);
    if !settings_path.exists() {
        // Leave an editable copy of the defaults behind
        settings.save(settings_path);
    }
    let store = JsonFileStore::new(&settings.high_score_path);
    let rng = match settings.seed {
        Some(seed) => Pcg32::seed_from_u64(seed),
        None => Pcg32::from_rng(&mut rand::rng()),
    };

    run(GameSession::new(store, rng), settings.color);
}
