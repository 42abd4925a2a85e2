//! Wrap Snake entry point
//!
//! Line-driven terminal front end: each input line is a key (WASD / hjkl /
//! `n` for a new game), an empty line is one timer pulse, `q` quits.

use std::io::{self, BufRead, Write};
use std::path::Path;

use wrap_snake::platform::InputCommand;
use wrap_snake::renderer::TextRenderer;
use wrap_snake::settings::SETTINGS_FILE;
use wrap_snake::{GameEngine, GameEvent, HighScores, Settings};

fn main() {
    env_logger::init();
    log::info!("Wrap Snake starting...");

    if let Err(e) = run() {
        log::error!("Terminal I/O failed: {e}");
        std::process::exit(1);
    }
}

fn run() -> io::Result<()> {
    let settings = Settings::load_or_create(Path::new(SETTINGS_FILE));
    let highscores = HighScores::load(&settings.highscore_path);

    let mut engine = GameEngine::new(&settings).with_highscores(highscores);
    engine.set_renderer(Box::new(TextRenderer::new(io::stdout())));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout();

    writeln!(out, "Wrap Snake")?;
    writeln!(out, "Steer with WASD or hjkl, Enter advances the snake.")?;
    writeln!(out, "Type n for a new game, scores for the list, q to quit.")?;
    print_highscores(&mut out, engine.highscores())?;

    while let Some(line) = lines.next() {
        let line = line?;
        match line.trim() {
            "q" | "quit" => break,
            "scores" => print_highscores(&mut out, engine.highscores())?,
            "" => {
                engine.tick();
            }
            other => match InputCommand::from_line(other) {
                Some(command) => engine.handle_command(command),
                None => writeln!(out, "Unknown command: {other}")?,
            },
        }

        for event in engine.drain_events() {
            let GameEvent::GameOver {
                score,
                new_highscore,
            } = event
            else {
                continue;
            };

            writeln!(out, "Ooops, you died! Final score: {score}")?;
            if new_highscore {
                write!(out, "New highscore! Enter your name: ")?;
                out.flush()?;
                let name = match lines.next() {
                    Some(name) => name?,
                    None => String::new(),
                };
                let name = name.trim();
                let name = if name.is_empty() { "Anonymous" } else { name };

                if let Some(rank) = engine.record_highscore(name) {
                    writeln!(out, "{name} placed #{rank}")?;
                    if let Err(e) = engine.highscores().save(&settings.highscore_path) {
                        log::error!("Could not save high scores: {e}");
                    }
                }
                print_highscores(&mut out, engine.highscores())?;
            }
            writeln!(out, "Type n to start a new game.")?;
        }
    }

    Ok(())
}

fn print_highscores(out: &mut impl Write, highscores: &HighScores) -> io::Result<()> {
    writeln!(out, "-- Highscores --")?;
    if highscores.is_empty() {
        writeln!(out, "(none yet)")?;
    }
    for (i, entry) in highscores.entries().iter().enumerate() {
        writeln!(out, "{:>2}. {:<16} {:>5}", i + 1, entry.player_name, entry.score)?;
    }
    Ok(())
}
