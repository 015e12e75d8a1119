use std::io::{self, BufRead};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use sliptile::{
    format_elapsed, load_catalog_from_json, Catalog, Dir, Event, Input, Phase, Session,
    SessionConfig, SHUFFLE_ITERATIONS,
};

#[derive(Debug, Parser)]
#[command(name = "play", about = "Sliding-tile puzzle terminal front end")]
struct Args {
    /// Grid edge length (3 = the classic 8-puzzle layout)
    #[arg(long, default_value_t = 3)]
    size: u8,

    /// Base seed for deterministic scrambles
    #[arg(long, default_value_t = 0x00C0_FFEEu64)]
    seed: u64,

    /// Random-walk length per scramble
    #[arg(long, default_value_t = SHUFFLE_ITERATIONS)]
    iterations: usize,

    /// Puzzle catalog JSON path (defaults to the built-in catalog)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Emit line-delimited JSON events/snapshots instead of board printouts
    #[arg(long)]
    json: bool,
}

enum Command {
    Input(Input),
    State,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let head = parts.next()?;
    let input = match head {
        "w" => Input::Nudge(Dir::Up),
        "a" => Input::Nudge(Dir::Left),
        "s" => Input::Nudge(Dir::Down),
        "d" => Input::Nudge(Dir::Right),
        "m" => {
            // Slide by displayed (1-based) tile number.
            let n: u8 = parts.next()?.parse().ok()?;
            if n == 0 {
                return None;
            }
            Input::Slide(n - 1)
        }
        "h" | "hint" => Input::Hint,
        "shuffle" => Input::Start,
        "next" => Input::NextLevel,
        "grid" => {
            let n: u8 = parts.next()?.parse().ok()?;
            Input::ChangeDifficulty(n)
        }
        "t" | "tick" => Input::Tick,
        "q" | "quit" => return Some(Command::Quit),
        "state" => return Some(Command::State),
        _ => return None,
    };
    Some(Command::Input(input))
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn describe(event: &Event) -> String {
    match event {
        Event::Started { level, grid_size } => {
            format!("level {level} started on a {grid_size}x{grid_size} grid")
        }
        Event::MoveApplied { tile, .. } => format!("moved tile {}", tile + 1),
        Event::MoveRejected { tile } => format!("tile {} cannot move", tile + 1),
        Event::HintShown { tile } => format!("hint: tile {} is out of place", tile + 1),
        Event::HintCleared => "hint cleared".to_string(),
        Event::Solved { summary } => format!(
            "solved! level {} in {} moves, time {}",
            summary.level,
            summary.moves,
            format_elapsed(summary.elapsed)
        ),
        Event::SolvedRevealed => "showing the completed picture".to_string(),
    }
}

fn report(session: &Session, events: &[Event], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        for event in events {
            println!("{}", serde_json::to_string(event)?);
        }
        return Ok(());
    }
    for event in events {
        println!("[play] {}", describe(event));
    }
    let redraw = events.iter().any(|e| {
        matches!(
            e,
            Event::Started { .. } | Event::MoveApplied { .. } | Event::Solved { .. }
        )
    });
    if redraw {
        print!("{}", session.board());
    }
    Ok(())
}

fn print_state(session: &Session, now: u64, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string(&session.snapshot(now))?);
        return Ok(());
    }
    print!("{}", session.board());
    println!(
        "[play] level {} | moves {} | time {} | {}",
        session.level(),
        session.moves(),
        format_elapsed(session.elapsed(now)),
        session.current_entry().term
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let catalog = match &args.catalog {
        Some(path) => load_catalog_from_json(path).map_err(|e| format!("Catalog load error: {e}"))?,
        None => Catalog::builtin(),
    };
    let config = SessionConfig {
        grid_size: args.size,
        seed: args.seed,
        shuffle_iterations: args.iterations,
        catalog,
    };
    let mut session = Session::new(config)?;

    if !args.json {
        println!(
            "[play] commands: w/a/s/d slide, m <tile>, h hint, shuffle, next, grid <n>, state, q"
        );
    }
    let events = session.handle(now_secs(), Input::Start);
    report(&session, &events, args.json)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let now = now_secs();
        match parse_command(trimmed) {
            Some(Command::Quit) => break,
            Some(Command::State) => print_state(&session, now, args.json)?,
            Some(Command::Input(input)) => {
                let events = session.handle(now, input);
                report(&session, &events, args.json)?;
                // Solved boards sit behind a short reveal delay; ticks are
                // what surface it, so nudge one along after each command.
                let tick_events = session.handle(now_secs(), Input::Tick);
                report(&session, &tick_events, args.json)?;
            }
            None => {
                if !args.json {
                    println!("[play] unknown command: {trimmed}");
                }
            }
        }
    }

    if !args.json {
        let now = now_secs();
        let solved = matches!(session.phase(), Phase::Solved);
        println!(
            "[play] done. level {} | moves {} | time {}{}",
            session.level(),
            session.moves(),
            format_elapsed(session.elapsed(now)),
            if solved { " | solved" } else { "" }
        );
    }
    Ok(())
}
