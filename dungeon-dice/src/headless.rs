//! Headless mode for Dungeon Dice.
//!
//! A line-oriented interface for scripts and tests: each input line is a
//! command, each response is one or more plain-text lines.

use std::io::{self, BufRead, Write};

use dice_core::{find, Die, FaceSource};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::Board;
use crate::config::Config;

/// Outcome of one headless command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Lines(Vec<String>),
    Quit,
}

impl Reply {
    fn line(text: impl Into<String>) -> Self {
        Reply::Lines(vec![text.into()])
    }
}

/// Run headless mode on stdin/stdout.
pub fn run_headless(config: &Config) -> io::Result<()> {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut board = Board::new(config.metrics, config.width, rng);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut board, stdin.lock(), stdout.lock())
}

/// Drive a board from `input`, writing replies to `output`.
pub fn run_session<S, R, W>(board: &mut Board<S>, input: R, mut output: W) -> io::Result<()>
where
    S: FaceSource,
    R: BufRead,
    W: Write,
{
    writeln!(output, "=== Dungeon Dice Headless Mode ===")?;
    for line in describe_layout(board) {
        writeln!(output, "{line}")?;
    }
    writeln!(output, "Type 'help' for commands.")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match execute(board, line) {
            Reply::Quit => {
                writeln!(output, "Goodbye!")?;
                break;
            }
            Reply::Lines(lines) => {
                for reply in lines {
                    writeln!(output, "{reply}")?;
                }
            }
        }
        output.flush()?;
    }

    Ok(())
}

/// Execute one command against the board.
pub fn execute<S: FaceSource>(board: &mut Board<S>, line: &str) -> Reply {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        ["quit"] | ["exit"] => Reply::Quit,
        ["help"] => Reply::Lines(help_lines()),
        ["dice"] => Reply::line(
            board
                .dice()
                .iter()
                .map(Die::label)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        ["layout"] => Reply::Lines(describe_layout(board)),
        ["width", value] => match value.parse::<f64>() {
            Ok(width) if width.is_finite() => {
                board.set_width(width);
                Reply::Lines(describe_layout(board))
            }
            _ => Reply::line(format!("[ERROR] Invalid width: {value}")),
        },
        ["width"] => Reply::line("[ERROR] Usage: width <w>"),
        ["roll"] => Reply::line("[ERROR] Usage: roll <faces>"),
        ["roll", notation] | [notation] => roll(board, notation),
        _ => Reply::line(format!("[ERROR] Unknown command: {line}")),
    }
}

fn roll<S: FaceSource>(board: &mut Board<S>, notation: &str) -> Reply {
    let die = notation
        .parse::<Die>()
        .and_then(|die| find(die.faces()));
    match die {
        Ok(die) => Reply::line(board.roll(die).message()),
        Err(e) => Reply::line(format!("[ERROR] {e}")),
    }
}

fn describe_layout<S: FaceSource>(board: &Board<S>) -> Vec<String> {
    let plan = board.plan();
    let (_, trailing) = board.split();
    let labels = |dice: &[Die]| {
        dice.iter()
            .map(Die::label)
            .collect::<Vec<_>>()
            .join(" ")
    };

    let mut lines = vec![format!(
        "[LAYOUT] width {}: {} per row, {} in trailing row",
        board.width(),
        plan.items_per_row,
        plan.overflow_count
    )];
    for row in plan.grid_rows(board.dice()) {
        lines.push(format!("  grid:     {}", labels(row)));
    }
    if !trailing.is_empty() {
        lines.push(format!("  trailing: {}", labels(trailing)));
    }
    lines
}

fn help_lines() -> Vec<String> {
    [
        "Commands:",
        "  <faces> | roll <faces>  - Roll a die (4, 6, 8, 10, 12, 20, 100; 'd20' works too)",
        "  width <w>               - Set the available width and re-plan the grid",
        "  layout                  - Show the current grid plan",
        "  dice                    - List the dice",
        "  help                    - Show this help",
        "  quit                    - Exit",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
