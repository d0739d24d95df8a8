//! Play command - interactive console game against the move memory

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::{
    app::{App, SessionConfig, StoreFormat},
    cli::output::{plain_numbering, render_plain_grid, render_ruled_grid, ruled_numbering},
    controller::{ComputerTurn, GameController, Phase},
    error::MoveError,
    game::{CELLS, Cell, GameResult, RuleModule},
    variants::{Hexapawn, Placement, Step, TicTacToe, Variant},
};

#[derive(Parser, Debug)]
#[command(about = "Play a game against the engine")]
pub struct PlayArgs {
    /// Game to play
    #[arg(value_enum)]
    pub variant: Variant,

    /// Move memory store (defaults to the variant's memory file)
    #[arg(long, short = 'm')]
    pub memory: Option<PathBuf>,

    /// Encoding of the memory store
    #[arg(long, value_enum, default_value_t = StoreFormat::Flat)]
    pub format: StoreFormat,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Console presentation of a variant
pub trait ConsoleGame: RuleModule + Clone {
    const TITLE: &'static str;
    const PROMPT: &'static str;

    /// Diagram showing how cells are numbered
    fn numbering(&self) -> String;

    fn render(&self, cells: &[Cell; CELLS]) -> String;

    /// Read a move from a line of input; `None` if it is not a move at all.
    fn parse_input(&self, line: &str) -> Option<Self::Move>;

    /// Message shown when a move is rejected
    fn describe(&self, error: MoveError) -> &'static str;
}

/// All whole numbers in `line`, in order, ignoring any separators
fn numbers_in(line: &str) -> Option<Vec<usize>> {
    line.split(|c: char| !c.is_ascii_digit())
        .filter(|part| !part.is_empty())
        .map(|part| part.parse().ok())
        .collect()
}

impl ConsoleGame for Hexapawn {
    const TITLE: &'static str = "Hexapawn";
    const PROMPT: &'static str = "Your move (from to): ";

    fn numbering(&self) -> String {
        plain_numbering()
    }

    fn render(&self, cells: &[Cell; CELLS]) -> String {
        render_plain_grid(cells)
    }

    fn parse_input(&self, line: &str) -> Option<Step> {
        match numbers_in(line)?.as_slice() {
            &[from, to] => Some(Step::new(from, to)),
            _ => None,
        }
    }

    fn describe(&self, error: MoveError) -> &'static str {
        match error {
            MoveError::NoPieceAtOrigin => "You have no pawn there.",
            MoveError::IllegalTransition => "That pawn cannot move there.",
            MoveError::OutOfRange => "Cells are numbered 1 to 9.",
            MoveError::OutOfTurn => "It is not your turn.",
        }
    }
}

impl ConsoleGame for TicTacToe {
    const TITLE: &'static str = "Tic-tac-toe";
    const PROMPT: &'static str = "Your move: ";

    fn numbering(&self) -> String {
        ruled_numbering()
    }

    fn render(&self, cells: &[Cell; CELLS]) -> String {
        render_ruled_grid(cells)
    }

    fn parse_input(&self, line: &str) -> Option<Placement> {
        match numbers_in(line)?.as_slice() {
            &[cell] => Some(Placement(cell)),
            _ => None,
        }
    }

    fn describe(&self, error: MoveError) -> &'static str {
        match error {
            MoveError::IllegalTransition => "That cell is already taken.",
            MoveError::OutOfRange => "Cells are numbered 1 to 9.",
            MoveError::NoPieceAtOrigin => "That move is not allowed.",
            MoveError::OutOfTurn => "It is not your turn.",
        }
    }
}

/// Tally of one console session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub games: usize,
    pub player_wins: usize,
    pub computer_wins: usize,
    pub draws: usize,
    /// Positions left in memory when the session ended
    pub positions: usize,
}

impl SessionSummary {
    fn record(&mut self, result: GameResult) {
        self.games += 1;
        match result {
            GameResult::PlayerWin => self.player_wins += 1,
            GameResult::ComputerWin => self.computer_wins += 1,
            GameResult::Draw => self.draws += 1,
            GameResult::InProgress => {}
        }
    }
}

fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line).context("failed to read input")? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Drive a controller from a console until the player stops.
///
/// The memory is saved when the player declines another game. If input ends
/// in the middle of a game the session is abandoned unsaved.
pub fn run_session<R, I, O>(
    mut controller: GameController<R>,
    mut input: I,
    mut output: O,
) -> Result<SessionSummary>
where
    R: ConsoleGame,
    I: BufRead,
    O: Write,
{
    let mut summary = SessionSummary::default();
    let rules = controller.rules().clone();

    writeln!(output, "{}", R::TITLE)?;
    writeln!(output)?;
    writeln!(output, "Cells are numbered like this:")?;
    writeln!(output, "{}", rules.numbering())?;
    writeln!(output, "You are X, I am O. You move first.")?;
    writeln!(output)?;

    loop {
        writeln!(output, "{}", rules.render(&controller.board_snapshot()))?;
        writeln!(output)?;

        let result = loop {
            match controller.phase() {
                Phase::AwaitingPlayerMove => {
                    write!(output, "{}", R::PROMPT)?;
                    output.flush()?;
                    let Some(line) = read_line(&mut input)? else {
                        bail!("input closed during a game; memory not saved");
                    };
                    let Some(mv) = rules.parse_input(&line) else {
                        writeln!(output, "Please enter a valid move.")?;
                        continue;
                    };
                    if let Err(error) = controller.player_move(mv) {
                        writeln!(output, "{}", rules.describe(error))?;
                    }
                }
                Phase::AwaitingComputerMove => {
                    match controller.computer_move()? {
                        ComputerTurn::Played(mv) => writeln!(output, "I play {mv}")?,
                        ComputerTurn::Conceded => writeln!(output, "I resign.")?,
                    }
                    writeln!(output, "{}", rules.render(&controller.board_snapshot()))?;
                    writeln!(output)?;
                }
                Phase::GameOver(result) => break result,
            }
        };

        summary.record(result);
        match result {
            GameResult::PlayerWin => writeln!(output, "You win!")?,
            GameResult::ComputerWin => writeln!(output, "I win!")?,
            _ => writeln!(output, "Draw.")?,
        }
        writeln!(output)?;

        write!(output, "Play again (y/N)? ")?;
        output.flush()?;
        let again = read_line(&mut input)?;
        if !matches!(again.as_deref(), Some("y" | "Y")) {
            break;
        }
        controller.play_again()?;
        writeln!(output)?;
    }

    let memory = controller
        .end_session()
        .context("failed to save move memory")?;
    summary.positions = memory.len();
    Ok(summary)
}

/// Open a session for `rules` and run it on the given console.
pub fn play<R, I, O>(
    app: &App,
    rules: R,
    config: &SessionConfig,
    input: I,
    output: O,
) -> Result<SessionSummary>
where
    R: ConsoleGame,
    I: BufRead,
    O: Write,
{
    let controller = app.open_session(rules, config).with_context(|| {
        format!(
            "failed to load move memory from {} (create one with `rote seed`)",
            config.memory_path.display()
        )
    })?;
    run_session(controller, input, output)
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let app = App::new();
    let config = super::session_config(args.variant, args.memory, args.format, args.seed);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = match args.variant {
        Variant::Hexapawn => play(&app, Hexapawn, &config, stdin.lock(), stdout.lock())?,
        Variant::TicTacToe => play(&app, TicTacToe, &config, stdin.lock(), stdout.lock())?,
    };

    log::info!(
        "session over: {} games, {} won by player, {} by computer, {} drawn; {} positions remain",
        summary.games,
        summary.player_wins,
        summary.computer_wins,
        summary.draws,
        summary.positions
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hexapawn_input() {
        assert_eq!(Hexapawn.parse_input("7 4"), Some(Step::new(7, 4)));
        assert_eq!(Hexapawn.parse_input("8-4"), Some(Step::new(8, 4)));
        assert_eq!(Hexapawn.parse_input(" 9,6 "), Some(Step::new(9, 6)));
        assert_eq!(Hexapawn.parse_input("7"), None);
        assert_eq!(Hexapawn.parse_input("a b"), None);
    }

    #[test]
    fn test_parse_tictactoe_input() {
        assert_eq!(TicTacToe.parse_input("5"), Some(Placement(5)));
        assert_eq!(TicTacToe.parse_input("12"), Some(Placement(12)));
        assert_eq!(TicTacToe.parse_input(""), None);
        assert_eq!(TicTacToe.parse_input("1 2"), None);
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            TicTacToe.describe(MoveError::OutOfRange),
            "Cells are numbered 1 to 9."
        );
        assert_eq!(
            TicTacToe.describe(MoveError::IllegalTransition),
            "That cell is already taken."
        );
        assert_eq!(
            Hexapawn.describe(MoveError::NoPieceAtOrigin),
            "You have no pawn there."
        );
    }
}
