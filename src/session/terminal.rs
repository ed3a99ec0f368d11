use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::session::console::Console;
use crate::session::constants::{APPROXIMATE_LABEL, EXACT_LABEL};
use crate::solver::Solution;
use crate::tiles::Draw;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

const TITLE: [&str; 3] = [
    "  +-------------------------+",
    "  |  Le Compte est Bon !    |",
    "  +-------------------------+",
];

const HELP: [&str; 14] = [
    "",
    "+----------------+",
    "| Compte est Bon |",
    "+----------------+",
    "Reach a target number using a set of randomly drawn numbers",
    "- 6 random numbers among: 1 to 10, 25, 50, 75, 100",
    "- the 4 arithmetical operations: +, -, x, /",
    "- every intermediate result must be a positive integer",
    "",
    "Syntax:",
    "-------",
    "compte-est-bon",
    "- plays a game, no options needed",
    "",
];

/// Console writing boxed tiles to `output` and reading Enter presses from `input`
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn write_boxes(&mut self, values: &[u32]) -> io::Result<()> {
        let border = vec!["+---+"; values.len()].join(" ");
        let cells: Vec<String> = values.iter().map(|v| format!("|{:3}|", v)).collect();
        writeln!(self.output, "  {}", border)?;
        writeln!(self.output, "  {}", cells.join(" "))?;
        writeln!(self.output, "  {}", border)
    }
}

impl TerminalConsole<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn clear(&mut self) -> io::Result<()> {
        write!(self.output, "{}", CLEAR_SCREEN)?;
        self.output.flush()
    }

    fn show_title(&mut self) -> io::Result<()> {
        for line in TITLE {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    fn show_draw(&mut self, draw: &Draw) -> io::Result<()> {
        self.write_boxes(draw.plates())?;
        self.write_boxes(&[draw.target()])?;
        self.output.flush()
    }

    fn countdown(&mut self, seconds: u64, width: usize) -> io::Result<()> {
        if width == 0 {
            thread::sleep(Duration::from_secs(seconds));
            return Ok(());
        }
        let steps = u32::try_from(width).unwrap_or(u32::MAX);
        let tick = Duration::from_secs(seconds) / steps;

        write!(self.output, "  ")?;
        for _ in 0..width {
            thread::sleep(tick);
            write!(self.output, "#")?;
            self.output.flush()?;
        }
        writeln!(self.output)
    }

    fn prompt(&mut self, message: &str) -> io::Result<bool> {
        writeln!(self.output, "{} (press Enter)", message)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        Ok(read > 0)
    }

    fn show_solution(&mut self, solution: &Solution) -> io::Result<()> {
        let state = if solution.is_exact() {
            EXACT_LABEL
        } else {
            APPROXIMATE_LABEL
        };
        writeln!(self.output, "Solution [{}]", state)?;
        writeln!(self.output)?;
        writeln!(self.output, "{}", solution.best())?;
        writeln!(self.output)?;
        self.output.flush()
    }

    fn show_help(&mut self) -> io::Result<()> {
        for line in HELP {
            writeln!(self.output, "{}", line)?;
        }
        self.output.flush()
    }

    fn show_error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "Error: {}", message)
    }
}
