use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::info;

use rust_2048::{GameRng, Grid, GridConfig};

/// How the grid is printed after each input line.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Four aligned rows, empty cells as `.`
    Text,
    /// One JSON array of 16 values per line
    Json,
}

/// Play 2048 on the console: w/a/s/d (or z/q/s/d) then Enter.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Chance (0-100) that an empty cell gets a start tile; moves use half
    #[arg(long, default_value_t = rust_2048::core::config::DEFAULT_SPAWN_PERCENTAGE,
          value_parser = clap::value_parser!(u32).range(0..=100))]
    spawn_percentage: u32,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Fixed RNG seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,
}

fn render(out: &mut impl Write, grid: &Grid, format: Format) -> Result<()> {
    match format {
        Format::Text => writeln!(out, "{}", grid.snapshot())?,
        Format::Json => {
            serde_json::to_writer(&mut *out, grid.snapshot().values())
                .context("failed to encode grid")?;
            writeln!(out)?;
        }
    }
    out.flush().context("failed to flush output")
}

/// Print the grid, then apply each input line's symbols and print again,
/// until the input ends.
fn run(input: impl BufRead, out: &mut impl Write, grid: &mut Grid, format: Format) -> Result<()> {
    render(out, grid, format)?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        for symbol in line.chars() {
            grid.make_move_symbol(symbol);
        }
        render(out, grid, format)?;
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let rng = args.seed.map_or_else(GameRng::from_time, GameRng::new);
    info!("starting with seed {}", rng.seed());

    let config = GridConfig::new().with_spawn_percentage(args.spawn_percentage);
    let mut grid = Grid::with_config(config, rng);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(io::stdin().lock(), &mut out, &mut grid, args.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_2048::{Position, CELL_COUNT};

    fn quiet_grid() -> Grid {
        let mut values = [0; CELL_COUNT];
        values[3] = 2; // rank 4
        values[6] = 4; // rank 7
        Grid::from_values(values, GridConfig::new().with_spawn_percentage(0), GameRng::new(42))
    }

    fn run_to_string(input: &str, grid: &mut Grid, format: Format) -> String {
        let mut out = Vec::new();
        run(input.as_bytes(), &mut out, grid, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_json_prints_once_per_line_plus_initial() {
        let mut grid = quiet_grid();
        let output = run_to_string("a\nxq\n", &mut grid, Format::Json);

        let frames: Vec<[u32; CELL_COUNT]> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0][3], 2);
        assert_eq!(frames[0][6], 4);
        // After "a": both tiles slid to column 1
        assert_eq!(frames[1][0], 2);
        assert_eq!(frames[1][4], 4);
        assert_eq!(frames[1].iter().sum::<u32>(), 6);
        // "x" ignored, "q" is another left move with nothing left to slide
        assert_eq!(frames[2], frames[1]);
        assert_eq!(frames[2], *grid.snapshot().values());
    }

    #[test]
    fn test_unknown_symbols_only_reprint() {
        let mut grid = quiet_grid();
        let before = grid.snapshot();

        let output = run_to_string("x?!\n\n", &mut grid, Format::Json);

        assert_eq!(output.lines().count(), 3);
        assert_eq!(grid.snapshot(), before);
    }

    #[test]
    fn test_empty_input_prints_initial_grid() {
        let mut grid = quiet_grid();
        let output = run_to_string("", &mut grid, Format::Text);

        assert_eq!(output, format!("{}\n", grid.snapshot()));
    }

    #[test]
    fn test_text_format_renders_rows() {
        let mut grid = quiet_grid();
        let output = run_to_string("d\n", &mut grid, Format::Text);

        // Two frames of four rows, each followed by a blank line
        assert_eq!(output.lines().count(), 10);
        assert_eq!(grid[Position::from_rank(4)].value, 2);
        assert_eq!(grid[Position::from_rank(8)].value, 4);
        assert!(output.ends_with(&format!("{}\n", grid.snapshot())));
    }
}
