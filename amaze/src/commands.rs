use std::io::{IsTerminal, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use amaze_core::{Grid, GridError, load_maze};
use amaze_gen::MazeGen;
use amaze_paths::{CancelToken, SearchEvent, SearchResult, Solver, SolverConfig};
use anyhow::{Context, Result, anyhow};
use rand::Rng;

use crate::cli::{BenchArgs, ColorChoice, GenerateArgs, MazeShape, OutputFormat, SolveArgs};
use crate::render::render;

pub fn solve(args: SolveArgs) -> Result<()> {
    let grid = load_maze(&args.file)
        .with_context(|| format!("failed to load maze {}", args.file.display()))?;
    tracing::info!(
        width = grid.width(),
        height = grid.height(),
        start = %grid.start(),
        goal = %grid.goal(),
        "loaded maze"
    );

    let config = SolverConfig {
        record_trace: true,
        max_expansions: args.max_expansions,
    };
    let cancel = CancelToken::new();
    let (tx, rx) = mpsc::channel();

    let worker = {
        let grid = grid.clone();
        let cancel = cancel.clone();
        thread::Builder::new()
            .name("amaze-search".into())
            .spawn(move || {
                let mut tx = tx;
                Solver::with_config(config).solve_with(&grid, &mut tx, Some(&cancel))
            })
            .context("failed to spawn search thread")?
    };

    let deadline = args
        .timeout_ms
        .map(|ms| Instant::now() + Duration::from_millis(ms));
    drain_events(&rx, deadline, &cancel, args.trace);

    let result = worker
        .join()
        .map_err(|_| anyhow!("search thread panicked"))?;
    report(&grid, &result, &args)
}

/// Consume search events until the worker finishes. Past `deadline` the
/// search is cancelled and the remaining events are still drained.
fn drain_events(
    rx: &Receiver<SearchEvent>,
    deadline: Option<Instant>,
    cancel: &CancelToken,
    trace: bool,
) {
    loop {
        let event = match deadline {
            Some(at) if !cancel.is_cancelled() => {
                match rx.recv_timeout(at.saturating_duration_since(Instant::now())) {
                    Ok(ev) => ev,
                    Err(RecvTimeoutError::Timeout) => {
                        tracing::warn!("search timed out, cancelling");
                        cancel.cancel();
                        continue;
                    }
                    Err(RecvTimeoutError::Disconnected) => return,
                }
            }
            _ => match rx.recv() {
                Ok(ev) => ev,
                Err(_) => return,
            },
        };
        match event {
            SearchEvent::Explored(step) => {
                if trace {
                    eprintln!(
                        "{:>6} {} g={} h={} f={}",
                        step.index,
                        step.pos,
                        step.g,
                        step.h,
                        step.g + step.h
                    );
                }
            }
            SearchEvent::Finished(status) => {
                tracing::debug!(%status, "search finished");
                return;
            }
        }
    }
}

fn report(grid: &Grid, result: &SearchResult, args: &SolveArgs) -> Result<()> {
    let mut out = std::io::stdout().lock();
    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, result)
                .context("failed to serialize result")?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            let color = match args.color {
                ColorChoice::Always => true,
                ColorChoice::Never => false,
                ColorChoice::Auto => std::io::stdout().is_terminal(),
            };
            write!(out, "{}", render(grid, &result.explored, &result.path, color))?;
            writeln!(out)?;
            writeln!(out, "status:    {}", result.status)?;
            match result.path_len() {
                Some(steps) => writeln!(out, "path:      {steps} steps")?,
                None => writeln!(out, "path:      none")?,
            }
            writeln!(out, "explored:  {}", result.expansions)?;
            writeln!(
                out,
                "frontier:  {} pushed, {} stale, peak {}",
                result.stats.generated, result.stats.stale, result.stats.peak_frontier
            )?;
            writeln!(out, "elapsed:   {:?}", result.elapsed)?;
        }
    }
    Ok(())
}

pub fn generate(args: GenerateArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    tracing::info!(seed, "generating maze");
    let grid = build_maze(&mut MazeGen::seeded(seed), &args.shape)?;
    print!("{}", grid.to_text());
    Ok(())
}

pub fn bench(args: BenchArgs) -> Result<()> {
    let mut solver = Solver::with_config(SolverConfig {
        record_trace: false,
        max_expansions: None,
    });
    let mut total = Duration::ZERO;
    let mut worst = Duration::ZERO;
    let mut expansions = 0usize;
    let mut solved = 0usize;

    for i in 0..args.runs {
        let seed = args.seed.wrapping_add(i as u64);
        let grid = build_maze(&mut MazeGen::seeded(seed), &args.shape)?;
        let result = solver.solve(&grid);
        tracing::debug!(
            seed,
            status = %result.status,
            expansions = result.expansions,
            elapsed = ?result.elapsed,
            "bench run"
        );
        total += result.elapsed;
        worst = worst.max(result.elapsed);
        expansions += result.expansions;
        if result.solvable() {
            solved += 1;
        }
    }

    let runs = args.runs.max(1) as u32;
    tracing::info!(runs = args.runs, solved, "bench complete");
    println!(
        "{} mazes {}x{}: {} solved, mean {:?}, worst {:?}, {} cells finalized per solve",
        args.runs,
        args.shape.width,
        args.shape.height,
        solved,
        total / runs,
        worst,
        expansions / runs as usize,
    );
    Ok(())
}

fn build_maze<R: Rng>(mg: &mut MazeGen<R>, shape: &MazeShape) -> Result<Grid, GridError> {
    let grid = match shape.scatter {
        Some(pct) => mg.scatter(shape.width, shape.height, pct)?,
        None => mg.carve(shape.width, shape.height)?,
    };
    if shape.braid > 0.0 {
        mg.braid(&grid, shape.braid)
    } else {
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amaze_core::parse_maze;
    use amaze_paths::{ExploreStep, SearchObserver, SearchStatus};

    #[test]
    fn drain_stops_at_finished() {
        let (mut tx, rx) = mpsc::channel();
        tx.explored(ExploreStep {
            index: 0,
            pos: amaze_core::Pos::ZERO,
            g: 0,
            h: 2,
        });
        tx.finished(SearchStatus::Solved);
        let cancel = CancelToken::new();
        drain_events(&rx, None, &cancel, false);
        assert!(!cancel.is_cancelled());
        // tx is still alive, so returning proves Finished ended the loop
        drop(tx);
    }

    #[test]
    fn drain_cancels_past_deadline() {
        let (tx, rx) = mpsc::channel::<SearchEvent>();
        let cancel = CancelToken::new();
        let watcher = cancel.clone();
        let worker = thread::spawn(move || {
            while !watcher.is_cancelled() {
                thread::sleep(Duration::from_millis(1));
            }
            let mut tx = tx;
            tx.finished(SearchStatus::Cancelled(amaze_paths::CancelReason::Requested));
        });
        drain_events(&rx, Some(Instant::now()), &cancel, false);
        assert!(cancel.is_cancelled());
        worker.join().unwrap();
    }

    #[test]
    fn build_maze_shapes() {
        let carved = MazeShape {
            width: 11,
            height: 9,
            braid: 0.0,
            scatter: None,
        };
        let grid = build_maze(&mut MazeGen::seeded(1), &carved).unwrap();
        assert_eq!((grid.width(), grid.height()), (11, 9));
        assert!(amaze_paths::solve(&grid).solvable());

        let open = MazeShape {
            scatter: Some(0.0),
            ..carved
        };
        let grid = build_maze(&mut MazeGen::seeded(1), &open).unwrap();
        assert_eq!(grid.open_count(), 99);
    }

    #[test]
    fn text_report_renders_result() {
        let grid = parse_maze("o *\n").unwrap();
        let result = amaze_paths::solve(&grid);
        let rendered = render(&grid, &result.explored, &result.path, false);
        assert_eq!(rendered, "o%*\n");
    }
}
