use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use log::{debug, info, warn};
use maze_solver::{util, Heuristic};

fn output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    input.with_file_name(format!("{}_solved.png", stem))
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let input = PathBuf::from(
        args.next()
            .context("usage: maze-solver <maze.png> [euclidean|manhattan|zero] [output.png]")?,
    );
    let heuristic: Heuristic = match args.next() {
        Some(name) => name.parse()?,
        None => Heuristic::default(),
    };
    let output = args.next().map(PathBuf::from);

    let img = image::open(&input).with_context(|| format!("failed to open {:?}", input))?;
    let maze = util::parse_img(&img)?;
    info!(
        "parsed {}x{} maze, start={} end={}",
        maze.width(),
        maze.height(),
        maze.start(),
        maze.end()
    );
    debug!("maze layout:\n{}", maze);

    let started = Instant::now();
    let path = maze.solve(heuristic);
    let elapsed = started.elapsed();

    if path.is_empty() {
        warn!("maze has no solution ({:?} with {})", elapsed, heuristic);
        return Ok(());
    }
    info!(
        "found path of {} cells in {:?} with {}",
        path.len(),
        elapsed,
        heuristic
    );

    let mut solved = img.to_rgba8();
    util::draw_path(&mut solved, &path);

    let output = output.unwrap_or_else(|| output_path(&input));
    solved
        .save(&output)
        .with_context(|| format!("failed to write {:?}", output))?;
    info!("wrote {:?}", output);

    Ok(())
}
