//! label-grid - generate a PDF page with an evenly spaced grid, for printing labels

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use label_grid::{compute_grid, render_grid, DocumentCanvas, Info, PdfCanvas};
use std::process;

use cli::{Cli, GridJob};

fn main() {
    let cli = Cli::parse();
    cli.init_logging();

    let job = match cli.validate() {
        Ok(job) => job,
        Err(errors) => {
            for error in errors.iter() {
                eprintln!("{error}");
            }
            process::exit(1);
        }
    };

    if let Err(e) = run(&job) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(job: &GridJob) -> Result<()> {
    let positions = compute_grid(&job.page, &job.grid).context("Invalid grid")?;
    tracing::info!(
        paper = %job.paper,
        rows = job.grid.rows,
        columns = job.grid.columns,
        "drawing grid"
    );

    let mut canvas = PdfCanvas::new(job.paper.dimensions(), job.page.padding);
    let mut info = Info::new();
    info.title(job.title()).author(env!("CARGO_PKG_NAME"));
    canvas.set_info(info);

    render_grid(&mut canvas, &positions, job.page.stroke_intensity);

    canvas
        .persist(&job.output)
        .with_context(|| format!("Failed to write {}", job.output.display()))
}
