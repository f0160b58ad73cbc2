//! Command-line argument parsing and validation for label-grid

use clap::{ArgAction, Parser};
use label_grid::pagesize::PaperSize;
use label_grid::{to_native, Cm, GeometryError, GridSpec, PageSpec, Pt, Unit};
use std::path::PathBuf;
use thiserror::Error;

/// Generate a PDF with a grid on a single page, for printing labels
#[derive(Parser, Debug)]
#[command(name = "label-grid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Generated PDF file name
    #[arg(value_name = "PDF_FILE")]
    pub pdf_file: PathBuf,

    /// Number of desired rows per page
    #[arg(long, default_value_t = 8, allow_negative_numbers = true)]
    pub rows: i64,

    /// Number of desired columns per page
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    pub columns: i64,

    /// Stroke gray (0=black, 100=white)
    #[arg(long, value_name = "PERCENT", default_value_t = 50, allow_negative_numbers = true)]
    pub strokegray: i64,

    /// Overwrite existing output file
    #[arg(short = 'y', long)]
    pub overwrite: bool,

    /// Paper size: A0-A6, B0-B6, LETTER, LEGAL or ELEVENSEVENTEEN
    #[arg(short = 'p', long, value_name = "NAME", default_value = "A4")]
    pub pagesize: PaperSize,

    /// Paper padding in cm
    #[arg(long, value_name = "CM", default_value_t = 2.5, allow_negative_numbers = true)]
    pub padding: f32,

    /// Enable verbose output
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// A problem with the command-line arguments, reported before anything is drawn
#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("File already exists: {}", .0.display())]
    FileExists(PathBuf),

    #[error("Invalid grid size: {columns}x{rows}")]
    GridSize { columns: i64, rows: i64 },

    #[error("Stroke gray color must be a valid percentage: {0}")]
    StrokeGray(i64),

    #[error("Padding must be a non-negative number of cm: {0}")]
    InvalidPadding(f32),

    #[error("Padding of {padding} cm leaves no usable area on {paper} paper")]
    Padding { padding: f32, paper: PaperSize },

    #[error("Grid of {columns}x{rows} is too dense for {paper} paper")]
    TooDense {
        columns: u32,
        rows: u32,
        paper: PaperSize,
    },
}

/// Everything needed to produce one grid document, validated
#[derive(Debug, Clone, PartialEq)]
pub struct GridJob {
    pub output: PathBuf,
    pub paper: PaperSize,
    pub page: PageSpec,
    pub grid: GridSpec,
}

impl GridJob {
    /// Document title, e.g. `2x8 grid on A4 paper, padding: 2.50 cm`
    pub fn title(&self) -> String {
        format!(
            "{}x{} grid on {} paper, padding: {:.2} cm",
            self.grid.columns,
            self.grid.rows,
            self.paper,
            Cm::from(self.page.padding).0
        )
    }
}

fn positive(count: i64) -> Option<u32> {
    u32::try_from(count).ok().filter(|&count| count > 0)
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        use tracing_subscriber::{fmt, EnvFilter};

        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    /// Check every argument, collecting all problems rather than stopping at the first
    pub fn validate(&self) -> Result<GridJob, Vec<InputError>> {
        let mut errors = Vec::new();

        if self.pdf_file.is_file() && !self.overwrite {
            errors.push(InputError::FileExists(self.pdf_file.clone()));
        }

        let grid = match (positive(self.rows), positive(self.columns)) {
            (Some(rows), Some(columns)) => Some(GridSpec::new(rows, columns)),
            _ => {
                errors.push(InputError::GridSize {
                    columns: self.columns,
                    rows: self.rows,
                });
                None
            }
        };

        let stroke_intensity = if (0..=100).contains(&self.strokegray) {
            to_native(self.strokegray as f32, Unit::Percent)
        } else {
            errors.push(InputError::StrokeGray(self.strokegray));
            0.0
        };

        let padding = Pt(to_native(self.padding, Unit::Centimeter));
        let page = PageSpec::new(self.pagesize.dimensions(), padding, stroke_intensity);
        match page.validate() {
            Ok(()) => {
                if let Some(grid) = grid.filter(|grid| grid.validate_on(&page).is_err()) {
                    errors.push(InputError::TooDense {
                        columns: grid.columns,
                        rows: grid.rows,
                        paper: self.pagesize,
                    });
                }
            }
            Err(GeometryError::NegativePadding(_) | GeometryError::NonFinitePadding(_)) => {
                errors.push(InputError::InvalidPadding(self.padding));
            }
            Err(_) => errors.push(InputError::Padding {
                padding: self.padding,
                paper: self.pagesize,
            }),
        }

        match grid {
            Some(grid) if errors.is_empty() => Ok(GridJob {
                output: self.pdf_file.clone(),
                paper: self.pagesize,
                page,
                grid,
            }),
            _ => Err(errors),
        }
    }
}
