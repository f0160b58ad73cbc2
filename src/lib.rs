//! Evenly spaced guide-line grids on a single PDF page, for printing label and cutting
//! templates.
//!
//! [`compute_grid`] turns a [`PageSpec`] and [`GridSpec`] into [`LinePositions`],
//! [`render_grid`] draws them onto any [`DocumentCanvas`], and [`PdfCanvas`] is the
//! canvas that turns the drawing into a PDF file.

mod canvas;
pub use canvas::*;

mod content;

mod document;
pub use document::*;

mod grid;
pub use grid::*;

mod info;
pub use info::*;

/// Utility functions and structures to layout objects on pages
pub mod layout;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
