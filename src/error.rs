use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown measurement unit: {0}")]
    /// A unit tag could not be parsed into a [`Unit`](crate::Unit)
    InvalidUnit(String),

    #[error("invalid grid geometry: {0}")]
    /// The page or grid parameters describe a grid that cannot be drawn
    InvalidGeometry(#[from] GeometryError),

    #[error("unknown paper size: {0}")]
    /// A paper size name is not one of [`PaperSize::ALL`](crate::pagesize::PaperSize::ALL)
    UnknownPaperSize(String),

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error("document page order refers to a page that does not exist")]
    /// The document's page order lists a page missing from its arena
    PageMissing,
}

/// The invariant of a [`PageSpec`](crate::PageSpec) or [`GridSpec`](crate::GridSpec)
/// that was violated
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    #[error("the grid needs at least one row")]
    NoRows,

    #[error("the grid needs at least one column")]
    NoColumns,

    #[error("page dimensions must be positive and finite, got {width} x {height}")]
    NonPositivePage { width: f32, height: f32 },

    #[error("padding must be a finite length, got {0}")]
    NonFinitePadding(f32),

    #[error("padding must not be negative, got {0}")]
    NegativePadding(f32),

    #[error("padding of {padding}pt on both sides leaves no usable width on a {width}pt wide page")]
    PaddingTooWide { padding: f32, width: f32 },

    #[error("padding of {padding}pt on both sides leaves no usable height on a {height}pt tall page")]
    PaddingTooTall { padding: f32, height: f32 },

    #[error("{cells} cells of {cell}pt are finer than the {resolution}pt the page coordinates can resolve")]
    CellsTooSmall { cells: u32, cell: f32, resolution: f32 },

    #[error("stroke intensity must lie within 0.0 and 1.0, got {0}")]
    StrokeOutOfRange(f32),
}
