//! Grid layout: turning page and grid parameters into line positions, and drawing them.
//!
//! Computing a grid is a pure function ([`compute_grid`]); drawing it onto a
//! [`DocumentCanvas`] is a separate, infallible step ([`render_grid`]). Only
//! persisting the canvas afterwards touches the filesystem.
//!
//! # Example
//!
//! ```
//! use label_grid::{compute_grid, render_grid, Cm, GridSpec, PageSpec, PdfCanvas};
//! use label_grid::pagesize::PaperSize;
//!
//! let page = PageSpec::new(PaperSize::A4.dimensions(), Cm(2.5).into(), 0.5);
//! let grid = GridSpec::new(8, 2);
//! let positions = compute_grid(&page, &grid).expect("valid grid");
//! assert_eq!(positions.xs.len(), 3);
//! assert_eq!(positions.ys.len(), 9);
//!
//! let mut canvas = PdfCanvas::new(PaperSize::A4.dimensions(), page.padding);
//! render_grid(&mut canvas, &positions, page.stroke_intensity);
//!
//! let mut out: Vec<u8> = Vec::new();
//! canvas.write_to(&mut out).expect("can render to memory");
//! assert!(out.starts_with(b"%PDF"));
//! ```

use crate::canvas::DocumentCanvas;
use crate::error::{Error, GeometryError};
use crate::pagesize::PageSize;
use crate::units::Pt;

/// Length of the visible part of each dash
pub const DASH_ON: Pt = Pt(1.0);
/// Length of the gap between dashes
pub const DASH_OFF: Pt = Pt(2.0);

/// The physical page the grid is drawn on
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PageSpec {
    pub width: Pt,
    pub height: Pt,
    /// Uniform margin kept free on all four sides of the page
    pub padding: Pt,
    /// Grey level of the grid lines, 0.0 is black and 1.0 is white
    pub stroke_intensity: f32,
}

impl PageSpec {
    pub fn new(size: PageSize, padding: Pt, stroke_intensity: f32) -> PageSpec {
        PageSpec {
            width: size.0,
            height: size.1,
            padding,
            stroke_intensity,
        }
    }

    /// Check the page invariants, reporting the first one that doesn't hold
    pub fn validate(&self) -> Result<(), GeometryError> {
        let (width, height, padding) = (self.width.0, self.height.0, self.padding.0);

        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(GeometryError::NonPositivePage { width, height });
        }
        if !padding.is_finite() {
            return Err(GeometryError::NonFinitePadding(padding));
        }
        if padding < 0.0 {
            return Err(GeometryError::NegativePadding(padding));
        }
        if 2.0 * padding >= width {
            return Err(GeometryError::PaddingTooWide { padding, width });
        }
        if 2.0 * padding >= height {
            return Err(GeometryError::PaddingTooTall { padding, height });
        }
        if !(0.0..=1.0).contains(&self.stroke_intensity) {
            return Err(GeometryError::StrokeOutOfRange(self.stroke_intensity));
        }
        Ok(())
    }

    pub fn usable_width(&self) -> Pt {
        self.width - self.padding * 2.0
    }

    pub fn usable_height(&self) -> Pt {
        self.height - self.padding * 2.0
    }
}

/// How many cells the grid is divided into
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridSpec {
    pub rows: u32,
    pub columns: u32,
}

impl GridSpec {
    pub fn new(rows: u32, columns: u32) -> GridSpec {
        GridSpec { rows, columns }
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.rows == 0 {
            return Err(GeometryError::NoRows);
        }
        if self.columns == 0 {
            return Err(GeometryError::NoColumns);
        }
        Ok(())
    }

    /// Check that every cell is still resolvable once the grid is laid out on `page`,
    /// which must already be valid
    pub fn validate_on(&self, page: &PageSpec) -> Result<(), GeometryError> {
        check_resolution(page.padding, page.usable_width(), self.columns)?;
        check_resolution(page.padding, page.usable_height(), self.rows)
    }
}

/// Coordinates of every grid line, in points from the bottom-left of the page.
///
/// `xs` holds the positions of the vertical lines from left to right and `ys`
/// the horizontal lines from bottom to top. Both are strictly increasing and
/// evenly spaced, starting and ending on the padding boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePositions {
    pub xs: Vec<Pt>,
    pub ys: Vec<Pt>,
}

impl LinePositions {
    pub fn usable_width(&self) -> Pt {
        span(&self.xs)
    }

    pub fn usable_height(&self) -> Pt {
        span(&self.ys)
    }

    pub fn column_width(&self) -> Pt {
        self.usable_width() / self.xs.len().saturating_sub(1).max(1) as f32
    }

    pub fn row_height(&self) -> Pt {
        self.usable_height() / self.ys.len().saturating_sub(1).max(1) as f32
    }

    /// The number of lines [`render_grid`] will draw
    pub fn line_count(&self) -> usize {
        self.xs.len() + self.ys.len()
    }
}

fn span(positions: &[Pt]) -> Pt {
    match (positions.first(), positions.last()) {
        (Some(&first), Some(&last)) => last - first,
        _ => Pt(0.0),
    }
}

/// Cells must span at least this many `f32` steps at the far edge of the grid, which keeps
/// the rounded positions strictly increasing and evenly spaced
const MIN_CELL_STEPS: f64 = 1024.0;

fn check_resolution(start: Pt, length: Pt, cells: u32) -> Result<(), GeometryError> {
    let far_edge = f64::from(*start) + f64::from(*length);
    let cell = f64::from(*length) / f64::from(cells);
    let resolution = far_edge * f64::from(f32::EPSILON) * MIN_CELL_STEPS;
    if cell < resolution {
        return Err(GeometryError::CellsTooSmall {
            cells,
            cell: cell as f32,
            resolution: resolution as f32,
        });
    }
    Ok(())
}

/// Evenly divide `length` into `cells`, starting at `start`. Returns `cells + 1` positions.
fn interpolate(start: Pt, length: Pt, cells: u32) -> Vec<Pt> {
    let (start, length) = (f64::from(*start), f64::from(*length));
    (0..=cells)
        .map(|i| Pt((start + length * f64::from(i) / f64::from(cells)) as f32))
        .collect()
}

/// Compute where the lines of `grid` fall within the usable area of `page`.
///
/// The outermost lines sit on the padding boundary, not the page edge. Positions are
/// not snapped to any coarser unit.
pub fn compute_grid(page: &PageSpec, grid: &GridSpec) -> Result<LinePositions, Error> {
    grid.validate()?;
    page.validate()?;
    grid.validate_on(page)?;

    let xs = interpolate(page.padding, page.usable_width(), grid.columns);
    let ys = interpolate(page.padding, page.usable_height(), grid.rows);

    tracing::debug!(
        rows = grid.rows,
        columns = grid.columns,
        usable_width = *page.usable_width(),
        usable_height = *page.usable_height(),
        "computed grid"
    );

    Ok(LinePositions { xs, ys })
}

/// Draw the grid onto `canvas` as dashed lines of the given grey level.
///
/// Vertical lines span the full usable height and horizontal lines the full usable
/// width; exactly [`LinePositions::line_count`] lines are drawn. `stroke_gray` is
/// clamped into 0.0..=1.0.
pub fn render_grid<C>(canvas: &mut C, positions: &LinePositions, stroke_gray: f32)
where
    C: DocumentCanvas + ?Sized,
{
    canvas.set_stroke_intensity(stroke_gray.clamp(0.0, 1.0));
    canvas.set_dash_pattern(DASH_ON, DASH_OFF);

    let (Some(&left), Some(&right)) = (positions.xs.first(), positions.xs.last()) else {
        return;
    };
    let (Some(&bottom), Some(&top)) = (positions.ys.first(), positions.ys.last()) else {
        return;
    };

    for &x in positions.xs.iter() {
        tracing::trace!(x = *x, "vertical line");
        canvas.draw_line(x, bottom, x, top);
    }
    for &y in positions.ys.iter() {
        tracing::trace!(y = *y, "horizontal line");
        canvas.draw_line(left, y, right, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize::{PaperSize, LETTER};
    use crate::units::Cm;
    use approx::assert_abs_diff_eq;
    use std::path::Path;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Stroke(f32),
        Dash(Pt, Pt),
        Line(Pt, Pt, Pt, Pt),
    }

    #[derive(Default)]
    struct RecordingCanvas {
        calls: Vec<Call>,
    }

    impl RecordingCanvas {
        fn lines(&self) -> Vec<(Pt, Pt, Pt, Pt)> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    Call::Line(x1, y1, x2, y2) => Some((*x1, *y1, *x2, *y2)),
                    _ => None,
                })
                .collect()
        }
    }

    impl DocumentCanvas for RecordingCanvas {
        fn set_stroke_intensity(&mut self, gray: f32) {
            self.calls.push(Call::Stroke(gray));
        }

        fn set_dash_pattern(&mut self, on: Pt, off: Pt) {
            self.calls.push(Call::Dash(on, off));
        }

        fn draw_line(&mut self, x1: Pt, y1: Pt, x2: Pt, y2: Pt) {
            self.calls.push(Call::Line(x1, y1, x2, y2));
        }

        fn persist(self, _destination: &Path) -> Result<(), Error> {
            Ok(())
        }
    }

    fn a4(padding: Pt) -> PageSpec {
        PageSpec::new(PaperSize::A4.dimensions(), padding, 0.5)
    }

    fn assert_evenly_spaced(positions: &[Pt], start: f32, end: f32) {
        assert_abs_diff_eq!(*positions[0], start, epsilon = 1e-3);
        assert_abs_diff_eq!(*positions[positions.len() - 1], end, epsilon = 1e-3);
        let step = *positions[1] - *positions[0];
        for pair in positions.windows(2) {
            assert!(pair[1] > pair[0], "positions must strictly increase");
            assert_abs_diff_eq!(*pair[1] - *pair[0], step, epsilon = 1e-3);
        }
    }

    #[test]
    fn default_a4_label_grid() {
        let page = a4(Cm(2.5).into());
        let positions = compute_grid(&page, &GridSpec::new(8, 2)).unwrap();

        assert_eq!(positions.xs.len(), 3);
        assert_eq!(positions.ys.len(), 9);
        assert_abs_diff_eq!(*positions.usable_width(), 453.54, epsilon = 0.01);
        assert_abs_diff_eq!(*positions.usable_height(), 700.15, epsilon = 0.01);
        assert_abs_diff_eq!(*positions.column_width(), 226.77, epsilon = 0.01);
        assert_abs_diff_eq!(*positions.row_height(), 87.52, epsilon = 0.01);
        assert_evenly_spaced(&positions.xs, 70.866, 595.276 - 70.866);
        assert_evenly_spaced(&positions.ys, 70.866, 841.89 - 70.866);
    }

    #[test]
    fn grid_properties_hold_across_shapes() {
        let paddings = [Pt(0.0), Pt(10.0), Cm(2.5).into(), Pt(300.0)];
        for padding in paddings {
            let page = PageSpec::new(LETTER, padding, 0.0);
            for rows in [1, 2, 7, 30] {
                for columns in [1, 3, 12] {
                    let positions = compute_grid(&page, &GridSpec::new(rows, columns)).unwrap();
                    assert_eq!(positions.xs.len(), columns as usize + 1);
                    assert_eq!(positions.ys.len(), rows as usize + 1);
                    assert_evenly_spaced(&positions.xs, *padding, 612.0 - *padding);
                    assert_evenly_spaced(&positions.ys, *padding, 792.0 - *padding);
                }
            }
        }
    }

    #[test]
    fn single_cell_is_just_the_border() {
        let positions = compute_grid(&a4(Pt(20.0)), &GridSpec::new(1, 1)).unwrap();
        let (width, height) = PaperSize::A4.dimensions();
        assert_evenly_spaced(&positions.xs, 20.0, *width - 20.0);
        assert_evenly_spaced(&positions.ys, 20.0, *height - 20.0);
        assert_eq!(positions.line_count(), 4);
    }

    #[test]
    fn zero_rows_or_columns_are_rejected() {
        let page = a4(Pt(10.0));
        assert!(matches!(
            compute_grid(&page, &GridSpec::new(0, 2)),
            Err(Error::InvalidGeometry(GeometryError::NoRows))
        ));
        assert!(matches!(
            compute_grid(&page, &GridSpec::new(8, 0)),
            Err(Error::InvalidGeometry(GeometryError::NoColumns))
        ));
    }

    #[test]
    fn padding_must_leave_a_usable_area() {
        let grid = GridSpec::new(8, 2);
        let (width, _) = PaperSize::A4.dimensions();

        // exactly half the width leaves nothing behind
        assert!(matches!(
            compute_grid(&a4(width / 2.0), &grid),
            Err(Error::InvalidGeometry(GeometryError::PaddingTooWide { .. }))
        ));

        // a landscape page runs out of height first
        let landscape = PageSpec::new((Pt(800.0), Pt(100.0)), Pt(60.0), 0.5);
        assert!(matches!(
            compute_grid(&landscape, &grid),
            Err(Error::InvalidGeometry(GeometryError::PaddingTooTall { .. }))
        ));

        assert!(matches!(
            compute_grid(&a4(Pt(-1.0)), &grid),
            Err(Error::InvalidGeometry(GeometryError::NegativePadding(_)))
        ));
    }

    #[test]
    fn non_finite_pages_and_padding_are_rejected() {
        let grid = GridSpec::new(2, 2);
        let endless = PageSpec::new((Pt(f32::INFINITY), Pt(800.0)), Pt(10.0), 0.5);
        assert!(matches!(
            compute_grid(&endless, &grid),
            Err(Error::InvalidGeometry(GeometryError::NonPositivePage { .. }))
        ));

        let endless = PageSpec::new((Pt(600.0), Pt(f32::INFINITY)), Pt(10.0), 0.5);
        assert!(matches!(
            compute_grid(&endless, &grid),
            Err(Error::InvalidGeometry(GeometryError::NonPositivePage { .. }))
        ));

        for padding in [f32::INFINITY, f32::NAN] {
            assert!(matches!(
                compute_grid(&a4(Pt(padding)), &grid),
                Err(Error::InvalidGeometry(GeometryError::NonFinitePadding(_)))
            ));
        }
    }

    #[test]
    fn cells_finer_than_f32_resolution_are_rejected() {
        let page = a4(Cm(2.5).into());
        assert!(matches!(
            compute_grid(&page, &GridSpec::new(20_000_000, 1)),
            Err(Error::InvalidGeometry(GeometryError::CellsTooSmall {
                cells: 20_000_000,
                ..
            }))
        ));
        assert!(matches!(
            compute_grid(&page, &GridSpec::new(1, 20_000_000)),
            Err(Error::InvalidGeometry(GeometryError::CellsTooSmall { .. }))
        ));
    }

    #[test]
    fn dense_grids_stay_increasing_and_even() {
        let page = a4(Cm(2.5).into());
        let positions = compute_grid(&page, &GridSpec::new(5000, 1)).unwrap();
        assert_eq!(positions.ys.len(), 5001);
        assert_evenly_spaced(&positions.ys, 70.866, 841.89 - 70.866);
    }

    #[test]
    fn degenerate_pages_and_strokes_are_rejected() {
        let grid = GridSpec::new(1, 1);
        let flat = PageSpec::new((Pt(100.0), Pt(0.0)), Pt(0.0), 0.5);
        assert!(matches!(
            compute_grid(&flat, &grid),
            Err(Error::InvalidGeometry(GeometryError::NonPositivePage { .. }))
        ));

        let mut page = a4(Pt(10.0));
        page.stroke_intensity = 1.5;
        assert!(matches!(
            compute_grid(&page, &grid),
            Err(Error::InvalidGeometry(GeometryError::StrokeOutOfRange(_)))
        ));
    }

    #[test]
    fn invalid_geometry_never_reaches_the_canvas() {
        let mut canvas = RecordingCanvas::default();
        if let Ok(positions) = compute_grid(&a4(Pt(10.0)), &GridSpec::new(0, 0)) {
            render_grid(&mut canvas, &positions, 0.5);
        }
        assert!(canvas.calls.is_empty());
    }

    #[test]
    fn render_draws_one_line_per_position() {
        for (rows, columns) in [(1, 1), (8, 2), (5, 9)] {
            let positions = compute_grid(&a4(Pt(36.0)), &GridSpec::new(rows, columns)).unwrap();
            let mut canvas = RecordingCanvas::default();
            render_grid(&mut canvas, &positions, 0.5);

            let lines = canvas.lines();
            assert_eq!(lines.len(), (columns as usize + 1) + (rows as usize + 1));
            assert_eq!(lines.len(), positions.line_count());
        }
    }

    #[test]
    fn render_sets_stroke_style_before_drawing() {
        let positions = compute_grid(&a4(Pt(36.0)), &GridSpec::new(2, 2)).unwrap();
        let mut canvas = RecordingCanvas::default();
        render_grid(&mut canvas, &positions, 0.25);

        assert_eq!(canvas.calls[0], Call::Stroke(0.25));
        assert_eq!(canvas.calls[1], Call::Dash(Pt(1.0), Pt(2.0)));
    }

    #[test]
    fn render_clamps_stroke_intensity() {
        let positions = compute_grid(&a4(Pt(36.0)), &GridSpec::new(1, 1)).unwrap();
        let mut canvas = RecordingCanvas::default();
        render_grid(&mut canvas, &positions, 3.0);
        assert_eq!(canvas.calls[0], Call::Stroke(1.0));
    }

    #[test]
    fn lines_span_the_usable_area() {
        let positions = compute_grid(&a4(Pt(36.0)), &GridSpec::new(3, 4)).unwrap();
        let mut canvas = RecordingCanvas::default();
        render_grid(&mut canvas, &positions, 0.5);

        let bottom = positions.ys[0];
        let top = *positions.ys.last().unwrap();
        let left = positions.xs[0];
        let right = *positions.xs.last().unwrap();

        let lines = canvas.lines();
        let (vertical, horizontal) = lines.split_at(positions.xs.len());
        for (&(x1, y1, x2, y2), &x) in vertical.iter().zip(positions.xs.iter()) {
            assert_eq!((x1, y1, x2, y2), (x, bottom, x, top));
        }
        for (&(x1, y1, x2, y2), &y) in horizontal.iter().zip(positions.ys.iter()) {
            assert_eq!((x1, y1, x2, y2), (left, y, right, y));
        }
    }
}
