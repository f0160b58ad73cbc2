//! The drawing surface a grid is rendered onto.

use crate::document::Document;
use crate::error::Error;
use crate::info::Info;
use crate::layout::Margins;
use crate::page::Page;
use crate::pagesize::PageSize;
use crate::units::Pt;
use pdf_writer::Content;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// A single page that accepts stroke commands and can be saved once drawing is done.
///
/// [`render_grid`](crate::render_grid) only needs this much from a rendering backend;
/// nothing here says how the page is encoded.
pub trait DocumentCanvas {
    /// Set the grey level of subsequent strokes, 0.0 is black and 1.0 is white
    fn set_stroke_intensity(&mut self, gray: f32);

    /// Dash subsequent strokes with `on` drawn and `off` skipped, repeating
    fn set_dash_pattern(&mut self, on: Pt, off: Pt);

    /// Stroke a straight line from `(x1, y1)` to `(x2, y2)`
    fn draw_line(&mut self, x1: Pt, y1: Pt, x2: Pt, y2: Pt);

    /// Save the page to `destination`, consuming the canvas
    fn persist(self, destination: &Path) -> Result<(), Error>
    where
        Self: Sized;
}

/// A [`DocumentCanvas`] that produces a single-page PDF.
///
/// Drawing commands are collected into a content stream in memory. Nothing touches the
/// filesystem until [`persist`](DocumentCanvas::persist) is called. The rendered document
/// is written to a temporary file beside the destination, which then replaces it in one
/// rename, so an existing file is never left truncated.
pub struct PdfCanvas {
    document: Document,
    page: Page,
    content: Content,
    // segments added since the last stroke
    pending: usize,
}

impl PdfCanvas {
    /// Start a canvas for a page of the given size. `padding` is recorded as the page's
    /// content box, i.e. the area the grid occupies.
    pub fn new(size: PageSize, padding: Pt) -> PdfCanvas {
        PdfCanvas {
            document: Document::default(),
            page: Page::new(size, Some(Margins::all(padding))),
            content: Content::new(),
            pending: 0,
        }
    }

    /// Sets the metadata written to the document's info dictionary
    pub fn set_info(&mut self, info: Info) {
        self.document.set_info(info);
    }

    /// The page being drawn on
    pub fn page(&self) -> &Page {
        &self.page
    }

    // graphics state changes only apply to paths stroked after them, so close off
    // whatever has been drawn so far first
    fn stroke_pending(&mut self) {
        if self.pending > 0 {
            self.content.stroke();
            self.pending = 0;
        }
    }

    /// Finish drawing and hand back the document, with the page added to it
    pub fn into_document(mut self) -> Document {
        self.stroke_pending();
        let PdfCanvas {
            mut document,
            mut page,
            content,
            ..
        } = self;
        page.add_content(content);
        document.add_page(page);
        document
    }

    /// Render the document and write it to `w`
    pub fn write_to<W: Write>(self, w: W) -> Result<(), Error> {
        self.into_document().write(w)
    }
}

impl DocumentCanvas for PdfCanvas {
    fn set_stroke_intensity(&mut self, gray: f32) {
        self.stroke_pending();
        self.content.set_stroke_gray(gray);
    }

    fn set_dash_pattern(&mut self, on: Pt, off: Pt) {
        self.stroke_pending();
        self.content.set_dash_pattern([*on, *off], 0.0);
    }

    fn draw_line(&mut self, x1: Pt, y1: Pt, x2: Pt, y2: Pt) {
        self.content.move_to(*x1, *y1);
        self.content.line_to(*x2, *y2);
        self.pending += 1;
    }

    fn persist(self, destination: &Path) -> Result<(), Error> {
        let mut rendered: Vec<u8> = Vec::default();
        self.write_to(&mut rendered)?;

        let dir = destination
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut out = NamedTempFile::new_in(dir)?;
        out.write_all(&rendered)?;
        out.flush()?;
        out.persist(destination).map_err(|e| e.error)?;

        tracing::info!(
            path = %destination.display(),
            bytes = rendered.len(),
            "wrote grid document"
        );
        Ok(())
    }
}
