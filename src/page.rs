use crate::content::{compress, render_contents};
use crate::error::Error;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::*;
use pdf_writer::{Content, Filter, Finish, Pdf};

/// A single page of a [`Document`](crate::Document)
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// Content streams, rendered in order
    pub contents: Vec<Vec<u8>>,
}

impl Page {
    /// Create a new page with the given size and optional margins. The margins only
    /// determine the page's content box; nothing stops content from being drawn outside it.
    pub fn new(size: PageSize, margins: Option<Margins>) -> Page {
        let (width, height) = size;
        let margins = margins.unwrap_or_default();
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width,
                y2: height,
            },
            content_box: Rect {
                x1: margins.left,
                y1: margins.bottom,
                x2: width - margins.right,
                y2: height - margins.top,
            },
            contents: Vec::default(),
        }
    }

    /// Add arbitrary [pdf_writer::Content] to the page
    pub fn add_content(&mut self, content: Content) {
        self.contents.push(content.finish());
    }

    pub(crate) fn render(&self) -> Result<Vec<u8>, std::io::Error> {
        render_contents(&self.contents)
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        writer: &mut Pdf,
    ) -> Result<(), Error> {
        let id = refs.get(RefType::Page(page_index)).ok_or(Error::PageMissing)?;
        let page_tree = refs.get(RefType::PageTree).ok_or(Error::PageMissing)?;
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(page_tree);
        page.contents(content_id);
        page.finish();

        let rendered = self.render()?;
        writer
            .stream(content_id, &compress(&rendered))
            .filter(Filter::FlateDecode);

        Ok(())
    }
}
