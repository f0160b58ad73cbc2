//! Content stream assembly for pages.

use std::io::Write;

/// Concatenates a page's content chunks into one content stream.
///
/// Each chunk is wrapped in its own `q`/`Q` pair so graphics state set by one chunk
/// (stroke colour, dash pattern, ...) can't leak into the next.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(contents: &[Vec<u8>]) -> Result<Vec<u8>, std::io::Error> {
    if contents.is_empty() {
        return Ok(Vec::default());
    }

    let mut content: Vec<u8> = Vec::default();
    for chunk in contents.iter() {
        write!(&mut content, "q\n")?;
        content.write_all(chunk.as_slice())?;
        write!(&mut content, "\nQ\n")?;
    }

    Ok(content)
}

/// zlib-compress a rendered stream, to be written with the `FlateDecode` filter
pub(crate) fn compress(rendered: &[u8]) -> Vec<u8> {
    miniz_oxide::deflate::compress_to_vec_zlib(
        rendered,
        miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compressed_streams_inflate_back() {
        let rendered = render_contents(&[b"0 0 m\n10 10 l\nS\n".to_vec()]).unwrap();
        let compressed = compress(&rendered);
        let inflated = miniz_oxide::inflate::decompress_to_vec_zlib(&compressed).unwrap();
        assert_eq!(inflated, rendered);
    }
}
