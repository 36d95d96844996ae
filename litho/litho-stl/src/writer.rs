//! The STL writer session.

use std::fs::File;
use std::io::{BufWriter, Seek, SeekFrom, Write};
use std::path::Path;

use litho_types::{Triangle, TriangleSink};
use tracing::debug;

use crate::error::{StlError, StlResult};

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Solid name used when none is given.
pub const DEFAULT_SOLID_NAME: &str = "lithograph";

/// Output format of an [`StlWriter`] session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StlFormat {
    /// 80-byte header, little-endian count, 50-byte facet records.
    #[default]
    Binary,
    /// `solid`/`endsolid` text with one facet block per triangle.
    Ascii,
}

/// One append-only STL output session.
///
/// A closed two-variant contract: the sink kind is selected at
/// construction and never changes. The writer owns its destination
/// exclusively from construction to [`finalize`](Self::finalize), which
/// consumes the session; emitting after finalize is unrepresentable.
/// Dropping a writer without finalizing leaves a binary file with a zero
/// triangle count and an ASCII file without its `endsolid` line; both
/// read as obviously truncated rather than silently wrong.
///
/// # Example
///
/// ```no_run
/// use litho_stl::{StlFormat, StlWriter};
/// use litho_types::{Triangle, TriangleSink};
///
/// let mut writer = StlWriter::create("plate.stl", StlFormat::Binary).unwrap();
/// writer
///     .emit(&Triangle::from_arrays([0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]))
///     .unwrap();
/// writer.finalize().unwrap();
/// ```
#[derive(Debug)]
pub enum StlWriter<W: Write + Seek> {
    /// Binary session.
    Binary(BinaryStlSink<W>),
    /// ASCII session.
    Ascii(AsciiStlSink<W>),
}

impl StlWriter<BufWriter<File>> {
    /// Open a buffered file session at `path`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be created or the
    /// preamble cannot be written.
    pub fn create<P: AsRef<Path>>(path: P, format: StlFormat) -> StlResult<Self> {
        let file = File::create(path)?;
        Self::new(BufWriter::new(file), format)
    }
}

impl<W: Write + Seek> StlWriter<W> {
    /// Start a session on an arbitrary destination with the default
    /// solid name.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the preamble cannot be written.
    pub fn new(dest: W, format: StlFormat) -> StlResult<Self> {
        Self::with_solid_name(dest, format, DEFAULT_SOLID_NAME)
    }

    /// Start a session with an explicit solid name (ASCII `solid` line;
    /// ignored by the binary format).
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the preamble cannot be written.
    pub fn with_solid_name(dest: W, format: StlFormat, solid_name: &str) -> StlResult<Self> {
        match format {
            StlFormat::Binary => Ok(Self::Binary(BinaryStlSink::new(dest)?)),
            StlFormat::Ascii => Ok(Self::Ascii(AsciiStlSink::new(dest, solid_name)?)),
        }
    }

    /// Number of triangles emitted so far.
    #[inline]
    #[must_use]
    pub const fn triangle_count(&self) -> u32 {
        match self {
            Self::Binary(sink) => sink.triangle_count(),
            Self::Ascii(sink) => sink.triangle_count(),
        }
    }

    /// Serialize one triangle.
    ///
    /// # Errors
    ///
    /// Returns an I/O error from the destination, or
    /// [`StlError::TooManyTriangles`] past the binary 32-bit count.
    pub fn emit_triangle(&mut self, triangle: &Triangle) -> StlResult<()> {
        match self {
            Self::Binary(sink) => sink.emit_triangle(triangle),
            Self::Ascii(sink) => sink.emit_triangle(triangle),
        }
    }

    /// Close the session: patch the binary triangle count, or write the
    /// ASCII trailer, then flush.
    ///
    /// # Errors
    ///
    /// Fails loudly if the destination cannot be written or, for the
    /// binary count patch, seeked.
    pub fn finalize(self) -> StlResult<()> {
        match self {
            Self::Binary(sink) => sink.finalize(),
            Self::Ascii(sink) => sink.finalize(),
        }
    }
}

impl<W: Write + Seek> TriangleSink for StlWriter<W> {
    type Error = StlError;

    #[inline]
    fn emit(&mut self, triangle: &Triangle) -> Result<(), Self::Error> {
        self.emit_triangle(triangle)
    }
}

/// Binary STL sink: 80-byte header, placeholder count, 50-byte records.
///
/// The triangle count is unknown until the stream ends, so construction
/// writes a zero placeholder and [`finalize`](Self::finalize) seeks back
/// to offset 80 to patch the real count.
#[derive(Debug)]
pub struct BinaryStlSink<W: Write + Seek> {
    dest: W,
    count: u32,
}

impl<W: Write + Seek> BinaryStlSink<W> {
    /// Write the preamble and start a binary session.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the preamble cannot be written.
    pub fn new(mut dest: W) -> StlResult<Self> {
        // Header content is ignored by readers; spaces keep it inert,
        // and the count starts as a zero placeholder.
        dest.write_all(&[b' '; HEADER_SIZE])?;
        dest.write_all(&0u32.to_le_bytes())?;
        Ok(Self { dest, count: 0 })
    }

    /// Number of triangles emitted so far.
    #[inline]
    #[must_use]
    pub const fn triangle_count(&self) -> u32 {
        self.count
    }

    /// Append one 50-byte facet record: zero normal, three vertices,
    /// zero attribute count.
    ///
    /// # Errors
    ///
    /// Returns an I/O error from the destination, or
    /// [`StlError::TooManyTriangles`] past the 32-bit count.
    #[allow(clippy::cast_possible_truncation)] // f64→f32 narrowing is the STL format
    pub fn emit_triangle(&mut self, triangle: &Triangle) -> StlResult<()> {
        self.count = self
            .count
            .checked_add(1)
            .ok_or(StlError::TooManyTriangles)?;

        for _ in 0..3 {
            self.dest.write_all(&0f32.to_le_bytes())?;
        }
        for vertex in triangle.vertices() {
            self.dest.write_all(&(vertex.x as f32).to_le_bytes())?;
            self.dest.write_all(&(vertex.y as f32).to_le_bytes())?;
            self.dest.write_all(&(vertex.z as f32).to_le_bytes())?;
        }
        self.dest.write_all(&0u16.to_le_bytes())?;
        Ok(())
    }

    /// Seek back to offset 80, patch the triangle count, flush.
    ///
    /// # Errors
    ///
    /// Fails loudly if the destination cannot be seeked or written.
    pub fn finalize(mut self) -> StlResult<()> {
        self.dest.seek(SeekFrom::Start(HEADER_SIZE as u64))?;
        self.dest.write_all(&self.count.to_le_bytes())?;
        self.dest.flush()?;
        debug!(triangles = self.count, "binary stl session finalized");
        Ok(())
    }
}

/// ASCII STL sink: `solid`/`endsolid` with one facet block per triangle.
///
/// Coordinates go through `f32` and are printed with Rust's shortest
/// round-trip formatting, so the text decodes to the same values the
/// binary format stores. Only needs [`Write`]; the session never seeks.
#[derive(Debug)]
pub struct AsciiStlSink<W: Write> {
    dest: W,
    solid_name: String,
    count: u32,
}

impl<W: Write> AsciiStlSink<W> {
    /// Write the `solid` line and start an ASCII session.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the preamble cannot be written.
    pub fn new(mut dest: W, solid_name: &str) -> StlResult<Self> {
        writeln!(dest, "solid {solid_name}")?;
        Ok(Self {
            dest,
            solid_name: solid_name.to_string(),
            count: 0,
        })
    }

    /// Number of triangles emitted so far.
    #[inline]
    #[must_use]
    pub const fn triangle_count(&self) -> u32 {
        self.count
    }

    /// Append one facet block.
    ///
    /// # Errors
    ///
    /// Returns an I/O error from the destination, or
    /// [`StlError::TooManyTriangles`] to stay interchangeable with the
    /// binary sink.
    #[allow(clippy::cast_possible_truncation)] // f64→f32 narrowing is the STL format
    pub fn emit_triangle(&mut self, triangle: &Triangle) -> StlResult<()> {
        self.count = self
            .count
            .checked_add(1)
            .ok_or(StlError::TooManyTriangles)?;

        writeln!(self.dest, "  facet normal 0 0 0")?;
        writeln!(self.dest, "    outer loop")?;
        for vertex in triangle.vertices() {
            let (x, y, z) = (vertex.x as f32, vertex.y as f32, vertex.z as f32);
            writeln!(self.dest, "      vertex {x} {y} {z}")?;
        }
        writeln!(self.dest, "    endloop")?;
        writeln!(self.dest, "  endfacet")?;
        Ok(())
    }

    /// Write the `endsolid` trailer and flush.
    ///
    /// # Errors
    ///
    /// Fails loudly if the destination cannot be written.
    pub fn finalize(mut self) -> StlResult<()> {
        writeln!(self.dest, "endsolid {}", self.solid_name)?;
        self.dest.flush()?;
        debug!(triangles = self.count, "ascii stl session finalized");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample() -> Triangle {
        Triangle::from_arrays([0.0, 0.0, 0.0], [1.5, 0.0, 0.5], [0.0, 2.5, 3.5])
    }

    fn written(format: StlFormat, triangles: &[Triangle]) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        let mut writer = StlWriter::new(&mut cursor, format).unwrap();
        for t in triangles {
            writer.emit_triangle(t).unwrap();
        }
        writer.finalize().unwrap();
        cursor.into_inner()
    }

    #[test]
    fn binary_layout_is_exact() {
        let bytes = written(StlFormat::Binary, &[sample(), sample()]);

        assert_eq!(bytes.len(), HEADER_SIZE + 4 + 2 * 50);
        assert!(bytes[..HEADER_SIZE].iter().all(|&b| b == b' '));
        assert_eq!(&bytes[HEADER_SIZE..HEADER_SIZE + 4], &2u32.to_le_bytes());

        // First record: 12 zero normal bytes, then v0.
        let record = &bytes[HEADER_SIZE + 4..];
        assert!(record[..12].iter().all(|&b| b == 0));
        assert_eq!(&record[12..16], &0f32.to_le_bytes());
        assert_eq!(&record[24..28], &1.5f32.to_le_bytes());
        // Attribute byte count closes the record.
        assert_eq!(&record[48..50], &0u16.to_le_bytes());
    }

    #[test]
    fn count_is_patched_after_streaming() {
        let triangles: Vec<_> = (0..7).map(|_| sample()).collect();
        let bytes = written(StlFormat::Binary, &triangles);
        assert_eq!(&bytes[HEADER_SIZE..HEADER_SIZE + 4], &7u32.to_le_bytes());
    }

    #[test]
    fn empty_session_writes_zero_count() {
        let bytes = written(StlFormat::Binary, &[]);
        assert_eq!(bytes.len(), HEADER_SIZE + 4);
        assert_eq!(&bytes[HEADER_SIZE..], &0u32.to_le_bytes());
    }

    #[test]
    fn ascii_structure_is_complete() {
        let bytes = written(StlFormat::Ascii, &[sample()]);
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "solid lithograph");
        assert_eq!(lines[1], "  facet normal 0 0 0");
        assert_eq!(lines[2], "    outer loop");
        assert_eq!(lines[3], "      vertex 0 0 0");
        assert_eq!(lines[4], "      vertex 1.5 0 0.5");
        assert_eq!(lines[6], "    endloop");
        assert_eq!(lines[7], "  endfacet");
        assert_eq!(lines[8], "endsolid lithograph");
    }

    #[test]
    fn ascii_honors_custom_solid_name() {
        let mut cursor = Cursor::new(Vec::new());
        let writer = StlWriter::with_solid_name(&mut cursor, StlFormat::Ascii, "plate").unwrap();
        writer.finalize().unwrap();

        let text = String::from_utf8(cursor.into_inner()).unwrap();
        assert!(text.starts_with("solid plate\n"));
        assert!(text.ends_with("endsolid plate\n"));
    }

    #[test]
    fn triangle_count_tracks_emissions() {
        let mut writer = StlWriter::new(Cursor::new(Vec::new()), StlFormat::Binary).unwrap();
        assert_eq!(writer.triangle_count(), 0);
        writer.emit_triangle(&sample()).unwrap();
        writer.emit_triangle(&sample()).unwrap();
        assert_eq!(writer.triangle_count(), 2);
    }

    #[test]
    fn ascii_sink_alone_needs_no_seek() {
        // Vec<u8> is Write but not Seek; the ASCII sink accepts it.
        let mut out: Vec<u8> = Vec::new();
        let mut sink = AsciiStlSink::new(&mut out, "plate").unwrap();
        sink.emit_triangle(&sample()).unwrap();
        sink.finalize().unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("endsolid plate\n"));
    }
}
