use std::io::Write;

use serde::Serialize;

use super::error::ConvertError;

/// Writes a JSON object one entry at a time. Nothing is buffered beyond what
/// the inner writer buffers, so an error part way through leaves whatever was
/// already written.
pub struct ObjectWriter<W: Write> {
    inner: W,
    entries: usize,
}

impl<W: Write> ObjectWriter<W> {
    pub fn begin(mut inner: W) -> Result<Self, ConvertError> {
        inner.write_all(b"{")?;
        Ok(Self { inner, entries: 0 })
    }

    pub fn entry<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), ConvertError> {
        if self.entries > 0 {
            self.inner.write_all(b",")?;
        }
        serde_json::to_writer(&mut self.inner, key)?;
        self.inner.write_all(b":")?;
        // serde_json leaves non-ASCII characters unescaped.
        serde_json::to_writer(&mut self.inner, value)?;
        self.entries += 1;
        Ok(())
    }

    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Closes the object and flushes, handing back the inner writer.
    pub fn finish(mut self) -> Result<W, ConvertError> {
        self.inner.write_all(b"}")?;
        self.inner.flush()?;
        Ok(self.inner)
    }
}
