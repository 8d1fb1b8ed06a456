//! Reader over the decompressed bytes of one archive entry.

use std::io::Cursor;
use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;

/// Read stream returned when a file entry is opened.
///
/// The entry is decompressed when it is opened, so the reader holds no
/// lock on the archive and can be moved to another thread or kept after
/// the provider answers other queries.
///
/// # Examples
///
/// ```
/// use std::io::Read;
/// use zipfs_core::io::EntryReader;
///
/// let mut reader = EntryReader::new(b"Hello zip".to_vec());
/// assert_eq!(reader.len(), 9);
///
/// let mut text = String::new();
/// reader.read_to_string(&mut text)?;
/// assert_eq!(text, "Hello zip");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct EntryReader {
    inner: Cursor<Vec<u8>>,
}

impl EntryReader {
    /// Wraps decompressed entry bytes.
    #[must_use]
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            inner: Cursor::new(data),
        }
    }

    /// Returns the total number of bytes in the entry.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.inner.get_ref().len() as u64
    }

    /// Returns `true` if the entry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.get_ref().is_empty()
    }

    /// Consumes the reader and returns the entry bytes.
    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.inner.into_inner()
    }
}

impl Read for EntryReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Seek for EntryReader {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        self.inner.seek(pos)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_reader() {
        let mut reader = EntryReader::default();
        assert!(reader.is_empty());
        let mut buf = Vec::new();
        assert_eq!(reader.read_to_end(&mut buf).unwrap(), 0);
    }

    #[test]
    fn test_seek_and_reread() {
        let mut reader = EntryReader::new(b"abcdef".to_vec());
        let mut first = [0u8; 3];
        reader.read_exact(&mut first).unwrap();
        assert_eq!(&first, b"abc");

        reader.seek(SeekFrom::Start(1)).unwrap();
        let mut rest = String::new();
        reader.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "bcdef");
    }

    #[test]
    fn test_into_inner() {
        let reader = EntryReader::new(vec![1, 2, 3]);
        assert_eq!(reader.len(), 3);
        assert_eq!(reader.into_inner(), vec![1, 2, 3]);
    }
}
