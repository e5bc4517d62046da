use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use crate::codec::CodecError;
use tracing::{debug, error};

/// Read exactly `len` bytes or fail with `TruncatedInput`
pub fn read_block<R: Read>(reader: &mut R, len: usize) -> Result<Vec<u8>, CodecError> {
    let mut buf = Vec::with_capacity(len);
    reader.by_ref().take(len as u64).read_to_end(&mut buf)?;

    if buf.len() < len {
        error!("Short read: {} of {} bytes", buf.len(), len);
        return Err(CodecError::TruncatedInput {
            expected: len,
            actual: buf.len(),
        });
    }

    Ok(buf)
}

/// Open `path` read-only and read one block starting at `offset`
pub fn open_block(path: impl AsRef<Path>, offset: u64, len: usize) -> Result<Vec<u8>, CodecError> {
    let path = path.as_ref();
    let mut file = File::open(path)?;

    if offset > 0 {
        file.seek(SeekFrom::Start(offset))?;
    }

    debug!("Reading {} bytes from {:?} at offset {}", len, path, offset);
    read_block(&mut file, len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn reads_exact_block() {
        let mut src = Cursor::new(vec![1u8, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(read_block(&mut src, 8).unwrap(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn short_source_is_truncated() {
        let mut src = Cursor::new(vec![0u8, 0, 0, 0x96]);
        match read_block(&mut src, 8) {
            Err(CodecError::TruncatedInput { expected, actual }) => {
                assert_eq!(expected, 8);
                assert_eq!(actual, 4);
            }
            other => panic!("expected TruncatedInput, got {:?}", other),
        }
    }

    #[test]
    fn reads_file_at_offset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xAA, 0xBB, 0, 0, 0, 0, 0, 0, 0, 0x96]).unwrap();

        let block = open_block(file.path(), 2, 8).unwrap();
        assert_eq!(block, vec![0, 0, 0, 0, 0, 0, 0, 0x96]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = open_block(dir.path().join("nope.bin"), 0, 8);
        assert!(matches!(result, Err(CodecError::Io(_))));
    }
}
