//! Buffer length checks shared by the batch entry points.

use recordcodec_core::{DecodeError, LineSpec};

/// Number of whole records in `buffer`.
///
/// An empty buffer holds zero records. A non-empty buffer must hold at
/// least one line and be an exact multiple of the line size.
pub fn record_count(buffer: &[u8], line: &LineSpec) -> Result<usize, DecodeError> {
    if line.is_empty() {
        return Err(DecodeError::NoFields);
    }
    let line_size = line.line_size();
    let len = buffer.len();
    if len == 0 {
        return Ok(0);
    }
    if len < line_size {
        return Err(DecodeError::DataShorterThanLine { len, line_size });
    }
    if len % line_size != 0 {
        return Err(DecodeError::PartialLine { len, line_size });
    }
    Ok(len / line_size)
}

/// Check that `bytes` is exactly one line.
pub fn check_single_line(bytes: &[u8], line: &LineSpec) -> Result<(), DecodeError> {
    if line.is_empty() {
        return Err(DecodeError::NoFields);
    }
    let line_size = line.line_size();
    let len = bytes.len();
    if len < line_size {
        return Err(DecodeError::DataShorterThanLine { len, line_size });
    }
    if len != line_size {
        return Err(DecodeError::LineLengthMismatch { len, line_size });
    }
    Ok(())
}
