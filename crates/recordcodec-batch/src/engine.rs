//! `BatchEngine` — splits a buffer into lines and decodes them, chunk by
//! chunk, sequentially or across Rayon workers.

use crate::split::{check_single_line, record_count};
use rayon::prelude::*;
use recordcodec_core::{
    decoder::{FieldDecoder, ProgressCallback},
    error::{BatchDecodeError, DecodeError},
    record::DecodedRecord,
    spec::LineSpec,
};
use recordcodec_ebcdic::EbcdicDecoder;
use recordcodec_observability::RecordCodecMetrics;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Default number of records decoded between progress reports.
pub const DEFAULT_CHUNK_SIZE: usize = 10_000;

/// Batch decode engine.
///
/// Stateless between calls: every `decode_*` call validates its own input
/// and either returns every record or none of them.
#[derive(Clone)]
pub struct BatchEngine {
    decoder: Arc<dyn FieldDecoder>,
    parallel: bool,
    chunk_size: usize,
    progress_interval: usize,
    on_progress: Option<Arc<dyn ProgressCallback>>,
    metrics: Option<RecordCodecMetrics>,
}

impl BatchEngine {
    pub fn new(decoder: Arc<dyn FieldDecoder>) -> Self {
        Self {
            decoder,
            parallel: false,
            chunk_size: DEFAULT_CHUNK_SIZE,
            progress_interval: 1,
            on_progress: None,
            metrics: None,
        }
    }

    /// Decode records across Rayon workers. Output order is unchanged.
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Max records per chunk. Progress is reported between chunks.
    pub fn chunk_size(mut self, n: usize) -> Self {
        self.chunk_size = n.max(1);
        self
    }

    /// Minimum number of records between two progress reports. The final
    /// report is always sent.
    pub fn progress_interval(mut self, n: usize) -> Self {
        self.progress_interval = n.max(1);
        self
    }

    pub fn on_progress<F: ProgressCallback + 'static>(mut self, f: F) -> Self {
        self.on_progress = Some(Arc::new(f));
        self
    }

    pub fn metrics(mut self, metrics: RecordCodecMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Decode every line in `buffer`.
    ///
    /// The first fatal error (lowest record index) aborts the batch and no
    /// records are returned. An empty buffer yields an empty `Vec`.
    pub fn decode_all(
        &self,
        buffer: &[u8],
        line: &Arc<LineSpec>,
    ) -> Result<Vec<DecodedRecord>, BatchDecodeError> {
        let started = Instant::now();
        let result = self.decode_all_inner(buffer, line);
        let layout = line.display_name();
        match &result {
            Ok(records) => {
                let soft = records.iter().filter(|r| r.has_soft_failures()).count();
                if soft > 0 {
                    warn!(layout, records_with_soft_failures = soft, "soft field failures in batch");
                }
                if let Some(m) = &self.metrics {
                    for record in records {
                        m.record_decoded(layout, record);
                    }
                    m.record_batch(layout, records.len(), started.elapsed().as_secs_f64() * 1000.0);
                }
                info!(layout, decoded = records.len(), "BatchEngine: complete");
            }
            Err(e) => {
                warn!(layout, error = %e, "BatchEngine: batch aborted");
                if let Some(m) = &self.metrics {
                    m.record_error(layout, e);
                }
            }
        }
        result
    }

    fn decode_all_inner(
        &self,
        buffer: &[u8],
        line: &Arc<LineSpec>,
    ) -> Result<Vec<DecodedRecord>, BatchDecodeError> {
        let total = record_count(buffer, line)?;
        if total == 0 {
            return Ok(Vec::new());
        }
        let line_size = line.line_size();
        info!(
            layout = line.display_name(),
            total,
            line_size,
            parallel = self.parallel,
            chunk_size = self.chunk_size,
            "BatchEngine: decoding"
        );

        let mut records = Vec::with_capacity(total);
        let mut last_reported = 0usize;

        let chunk_bytes = line_size.saturating_mul(self.chunk_size);
        for (chunk_no, chunk) in buffer.chunks(chunk_bytes).enumerate() {
            let offset = chunk_no * self.chunk_size;
            let decoded = if self.parallel {
                self.decode_chunk_parallel(chunk, line, offset)?
            } else {
                self.decode_chunk(chunk, line, offset)?
            };
            debug!(chunk = chunk_no, offset, records = decoded.len(), "chunk decoded");
            records.extend(decoded);

            let done = records.len();
            if let Some(cb) = &self.on_progress {
                if done - last_reported >= self.progress_interval || done == total {
                    cb.on_progress(done, total);
                    last_reported = done;
                }
            }
        }
        Ok(records)
    }

    fn decode_chunk(
        &self,
        chunk: &[u8],
        line: &Arc<LineSpec>,
        offset: usize,
    ) -> Result<Vec<DecodedRecord>, BatchDecodeError> {
        chunk
            .chunks_exact(line.line_size())
            .enumerate()
            .map(|(i, bytes)| self.decode_at(bytes, line, offset + i))
            .collect()
    }

    fn decode_chunk_parallel(
        &self,
        chunk: &[u8],
        line: &Arc<LineSpec>,
        offset: usize,
    ) -> Result<Vec<DecodedRecord>, BatchDecodeError> {
        // Gather every outcome first so the reported failure is always the
        // lowest index, independent of worker scheduling.
        let outcomes: Vec<Result<DecodedRecord, BatchDecodeError>> = chunk
            .par_chunks_exact(line.line_size())
            .enumerate()
            .map(|(i, bytes)| self.decode_at(bytes, line, offset + i))
            .collect();
        outcomes.into_iter().collect()
    }

    fn decode_at(
        &self,
        bytes: &[u8],
        line: &Arc<LineSpec>,
        index: usize,
    ) -> Result<DecodedRecord, BatchDecodeError> {
        self.decoder
            .decode_record(bytes, line)
            .map_err(|source| BatchDecodeError::RecordFailed { index, source })
    }

    /// Decode exactly one line.
    pub fn decode_one(
        &self,
        bytes: &[u8],
        line: &Arc<LineSpec>,
    ) -> Result<DecodedRecord, BatchDecodeError> {
        check_single_line(bytes, line)?;
        let record = self.decode_at(bytes, line, 0)?;
        if let Some(m) = &self.metrics {
            m.record_decoded(line.display_name(), &record);
        }
        Ok(record)
    }

    /// Look up a field value across a batch, by record index and field name.
    pub fn field_text<'a>(
        records: &'a [DecodedRecord],
        index: usize,
        field: &str,
    ) -> Result<&'a str, DecodeError> {
        records
            .get(index)
            .ok_or(DecodeError::IndexOutOfRange {
                index,
                len: records.len(),
            })?
            .get(field)
    }
}

impl Default for BatchEngine {
    /// Sequential engine over the CP037 [`EbcdicDecoder`].
    fn default() -> Self {
        Self::new(Arc::new(EbcdicDecoder::new()))
    }
}
