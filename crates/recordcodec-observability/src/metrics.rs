//! RecordCodec metrics definitions.
//!
//! All metrics use OpenTelemetry conventions. Without an installed meter
//! provider the global meter is a no-op, so the handle is always safe to use.

use opentelemetry::{
    metrics::{Counter, Histogram, Meter},
    KeyValue,
};
use recordcodec_core::{BatchDecodeError, DecodeError, DecodedRecord};

/// Central metrics handle for RecordCodec.
#[derive(Clone)]
pub struct RecordCodecMetrics {
    pub records_decoded: Counter<u64>,
    pub fields_soft_failed: Counter<u64>,
    pub batch_errors: Counter<u64>,
    pub batch_size: Histogram<u64>,
    pub decode_latency_ms: Histogram<f64>,
}

impl RecordCodecMetrics {
    pub fn new(meter: &Meter) -> Self {
        Self {
            records_decoded: meter
                .u64_counter("recordcodec.records_decoded")
                .with_description("Total number of decoded records")
                .init(),
            fields_soft_failed: meter
                .u64_counter("recordcodec.fields_soft_failed")
                .with_description("Fields whose bytes could not be decoded and fell back to raw text")
                .init(),
            batch_errors: meter
                .u64_counter("recordcodec.batch_errors")
                .with_description("Batches aborted by a fatal decode error")
                .init(),
            batch_size: meter
                .u64_histogram("recordcodec.batch_size")
                .with_description("Number of records in a batch decode request")
                .init(),
            decode_latency_ms: meter
                .f64_histogram("recordcodec.decode_latency_ms")
                .with_description("Time to decode one batch in milliseconds")
                .init(),
        }
    }

    /// Handle backed by the global meter provider.
    pub fn global() -> Self {
        Self::new(&opentelemetry::global::meter("recordcodec"))
    }

    /// Count a decoded record and each of its soft-failed fields.
    pub fn record_decoded(&self, layout: &str, record: &DecodedRecord) {
        let layout_kv = KeyValue::new("layout", layout.to_string());
        self.records_decoded.add(1, &[layout_kv.clone()]);
        for field in record.soft_failures() {
            self.fields_soft_failed.add(
                1,
                &[
                    layout_kv.clone(),
                    KeyValue::new("field_type", field.spec().field_type().layout_name()),
                ],
            );
        }
    }

    pub fn record_batch(&self, layout: &str, records: usize, elapsed_ms: f64) {
        let kv = [KeyValue::new("layout", layout.to_string())];
        self.batch_size.record(records as u64, &kv);
        self.decode_latency_ms.record(elapsed_ms, &kv);
    }

    pub fn record_error(&self, layout: &str, error: &BatchDecodeError) {
        self.batch_errors.add(
            1,
            &[
                KeyValue::new("layout", layout.to_string()),
                KeyValue::new("error_type", error_kind(error)),
            ],
        );
    }
}

/// Short, stable label for a batch failure.
pub fn error_kind(error: &BatchDecodeError) -> &'static str {
    let inner = match error {
        BatchDecodeError::Input(e) | BatchDecodeError::RecordFailed { source: e, .. } => e,
    };
    match inner {
        DecodeError::FieldOutOfBounds { .. } => "field_out_of_bounds",
        DecodeError::NoFields => "no_fields",
        DecodeError::UnknownField { .. } => "unknown_field",
        DecodeError::IndexOutOfRange { .. } => "index_out_of_range",
        DecodeError::DataShorterThanLine { .. } => "data_shorter_than_line",
        DecodeError::LineLengthMismatch { .. } => "line_length_mismatch",
        DecodeError::PartialLine { .. } => "partial_line",
    }
}
