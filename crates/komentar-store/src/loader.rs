//! Dataset loading from CSV or Parquet through Arrow.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Array, ArrayRef};
use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::record_batch::{RecordBatch, RecordBatchReader};
use arrow::util::display::ArrayFormatter;
use komentar_core::{CommentRecord, SentimentLabel, columns};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use tracing::{debug, info};

use crate::timestamp::parse_timestamp;
use crate::{Dataset, StoreError};

impl Dataset {
    /// Load the dataset from a `.parquet` file or, for any other extension,
    /// a CSV file with a header row.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Err(StoreError::DatasetNotFound(path.to_path_buf()));
        }

        let is_parquet = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("parquet"));
        let (schema, batches) = if is_parquet {
            read_parquet(path)?
        } else {
            read_csv(path)?
        };

        let dataset = Self::from_batches(&schema, &batches)?;
        info!(
            path = %path.display(),
            records = dataset.len(),
            has_platform = dataset.has_platform(),
            "loaded comment dataset"
        );
        Ok(dataset)
    }

    /// Build a Dataset from Arrow batches sharing `schema`.
    ///
    /// Expects columns `timestamp`, `label`, `komentar` (or `text` /
    /// `comment`) and `emosi` (or `emotion`); `platform` is optional.
    /// Columns of any Arrow type are accepted and read through their display
    /// form.
    pub fn from_batches(schema: &Schema, batches: &[RecordBatch]) -> Result<Self, StoreError> {
        let text_name = resolve(schema, columns::TEXT_ALIASES)
            .ok_or(StoreError::MissingColumn(columns::TEXT))?;
        let emotion_name = resolve(schema, columns::EMOTION_ALIASES)
            .ok_or(StoreError::MissingColumn(columns::EMOTION))?;
        for required in [columns::TIMESTAMP, columns::LABEL] {
            if schema.field_with_name(required).is_err() {
                return Err(StoreError::MissingColumn(required));
            }
        }
        let has_platform = schema.field_with_name(columns::PLATFORM).is_ok();

        let mut records = Vec::with_capacity(batches.iter().map(|b| b.num_rows()).sum());
        let mut row_offset = 0usize;

        for batch in batches {
            let ts_col = column(batch, columns::TIMESTAMP)?;
            let label_col = column(batch, columns::LABEL)?;
            let text_col = column(batch, text_name)?;
            let emotion_col = column(batch, emotion_name)?;
            let platform_col = has_platform
                .then(|| column(batch, columns::PLATFORM))
                .transpose()?;

            let ts = TextColumn::new(&ts_col)?;
            let label = TextColumn::new(&label_col)?;
            let text = TextColumn::new(&text_col)?;
            let emotion = TextColumn::new(&emotion_col)?;
            let platform = platform_col.as_ref().map(TextColumn::new).transpose()?;

            for i in 0..batch.num_rows() {
                let row = row_offset + i;

                let raw_ts = ts.get(i).unwrap_or_default();
                let timestamp =
                    parse_timestamp(&raw_ts).ok_or_else(|| StoreError::InvalidTimestamp {
                        row,
                        value: raw_ts.clone(),
                    })?;

                let raw_label = label.get(i).unwrap_or_default();
                let sentiment = raw_label
                    .parse::<SentimentLabel>()
                    .map_err(|_| StoreError::InvalidLabel {
                        row,
                        value: raw_label.clone(),
                    })?;

                records.push(CommentRecord::new(
                    text.get(i),
                    timestamp,
                    sentiment,
                    emotion.get(i),
                    platform.as_ref().and_then(|p| p.get(i)),
                ));
            }
            row_offset += batch.num_rows();
        }

        debug!(rows = row_offset, text_column = text_name, "converted record batches");
        Ok(Self::new(records, has_platform))
    }
}

/// Read a CSV file (with header) into Arrow RecordBatches.
///
/// Every column is read as Utf8: cell formats in comment exports are
/// inconsistent, so values are parsed after loading.
pub fn read_csv(path: &Path) -> Result<(SchemaRef, Vec<RecordBatch>), StoreError> {
    let format = Format::default().with_header(true);
    let (inferred, _) = format.infer_schema(File::open(path)?, Some(1))?;
    let fields: Vec<Field> = inferred
        .fields()
        .iter()
        .map(|f| Field::new(f.name(), DataType::Utf8, true))
        .collect();
    let schema: SchemaRef = Arc::new(Schema::new(fields));

    let reader = ReaderBuilder::new(Arc::clone(&schema))
        .with_header(true)
        .build(File::open(path)?)?;
    let batches: Result<Vec<RecordBatch>, _> = reader.collect();
    Ok((schema, batches?))
}

/// Read a Parquet file into Arrow RecordBatches.
pub fn read_parquet(path: &Path) -> Result<(SchemaRef, Vec<RecordBatch>), StoreError> {
    let file = File::open(path)?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;
    let schema = reader.schema();
    let batches: Result<Vec<RecordBatch>, _> = reader.collect();
    Ok((schema, batches?))
}

// ── Arrow extraction helpers ──

fn resolve(schema: &Schema, candidates: &[&'static str]) -> Option<&'static str> {
    candidates
        .iter()
        .copied()
        .find(|name| schema.field_with_name(name).is_ok())
}

fn column(batch: &RecordBatch, name: &'static str) -> Result<ArrayRef, StoreError> {
    batch
        .column_by_name(name)
        .cloned()
        .ok_or(StoreError::MissingColumn(name))
}

/// A column read through Arrow's display formatter, whatever its type.
struct TextColumn<'a> {
    array: &'a dyn Array,
    formatter: ArrayFormatter<'a>,
}

impl<'a> TextColumn<'a> {
    fn new(array: &'a ArrayRef) -> Result<Self, StoreError> {
        let formatter = ArrayFormatter::try_new(array.as_ref(), &Default::default())?;
        Ok(Self {
            array: array.as_ref(),
            formatter,
        })
    }

    /// Cell as text; nulls and empty strings are `None`.
    fn get(&self, row: usize) -> Option<String> {
        if self.array.is_null(row) {
            return None;
        }
        let value = self.formatter.value(row).to_string();
        (!value.is_empty()).then_some(value)
    }
}
