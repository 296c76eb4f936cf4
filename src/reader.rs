//! Streaming extract reader.
//!
//! EBird extracts are large (tens of gigabytes compressed), so the reader
//! never materializes the file: it decompresses on the fly and yields one
//! record per row. Rows that fail to parse are surfaced as errors so the
//! caller can count and skip them without aborting the run.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::record::EbirdRecord;

/// Iterator over the records of a gzipped, tab-delimited EBird extract.
pub struct ExtractReader<R: Read> {
    records: csv::DeserializeRecordsIntoIter<GzDecoder<R>, EbirdRecord>,
}

impl ExtractReader<File> {
    /// Opens the extract at `path`.
    pub fn open(path: &Path) -> io::Result<Self> {
        Ok(Self::from_gzipped(File::open(path)?))
    }
}

impl<R: Read> ExtractReader<R> {
    /// Wraps any gzipped byte source. The first row must be the extract's
    /// header line.
    pub fn from_gzipped(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .from_reader(GzDecoder::new(source));
        ExtractReader {
            records: reader.into_deserialize(),
        }
    }
}

impl<R: Read> Iterator for ExtractReader<R> {
    type Item = Result<EbirdRecord, csv::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.records.next()
    }
}
