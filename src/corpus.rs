//! Stream datums out of the PDTB2 CSV export
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use csv;
use datum::Datum;
use errors::*;

/// Conventional name of the corpus export
pub const DEFAULT_CORPUS: &str = "pdtb2.csv";

/// Rows between progress messages from `log_progress`
pub const PROGRESS_EVERY: usize = 5000;

/// Progress observer for `iter_data_with_progress` that logs every few thousand rows
pub fn log_progress(seen: usize) {
    if seen % PROGRESS_EVERY == 0 {
        info!("Read {} datums", seen);
    }
}

/// Reads the corpus one relation at a time
pub struct CorpusReader<R> {
    reader: csv::Reader<R>,
}

impl CorpusReader<File> {
    /// Open the corpus export at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())
            .map_err(|err| Error::MissingFile("corpus CSV file", Some(err)))?;
        Ok(CorpusReader::from_reader(file))
    }
}

impl<R: Read> CorpusReader<R> {
    /// Read a corpus that is already open, header row first
    pub fn from_reader(input: R) -> Self {
        CorpusReader {
            reader: csv::ReaderBuilder::new()
                .has_headers(true)
                .from_reader(input),
        }
    }

    /// Every datum, in corpus order
    pub fn iter_data(self) -> Data<R> {
        Data {
            records: self.reader.into_deserialize(),
            seen: 0,
            progress: None,
        }
    }

    /// Like `iter_data`, but `progress` hears how many rows have been read after each one
    pub fn iter_data_with_progress<F>(self, progress: F) -> Data<R>
        where F: FnMut(usize) + 'static {
        Data {
            records: self.reader.into_deserialize(),
            seen: 0,
            progress: Some(Box::new(progress)),
        }
    }
}

/// Iterator over the rows of the corpus
///
/// A row that can't be read comes out as an `Err` and iteration carries on after it, so callers
/// choose between stopping at the first bad row (`?`) and skipping it.
pub struct Data<R> {
    records: csv::DeserializeRecordsIntoIter<R, Datum>,
    seen: usize,
    progress: Option<Box<dyn FnMut(usize)>>,
}

impl<R> Data<R> {
    /// Rows read so far
    pub fn seen(&self) -> usize {
        self.seen
    }
}

impl<R: Read> Iterator for Data<R> {
    type Item = Result<Datum>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.records.next()?;
        self.seen += 1;
        if let Some(ref mut progress) = self.progress {
            progress(self.seen);
        }
        Some(row.map_err(Error::from))
    }
}

impl<R> fmt::Debug for Data<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Data")
            .field("seen", &self.seen)
            .field("progress", &self.progress.is_some())
            .finish()
    }
}
