//! Bounded trajectory history with flat-file export
//!
//! A `Recorder` keeps the most recent `capacity` vectors pushed into it,
//! oldest first. It starts out full of zero vectors, so the first `capacity`
//! pushes each evict one of those zeros. The export skips exact zero rows by
//! default to hide whatever pre-fill is left.
//!
//! The export is plain text readable by generic table readers (e.g. R's
//! `read.table`):
//!
//! ```text
//! x y z
//! 0 1 2 3
//! 1 4 5 6
//! ```

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::ops::Index;
use std::path::Path;

use log::debug;

use crate::constants::DEFAULT_RECORDER_CAPACITY;
use crate::errors::{recorder_io, Result};
use crate::space::Space;

/// Column header written as the first line of every export
pub const HEADER: &str = "x y z";

/// Fixed-capacity FIFO history of `Space` samples
#[derive(Debug, Clone, PartialEq)]
pub struct Recorder {
    capacity: usize,
    data: VecDeque<Space>,
}

impl Recorder {
    /// Creates a recorder pre-filled with `capacity` zero vectors
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            data: VecDeque::from(vec![Space::ZERO; capacity]),
        }
    }

    /// Maximum number of samples retained
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Changes the capacity, evicting the oldest samples if now over it
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.evict_to(capacity);
    }

    /// Number of samples currently held
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True after `clear` (or with a zero capacity)
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Appends `sample` as the newest entry, evicting the oldest when full
    ///
    /// With a capacity of zero nothing is retained.
    pub fn push(&mut self, sample: Space) {
        if self.capacity == 0 {
            return;
        }
        self.evict_to(self.capacity - 1);
        self.data.push_back(sample);
    }

    /// Drops every sample, including the zero pre-fill
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Sample at `index`, oldest first
    pub fn get(&self, index: usize) -> Option<&Space> {
        self.data.get(index)
    }

    /// Iterates oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &Space> + '_ {
        self.data.iter()
    }

    /// Writes the history to `path`, replacing any existing file
    ///
    /// See [`Recorder::write_to`] for the format. Returns the number of body
    /// rows written, not counting the header.
    ///
    /// # Errors
    ///
    /// `RecorderIo` if the file cannot be created or written.
    pub fn write<P: AsRef<Path>>(&self, path: P, skip_zero: bool) -> Result<usize> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| recorder_io(path, e))?;
        let mut writer = BufWriter::new(file);

        let rows = self
            .write_to(&mut writer, skip_zero)
            .and_then(|rows| writer.flush().map(|_| rows))
            .map_err(|e| recorder_io(path, e))?;

        debug!("Wrote {} of {} samples to {}", rows, self.len(), path.display());
        Ok(rows)
    }

    /// Writes the header line then one `INDEX X Y Z` line per sample
    ///
    /// `INDEX` is the sample's position in the history. With `skip_zero`,
    /// samples exactly equal to the zero vector are left out but keep their
    /// index slot, and the header is still written. Returns the number of
    /// body rows written.
    pub fn write_to<W: Write>(&self, writer: &mut W, skip_zero: bool) -> std::io::Result<usize> {
        writeln!(writer, "{}", HEADER)?;

        let mut rows = 0;
        for (index, sample) in self.data.iter().enumerate() {
            // skip leftover pre-fill
            if skip_zero && *sample == Space::ZERO {
                continue;
            }
            writeln!(writer, "{} {} {} {}", index, sample.x, sample.y, sample.z)?;
            rows += 1;
        }
        Ok(rows)
    }

    fn evict_to(&mut self, limit: usize) {
        while self.data.len() > limit {
            self.data.pop_front();
        }
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new(DEFAULT_RECORDER_CAPACITY)
    }
}

/// Panics when `index` is out of range
impl Index<usize> for Recorder {
    type Output = Space;

    fn index(&self, index: usize) -> &Space {
        match self.data.get(index) {
            Some(sample) => sample,
            None => panic!(
                "Recorder index {} out of range for {} samples",
                index,
                self.data.len()
            ),
        }
    }
}
