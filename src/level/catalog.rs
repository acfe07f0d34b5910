use std::io::BufRead;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::consts::RECORD_SEPARATOR;
use crate::core::GameGrid;
use crate::error::{CatalogError, DecodeError};
use crate::level::definition::{LevelDefinition, RecordBuilder};

/// How a failing level source is reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecodeMode {
    /// Surface the failure as a `DecodeError` carrying the records read so far.
    #[default]
    Strict,
    /// Log the failure and keep the records read so far.
    Lenient,
}

/// Ordered, immutable list of levels decoded from one source.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCatalog {
    levels: Vec<LevelDefinition>,
}

impl LevelCatalog {
    /// Decodes in-memory level text. Reading a `&str` cannot fail.
    pub fn decode(text: &str) -> LevelCatalog {
        let mut decoder = CatalogDecoder::default();
        for line in text.lines() {
            decoder.push_line(line);
        }
        decoder.finish()
    }

    /// Decodes a level source line by line, reading it to the end exactly once.
    pub fn from_reader<R: BufRead>(reader: R, mode: DecodeMode) -> Result<LevelCatalog, DecodeError> {
        let mut decoder = CatalogDecoder::default();
        for (index, line) in reader.lines().enumerate() {
            match line {
                Ok(line) => decoder.push_line(&line),
                Err(source) => {
                    let line = index + 1;
                    let partial = decoder.abandon();
                    return match mode {
                        DecodeMode::Strict => Err(DecodeError::Read { line, source, partial }),
                        DecodeMode::Lenient => {
                            warn!(line, error = %source, levels = partial.len(), "level source unreadable, keeping levels read so far");
                            Ok(partial)
                        }
                    };
                }
            }
        }
        Ok(decoder.finish())
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LevelDefinition> {
        self.levels.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelDefinition> {
        self.levels.iter()
    }

    /// Materializes level `index` into a fresh grid.
    pub fn select_level(&self, index: usize) -> Result<GameGrid, CatalogError> {
        let level = self.levels.get(index).ok_or(CatalogError::OutOfRange {
            index,
            len: self.levels.len(),
        })?;
        debug!(index, width = level.width(), height = level.height(), "level selected");
        Ok(level.materialize())
    }
}

#[derive(Default)]
struct CatalogDecoder {
    levels: Vec<LevelDefinition>,
    record: RecordBuilder,
}

impl CatalogDecoder {
    fn push_line(&mut self, line: &str) {
        if line.starts_with(RECORD_SEPARATOR) {
            self.close_record();
        } else {
            self.record.add_line(line);
        }
    }

    fn close_record(&mut self) {
        let record = std::mem::take(&mut self.record);
        if let Some(level) = record.finish() {
            debug!(index = self.levels.len(), width = level.width(), height = level.height(), "level record decoded");
            self.levels.push(level);
        }
    }

    fn finish(mut self) -> LevelCatalog {
        self.close_record();
        LevelCatalog { levels: self.levels }
    }

    /// Drops the record in progress; only records closed before the failure survive.
    fn abandon(self) -> LevelCatalog {
        LevelCatalog { levels: self.levels }
    }
}
