use std::{
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::Path,
};

use serde::Deserialize;
use thiserror::Error;

use crate::landmark::{BodyLandmark, LandmarkSet};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("replay read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Produces one landmark set per frame. `Ok(None)` means the stream ended.
///
/// This is the seam towards the external detector: anything able to hand
/// over per-frame `(id, x, y)` landmarks can feed a session.
pub trait LandmarkSource {
    fn next_frame(&mut self) -> Result<Option<LandmarkSet>, SourceError>;
}

#[derive(Debug, Deserialize)]
struct LandmarkRecord {
    id: usize,
    x: i32,
    y: i32,
}

#[derive(Debug, Deserialize)]
struct FrameRecord {
    landmarks: Vec<LandmarkRecord>,
}

/// Replays recorded detector output from a JSON-lines file, one frame per
/// line: `{"landmarks":[{"id":0,"x":320,"y":100}, ...]}`.
///
/// Malformed lines and out-of-range landmark ids are dropped with a warning
/// instead of aborting the session; a frame's detection output is allowed
/// to be partial or empty.
pub struct ReplaySource {
    lines: Lines<BufReader<File>>,
    line_no: usize,
}

impl ReplaySource {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let file = File::open(path.as_ref())?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
            line_no: 0,
        })
    }
}

impl LandmarkSource for ReplaySource {
    fn next_frame(&mut self) -> Result<Option<LandmarkSet>, SourceError> {
        loop {
            let Some(line) = self.lines.next() else {
                return Ok(None);
            };
            let line = line?;
            self.line_no += 1;

            if line.trim().is_empty() {
                continue;
            }

            let record: FrameRecord = match serde_json::from_str(&line) {
                Ok(record) => record,
                Err(err) => {
                    log::warn!("skipping malformed frame on line {}: {err}", self.line_no);
                    continue;
                }
            };

            let line_no = self.line_no;
            let set = LandmarkSet::from_points(record.landmarks.iter().filter_map(|lm| {
                match BodyLandmark::from_index(lm.id) {
                    Some(id) => Some((id, lm.x, lm.y)),
                    None => {
                        log::warn!("line {line_no}: dropping unknown landmark id {}", lm.id);
                        None
                    }
                }
            }));
            return Ok(Some(set));
        }
    }
}
