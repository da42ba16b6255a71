//! Flat text snapshots of the body collection.
//!
//! ```text
//! <size_enclosure> <time_step> <body_count>
//! <pos_x> <pos_y> <pos_z> <speed_x> <speed_y> <speed_z> <mass>
//! ...
//! ```
//!
//! Reals are written with three decimals. One snapshot is taken before the
//! first tick and one after the last.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::simulation::params::Parameters;
use crate::simulation::states::System;

/// Default name of the snapshot written before the first tick
pub const INIT_FILE: &str = "init_config.txt";
/// Default name of the snapshot written after the last tick
pub const FINAL_FILE: &str = "final_config.txt";

const ROW_FIELDS: usize = 7;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("snapshot is empty")]
    MissingHeader,

    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: cannot parse `{field}`")]
    BadField { line: usize, field: String },

    #[error("header declares {declared} bodies, found {found}")]
    CountMismatch { declared: usize, found: usize },
}

/// One persisted body: position, velocity, mass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotRow {
    pub pos: [f64; 3],
    pub speed: [f64; 3],
    pub mass: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub size_enclosure: f64,
    pub time_step: f64,
    pub rows: Vec<SnapshotRow>,
}

impl Snapshot {
    /// Copy the persisted fields of every live body
    pub fn capture(params: &Parameters, sys: &System) -> Self {
        let rows = sys
            .bodies
            .iter()
            .map(|b| SnapshotRow {
                pos: [b.x.x, b.x.y, b.x.z],
                speed: [b.v.x, b.v.y, b.v.z],
                mass: b.m,
            })
            .collect();

        Self {
            size_enclosure: params.size_enclosure,
            time_step: params.time_step,
            rows,
        }
    }

    pub fn body_count(&self) -> usize {
        self.rows.len()
    }

    pub fn write_to<W: Write>(&self, mut w: W) -> io::Result<()> {
        writeln!(
            w,
            "{:.3} {:.3} {}",
            self.size_enclosure,
            self.time_step,
            self.rows.len()
        )?;
        for r in &self.rows {
            writeln!(
                w,
                "{:.3} {:.3} {:.3} {:.3} {:.3} {:.3} {:.3}",
                r.pos[0], r.pos[1], r.pos[2], r.speed[0], r.speed[1], r.speed[2], r.mass
            )?;
        }
        w.flush()
    }

    /// Render to a string, exactly as [`Snapshot::save`] writes it
    pub fn to_text(&self) -> String {
        let mut buf = Vec::new();
        // writing into a Vec cannot fail
        let _ = self.write_to(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))
    }

    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse snapshot text. Values come back rounded to the written precision.
    pub fn parse(text: &str) -> Result<Self, SnapshotError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l))
            .filter(|(_, l)| !l.trim().is_empty());

        let (line, header) = lines.next().ok_or(SnapshotError::MissingHeader)?;
        let header = fields(line, header, 3)?;
        if header[2].fract() != 0.0 || header[2] < 0.0 {
            return Err(SnapshotError::BadField {
                line,
                field: header[2].to_string(),
            });
        }
        let declared = header[2] as usize;

        let rows = lines
            .map(|(line, l)| {
                let f = fields(line, l, ROW_FIELDS)?;
                Ok(SnapshotRow {
                    pos: [f[0], f[1], f[2]],
                    speed: [f[3], f[4], f[5]],
                    mass: f[6],
                })
            })
            .collect::<Result<Vec<_>, SnapshotError>>()?;

        if rows.len() != declared {
            return Err(SnapshotError::CountMismatch {
                declared,
                found: rows.len(),
            });
        }

        Ok(Self {
            size_enclosure: header[0],
            time_step: header[1],
            rows,
        })
    }
}

fn fields(line: usize, text: &str, expected: usize) -> Result<Vec<f64>, SnapshotError> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    if parts.len() != expected {
        return Err(SnapshotError::FieldCount {
            line,
            expected,
            found: parts.len(),
        });
    }
    parts
        .into_iter()
        .map(|p| {
            p.parse::<f64>().map_err(|_| SnapshotError::BadField {
                line,
                field: p.to_string(),
            })
        })
        .collect()
}
