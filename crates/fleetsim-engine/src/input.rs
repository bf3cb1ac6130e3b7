//! Schedule ingestion
//!
//! Parses the schedule file format: task length on the first line, server
//! capacity on the second, then one arrival count per tick. Validation
//! happens here so the balancer never sees malformed data.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Validated simulation input: task length, per-server capacity, and the
/// arrival count for each tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleInput {
    /// Ticks every user's task takes in this run.
    pub ttask: u32,
    /// Maximum concurrent users per server in this run.
    pub umax: usize,
    /// Number of users arriving on each tick, front first.
    pub arrivals: Vec<u32>,
}

impl ScheduleInput {
    /// Load a schedule from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse a schedule from a buffered reader. Blank lines are skipped;
    /// every other line must parse as an unsigned integer.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut values = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            let value: u32 = text.parse().map_err(|_| ScheduleError::InvalidInteger {
                line: idx + 1,
                text: text.to_string(),
            })?;
            values.push(value);
        }

        let mut values = values.into_iter();
        let ttask = values.next().ok_or(ScheduleError::MissingField("ttask"))?;
        let umax = values.next().ok_or(ScheduleError::MissingField("umax"))?;
        if umax == 0 {
            return Err(ScheduleError::ZeroCapacity);
        }

        Ok(ScheduleInput {
            ttask,
            umax: umax as usize,
            arrivals: values.collect(),
        })
    }

    /// Render back into the schedule file format, one value per line.
    pub fn to_schedule_file_string(&self) -> String {
        let mut lines = Vec::with_capacity(self.arrivals.len() + 2);
        lines.push(self.ttask.to_string());
        lines.push(self.umax.to_string());
        lines.extend(self.arrivals.iter().map(|a| a.to_string()));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_well_formed_schedule() {
        let text = "4\n2\n1\n3\n0\n1\n0\n1\n";
        let input = ScheduleInput::from_reader(text.as_bytes()).unwrap();

        assert_eq!(input.ttask, 4);
        assert_eq!(input.umax, 2);
        assert_eq!(input.arrivals, vec![1, 3, 0, 1, 0, 1]);
    }

    #[test]
    fn test_skips_blank_lines_and_whitespace() {
        let text = "4\n\n 2 \n1\n\n";
        let input = ScheduleInput::from_reader(text.as_bytes()).unwrap();

        assert_eq!(input.ttask, 4);
        assert_eq!(input.umax, 2);
        assert_eq!(input.arrivals, vec![1]);
    }

    #[test]
    fn test_empty_arrivals_is_valid() {
        let input = ScheduleInput::from_reader("4\n2\n".as_bytes()).unwrap();
        assert!(input.arrivals.is_empty());
    }

    #[test]
    fn test_missing_capacity_line() {
        let err = ScheduleInput::from_reader("4\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ScheduleError::MissingField("umax")));
    }

    #[test]
    fn test_missing_task_length_line() {
        let err = ScheduleInput::from_reader("".as_bytes()).unwrap_err();
        assert!(matches!(err, ScheduleError::MissingField("ttask")));
    }

    #[test]
    fn test_rejects_non_integer_line() {
        let err = ScheduleInput::from_reader("4\ntwo\n1\n".as_bytes()).unwrap_err();
        match err {
            ScheduleError::InvalidInteger { line, text } => {
                assert_eq!(line, 2);
                assert_eq!(text, "two");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_negative_values() {
        let err = ScheduleInput::from_reader("4\n2\n-1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidInteger { line: 3, .. }));
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let err = ScheduleInput::from_reader("4\n0\n1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ScheduleError::ZeroCapacity));
    }

    #[test]
    fn test_file_string_round_trips() {
        let input = ScheduleInput {
            ttask: 4,
            umax: 2,
            arrivals: vec![1, 3, 0, 1],
        };

        let text = input.to_schedule_file_string();
        let parsed = ScheduleInput::from_reader(text.as_bytes()).unwrap();
        assert_eq!(parsed, input);
    }
}
