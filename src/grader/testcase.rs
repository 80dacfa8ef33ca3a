use super::errors::GraderError;

use std::fs;
use std::path::Path;
use std::str::FromStr;

/// One grading scenario, parsed from the line-oriented test-case format.
/// Task 3 never reads probabilities from the file; they are derived from the
/// horizon at grade time.
#[derive(Clone, Debug, PartialEq)]
pub enum TestCase {
    Task1 {
        horizon: u64,
        probs: Vec<f64>,
        ucb: f64,
        kl_ucb: f64,
        thompson: f64,
    },
    Task2 {
        horizon: u64,
        probs: Vec<f64>,
        batch_size: usize,
        reference: f64,
    },
    Task3 {
        horizon: u64,
        reference: f64,
    },
}

impl TestCase {
    pub fn load(path: &Path) -> Result<Self, GraderError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content).map_err(|reason| GraderError::Malformed {
            path: path.to_path_buf(),
            reason,
        })
    }

    pub fn task(&self) -> u8 {
        match self {
            Self::Task1 { .. } => 1,
            Self::Task2 { .. } => 2,
            Self::Task3 { .. } => 3,
        }
    }

    fn parse(content: &str) -> Result<Self, String> {
        let lines: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let task: u8 = parse_field(field(&lines, 0, "task identifier")?, "task identifier")?;
        let horizon: u64 = parse_field(field(&lines, 1, "horizon")?, "horizon")?;
        if horizon == 0 {
            return Err("horizon must be positive".to_owned());
        }

        let testcase = match task {
            1 => {
                expect_lines(&lines, 4)?;
                let probs = parse_floats(lines[2], "arm probability")?;
                let references = parse_floats(lines[3], "reference regret")?;
                let [ucb, kl_ucb, thompson]: [f64; 3] = references
                    .try_into()
                    .map_err(|refs: Vec<f64>| {
                        format!("expected 3 reference regrets, found {}", refs.len())
                    })?;

                Self::Task1 {
                    horizon,
                    probs,
                    ucb,
                    kl_ucb,
                    thompson,
                }
            }
            2 => {
                expect_lines(&lines, 5)?;
                let probs = parse_floats(lines[2], "arm probability")?;
                let batch_size = parse_field(lines[3], "batch size")?;
                let reference = parse_field(lines[4], "reference regret")?;

                Self::Task2 {
                    horizon,
                    probs,
                    batch_size,
                    reference,
                }
            }
            3 => {
                expect_lines(&lines, 3)?;
                let reference = parse_field(lines[2], "reference regret")?;

                Self::Task3 { horizon, reference }
            }
            other => return Err(format!("unknown task identifier {other}")),
        };

        Ok(testcase)
    }
}

fn field<'a>(lines: &[&'a str], index: usize, what: &str) -> Result<&'a str, String> {
    lines
        .get(index)
        .copied()
        .ok_or_else(|| format!("missing {what} (line {})", index + 1))
}

fn expect_lines(lines: &[&str], count: usize) -> Result<(), String> {
    if lines.len() != count {
        return Err(format!("expected {count} lines, found {}", lines.len()));
    }
    Ok(())
}

fn parse_field<T: FromStr>(raw: &str, what: &str) -> Result<T, String> {
    raw.parse()
        .map_err(|_| format!("invalid {what}: '{raw}'"))
}

fn parse_floats(raw: &str, what: &str) -> Result<Vec<f64>, String> {
    raw.split_whitespace()
        .map(|token| parse_field(token, what))
        .collect()
}
