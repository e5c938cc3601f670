// src/core/training.rs
//
// FANN training file loading. The header names the state count and vector
// width; after it, non-blank lines alternate between an input vector (kept)
// and an output vector (ignored).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{SvaError, SvaResult};

const TRAINING_EXTENSION: &str = "train";

/// State vectors read from a training file
#[derive(Debug, Clone, Default)]
pub struct TrainingSet {
    /// Where the data came from (file path or `<stdin>`)
    pub source: String,
    /// State count announced by the header
    pub declared_states: usize,
    /// Bits per state vector announced by the header
    pub vector_width: usize,
    /// Input vectors in file order
    pub states: Vec<Vec<u8>>,
    /// Non-fatal problems found while loading
    pub warnings: Vec<String>,
}

impl TrainingSet {
    /// Load a training file from disk
    pub fn open(path: &Path) -> SvaResult<Self> {
        let file = File::open(path)?;
        let mut set = Self::parse(&path.display().to_string(), BufReader::new(file))?;

        let is_train = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext == TRAINING_EXTENSION)
            .unwrap_or(false);
        if !is_train {
            set.warnings
                .insert(0, format!("file extension is not '.{}'", TRAINING_EXTENSION));
        }

        Ok(set)
    }

    /// Parse training data from any line source
    pub fn parse<R: BufRead>(source: &str, reader: R) -> SvaResult<Self> {
        let mut lines = reader.lines().enumerate();

        let header = match lines.next() {
            Some((_, line)) => line?,
            None => return Err(SvaError::NotATrainingFile(source.to_string())),
        };
        let (declared_states, vector_width) = parse_header(&header)
            .ok_or_else(|| SvaError::NotATrainingFile(source.to_string()))?;

        let mut set = TrainingSet {
            source: source.to_string(),
            declared_states,
            vector_width,
            ..Default::default()
        };

        let mut is_input = true;
        for (idx, line) in lines {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            if is_input {
                let bits = parse_bits(&line, idx + 1)?;
                if bits.len() != vector_width {
                    set.warnings.push(format!(
                        "{} bits in input vector (expected {})",
                        bits.len(),
                        vector_width
                    ));
                }
                set.states.push(bits);
            }
            is_input = !is_input;
        }

        if set.states.len() != declared_states {
            set.warnings.push(format!(
                "header declares {} states but {} were read",
                declared_states,
                set.states.len()
            ));
        }

        log::debug!(
            "parsed {} states of {} bits from {}",
            set.states.len(),
            vector_width,
            source
        );

        Ok(set)
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn state(&self, index: usize) -> SvaResult<&[u8]> {
        self.states
            .get(index)
            .map(|s| s.as_slice())
            .ok_or(SvaError::NoSuchState {
                index,
                count: self.states.len(),
            })
    }

    /// How one bit position evolved across all states.
    ///
    /// States shorter than `bit` are skipped.
    pub fn value_history(&self, bit: usize) -> SvaResult<Vec<u8>> {
        if bit >= self.vector_width {
            return Err(SvaError::NoSuchBit {
                index: bit,
                width: self.vector_width,
            });
        }

        Ok(self
            .states
            .iter()
            .filter_map(|state| state.get(bit).copied())
            .collect())
    }

    pub fn summary(&self) -> String {
        format!(
            "read {} {}-bit state vectors",
            self.states.len(),
            self.vector_width
        )
    }
}

fn parse_header(line: &str) -> Option<(usize, usize)> {
    let fields = line
        .split_whitespace()
        .map(|f| f.parse::<usize>().ok())
        .collect::<Option<Vec<_>>>()?;

    match fields.as_slice() {
        [states, width, _outputs] => Some((*states, *width)),
        _ => None,
    }
}

fn parse_bits(line: &str, line_no: usize) -> SvaResult<Vec<u8>> {
    line.split_whitespace()
        .map(|token| match token {
            "0" => Ok(0),
            "1" => Ok(1),
            other => Err(SvaError::Parse {
                line: line_no,
                message: format!("'{}' is not a bit", other),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "3 4 1\n1 0 1 0\n1\n0 0 1 1\n0\n\n1 1 1 1\n1\n";

    #[test]
    fn test_parse_training_file() {
        let set = TrainingSet::parse("sample.train", Cursor::new(SAMPLE)).unwrap();
        assert_eq!(set.declared_states, 3);
        assert_eq!(set.vector_width, 4);
        assert_eq!(set.states, vec![vec![1, 0, 1, 0], vec![0, 0, 1, 1], vec![1, 1, 1, 1]]);
        assert!(set.warnings.is_empty());
        assert_eq!(set.summary(), "read 3 4-bit state vectors");
    }

    #[test]
    fn test_value_history_and_lookups() {
        let set = TrainingSet::parse("sample.train", Cursor::new(SAMPLE)).unwrap();
        assert_eq!(set.value_history(0).unwrap(), vec![1, 0, 1]);
        assert_eq!(set.value_history(3).unwrap(), vec![0, 1, 1]);
        assert!(matches!(
            set.value_history(4),
            Err(SvaError::NoSuchBit { index: 4, width: 4 })
        ));
        assert_eq!(set.state(1).unwrap(), &[0, 0, 1, 1]);
        assert!(matches!(
            set.state(3),
            Err(SvaError::NoSuchState { index: 3, count: 3 })
        ));
    }

    #[test]
    fn test_bad_header() {
        for text in ["", "not a header\n", "3 4\n1 0 1 0\n"] {
            assert!(matches!(
                TrainingSet::parse("x.train", Cursor::new(text)),
                Err(SvaError::NotATrainingFile(_))
            ));
        }
    }

    #[test]
    fn test_width_mismatch_is_a_warning() {
        let text = "2 4 1\n1 0 1\n1\n1 0 1 0\n0\n";
        let set = TrainingSet::parse("x.train", Cursor::new(text)).unwrap();
        assert_eq!(set.state_count(), 2);
        assert_eq!(set.warnings, vec!["3 bits in input vector (expected 4)"]);
        // the short state has no bit 3
        assert_eq!(set.value_history(3).unwrap(), vec![0]);
    }

    #[test]
    fn test_state_count_mismatch_is_a_warning() {
        let text = "5 2 1\n1 0\n1\n";
        let set = TrainingSet::parse("x.train", Cursor::new(text)).unwrap();
        assert_eq!(set.warnings, vec!["header declares 5 states but 1 were read"]);
    }

    #[test]
    fn test_non_bit_token_rejected() {
        let text = "1 3 1\n1 2 0\n1\n";
        match TrainingSet::parse("x.train", Cursor::new(text)) {
            Err(SvaError::Parse { line, message }) => {
                assert_eq!(line, 2);
                assert!(message.contains("'2'"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
