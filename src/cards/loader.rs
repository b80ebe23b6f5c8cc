//! CSV card source.
//!
//! The source is a headed table with the columns
//! `id, word1, word2, word3, word4, word5`. Fields are trimmed, `id` must be
//! an integer and every word must be present. Any bad row fails the whole
//! load: a partial catalog is never returned.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use super::catalog::Catalog;
use super::definition::{Card, CardId};
use crate::error::LoadError;

/// Location of the bundled card source, relative to an install directory.
pub const CARD_SOURCE: &str = "data/cards.csv";

#[derive(Debug, Deserialize)]
struct CardRow {
    id: String,
    word1: String,
    word2: String,
    word3: String,
    word4: String,
    word5: String,
}

impl CardRow {
    fn into_card(self, line: u64) -> Result<Card, LoadError> {
        let invalid = |reason: String| LoadError::InvalidRow { line, reason };

        let id: i64 = self
            .id
            .parse()
            .map_err(|_| invalid(format!("id '{}' is not an integer", self.id)))?;

        Card::new(
            CardId::new(id),
            [self.word1, self.word2, self.word3, self.word4, self.word5],
        )
        .map_err(|e| invalid(e.to_string()))
    }
}

/// Load a catalog from any CSV reader.
pub fn load_from_reader<R: Read>(source: R) -> Result<Catalog, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let mut cards = Vec::new();

    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, csv::Position::line);
        if record.len() != headers.len() {
            return Err(LoadError::InvalidRow {
                line,
                reason: format!("expected {} fields, found {}", headers.len(), record.len()),
            });
        }
        let row: CardRow = record.deserialize(Some(&headers))?;
        cards.push(row.into_card(line)?);
    }

    debug!(count = cards.len(), "parsed card rows");
    Catalog::new(cards)
}

/// Load a catalog from a file on disk.
pub fn load_from_path(path: &Path) -> Result<Catalog, LoadError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::Missing(path.to_path_buf()),
        _ => LoadError::Io(e),
    })?;
    let catalog = load_from_reader(io::BufReader::new(file))?;
    info!(path = %path.display(), cards = catalog.len(), "loaded card catalog");
    Ok(catalog)
}

/// Find the card source next to the running executable.
///
/// Searches `data/cards.csv` in the executable's directory and then each
/// ancestor, so both an installed layout and `target/<profile>/` resolve.
/// Falls back to the executable-relative path when nothing exists, which
/// then surfaces as `LoadError::Missing`.
pub fn locate_card_source() -> Result<PathBuf, LoadError> {
    let exe = std::env::current_exe()?;
    let install_dir = exe.parent().unwrap_or_else(|| Path::new("."));

    for dir in install_dir.ancestors() {
        let candidate = dir.join(CARD_SOURCE);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    Ok(install_dir.join(CARD_SOURCE))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = "\
id,word1,word2,word3,word4,word5
1, apple ,river,moon,chair,tiger
2,cloud,piano,bread,glove,comet
";

    #[test]
    fn test_load_good_source() {
        let catalog = load_from_reader(GOOD.as_bytes()).unwrap();

        assert_eq!(catalog.len(), 2);
        let first = catalog.get(CardId::new(1)).unwrap();
        assert_eq!(first.words()[0], "apple");
        assert_eq!(first.words()[4], "tiger");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let source = "id,word1,word2,word3,word4,word5\n1,a,b,c,d,e\n\n2,f,g,h,i,j\n";
        assert_eq!(load_from_reader(source.as_bytes()).unwrap().len(), 2);
    }

    #[test]
    fn test_all_empty_fields_is_error() {
        let source = "id,word1,word2,word3,word4,word5\n1,a,b,c,d,e\n,,,,,\n";
        let err = load_from_reader(source.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidRow { line: 3, .. }));
    }

    #[test]
    fn test_empty_word_is_error() {
        let source = "id,word1,word2,word3,word4,word5\n1,a,b,c,d,e\n2,a,,c,d,e\n";
        let err = load_from_reader(source.as_bytes()).unwrap_err();

        match err {
            LoadError::InvalidRow { line, reason } => {
                assert_eq!(line, 3);
                assert_eq!(reason, "word2 is empty");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_column_is_error() {
        let source = "id,word1,word2,word3,word4,word5\n1,a,b,c,d\n";
        let err = load_from_reader(source.as_bytes()).unwrap_err();

        match err {
            LoadError::InvalidRow { line, reason } => {
                assert_eq!(line, 2);
                assert_eq!(reason, "expected 6 fields, found 5");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_integer_id_is_error() {
        let source = "id,word1,word2,word3,word4,word5\nx1,a,b,c,d,e\n";
        let err = load_from_reader(source.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("'x1' is not an integer"));
    }

    #[test]
    fn test_header_only_is_empty() {
        let source = "id,word1,word2,word3,word4,word5\n";
        assert!(matches!(load_from_reader(source.as_bytes()), Err(LoadError::Empty)));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cards.csv");
        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, LoadError::Missing(p) if p == path));
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cards.csv");
        std::fs::write(&path, GOOD).unwrap();

        let catalog = load_from_path(&path).unwrap();
        assert_eq!(catalog.len(), 2);
    }
}
