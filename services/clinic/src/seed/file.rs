use std::path::{Path, PathBuf};

use crate::seed::SeedError;

/// A parsed `;`-delimited seed file. Blank lines are dropped; every other
/// line must carry exactly `arity` fields.
pub struct SeedFile {
    path: PathBuf,
    lines: Vec<(usize, Vec<String>)>,
}

impl SeedFile {
    pub async fn read(path: PathBuf, arity: usize) -> Result<Self, SeedError> {
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| SeedError::Io {
                path: path.clone(),
                source,
            })?;
        let file = Self::parse(path, &content, arity)?;
        tracing::debug!(path = %file.path.display(), records = file.len(), "seed file parsed");
        Ok(file)
    }

    pub fn parse(path: PathBuf, content: &str, arity: usize) -> Result<Self, SeedError> {
        let mut lines = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<String> = line.split(';').map(|f| f.trim().to_owned()).collect();
            if fields.len() != arity {
                return Err(SeedError::Parse {
                    path,
                    line: idx + 1,
                    reason: format!("expected {arity} fields, found {}", fields.len()),
                });
            }
            lines.push((idx + 1, fields));
        }
        Ok(Self { path, lines })
    }

    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.lines.iter().map(|(line, fields)| Record {
            path: &self.path,
            line: *line,
            fields,
        })
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// One non-blank line of a seed file.
pub struct Record<'a> {
    path: &'a Path,
    line: usize,
    fields: &'a [String],
}

impl Record<'_> {
    pub fn text(&self, idx: usize) -> String {
        self.fields[idx].clone()
    }

    pub fn int(&self, idx: usize) -> Result<i32, SeedError> {
        self.fields[idx]
            .parse()
            .map_err(|_| self.error(format!("field {} is not an integer: {:?}", idx + 1, self.fields[idx])))
    }

    /// Empty field means "none".
    pub fn opt_int(&self, idx: usize) -> Result<Option<i32>, SeedError> {
        if self.fields[idx].is_empty() {
            return Ok(None);
        }
        self.int(idx).map(Some)
    }

    /// `true` / `false`, case-insensitive.
    pub fn flag(&self, idx: usize) -> Result<bool, SeedError> {
        match self.fields[idx].to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(self.error(format!(
                "field {} is not a boolean: {other:?}",
                idx + 1
            ))),
        }
    }

    fn error(&self, reason: String) -> SeedError {
        SeedError::Parse {
            path: self.path.to_path_buf(),
            line: self.line,
            reason,
        }
    }
}
