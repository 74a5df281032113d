//! External grade sources
//!
//! The Mozilla Observatory and Imirhil (cryptcheck) columns of the report
//! are filled from a `GradeSource`. Fetching grades from those services is
//! somebody else's job; `GradeTable` serves grades already collected into a
//! headerless CSV of `host,mozilla,imirhil`.

use crate::utils::ConfigError;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Which external grader a lookup is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grader {
    Mozilla,
    Imirhil,
}

impl Grader {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grader::Mozilla => "Mozilla",
            Grader::Imirhil => "Imirhil",
        }
    }
}

impl std::fmt::Display for Grader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GradeError {
    #[error("{grader} has no grade for {site}")]
    NotFound { grader: Grader, site: String },
}

/// Something able to hand out an external grade for a site
pub trait GradeSource {
    fn grade(&self, grader: Grader, site: &str) -> Result<String, GradeError>;
}

/// Grades known ahead of time
#[derive(Debug, Clone, Default)]
pub struct GradeTable {
    grades: HashMap<(Grader, String), String>,
}

impl GradeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, grader: Grader, site: impl Into<String>, grade: impl Into<String>) {
        self.grades.insert((grader, site.into()), grade.into());
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let fh = std::fs::File::open(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        Self::from_reader(fh)
    }

    pub fn from_reader<R: Read>(rdr: R) -> Result<Self, ConfigError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(rdr);

        let mut table = Self::new();
        for record in reader.records() {
            let record = record.map_err(|e| ConfigError::ParseError {
                message: e.to_string(),
            })?;
            let Some(site) = record.get(0).map(str::trim) else {
                continue;
            };
            for (idx, grader) in [(1, Grader::Mozilla), (2, Grader::Imirhil)] {
                if let Some(grade) = record.get(idx).map(str::trim) {
                    if !grade.is_empty() {
                        table.insert(grader, site, grade);
                    }
                }
            }
        }
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.grades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }
}

impl GradeSource for GradeTable {
    fn grade(&self, grader: Grader, site: &str) -> Result<String, GradeError> {
        self.grades
            .get(&(grader, site.to_string()))
            .cloned()
            .ok_or_else(|| GradeError::NotFound {
                grader,
                site: site.to_string(),
            })
    }
}
