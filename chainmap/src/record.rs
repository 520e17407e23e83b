use std::fmt;
use std::str::FromStr;

use crate::config::{ID_LEN, MAX_GPA, MIN_GPA};
use crate::error::{ChainMapError, Result};

/// A validated student identifier: exactly `ID_LEN` ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentId(String);

impl StudentId {
    pub fn parse(s: &str) -> Result<Self> {
        let len = s.chars().count();
        if len != ID_LEN {
            return Err(ChainMapError::InvalidIdLength { len });
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ChainMapError::NonNumericId { id: s.to_string() });
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for StudentId {
    type Err = ChainMapError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for StudentId {
    type Error = ChainMapError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl AsRef<str> for StudentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One stored student.
///
/// A record is built standalone with the bucket index its table will file it
/// under; the table checks that index again on insertion. Records carry no
/// chain link of their own, the owning table keeps the chain order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    name: String,
    id: StudentId,
    age: u32,
    gpa: f64,
    bucket: usize,
}

impl Record {
    /// Builds a record, rejecting GPAs outside `MIN_GPA..=MAX_GPA` (NaN included).
    /// Any age is accepted.
    pub fn new(
        name: impl Into<String>,
        id: StudentId,
        age: u32,
        gpa: f64,
        bucket: usize,
    ) -> Result<Self> {
        if !(MIN_GPA..=MAX_GPA).contains(&gpa) {
            return Err(ChainMapError::GpaOutOfRange { gpa });
        }
        Ok(Self {
            name: name.into(),
            id,
            age,
            gpa,
            bucket,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &StudentId {
        &self.id
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn gpa(&self) -> f64 {
        self.gpa
    }

    /// Index of the bucket this record is filed under.
    pub fn bucket(&self) -> usize {
        self.bucket
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {:>20} | ID: {} | Age: {} | GPA: {:.2}",
            self.name, self.id, self.age, self.gpa
        )
    }
}
