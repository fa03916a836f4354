//! Course identifiers: `"<DPRT> <NUM>"` as users write them, `<dprt><num>`
//! as directories are named.

use anyhow::{anyhow, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

static COURSE_RE: OnceLock<Regex> = OnceLock::new();

fn course_re() -> &'static Regex {
    COURSE_RE.get_or_init(|| Regex::new(r"^(\S+) (\d+)$").unwrap())
}

/// A course like `CPSC 213`, validated on construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Course {
    dept: String,
    num: String,
}

impl Course {
    pub fn parse(s: &str) -> Result<Self> {
        let caps = course_re()
            .captures(s.trim())
            .ok_or_else(|| anyhow!("expected a course like \"CPSC 213\", got {s:?}"))?;
        Ok(Self {
            dept: caps[1].to_string(),
            num: caps[2].to_string(),
        })
    }

    /// Directory-friendly form: lowercase, no space (`cpsc213`).
    pub fn tidy(&self) -> String {
        format!("{}{}", self.dept.to_lowercase(), self.num)
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.dept, self.num)
    }
}

impl FromStr for Course {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
