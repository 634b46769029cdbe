//! Query script grammar.
//!
//! One query per line: `unite X Y`, `same X Y`, `find X` or `size X`, with
//! operands written as signed decimal integers. Blank lines and everything
//! after `#` are ignored.

use std::fmt;

use unionfind_core::{CheckedDisjointSet, DisjointSetError};

/// A single parsed query.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Query {
    /// Merge the groups of both elements.
    Unite(i64, i64),
    /// Ask whether both elements share a group.
    Same(i64, i64),
    /// Ask for the representative of an element.
    Find(i64),
    /// Ask for the group size of an element.
    Size(i64),
}

/// The answer produced by applying a [`Query`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Answer {
    /// Result of `unite` or `same`.
    Flag(bool),
    /// Representative returned by `find`.
    Root(usize),
    /// Group size returned by `size`.
    Size(usize),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::Root(root) => write!(f, "{root}"),
            Self::Size(size) => write!(f, "{size}"),
        }
    }
}

impl Query {
    /// Parses one script line, returning `Ok(None)` for blank and comment
    /// lines.
    ///
    /// # Errors
    /// Returns a human-readable reason when the verb is unknown, the arity is
    /// wrong, or an operand is not an integer.
    ///
    /// # Examples
    /// ```
    /// use unionfind_cli::cli::Query;
    ///
    /// assert_eq!(Query::parse("unite 0 -1"), Ok(Some(Query::Unite(0, -1))));
    /// assert_eq!(Query::parse("  # comment"), Ok(None));
    /// assert!(Query::parse("split 1").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let content = line.split_once('#').map_or(line, |(head, _)| head);
        let mut tokens = content.split_whitespace();
        let Some(verb) = tokens.next() else {
            return Ok(None);
        };
        let operands = tokens.map(parse_operand).collect::<Result<Vec<_>, _>>()?;
        let query = match (verb, operands.as_slice()) {
            ("unite", &[left, right]) => Self::Unite(left, right),
            ("same", &[left, right]) => Self::Same(left, right),
            ("find", &[node]) => Self::Find(node),
            ("size", &[node]) => Self::Size(node),
            ("unite" | "same", _) => {
                return Err(format!("`{verb}` takes 2 operands, got {}", operands.len()));
            }
            ("find" | "size", _) => {
                return Err(format!("`{verb}` takes 1 operand, got {}", operands.len()));
            }
            (other, _) => return Err(format!("unknown query `{other}`")),
        };
        Ok(Some(query))
    }

    /// Applies the query to `set`.
    ///
    /// # Errors
    /// Propagates [`DisjointSetError`] when an operand is out of range.
    pub fn apply(self, set: &mut CheckedDisjointSet) -> Result<Answer, DisjointSetError> {
        Ok(match self {
            Self::Unite(left, right) => Answer::Flag(set.unite(left, right)?),
            Self::Same(left, right) => Answer::Flag(set.same(left, right)?),
            Self::Find(node) => Answer::Root(set.find(node)?),
            Self::Size(node) => Answer::Size(set.size(node)?),
        })
    }
}

fn parse_operand(token: &str) -> Result<i64, String> {
    token
        .parse()
        .map_err(|err| format!("invalid element id `{token}`: {err}"))
}
