//! Filtered views over a [`Roster`].
//!
//! A [`FilteredView`] owns nothing but a filter; it borrows the roster and derives
//! its contents on every read, so it can never disagree with the roster it came
//! from. Views are cheap, local values: a command that needs to narrow the roster
//! builds one, reads it, and drops it, leaving no filter state behind.

use crate::model::{Student, StudentId};
use crate::roster::Roster;

/// A predicate over students.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StudentFilter {
    #[default]
    All,
    /// Exact identity match.
    IdEquals(StudentId),
    /// Any keyword equals a whole word of the name, ignoring case.
    NameKeywords(Vec<String>),
}

impl StudentFilter {
    pub fn id_equals(id: StudentId) -> Self {
        StudentFilter::IdEquals(id)
    }

    pub fn name_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StudentFilter::NameKeywords(keywords.into_iter().map(Into::into).collect())
    }

    pub fn matches(&self, student: &Student) -> bool {
        match self {
            StudentFilter::All => true,
            StudentFilter::IdEquals(id) => student.id() == id,
            StudentFilter::NameKeywords(keywords) => {
                let words: Vec<String> = student
                    .name()
                    .as_str()
                    .split_whitespace()
                    .map(str::to_lowercase)
                    .collect();
                keywords
                    .iter()
                    .map(|k| k.trim().to_lowercase())
                    .filter(|k| !k.is_empty())
                    .any(|k| words.contains(&k))
            }
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, StudentFilter::All)
    }
}

/// Students of a roster that satisfy a filter, in roster order.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    roster: &'a Roster,
    filter: StudentFilter,
}

impl<'a> FilteredView<'a> {
    /// An unfiltered view of the whole roster.
    pub fn new(roster: &'a Roster) -> Self {
        Self {
            roster,
            filter: StudentFilter::All,
        }
    }

    pub fn with_filter(roster: &'a Roster, filter: StudentFilter) -> Self {
        Self { roster, filter }
    }

    pub fn set_filter(&mut self, filter: StudentFilter) {
        self.filter = filter;
    }

    pub fn reset(&mut self) {
        self.filter = StudentFilter::All;
    }

    pub fn filter(&self) -> &StudentFilter {
        &self.filter
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Student> + '_ {
        self.roster.iter().filter(|s| self.filter.matches(s))
    }

    pub fn students(&self) -> Vec<&'a Student> {
        self.iter().collect()
    }

    pub fn first(&self) -> Option<&'a Student> {
        self.iter().next()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.first().is_none()
    }
}

/// One-shot filtering without keeping a view around.
pub fn filter<'a>(roster: &'a Roster, filter: &StudentFilter) -> Vec<&'a Student> {
    roster.iter().filter(|s| filter.matches(s)).collect()
}
