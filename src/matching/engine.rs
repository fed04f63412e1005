use std::collections::HashSet;

use regex::{Regex, RegexBuilder};
use thiserror::Error;

use crate::catalog::{Catalog, Record};
use crate::matching::phonetic::phonetic_initials;


/// Errors produced while evaluating a search query.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The query could not be compiled into a subsequence pattern.
    #[error("invalid match pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Query-time matcher over the startup catalog.
///
/// The engine owns only the names of the two searchable fields; the catalog
/// is passed per call so one engine serves every request. All strategies are
/// linear scans, which is adequate at this table size.
pub struct MatchEngine {
    teacher_field: String,
    course_field: String,
}

impl MatchEngine {
    pub fn new(teacher_field: impl Into<String>, course_field: impl Into<String>) -> Self {
        Self {
            teacher_field: teacher_field.into(),
            course_field: course_field.into(),
        }
    }

    /// Teacher lookup: exact, then case-insensitive subsequence, then
    /// pinyin-initial prefix, merged with exact matches first.
    pub fn search_teachers(
        &self,
        catalog: &Catalog,
        query: &str,
    ) -> Result<Vec<Record>, MatchError> {
        let field = self.teacher_field.as_str();
        let fuzzy = subsequence_pattern(query, true)?;
        let initials_prefix = query.to_lowercase();

        let exact = scan(catalog, field, |value| value == query);
        let partial = scan(catalog, field, |value| {
            value != query && fuzzy.is_match(value)
        });
        let phonetic = scan(catalog, field, |value| {
            phonetic_initials(value).starts_with(&initials_prefix)
        });

        Ok(merge_first_seen(catalog, [exact, partial, phonetic]))
    }

    /// Course lookup: exact plus case-sensitive subsequence, no phonetic
    /// strategy.
    pub fn search_courses(
        &self,
        catalog: &Catalog,
        query: &str,
    ) -> Result<Vec<Record>, MatchError> {
        let field = self.course_field.as_str();
        let fuzzy = subsequence_pattern(query, false)?;

        let exact = scan(catalog, field, |value| value == query);
        let partial = scan(catalog, field, |value| {
            value != query && fuzzy.is_match(value)
        });

        Ok(merge_first_seen(catalog, [exact, partial]))
    }
}

/// Compile a query into its subsequence pattern: every character escaped and
/// joined with `.*`, so the query's characters must appear in the field
/// value in order with anything in between. The match is an unanchored
/// search, and a single-character query will match any field containing that
/// character.
fn subsequence_pattern(query: &str, case_insensitive: bool) -> Result<Regex, regex::Error> {
    let pattern = query
        .chars()
        .map(|ch| regex::escape(ch.encode_utf8(&mut [0u8; 4])))
        .collect::<Vec<_>>()
        .join(".*");

    RegexBuilder::new(&pattern)
        .case_insensitive(case_insensitive)
        .build()
}

/// Indices of records whose `field` value satisfies `accept`. Records where
/// the field is absent or null never match.
fn scan(catalog: &Catalog, field: &str, accept: impl Fn(&str) -> bool) -> Vec<usize> {
    catalog
        .records()
        .iter()
        .enumerate()
        .filter_map(|(index, record)| record.field(field).is_some_and(&accept).then_some(index))
        .collect()
}

/// Ordered set union over strategy result sets: rows are emitted in set
/// order, duplicates (by full field equality) keep their first occurrence.
/// Listing the exact set first is what gives exact matches priority.
fn merge_first_seen<const N: usize>(catalog: &Catalog, sets: [Vec<usize>; N]) -> Vec<Record> {
    let records = catalog.records();
    let mut seen = HashSet::new();
    let mut merged = Vec::new();

    for index in sets.into_iter().flatten() {
        let record = &records[index];
        if seen.insert(record.dedup_key()) {
            merged.push(record.clone());
        }
    }

    merged
}
