//! Search filter construction.
//!
//! Turns raw query parameters into a non-empty, ordered list of typed
//! conditions. Storage backends render the conditions; nothing here knows SQL
//! beyond column names.

use std::collections::HashMap;

use super::error::SearchError;
use super::types::Ssn;

/// A searchable employee attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    FirstName,
    LastName,
    Address,
    Sex,
    DlId,
    SuperSsn,
}

/// How a condition compares the column to the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Case-insensitive substring match.
    Contains,
    /// Exact equality.
    Exact,
}

impl SearchField {
    /// Every searchable field, in the order conditions are emitted.
    pub const ALL: [SearchField; 6] = [
        SearchField::FirstName,
        SearchField::LastName,
        SearchField::Address,
        SearchField::Sex,
        SearchField::DlId,
        SearchField::SuperSsn,
    ];

    /// Query parameter name; identical to the column name.
    pub fn param_name(&self) -> &'static str {
        match self {
            SearchField::FirstName => "Fname",
            SearchField::LastName => "Lname",
            SearchField::Address => "Address",
            SearchField::Sex => "Sex",
            SearchField::DlId => "DL_id",
            SearchField::SuperSsn => "Super_ssn",
        }
    }

    pub fn column(&self) -> &'static str {
        self.param_name()
    }

    pub fn match_kind(&self) -> MatchKind {
        match self {
            SearchField::FirstName | SearchField::LastName | SearchField::Address => {
                MatchKind::Contains
            }
            SearchField::Sex | SearchField::DlId | SearchField::SuperSsn => MatchKind::Exact,
        }
    }
}

/// Typed value of a search condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchValue {
    Text(String),
    Integer(i64),
}

/// One `column <op> value` condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCondition {
    pub field: SearchField,
    pub value: SearchValue,
}

impl SearchCondition {
    pub fn match_kind(&self) -> MatchKind {
        self.field.match_kind()
    }
}

/// A conjunction of at least one search condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    conditions: Vec<SearchCondition>,
}

impl SearchFilter {
    /// Builds a filter from query parameters.
    ///
    /// Unknown parameters are ignored. Returns [`SearchError::NoCriteria`]
    /// when none of the searchable fields is present.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, SearchError> {
        let mut conditions = Vec::new();

        for field in SearchField::ALL {
            let Some(raw) = params.get(field.param_name()) else {
                continue;
            };

            let value = match field {
                SearchField::SuperSsn => {
                    let ssn: Ssn = raw.trim().parse().map_err(|_| SearchError::InvalidValue {
                        field: field.param_name(),
                        value: raw.clone(),
                    })?;
                    SearchValue::Integer(ssn)
                }
                _ => SearchValue::Text(raw.clone()),
            };

            conditions.push(SearchCondition { field, value });
        }

        if conditions.is_empty() {
            return Err(SearchError::NoCriteria);
        }

        Ok(Self { conditions })
    }

    pub fn conditions(&self) -> &[SearchCondition] {
        &self.conditions
    }
}

/// Escapes `LIKE` wildcards so user text matches literally with `ESCAPE '\'`.
pub fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
