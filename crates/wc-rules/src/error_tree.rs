//! Validation results: one or more typed errors per failing field.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::field::Field;

/// Why a field fails. One variant per symbolic error type; the fields carry
/// what a message needs.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldError {
    #[error("is required")]
    Required,

    #[error("is not a number")]
    NotANumber,

    #[error("must be between {min} and {max}")]
    NumberBetween { min: f64, max: f64 },

    #[error("must be above 0 and at most {max}")]
    NumberAboveZeroUpTo { max: f64 },

    #[error("must be at most {max} characters")]
    MaxLength { max: usize },

    #[error("is not a known icon")]
    InvalidIcon,

    #[error("needs a second gripper in the hardware setup")]
    SecondGripperRequired,

    #[error("needs a sub spindle on the machine")]
    SubSpindleRequired,

    #[error("needs an EasyLoader with a second drawer on a static grid")]
    SecondDrawerUnavailable,

    #[error("cannot be combined with placing on a drop-off position")]
    SecondDrawerAndDropOffExclusive,

    #[error("must select one of the {len} configured entries")]
    IndexOutOfRange { len: usize },

    #[error("must be the first machine position on a lathe")]
    LatheRequiresFirstMachinePickPosition,

    #[error("requires a reach test")]
    ReachTestRequired,

    #[error("no spot on the drawer can be reached")]
    NoSpotCanBeReached,
}

/// Errors keyed by field. A field without an entry passes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorTree {
    entries: BTreeMap<Field, Vec<FieldError>>,
}

impl ErrorTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: Field, error: FieldError) {
        self.entries.entry(field).or_default().push(error);
    }

    /// Record a rule outcome; returns the value when the rule passed.
    pub fn record<T>(&mut self, field: Field, outcome: Result<T, FieldError>) -> Option<T> {
        match outcome {
            Ok(v) => Some(v),
            Err(e) => {
                self.push(field, e);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, field: Field) -> Option<&[FieldError]> {
        self.entries.get(&field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: Field, error: &FieldError) -> bool {
        self.get(field).is_some_and(|errs| errs.contains(error))
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &[FieldError])> {
        self.entries.iter().map(|(f, e)| (*f, e.as_slice()))
    }
}

/// One serialized error: the field it belongs to plus the error itself.
#[derive(Serialize)]
struct Entry<'a> {
    name: String,
    label: String,
    #[serde(flatten)]
    error: &'a FieldError,
}

fn entries(field: Field, errors: &[FieldError]) -> Vec<Entry<'_>> {
    errors
        .iter()
        .map(|error| Entry {
            name: field.key(),
            label: field.label(),
            error,
        })
        .collect()
}

#[derive(Serialize)]
#[serde(untagged)]
enum Node<'a> {
    Leaf(Vec<Entry<'a>>),
    Branch(BTreeMap<&'static str, Vec<Entry<'a>>>),
}

/// Serializes nested like the configuration: drawer fields sit under their
/// drawer key. Each entry reads `{name, label, type, ...params}`.
impl Serialize for ErrorTree {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut root: BTreeMap<&'static str, Node<'_>> = BTreeMap::new();
        for (field, errors) in self.iter() {
            match field.path() {
                (top, None) => {
                    root.insert(top, Node::Leaf(entries(field, errors)));
                }
                (top, Some(nested)) => {
                    if let Node::Branch(children) = root
                        .entry(top)
                        .or_insert_with(|| Node::Branch(BTreeMap::new()))
                    {
                        children.insert(nested, entries(field, errors));
                    }
                }
            }
        }
        root.serialize(serializer)
    }
}
