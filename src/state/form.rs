/// Entry form state and validation
///
/// Every field owns an ordered list of constraint rules. Fields are
/// validated in a fixed order (title, author, thumbnail, tags) and the
/// first violated rule wins: later rules and later fields are not checked.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Longest accepted title, in characters
const MAX_TITLE_LEN: usize = 120;
/// Longest accepted author name, in characters
const MAX_AUTHOR_LEN: usize = 80;

/// The four inputs of the entry form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Author,
    Thumbnail,
    Tags,
}

impl Field {
    /// Validation order
    pub const ALL: [Field; 4] = [Field::Title, Field::Author, Field::Thumbnail, Field::Tags];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Author => "Author",
            Field::Thumbnail => "Thumbnail URL",
            Field::Tags => "Tags",
        }
    }
}

/// Kind of constraint a field value violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    ValueMissing,
    PatternMismatch,
    TypeMismatch,
    TooLong,
    /// Application-specific check outside the built-in kinds
    Custom,
}

/// A field failed one of its constraints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Field,
    pub kind: ConstraintKind,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.label(), self.message)
    }
}

/// One (predicate, message) pair. `violated` returns true when the value breaks the rule.
struct Rule {
    kind: ConstraintKind,
    violated: fn(&str) -> bool,
    message: &'static str,
}

const TITLE_RULES: &[Rule] = &[
    Rule {
        kind: ConstraintKind::ValueMissing,
        violated: is_blank,
        message: "Please enter the book's title.",
    },
    Rule {
        kind: ConstraintKind::TooLong,
        violated: |value| value.trim().chars().count() > MAX_TITLE_LEN,
        message: "Title must be at most 120 characters.",
    },
    Rule {
        kind: ConstraintKind::PatternMismatch,
        violated: |value| !title_pattern().is_match(value.trim()),
        message: "Title may not contain control characters or angle brackets.",
    },
];

const AUTHOR_RULES: &[Rule] = &[
    Rule {
        kind: ConstraintKind::ValueMissing,
        violated: is_blank,
        message: "Please enter the author's name.",
    },
    Rule {
        kind: ConstraintKind::TooLong,
        violated: |value| value.trim().chars().count() > MAX_AUTHOR_LEN,
        message: "Author must be at most 80 characters.",
    },
];

const THUMBNAIL_RULES: &[Rule] = &[Rule {
    kind: ConstraintKind::TypeMismatch,
    violated: |value| !is_blank(value) && !url_pattern().is_match(value.trim()),
    message: "Thumbnail must be a valid http(s) or file URL.",
}];

const TAGS_RULES: &[Rule] = &[Rule {
    kind: ConstraintKind::Custom,
    violated: |value| !tags_pattern().is_match(value),
    message: "Tags may only contain letters, numbers and spaces, separated by commas.",
}];

fn rules(field: Field) -> &'static [Rule] {
    match field {
        Field::Title => TITLE_RULES,
        Field::Author => AUTHOR_RULES,
        Field::Thumbnail => THUMBNAIL_RULES,
        Field::Tags => TAGS_RULES,
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn title_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\p{Cc}<>]+$").expect("title pattern is valid"))
}

fn url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(https?|file)://\S+$").expect("url pattern is valid"))
}

fn tags_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[\p{L}\p{N}\s,]*$").expect("tags pattern is valid"))
}

/// Split a comma-separated tag list, trimming each tag and dropping empty ones
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Validated form contents, ready to be added to the library
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub img_src: String,
    pub tags: Vec<String>,
}

/// Current values of the entry form inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryForm {
    pub title: String,
    pub author: String,
    pub thumbnail: String,
    pub tags: String,
}

impl EntryForm {
    /// Get the raw value of a field
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Author => &self.author,
            Field::Thumbnail => &self.thumbnail,
            Field::Tags => &self.tags,
        }
    }

    /// Replace the raw value of a field
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Title => self.title = value,
            Field::Author => self.author = value,
            Field::Thumbnail => self.thumbnail = value,
            Field::Tags => self.tags = value,
        }
    }

    /// Clear every field
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check a single field against its rules, first violation wins
    pub fn check(&self, field: Field) -> Result<(), ValidationError> {
        let value = self.value(field);
        match rules(field).iter().find(|rule| (rule.violated)(value)) {
            Some(rule) => Err(ValidationError {
                field,
                kind: rule.kind,
                message: rule.message.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Validate all fields in order and build the book to add
    pub fn validate(&self) -> Result<NewBook, ValidationError> {
        for field in Field::ALL {
            self.check(field)?;
        }

        Ok(NewBook {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            img_src: self.thumbnail.trim().to_string(),
            tags: parse_tags(&self.tags),
        })
    }
}
