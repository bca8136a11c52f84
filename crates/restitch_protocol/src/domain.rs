use serde::{Deserialize, Serialize};

/// How the host engine parses source files before matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Parser {
    #[default]
    #[serde(rename = "babel")]
    Babel,
    #[serde(rename = "babel/auto")]
    BabelAuto,
    #[serde(rename = "recast/babel")]
    RecastBabel,
    #[serde(rename = "recast/babel/auto")]
    RecastBabelAuto,
}

impl Parser {
    pub const ALL: [Parser; 4] = [
        Parser::Babel,
        Parser::BabelAuto,
        Parser::RecastBabel,
        Parser::RecastBabelAuto,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Babel => "babel",
            Self::BabelAuto => "babel/auto",
            Self::RecastBabel => "recast/babel",
            Self::RecastBabelAuto => "recast/babel/auto",
        }
    }

    /// Inverse of [`Parser::as_str`]; `None` for anything off the wire list.
    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

/// User-editable search configuration. Always fully populated; partial
/// updates go through [`ValuesPatch`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchValues {
    pub find: String,
    pub replace: String,
    pub include: String,
    pub exclude: String,
    pub parser: Parser,
    pub prettier: bool,
}

impl SearchValues {
    /// Shallow merge: fields present in `patch` overwrite, the rest stay.
    pub fn apply(&mut self, patch: ValuesPatch) {
        let ValuesPatch {
            find,
            replace,
            include,
            exclude,
            parser,
            prettier,
        } = patch;
        if let Some(find) = find {
            self.find = find;
        }
        if let Some(replace) = replace {
            self.replace = replace;
        }
        if let Some(include) = include {
            self.include = include;
        }
        if let Some(exclude) = exclude {
            self.exclude = exclude;
        }
        if let Some(parser) = parser {
            self.parser = parser;
        }
        if let Some(prettier) = prettier {
            self.prettier = prettier;
        }
    }
}

/// Partial update of [`SearchValues`]. Absent fields mean "leave unchanged".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValuesPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub find: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser: Option<Parser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prettier: Option<bool>,
}

impl ValuesPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Host-reported run progress and result counters. Always fully populated;
/// partial updates go through [`StatusPatch`].
///
/// `completed <= total` is expected from a well-behaved host but never
/// enforced here; counters merge in as sent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStatus {
    pub running: bool,
    pub completed: u64,
    pub total: u64,
    pub num_matches: u64,
    pub num_files_with_matches: u64,
    pub num_files_with_errors: u64,
    pub num_files_that_will_change: u64,
}

impl SearchStatus {
    /// Shallow merge: fields present in `patch` overwrite, the rest stay.
    pub fn apply(&mut self, patch: StatusPatch) {
        let StatusPatch {
            running,
            completed,
            total,
            num_matches,
            num_files_with_matches,
            num_files_with_errors,
            num_files_that_will_change,
        } = patch;
        if let Some(running) = running {
            self.running = running;
        }
        if let Some(completed) = completed {
            self.completed = completed;
        }
        if let Some(total) = total {
            self.total = total;
        }
        if let Some(num_matches) = num_matches {
            self.num_matches = num_matches;
        }
        if let Some(num_files_with_matches) = num_files_with_matches {
            self.num_files_with_matches = num_files_with_matches;
        }
        if let Some(num_files_with_errors) = num_files_with_errors {
            self.num_files_with_errors = num_files_with_errors;
        }
        if let Some(num_files_that_will_change) = num_files_that_will_change {
            self.num_files_that_will_change = num_files_that_will_change;
        }
    }
}

/// Partial update of [`SearchStatus`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub running: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_matches: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_files_with_matches: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_files_with_errors: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_files_that_will_change: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parser_wire_names_round_trip() {
        for parser in Parser::ALL {
            assert_eq!(Parser::from_wire(parser.as_str()), Some(parser));
        }
        assert_eq!(Parser::from_wire("swc"), None);
    }

    #[test]
    fn values_apply_is_shallow_merge() {
        let mut values = SearchValues {
            find: "foo".to_string(),
            ..SearchValues::default()
        };
        values.apply(ValuesPatch {
            replace: Some("bar".to_string()),
            prettier: Some(true),
            ..ValuesPatch::default()
        });
        assert_eq!(values.find, "foo");
        assert_eq!(values.replace, "bar");
        assert!(values.prettier);
        assert_eq!(values.parser, Parser::Babel);
    }

    #[test]
    fn status_apply_leaves_absent_fields_untouched() {
        let mut status = SearchStatus {
            running: true,
            completed: 3,
            total: 10,
            ..SearchStatus::default()
        };
        let patch = StatusPatch {
            running: Some(false),
            num_files_that_will_change: Some(3),
            ..StatusPatch::default()
        };
        status.apply(patch.clone());
        assert!(!status.running);
        assert_eq!(status.completed, 3);
        assert_eq!(status.total, 10);
        assert_eq!(status.num_files_that_will_change, 3);

        // Applying the same patch twice is the same as once.
        let snapshot = status.clone();
        status.apply(patch);
        assert_eq!(status, snapshot);
    }
}
