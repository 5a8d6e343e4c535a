//! The seven canonical RESTful actions and their route shapes.

use std::fmt;

use crate::routing::verb::Verb;

/// A canonical resource action.
///
/// Declaration order is the order descriptors appear in a resource table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Index,
    New,
    Create,
    Show,
    Edit,
    Update,
    Remove,
}

/// Key into the `methods` override table that decides an action's verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbKey {
    Get,
    Post,
    Put,
    /// Looked up as `del` first, then `delete`.
    Delete,
}

impl VerbKey {
    /// Verb used when no override is configured.
    pub fn default_verb(&self) -> Verb {
        match self {
            VerbKey::Get => Verb::Get,
            VerbKey::Post => Verb::Post,
            VerbKey::Put => Verb::Put,
            VerbKey::Delete => Verb::Delete,
        }
    }
}

impl Action {
    /// All actions in table order.
    pub const ALL: [Action; 7] = [
        Action::Index,
        Action::New,
        Action::Create,
        Action::Show,
        Action::Edit,
        Action::Update,
        Action::Remove,
    ];

    /// Canonical action name, also the default controller key.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Index => "index",
            Action::New => "new",
            Action::Create => "create",
            Action::Show => "show",
            Action::Edit => "edit",
            Action::Update => "update",
            Action::Remove => "remove",
        }
    }

    pub fn verb_key(&self) -> VerbKey {
        match self {
            Action::Index | Action::New | Action::Show | Action::Edit => VerbKey::Get,
            Action::Create => VerbKey::Post,
            Action::Update => VerbKey::Put,
            Action::Remove => VerbKey::Delete,
        }
    }

    /// Whether the action addresses a single member (`/{route}/{param}...`).
    pub fn is_member(&self) -> bool {
        matches!(
            self,
            Action::Show | Action::Edit | Action::Update | Action::Remove
        )
    }

    /// Path pattern for this action given a route segment and a parameter
    /// placeholder (e.g. `cats` and `:cat`). An empty segment yields the
    /// root shapes `/`, `/new`, `/:id`, `/:id/edit`.
    pub fn path_pattern(&self, route: &str, param: &str) -> String {
        let collection = format!("/{route}");
        if !self.is_member() {
            return match self {
                Action::New => under(&collection, "new"),
                _ => collection,
            };
        }
        let member = under(&collection, param);
        match self {
            Action::Edit => under(&member, "edit"),
            _ => member,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn under(base: &str, tail: &str) -> String {
    if base == "/" {
        format!("/{tail}")
    } else {
        format!("{base}/{tail}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_patterns() {
        let paths: Vec<String> = Action::ALL
            .iter()
            .map(|a| a.path_pattern("cats", ":cat"))
            .collect();
        assert_eq!(
            paths,
            vec![
                "/cats",
                "/cats/new",
                "/cats",
                "/cats/:cat",
                "/cats/:cat/edit",
                "/cats/:cat",
                "/cats/:cat",
            ]
        );
    }

    #[test]
    fn test_root_patterns_collapse() {
        assert_eq!(Action::Index.path_pattern("", ":id"), "/");
        assert_eq!(Action::New.path_pattern("", ":id"), "/new");
        assert_eq!(Action::Show.path_pattern("", ":id"), "/:id");
        assert_eq!(Action::Edit.path_pattern("", ":id"), "/:id/edit");
    }

    #[test]
    fn test_default_verbs() {
        let verbs: Vec<Verb> = Action::ALL
            .iter()
            .map(|a| a.verb_key().default_verb())
            .collect();
        assert_eq!(
            verbs,
            vec![
                Verb::Get,
                Verb::Get,
                Verb::Post,
                Verb::Get,
                Verb::Get,
                Verb::Put,
                Verb::Delete,
            ]
        );
    }

    #[test]
    fn test_member_actions() {
        assert!(!Action::Index.is_member());
        assert!(!Action::New.is_member());
        assert!(Action::Edit.is_member());
        assert!(Action::Remove.is_member());
        for action in Action::ALL {
            let path = action.path_pattern("cats", ":cat");
            assert_eq!(path.contains(":cat"), action.is_member(), "{action}");
        }
    }
}
