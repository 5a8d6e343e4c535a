//! Route grouping: nesting resources inside one another.
//!
//! `group(companies, &[departments])` turns
//! `GET /companies/:company` + `GET /departments/:department` into
//! `GET /companies/:company/departments/:department`, served by the
//! departments handlers.

use crate::routing::route::RouteDescriptor;

/// Nest each source's descriptors inside `destination`, index by index.
///
/// Sources fold left to right: the path nests through every source in
/// order and the handlers come from the last source that has an entry at
/// that index. The verb always comes from `destination`. A source shorter
/// than `destination` leaves the indices it lacks untouched.
///
/// The result is a new sequence; nothing is registered.
pub fn group(destination: &[RouteDescriptor], sources: &[&[RouteDescriptor]]) -> Vec<RouteDescriptor> {
    destination
        .iter()
        .enumerate()
        .map(|(i, dest)| {
            sources
                .iter()
                .filter_map(|source| source.get(i))
                .fold(dest.clone(), |acc, inner| acc.nest(inner))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::handler::Handler;
    use crate::routing::verb::Verb;

    fn route(verb: Verb, path: &str) -> RouteDescriptor {
        RouteDescriptor::new(verb, path, "", vec![Handler::not_implemented()])
    }

    #[test]
    fn test_single_source() {
        let dest = vec![route(Verb::Get, "/a"), route(Verb::Put, "/a/:a")];
        let src = vec![route(Verb::Post, "/b"), route(Verb::Delete, "/b/:b")];

        let grouped = group(&dest, &[&src[..]]);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].route_path(), "/a/b");
        assert_eq!(grouped[0].verb(), Verb::Get);
        assert_eq!(grouped[1].route_path(), "/a/:a/b/:b");
        assert_eq!(grouped[1].verb(), Verb::Put);
        assert_eq!(grouped[1].handlers(), src[1].handlers());
    }

    #[test]
    fn test_no_sources_copies_destination() {
        let dest = vec![route(Verb::Get, "/a")];
        let grouped = group(&dest, &[]);
        assert_eq!(grouped[0].route_path(), "/a");
        assert_eq!(grouped[0].handlers(), dest[0].handlers());
    }

    #[test]
    fn test_short_source_skips_missing_indices() {
        let dest = vec![route(Verb::Get, "/a"), route(Verb::Get, "/a/:a")];
        let src = vec![route(Verb::Get, "/b")];
        let grouped = group(&dest, &[&src[..]]);
        assert_eq!(grouped[0].route_path(), "/a/b");
        assert_eq!(grouped[1].route_path(), "/a/:a");
        assert_eq!(grouped[1].handlers(), dest[1].handlers());
    }
}
