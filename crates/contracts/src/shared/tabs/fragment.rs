use crate::domain::group::{Group, Groups};

/// Strip the leading `#` (if any) from a URL fragment.
pub fn fragment_id(fragment: &str) -> &str {
    fragment.strip_prefix('#').unwrap_or(fragment)
}

/// Position of the group addressed by `fragment`, if any.
pub fn match_fragment(groups: &Groups, fragment: &str) -> Option<usize> {
    let id = fragment_id(fragment);
    if id.is_empty() {
        return None;
    }
    groups.position_of(id)
}

/// Index selected on page load: the group named by the fragment, else the first one.
pub fn initial_index(groups: &Groups, fragment: &str) -> usize {
    match_fragment(groups, fragment).unwrap_or(0)
}

/// Shareable deep link to `group`: `origin + pathname + "#" + id`.
pub fn share_url(origin: &str, pathname: &str, group: &Group) -> String {
    format!("{}{}{}", origin, pathname, group.fragment())
}
