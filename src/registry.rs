use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One `group ... end` span, materialized when its close marker was parsed.
///
/// `parent_id` is the nearest enclosing group still open at close time
/// (`None` for a top-level group); `root_id` is the outermost enclosing
/// group, the group's own id when it is itself top-level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: u32,
    pub parent_id: Option<u32>,
    pub root_id: u32,
}

/// One checkbox entry. `group_id` is the innermost group open when the
/// line was encountered, `None` for a mod outside any group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mod {
    pub id: u32,
    pub group_id: Option<u32>,
}

/// Accumulated groups and mods from one or more parses, keyed by id.
/// All inserts are last-write-wins; id collisions across merged streams
/// overwrite silently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registry {
    groups: HashMap<u32, Group>,
    mods: HashMap<u32, Mod>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_group(&mut self, group: Group) {
        self.groups.insert(group.id, group);
    }

    pub fn put_mod(&mut self, m: Mod) {
        self.mods.insert(m.id, m);
    }

    /// Union with another registry, the other side winning on collisions.
    pub fn merge(&mut self, other: Registry) {
        self.groups.extend(other.groups);
        self.mods.extend(other.mods);
    }

    pub fn group(&self, id: u32) -> Option<&Group> {
        self.groups.get(&id)
    }

    pub fn groups(&self) -> &HashMap<u32, Group> {
        &self.groups
    }

    pub fn mods(&self) -> &HashMap<u32, Mod> {
        &self.mods
    }

    /// Root group id of the given group, if the group is known.
    pub fn root_id(&self, id: u32) -> Option<u32> {
        self.groups.get(&id).map(|g| g.root_id)
    }

    /// `(mod id, owning group id)` pairs, unsorted.
    pub fn mod_pairs(&self) -> impl Iterator<Item = (u32, Option<u32>)> + '_ {
        self.mods.values().map(|m| (m.id, m.group_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_is_union_with_last_write_wins() {
        let mut a = Registry::new();
        a.put_group(Group {
            id: 1,
            parent_id: None,
            root_id: 1,
        });
        a.put_mod(Mod {
            id: 11111,
            group_id: Some(1),
        });

        let mut b = Registry::new();
        b.put_group(Group {
            id: 2,
            parent_id: None,
            root_id: 2,
        });
        // Collides with a's mod; b's version must win.
        b.put_mod(Mod {
            id: 11111,
            group_id: Some(2),
        });

        a.merge(b);
        assert_eq!(a.groups().len(), 2);
        assert_eq!(a.mods().len(), 1);
        assert_eq!(a.mods()[&11111].group_id, Some(2));
    }

    #[test]
    fn root_id_lookup() {
        let mut reg = Registry::new();
        reg.put_group(Group {
            id: 5,
            parent_id: Some(4),
            root_id: 1,
        });
        assert_eq!(reg.root_id(5), Some(1));
        assert_eq!(reg.root_id(9), None);
    }
}
