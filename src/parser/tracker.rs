/// A group record resolved at the moment its close marker was processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosedGroup {
    pub id: u32,
    pub parent_id: Option<u32>,
    pub root_id: u32,
}

/// Stack of currently-open group ids. Pushed on `group <id>`, popped on
/// `end`; transient per parse.
#[derive(Debug, Default)]
pub struct GroupStack {
    open: Vec<u32>,
}

impl GroupStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// A `group <id>` line was seen. No record is created until the
    /// matching close.
    pub fn open(&mut self, id: u32) {
        self.open.push(id);
    }

    /// Innermost open group, if any. Mods encountered now belong to it.
    pub fn current(&self) -> Option<u32> {
        self.open.last().copied()
    }

    /// An `end` line was seen. Resolves parent and root from the stack as
    /// it stood while the group was still open: root is the bottom entry,
    /// parent is whatever remains on top after the pop. Returns `None` when
    /// no group is open, which the caller must treat as a structural error.
    pub fn close(&mut self) -> Option<ClosedGroup> {
        let root_id = *self.open.first()?;
        let id = self.open.pop()?;
        Some(ClosedGroup {
            id,
            parent_id: self.open.last().copied(),
            root_id,
        })
    }

    /// Current nesting depth; nonzero at end-of-input means unclosed groups.
    pub fn depth(&self) -> usize {
        self.open.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_without_open_is_none() {
        let mut stack = GroupStack::new();
        assert_eq!(stack.close(), None);
    }

    #[test]
    fn top_level_group_is_its_own_root() {
        let mut stack = GroupStack::new();
        stack.open(7);
        assert_eq!(
            stack.close(),
            Some(ClosedGroup {
                id: 7,
                parent_id: None,
                root_id: 7,
            })
        );
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn nested_closes_resolve_parent_and_root() {
        let mut stack = GroupStack::new();
        stack.open(1);
        stack.open(4);
        stack.open(5);
        assert_eq!(stack.current(), Some(5));

        // Innermost closes first: parent 4, root 1.
        assert_eq!(
            stack.close(),
            Some(ClosedGroup {
                id: 5,
                parent_id: Some(4),
                root_id: 1,
            })
        );
        assert_eq!(
            stack.close(),
            Some(ClosedGroup {
                id: 4,
                parent_id: Some(1),
                root_id: 1,
            })
        );
        assert_eq!(
            stack.close(),
            Some(ClosedGroup {
                id: 1,
                parent_id: None,
                root_id: 1,
            })
        );
    }

    #[test]
    fn current_tracks_innermost() {
        let mut stack = GroupStack::new();
        assert_eq!(stack.current(), None);
        stack.open(1);
        stack.open(2);
        assert_eq!(stack.current(), Some(2));
        stack.close();
        assert_eq!(stack.current(), Some(1));
    }
}
