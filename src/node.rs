use std::iter;
use std::mem;

/// Key-value entry.
///
/// Each node exclusively owns its successor, and the first node of a chain is owned by the
/// [`Bin`] it hangs off of.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) key: i32,
    pub(crate) value: i32,
    pub(crate) next: Option<Box<Node>>,
}

impl Node {
    fn new(key: i32, value: i32) -> Self {
        Self {
            key,
            value,
            next: None,
        }
    }
}

/// The chain of entries that share a bucket.
///
/// A `Bin` has no synchronization of its own. Every access goes through the bucket lock in
/// [`Table`](crate::raw::Table), so all of the methods here assume they are the only ones
/// looking at the chain.
#[derive(Debug, Default)]
pub(crate) struct Bin {
    head: Option<Box<Node>>,
}

impl Bin {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Entries in chain order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        iter::successors(self.head.as_deref(), |node| node.next.as_deref())
            .map(|node| (node.key, node.value))
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.iter().count()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the value mapped to `key`, if any.
    pub(crate) fn find(&self, key: i32) -> Option<i32> {
        self.iter().find(|&(k, _)| k == key).map(|(_, v)| v)
    }

    /// Overwrites the value of `key` in place, or appends a new node at the tail.
    ///
    /// Returns the replaced value, or `None` if a node was appended.
    pub(crate) fn put(&mut self, key: i32, value: i32) -> Option<i32> {
        let mut slot = &mut self.head;
        loop {
            match slot {
                None => break,
                Some(node) if node.key == key => {
                    return Some(mem::replace(&mut node.value, value));
                }
                Some(node) => slot = &mut node.next,
            }
        }

        *slot = Some(Box::new(Node::new(key, value)));
        None
    }

    /// Unlinks the node for `key`, relinking its predecessor (or the head) to its successor.
    ///
    /// Returns the value the node held.
    pub(crate) fn remove(&mut self, key: i32) -> Option<i32> {
        let mut slot = &mut self.head;
        loop {
            match slot {
                None => return None,
                Some(node) if node.key == key => break,
                Some(node) => slot = &mut node.next,
            }
        }

        let node = slot.take()?;
        let Node { value, next, .. } = *node;
        *slot = next;
        Some(value)
    }
}

impl Drop for Bin {
    fn drop(&mut self) {
        // unlink one node at a time so that dropping a long chain does not recurse through every
        // `Box` in it.
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}
