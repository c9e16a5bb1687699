use std::fmt;

pub struct Entry {
    info: i32,
    next: Option<Box<Entry>>,
}

impl Entry {
    pub fn info(&self) -> i32 {
        self.info
    }

    pub fn next(&self) -> Option<&Entry> {
        self.next.as_deref()
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry").field("info", &self.info).finish()
    }
}

/// Singly linked list of entries, newest first.
#[derive(Default)]
pub struct Chain {
    head: Option<Box<Entry>>,
    length: usize,
}

impl Chain {
    pub fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    pub fn push_front(&mut self, info: i32) {
        let next = self.head.take();
        self.head = Some(Box::new(Entry { info, next }));
        self.length += 1;
    }

    pub fn pop_front(&mut self) -> Option<i32> {
        self.head.take().map(|old_head| {
            let Entry { info, next } = *old_head;
            self.head = next;
            self.length -= 1;
            info
        })
    }

    pub fn front(&self) -> Option<&Entry> {
        self.head.as_deref()
    }

    /// First entry holding `info`, scanning from the head, with its position.
    pub fn find(&self, info: i32) -> Option<(usize, &Entry)> {
        self.iter().enumerate().find(|(_, entry)| entry.info == info)
    }

    /// Unlinks the first entry holding `info` and returns the position it had.
    pub fn remove_first(&mut self, info: i32) -> Option<usize> {
        let mut cursor = &mut self.head;
        let mut position = 0;

        while cursor.as_ref().map_or(false, |entry| entry.info != info) {
            cursor = &mut cursor.as_mut()?.next;
            position += 1;
        }

        let removed = cursor.take()?;
        let Entry { next, .. } = *removed;
        *cursor = next;
        self.length -= 1;
        Some(position)
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn values(&self) -> impl Iterator<Item = i32> + '_ {
        self.iter().map(Entry::info)
    }

    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }
}

// Long chains would overflow the stack with the recursive Box drop.
impl Drop for Chain {
    fn drop(&mut self) {
        self.clear();
    }
}

impl PartialEq for Chain {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.values().eq(other.values())
    }
}

impl Eq for Chain {}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

impl FromIterator<i32> for Chain {
    /// Builds a chain by pushing every item to the front, so the last item ends up at the head.
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut chain = Chain::new();
        for info in iter {
            chain.push_front(info);
        }
        chain
    }
}

pub struct Iter<'a> {
    next: Option<&'a Entry>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|entry| {
            self.next = entry.next.as_deref();
            entry
        })
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Entry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
