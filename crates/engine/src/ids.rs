use carte_types::EntryId;

/// Issues session-unique entry identifiers from a monotonic counter.
#[derive(Debug)]
pub struct IdGenerator {
    /// The next ID to be assigned to an entry.
    next: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> EntryId {
        let id = EntryId::new(self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_strictly_increasing() {
        let mut ids = IdGenerator::new();
        let first = ids.next_id();
        let second = ids.next_id();
        assert!(second > first);
        assert_ne!(first, second);
    }
}
