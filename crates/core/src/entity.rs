//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Position of the first entity in `items` whose id equals `id`.
///
/// Ordered collections (a user's accounts) are scanned front to back; the
/// first match wins when ids are duplicated.
pub fn position_of<E: Entity>(items: &[E], id: &E::Id) -> Option<usize> {
    items.iter().position(|e| e.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Item {
        id: u32,
        label: &'static str,
    }

    impl Entity for Item {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.id
        }
    }

    #[test]
    fn first_match_wins() {
        let items = vec![
            Item { id: 1, label: "a" },
            Item { id: 2, label: "b" },
            Item { id: 2, label: "c" },
        ];
        let pos = position_of(&items, &2).unwrap();
        assert_eq!(items[pos].label, "b");
        assert!(position_of(&items, &9).is_none());
    }
}
