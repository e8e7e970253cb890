/// The in-memory catalog of uploaded stereo pairs
///
/// Pairs live only for the current session. Ordering is insertion order
/// and the index is the sole identity: there are no ids and no deletion.

use super::data::{ImageRef, Side, StereoPair};

/// Ordered list of stereo pairs, mutated by upload events and read by
/// the scene composer.
#[derive(Debug, Clone, Default)]
pub struct PairStore {
    pairs: Vec<StereoPair>,
}

impl PairStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append images for one eye.
    ///
    /// The i-th new image targets the slot after the last pair that already
    /// has this side, so a left upload followed by a right upload of equal
    /// length zips into complete pairs. A targeted slot that already exists
    /// gets its side overwritten in place; slots past the end become new
    /// pairs with the other side left empty. Returns the number of
    /// brand-new pairs created.
    pub fn append(&mut self, side: Side, images: Vec<ImageRef>) -> usize {
        let base = self.side_count(side);
        let mut created = 0;

        for (offset, image) in images.into_iter().enumerate() {
            let target = base + offset;
            match self.pairs.get_mut(target) {
                Some(pair) => pair.set(side, image),
                None => {
                    self.pairs.push(StereoPair::single(side, image));
                    created += 1;
                }
            }
        }

        created
    }

    /// Number of pairs with the given side populated
    pub fn side_count(&self, side: Side) -> usize {
        self.pairs.iter().filter(|p| p.side(side).is_some()).count()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&StereoPair> {
        self.pairs.get(index)
    }

    pub fn pairs(&self) -> &[StereoPair] {
        &self.pairs
    }

    pub fn iter(&self) -> impl Iterator<Item = &StereoPair> {
        self.pairs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(names: &[&str]) -> Vec<ImageRef> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_left_then_right_forms_one_pair() {
        let mut store = PairStore::new();
        store.append(Side::Left, refs(&["a.jpg"]));
        let created = store.append(Side::Right, refs(&["b.jpg"]));

        assert_eq!(created, 0);
        assert_eq!(store.len(), 1);
        let pair = store.get(0).unwrap();
        assert_eq!(pair.left.as_deref(), Some("a.jpg"));
        assert_eq!(pair.right.as_deref(), Some("b.jpg"));
    }

    #[test]
    fn test_batch_uploads_zip_in_order() {
        let mut store = PairStore::new();
        store.append(Side::Left, refs(&["l0", "l1", "l2"]));
        store.append(Side::Right, refs(&["r0", "r1"]));

        assert_eq!(store.len(), 3);
        assert_eq!(store.get(0).unwrap().right.as_deref(), Some("r0"));
        assert_eq!(store.get(1).unwrap().right.as_deref(), Some("r1"));
        assert_eq!(store.get(2).unwrap().right, None);
    }

    #[test]
    fn test_asymmetric_counts_extend_the_store() {
        let mut store = PairStore::new();
        store.append(Side::Left, refs(&["l0"]));
        store.append(Side::Right, refs(&["r0", "r1", "r2"]));

        // r1 and r2 overflow past the single existing pair
        assert_eq!(store.len(), 3);
        assert_eq!(store.get(1).unwrap().left, None);
        assert_eq!(store.get(1).unwrap().right.as_deref(), Some("r1"));
        assert_eq!(store.side_count(Side::Right), 3);
    }

    #[test]
    fn test_later_upload_targets_next_open_slot() {
        let mut store = PairStore::new();
        store.append(Side::Left, refs(&["l0"]));
        store.append(Side::Right, refs(&["r0"]));

        // Both sides of pair 0 are full, so new images start pair 1.
        let created = store.append(Side::Left, refs(&["l1"]));
        assert_eq!(created, 1);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).unwrap().left.as_deref(), Some("l1"));
    }

    #[test]
    fn test_multi_image_append_is_ordered() {
        let mut store = PairStore::new();
        store.append(Side::Right, refs(&["1.png", "2.png", "3.png"]));

        for (i, name) in ["1.png", "2.png", "3.png"].iter().enumerate() {
            assert_eq!(store.get(i).unwrap().right.as_deref(), Some(*name));
            assert_eq!(store.get(i).unwrap().left, None);
        }
    }
}
