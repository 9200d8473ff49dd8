use crate::env::Capabilities;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevealTargetId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub target: RevealTargetId,
    pub is_intersecting: bool,
}

/// One-shot visibility bookkeeping for the reveal targets of a page.
///
/// A target flips from hidden to visible at most once; after that it is
/// considered unobserved and every later sample for it is dropped.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    visible: Vec<bool>,
}

impl RevealTracker {
    /// Returns `None` when the environment rules out reveal animations, in
    /// which case nothing should be observed at all.
    pub fn new(capabilities: Capabilities) -> Option<Self> {
        if !capabilities.allows_reveal() {
            return None;
        }
        Some(Self::default())
    }

    pub fn register(&mut self) -> RevealTargetId {
        self.visible.push(false);
        RevealTargetId(self.visible.len() - 1)
    }

    pub fn is_visible(&self, id: RevealTargetId) -> bool {
        self.visible.get(id.0).copied().unwrap_or(false)
    }

    pub fn pending(&self) -> usize {
        self.visible.iter().filter(|visible| !**visible).count()
    }

    /// Applies one observer callback batch and returns the targets that just
    /// became visible. The caller marks and unobserves exactly those.
    pub fn on_intersections<I>(&mut self, entries: I) -> Vec<RevealTargetId>
    where
        I: IntoIterator<Item = IntersectionSample>,
    {
        let mut revealed = Vec::new();
        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }
            let Some(slot) = self.visible.get_mut(entry.target.0) else {
                continue;
            };
            if *slot {
                continue;
            }
            *slot = true;
            revealed.push(entry.target);
        }
        revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(id: RevealTargetId) -> IntersectionSample {
        IntersectionSample {
            target: id,
            is_intersecting: true,
        }
    }

    #[test]
    fn reduced_motion_yields_no_tracker() {
        let caps = Capabilities::full_motion().with_reduced_motion(true);
        assert!(RevealTracker::new(caps).is_none());
    }

    #[test]
    fn non_intersecting_entries_are_ignored() {
        let mut tracker = RevealTracker::new(Capabilities::full_motion()).unwrap();
        let id = tracker.register();
        let revealed = tracker.on_intersections([IntersectionSample {
            target: id,
            is_intersecting: false,
        }]);
        assert!(revealed.is_empty());
        assert!(!tracker.is_visible(id));
    }

    #[test]
    fn unknown_target_is_dropped() {
        let mut tracker = RevealTracker::new(Capabilities::full_motion()).unwrap();
        tracker.register();
        assert!(tracker.on_intersections([hit(RevealTargetId(7))]).is_empty());
    }

    #[test]
    fn duplicate_entries_in_one_batch_reveal_once() {
        let mut tracker = RevealTracker::new(Capabilities::full_motion()).unwrap();
        let id = tracker.register();
        assert_eq!(tracker.on_intersections([hit(id), hit(id)]), vec![id]);
        assert_eq!(tracker.pending(), 0);
    }
}
