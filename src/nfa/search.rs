use crate::automaton::StateId;
use std::collections::{HashSet, VecDeque};

/// A configuration of the acceptance search: how much of the input has been consumed and which
/// state the automaton is in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct SearchState {
    pub(crate) offset: usize,
    pub(crate) state: StateId,
}

impl SearchState {
    pub(crate) fn new(offset: usize, state: StateId) -> Self {
        SearchState { offset, state }
    }
}

/// FIFO of pending configurations. A configuration is queued at most once over the lifetime of
/// the search, which bounds the work by `|states| * (|input| + 1)` even with epsilon cycles.
pub(crate) struct SearchQueue {
    pending: VecDeque<SearchState>,
    seen: HashSet<SearchState>,
}

impl SearchQueue {
    pub(crate) fn new(seed: SearchState) -> Self {
        SearchQueue {
            pending: VecDeque::from([seed]),
            seen: HashSet::from([seed]),
        }
    }

    pub(crate) fn push(&mut self, search_state: SearchState) {
        if self.seen.insert(search_state) {
            self.pending.push_back(search_state);
        }
    }

    pub(crate) fn pop(&mut self) -> Option<SearchState> {
        self.pending.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_skips_seen_configurations() {
        let seed = SearchState::new(0, StateId(0));
        let mut queue = SearchQueue::new(seed);

        queue.push(seed);
        queue.push(SearchState::new(0, StateId(1)));
        queue.push(SearchState::new(1, StateId(0)));
        queue.push(SearchState::new(0, StateId(1)));

        assert_eq!(queue.pop(), Some(seed));
        assert_eq!(queue.pop(), Some(SearchState::new(0, StateId(1))));
        assert_eq!(queue.pop(), Some(SearchState::new(1, StateId(0))));
        assert_eq!(queue.pop(), None);

        // Draining does not forget what was already explored.
        queue.push(seed);
        assert_eq!(queue.pop(), None);
    }
}
