use std::sync::mpsc::{Sender, SyncSender};

use amaze_core::Pos;

use crate::result::SearchStatus;

/// Snapshot of one finalized position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExploreStep {
    /// Zero-based position of this step in the exploration order.
    pub index: usize,
    pub pos: Pos,
    pub g: u32,
    pub h: u32,
}

/// Message form of the observer callbacks, for channel consumers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchEvent {
    Explored(ExploreStep),
    Finished(SearchStatus),
}

/// Receives exploration snapshots while a search runs.
///
/// Callbacks run on the searching thread between expansions. They must not
/// block: the search does not wait for a slow consumer, and nothing it
/// computes depends on what the observer does.
pub trait SearchObserver {
    /// Called each time a position is finalized, in exploration order.
    fn explored(&mut self, step: ExploreStep);

    /// Called once when the search stops.
    fn finished(&mut self, _status: SearchStatus) {}
}

/// Ignores everything.
impl SearchObserver for () {
    #[inline]
    fn explored(&mut self, _step: ExploreStep) {}
}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    #[inline]
    fn explored(&mut self, step: ExploreStep) {
        (**self).explored(step);
    }

    #[inline]
    fn finished(&mut self, status: SearchStatus) {
        (**self).finished(status);
    }
}

/// Collects every step.
impl SearchObserver for Vec<ExploreStep> {
    fn explored(&mut self, step: ExploreStep) {
        self.push(step);
    }
}

/// Unbounded channel: sends never block. A dropped receiver is ignored.
impl SearchObserver for Sender<SearchEvent> {
    fn explored(&mut self, step: ExploreStep) {
        let _ = self.send(SearchEvent::Explored(step));
    }

    fn finished(&mut self, status: SearchStatus) {
        let _ = self.send(SearchEvent::Finished(status));
    }
}

/// Bounded channel: events are dropped when the buffer is full, so a
/// lagging consumer sees a thinned-out stream instead of stalling the
/// search.
impl SearchObserver for SyncSender<SearchEvent> {
    fn explored(&mut self, step: ExploreStep) {
        let _ = self.try_send(SearchEvent::Explored(step));
    }

    fn finished(&mut self, status: SearchStatus) {
        let _ = self.try_send(SearchEvent::Finished(status));
    }
}

/// Adapts a closure into a [`SearchObserver`].
pub struct FnObserver<F>(pub F);

impl<F: FnMut(ExploreStep)> SearchObserver for FnObserver<F> {
    #[inline]
    fn explored(&mut self, step: ExploreStep) {
        (self.0)(step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn step(i: usize) -> ExploreStep {
        ExploreStep {
            index: i,
            pos: Pos::new(0, i as i32),
            g: i as u32,
            h: 0,
        }
    }

    #[test]
    fn closure_observer() {
        let mut seen = Vec::new();
        {
            let mut obs = FnObserver(|s: ExploreStep| seen.push(s.index));
            obs.explored(step(0));
            obs.explored(step(1));
            obs.finished(SearchStatus::Solved);
        }
        assert_eq!(seen, vec![0, 1]);
    }

    #[test]
    fn unbounded_sender_forwards_events() {
        let (mut tx, rx) = mpsc::channel();
        tx.explored(step(0));
        tx.finished(SearchStatus::Unsolvable);
        drop(tx);
        let events: Vec<SearchEvent> = rx.iter().collect();
        assert_eq!(
            events,
            vec![
                SearchEvent::Explored(step(0)),
                SearchEvent::Finished(SearchStatus::Unsolvable)
            ]
        );
    }

    #[test]
    fn disconnected_receiver_is_ignored() {
        let (mut tx, rx) = mpsc::channel::<SearchEvent>();
        drop(rx);
        tx.explored(step(0));
        tx.finished(SearchStatus::Solved);
    }

    #[test]
    fn full_bounded_sender_drops_instead_of_blocking() {
        let (mut tx, rx) = mpsc::sync_channel(2);
        for i in 0..10 {
            tx.explored(step(i));
        }
        tx.finished(SearchStatus::Solved);
        drop(tx);
        let events: Vec<SearchEvent> = rx.iter().collect();
        assert_eq!(
            events,
            vec![SearchEvent::Explored(step(0)), SearchEvent::Explored(step(1))]
        );
    }

    #[test]
    fn mut_ref_forwards() {
        fn feed(mut obs: impl SearchObserver) {
            obs.explored(step(3));
            obs.finished(SearchStatus::Solved);
        }
        let mut steps: Vec<ExploreStep> = Vec::new();
        feed(&mut steps);
        feed(&mut steps);
        assert_eq!(steps, vec![step(3), step(3)]);
    }
}
