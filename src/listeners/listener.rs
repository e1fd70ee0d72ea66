//! # Listener records and registration options.
//!
//! A `Listener` pairs a [`Handler`] with its priority. Listeners are created only by
//! the emitter during registration, never leave it and never change afterwards.
//!
//! ## Ordering
//! ```text
//! priority:  5     2     2     0    -1
//!            └─ runs first       runs last ─┘
//! ties (the two 2s) keep registration order
//! ```

use super::handler::Handler;

/// Options accepted by `EventEmitter::on`.
///
/// ## Example
/// ```rust
/// use prio_emitter::ListenerOptions;
///
/// let opts = ListenerOptions::default().with_priority(2);
/// assert_eq!(opts.priority, Some(2));
/// assert_eq!(ListenerOptions::priority(-1).priority, Some(-1));
/// ```
///
/// The registered record stays inside the emitter:
/// ```compile_fail
/// use prio_emitter::Listener;
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListenerOptions {
    /// Invocation priority; higher runs earlier.
    ///
    /// `None` falls back to `EmitterConfig::default_priority`.
    pub priority: Option<i32>,
}

impl ListenerOptions {
    /// Options with the given priority.
    pub fn priority(priority: i32) -> Self {
        Self {
            priority: Some(priority),
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// A registered (handler, priority) pair bound to one event name.
#[derive(Debug)]
pub(crate) struct Listener {
    handler: Handler,
    priority: i32,
    seq: u64,
}

impl Listener {
    pub(crate) fn new(handler: Handler, priority: i32, seq: u64) -> Self {
        Self {
            handler,
            priority,
            seq,
        }
    }

    /// Returns the handler.
    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Returns the priority.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Registration sequence number, unique per emitter.
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Position at which a listener of `priority` must be inserted into a sequence sorted
/// non-increasing by priority, after every listener of equal priority.
pub(crate) fn insertion_point<L>(sorted: &[L], priority: i32) -> usize
where
    L: std::borrow::Borrow<Listener>,
{
    sorted.partition_point(|l| l.borrow().priority >= priority)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert_all(priorities: &[i32]) -> Vec<Listener> {
        let mut seq: Vec<Listener> = Vec::new();
        for (i, p) in priorities.iter().enumerate() {
            let at = insertion_point(seq.as_slice(), *p);
            seq.insert(at, Listener::new(Handler::sync(|_, _| Ok(())), *p, i as u64));
        }
        seq
    }

    #[test]
    fn higher_priority_first() {
        let seq = insert_all(&[0, 2, -1]);
        let order: Vec<u64> = seq.iter().map(Listener::seq).collect();
        assert_eq!(order, vec![1, 0, 2]);
    }

    #[test]
    fn ties_keep_registration_order() {
        let seq = insert_all(&[1, 0, 1, 0, 1, 3, 0]);
        let order: Vec<(i32, u64)> = seq.iter().map(|l| (l.priority(), l.seq())).collect();
        assert_eq!(
            order,
            vec![(3, 5), (1, 0), (1, 2), (1, 4), (0, 1), (0, 3), (0, 6)]
        );
    }

    #[test]
    fn matches_stable_sort_of_appended_sequence() {
        let priorities = [4, -2, 4, 0, 7, -2, 0, 4, 7, 1];
        let inserted = insert_all(&priorities);

        let mut appended: Vec<(i32, u64)> = priorities
            .iter()
            .enumerate()
            .map(|(i, p)| (*p, i as u64))
            .collect();
        appended.sort_by(|a, b| b.0.cmp(&a.0));

        let got: Vec<(i32, u64)> = inserted.iter().map(|l| (l.priority(), l.seq())).collect();
        assert_eq!(got, appended);
    }
}
