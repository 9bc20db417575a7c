//! Quota-limited delivery.

use crate::ranger::{Ranger, Sink};

/// Ranger that delivers at most `n` elements across its whole lifetime.
///
/// The countdown persists between invocations; it is never reset per call.
#[derive(Clone, Debug)]
pub struct Take<R> {
    ranger: R,
    remaining: usize,
}

/// Deliver at most `n` elements of `ranger`, then report exhaustion.
///
/// ```
/// use rangeflow::{all, take, RangerExt};
///
/// let data = [1, 2, 3, 4, 5];
/// assert_eq!(take(3, all(&data)).to_vec(), vec![&1, &2, &3]);
/// ```
pub fn take<R: Ranger>(n: usize, ranger: R) -> Take<R> {
    Take { ranger, remaining: n }
}

impl<R: Ranger> Ranger for Take<R> {
    type Cursor = R::Cursor;

    fn drive<S: Sink<Self::Cursor>>(&mut self, sink: &mut S) -> bool {
        if self.remaining == 0 {
            return true;
        }
        let remaining = &mut self.remaining;
        let done = self.ranger.drive(&mut |p: &R::Cursor| {
            *remaining -= 1;
            // Stop the upstream once the quota is spent, independently of
            // whether the downstream sink wanted more.
            sink.accept(p) && *remaining != 0
        });
        // Hitting the quota on the last delivered element is exhaustion, not
        // an early stop: every later invocation delivers nothing.
        done || *remaining == 0
    }
}
