//! Lazy element mapping.
//!
//! [`transform`] does not touch elements eagerly. It introduces a new cursor
//! type, [`MapCursor`], that pairs the upstream cursor with a shared handle to
//! the mapping function; the mapped value is computed each time the cursor is
//! dereferenced, and only then. Downstream stages that dereference a cursor
//! zero or several times (such as [`unique`](crate::ops::unique)) rely on
//! this.

use std::rc::Rc;

use crate::cursor::Cursor;
use crate::ranger::{ItemOf, Ranger, Sink};

/// Cursor that applies a mapping function on dereference.
#[derive(Debug)]
pub struct MapCursor<C, F> {
    inner: C,
    f: Rc<F>,
}

impl<C: Clone, F> Clone for MapCursor<C, F> {
    fn clone(&self) -> Self {
        MapCursor {
            inner: self.inner.clone(),
            f: Rc::clone(&self.f),
        }
    }
}

impl<C, F, O> Cursor for MapCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> O,
{
    type Item = O;

    fn get(&self) -> O {
        (self.f)(self.inner.get())
    }
}

/// Ranger whose cursors map upstream elements through a function.
#[derive(Debug)]
pub struct Transform<F, R> {
    f: Rc<F>,
    ranger: R,
}

impl<F, R: Clone> Clone for Transform<F, R> {
    fn clone(&self) -> Self {
        Transform {
            f: Rc::clone(&self.f),
            ranger: self.ranger.clone(),
        }
    }
}

/// Map each element of `ranger` through `f`, lazily.
///
/// The function is shared, not copied, between the combinator and every
/// cursor it emits; cloning a cursor bumps a reference count.
///
/// ```
/// use rangeflow::{all, transform, RangerExt};
///
/// let data = [1, 2, 3];
/// let doubled = transform(|x: &i32| x * 2, all(&data));
/// assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
/// ```
pub fn transform<F, R, O>(f: F, ranger: R) -> Transform<F, R>
where
    R: Ranger,
    F: Fn(ItemOf<R>) -> O,
{
    Transform {
        f: Rc::new(f),
        ranger,
    }
}

impl<F, R, O> Ranger for Transform<F, R>
where
    R: Ranger,
    F: Fn(ItemOf<R>) -> O,
{
    type Cursor = MapCursor<R::Cursor, F>;

    fn drive<S: Sink<Self::Cursor>>(&mut self, sink: &mut S) -> bool {
        let f = &self.f;
        self.ranger.drive(&mut |p: &R::Cursor| {
            let cursor = MapCursor {
                inner: p.clone(),
                f: Rc::clone(f),
            };
            sink.accept(&cursor)
        })
    }
}
