//! Positional synchronization of several rangers.
//!
//! `zipN` pulls one element from its first input per round, then exactly one
//! element from each remaining input through a single-shot sink, and delivers
//! a composite cursor bundling all of them. The zipped length is the minimum
//! of the input lengths: as soon as any input reports exhaustion the whole
//! zip is finished, permanently — later invocations report exhaustion without
//! pulling anything.
//!
//! Arities 2 through 4 are generated from one macro; the composite cursor and
//! ranger types are concrete per arity, so dispatch stays static.

use crate::cursor::Cursor;
use crate::ranger::{Ranger, Sink};

macro_rules! define_zip {
    ($n:literal; ($HR:ident, $HC:ident, $head:ident) $(, ($TR:ident, $TC:ident, $tail:ident))+ ) => {
        paste::paste! {
            #[doc = concat!("Composite cursor produced by [`zip", stringify!($n), "`]: one sub-cursor per input.")]
            ///
            /// Dereferencing yields the tuple of the sub-dereferences.
            #[derive(Clone, Debug)]
            pub struct [<Zip $n Cursor>]<$HC, $($TC),+> {
                $head: $HC,
                $($tail: $TC,)+
            }

            impl<$HC, $($TC),+> Cursor for [<Zip $n Cursor>]<$HC, $($TC),+>
            where
                $HC: Cursor,
                $($TC: Cursor,)+
            {
                type Item = ($HC::Item, $($TC::Item),+);

                fn get(&self) -> Self::Item {
                    (self.$head.get(), $(self.$tail.get()),+)
                }
            }

            #[doc = concat!("Ranger synchronizing ", stringify!($n), " inputs positionally.")]
            #[derive(Clone, Debug)]
            pub struct [<Zip $n>]<$HR, $($TR),+> {
                $head: $HR,
                $($tail: $TR,)+
                finished: bool,
            }

            #[doc = concat!(
                "Zip ", stringify!($n), " rangers positionally; the result's length is the minimum of the input lengths."
            )]
            pub fn [<zip $n>]<$HR, $($TR),+>($head: $HR, $($tail: $TR),+) -> [<Zip $n>]<$HR, $($TR),+>
            where
                $HR: Ranger,
                $($TR: Ranger,)+
            {
                [<Zip $n>] {
                    $head,
                    $($tail,)+
                    finished: false,
                }
            }

            impl<$HR, $($TR),+> Ranger for [<Zip $n>]<$HR, $($TR),+>
            where
                $HR: Ranger,
                $($TR: Ranger,)+
            {
                type Cursor = [<Zip $n Cursor>]<$HR::Cursor, $($TR::Cursor),+>;

                fn drive<S: Sink<Self::Cursor>>(&mut self, sink: &mut S) -> bool {
                    if self.finished {
                        return true;
                    }
                    let Self { $head, $($tail,)+ finished } = self;
                    let done = $head.drive(&mut |p: &$HR::Cursor| {
                        $(
                            // Pull exactly one element via a single-shot sink.
                            let mut pulled = None;
                            let drained = $tail.drive(&mut |q: &$TR::Cursor| {
                                pulled = Some(q.clone());
                                false
                            });
                            let $tail = match (drained, pulled) {
                                (false, Some(q)) => q,
                                _ => {
                                    *finished = true;
                                    return false;
                                }
                            };
                        )+
                        let cursor = [<Zip $n Cursor>] {
                            $head: p.clone(),
                            $($tail,)+
                        };
                        sink.accept(&cursor)
                    });
                    done || *finished
                }
            }
        }
    };
}

define_zip!(2; (RA, CA, a), (RB, CB, b));
define_zip!(3; (RA, CA, a), (RB, CB, b), (RC, CC, c));
define_zip!(4; (RA, CA, a), (RB, CB, b), (RC, CC, c), (RD, CD, d));
