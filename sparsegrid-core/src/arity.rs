//! Type-level index counting for chained cursors
//!
//! A cursor carries a marker type telling how many indices it still needs:
//! `More<More<Done>>` needs two more, `Done` needs none. Adding an index
//! peels one `More` off, so the compiler rejects chains that are too short or
//! too long.

use core::marker::PhantomData;

/// Marker: every index has been supplied
#[derive(Debug, Clone, Copy, Default)]
pub struct Done;

/// Marker: one more index is needed before `R`
#[derive(Debug, Clone, Copy, Default)]
pub struct More<R>(PhantomData<R>);

/// Number of indices still needed, as a value
pub trait Remaining {
    const COUNT: usize;
}

impl Remaining for Done {
    const COUNT: usize = 0;
}

impl<R: Remaining> Remaining for More<R> {
    const COUNT: usize = R::COUNT + 1;
}

/// Dimension tag for `N`-component coordinates
#[derive(Debug, Clone, Copy, Default)]
pub struct Dim<const N: usize>;

/// Dimensions that support chained indexing
///
/// `AfterFirst` is the marker for a cursor that has just received its first
/// index, i.e. `N - 1` indices remaining.
pub trait Rank {
    type AfterFirst: Remaining;
}

macro_rules! impl_rank {
    ($($n:literal => $after_first:ty),* $(,)?) => {
        $(
            impl Rank for Dim<$n> {
                type AfterFirst = $after_first;
            }
        )*
    };
}

impl_rank! {
    1 => Done,
    2 => More<Done>,
    3 => More<More<Done>>,
    4 => More<More<More<Done>>>,
    5 => More<More<More<More<Done>>>>,
    6 => More<More<More<More<More<Done>>>>>,
    7 => More<More<More<More<More<More<Done>>>>>>,
    8 => More<More<More<More<More<More<More<Done>>>>>>>,
}
