pub mod frontier;

pub use frontier::*;

/// List of legal actions for a single agent, or the actions of a path.
pub type ActionList<T> = smallvec::SmallVec<[T; 16]>;

/// List of successor triples produced by expanding one state.
pub type SuccessorList<T> = smallvec::SmallVec<[T; 4]>;

pub type Vector<T> = smallvec::SmallVec<[T; 4]>;

#[macro_export]
macro_rules! action_list {
    () => {
        $crate::smallvec::SmallVec::<[_; 16]>::new()
    };
    ($($e : expr),+ $(,)?) => {
        $crate::smallvec::smallvec![$($e),+]
    }
}

#[macro_export]
macro_rules! vector {
    () => {
        $crate::smallvec::SmallVec::<[_; 4]>::new()
    };
    ($($e : expr),+ $(,)?) => {
        $crate::smallvec::smallvec![$($e),+]
    }
}
