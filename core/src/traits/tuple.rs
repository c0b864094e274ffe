// =============================================================================
// Recursive accumulator macro
// =============================================================================
//
// Generates all prefix arities from a flat list of (type, index) pairs:
// (T0,), (T0, T1), ..., (T0, ..., T11).

use super::IntoFieldPaths;
use crate::path::FieldPath;

macro_rules! seq_tuples {
    (@acc $callback:ident [$($aT:ident),*] [$($ai:tt),*]) => {};
    (@acc $callback:ident [$($aT:ident),*] [$($ai:tt),*] ($T:ident, $i:tt) $($rest:tt)*) => {
        $callback!($($aT,)* $T; $($ai,)* $i);
        seq_tuples!(@acc $callback [$($aT,)* $T] [$($ai,)* $i] $($rest)*);
    };
    ($callback:ident; $($pairs:tt)+) => {
        seq_tuples!(@acc $callback [] [] $($pairs)+);
    };
}

/// Callback: implements `IntoFieldPaths` for a tuple of the given arity.
macro_rules! impl_field_paths_tuple {
    ($($T:ident),+; $($idx:tt),+) => {
        impl<$($T: IntoFieldPaths),+> IntoFieldPaths for ($($T,)+) {
            fn push_field_paths(self, out: &mut Vec<FieldPath>) {
                $(self.$idx.push_field_paths(out);)+
            }
        }
    };
}

seq_tuples!(impl_field_paths_tuple;
    (T0,0) (T1,1) (T2,2) (T3,3)
    (T4,4) (T5,5) (T6,6) (T7,7)
    (T8,8) (T9,9) (T10,10) (T11,11)
);
