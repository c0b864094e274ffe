//! String functions on `Field<String>` and `Field<CompactString>`.

use compact_str::CompactString;

use crate::value::Compatible;

use super::{Expr, Field, StringFunction};

macro_rules! string_functions {
    ($($(#[$doc:meta])* $name:ident => $func:ident),+ $(,)?) => {
        $(
            impl Field<String> {
                $(#[$doc])*
                pub fn $name<V: Compatible<String>>(&self, value: V) -> Expr {
                    Expr::Function {
                        func: StringFunction::$func,
                        path: self.leaf_path(),
                        value: value.into_literal(),
                    }
                }
            }

            impl Field<CompactString> {
                $(#[$doc])*
                pub fn $name<V: Compatible<CompactString>>(&self, value: V) -> Expr {
                    Expr::Function {
                        func: StringFunction::$func,
                        path: self.leaf_path(),
                        value: value.into_literal(),
                    }
                }
            }
        )+
    };
}

string_functions! {
    /// `contains({path},{value})`
    contains => Contains,
    /// `startsWith({path},{value})`
    starts_with => StartsWith,
    /// `endsWith({path},{value})`
    ends_with => EndsWith,
}
