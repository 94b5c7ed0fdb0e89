/*
 * Copyright (c) 2022 Kamil Konior. All rights reserved.
*/

///
/// Folds a chained comparison written in operator syntax into one boolean, so
/// `chain!(5 <= x < 15)` reads the way mathematics does instead of the way the
/// compiler would parse it. The first operator fixes the chain order, ascending
/// chains accept only `<`/`<=`, descending only `>`/`>=`, and a chain mixing
/// both doesn't compile. Operands are single tokens, parenthesize anything
/// larger: `chain!((low + 1) <= x < (high * 2))`.
///
#[macro_export]
macro_rules! chain {
    ($first:tt $($rest:tt)+) => {
        $crate::chain_links!($crate::chain::expr::Chain::begin(&$first), $($rest)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! chain_links {
    ($link:expr, <= $operand:tt $($rest:tt)*) => {
        $crate::chain_links!($link.le(&$operand), $($rest)*)
    };
    ($link:expr, < $operand:tt $($rest:tt)*) => {
        $crate::chain_links!($link.lt(&$operand), $($rest)*)
    };
    ($link:expr, >= $operand:tt $($rest:tt)*) => {
        $crate::chain_links!($link.ge(&$operand), $($rest)*)
    };
    ($link:expr, > $operand:tt $($rest:tt)*) => {
        $crate::chain_links!($link.gt(&$operand), $($rest)*)
    };
    ($link:expr,) => {
        $link.result()
    };
}
