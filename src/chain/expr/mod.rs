/*
 * Copyright (c) 2022 Kamil Konior. All rights reserved.
*/

use std::marker::PhantomData;

pub mod link;

///
/// Chain order markers. The first relational method called on a Head picks one
/// of them, and from there on the Link type only offers methods of that order,
/// so a mixed chain doesn't compile.
///
pub struct Ascending;

pub struct Descending;

///
/// Initiator of a comparison chain. Carries no state, it only captures the
/// first operand.
///
pub struct Chain;

impl Chain {
    pub fn begin<T: ?Sized>(first: &T) -> Head<'_, T> {
        Head { first }
    }
}

pub struct Head<'a, T: ?Sized> {
    first: &'a T,
}

///
/// Link transfers the chained comparison forward. `last` is the rhs operand of
/// the previous relational step, `satisfied` is the cumulative && of the
/// previous comparisons.
///
pub struct Link<'a, T: ?Sized, O> {
    last: &'a T,
    satisfied: bool,
    order: PhantomData<O>,
}
