/*
 * Copyright (c) 2022 Kamil Konior. All rights reserved.
*/

use std::marker::PhantomData;

use crate::chain::expr::{Ascending, Descending, Head, Link};
use crate::chain::operators::ordering::{
    Greater, GreaterOrEqual, Lower, LowerOrEqual, RelationalOperator,
};

impl<'a, T: ?Sized> Head<'a, T> {
    pub fn lt<'b, R>(self, operand: &'b R) -> Link<'b, R, Ascending>
    where
        T: PartialOrd<R>,
        R: ?Sized,
    {
        Link::new(operand, Lower::compare(self.first, operand))
    }

    pub fn le<'b, R>(self, operand: &'b R) -> Link<'b, R, Ascending>
    where
        T: PartialOrd<R>,
        R: ?Sized,
    {
        Link::new(operand, LowerOrEqual::compare(self.first, operand))
    }

    pub fn gt<'b, R>(self, operand: &'b R) -> Link<'b, R, Descending>
    where
        T: PartialOrd<R>,
        R: ?Sized,
    {
        Link::new(operand, Greater::compare(self.first, operand))
    }

    pub fn ge<'b, R>(self, operand: &'b R) -> Link<'b, R, Descending>
    where
        T: PartialOrd<R>,
        R: ?Sized,
    {
        Link::new(operand, GreaterOrEqual::compare(self.first, operand))
    }
}

impl<'a, T: ?Sized> Link<'a, T, Ascending> {
    pub fn lt<'b, R>(self, operand: &'b R) -> Link<'b, R, Ascending>
    where
        T: PartialOrd<R>,
        R: ?Sized,
    {
        Link::new(operand, self.satisfied && Lower::compare(self.last, operand))
    }

    pub fn le<'b, R>(self, operand: &'b R) -> Link<'b, R, Ascending>
    where
        T: PartialOrd<R>,
        R: ?Sized,
    {
        Link::new(
            operand,
            self.satisfied && LowerOrEqual::compare(self.last, operand),
        )
    }
}

impl<'a, T: ?Sized> Link<'a, T, Descending> {
    pub fn gt<'b, R>(self, operand: &'b R) -> Link<'b, R, Descending>
    where
        T: PartialOrd<R>,
        R: ?Sized,
    {
        Link::new(
            operand,
            self.satisfied && Greater::compare(self.last, operand),
        )
    }

    pub fn ge<'b, R>(self, operand: &'b R) -> Link<'b, R, Descending>
    where
        T: PartialOrd<R>,
        R: ?Sized,
    {
        Link::new(
            operand,
            self.satisfied && GreaterOrEqual::compare(self.last, operand),
        )
    }
}

impl<'a, T: ?Sized, O> Link<'a, T, O> {
    fn new(last: &'a T, satisfied: bool) -> Self {
        Self {
            last,
            satisfied,
            order: PhantomData,
        }
    }

    pub fn result(&self) -> bool {
        self.satisfied
    }
}

impl<T: ?Sized, O> From<Link<'_, T, O>> for bool {
    fn from(link: Link<'_, T, O>) -> bool {
        link.result()
    }
}
