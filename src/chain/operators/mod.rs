/*
 * Copyright (c) 2022 Kamil Konior. All rights reserved.
*/

use std::fmt;

use crate::chain::operators::ordering::{
    Greater, GreaterOrEqual, Lower, LowerOrEqual, RelationalOperator,
};

pub mod ordering;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Relation {
    Lower,
    LowerOrEqual,
    Greater,
    GreaterOrEqual,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ChainOrder {
    Ascending,
    Descending,
}

impl Relation {
    pub fn order(&self) -> ChainOrder {
        match self {
            Relation::Lower | Relation::LowerOrEqual => ChainOrder::Ascending,
            Relation::Greater | Relation::GreaterOrEqual => ChainOrder::Descending,
        }
    }

    pub fn compare<L, R>(&self, left: &L, right: &R) -> bool
    where
        L: PartialOrd<R> + ?Sized,
        R: ?Sized,
    {
        match self {
            Relation::Lower => Lower::compare(left, right),
            Relation::LowerOrEqual => LowerOrEqual::compare(left, right),
            Relation::Greater => Greater::compare(left, right),
            Relation::GreaterOrEqual => GreaterOrEqual::compare(left, right),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Relation::Lower => "<",
            Relation::LowerOrEqual => "<=",
            Relation::Greater => ">",
            Relation::GreaterOrEqual => ">=",
        }
    }
}

impl ChainOrder {
    pub fn permits(&self, relation: Relation) -> bool {
        relation.order() == *self
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for ChainOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainOrder::Ascending => f.write_str("ascending"),
            ChainOrder::Descending => f.write_str("descending"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::chain::operators::{ChainOrder, Relation};

    #[test]
    fn should_assign_relations_to_their_chain_order() {
        assert_eq!(ChainOrder::Ascending, Relation::Lower.order());
        assert_eq!(ChainOrder::Ascending, Relation::LowerOrEqual.order());
        assert_eq!(ChainOrder::Descending, Relation::Greater.order());
        assert_eq!(ChainOrder::Descending, Relation::GreaterOrEqual.order());
    }

    #[test]
    fn should_permit_only_relations_of_matching_order() {
        assert!(ChainOrder::Ascending.permits(Relation::Lower));
        assert!(ChainOrder::Ascending.permits(Relation::LowerOrEqual));
        assert!(!ChainOrder::Ascending.permits(Relation::Greater));
        assert!(!ChainOrder::Ascending.permits(Relation::GreaterOrEqual));

        assert!(ChainOrder::Descending.permits(Relation::Greater));
        assert!(ChainOrder::Descending.permits(Relation::GreaterOrEqual));
        assert!(!ChainOrder::Descending.permits(Relation::Lower));
        assert!(!ChainOrder::Descending.permits(Relation::LowerOrEqual));
    }

    #[test]
    fn should_dispatch_comparison_through_relation() {
        //given
        let (left, right) = (3, 7);

        //then
        assert!(Relation::Lower.compare(&left, &right));
        assert!(Relation::LowerOrEqual.compare(&left, &right));
        assert!(!Relation::Greater.compare(&left, &right));
        assert!(!Relation::GreaterOrEqual.compare(&left, &right));
    }
}
