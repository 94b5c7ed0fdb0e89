/*
 * Copyright (c) 2022 Kamil Konior. All rights reserved.
*/

use anyhow::anyhow;

use crate::chain::error::ChainError;
use crate::chain::operators::{ChainOrder, Relation};

///
/// ChainState carries the chained comparison from one relational step to the next.
/// `last` is the rhs operand of the previous step, `satisfied` is the cumulative &&
/// of the previous comparisons. Every step produces a fresh state, the stepped
/// state is left untouched.
///
#[derive(Debug)]
pub struct ChainState<'a, T: ?Sized> {
    order: ChainOrder,
    last: &'a T,
    satisfied: bool,
}

impl<T: ?Sized> Clone for ChainState<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for ChainState<'_, T> {}

impl<'a, T: ?Sized> ChainState<'a, T> {
    pub fn begin(order: ChainOrder, first: &'a T) -> Self {
        Self {
            order,
            last: first,
            satisfied: true,
        }
    }

    pub fn order(&self) -> ChainOrder {
        self.order
    }

    pub fn result(&self) -> bool {
        self.satisfied
    }
}

impl<'a, T: PartialOrd + ?Sized> ChainState<'a, T> {
    pub fn step(self, relation: Relation, operand: &'a T) -> Result<Self, anyhow::Error> {
        if !self.order.permits(relation) {
            return Err(anyhow!(ChainError::InvalidChainOrder {
                order: self.order,
                relation,
            }));
        }

        Ok(Self {
            order: self.order,
            last: operand,
            satisfied: self.satisfied && relation.compare(self.last, operand),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::chain::error::ChainError;
    use crate::chain::operators::{ChainOrder, Relation};
    use crate::chain::state::ChainState;

    #[test]
    fn should_evaluate_ascending_chain() {
        //given
        let state = ChainState::begin(ChainOrder::Ascending, &5);

        //when
        let state = state
            .step(Relation::LowerOrEqual, &10)
            .and_then(|state| state.step(Relation::Lower, &15))
            .unwrap();

        //then
        assert!(state.result());
    }

    #[test]
    fn should_fail_ascending_chain_on_first_broken_pair() {
        //given
        let state = ChainState::begin(ChainOrder::Ascending, &5);

        //when
        let state = state
            .step(Relation::LowerOrEqual, &3)
            .and_then(|state| state.step(Relation::Lower, &15))
            .unwrap();

        //then
        assert!(!state.result());
    }

    #[test]
    fn should_evaluate_descending_chain() {
        //given
        let state = ChainState::begin(ChainOrder::Descending, &15);

        //when
        let state = state
            .step(Relation::Greater, &10)
            .and_then(|state| state.step(Relation::GreaterOrEqual, &5))
            .unwrap();

        //then
        assert!(state.result());
    }

    #[test]
    fn should_compare_each_operand_only_with_its_predecessor() {
        // 1 < 10 holds and 10 < 2 fails, whereas 1 < 2 would hold if the
        // chain ever skipped back to an earlier operand
        let state = ChainState::begin(ChainOrder::Ascending, &1)
            .step(Relation::Lower, &10)
            .and_then(|state| state.step(Relation::Lower, &2))
            .unwrap();

        assert!(!state.result());
    }

    #[test]
    fn should_reject_relation_of_opposite_order() {
        //given
        let state = ChainState::begin(ChainOrder::Ascending, &5)
            .step(Relation::Lower, &10)
            .unwrap();

        //when
        let err = state.step(Relation::Greater, &3).unwrap_err();

        //then
        assert!(matches!(
            err.downcast_ref::<ChainError>(),
            Some(ChainError::InvalidChainOrder {
                order: ChainOrder::Ascending,
                relation: Relation::Greater,
            })
        ));
    }

    #[test]
    fn should_reject_relation_of_opposite_order_even_when_already_failed() {
        //given
        let state = ChainState::begin(ChainOrder::Descending, &5)
            .step(Relation::Greater, &10)
            .unwrap();
        assert!(!state.result());

        //when
        let err = state.step(Relation::LowerOrEqual, &20).unwrap_err();

        //then
        assert!(err.downcast_ref::<ChainError>().is_some());
    }

    #[test]
    fn should_keep_stepped_state_untouched() {
        //given
        let start = ChainState::begin(ChainOrder::Ascending, &5);

        //when
        let failed = start.step(Relation::Lower, &3).unwrap();

        //then
        assert!(start.result());
        assert!(!failed.result());
        assert!(start.step(Relation::Lower, &10).unwrap().result());
    }

    #[test]
    fn should_read_result_idempotently() {
        let state = ChainState::begin(ChainOrder::Ascending, &"abb")
            .step(Relation::LowerOrEqual, &"abc")
            .unwrap();

        assert_eq!(state.result(), state.result());
        assert!(state.result());
    }
}
