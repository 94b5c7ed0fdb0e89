/*
 * Copyright (c) 2022 Kamil Konior. All rights reserved.
*/

use anyhow::anyhow;
use smallvec::SmallVec;

use crate::chain::error::ChainError;
use crate::chain::operators::{ChainOrder, Relation};

// Inline capacity covers realistic chains, longer ones spill to the heap.
const INLINE_LINKS: usize = 4;

///
/// ChainSequence is a runtime built comparison chain, for callers that only know
/// their relational steps at runtime. Links that break the chain order are rejected
/// on insertion, so evaluation itself can't fail.
///
#[derive(Debug)]
pub struct ChainSequence<'a, T: ?Sized> {
    order: ChainOrder,
    first: &'a T,
    links: SmallVec<[ChainLink<'a, T>; INLINE_LINKS]>,
}

#[derive(Debug)]
struct ChainLink<'a, T: ?Sized> {
    relation: Relation,
    operand: &'a T,
}

impl<T: ?Sized> Clone for ChainLink<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for ChainLink<'_, T> {}

impl<'a, T: PartialOrd + ?Sized> ChainSequence<'a, T> {
    pub fn begin(order: ChainOrder, first: &'a T) -> Self {
        Self {
            order,
            first,
            links: SmallVec::new(),
        }
    }

    pub fn link(mut self, relation: Relation, operand: &'a T) -> Result<Self, anyhow::Error> {
        if !self.order.permits(relation) {
            return Err(anyhow!(ChainError::InvalidChainOrder {
                order: self.order,
                relation,
            }));
        }

        self.links.push(ChainLink { relation, operand });
        Ok(self)
    }

    pub fn order(&self) -> ChainOrder {
        self.order
    }

    pub fn evaluate(&self) -> bool {
        let mut last = self.first;
        let mut satisfied = true;

        for link in &self.links {
            if !satisfied {
                break;
            }

            satisfied = link.relation.compare(last, link.operand);
            last = link.operand;
        }

        satisfied
    }
}
