/*
 * Copyright (c) 2022 Kamil Konior. All rights reserved.
*/

use crate::chain::operators::{ChainOrder, Relation};

#[derive(thiserror::Error, Debug)]
pub enum ChainError {
    #[error("Ambiguously ordered comparison chain: relation('{relation}') doesn't match chain order('{order}')")]
    InvalidChainOrder {
        order: ChainOrder,
        relation: Relation,
    },
}
