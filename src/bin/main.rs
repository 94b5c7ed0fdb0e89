/*
 * Copyright (c) 2022 Kamil Konior. All rights reserved.
*/

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use chain_cmp::chain;

fn main() {
    let numbers = [3, 5, 7, 11, 14, 15, 18, 2, 9, 16, 4, 12];

    // Ascending numeric range
    for x in numbers {
        if chain!(5 <= x < 15) {
            print!("{x} ");
        }
    }
    println!();

    // Descending numeric range
    for x in numbers {
        if chain!(15 > x >= 5) {
            print!("{x} ");
        }
    }
    println!();

    // // Compilation error, ascending chains don't offer `>`
    // for x in numbers {
    //     if chain!(5 <= x > 15) {
    //         print!("{x} ");
    //     }
    // }

    // For comparison, the explicit conjunction form
    for x in numbers {
        if 5 <= x && x < 15 {
            print!("{x} ");
        }
    }
    println!();

    let words = [
        "abandon",
        "abase",
        "abate",
        "abbey",
        "abbreviate",
        "abdicate",
        "abdomen",
        "abduct",
        "abecedarian",
        "aberrant",
        "abet",
        "abeyance",
        "abhor",
        "abide",
        "ability",
        "ablaze",
    ];

    // Ascending string range
    for word in words {
        if chain!("abb" <= word < "abe") {
            print!("{word} ");
        }
    }
    println!();

    // Descending string range
    for word in words {
        if chain!("abe" > word >= "abb") {
            print!("{word} ");
        }
    }
    println!();

    // Combined fractional range check
    let triples = [
        (0.45, 0.5, 0.55),
        (0.3, 0.5, 0.55),
        (0.45, 0.4, 0.55),
        (0.5, 0.5, 0.5),
        (0.45, 0.5, 0.7),
    ];

    for (round, (a, b, c)) in triples.into_iter().enumerate() {
        if chain!(0.4 < a <= b <= c < 0.6) {
            println!("Round {round}) Variables in the range : {a} <= {b} <= {c}");
        }
    }
}
