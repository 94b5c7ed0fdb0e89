/*
 * Copyright (c) 2022 Kamil Konior. All rights reserved.
*/

pub mod chain;
