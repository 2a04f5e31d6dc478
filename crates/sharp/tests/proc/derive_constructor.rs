// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use sharp::{Container, Injectable};

#[derive(Default, Injectable)]
struct Clock;

#[derive(Injectable)]
#[injectable(constructor = Pool::with_capacity)]
struct Pool {
    #[inject]
    pub clock: Box<Clock>,
    capacity: usize,
}

impl Pool {
    fn with_capacity() -> Result<Self, std::num::ParseIntError> {
        Ok(Self {
            clock: Box::new(Clock),
            capacity: "16".parse()?,
        })
    }
}

fn main() {
    let pool = Container::new().resolve::<Pool>().unwrap();
    assert_eq!(pool.capacity, 16);
    let _clock: &Clock = &pool.clock;
}
