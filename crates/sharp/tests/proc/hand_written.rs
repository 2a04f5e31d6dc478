// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use sharp::{BoxError, Container, Injectable, InjectionPoints};

#[derive(Default, Injectable)]
struct Engine;

#[derive(Default)]
struct Car {
    engine: Option<Box<Engine>>,
}

impl Injectable for Car {
    fn construct() -> Result<Self, BoxError> {
        Ok(Self::default())
    }

    fn injection_points() -> InjectionPoints<Self> {
        InjectionPoints::new().method("set_engine", |car: &mut Self, engine: Box<Engine>| {
            car.engine = Some(engine);
        })
    }
}

sharp::concrete!(Car);

fn main() {
    let car = Container::new().resolve::<Car>().unwrap();
    assert!(car.engine.is_some());
}
