// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use sharp::{Container, Injectable};

trait Repository {
    fn find(&self, id: u32) -> Option<String>;
}

#[derive(Default, Injectable)]
struct InMemoryRepository;

impl Repository for InMemoryRepository {
    fn find(&self, id: u32) -> Option<String> {
        (id == 7).then(|| "seven".to_string())
    }
}

sharp::interface!(dyn Repository = [InMemoryRepository]);

#[derive(Default, Injectable)]
struct Audit;

#[derive(Default, Injectable)]
#[injectable(setters(set_audit))]
struct Service {
    #[inject]
    pub repository: Option<Box<dyn Repository>>,
    audit: Option<Box<Audit>>,
}

impl Service {
    fn set_audit(&mut self, audit: Box<Audit>) {
        self.audit = Some(audit);
    }
}

fn main() {
    let mut container = Container::new();
    container.bind::<dyn Repository, InMemoryRepository>().unwrap();

    let service = container.resolve::<Service>().unwrap();
    assert_eq!(service.repository.unwrap().find(7).as_deref(), Some("seven"));
    assert!(service.audit.is_some());
}
