// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Beans used by every integration test binary.

use std::any::Any;

use sharp::Injectable;

#[derive(Debug, Default, Injectable)]
pub struct SimpleBean {
    pub label: String,
}

pub trait ISimple: Any {
    fn handle(&self, input: &str) -> String;
}

#[derive(Debug, Default, Injectable)]
pub struct BeanImplementsInterface;

impl ISimple for BeanImplementsInterface {
    fn handle(&self, input: &str) -> String {
        input.to_string()
    }
}

sharp::interface!(dyn ISimple = [BeanImplementsInterface]);

#[derive(Debug, Default, Injectable)]
pub struct ParentBean {
    #[inject]
    pub simple: Option<Box<SimpleBean>>,
}
