// One module per pattern demo. Modules never depend on each other.

pub mod adapter;
pub mod command;
pub mod composite;
pub mod decorator;
pub mod facade;
pub mod factory_method;
pub mod iterator;
pub mod observer;
pub mod proxy;
pub mod singleton;
pub mod state;
pub mod strategy;
pub mod template_method;
