use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every demonstration the binary can run, one per pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DemoKind {
    Strategy,
    Observer,
    Decorator,
    FactoryMethod,
    Singleton,
    Command,
    Adapter,
    Facade,
    TemplateMethod,
    Iterator,
    Composite,
    State,
    Proxy,
}

impl DemoKind {
    pub const ALL: [DemoKind; 13] = [
        DemoKind::Strategy,
        DemoKind::Observer,
        DemoKind::Decorator,
        DemoKind::FactoryMethod,
        DemoKind::Singleton,
        DemoKind::Command,
        DemoKind::Adapter,
        DemoKind::Facade,
        DemoKind::TemplateMethod,
        DemoKind::Iterator,
        DemoKind::Composite,
        DemoKind::State,
        DemoKind::Proxy,
    ];

    pub fn pattern_name(&self) -> &'static str {
        match self {
            DemoKind::Strategy => "Strategy",
            DemoKind::Observer => "Observer",
            DemoKind::Decorator => "Decorator",
            DemoKind::FactoryMethod => "Factory Method",
            DemoKind::Singleton => "Singleton",
            DemoKind::Command => "Command",
            DemoKind::Adapter => "Adapter",
            DemoKind::Facade => "Facade",
            DemoKind::TemplateMethod => "Template Method",
            DemoKind::Iterator => "Iterator",
            DemoKind::Composite => "Composite",
            DemoKind::State => "State",
            DemoKind::Proxy => "Proxy",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            DemoKind::Strategy => "a duck whose quacking behaviour is injected",
            DemoKind::Observer => "a weather station pushing updates to subscribed displays",
            DemoKind::Decorator => "text readers wrapped in reversing and upper-casing layers",
            DemoKind::FactoryMethod => "drones built by destination-specific factories",
            DemoKind::Singleton => "a lazily constructed shared chocolate boiler",
            DemoKind::Command => "a remote control issuing device commands",
            DemoKind::Adapter => "a split user query adapted to the single-query interface",
            DemoKind::Facade => "one call hiding user, availability and product services",
            DemoKind::TemplateMethod => "a fixed beverage recipe with customisable steps",
            DemoKind::Iterator => "uniform traversal over differently stored menus",
            DemoKind::Composite => "tree-shaped menus printed and traversed uniformly",
            DemoKind::State => "a gumball machine whose behaviour depends on its state",
            DemoKind::Proxy => "a local stand-in fetching remote machine data on access",
        }
    }

    /// The name accepted on the command line and in the config file.
    pub fn cli_name(&self) -> String {
        self.to_possible_value()
            .map(|value| value.get_name().to_string())
            .unwrap_or_else(|| self.pattern_name().to_lowercase())
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern_name())
    }
}
