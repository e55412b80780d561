use crate::config::DemoSettings;
use crate::core::{Demo, DemoKind};
use crate::patterns::{
    adapter, command, composite, decorator, facade, factory_method, iterator, observer, proxy,
    singleton, state, strategy, template_method,
};

/// Builds the Executor for `kind`, wiring in its section of `settings`.
pub fn build_demo(kind: DemoKind, settings: &DemoSettings) -> Box<dyn Demo> {
    match kind {
        DemoKind::Strategy => Box::new(strategy::Executor::new(settings.strategy.quack)),
        DemoKind::Observer => Box::new(observer::Executor),
        DemoKind::Decorator => Box::new(decorator::Executor::new(
            settings.decorator.source,
            settings.decorator.text.clone(),
        )),
        DemoKind::FactoryMethod => Box::new(factory_method::Executor),
        DemoKind::Singleton => Box::new(singleton::Executor),
        DemoKind::Command => Box::new(command::Executor::new(
            settings.command.device_code.clone(),
        )),
        DemoKind::Adapter => Box::new(adapter::Executor),
        DemoKind::Facade => Box::new(facade::Executor::new(
            settings.facade.role,
            settings.facade.item.clone(),
        )),
        DemoKind::TemplateMethod => Box::new(template_method::Executor),
        DemoKind::Iterator => Box::new(iterator::Executor),
        DemoKind::Composite => Box::new(composite::Executor),
        DemoKind::State => Box::new(state::Executor::new(settings.state.gumballs)),
        DemoKind::Proxy => Box::new(proxy::Executor::new(
            settings.proxy.machine_id,
            settings.proxy.new_ball_count,
            settings.proxy.latency(),
        )),
    }
}
