use learning_patterns::{build_demo, DemoKind, DemoRunner, DemoSettings};

fn quiet_settings() -> DemoSettings {
    let mut settings = DemoSettings::default();
    settings.runner.linger_seconds = 0;
    settings.proxy.latency_ms = 0;
    settings
}

fn run(kind: DemoKind, settings: &DemoSettings) -> String {
    let runner = DemoRunner::new(build_demo(kind, settings));
    let mut out = Vec::new();
    runner
        .run(&mut out)
        .unwrap_or_else(|e| panic!("{} demo failed: {}", kind, e));
    String::from_utf8(out).unwrap()
}

#[test]
fn test_every_demo_runs_end_to_end() {
    let settings = quiet_settings();

    for kind in DemoKind::ALL {
        let output = run(kind, &settings);
        let banner = format!("=== {} ===\n", kind.pattern_name());
        assert!(output.starts_with(&banner), "{} output: {}", kind, output);
        assert!(output.len() > banner.len(), "{} printed nothing", kind);
    }
}

#[test]
fn test_key_lines_per_demo() {
    let settings = quiet_settings();

    let expectations = [
        (DemoKind::Strategy, "Long QUACK!"),
        (DemoKind::Observer, "Tmp changed:27 (Display 1)"),
        (DemoKind::Decorator, "JUST USE A GOTO STATEMENT."),
        (DemoKind::FactoryMethod, "is terminated and therefore unoperable."),
        (DemoKind::Command, "Channel set to 7"),
        (DemoKind::Adapter, "username: jlocke | firstname: John | country: England"),
        (DemoKind::Facade, "350"),
        (DemoKind::TemplateMethod, "Steeping the tea."),
        (DemoKind::Iterator, "Price: 12    Name: Meatballs"),
        (DemoKind::Composite, "▀▄ Menu Name: Exclusive Vegan ▄▀"),
        (DemoKind::State, "You turned, but there are no gumballs"),
        (DemoKind::Proxy, "Machine 45 is at Allen Street 35a"),
    ];

    for (kind, line) in expectations {
        let output = run(kind, &settings);
        assert!(output.contains(line), "{} output missing '{}':\n{}", kind, line, output);
    }
}

#[test]
fn test_singleton_demo_reports_shared_boiler() {
    let output = run(DemoKind::Singleton, &quiet_settings());
    assert!(output.contains("fill"));
    assert!(output.contains("boil"));
    assert!(output.contains("drain"));
}

#[test]
fn test_settings_change_demo_behaviour() {
    let mut settings = quiet_settings();
    settings.strategy.quack = learning_patterns::patterns::strategy::QuackStyle::Silent;
    settings.facade.role = learning_patterns::patterns::facade::UserRole::Customer;
    settings.state.gumballs = 0;

    assert!(run(DemoKind::Strategy, &settings).contains("<nothing>"));
    assert!(run(DemoKind::Facade, &settings).contains("UserNotAuthorised"));

    let state = run(DemoKind::State, &settings);
    assert!(state.contains("You can't insert a quarter, the machine is sold out"));
    assert!(!state.contains("A gumball comes rolling out the slot"));
}

#[test]
fn test_invalid_device_code_fails_the_command_demo() {
    let mut settings = quiet_settings();
    settings.command.device_code = "12".to_string();

    let runner = DemoRunner::new(build_demo(DemoKind::Command, &settings));
    let err = runner.run(&mut Vec::new()).unwrap_err();
    assert!(matches!(
        err,
        learning_patterns::PatternError::InvalidDeviceCode { .. }
    ));
}
