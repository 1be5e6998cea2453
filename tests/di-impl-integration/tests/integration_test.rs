//! 依赖注入容器集中集成测试：显式注册与解析

mod fixtures;

use di_abstractions::{DiContainer, RegisterOptions};
use di_impl::DiContainerImpl;
use fixtures::*;
use infrastructure_common::{DependencyError, Lifetime};
use std::sync::Arc;

#[test]
fn test_register_same_type_twice_without_name_fails() {
    init_logging();
    let container = DiContainerImpl::new();

    container
        .register::<dyn Dummy, TestDummy>(RegisterOptions::default())
        .unwrap();
    let result = container.register::<dyn Dummy, TestDummy>(RegisterOptions::default());

    assert!(matches!(
        result,
        Err(DependencyError::DuplicateRegistration { .. })
    ));
}

#[test]
fn test_register_same_type_twice_with_same_name_fails() {
    init_logging();
    let container = DiContainerImpl::new();

    container
        .register::<dyn Dummy, TestDummy>(RegisterOptions::new().with_name("SameName"))
        .unwrap();
    let result =
        container.register::<dyn Dummy, TestDummy>(RegisterOptions::new().with_name("SameName"));

    assert!(matches!(
        result,
        Err(DependencyError::DuplicateRegistration { .. })
    ));
}

#[test]
fn test_register_type() {
    init_logging();
    let container = DiContainerImpl::new();

    container
        .register::<dyn Dummy, TestDummy>(RegisterOptions::default())
        .unwrap();

    let registrations = container.registrations();
    assert_eq!(registrations.len(), 1);

    let registration = &registrations[0];
    assert!(registration.implementation.is::<TestDummy>());
    assert!(registration.has_instance);
    assert_eq!(registration.key.name, "TestDummy");
    assert_eq!(registration.key.lifetime, Lifetime::Singleton);
    assert_eq!(registration.key.priority, 0);
    assert!(registration.key.interface.is::<dyn Dummy>());
}

#[test]
fn test_register_instance_with_parameters() {
    init_logging();
    let container = DiContainerImpl::new();

    container
        .register::<dyn Dummy, TestDummy>(
            RegisterOptions::transient()
                .with_instance(TestDummy { number: 123 })
                .with_priority(1)
                .with_name("MyDummyInstance"),
        )
        .unwrap();

    let registrations = container.registrations();
    assert_eq!(registrations.len(), 1);

    let registration = &registrations[0];
    assert_eq!(registration.key.name, "MyDummyInstance");
    assert_eq!(registration.key.lifetime, Lifetime::Transient);
    assert_eq!(registration.key.priority, 1);
    assert!(!registration.has_instance);
}

#[test]
fn test_resolve_unregistered_fails() {
    init_logging();
    let container = DiContainerImpl::new();

    assert!(matches!(
        container.resolve::<dyn Dummy>(),
        Err(DependencyError::UnregisteredType { .. })
    ));
}

#[test]
fn test_resolve_unregistered_name_fails() {
    init_logging();
    let container = DiContainerImpl::new();

    container
        .register::<dyn ComplexDummy, TestComplexDummy>(RegisterOptions::default())
        .unwrap();

    assert!(matches!(
        container.resolve_named::<dyn ComplexDummy>("UnregisteredInstance"),
        Err(DependencyError::UnregisteredType { .. })
    ));
}

#[test]
fn test_resolve_singleton_instance_is_the_same() {
    init_logging();
    let container = DiContainerImpl::new();
    let dummy = Arc::new(TestDummy { number: 123 });

    container
        .register::<dyn Dummy, TestDummy>(
            RegisterOptions::singleton().with_instance(Arc::clone(&dummy)),
        )
        .unwrap();

    let resolved = container.resolve::<dyn Dummy>().unwrap();
    assert!(same(&resolved, &dummy));
}

#[test]
fn test_resolve_named_singleton_instance_is_the_same() {
    init_logging();
    let container = DiContainerImpl::new();
    let dummy_1 = Arc::new(TestDummy { number: 1 });
    let dummy_2 = Arc::new(TestDummy { number: 2 });

    container
        .register::<dyn Dummy, TestDummy>(
            RegisterOptions::singleton()
                .with_instance(Arc::clone(&dummy_1))
                .with_name("MyDummy_1"),
        )
        .unwrap();
    container
        .register::<dyn Dummy, TestDummy>(
            RegisterOptions::singleton()
                .with_instance(Arc::clone(&dummy_2))
                .with_name("MyDummy_2"),
        )
        .unwrap();

    let resolved = container.resolve_named::<dyn Dummy>("MyDummy_2").unwrap();
    assert!(same(&resolved, &dummy_2));
    assert_eq!(resolved.number(), 2);
}

#[test]
fn test_resolve_transient_instance_is_not_the_same() {
    init_logging();
    let container = DiContainerImpl::new();
    let dummy = Arc::new(TestDummy { number: 123 });

    container
        .register::<dyn Dummy, TestDummy>(
            RegisterOptions::transient().with_instance(Arc::clone(&dummy)),
        )
        .unwrap();

    let first = container.resolve::<dyn Dummy>().unwrap();
    let second = container.resolve::<dyn Dummy>().unwrap();
    assert!(!same(&first, &dummy));
    assert!(!same(&first, &second));
}

#[test]
fn test_resolve_singleton_with_dependencies() {
    init_logging();
    let container = DiContainerImpl::new();
    let dummy = Arc::new(TestDummy { number: 111 });
    let complex = Arc::new(TestComplexDummy {
        number: 222,
        ..TestComplexDummy::default()
    });

    container
        .register::<dyn Dummy, TestDummy>(
            RegisterOptions::singleton().with_instance(Arc::clone(&dummy)),
        )
        .unwrap();
    container
        .register::<dyn ComplexDummy, TestComplexDummy>(
            RegisterOptions::singleton().with_instance(Arc::clone(&complex)),
        )
        .unwrap();

    let resolved = container.resolve::<dyn ComplexDummy>().unwrap();
    assert!(same(&resolved, &complex));

    let resolved_dummy = resolved.dummy().unwrap();
    assert!(same(&resolved_dummy, &dummy));
    assert_eq!(resolved_dummy.number(), 111);
    assert_eq!(resolved.number(), 222);
}

#[test]
fn test_resolve_singleton_with_nested_dependencies() {
    init_logging();
    let container = DiContainerImpl::new();
    let more_complex = Arc::new(TestMoreComplexDummy {
        name: "1234".to_string(),
        ..TestMoreComplexDummy::default()
    });
    let complex = Arc::new(TestComplexDummy {
        number: 111,
        ..TestComplexDummy::default()
    });
    let dummy = Arc::new(TestDummy { number: 222 });

    container
        .register::<dyn MoreComplexDummy, TestMoreComplexDummy>(
            RegisterOptions::singleton().with_instance(Arc::clone(&more_complex)),
        )
        .unwrap();
    container
        .register::<dyn ComplexDummy, TestComplexDummy>(
            RegisterOptions::singleton().with_instance(Arc::clone(&complex)),
        )
        .unwrap();
    container
        .register::<dyn Dummy, TestDummy>(
            RegisterOptions::singleton().with_instance(Arc::clone(&dummy)),
        )
        .unwrap();

    let resolved = container.resolve::<dyn MoreComplexDummy>().unwrap();
    assert!(same(&resolved, &more_complex));
    assert_eq!(resolved.name(), "1234");

    let resolved_complex = resolved.complex_dummy().unwrap();
    assert!(same(&resolved_complex, &complex));
    assert_eq!(resolved_complex.number(), 111);

    let resolved_dummy = resolved_complex.dummy().unwrap();
    assert!(same(&resolved_dummy, &dummy));
    assert_eq!(resolved_dummy.number(), 222);
}

#[test]
fn test_resolve_singleton_with_cyclic_dependencies() {
    init_logging();
    let container = DiContainerImpl::new();
    let part_one = Arc::new(TestCyclicPartOne::default());
    let part_two = Arc::new(TestCyclicPartTwo::default());

    container
        .register::<dyn CyclicPartOne, TestCyclicPartOne>(
            RegisterOptions::singleton().with_instance(Arc::clone(&part_one)),
        )
        .unwrap();
    container
        .register::<dyn CyclicPartTwo, TestCyclicPartTwo>(
            RegisterOptions::singleton().with_instance(Arc::clone(&part_two)),
        )
        .unwrap();

    let resolved = container.resolve::<dyn CyclicPartOne>().unwrap();
    assert!(same(&resolved, &part_one));
    assert!(same(&resolved.part_two().unwrap(), &part_two));
    assert!(same(&part_two.part_one().unwrap(), &part_one));
}

#[test]
fn test_lowest_priority_wins_without_name() {
    init_logging();
    let container = DiContainerImpl::new();

    for (name, priority) in [("Second", 2), ("First", -1), ("Third", 3)] {
        container
            .register::<dyn Dummy, TestDummy>(
                RegisterOptions::singleton()
                    .with_instance(TestDummy { number: priority })
                    .with_priority(priority)
                    .with_name(name),
            )
            .unwrap();
    }

    assert_eq!(container.resolve::<dyn Dummy>().unwrap().number(), -1);
}

#[test]
fn test_containers_are_independent() {
    init_logging();
    let first = DiContainerImpl::new();
    let second = DiContainerImpl::new();

    first
        .register::<dyn Dummy, TestDummy>(RegisterOptions::default())
        .unwrap();

    assert!(first.is_registered::<dyn Dummy>(None));
    assert!(!second.is_registered::<dyn Dummy>(None));
}
