//! 集成测试共用的测试组件
#![allow(dead_code)]

use component_macros::Component;
use di_abstractions::{
    provides, AutoRegistered, Constructor, ContainerModule, Injected, Parameter, TypeDescriptor,
};
use std::sync::{Arc, Once};

static INIT: Once = Once::new();

/// 初始化测试日志
pub fn init_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// 两个 `Arc` 是否指向同一个对象，可跨接口比较
pub fn same<A: ?Sized, B: ?Sized>(left: &Arc<A>, right: &Arc<B>) -> bool {
    std::ptr::eq(Arc::as_ptr(left).cast::<()>(), Arc::as_ptr(right).cast::<()>())
}

pub trait Dummy: Send + Sync {
    fn number(&self) -> i32;
}

#[derive(Debug, Default, Component)]
#[auto_register(dyn Dummy)]
pub struct TestDummy {
    pub number: i32,
}

impl Dummy for TestDummy {
    fn number(&self) -> i32 {
        self.number
    }
}

/// 第二个 `Dummy` 实现，无参构造时的数值可与 [`TestDummy`] 区分
#[derive(Debug, Component)]
pub struct TestSecondDummy {
    pub number: i32,
}

impl Default for TestSecondDummy {
    fn default() -> Self {
        Self { number: 2 }
    }
}

impl Dummy for TestSecondDummy {
    fn number(&self) -> i32 {
        self.number
    }
}

provides!(TestSecondDummy => dyn Dummy);

pub trait ComplexDummy: Send + Sync {
    fn dummy(&self) -> Option<Arc<dyn Dummy>>;
    fn number(&self) -> i32;
}

#[derive(Default, Component)]
#[auto_register(dyn ComplexDummy, name = "MyComplexDummy")]
pub struct TestComplexDummy {
    #[inject]
    pub dummy: Injected<dyn Dummy>,
    pub number: i32,
}

impl ComplexDummy for TestComplexDummy {
    fn dummy(&self) -> Option<Arc<dyn Dummy>> {
        self.dummy.get()
    }

    fn number(&self) -> i32 {
        self.number
    }
}

pub trait MoreComplexDummy: Send + Sync {
    fn complex_dummy(&self) -> Option<Arc<dyn ComplexDummy>>;
    fn name(&self) -> &str;
}

#[derive(Default, Component)]
#[auto_register(dyn MoreComplexDummy, transient, priority = 1, name = "MoreComplex")]
pub struct TestMoreComplexDummy {
    #[inject]
    pub complex_dummy: Injected<dyn ComplexDummy>,
    pub name: String,
}

impl MoreComplexDummy for TestMoreComplexDummy {
    fn complex_dummy(&self) -> Option<Arc<dyn ComplexDummy>> {
        self.complex_dummy.get()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

pub trait CyclicPartOne: Send + Sync {
    fn part_two(&self) -> Option<Arc<dyn CyclicPartTwo>>;
}

pub trait CyclicPartTwo: Send + Sync {
    fn part_one(&self) -> Option<Arc<dyn CyclicPartOne>>;
}

#[derive(Default, Component)]
pub struct TestCyclicPartOne {
    #[inject]
    part_two: Injected<dyn CyclicPartTwo>,
}

impl CyclicPartOne for TestCyclicPartOne {
    fn part_two(&self) -> Option<Arc<dyn CyclicPartTwo>> {
        self.part_two.get()
    }
}

#[derive(Default, Component)]
pub struct TestCyclicPartTwo {
    #[inject]
    part_one: Injected<dyn CyclicPartOne>,
}

impl CyclicPartTwo for TestCyclicPartTwo {
    fn part_one(&self) -> Option<Arc<dyn CyclicPartOne>> {
        self.part_one.get()
    }
}

provides!(TestCyclicPartOne => dyn CyclicPartOne);
provides!(TestCyclicPartTwo => dyn CyclicPartTwo);

/// 基础测试模块：三个自动注册类型和一对未标记的循环依赖类型
pub struct VInjectorTestsModule;

impl ContainerModule for VInjectorTestsModule {
    fn descriptors(&self) -> Vec<TypeDescriptor> {
        vec![
            TestDummy::descriptor(),
            TestComplexDummy::descriptor(),
            TestMoreComplexDummy::descriptor(),
            TypeDescriptor::of::<TestCyclicPartOne>(),
            TypeDescriptor::of::<TestCyclicPartTwo>(),
        ]
    }
}

pub trait DummyWithCtor: Send + Sync {
    fn dummy(&self) -> Option<Arc<dyn Dummy>>;
    fn number(&self) -> i32;
}

macro_rules! dummy_with_ctor {
    ($(#[$attr:meta])* $name:ident, $dummy:expr, $number:expr) => {
        #[derive(Default, Component)]
        $(#[$attr])*
        #[component(constructor = Self::injector)]
        pub struct $name {
            dummy: Option<Arc<dyn Dummy>>,
            number: i32,
        }

        impl $name {
            fn injector() -> Constructor<Self> {
                Constructor::new(|args| {
                    Ok(Self {
                        dummy: args.service::<dyn Dummy>()?,
                        number: args.value::<i32>()?,
                    })
                })
                .parameter($dummy)
                .parameter($number)
            }
        }

        impl DummyWithCtor for $name {
            fn dummy(&self) -> Option<Arc<dyn Dummy>> {
                self.dummy.clone()
            }

            fn number(&self) -> i32 {
                self.number
            }
        }
    };
}

dummy_with_ctor!(
    #[auto_register(dyn DummyWithCtor, transient, name = "ComplexDummyWithCtor")]
    TestDummyWithCtor,
    Parameter::service::<dyn Dummy>("dummy"),
    Parameter::value::<i32>("number")
);

dummy_with_ctor!(
    #[auto_register(dyn DummyWithCtor, transient, name = "ComplexDummyWithCtorAndPrimitivesWithValues")]
    TestDummyWithCtorAndDefault,
    Parameter::service::<dyn Dummy>("dummy"),
    Parameter::value::<i32>("number").with_default(12)
);

dummy_with_ctor!(
    #[auto_register(dyn DummyWithCtor, transient, name = "ComplexDummyWithCtorAndZeroDefault")]
    TestDummyWithCtorAndZeroDefault,
    Parameter::service::<dyn Dummy>("dummy"),
    Parameter::value::<i32>("number").with_default(0)
);

dummy_with_ctor!(
    #[auto_register(dyn DummyWithCtor, transient, name = "ComplexDummyWithCtorAndVInjectParameter")]
    TestDummyWithInjectedParameter,
    Parameter::service::<dyn Dummy>("dummy").injected(),
    Parameter::value::<i32>("number")
);

dummy_with_ctor!(
    #[auto_register(dyn DummyWithCtor, transient, name = "ComplexDummyWithCtorAndVInjectParameterWithNameA")]
    TestDummyWithNameA,
    Parameter::service::<dyn Dummy>("dummy").named("DummyA"),
    Parameter::value::<i32>("number")
);

dummy_with_ctor!(
    #[auto_register(dyn DummyWithCtor, transient, name = "ComplexDummyWithCtorAndVInjectParameterWithNameB")]
    TestDummyWithNameB,
    Parameter::service::<dyn Dummy>("dummy").named("DummyB"),
    Parameter::value::<i32>("number")
);

pub trait FullComplexDummy: Send + Sync {
    fn more_complex_dummy(&self) -> Option<Arc<dyn MoreComplexDummy>>;
    fn property_inject_dummy(&self) -> Option<Arc<dyn Dummy>>;
}

/// 构造函数注入与属性注入同时使用
#[derive(Default, Component)]
#[auto_register(dyn FullComplexDummy, transient, name = "FullComplexDummy")]
#[component(constructor = Self::injector)]
pub struct TestFullComplexDummy {
    more_complex_dummy: Option<Arc<dyn MoreComplexDummy>>,
    #[inject(name = "DummyA")]
    property_inject_dummy: Injected<dyn Dummy>,
}

impl TestFullComplexDummy {
    fn injector() -> Constructor<Self> {
        Constructor::new(|args| {
            Ok(Self {
                more_complex_dummy: args.service::<dyn MoreComplexDummy>()?,
                property_inject_dummy: Injected::new(),
            })
        })
        .parameter(Parameter::service::<dyn MoreComplexDummy>("more_complex_dummy").injected())
    }
}

impl FullComplexDummy for TestFullComplexDummy {
    fn more_complex_dummy(&self) -> Option<Arc<dyn MoreComplexDummy>> {
        self.more_complex_dummy.clone()
    }

    fn property_inject_dummy(&self) -> Option<Arc<dyn Dummy>> {
        self.property_inject_dummy.get()
    }
}

/// 构造函数注入测试模块
pub struct CtorDummiesModule;

impl ContainerModule for CtorDummiesModule {
    fn descriptors(&self) -> Vec<TypeDescriptor> {
        vec![
            TestDummyWithCtor::descriptor(),
            TestDummyWithCtorAndDefault::descriptor(),
            TestDummyWithCtorAndZeroDefault::descriptor(),
            TestDummyWithInjectedParameter::descriptor(),
            TestDummyWithNameA::descriptor(),
            TestDummyWithNameB::descriptor(),
            TestFullComplexDummy::descriptor(),
        ]
    }
}
