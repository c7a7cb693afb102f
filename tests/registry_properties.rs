//! Integration tests for the composition registry lifecycle guarantees.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::sync::{Arc, Barrier, Weak};
use std::thread;
use std::time::Duration;

use inspection_service_backend::core::errors::RegistryError;
use inspection_service_backend::core::registry::ServiceRegistry;

struct Counted {
    serial: usize,
}

struct NodeA {
    _b: Arc<NodeB>,
}

struct NodeB {
    _a: Arc<NodeA>,
}

struct NodeC {
    _a: Arc<NodeA>,
}

/// 별도 스레드에서 해석하고, 제한 시간 안에 끝나지 않으면 테스트를 실패시킵니다.
fn resolve_on_thread<T, F>(work: F) -> mpsc::Receiver<Result<Arc<T>, RegistryError>>
where
    T: Send + Sync + 'static,
    F: FnOnce() -> Result<Arc<T>, RegistryError> + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(work());
    });
    rx
}

const HANG_LIMIT: Duration = Duration::from_secs(5);

fn counting_registry(calls: &Arc<AtomicUsize>) -> ServiceRegistry {
    let registry = ServiceRegistry::new();
    let counter = calls.clone();
    registry.register(move |_| {
        let serial = counter.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(Counted { serial }))
    });
    registry
}

#[test]
fn test_resolve_returns_identical_instance_and_invokes_factory_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let registry = counting_registry(&calls);

    let first = registry.resolve::<Counted>().unwrap();
    for _ in 0..10 {
        let again = registry.resolve::<Counted>().unwrap();
        assert!(Arc::ptr_eq(&first, &again));
    }

    assert_eq!(first.serial, 0);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(registry.is_materialized::<Counted>());
}

#[test]
fn test_unregistered_type_fails_without_partial_construction() {
    let calls = Arc::new(AtomicUsize::new(0));
    let registry = counting_registry(&calls);

    let err = registry.resolve::<NodeC>().err().unwrap();

    assert!(matches!(err, RegistryError::UnregisteredType { type_name } if type_name.ends_with("NodeC")));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(registry.materialized_count(), 0);
}

#[test]
fn test_missing_dependency_leaves_entry_registered() {
    let registry = ServiceRegistry::new();
    registry.register(|r| Ok(Arc::new(NodeC { _a: r.resolve::<NodeA>()? })));

    let err = registry.resolve::<NodeC>().err().unwrap();
    assert!(matches!(err, RegistryError::UnregisteredType { .. }));
    assert!(registry.contains::<NodeC>());
    assert!(!registry.is_materialized::<NodeC>());
}

#[test]
fn test_two_node_cycle_is_reported() {
    let registry = ServiceRegistry::new();
    registry.register(|r| Ok(Arc::new(NodeA { _b: r.resolve::<NodeB>()? })));
    registry.register(|r| Ok(Arc::new(NodeB { _a: r.resolve::<NodeA>()? })));

    let err = registry.resolve::<NodeA>().err().unwrap();

    assert_eq!(
        err,
        RegistryError::CyclicDependency {
            path: "NodeA -> NodeB -> NodeA".to_string()
        }
    );
    assert_eq!(registry.materialized_count(), 0);
}

#[test]
fn test_cycle_reached_through_outer_dependency() {
    let registry = ServiceRegistry::new();
    registry.register(|r| Ok(Arc::new(NodeA { _b: r.resolve::<NodeB>()? })));
    registry.register(|r| Ok(Arc::new(NodeB { _a: r.resolve::<NodeA>()? })));
    registry.register(|r| Ok(Arc::new(NodeC { _a: r.resolve::<NodeA>()? })));

    let err = registry.resolve::<NodeC>().err().unwrap();

    assert_eq!(
        err,
        RegistryError::CyclicDependency {
            path: "NodeC -> NodeA -> NodeB -> NodeA".to_string()
        }
    );
}

#[test]
fn test_concurrent_first_access_constructs_once() {
    const THREADS: usize = 16;

    let calls = Arc::new(AtomicUsize::new(0));
    let registry = Arc::new(ServiceRegistry::new());
    let counter = calls.clone();
    registry.register(move |_| {
        thread::sleep(Duration::from_millis(20));
        let serial = counter.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(Counted { serial }))
    });

    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let registry = registry.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                registry.resolve::<Counted>().unwrap()
            })
        })
        .collect();

    let instances: Vec<Arc<Counted>> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(instances.iter().all(|instance| Arc::ptr_eq(instance, &instances[0])));
}

#[test]
fn test_reregistering_materialized_type_keeps_cached_instance() {
    let registry = ServiceRegistry::new();
    registry.register(|_| Ok(Arc::new(String::from("first"))));
    let before = registry.resolve::<String>().unwrap();

    registry.register(|_| Ok(Arc::new(String::from("second"))));
    let after = registry.resolve::<String>().unwrap();

    assert!(Arc::ptr_eq(&before, &after));
    assert_eq!(after.as_str(), "first");
    assert_eq!(registry.len(), 1);

    registry.clear_instances();
    assert_eq!(registry.resolve::<String>().unwrap().as_str(), "second");
}

#[test]
fn test_reregistering_before_resolve_uses_last_factory() {
    let registry = ServiceRegistry::new();
    registry.register(|_| Ok(Arc::new(1u64)));
    registry.register(|_| Ok(Arc::new(2u64)));

    assert_eq!(*registry.resolve::<u64>().unwrap(), 2);
}

#[test]
fn test_register_instance_survives_clear() {
    let registry = ServiceRegistry::new();
    let config = Arc::new(String::from("prod"));
    registry.register_instance(config.clone());

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    registry.register(move |_| {
        let serial = counter.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(Counted { serial }))
    });

    assert!(registry.is_materialized::<String>());
    let first = registry.resolve::<Counted>().unwrap();

    registry.clear_instances();

    assert!(Arc::ptr_eq(&registry.resolve::<String>().unwrap(), &config));
    assert!(!registry.is_materialized::<Counted>());
    let second = registry.resolve::<Counted>().unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_initialize_all_stops_at_first_failure() {
    let registry = ServiceRegistry::new();
    registry.register(|_| Ok(Arc::new(5u32)));
    registry.register(|r| Ok(Arc::new(NodeC { _a: r.resolve::<NodeA>()? })));

    let err = registry.initialize_all().unwrap_err();

    assert!(matches!(err, RegistryError::UnregisteredType { .. }));
    assert!(registry.is_materialized::<u32>());
    assert!(!registry.is_materialized::<NodeC>());
}

#[test]
fn test_cycle_through_shared_registry_handle_is_reported() {
    let registry = Arc::new(ServiceRegistry::new());
    let handle: Weak<ServiceRegistry> = Arc::downgrade(&registry);

    // A는 주입된 Resolver 대신 공유 레지스트리로 B를 해석
    registry.register(move |_| {
        let shared = handle.upgrade().ok_or(RegistryError::unregistered("ServiceRegistry"))?;
        Ok(Arc::new(NodeA { _b: shared.resolve::<NodeB>()? }))
    });
    registry.register(|r| Ok(Arc::new(NodeB { _a: r.resolve::<NodeA>()? })));

    let worker = registry.clone();
    let rx = resolve_on_thread(move || worker.resolve::<NodeA>());
    let err = rx.recv_timeout(HANG_LIMIT).expect("resolve hung").err().unwrap();

    assert_eq!(
        err,
        RegistryError::CyclicDependency {
            path: "NodeA -> NodeB -> NodeA".to_string()
        }
    );
    assert_eq!(registry.materialized_count(), 0);
}

#[test]
fn test_cross_thread_cycle_is_reported() {
    let registry = Arc::new(ServiceRegistry::new());
    registry.register(|r| {
        thread::sleep(Duration::from_millis(100));
        Ok(Arc::new(NodeA { _b: r.resolve::<NodeB>()? }))
    });
    registry.register(|r| {
        thread::sleep(Duration::from_millis(100));
        Ok(Arc::new(NodeB { _a: r.resolve::<NodeA>()? }))
    });

    let barrier = Arc::new(Barrier::new(2));
    let (registry_a, barrier_a) = (registry.clone(), barrier.clone());
    let rx_a = resolve_on_thread(move || {
        barrier_a.wait();
        registry_a.resolve::<NodeA>()
    });
    let (registry_b, barrier_b) = (registry.clone(), barrier.clone());
    let rx_b = resolve_on_thread(move || {
        barrier_b.wait();
        registry_b.resolve::<NodeB>()
    });

    let a = rx_a.recv_timeout(HANG_LIMIT).expect("resolve of NodeA hung");
    let b = rx_b.recv_timeout(HANG_LIMIT).expect("resolve of NodeB hung");

    assert!(matches!(a, Err(RegistryError::CyclicDependency { .. })));
    assert!(matches!(b, Err(RegistryError::CyclicDependency { .. })));
    assert_eq!(registry.materialized_count(), 0);
}

fn gated_registry(
    calls: &Arc<AtomicUsize>,
    entered: &Arc<Barrier>,
    proceed: &Arc<Barrier>,
) -> Arc<ServiceRegistry> {
    let registry = Arc::new(ServiceRegistry::new());
    let (counter, entered, proceed) = (calls.clone(), entered.clone(), proceed.clone());
    registry.register(move |_| {
        entered.wait();
        proceed.wait();
        let serial = counter.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(Counted { serial }))
    });
    registry
}

#[test]
fn test_reregister_during_construction_keeps_single_instance() {
    let calls = Arc::new(AtomicUsize::new(0));
    let entered = Arc::new(Barrier::new(2));
    let proceed = Arc::new(Barrier::new(2));
    let registry = gated_registry(&calls, &entered, &proceed);

    let worker = registry.clone();
    let rx = resolve_on_thread(move || worker.resolve::<Counted>());

    entered.wait();
    let counter = calls.clone();
    registry.register(move |_| {
        let serial = counter.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(Counted { serial }))
    });
    proceed.wait();

    let built = rx.recv_timeout(HANG_LIMIT).expect("resolve hung").unwrap();
    let again = registry.resolve::<Counted>().unwrap();

    assert!(Arc::ptr_eq(&built, &again));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_clear_during_construction_keeps_single_instance() {
    let calls = Arc::new(AtomicUsize::new(0));
    let entered = Arc::new(Barrier::new(2));
    let proceed = Arc::new(Barrier::new(2));
    let registry = gated_registry(&calls, &entered, &proceed);

    let worker = registry.clone();
    let rx = resolve_on_thread(move || worker.resolve::<Counted>());

    entered.wait();
    registry.clear_instances();
    proceed.wait();

    let built = rx.recv_timeout(HANG_LIMIT).expect("resolve hung").unwrap();
    let again = registry.resolve::<Counted>().unwrap();

    assert!(Arc::ptr_eq(&built, &again));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
