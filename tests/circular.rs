use cobalt_di::{DependencyContainer, DiError, Lifetime, Resolver};
use std::sync::Arc;

struct ServiceA {
    #[allow(dead_code)]
    b: Arc<ServiceB>,
}

struct ServiceB {
    #[allow(dead_code)]
    a: Arc<ServiceA>,
}

#[test]
fn test_two_node_cycle_is_reported() {
    let mut container = DependencyContainer::new();
    container.register_factory::<ServiceA, _>(
        |r| Ok(ServiceA { b: r.get::<ServiceB>()? }),
        Lifetime::Singleton,
    );
    container.register_factory::<ServiceB, _>(
        |r| Ok(ServiceB { a: r.get::<ServiceA>()? }),
        Lifetime::Singleton,
    );

    let provider = container.make();

    match provider.get::<ServiceA>() {
        Err(DiError::Circular(path)) => {
            assert!(path.len() >= 3);
            assert!(path[0].contains("ServiceA"));
            assert!(path.last().unwrap().contains("ServiceA"));
            assert!(path.iter().any(|n| n.contains("ServiceB")));
        }
        other => panic!("expected Circular, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_self_cycle_is_reported() {
    struct Recursive {
        #[allow(dead_code)]
        inner: Arc<Recursive>,
    }

    let mut container = DependencyContainer::new();
    container.register_factory::<Recursive, _>(
        |r| Ok(Recursive { inner: r.get::<Recursive>()? }),
        Lifetime::Transient,
    );

    let provider = container.make();

    match provider.get::<Recursive>() {
        Err(DiError::Circular(path)) => {
            assert_eq!(path.len(), 2);
            assert!(path[0].contains("Recursive"));
            assert_eq!(path[0], path[1]);
        }
        other => panic!("expected Circular, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_cycle_deep_in_graph_propagates_to_the_root_request() {
    // Entry -> Middle -> Looper -> Middle
    struct Entry;
    struct Middle;
    struct Looper;

    let mut container = DependencyContainer::new();
    container.register_factory::<Entry, _>(
        |r| {
            r.get::<Middle>()?;
            Ok(Entry)
        },
        Lifetime::Transient,
    );
    container.register_factory::<Middle, _>(
        |r| {
            r.get::<Looper>()?;
            Ok(Middle)
        },
        Lifetime::Transient,
    );
    container.register_factory::<Looper, _>(
        |r| {
            r.get::<Middle>()?;
            Ok(Looper)
        },
        Lifetime::Transient,
    );

    let provider = container.make();

    match provider.get::<Entry>() {
        Err(DiError::Circular(path)) => {
            assert!(path.iter().any(|n| n.contains("Middle")));
            assert!(path.iter().any(|n| n.contains("Looper")));
        }
        other => panic!("expected Circular, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_provider_stays_usable_after_a_cycle_error() {
    struct Knot {
        #[allow(dead_code)]
        inner: Arc<Knot>,
    }

    let mut container = DependencyContainer::new();
    container.register_factory::<Knot, _>(
        |r| Ok(Knot { inner: r.get::<Knot>()? }),
        Lifetime::Singleton,
    );
    container.register_instance(7i64);

    let provider = container.make();

    assert!(matches!(provider.get::<Knot>(), Err(DiError::Circular(_))));

    // The resolution stack unwinds cleanly: healthy lookups still work and the
    // cycle keeps being reported rather than misfiring as a depth error.
    assert_eq!(*provider.get_required::<i64>(), 7);
    assert!(matches!(provider.get::<Knot>(), Err(DiError::Circular(_))));
}

#[test]
fn test_diamond_is_not_a_cycle() {
    // Top depends on Left and Right, which both depend on Base. Sharing a
    // dependency must not trip the cycle detector.
    struct Base;
    struct Left;
    struct Right;
    struct Top;

    let mut container = DependencyContainer::new();
    container.register_factory::<Base, _>(|_| Ok(Base), Lifetime::Singleton);
    container.register_factory::<Left, _>(
        |r| {
            r.get::<Base>()?;
            Ok(Left)
        },
        Lifetime::Transient,
    );
    container.register_factory::<Right, _>(
        |r| {
            r.get::<Base>()?;
            Ok(Right)
        },
        Lifetime::Transient,
    );
    container.register_factory::<Top, _>(
        |r| {
            r.get::<Left>()?;
            r.get::<Right>()?;
            Ok(Top)
        },
        Lifetime::Transient,
    );

    let provider = container.make();
    assert!(provider.get::<Top>().is_ok());
}
