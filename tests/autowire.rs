use cobalt_di::{
    factory, Construct, Dependency, DependencyContainer, DiError, DiResult, Key, Lifetime,
    Resolver, ResolverContext,
};
use std::sync::Arc;

struct Repository {
    table: String,
}

impl Construct for Repository {
    fn construct(_r: &ResolverContext<'_>) -> DiResult<Self> {
        Ok(Repository {
            table: "users".to_string(),
        })
    }
}

struct Service {
    repo: Arc<Repository>,
}

impl Construct for Service {
    fn construct(r: &ResolverContext<'_>) -> DiResult<Self> {
        Ok(Service {
            repo: r.get::<Repository>()?,
        })
    }
}

struct Endpoint {
    service: Arc<Service>,
}

impl Construct for Endpoint {
    fn construct(r: &ResolverContext<'_>) -> DiResult<Self> {
        Ok(Endpoint {
            service: r.get::<Service>()?,
        })
    }
}

#[test]
fn test_autowiring_resolves_transitively() {
    let mut container = DependencyContainer::new();
    container.register::<Repository>(Lifetime::Singleton);
    container.register::<Service>(Lifetime::Transient);
    container.register::<Endpoint>(Lifetime::Transient);

    let provider = container.make();
    let endpoint = provider.get_required::<Endpoint>();

    assert_eq!(endpoint.service.repo.table, "users");
}

#[test]
fn test_missing_transitive_dependency_surfaces_root_cause() {
    // Endpoint -> Service -> Repository, but Repository is never registered.
    let mut container = DependencyContainer::new();
    container.register::<Service>(Lifetime::Transient);
    container.register::<Endpoint>(Lifetime::Transient);

    let provider = container.make();
    match provider.get::<Endpoint>() {
        Err(DiError::NotFound(name)) => assert!(name.contains("Repository")),
        other => panic!("expected NotFound for Repository, got {:?}", other.map(|_| ())),
    }
}

trait Notifier: Send + Sync {
    fn channel(&self) -> &str;
}

struct EmailNotifier;

impl Notifier for EmailNotifier {
    fn channel(&self) -> &str {
        "email"
    }
}

impl Construct for EmailNotifier {
    fn construct(_r: &ResolverContext<'_>) -> DiResult<Self> {
        Ok(EmailNotifier)
    }
}

#[test]
fn test_register_as_binds_concrete_and_capability_keys() {
    let mut container = DependencyContainer::new();
    container.register_as::<dyn Notifier, EmailNotifier>(|n| n, Lifetime::Singleton);

    let provider = container.make();

    let concrete = provider.get_required::<EmailNotifier>();
    assert_eq!(concrete.channel(), "email");

    let capability = provider.get_required_trait::<dyn Notifier>();
    assert_eq!(capability.channel(), "email");
}

#[test]
fn test_default_construction_path() {
    #[derive(Default)]
    struct Flags {
        verbose: bool,
    }

    let mut container = DependencyContainer::new();
    container.add(Dependency::new(
        Key::of_type::<Flags>(),
        factory::from_default::<Flags>(),
        Lifetime::Transient,
    ));

    let provider = container.make();
    let flags = provider.get_required::<Flags>();
    assert!(!flags.verbose);
}

#[test]
fn test_construction_failure_carries_type_and_cause() {
    struct Unbuildable;

    impl Construct for Unbuildable {
        fn construct(_r: &ResolverContext<'_>) -> DiResult<Self> {
            Err(DiError::construction::<Unbuildable>("no backing store configured"))
        }
    }

    let mut container = DependencyContainer::new();
    container.register::<Unbuildable>(Lifetime::Transient);

    let provider = container.make();
    match provider.get::<Unbuildable>() {
        Err(DiError::Construction { type_name, cause }) => {
            assert!(type_name.contains("Unbuildable"));
            assert_eq!(cause, "no backing store configured");
        }
        other => panic!("expected Construction error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_external_template_instancer() {
    struct Blueprint {
        label: String,
    }

    struct Widget {
        label: String,
        copy: usize,
    }

    let mut container = DependencyContainer::new();
    let template = Arc::new(Blueprint {
        label: "gear".to_string(),
    });
    let copies = Arc::new(std::sync::Mutex::new(0));
    let copies_clone = copies.clone();

    container.register_template::<Blueprint, Widget, _>(
        template,
        move |blueprint, _r| {
            let mut n = copies_clone.lock().unwrap();
            *n += 1;
            Ok(Widget {
                label: blueprint.label.clone(),
                copy: *n,
            })
        },
        Lifetime::Transient,
    );

    let provider = container.make();
    let first = provider.get_required::<Widget>();
    let second = provider.get_required::<Widget>();

    assert_eq!(first.label, "gear");
    assert_eq!(first.copy, 1);
    assert_eq!(second.copy, 2);
}
