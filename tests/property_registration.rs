use cobalt_di::{AnyArc, Delegate, Dependency, DependencyCollection, Key, Lifetime, ResolverContext};
use proptest::prelude::*;
use std::sync::Arc;

fn make_factory(value: u32) -> Delegate {
    Arc::new(move |_: &ResolverContext<'_>| Ok(Arc::new(value) as AnyArc))
}

proptest! {
    /// Re-adding records drawn from a small pool never grows the collection
    /// past the number of distinct records, regardless of insertion pattern.
    #[test]
    fn collection_length_equals_distinct_records(indices in prop::collection::vec(0usize..4, 0..32)) {
        let pool: Vec<Delegate> = (0..4).map(|v| make_factory(v)).collect();

        let mut collection = DependencyCollection::new();
        for &i in &indices {
            collection.add(Dependency::new(
                Key::of_type::<u32>(),
                pool[i].clone(),
                Lifetime::Singleton,
            ));
        }

        let mut distinct: Vec<usize> = indices.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(collection.len(), distinct.len());
    }

    /// Surviving records appear in first-occurrence order of their factory.
    #[test]
    fn collection_preserves_first_occurrence_order(indices in prop::collection::vec(0usize..4, 0..32)) {
        let pool: Vec<Delegate> = (0..4).map(|v| make_factory(v)).collect();

        let mut collection = DependencyCollection::new();
        for &i in &indices {
            collection.add(Dependency::new(
                Key::of_type::<u32>(),
                pool[i].clone(),
                Lifetime::Singleton,
            ));
        }

        let mut expected: Vec<usize> = Vec::new();
        for &i in &indices {
            if !expected.contains(&i) {
                expected.push(i);
            }
        }

        let stored: Vec<usize> = collection
            .iter()
            .map(|dep| {
                pool.iter()
                    .position(|f| Arc::ptr_eq(f, dep.factory()))
                    .unwrap()
            })
            .collect();
        prop_assert_eq!(stored, expected);
    }

    /// Lifetime participates in identity: the same factory registered under
    /// both lifetimes yields two records.
    #[test]
    fn lifetime_distinguishes_records(repeat in 1usize..8) {
        let factory = make_factory(0);

        let mut collection = DependencyCollection::new();
        for _ in 0..repeat {
            collection.add(Dependency::new(Key::of_type::<u32>(), factory.clone(), Lifetime::Singleton));
            collection.add(Dependency::new(Key::of_type::<u32>(), factory.clone(), Lifetime::Transient));
        }

        prop_assert_eq!(collection.len(), 2);
    }
}
