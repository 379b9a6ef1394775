//! Field injection: an explicit registry of injector functions per target type.
//!
//! There is no runtime field reflection in Rust, so injection targets are
//! described by injector functions registered at startup. Several injectors
//! may be registered for one type; they run in registration order, which lets
//! composed types layer their injections the way an inheritance chain would.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{DiError, DiResult};
use crate::provider::ResolverContext;

type Injector =
    Arc<dyn for<'a> Fn(&mut dyn Any, &ResolverContext<'a>) -> DiResult<()> + Send + Sync>;

#[derive(Clone, Default)]
pub(crate) struct InjectorRegistry {
    injectors: HashMap<TypeId, Vec<Injector>>,
}

impl InjectorRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn register<T, F>(&mut self, injector: F)
    where
        T: 'static,
        F: for<'a> Fn(&mut T, &ResolverContext<'a>) -> DiResult<()> + Send + Sync + 'static,
    {
        let erased: Injector = Arc::new(move |target, resolver| {
            let target = target
                .downcast_mut::<T>()
                .ok_or(DiError::TypeMismatch(std::any::type_name::<T>()))?;
            injector(target, resolver)
        });
        self.injectors.entry(TypeId::of::<T>()).or_default().push(erased);
    }

    /// Runs every injector registered for `type_id`, in registration order.
    /// A type with no injectors is left untouched. A mid-way failure aborts
    /// the remaining injectors; earlier assignments stay in place.
    pub(crate) fn run(
        &self,
        type_id: TypeId,
        target: &mut dyn Any,
        resolver: &ResolverContext<'_>,
    ) -> DiResult<()> {
        if let Some(injectors) = self.injectors.get(&type_id) {
            for injector in injectors {
                injector(target, resolver)?;
            }
        }
        Ok(())
    }
}
