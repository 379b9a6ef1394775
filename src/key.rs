//! Registration keys for dependency storage and lookup.

use std::any::TypeId;

/// Key under which a dependency is registered and looked up.
///
/// Concrete types are identified by their `TypeId`; capability (trait object)
/// bindings are identified by their `std::any::type_name`, since trait objects
/// carry no `TypeId` of their own. The name in both variants is used for
/// diagnostics and error messages.
///
/// # Examples
///
/// ```rust
/// use cobalt_di::Key;
///
/// let type_key = Key::of_type::<u32>();
/// assert_eq!(type_key.display_name(), "u32");
///
/// trait Logger: Send + Sync {}
/// let trait_key = Key::of_trait::<dyn Logger>();
/// assert!(trait_key.display_name().contains("Logger"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Concrete type key with TypeId and type name for diagnostics
    Type(TypeId, &'static str),
    /// Capability binding key, identified by trait name
    Trait(&'static str),
}

impl Key {
    /// Key for a concrete type.
    pub fn of_type<T: 'static>() -> Key {
        Key::Type(TypeId::of::<T>(), std::any::type_name::<T>())
    }

    /// Key for a capability (trait object) binding.
    pub fn of_trait<T: ?Sized>() -> Key {
        Key::Trait(std::any::type_name::<T>())
    }

    /// The type or trait name, for display and error reporting.
    pub fn display_name(&self) -> &'static str {
        match self {
            Key::Type(_, name) => name,
            Key::Trait(name) => name,
        }
    }
}
