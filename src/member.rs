use crate::error::{EnumFieldError, Result};
use parking_lot::RwLock;
use std::fmt;

// 载荷存储：封存后只读，无需加锁；未封存成员通过读写锁允许修改
enum Slot<T> {
    Sealed(T),
    Mutable(RwLock<T>),
}

/// A registered member: a payload plus the `id` and `name` the registry
/// attached to it.
///
/// `id` and `name` are fixed at construction. The payload is read-only when
/// the member is sealed; members defined with `seal = false` stay mutable.
pub struct Member<T> {
    id: i64,
    name: String,
    slot: Slot<T>,
}

impl<T> Member<T> {
    pub(crate) fn new(id: i64, name: String, value: T, sealed: bool) -> Self {
        let slot = if sealed {
            Slot::Sealed(value)
        } else {
            Slot::Mutable(RwLock::new(value))
        };
        Self { id, name, slot }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_sealed(&self) -> bool {
        matches!(self.slot, Slot::Sealed(_))
    }

    /// Run `f` against the payload.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        match &self.slot {
            Slot::Sealed(v) => f(v),
            Slot::Mutable(lock) => f(&*lock.read()),
        }
    }

    /// Cloned snapshot of the payload.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.with(T::clone)
    }

    /// Mutate the payload in place. Fails with `ImmutableMember` once sealed.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> Result<R> {
        match &self.slot {
            Slot::Sealed(_) => {
                tracing::warn!(member = %self.name, id = self.id, "write to sealed member rejected");
                Err(self.immutable())
            }
            Slot::Mutable(lock) => Ok(f(&mut *lock.write())),
        }
    }

    /// Swap the payload, returning the previous value.
    pub fn replace(&self, value: T) -> Result<T> {
        self.update(|slot| std::mem::replace(slot, value))
    }

    fn immutable(&self) -> EnumFieldError {
        EnumFieldError::ImmutableMember {
            name: self.name.clone(),
            id: self.id,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Member<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with(|v| {
            f.debug_struct("Member")
                .field("id", &self.id)
                .field("name", &self.name)
                .field("sealed", &self.is_sealed())
                .field("value", v)
                .finish()
        })
    }
}

impl<T> PartialEq for Member<T> {
    // 同一注册表内 id 唯一，按 id + name 判等即可
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name
    }
}
impl<T> Eq for Member<T> {}
