use std::fmt;

/// 成员工厂：未提供 `object` 时为每次定义构造一个全新的载荷
pub trait MemberFactory<T>: Send + Sync {
    fn new_member(&self) -> T;
}

impl<T> fmt::Debug for dyn MemberFactory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MemberFactory(..)")
    }
}

/// Builds payloads with `T::default()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultFactory;

impl<T: Default> MemberFactory<T> for DefaultFactory {
    fn new_member(&self) -> T {
        T::default()
    }
}

impl<T, F> MemberFactory<T> for F
where
    F: Fn() -> T + Send + Sync,
{
    fn new_member(&self) -> T {
        self()
    }
}

pub type DynFactory<T> = Box<dyn MemberFactory<T>>;
