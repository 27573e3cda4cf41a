use crate::{error::Result, key::IntoMemberId, member::Member, registry::Registry};
use std::sync::Arc;

/// A host type that owns exactly one [`Registry`] of its own members.
///
/// `enumeration!` implements this with a lazily built `static` registry; the
/// provided methods forward to it.
pub trait EnumHost: Sized + Send + Sync + 'static {
    fn registry() -> &'static Registry<Self>;

    fn all() -> Vec<Arc<Member<Self>>> {
        Self::registry().all()
    }

    fn names() -> Vec<&'static str> {
        Self::registry().names()
    }

    fn member(name: &str) -> Option<&'static Arc<Member<Self>>> {
        Self::registry().get(name)
    }

    fn find(id: impl IntoMemberId) -> Result<&'static Arc<Member<Self>>> {
        Self::registry().find(id)
    }

    fn find_by_id(id: impl IntoMemberId) -> Option<&'static Arc<Member<Self>>> {
        Self::registry().find_by_id(id)
    }

    fn first() -> Option<&'static Arc<Member<Self>>> {
        Self::registry().first()
    }

    fn last() -> Option<&'static Arc<Member<Self>>> {
        Self::registry().last()
    }
}

#[doc(hidden)]
pub fn __expect_defined<T>(host: &'static str, result: Result<Arc<Member<T>>>) -> Arc<Member<T>> {
    match result {
        Ok(m) => m,
        // 宏在编译期已校验名称与 id，运行到这里说明宿主配置本身有误
        Err(e) => panic!("enumeration {host}: {e}"),
    }
}

#[doc(hidden)]
pub fn __accessor<T: EnumHost>(name: &'static str) -> &'static Arc<Member<T>> {
    match T::registry().get(name) {
        Some(m) => m,
        None => panic!("enumeration {}: member {name} is not registered", T::registry().host()),
    }
}
