use crate::member::Member;
use parking_lot::RwLock;
use std::{collections::HashMap, fmt, sync::Arc};

/// Receives every member right after it is defined and sealed.
///
/// A sink exposes the member under its name on the host type; the registry
/// calls `bind` exactly once per successful definition.
pub trait BindingSink<T>: Send + Sync {
    fn bind(&mut self, host: &'static str, name: &str, member: &Arc<Member<T>>);
}

impl<T, F> BindingSink<T> for F
where
    F: FnMut(&'static str, &str, &Arc<Member<T>>) + Send + Sync,
{
    fn bind(&mut self, host: &'static str, name: &str, member: &Arc<Member<T>>) {
        self(host, name, member)
    }
}

impl<T> fmt::Debug for dyn BindingSink<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BindingSink(..)")
    }
}

/// Typed accessor table filled by binding.
///
/// Clones share the same table, so one clone can be handed to the registry as
/// a sink while another is kept for reads.
pub struct AccessorTable<T> {
    inner: Arc<RwLock<HashMap<String, Arc<Member<T>>>>>,
}

impl<T> AccessorTable<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<Member<T>>> {
        self.inner.read().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl<T> Default for AccessorTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for AccessorTable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Send + Sync> BindingSink<T> for AccessorTable<T> {
    fn bind(&mut self, host: &'static str, name: &str, member: &Arc<Member<T>>) {
        tracing::trace!(host, member = name, id = member.id(), "accessor bound");
        self.inner.write().insert(name.to_string(), member.clone());
    }
}

pub type DynSink<T> = Box<dyn BindingSink<T>>;
