use crate::{
    binding::{BindingSink, DynSink},
    config::RegistryConfig,
    error::{EnumFieldError, Result},
    factory::{DynFactory, MemberFactory},
    key::IntoMemberId,
    member::Member,
    options::DefineOptions,
};
use serde::de::DeserializeOwned;
use std::{collections::HashMap, fmt, sync::Arc};

/// The member registry of one host type.
///
/// Members are indexed by id and by name and kept in definition order.
/// `define` needs `&mut self`; once every member is defined the registry can be
/// shared and read from any number of threads.
pub struct Registry<T> {
    host: &'static str,
    config: RegistryConfig,
    next_candidate: i64,
    by_id: HashMap<i64, Arc<Member<T>>>,
    by_name: HashMap<String, Arc<Member<T>>>,
    ordered: Vec<Arc<Member<T>>>,
    factory: Option<DynFactory<T>>,
    sinks: Vec<DynSink<T>>,
}

impl<T> Registry<T> {
    /// Registry for host type `H`, without a factory or sinks.
    pub fn for_host<H: ?Sized + 'static>() -> Self {
        Self::named(std::any::type_name::<H>())
    }

    pub fn named(host: &'static str) -> Self {
        Self {
            host,
            config: RegistryConfig::default(),
            next_candidate: 1,
            by_id: HashMap::new(),
            by_name: HashMap::new(),
            ordered: Vec::new(),
            factory: None,
            sinks: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_factory(mut self, factory: impl MemberFactory<T> + 'static) -> Self {
        self.factory = Some(Box::new(factory));
        self
    }

    pub fn with_sink(mut self, sink: impl BindingSink<T> + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn host(&self) -> &'static str {
        self.host
    }

    /// Define a member.
    ///
    /// Every check runs before the registry is touched, so an `Err` leaves the
    /// maps, the ordered list and the auto-assignment counter unchanged.
    pub fn define(
        &mut self,
        name: impl Into<String>,
        options: DefineOptions<T>,
    ) -> Result<Arc<Member<T>>> {
        let name = name.into();
        let supplied_object = options.has_object();
        let DefineOptions { object, id, seal } = options;
        let auto = id.is_none();
        let outcome = self.check_name(&name).and_then(|()| match id {
            Some(candidate) => self.check_candidate(candidate).map(|()| candidate),
            None => Ok(self.peek_next_id()),
        });
        let id = match outcome {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(host = self.host, member = %name, error = %e, "define rejected");
                return Err(e);
            }
        };
        let value = match object {
            Some(v) => v,
            None => match &self.factory {
                Some(factory) => factory.new_member(),
                None => {
                    tracing::warn!(host = self.host, member = %name, "define rejected: no object and no factory");
                    return Err(EnumFieldError::MissingObject(name));
                }
            },
        };

        // 以下步骤不会失败：提交
        if auto {
            self.next_candidate = id;
        }
        let sealed = seal.unwrap_or(self.config.default_seal);
        let member = Arc::new(Member::new(id, name.clone(), value, sealed));
        self.by_id.insert(id, member.clone());
        self.by_name.insert(name.clone(), member.clone());
        self.ordered.push(member.clone());
        tracing::debug!(
            host = self.host,
            member = %name,
            id,
            sealed,
            auto,
            supplied_object,
            "member defined"
        );

        for sink in self.sinks.iter_mut() {
            sink.bind(self.host, &name, &member);
        }
        Ok(member)
    }

    /// Define a member from an untyped options map; see
    /// [`DefineOptions::from_value`].
    pub fn define_value(
        &mut self,
        name: impl Into<String>,
        options: &serde_json::Value,
    ) -> Result<Arc<Member<T>>>
    where
        T: DeserializeOwned,
    {
        let name = name.into();
        let options = DefineOptions::from_value(options).inspect_err(|e| {
            tracing::warn!(host = self.host, member = %name, error = %e, "options rejected");
        })?;
        self.define(name, options)
    }

    fn check_name(&self, name: &str) -> Result<()> {
        if self.by_name.contains_key(name) {
            return Err(EnumFieldError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    fn check_candidate(&self, id: i64) -> Result<()> {
        if id <= 0 {
            return Err(EnumFieldError::InvalidId(id.to_string()));
        }
        if self.by_id.contains_key(&id) {
            return Err(EnumFieldError::DuplicateId(id));
        }
        Ok(())
    }

    // 自动分配：从计数器开始向前扫描第一个空闲正整数。
    // 计数器停在已分配的值上（而非 +1），下一次扫描会先跳过它。
    fn peek_next_id(&self) -> i64 {
        let mut next = self.next_candidate;
        while next <= 0 || self.by_id.contains_key(&next) {
            next += 1;
        }
        next
    }

    /// Snapshot of all members in definition order.
    pub fn all(&self) -> Vec<Arc<Member<T>>> {
        self.ordered.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Member<T>>> {
        self.ordered.iter()
    }

    /// Registered names, in definition order.
    pub fn names(&self) -> Vec<&str> {
        self.ordered.iter().map(|m| m.name()).collect()
    }

    pub fn find_by_id(&self, id: impl IntoMemberId) -> Option<&Arc<Member<T>>> {
        self.by_id.get(&id.into_member_id())
    }

    /// Like [`find_by_id`](Self::find_by_id) but a miss is an error.
    pub fn find(&self, id: impl IntoMemberId) -> Result<&Arc<Member<T>>> {
        let id = id.into_member_id();
        self.by_id.get(&id).ok_or(EnumFieldError::ObjectNotFound(id))
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Member<T>>> {
        self.by_name.get(name)
    }

    pub fn first(&self) -> Option<&Arc<Member<T>>> {
        self.ordered.first()
    }

    pub fn last(&self) -> Option<&Arc<Member<T>>> {
        self.ordered.last()
    }

    pub fn contains_id(&self, id: impl IntoMemberId) -> bool {
        self.by_id.contains_key(&id.into_member_id())
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("host", &self.host)
            .field("next_candidate", &self.next_candidate)
            .field("members", &self.ordered)
            .field("has_factory", &self.factory.is_some())
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 计数器细节只能在模块内观察
    #[test]
    fn counter_stays_on_assigned_id() {
        let mut r = Registry::<u8>::named("T").with_factory(|| 0u8);
        r.define("A", DefineOptions::new()).unwrap();
        assert_eq!(r.next_candidate, 1);
        r.define("B", DefineOptions::new().id(3)).unwrap();
        assert_eq!(r.next_candidate, 1);
        r.define("C", DefineOptions::new()).unwrap();
        assert_eq!(r.next_candidate, 2);
        let d = r.define("D", DefineOptions::new()).unwrap();
        assert_eq!(d.id(), 4);
        assert_eq!(r.next_candidate, 4);
    }

    #[test]
    fn failed_define_does_not_move_counter() {
        let mut r = Registry::<u8>::named("T");
        let err = r.define("A", DefineOptions::new()).unwrap_err();
        assert_eq!(err, EnumFieldError::MissingObject("A".into()));
        assert_eq!(r.next_candidate, 1);
        assert!(r.is_empty());
    }
}
