pub mod binding;
pub mod catalog;
pub mod config;
pub mod error;
pub mod factory;
pub mod host;
pub mod key;
pub mod member;
pub mod options;
pub mod registry;

// 允许在本 crate 内通过 `enum_field::...` 自引用（供 proc-macro 展开使用）
extern crate self as enum_field;

pub mod prelude {
    pub use crate::binding::{AccessorTable, BindingSink};
    pub use crate::config::RegistryConfig;
    pub use crate::error::{EnumFieldError, Result};
    pub use crate::factory::{DefaultFactory, MemberFactory};
    pub use crate::host::EnumHost;
    pub use crate::member::Member;
    pub use crate::options::DefineOptions;
    pub use crate::registry::Registry;
}

#[doc(hidden)]
pub mod __private {
    pub use inventory;
}

pub use enum_field_macros::enumeration;
