//! 统一错误类型：与注册表的失败分类一一对应，不依赖第三方错误栈。
use std::{error::Error as StdError, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumFieldError {
    InvalidOptions(Vec<String>),            // 未识别的选项键（或选项格式不合法）
    InvalidId(String),                      // id 不是严格正整数
    DuplicateId(i64),                       // id 已被占用
    DuplicateName(String),                  // 名称已被占用
    ObjectNotFound(i64),                    // find() 严格查找未命中
    ImmutableMember { name: String, id: i64 }, // 对已封存成员的写入
    MissingObject(String),                  // 未提供 object 且注册表没有工厂
    InvalidObject(String),                  // 选项表中的 object 无法反序列化
}

impl fmt::Display for EnumFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumFieldError::InvalidOptions(keys) => {
                write!(f, "invalid options: {}", keys.join(", "))
            }
            EnumFieldError::InvalidId(id) => write!(f, "invalid id {id}: must be a positive integer"),
            EnumFieldError::DuplicateId(id) => write!(f, "id {id} is already registered"),
            EnumFieldError::DuplicateName(name) => write!(f, "name {name:?} is already registered"),
            EnumFieldError::ObjectNotFound(id) => write!(f, "no member with id {id}"),
            EnumFieldError::ImmutableMember { name, id } => {
                write!(f, "member {name:?} (id {id}) is sealed and cannot be modified")
            }
            EnumFieldError::MissingObject(name) => {
                write!(f, "member {name:?} has no object and the registry has no factory")
            }
            EnumFieldError::InvalidObject(msg) => write!(f, "invalid object: {msg}"),
        }
    }
}
impl StdError for EnumFieldError {}

pub type Result<T = ()> = std::result::Result<T, EnumFieldError>;
