#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Seal members whose options do not say otherwise.
    pub default_seal: bool,
}

pub const REGISTRY_DEFAULT_SEAL: bool = true;

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_seal: REGISTRY_DEFAULT_SEAL,
        }
    }
}
// 注册表配置只影响默认选项；已定义的成员不受后续配置影响。
