/// Link-time record of a host type declared with `enumeration!`.
pub struct HostEntry {
    pub type_name: fn() -> &'static str,
    pub names: fn() -> Vec<&'static str>,
    pub len: fn() -> usize,
}

inventory::collect!(HostEntry);

/// All declared host types, in no particular order.
pub fn all() -> Vec<&'static HostEntry> {
    inventory::iter::<HostEntry>.into_iter().collect()
}

pub fn find(type_name: &str) -> Option<&'static HostEntry> {
    inventory::iter::<HostEntry>
        .into_iter()
        .find(|entry| (entry.type_name)() == type_name)
}

/// Number of members declared for `type_name`; 0 when the type is unknown.
pub fn member_count(type_name: &str) -> usize {
    find(type_name).map(|entry| (entry.len)()).unwrap_or(0)
}
