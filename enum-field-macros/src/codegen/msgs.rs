// Centralized compile-time diagnostic strings for the enumeration codegen.

pub(super) const ERR_EMPTY: &str = "enumeration! requires at least one member";
pub(super) const ERR_DUPLICATE_NAME: &str = "duplicate member name in enumeration";
pub(super) const ERR_DUPLICATE_ID: &str = "duplicate member id in enumeration";
pub(super) const ERR_ID_NOT_POSITIVE: &str = "member id must be a positive integer literal";
pub(super) const ERR_ID_OUT_OF_RANGE: &str = "member id does not fit in i64";
pub(super) const ERR_SEAL_NOT_BOOL: &str = "seal expects `true` or `false`";
pub(super) const ERR_OBJECT_OPTION: &str =
    "pass the member object with `NAME => expr`, not as an option";
pub(super) const ERR_UNKNOWN_OPTION: &str = "unknown member option; expected `id` or `seal`";
pub(super) const ERR_OPTION_REPEATED: &str = "member option given more than once";
