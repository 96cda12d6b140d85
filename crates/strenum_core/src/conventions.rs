//! Shared generator conventions (well-known identifiers and prefixes).
//!
//! These are fixed for every generated unit; they are not configuration.

/// Tool name recorded in the provenance banner.
pub const TOOL_NAME: &str = "strenum";

/// Prefix of the private `&str` constant holding a variant's literal text.
pub const STR_CONST_PREFIX: &str = "str";

/// Prefix of the public capability type and of every typed enum constant.
pub const ENUM_PREFIX: &str = "Enum";

/// Prefix of the private backing type.
pub const PRIVATE_TYPE_PREFIX: &str = "private";

/// Suffix of the private backing type.
pub const PRIVATE_TYPE_SUFFIX: &str = "EnumType";

/// Suffix of the generated module / file stem (`Status` -> `statusenum`).
pub const MODULE_SUFFIX: &str = "enum";

/// Placeholder written into the banner when the output directory is not recorded.
pub const DIR_PLACEHOLDER: &str = "<dir>";

/// Separator between variants in the banner and on the command line.
pub const VARIANT_SEPARATOR: char = ',';

/// String-to-enum lookup function.
pub const FROM_STRING_FN: &str = "from_string";

/// Enum-slice to string-slice conversion.
pub const TO_STRINGS_FN: &str = "to_strings";

/// Panicking wrapper over [`TO_STRINGS_FN`].
pub const MUST_TO_STRINGS_FN: &str = "must_to_strings";

/// String-slice to enum-slice conversion.
pub const FROM_STRINGS_FN: &str = "from_strings";

/// Error returned for input that names no variant.
pub const UNKNOWN_VALUE_ERROR: &str = "UnknownValueError";

/// Error returned when a bulk conversion meets a missing value.
pub const UNEXPECTED_NIL_ERROR: &str = "UnexpectedNilError";

/// Lints the fixed naming convention trips in generated code.
pub const ALLOWED_LINTS: &[&str] = &["non_upper_case_globals", "non_camel_case_types", "dead_code"];

/// Every fixed item name a generated unit declares, independent of its variants.
///
/// Variant-derived constants must never shadow one of these.
pub const FIXED_ITEM_NAMES: &[&str] = &[
    FROM_STRING_FN,
    TO_STRINGS_FN,
    MUST_TO_STRINGS_FN,
    FROM_STRINGS_FN,
    UNKNOWN_VALUE_ERROR,
    UNEXPECTED_NIL_ERROR,
    "fmt",
    "FromStr",
];

/// Name of the public capability type for a derived type name (`Main` -> `EnumMain`).
pub fn enum_type_name(pascal: &str) -> String {
    format!("{ENUM_PREFIX}{pascal}")
}

/// Name of the private backing type for a derived type name (`Main` -> `privateMainEnumType`).
pub fn private_backing_type_name(pascal: &str) -> String {
    format!("{PRIVATE_TYPE_PREFIX}{pascal}{PRIVATE_TYPE_SUFFIX}")
}

/// Name of a variant's private string constant (`Main`, `Aaa` -> `strMainAaa`).
pub fn str_const_name(pascal: &str, variant: &str) -> String {
    format!("{STR_CONST_PREFIX}{pascal}{variant}")
}

/// Name of a variant's public enum constant (`Main`, `Aaa` -> `EnumMainAaa`).
pub fn enum_const_name(pascal: &str, variant: &str) -> String {
    format!("{ENUM_PREFIX}{pascal}{variant}")
}

/// Module / file stem for a derived type name (`Status` -> `statusenum`).
pub fn module_name(pascal: &str) -> String {
    format!("{}{MODULE_SUFFIX}", pascal.to_ascii_lowercase())
}
