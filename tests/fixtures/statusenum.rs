// Code generated by "strenum"; DO NOT EDIT.
// strenum <dir> Status backlog,in_review,done

#![allow(non_upper_case_globals, non_camel_case_types, dead_code)]
use std::fmt;
use std::str::FromStr;
/// Closed set of string values. Only the `EnumStatus*` constants of this module construct it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumStatus(privateStatusEnumType);
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct privateStatusEnumType(&'static str);
impl privateStatusEnumType {
    const fn as_str(&self) -> &'static str {
        self.0
    }
}
impl EnumStatus {
    /// Returns the string value, verbatim.
    pub const fn as_str(&self) -> &'static str {
        self.0.as_str()
    }
}
impl fmt::Display for EnumStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
impl AsRef<str> for EnumStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
const strStatusBacklog: &str = "backlog";
const strStatusInReview: &str = "in_review";
const strStatusDone: &str = "done";
pub const EnumStatusBacklog: EnumStatus = EnumStatus(privateStatusEnumType(strStatusBacklog));
pub const EnumStatusInReview: EnumStatus = EnumStatus(
    privateStatusEnumType(strStatusInReview),
);
pub const EnumStatusDone: EnumStatus = EnumStatus(privateStatusEnumType(strStatusDone));
/// Error returned when a string names no variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownValueError(String);
impl UnknownValueError {
    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.0
    }
}
impl fmt::Display for UnknownValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown EnumStatus {}", self.0)
    }
}
impl std::error::Error for UnknownValueError {}
/// Looks up the variant whose string value equals `s` exactly.
pub fn from_string(s: &str) -> Result<EnumStatus, UnknownValueError> {
    match s {
        strStatusBacklog => Ok(EnumStatusBacklog),
        strStatusInReview => Ok(EnumStatusInReview),
        strStatusDone => Ok(EnumStatusDone),
        _ => Err(UnknownValueError(s.to_string())),
    }
}
impl FromStr for EnumStatus {
    type Err = UnknownValueError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_string(s)
    }
}
/// Error returned when a bulk conversion meets a missing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnexpectedNilError;
impl fmt::Display for UnexpectedNilError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unexpected enum EnumStatus value: nil")
    }
}
impl std::error::Error for UnexpectedNilError {}
/// Converts every value to its string form, preserving order and length.
///
/// Fails on the first missing (`None`) element.
pub fn to_strings<I>(values: I) -> Result<Vec<&'static str>, UnexpectedNilError>
where
    I: IntoIterator,
    I::Item: Into<Option<EnumStatus>>,
{
    values
        .into_iter()
        .map(|value| {
            let value: Option<EnumStatus> = value.into();
            value.map(|v| v.as_str()).ok_or(UnexpectedNilError)
        })
        .collect()
}
/// Parses every string, preserving order and length.
///
/// Fails on the first string that names no variant.
pub fn from_strings<I>(values: I) -> Result<Vec<EnumStatus>, UnknownValueError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    values.into_iter().map(|value| from_string(value.as_ref())).collect()
}
/// Like `to_strings`, but panics on a missing element.
pub fn must_to_strings<I>(values: I) -> Vec<&'static str>
where
    I: IntoIterator,
    I::Item: Into<Option<EnumStatus>>,
{
    match to_strings(values) {
        Ok(strings) => strings,
        Err(err) => panic!("{}", err),
    }
}
