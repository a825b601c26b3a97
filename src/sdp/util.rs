use crate::sdp::sdp_error::{FieldError, SdpError};
use crate::sdp::serializer::LineEnding;
use std::fmt;

pub(crate) fn push_line(out: &mut String, args: fmt::Arguments, eol: LineEnding) {
    use std::fmt::Write as _;
    let _ = out.write_fmt(args);
    out.push_str(eol.as_str());
}

/// Rejects values that would split the line they are written on.
pub(crate) fn check_single_line(value: &str, what: &'static str) -> Result<(), FieldError> {
    if value.contains(['\r', '\n']) {
        return Err(FieldError::LineBreak(what));
    }
    Ok(())
}

/// A token is a non-empty run of non-whitespace characters.
pub(crate) fn check_token(value: &str, what: &'static str) -> Result<(), FieldError> {
    check_single_line(value, what)?;
    if value.is_empty() || value.contains(char::is_whitespace) {
        return Err(FieldError::Invalid(what));
    }
    Ok(())
}

pub(crate) fn lazy_list<T>(slot: &mut Option<Vec<T>>, create: bool) -> Option<&mut Vec<T>> {
    if create {
        Some(slot.get_or_insert_with(Vec::new))
    } else {
        slot.as_mut()
    }
}

pub(crate) fn replace_list<T>(
    slot: &mut Option<Vec<T>>,
    value: Option<Vec<T>>,
    what: &'static str,
) -> Result<(), SdpError> {
    let value = value.ok_or(SdpError::InvalidArgument(what))?;
    *slot = Some(value);
    Ok(())
}

/// Generates the uniform accessor set for an `Option<Vec<T>>` property:
/// a read-only view, a create-if-missing mutable view, a setter that rejects
/// `None`, and an appender.
macro_rules! list_property {
    ($field:ident, $field_mut:ident, $set:ident, $add:ident, $ty:ty) => {
        #[doc = concat!("Returns the `", stringify!($field), "` list, or `None` if it is absent.")]
        pub fn $field(&self) -> Option<&[$ty]> {
            self.$field.as_deref()
        }

        #[doc = concat!("Mutable access to `", stringify!($field), "`; with `create` an absent list is materialized and stored.")]
        pub fn $field_mut(&mut self, create: bool) -> Option<&mut Vec<$ty>> {
            $crate::sdp::util::lazy_list(&mut self.$field, create)
        }

        #[doc = concat!("Replaces `", stringify!($field), "`. An empty vector clears it; `None` is rejected.")]
        ///
        /// # Errors
        /// [`SdpError::InvalidArgument`](crate::sdp::sdp_error::SdpError::InvalidArgument)
        /// when `value` is `None`; the previous contents are kept.
        pub fn $set(
            &mut self,
            value: Option<Vec<$ty>>,
        ) -> $crate::sdp::sdp_error::Result<()> {
            $crate::sdp::util::replace_list(&mut self.$field, value, stringify!($field))
        }

        #[doc = concat!("Appends to `", stringify!($field), "`, creating the list if needed.")]
        pub fn $add(&mut self, value: $ty) {
            self.$field.get_or_insert_with(Vec::new).push(value);
        }
    };
}
pub(crate) use list_property;
