//! Update-direction translator bindings that skip null source fields.
//!
//! Full DTO⇄entity conversions are plain `From` impls next to each entity.
//! A [`MergeFrom`] binding instead applies an update view onto a row that
//! already exists, copying only the fields the caller actually sent.

/// Applies the non-null fields of `Src` onto `self`.
pub trait MergeFrom<Src> {
    fn merge_from(&mut self, src: Src);
}

/// Overwrites `target` when `value` is present.
pub(crate) fn merge_value<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

/// Overwrites a nullable `target` when `value` is present; a null source never clears it.
pub(crate) fn merge_optional<T>(target: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *target = value;
    }
}
