//! Name-keyed lookups over `b=` and `a=` lists.
//!
//! Lists may carry several entries with the same name. Reads return the
//! first match; writes and removals touch every match. A name with no
//! match is a no-op for writes, never an insert.

/// An entry addressable by a string key (the bandwidth type or the attribute name).
pub trait Keyed {
    type Value;

    fn entry_key(&self) -> &str;

    fn update(&mut self, value: Self::Value);
}

pub(crate) fn first_match<'a, T: Keyed>(list: Option<&'a [T]>, name: &str) -> Option<&'a T> {
    list?.iter().find(|e| e.entry_key() == name)
}

/// Returns how many entries were updated.
pub(crate) fn update_all<T>(list: Option<&mut Vec<T>>, name: &str, value: &T::Value) -> usize
where
    T: Keyed,
    T::Value: Clone,
{
    let Some(list) = list else { return 0 };
    let mut hits = 0;
    for entry in list.iter_mut().filter(|e| e.entry_key() == name) {
        entry.update(value.clone());
        hits += 1;
    }
    hits
}

/// Returns how many entries were removed.
pub(crate) fn remove_all<T: Keyed>(list: Option<&mut Vec<T>>, name: &str) -> usize {
    let Some(list) = list else { return 0 };
    let before = list.len();
    list.retain(|e| e.entry_key() != name);
    before - list.len()
}

/// Keyed helpers shared by the session and media descriptions. Expects
/// `bandwidths: Option<Vec<Bandwidth>>` and `attributes: Option<Vec<Attribute>>`.
macro_rules! keyed_helpers {
    () => {
        /// Value of the first `b=` line whose type equals `name`.
        pub fn bandwidth(&self, name: &str) -> Option<u64> {
            $crate::sdp::keyed::first_match(self.bandwidths.as_deref(), name)
                .map($crate::sdp::bandwidth::Bandwidth::bandwidth)
        }

        /// Sets the value of every `b=` line whose type equals `name`.
        /// Does not insert when nothing matches.
        pub fn set_bandwidth(&mut self, name: &str, value: u64) {
            $crate::sdp::keyed::update_all(self.bandwidths.as_mut(), name, &value);
        }

        /// Removes every `b=` line whose type equals `name`.
        pub fn remove_bandwidth(&mut self, name: &str) {
            $crate::sdp::keyed::remove_all(self.bandwidths.as_mut(), name);
        }

        /// Value of the first `a=` line named `name`.
        ///
        /// A property attribute (`a=sendrecv`) has no value, so this returns
        /// `None` for it; use [`has_attribute`](Self::has_attribute) to test presence.
        pub fn attribute(&self, name: &str) -> Option<&str> {
            $crate::sdp::keyed::first_match(self.attributes.as_deref(), name)
                .and_then($crate::sdp::attribute::Attribute::value)
        }

        pub fn has_attribute(&self, name: &str) -> bool {
            $crate::sdp::keyed::first_match(self.attributes.as_deref(), name).is_some()
        }

        /// Sets the value of every `a=` line named `name`.
        /// Does not insert when nothing matches.
        pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
            $crate::sdp::keyed::update_all(self.attributes.as_mut(), name, &value.into());
        }

        /// Removes every `a=` line named `name`.
        pub fn remove_attribute(&mut self, name: &str) {
            $crate::sdp::keyed::remove_all(self.attributes.as_mut(), name);
        }
    };
}
pub(crate) use keyed_helpers;
