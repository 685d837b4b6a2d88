use std::ops::{Deref, DerefMut};

use serde::Serialize;

macro_rules! nbt_array {
    ($(#[$doc:meta])* $name:ident, $elem:ty) => {
        $(#[$doc])*
        #[derive(Serialize, Debug, Clone, Default, PartialEq)]
        #[serde(transparent)]
        pub struct $name {
            data: Vec<$elem>,
        }

        impl $name {
            pub fn new(data: Vec<$elem>) -> Self {
                Self { data }
            }

            /// Unwraps the underlying vector.
            pub fn into_inner(self) -> Vec<$elem> {
                self.data
            }
        }

        impl Deref for $name {
            type Target = Vec<$elem>;

            fn deref(&self) -> &Self::Target {
                &self.data
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.data
            }
        }

        impl From<Vec<$elem>> for $name {
            fn from(data: Vec<$elem>) -> Self {
                Self::new(data)
            }
        }

        impl FromIterator<$elem> for $name {
            fn from_iter<I: IntoIterator<Item = $elem>>(iter: I) -> Self {
                Self::new(iter.into_iter().collect())
            }
        }
    };
}

nbt_array!(
    /// NBT ByteArray, tag 7. A length-prefixed run of raw bytes.
    ByteArray,
    i8
);
nbt_array!(
    /// NBT IntArray, tag 11.
    IntArray,
    i32
);
nbt_array!(
    /// NBT LongArray, tag 12.
    LongArray,
    i64
);
