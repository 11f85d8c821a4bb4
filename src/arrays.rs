use std::ops::Deref;

// The three NBT array types only differ in their element width, so they are
// stamped out from one definition.
macro_rules! nbt_array {
    ($(#[$meta:meta])* $name:ident, $elem:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Default)]
        #[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
        pub struct $name {
            data: Vec<$elem>,
        }

        impl $name {
            pub fn new(data: Vec<$elem>) -> Self {
                Self { data }
            }

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
    /// NBT ByteArray, written as `[B; 1,2,3]` in sNBT.
    ByteArray,
    i8
);

nbt_array!(
    /// NBT IntArray, written as `[I; 1,2,3]` in sNBT.
    IntArray,
    i32
);

nbt_array!(
    /// NBT LongArray, written as `[L; 1,2,3]` in sNBT.
    LongArray,
    i64
);
