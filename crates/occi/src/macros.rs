// Generates an insertion-ordered set wrapper around an `IndexSet`.
//
// `IndexSet`, `Iter`, `IntoIter`, and `DefaultHashBuilder` must be in scope
// where the macro is invoked.
macro_rules! set {
    (
        $(#[$attr:meta])*
        pub struct $name:ident(IndexSet<$ty:ty, DefaultHashBuilder>);
    ) => {
        $(#[$attr])*
        pub struct $name(IndexSet<$ty, DefaultHashBuilder>);

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $name {
            #[doc = concat!("Creates an empty [`", stringify!($name), "`].")]
            #[must_use]
            #[inline]
            pub fn new() -> Self {
                Self(IndexSet::with_hasher(DefaultHashBuilder::default()))
            }

            #[doc = concat!("Inserts an element into [`", stringify!($name), "`], returning the updated collection.")]
            #[must_use]
            #[inline]
            pub fn insert(mut self, element: $ty) -> Self {
                let _ = self.0.insert(element);
                self
            }

            #[doc = concat!("Adds an element to [`", stringify!($name), "`].")]
            #[doc = ""]
            #[doc = "Adding an element which is already present has no effect."]
            #[inline]
            pub fn add(&mut self, element: $ty) {
                let _ = self.0.insert(element);
            }

            #[doc = concat!("Checks whether [`", stringify!($name), "`] contains the given element.")]
            #[must_use]
            #[inline]
            pub fn contains(&self, element: &$ty) -> bool {
                self.0.contains(element)
            }

            #[doc = concat!("Checks whether [`", stringify!($name), "`] is empty.")]
            #[must_use]
            #[inline]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            #[doc = concat!("Returns the number of elements in [`", stringify!($name), "`].")]
            #[must_use]
            #[inline]
            pub fn len(&self) -> usize {
                self.0.len()
            }

            #[doc = concat!("Returns an iterator over the elements of [`", stringify!($name), "`] in insertion order.")]
            #[inline]
            pub fn iter(&self) -> Iter<'_, $ty> {
                self.0.iter()
            }
        }

        impl IntoIterator for $name {
            type Item = $ty;
            type IntoIter = IntoIter<$ty>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $ty;
            type IntoIter = Iter<'a, $ty>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl FromIterator<$ty> for $name {
            fn from_iter<I: IntoIterator<Item = $ty>>(iter: I) -> Self {
                let mut elements = Self::new();
                for element in iter {
                    elements.add(element);
                }
                elements
            }
        }

        impl Extend<$ty> for $name {
            fn extend<I: IntoIterator<Item = $ty>>(&mut self, iter: I) {
                for element in iter {
                    self.add(element);
                }
            }
        }
    };
}

pub(crate) use set;
