//! The [`Feeding`] capability and the strategies that wrap a plain description.

use core::fmt;

use menagerie_types::FeedingCategory;

/// How an animal eats.
///
/// A strategy is immutable once built. [`Feeding::feed`] is a pure accessor
/// and may be called any number of times with the same result.
pub trait Feeding: fmt::Debug {
    /// The text describing how the animal eats.
    fn feed(&self) -> &str;

    /// The category this strategy was selected for.
    fn category(&self) -> FeedingCategory;
}

/// Generates a strategy that returns its stored description verbatim.
macro_rules! define_plain_feeding {
    (
        $(#[$meta:meta])*
        $name:ident => $category:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            method: String,
        }

        impl $name {
            /// Wrap the given description.
            pub fn new(method: impl Into<String>) -> Self {
                Self {
                    method: method.into(),
                }
            }
        }

        impl Feeding for $name {
            fn feed(&self) -> &str {
                &self.method
            }

            fn category(&self) -> FeedingCategory {
                $category
            }
        }
    };
}

define_plain_feeding! {
    /// Feeding for wild plant eaters.
    HerbivoreFeeding => FeedingCategory::Herbivores
}

define_plain_feeding! {
    /// Feeding for farm animals.
    LivestockFeeding => FeedingCategory::Livestock
}

define_plain_feeding! {
    /// Feeding for household pets.
    PetFeeding => FeedingCategory::Pet
}
