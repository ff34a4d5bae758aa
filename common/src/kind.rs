//! Macros for defining kind enums.

/// Macro for defining a kind enum.
///
/// Generated enums are parsed case-insensitively from their
/// `SCREAMING_SNAKE_CASE` representation, which is also used for
/// [`Display`] and [`serde`].
///
/// Additional attributes following the docs are passed through, so extra
/// derives (like a `Default` one) may be attached.
///
/// # Example
///
/// ```rust
/// # use common::define_kind;
///
/// define_kind! {
///     #[doc = "Shape kind."]
///     #[derive(Default)]
///     enum Kind {
///         #[doc = "A cube"]
///         #[default]
///         Cube = 1,
///
///         #[doc = "A sphere"]
///         Sphere = 2,
///     }
/// }
///
/// assert_eq!("sphere".parse::<Kind>().unwrap(), Kind::Sphere);
/// assert_eq!(Kind::ALL, &[Kind::Cube, Kind::Sphere]);
/// assert_eq!(Kind::default(), Kind::Cube);
/// ```
///
/// [`Display`]: std::fmt::Display
/// [`serde`]: https://docs.rs/serde
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_kind {
    (
        #[doc = $doc:literal]
        $(#[$attr:meta])*
        enum $name:ident {
            $(
                #[doc = $variant_doc:literal]
                $(#[$variant_attr:meta])*
                $variant:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        #[derive(
            Clone,
            Copy,
            Debug,
            $crate::private::serde::Deserialize,
            $crate::private::strum::Display,
            $crate::private::strum::EnumString,
            Eq,
            Hash,
            PartialEq,
            $crate::private::serde::Serialize,
        )]
        #[doc = $doc]
        $(#[$attr])*
        #[repr(u8)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        #[strum(
            serialize_all = "SCREAMING_SNAKE_CASE",
            ascii_case_insensitive
        )]
        pub enum $name {
            $(
                 #[doc = $variant_doc]
                 $(#[$variant_attr])*
                 $variant = $value,
            )*
        }

        impl $name {
            /// All the variants, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];
        }
    };
}
