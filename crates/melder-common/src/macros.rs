//! Declarative helper for closed identifier enums.

/// Declares a fieldless identifier enum backed by its declaration index.
///
/// Generated items:
/// - `ALL` / `COUNT` in declaration order
/// - `index` / `from_index`, `key` / `from_key`, `display_name`
/// - `Display` (display name)
/// - serde as the numeric index, so JSON object keys come out as `"0"`, `"1"`, ...
macro_rules! catalog_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($label:literal) {
            $( $variant:ident => $display:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $(
                #[doc = $display]
                $variant,
            )+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Number of variants.
            pub const COUNT: usize = Self::ALL.len();

            /// Declaration index of this variant.
            #[must_use]
            pub const fn index(self) -> usize {
                self as usize
            }

            /// Looks up a variant by declaration index.
            #[must_use]
            pub fn from_index(index: usize) -> Option<Self> {
                Self::ALL.get(index).copied()
            }

            /// Stable identifier key (the variant name).
            #[must_use]
            pub const fn key(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }

            /// Looks up a variant by its identifier key.
            #[must_use]
            pub fn from_key(key: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.key() == key)
            }

            /// Built-in English display name.
            #[must_use]
            pub const fn display_name(self) -> &'static str {
                match self {
                    $(Self::$variant => $display,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.display_name())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_u16(*self as u16)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw = <u16 as ::serde::Deserialize>::deserialize(deserializer)?;
                Self::from_index(raw as usize).ok_or_else(|| {
                    <D::Error as ::serde::de::Error>::custom($crate::error::IdError::Unknown {
                        kind: $label,
                        raw: u32::from(raw),
                    })
                })
            }
        }
    };
}

pub(crate) use catalog_enum;
