use std::fmt;

macro_rules! string_wrapper {
    ($struct:ident) => {
        #[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(transparent)
        )]
        #[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
        #[doc = concat!("A newtype wrapper for ", stringify!($struct))]
        pub struct $struct(String);

        impl $struct {
            /// The identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            // Identifiers become part of variable and row names in the exported
            // formats; LP readers split names on operators and whitespace.
            pub(crate) fn is_valid(&self) -> bool {
                !self.0.is_empty()
                    && self
                        .0
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
            }
        }

        impl fmt::Display for $struct {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $struct {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $struct {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_wrapper!(SiteId);
string_wrapper!(CurveId);
