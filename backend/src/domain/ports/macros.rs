//! Helper macro for declaring port error enums.
//!
//! Each variant names its constructor explicitly; string-like fields accept
//! anything convertible into the field type.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? as $ctor:ident => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                #[doc = concat!("Build [`", stringify!($name), "::", stringify!($variant), "`].")]
                pub fn $ctor($( $($field: impl Into<$ty>),* )?) -> Self {
                    Self::$variant $( { $($field: $field.into()),* } )?
                }
            )*
        }
    };
}

pub(crate) use define_port_error;
