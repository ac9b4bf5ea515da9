//! `define_port_error!`: a `thiserror` enum plus one snake_case constructor
//! per variant whose fields accept anything `Into` the field type.

macro_rules! define_port_error {
    (
        $(#[$enum_attr:meta])*
        pub enum $name:ident {
            $(
                $(#[$attr:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $display:literal
            ),* $(,)?
        }
    ) => {
        $(#[$enum_attr])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$attr])*
                #[error($display)]
                $variant $( { $($field: $ty),* } )?,
            )*
        }

        ::paste::paste! {
            impl $name {
                $(
                    #[must_use]
                    pub fn [<$variant:snake>]($( $($field: impl Into<$ty>),* )?) -> Self {
                        Self::$variant { $( $($field: $field.into()),* )? }
                    }
                )*
            }
        }
    };
}

pub(crate) use define_port_error;
