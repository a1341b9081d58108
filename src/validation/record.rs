//! `record!`: declares an annotated struct and its field descriptor table.
//!
//! ```
//! vld::record! {
//!     #[derive(Debug, Default)]
//!     pub struct Signup {
//!         /// Login name
//!         #[validate("min:3;max:32")]
//!         pub username: String,
//!         #[validate("email")]
//!         pub email: String,
//!         #[validate("in:18,21,65")]
//!         pub age_bracket: i64,
//!         pub note: String,
//!         attempts: u32,
//!     }
//! }
//!
//! let signup = Signup {
//!     username: "jenny".into(),
//!     email: "jenny@gmail.com".into(),
//!     age_bracket: 21,
//!     ..Default::default()
//! };
//! assert!(vld::validate(&signup).is_ok());
//! ```
//!
//! Every field type must implement [`AsFieldValue`](crate::validation::AsFieldValue).
//! Other field attributes and doc comments are kept on the generated struct;
//! a field takes at most one `#[validate(..)]`.

#[macro_export]
macro_rules! record {
    (@annotation) => { "" };
    (@annotation $tag:literal) => { $tag };

    // Field attributes are sorted one at a time: `validate` becomes the
    // annotation, anything else (doc comments included) is kept on the field.
    (@fields $head:tt [$($done:tt)*] [$($attrs:tt)*] []
        [#[validate($tag:literal)] $($rest:tt)*]
    ) => {
        $crate::record!(@fields $head [$($done)*] [$($attrs)*] [$tag] [$($rest)*]);
    };
    (@fields $head:tt [$($done:tt)*] [$($attrs:tt)*] [$($tag:tt)?]
        [#[$($attr:tt)*] $($rest:tt)*]
    ) => {
        $crate::record!(@fields $head [$($done)*] [$($attrs)* #[$($attr)*]] [$($tag)?] [$($rest)*]);
    };
    (@fields $head:tt [$($done:tt)*] [$($attrs:tt)*] [$($tag:tt)?]
        [$fvis:vis $field:ident : $ty:ty $(, $($rest:tt)*)?]
    ) => {
        $crate::record!(@fields $head
            [$($done)* { [$($attrs)*] [$($tag)?] [$fvis] $field [$ty] }]
            [] [] [$($($rest)*)?]);
    };
    (@fields
        [[$(#[$meta:meta])*] [$vis:vis] $name:ident]
        [$({ [$($fattr:tt)*] [$($tag:literal)?] [$fvis:vis] $field:ident [$ty:ty] })*]
        [] [] []
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $( $($fattr)* $fvis $field: $ty, )*
        }

        impl $crate::validation::Reflect for $name {
            fn shape(&self) -> $crate::validation::Shape<'_> {
                $crate::validation::Shape::Record {
                    type_name: ::core::stringify!($name),
                    fields: ::std::vec![
                        $(
                            $crate::validation::FieldDescriptor::new(
                                ::core::stringify!($field),
                                $crate::validation::Visibility::from_token(::core::stringify!($fvis)),
                                $crate::record!(@annotation $($tag)?),
                                $crate::validation::AsFieldValue::as_field_value(&self.$field),
                            ),
                        )*
                    ],
                }
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($body:tt)*
        }
    ) => {
        $crate::record!(@fields [[$(#[$meta])*] [$vis] $name] [] [] [] [$($body)*]);
    };
}

#[cfg(test)]
mod tests {
    use crate::validation::{FieldValue, Reflect, Shape, Visibility};

    crate::record! {
        #[derive(Debug, Clone, Default)]
        struct Account {
            #[validate("len:4")]
            pub code: String,
            pub(crate) owner: String,
            #[validate("min:0")]
            balance: i64,
            pub tags: Vec<String>,
        }
    }

    crate::record! {
        struct Empty {}
    }

    crate::record! {
        #[derive(Debug)]
        struct Documented {
            /// Public handle
            #[validate("min:3")]
            pub handle: String,
            #[allow(dead_code)]
            /// Never checked
            retries: u32,
            #[validate("max:9")]
            #[allow(dead_code)]
            pub level: u8
        }
    }

    #[test]
    fn test_descriptor_table_in_declaration_order() {
        let account = Account {
            code: "AB12".into(),
            owner: "jenny".into(),
            balance: 10,
            tags: vec!["x".into()],
        };

        let Shape::Record { type_name, fields } = account.shape() else {
            panic!("record expected");
        };

        assert_eq!(type_name, "Account");
        let names: Vec<_> = fields.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["code", "owner", "balance", "tags"]);

        assert_eq!(fields[0].visibility, Visibility::Public);
        assert_eq!(fields[0].annotation, "len:4");
        assert_eq!(fields[0].value, FieldValue::Text("AB12"));

        assert_eq!(fields[1].visibility, Visibility::Restricted);
        assert_eq!(fields[1].annotation, "");

        assert_eq!(fields[2].visibility, Visibility::Private);
        assert_eq!(fields[2].annotation, "min:0");
        assert_eq!(fields[2].value, FieldValue::Int(10));

        assert_eq!(fields[3].value, FieldValue::TextSeq(vec!["x"]));
    }

    #[test]
    fn test_empty_record() {
        let Shape::Record { fields, .. } = Empty {}.shape() else {
            panic!("record expected");
        };
        assert!(fields.is_empty());
    }

    #[test]
    fn test_field_attributes_pass_through() {
        let documented = Documented {
            handle: "ab".into(),
            retries: 0,
            level: 12,
        };

        let Shape::Record { fields, .. } = documented.shape() else {
            panic!("record expected");
        };
        let annotations: Vec<_> = fields.iter().map(|f| f.annotation).collect();
        assert_eq!(annotations, vec!["min:3", "", "max:9"]);

        let err = crate::validate(&documented).unwrap_err();
        assert_eq!(err.to_string(), "handle: len is less than 3, level: value is greater than 9");
    }
}
