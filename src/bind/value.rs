//! Per-kind coercion of resolved strings into leaf field types.

use super::{BindError, Bindable, Binder, Field, Kind};

impl Bindable for String {
    const KIND: Kind = Kind::Text;

    fn bind(&mut self, binder: &mut Binder<'_>, field: &Field) -> Result<(), BindError> {
        if let Some(raw) = binder.resolve(field) {
            *self = raw;
        }
        Ok(())
    }
}

impl Bindable for Vec<u8> {
    const KIND: Kind = Kind::Bytes;

    fn bind(&mut self, binder: &mut Binder<'_>, field: &Field) -> Result<(), BindError> {
        if let Some(raw) = binder.resolve(field) {
            *self = raw.into_bytes();
        }
        Ok(())
    }
}

impl Bindable for bool {
    const KIND: Kind = Kind::Bool;

    fn bind(&mut self, binder: &mut Binder<'_>, field: &Field) -> Result<(), BindError> {
        if let Some(raw) = binder.resolve(field) {
            *self = parse_bool(&raw).ok_or_else(|| BindError::Bool {
                field: field.ident(),
                value: raw.clone(),
            })?;
        }
        Ok(())
    }
}

macro_rules! bind_int {
    ($($ty:ty => $kind:ident),* $(,)?) => {$(
        impl Bindable for $ty {
            const KIND: Kind = Kind::$kind(<$ty>::BITS);

            fn bind(&mut self, binder: &mut Binder<'_>, field: &Field) -> Result<(), BindError> {
                if let Some(raw) = binder.resolve(field) {
                    *self = raw.parse().map_err(|source| BindError::Int {
                        field: field.ident(),
                        source,
                    })?;
                }
                Ok(())
            }
        }
    )*};
}

bind_int! {
    i8 => Signed,
    i16 => Signed,
    i32 => Signed,
    i64 => Signed,
    isize => Signed,
    u8 => Unsigned,
    u16 => Unsigned,
    u32 => Unsigned,
    u64 => Unsigned,
    usize => Unsigned,
}

macro_rules! bind_float {
    ($($ty:ty => $kind:ident),* $(,)?) => {$(
        impl Bindable for $ty {
            const KIND: Kind = Kind::$kind;

            fn bind(&mut self, binder: &mut Binder<'_>, field: &Field) -> Result<(), BindError> {
                if let Some(raw) = binder.resolve(field) {
                    *self = raw.parse().map_err(|source| BindError::Float {
                        field: field.ident(),
                        source,
                    })?;
                }
                Ok(())
            }
        }
    )*};
}

bind_float! {
    f32 => F32,
    f64 => F64,
}

/// Accepts the usual spellings: `1 t T TRUE true True` and their false forms.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::{bind, BindError, Bindable, Binder, Field, Record, Vars};

    crate::record! {
        #[derive(Debug, Default, PartialEq)]
        struct Scalars {
            s: String => { key = "MyString" },
            s_empty: String,
            s_default: String => { default = "default value" },

            i8: i8 => { key = "integer_8" },
            i16: i16,
            i32: i32,
            i64: i64,
            integer: isize,

            ui8: u8,
            ui16: u16,
            ui32: u32,
            ui64: u64,
            unsigned_integer: usize,

            f32: f32,
            f64: f64,

            b: bool,

            bytes: Vec<u8>,
        }
    }

    #[derive(Debug, Default)]
    struct One<T> {
        value: T,
    }

    impl<T: Bindable> Record for One<T> {
        const FIELDS: &'static [Field] = &[Field::new("value", T::KIND)];

        fn bind_fields(&mut self, binder: &mut Binder<'_>) -> Result<(), BindError> {
            binder.field(&Self::FIELDS[0], &mut self.value)
        }
    }

    fn table() -> Vars {
        [
            ("MyString", "string"),
            ("S_DEFAULT", ""),
            ("integer_8", "-8"),
            ("I16", "-16"),
            ("I32", "-32"),
            ("i64", "-64"),
            ("integer", "-999"),
            ("UI8", "8"),
            ("UI16", "16"),
            ("UI32", "32"),
            ("UI64", "64"),
            ("UNSIGNED_INTEGER", "999"),
            ("F32", "32.2345225"),
            ("F64", "-64.2342623678"),
            ("B", "true"),
            ("bytes", "key=value"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_every_kind() {
        let mut config = Scalars::default();
        bind(&mut config, &table()).unwrap();

        assert_eq!(config.s, "string");
        assert_eq!(config.s_empty, "");
        assert_eq!(config.s_default, "default value");

        assert_eq!(config.i8, -8);
        assert_eq!(config.i16, -16);
        assert_eq!(config.i32, -32);
        assert_eq!(config.i64, -64);
        assert_eq!(config.integer, -999);

        assert_eq!(config.ui8, 8);
        assert_eq!(config.ui16, 16);
        assert_eq!(config.ui32, 32);
        assert_eq!(config.ui64, 64);
        assert_eq!(config.unsigned_integer, 999);

        assert_eq!(config.f32, 32.234_522_5);
        assert_eq!(config.f64, -64.234_262_367_8);

        assert!(config.b);
        assert_eq!(config.bytes, b"key=value");
    }

    fn bind_value<T>(raw: &str) -> Result<T, BindError>
    where
        T: Bindable + Default,
    {
        let vars: Vars = [("VALUE", raw)].into_iter().collect();
        let mut config = One::<T>::default();
        bind(&mut config, &vars)?;
        Ok(config.value)
    }

    #[test]
    fn test_int_parse_error() {
        let err = bind_value::<isize>("invalid int value").unwrap_err();
        assert!(matches!(err, BindError::Int { field: "value", .. }));
        assert_eq!(err.to_string(), "field value (invalid digit found in string)");
    }

    #[test]
    fn test_uint_rejects_negative() {
        let err = bind_value::<u32>("-1").unwrap_err();
        assert!(matches!(err, BindError::Int { .. }));
    }

    #[test]
    fn test_int_width_is_enforced() {
        assert_eq!(bind_value::<i8>("127").unwrap(), 127);
        assert!(bind_value::<i8>("128").is_err());
        assert_eq!(bind_value::<u8>("255").unwrap(), 255);
        assert!(bind_value::<u8>("256").is_err());
        assert_eq!(bind_value::<i64>("+5").unwrap(), 5);
    }

    #[test]
    fn test_float_parse_error() {
        let err = bind_value::<f32>("text").unwrap_err();
        assert!(matches!(err, BindError::Float { field: "value", .. }));
        assert!(bind_value::<f64>("text").is_err());
    }

    #[test]
    fn test_bool_spellings() {
        for raw in ["1", "t", "T", "TRUE", "true", "True"] {
            assert!(bind_value::<bool>(raw).unwrap(), "{raw}");
        }
        for raw in ["0", "f", "F", "FALSE", "false", "False"] {
            assert!(!bind_value::<bool>(raw).unwrap(), "{raw}");
        }

        let err = bind_value::<bool>("yes").unwrap_err();
        assert_eq!(err.to_string(), "field value (invalid boolean 'yes')");
    }

    #[test]
    fn test_text_and_bytes_are_verbatim() {
        assert_eq!(bind_value::<String>(" padded ").unwrap(), " padded ");
        assert_eq!(bind_value::<Vec<u8>>("ü").unwrap(), "ü".as_bytes());
    }
}
