/// Defines a struct and implements [`Record`](crate::Record) and
/// [`Bindable`](crate::Bindable) for it.
///
/// Attributes on the struct and its fields are passed through unchanged, so
/// `#[derive(Deserialize)]` and `#[serde(...)]` keep working. A field may
/// carry binding metadata after its type:
///
/// ```
/// envbind::record! {
///     #[derive(Debug, Default)]
///     pub struct Database {
///         pub host: String => { key = "DB_HOST" },
///         pub port: u16 => { default = "5432" },
///         pub user: String => { key = "DB_USER", default = "postgres" },
///     }
/// }
///
/// envbind::record! {
///     #[derive(Debug, Default)]
///     pub struct App {
///         pub name: String,
///         pub database: Database,
///     }
/// }
///
/// let vars: envbind::Vars = [("NAME", "demo"), ("DB_HOST", "db.local")].into_iter().collect();
/// let mut app = App::default();
/// envbind::bind(&mut app, &vars)?;
///
/// assert_eq!(app.name, "demo");
/// assert_eq!(app.database.host, "db.local");
/// assert_eq!(app.database.port, 5432);
/// # Ok::<(), envbind::BindError>(())
/// ```
///
/// Fields of nested record types must themselves be declared with `record!`.
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
                $( => { $($opt:ident = $value:literal),* $(,)? } )?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::Record for $name {
            const FIELDS: &'static [$crate::Field] = &[
                $(
                    $crate::Field::new(
                        ::core::stringify!($field),
                        <$ty as $crate::Bindable>::KIND,
                    )
                    $($(.$opt($value))*)?
                ),*
            ];

            #[allow(unused_mut, unused_variables)]
            fn bind_fields(
                &mut self,
                binder: &mut $crate::Binder<'_>,
            ) -> ::core::result::Result<(), $crate::BindError> {
                let mut fields = <Self as $crate::Record>::FIELDS.iter();
                $(
                    if let ::core::option::Option::Some(field) = fields.next() {
                        binder.field(field, &mut self.$field)?;
                    }
                )*
                ::core::result::Result::Ok(())
            }
        }

        impl $crate::Bindable for $name {
            const KIND: $crate::Kind = $crate::Kind::Record(<Self as $crate::Record>::FIELDS);

            fn bind(
                &mut self,
                binder: &mut $crate::Binder<'_>,
                field: &$crate::Field,
            ) -> ::core::result::Result<(), $crate::BindError> {
                binder.nested(field, self)
            }
        }
    };
}
