// sort_columns
/// Declare a sortable-column table: a fieldless enum plus its `SortColumn` impl.
///
/// ```ignore
/// sort_columns! {
///     pub enum PageSort {
///         Id("id") => "id",
///         Title("title") => "title",
///         CreatedAt("createdAt") => "created_at",
///     }
/// }
/// ```
///
/// Each variant maps a logical wire name to a storage column name. Every
/// declared variant is exposed in `ALL`.
#[macro_export]
macro_rules! sort_columns {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $variant:ident ( $label:literal ) => $column:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        $vis enum $name {
            $( $variant ),+
        }

        impl $crate::definition::SortColumn for $name {
            const ALL: &'static [Self] = &[ $( Self::$variant ),+ ];

            fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $label ),+
                }
            }

            fn column(self) -> $crate::definition::ColumnRef {
                match self {
                    $( Self::$variant => $crate::definition::ColumnRef::new($column) ),+
                }
            }
        }
    };
}
