/// Label used for any code that is not present in its table.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// A closed table of small integer codes, each with a display name.
///
/// `all()` fixes the display order used by checkbox lists, and its length is
/// what filters compare against to decide whether they are active.
pub trait CodeTable: Sized + Copy + 'static {
    fn all() -> &'static [Self];
    fn code(self) -> i64;
    fn display_name(self) -> &'static str;

    fn from_code(code: i64) -> Option<Self> {
        Self::all().iter().copied().find(|variant| variant.code() == code)
    }

    fn all_codes() -> Vec<i64> {
        Self::all().iter().map(|variant| variant.code()).collect()
    }
}

/// Total lookup: unknown codes resolve to [`UNKNOWN_LABEL`].
pub fn code_to_name<T: CodeTable>(code: i64) -> &'static str {
    T::from_code(code).map(T::display_name).unwrap_or(UNKNOWN_LABEL)
}

/// Declares a fieldless enum with explicit codes and labels and implements
/// [`CodeTable`] for it. Variant order is display order.
macro_rules! code_table {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident = $code:literal => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $($(#[$variant_meta])* $variant = $code),+
        }

        impl $crate::models::codes::CodeTable for $name {
            fn all() -> &'static [Self] {
                &[$(Self::$variant),+]
            }

            fn code(self) -> i64 {
                self as i64
            }

            fn display_name(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }
    };
}

pub(crate) use code_table;
