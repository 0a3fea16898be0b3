//! Closed option sets stored as plain strings

/// A settings field restricted to a fixed set of string options
pub trait Choice: Copy + Sized + 'static {
	const OPTIONS: &'static [&'static str];
	const DEFAULT: Self;
	const DEFAULT_OPTION: &'static str;

	fn as_str(self) -> &'static str;

	/// The matching variant, or the default for anything outside the set
	fn from_option(option: &str) -> Self;
}

/// Declares a `Choice` enum together with its wire names and default
///
/// ```ignore
/// choice_enum! {
///     pub enum SymbolPosition { Pre => "pre", Post => "post" } default Pre
/// }
/// ```
#[macro_export]
macro_rules! choice_enum {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident {
			$( $(#[$vmeta:meta])* $variant:ident => $option:literal ),+ $(,)?
		} default $default:ident
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
		$vis enum $name {
			$( $(#[$vmeta])* #[serde(rename = $option)] $variant, )+
		}

		impl $crate::choice::Choice for $name {
			const OPTIONS: &'static [&'static str] = &[$($option),+];
			const DEFAULT: Self = Self::$default;
			const DEFAULT_OPTION: &'static str = $name::as_str(Self::$default);

			fn as_str(self) -> &'static str {
				$name::as_str(self)
			}

			fn from_option(option: &str) -> Self {
				match option {
					$( $option => Self::$variant, )+
					_ => Self::$default,
				}
			}
		}

		impl $name {
			pub const fn as_str(self) -> &'static str {
				match self {
					$( Self::$variant => $option, )+
				}
			}
		}

		impl Default for $name {
			fn default() -> Self {
				Self::$default
			}
		}

		impl ::std::fmt::Display for $name {
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				f.write_str(self.as_str())
			}
		}
	};
}


// vim: ts=4
