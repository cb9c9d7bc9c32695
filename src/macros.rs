//! Macros used by this crate.

/// Implements [`sqlx::Type`], [`sqlx::Encode`] and [`sqlx::Decode`] for a type
/// that is stored as a string column.
///
/// The type needs an `as_str(&self) -> &'static str` method and a
/// [`FromStr`](std::str::FromStr) implementation whose error can be boxed.
macro_rules! impl_sqlx_as_str {
	($ty:ty) => {
		impl ::sqlx::Type<::sqlx::MySql> for $ty
		{
			fn type_info() -> ::sqlx::mysql::MySqlTypeInfo
			{
				<str as ::sqlx::Type<::sqlx::MySql>>::type_info()
			}

			fn compatible(ty: &::sqlx::mysql::MySqlTypeInfo) -> bool
			{
				<str as ::sqlx::Type<::sqlx::MySql>>::compatible(ty)
			}
		}

		impl<'q> ::sqlx::Encode<'q, ::sqlx::MySql> for $ty
		{
			fn encode_by_ref(
				&self,
				buf: &mut <::sqlx::MySql as ::sqlx::Database>::ArgumentBuffer<'q>,
			) -> ::std::result::Result<::sqlx::encode::IsNull, ::sqlx::error::BoxDynError>
			{
				<&str as ::sqlx::Encode<'q, ::sqlx::MySql>>::encode(self.as_str(), buf)
			}
		}

		impl<'r> ::sqlx::Decode<'r, ::sqlx::MySql> for $ty
		{
			fn decode(
				value: ::sqlx::mysql::MySqlValueRef<'r>,
			) -> ::std::result::Result<Self, ::sqlx::error::BoxDynError>
			{
				<&str as ::sqlx::Decode<'r, ::sqlx::MySql>>::decode(value)?
					.parse::<Self>()
					.map_err(::std::convert::Into::into)
			}
		}
	};
}
