pub mod de
{
	use serde::{Deserialize, Deserializer, de};

	/// An integer sent either as a JSON number or as a string of digits.
	///
	/// HTML form inputs always yield strings, so clients that copy
	/// `input.value` straight into a payload send `"60"` rather than `60`.
	pub fn int_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
	where
		D: Deserializer<'de>,
	{
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum IntOrString
		{
			Int(i64),
			String(String),
		}

		match IntOrString::deserialize(deserializer)? {
			IntOrString::Int(value) => Ok(value),
			IntOrString::String(value) => value
				.trim()
				.parse::<i64>()
				.map_err(|_| de::Error::custom(format_args!("expected an integer, got `{value}`"))),
		}
	}

}
