/// Values captured from the variable segments of a matched path.
///
/// A pattern may repeat a variable name, in which case every captured value is
/// kept in path order.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Params {
	pairs: Vec<(String, String)>,
}

impl Params {
	pub fn new() -> Self {
		Self::default()
	}

	pub(crate) fn with_capacity(capacity: usize) -> Self {
		Self {
			pairs: Vec::with_capacity(capacity),
		}
	}

	pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.pairs.push((name.into(), value.into()));
	}

	/// First value bound to `name`.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.pairs
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value.as_str())
	}

	/// Every value bound to `name`, left to right.
	pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
		self.pairs
			.iter()
			.filter(move |(key, _)| key == name)
			.map(|(_, value)| value.as_str())
	}

	pub fn contains_key(&self, name: &str) -> bool {
		self.pairs.iter().any(|(key, _)| key == name)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.pairs
			.iter()
			.map(|(key, value)| (key.as_str(), value.as_str()))
	}

	pub fn len(&self) -> usize {
		self.pairs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}
}

impl IntoIterator for Params {
	type Item = (String, String);
	type IntoIter = std::vec::IntoIter<(String, String)>;

	fn into_iter(self) -> Self::IntoIter {
		self.pairs.into_iter()
	}
}

#[cfg(test)]
mod test {
	use super::Params;

	#[test]
	fn keeps_every_value() {
		let mut params = Params::new();
		params.add("id", "1");
		params.add("action", "show");
		params.add("id", "2");

		assert_eq!(params.len(), 3);
		assert_eq!(params.get("id"), Some("1"));
		assert_eq!(params.get_all("id").collect::<Vec<_>>(), vec!["1", "2"]);
		assert_eq!(params.get("action"), Some("show"));
		assert_eq!(params.get("missing"), None);
		assert!(params.contains_key("action"));
		assert!(!params.contains_key("missing"));
		assert_eq!(
			params.iter().collect::<Vec<_>>(),
			vec![("id", "1"), ("action", "show"), ("id", "2")]
		);
	}

	#[test]
	fn values_outlive_the_lookup_key() {
		let mut params = Params::new();
		params.add("id", "42");

		let value = {
			let key = String::from("id");
			params.get(&key)
		};
		assert_eq!(value, Some("42"));
	}

	#[test]
	fn starts_empty() {
		let params = Params::new();
		assert!(params.is_empty());
		assert_eq!(params.into_iter().count(), 0);
	}
}
