//! Helpers for the base path and for joining built paths.

/// Makes sure `base` begins and ends with `/`. The empty string becomes `/`.
pub fn normalize_base(base: &str) -> String {
	let mut normalized = String::with_capacity(base.len() + 2);
	if !base.starts_with('/') {
		normalized.push('/');
	}
	normalized.push_str(base);
	if !normalized.ends_with('/') {
		normalized.push('/');
	}
	normalized
}

/// Lexically cleans a slash-separated path.
///
/// Repeated slashes collapse, `.` elements are dropped and `..` removes the element
/// before it (a rooted path never climbs above `/`). The result has no trailing
/// slash unless it is the root. An empty path cleans to `.`.
pub fn clean(path: &str) -> String {
	if path.is_empty() {
		return ".".to_owned();
	}

	let rooted = path.starts_with('/');
	let mut elements: Vec<&str> = Vec::new();
	for element in path.split('/') {
		match element {
			"" | "." => {}
			".." => match elements.last() {
				Some(&last) if last != ".." => {
					elements.pop();
				}
				_ if rooted => {}
				_ => elements.push(".."),
			},
			_ => elements.push(element),
		}
	}

	let joined = elements.join("/");
	match (rooted, joined.is_empty()) {
		(true, _) => format!("/{}", joined),
		(false, true) => ".".to_owned(),
		(false, false) => joined,
	}
}

/// Joins the non-empty `elements` with `/` and cleans the result.
/// Returns the empty string when every element is empty.
pub fn join<S: AsRef<str>>(elements: &[S]) -> String {
	let joined = elements
		.iter()
		.map(AsRef::as_ref)
		.filter(|element| !element.is_empty())
		.collect::<Vec<_>>()
		.join("/");

	if joined.is_empty() {
		joined
	} else {
		clean(&joined)
	}
}

#[cfg(test)]
mod test {
	use super::{clean, join, normalize_base};

	#[test]
	fn normalizes_base_paths() {
		let normalized: Vec<_> = ["", "/", "/api", "base/", "/both/"]
			.iter()
			.map(|base| normalize_base(base))
			.collect();
		assert_eq!(normalized, vec!["/", "/", "/api/", "/base/", "/both/"]);
	}

	#[test]
	fn cleans_paths() {
		assert_eq!(clean(""), ".");
		assert_eq!(clean("/"), "/");
		assert_eq!(clean("//api///users/"), "/api/users");
		assert_eq!(clean("/api/./users/../products"), "/api/products");
		assert_eq!(clean("/.."), "/");
		assert_eq!(clean("a/../.."), "..");
		assert_eq!(clean("a/b/."), "a/b");
	}

	#[test]
	fn joins_paths() {
		assert_eq!(join(&["/api/", "users", "123"]), "/api/users/123");
		assert_eq!(join(&["/", ""]), "/");
		assert_eq!(join(&["/api/", "products", "", "do"]), "/api/products/do");
		assert_eq!(join::<&str>(&[]), "");
		assert_eq!(join(&["", ""]), "");
	}
}
