use std::fmt::{self, Display, Formatter};

/// One `/`-delimited piece of a route pattern.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Segment {
	/// Matches exactly (string equality) the corresponding request segment.
	Static(String),
	/// Matches any corresponding request segment and binds it under this name.
	Dynamic(String),
}

impl Segment {
	fn parse(token: &str) -> Self {
		if token.starts_with('{') && token.ends_with('}') {
			Segment::Dynamic(token[1..token.len() - 1].to_owned())
		} else {
			Segment::Static(token.to_owned())
		}
	}

	pub fn is_variable(&self) -> bool {
		matches!(self, Segment::Dynamic(_))
	}

	/// The literal text of a static segment, or the binding name of a dynamic one.
	pub fn name(&self) -> &str {
		match self {
			Segment::Static(name) | Segment::Dynamic(name) => name,
		}
	}
}

/// A route pattern compiled into its segments.
///
/// Patterns are compiled once at registration and never change afterwards.
/// The raw text is kept in its normalized form, without a leading `/`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Pattern {
	raw: String,
	segments: Vec<Segment>,
}

impl Pattern {
	/// Splits `pattern` on `/` and classifies every token.
	///
	/// Empty tokens are kept as empty static segments, so `a//b` has three segments
	/// and the empty pattern has one. A token is a variable iff it is wrapped in
	/// `{` and `}`; `{}` is a variable with an empty name.
	pub fn compile(pattern: &str) -> Self {
		Self {
			raw: pattern.to_owned(),
			segments: pattern.split('/').map(Segment::parse).collect(),
		}
	}

	pub fn as_str(&self) -> &str {
		&self.raw
	}

	pub fn segments(&self) -> &[Segment] {
		&self.segments
	}

	/// Number of segments.
	pub fn len(&self) -> usize {
		self.segments.len()
	}

	/// Always false: even the empty pattern holds one (empty) segment.
	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}

	/// Names of the variable segments, left to right.
	pub fn variables(&self) -> impl Iterator<Item = &str> {
		self.segments
			.iter()
			.filter(|segment| segment.is_variable())
			.map(Segment::name)
	}
}

impl Display for Pattern {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(&self.raw)
	}
}

/// Identifies a route inside the router that registered it.
///
/// Handles are only valid on that router; any other router rejects them.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct RouteHandle {
	pub(crate) router: usize,
	pub(crate) index: usize,
}

/// A registered endpoint.
#[derive(Debug)]
pub struct Route<H> {
	pub(crate) method: String,
	pub(crate) pattern: Pattern,
	pub(crate) handler: H,
	pub(crate) name: Option<String>,
}

impl<H> Route<H> {
	pub(crate) fn new(method: &str, pattern: &str, handler: H) -> Self {
		Self {
			method: method.to_owned(),
			pattern: Pattern::compile(pattern),
			handler,
			name: None,
		}
	}

	pub fn method(&self) -> &str {
		&self.method
	}

	pub fn pattern(&self) -> &Pattern {
		&self.pattern
	}

	pub fn handler(&self) -> &H {
		&self.handler
	}

	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}
}
