use crate::{
	error::RouterError,
	params::Params,
	path,
	route::{Route, RouteHandle, Segment},
};
use log::{debug, trace};
use std::{
	fmt::Display,
	sync::atomic::{AtomicUsize, Ordering},
};

static NEXT_ROUTER_ID: AtomicUsize = AtomicUsize::new(0);

/// Builds a path from a named route, accepting any `Display` values.
///
/// ```
/// use muxer::{build_path, Router};
///
/// let mut router = Router::new("/api");
/// router.add("POST", "{domain}/{action}/{id}", ())?.name("whatever")?;
///
/// let path = build_path!(router, "whatever", "somedomain", true, 23.45)?;
/// assert_eq!(path, "/api/somedomain/true/23.45");
/// # Ok::<(), muxer::RouterError>(())
/// ```
#[macro_export]
macro_rules! build_path {
	($router:expr, $name:expr) => {
		$router.build_path($name, &[])
	};
	($router:expr, $name:expr, $($value:expr),+ $(,)?) => {
		$router.build_path($name, &[$(&$value as &dyn ::std::fmt::Display),+])
	};
}

/// An ordered table of routes.
///
/// Routes are matched in registration order and the first compatible route wins.
/// Register specific patterns before the variable patterns that would shadow them.
#[derive(Debug)]
pub struct Router<H> {
	id: usize,
	base: String,
	routes: Vec<Route<H>>,
}

impl<H> Default for Router<H> {
	fn default() -> Self {
		Self::new("")
	}
}

impl<H> Router<H> {
	/// Creates an empty router serving under `base_path`.
	///
	/// The base path is always prefixed and suffixed with `/`, so `""` becomes `/`
	/// and `api` becomes `/api/`.
	pub fn new(base_path: &str) -> Self {
		Self {
			id: NEXT_ROUTER_ID.fetch_add(1, Ordering::Relaxed),
			base: path::normalize_base(base_path),
			routes: Vec::new(),
		}
	}

	pub fn base_path(&self) -> &str {
		&self.base
	}

	/// All routes, in registration order.
	pub fn routes(&self) -> &[Route<H>] {
		&self.routes
	}

	/// The route behind `handle`, or `None` if the handle belongs to another router.
	pub fn route(&self, handle: RouteHandle) -> Option<&Route<H>> {
		if handle.router != self.id {
			return None;
		}
		self.routes.get(handle.index)
	}

	pub fn named(&self, name: &str) -> Option<&Route<H>> {
		self.routes
			.iter()
			.find(|route| route.name.as_deref() == Some(name))
	}

	/// Registers `handler` for `method` and `pattern`.
	///
	/// A leading `/` on the pattern is ignored. Registering the same method and
	/// pattern twice is an error.
	pub fn add(
		&mut self,
		method: &str,
		pattern: &str,
		handler: H,
	) -> Result<NewRoute<'_, H>, RouterError> {
		let pattern = pattern.strip_prefix('/').unwrap_or(pattern);
		if self
			.routes
			.iter()
			.any(|route| route.method == method && route.pattern.as_str() == pattern)
		{
			return Err(RouterError::DuplicateRoute {
				method: method.to_owned(),
				pattern: pattern.to_owned(),
			});
		}

		debug!("adding route {} {}", method, pattern);
		let handle = RouteHandle {
			router: self.id,
			index: self.routes.len(),
		};
		self.routes.push(Route::new(method, pattern, handler));
		Ok(NewRoute {
			router: self,
			handle,
		})
	}

	/// Names a route so that paths can be built from it with [`Router::build_path`].
	///
	/// Naming is last-write-wins: a route that already has a name takes the new one and
	/// frees the old. An empty name leaves the route unnamed. A name held by another
	/// route is an error, and so is a handle from another router.
	pub fn name(&mut self, handle: RouteHandle, name: &str) -> Result<RouteHandle, RouterError> {
		if handle.router != self.id || handle.index >= self.routes.len() {
			return Err(RouterError::RouteNotFound(name.to_owned()));
		}

		if !name.is_empty()
			&& self
				.routes
				.iter()
				.enumerate()
				.any(|(i, route)| i != handle.index && route.name.as_deref() == Some(name))
		{
			return Err(RouterError::DuplicateName(name.to_owned()));
		}

		let route = &mut self.routes[handle.index];
		debug!("naming route {} {} '{}'", route.method, route.pattern, name);
		route.name = if name.is_empty() {
			None
		} else {
			Some(name.to_owned())
		};
		Ok(handle)
	}

	/// Finds the first route for `method` whose pattern fits `path`.
	///
	/// `path` is relative to the base path, e.g. `users/show/alex` for a request to
	/// `/api/users/show/alex` on a router based at `/api/`.
	pub fn find(&self, method: &str, path: &str) -> Option<Match<'_, H>> {
		let segments: Vec<&str> = path.split('/').collect();

		let route = self.routes.iter().find(|route| {
			route.method == method
				&& route.pattern.len() == segments.len()
				&& route
					.pattern
					.segments()
					.iter()
					.zip(&segments)
					.all(|(expected, actual)| match expected {
						Segment::Static(literal) => literal == actual,
						Segment::Dynamic(_) => true,
					})
		});

		let route = match route {
			Some(route) => route,
			None => {
				trace!("no route for {} {}", method, path);
				return None;
			}
		};

		let mut params = Params::with_capacity(segments.len());
		for (segment, value) in route.pattern.segments().iter().zip(segments) {
			if let Segment::Dynamic(name) = segment {
				params.add(name.as_str(), value);
			}
		}

		trace!("{} {} matched {}", method, path, route.pattern);
		Some(Match { route, params })
	}

	/// Like [`Router::find`], but takes the full request path and strips the base path
	/// first. Paths outside the base path match nothing, including the base path without
	/// its trailing slash: on a router based at `/api/`, `/api` is a no-match rather than
	/// a redirect.
	pub fn lookup(&self, method: &str, full_path: &str) -> Option<Match<'_, H>> {
		match full_path.strip_prefix(self.base.as_str()) {
			Some(path) => self.find(method, path),
			None => {
				trace!("{} is outside of base path {}", full_path, self.base);
				None
			}
		}
	}

	/// Builds a concrete path from the route called `name`.
	///
	/// Variable segments take `values` in order; extra values are ignored. The result
	/// is prefixed with the base path and cleaned of duplicate and trailing slashes.
	pub fn build_path(&self, name: &str, values: &[&dyn Display]) -> Result<String, RouterError> {
		let route = self
			.named(name)
			.ok_or_else(|| RouterError::RouteNotFound(name.to_owned()))?;

		let expected = route.pattern.variables().count();
		if values.len() < expected {
			return Err(RouterError::MissingParameter {
				route: name.to_owned(),
				expected,
				supplied: values.len(),
			});
		}

		let mut values = values.iter();
		let mut parts = Vec::with_capacity(route.pattern.len() + 1);
		parts.push(self.base.clone());
		for segment in route.pattern.segments() {
			match segment {
				Segment::Static(literal) => parts.push(literal.clone()),
				Segment::Dynamic(_) => {
					if let Some(value) = values.next() {
						parts.push(value.to_string());
					}
				}
			}
		}

		Ok(path::join(&parts))
	}
}

/// The registration guard returned by [`Router::add`].
pub struct NewRoute<'a, H> {
	router: &'a mut Router<H>,
	handle: RouteHandle,
}

impl<'a, H> NewRoute<'a, H> {
	pub fn handle(&self) -> RouteHandle {
		self.handle
	}

	/// Names the new route. See [`Router::name`].
	pub fn name(self, name: &str) -> Result<RouteHandle, RouterError> {
		self.router.name(self.handle, name)
	}
}

/// A successful lookup: the route and the values bound to its variables.
#[derive(Debug)]
pub struct Match<'a, H> {
	route: &'a Route<H>,
	params: Params,
}

impl<'a, H> Match<'a, H> {
	pub fn route(&self) -> &'a Route<H> {
		self.route
	}

	pub fn handler(&self) -> &'a H {
		self.route.handler()
	}

	pub fn params(&self) -> &Params {
		&self.params
	}

	pub fn into_params(self) -> Params {
		self.params
	}
}
