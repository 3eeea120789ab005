use thiserror::Error;

/// Errors raised while configuring the router or building paths from it.
///
/// A request that matches no route is not an error: matching returns `None`.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum RouterError {
	#[error("route '{method} {pattern}' already exists")]
	DuplicateRoute { method: String, pattern: String },

	#[error("route with name '{0}' already exists")]
	DuplicateName(String),

	#[error("route '{0}' doesn't exist")]
	RouteNotFound(String),

	#[error("route '{route}' takes {expected} parameters, {supplied} supplied")]
	MissingParameter {
		route: String,
		expected: usize,
		supplied: usize,
	},
}
