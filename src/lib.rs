//! A simple HTTP muxer without regexp.
//!
//! Routes are registered as a method plus a pattern such as `products/{id}/do`. Segments
//! wrapped in `{` and `}` bind whatever text appears at that position; every other segment
//! must match exactly. Requests are matched against the routes in registration order and the
//! first fit wins. Named routes can be turned back into concrete paths.
//!
//! ```
//! use muxer::{build_path, Router};
//!
//! let mut router = Router::new("/api");
//! router.add("GET", "users/{id}", "profile")?.name("profile")?;
//! router.add("GET", "/products", "list")?;
//! router.add("PUT", "products/{id}/do", "product")?;
//!
//! let found = router.lookup("PUT", "/api/products/42/do").unwrap();
//! assert_eq!(*found.handler(), "product");
//! assert_eq!(found.params().get("id"), Some("42"));
//!
//! assert!(router.lookup("DELETE", "/api/products").is_none());
//! assert_eq!(build_path!(router, "profile", 123)?, "/api/users/123");
//! # Ok::<(), muxer::RouterError>(())
//! ```
//!
//! With the `http` feature (on by default) a router of hyper handlers can be served directly:
//!
//! ```no_run
//! use muxer::{BoxHandler, Body, HttpRouter, Method, Params, Request, Response, ResponseBuilder, Router};
//!
//! async fn handler(_req: Request, params: Params) -> Response {
//! 	let id = params.get("id").unwrap_or_default().to_owned();
//! 	Ok(ResponseBuilder::default().body(Body::from(id))?)
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! 	let addr = ([127, 0, 0, 1], 3000).into();
//! 	let mut router: Router<BoxHandler> = Router::new("/api");
//! 	router.register(Method::GET, "users/{id}", handler)?;
//!
//! 	let server = muxer::hyper::Server::bind(&addr).serve(HttpRouter::from(router));
//! 	println!("Listening on http://{}", addr);
//!
//! 	server.await?;
//! 	Ok(())
//! }
//! ```
//!
//! The router does no locking. Finish registering before serving; once wrapped in an
//! [`HttpRouter`] it is shared read-only between connections.

#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use http::*;
#[cfg(feature = "http")]
pub use hyper::{Body, Method};

mod error;
mod params;

/// Path helpers used for base paths and built paths.
pub mod path;

/// Route patterns and registered routes.
pub mod route;

/// The route table, matching and path building.
pub mod router;

pub use error::RouterError;
pub use params::Params;
pub use route::*;
pub use router::*;
