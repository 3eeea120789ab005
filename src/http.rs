use crate::{NewRoute, Params, Router, RouterError};
use anyhow::{Error, Result};
use hyper::{body::Body, service::Service, Method, StatusCode};
use log::warn;
use std::{
	convert::Infallible,
	future::{ready, Future, Ready},
	pin::Pin,
	sync::Arc,
	task::{Context, Poll},
};

pub use hyper;

pub use hyper::http::response::Builder as ResponseBuilder;
pub type Request = hyper::Request<Body>;
pub type Response = Result<hyper::Response<Body>>;
pub type ResponseFuture = Pin<Box<dyn Future<Output = Response> + Send>>;

/// Anything that can answer a routed request.
///
/// Implemented for every `Fn(Request, Params) -> impl Future<Output = Response>`,
/// so plain `async fn`s can be registered directly.
pub trait Handler: Send + Sync + 'static {
	fn handle(&self, req: Request, params: Params) -> ResponseFuture;
}

impl<F, Fut> Handler for F
where
	F: Fn(Request, Params) -> Fut + Send + Sync + 'static,
	Fut: Future<Output = Response> + Send + 'static,
{
	fn handle(&self, req: Request, params: Params) -> ResponseFuture {
		Box::pin(self(req, params))
	}
}

pub type BoxHandler = Box<dyn Handler>;

impl Router<BoxHandler> {
	/// Registers a hyper handler. See [`Router::add`].
	pub fn register<H: Handler>(
		&mut self,
		method: Method,
		pattern: &str,
		handler: H,
	) -> Result<NewRoute<'_, BoxHandler>, RouterError> {
		self.add(method.as_str(), pattern, Box::new(handler))
	}
}

fn default_error_handler(e: Error) -> hyper::Response<Body> {
	let mut res = hyper::Response::new(Body::from(e.to_string()));
	*res.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
	res
}

fn default_not_found_handler(_req: Request) -> hyper::Response<Body> {
	let mut res = hyper::Response::new(Body::empty());
	*res.status_mut() = StatusCode::NOT_FOUND;
	res
}

/// A function that can convert an error into a response.
pub type ErrorHandler = fn(e: Error) -> hyper::Response<Body>;

/// A function that handles unroutable requests and creates a response.
pub type NotFoundHandler = fn(req: Request) -> hyper::Response<Body>;

/// Serves a finished [`Router`] through hyper.
///
/// The router is frozen once wrapped: every connection shares it read-only.
pub struct HttpRouter {
	router: Arc<Router<BoxHandler>>,
	internal_error: ErrorHandler,
	not_found: NotFoundHandler,
}

impl From<Router<BoxHandler>> for HttpRouter {
	fn from(inner: Router<BoxHandler>) -> Self {
		Self {
			router: Arc::new(inner),
			internal_error: default_error_handler,
			not_found: default_not_found_handler,
		}
	}
}

impl HttpRouter {
	pub fn router(&self) -> &Router<BoxHandler> {
		&self.router
	}

	/// Replaces the default empty 404 response.
	pub fn not_found_handler(mut self, handler: NotFoundHandler) -> Self {
		self.not_found = handler;
		self
	}

	/// Replaces the default 500 response carrying the error text.
	pub fn internal_error_handler(mut self, handler: ErrorHandler) -> Self {
		self.internal_error = handler;
		self
	}
}

impl<T> Service<T> for HttpRouter {
	type Response = RouteHandler;
	type Error = Infallible;
	type Future = Ready<Result<Self::Response, Self::Error>>;

	fn poll_ready(&mut self, _: &mut Context) -> Poll<Result<(), Self::Error>> {
		Poll::Ready(Ok(()))
	}

	fn call(&mut self, _: T) -> Self::Future {
		ready(Ok(RouteHandler {
			router: Arc::clone(&self.router),
			internal_error: self.internal_error,
			not_found: self.not_found,
		}))
	}
}

/// Responsible for handling the actual HTTP requests from hyper.
///
/// Request paths are percent-decoded before matching, so patterns and captured values
/// deal in decoded text.
pub struct RouteHandler {
	router: Arc<Router<BoxHandler>>,
	internal_error: ErrorHandler,
	not_found: NotFoundHandler,
}

impl Service<Request> for RouteHandler {
	type Response = hyper::Response<Body>;
	type Error = Infallible;
	type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

	fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
		Poll::Ready(Ok(()))
	}

	fn call(&mut self, req: Request) -> Self::Future {
		let found = match urlencoding::decode(req.uri().path()) {
			Ok(path) => self.router.lookup(req.method().as_str(), &path),
			Err(e) => {
				warn!("undecodable request path {}: {}", req.uri().path(), e);
				None
			}
		};

		match found {
			Some(found) => {
				let handler = found.handler();
				let fut = handler.handle(req, found.into_params());
				let err = self.internal_error;
				Box::pin(async move {
					Ok(fut.await.unwrap_or_else(|e| {
						warn!("route handler failed: {:#}", e);
						err(e)
					}))
				})
			}
			None => {
				let response = (self.not_found)(req);
				Box::pin(async { Ok(response) })
			}
		}
	}
}
