use muxer::{
	hyper::Server, Body, BoxHandler, HttpRouter, Method, Params, Request, Response,
	ResponseBuilder, Router,
};

async fn profile(_req: Request, params: Params) -> Response {
	let res = ResponseBuilder::default();
	log::info!("profile {:?}", params.get("id"));
	Ok(res.body(Body::from(format!("{:?}", params)))?)
}

async fn products(_req: Request, _params: Params) -> Response {
	let res = ResponseBuilder::default();
	Ok(res.body(Body::empty())?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
	env_logger::init();
	let addr = ([127, 0, 0, 1], 3000).into();

	let mut router: Router<BoxHandler> = Router::new("/api");
	router
		.register(Method::GET, "users/{id}", profile)?
		.name("profile")?;
	router
		.register(Method::GET, "products", products)?
		.name("list")?;
	router.register(Method::PUT, "products/{id}/do", products)?;
	router.register(Method::POST, "{domain}/{action}/{id}", profile)?;

	println!("Profile lives at {}", muxer::build_path!(router, "profile", 123)?);

	let server = Server::bind(&addr).serve(HttpRouter::from(router));
	println!("Listening on http://{}", addr);

	server.await?;
	Ok(())
}
