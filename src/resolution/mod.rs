//! Route resolution — list routes, filter them, map them to handler files.

pub mod filter;
pub mod handlers;
pub mod routes;

pub use filter::{filter_routes, ExclusionRules};
pub use handlers::{HandlerResolver, MalformedReference};
pub use routes::{parse_route_records, ConsoleRouteSource, RouteSource, StaticRouteSource};
