pub mod api;
pub mod cli;
pub mod db;
pub mod graphql;
pub mod paths;
pub mod resolvers;

pub fn hello() -> &'static str {
    "Hello from collablite"
}
