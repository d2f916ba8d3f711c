pub mod graphql;
pub mod oauth;
pub mod profiles;
pub mod projects;
pub mod setup;
