mod company;
mod graphql;
mod portfolio;
mod project;
mod token;
pub use company::*;
pub use graphql::*;
pub use portfolio::*;
pub use project::*;
pub use token::*;
