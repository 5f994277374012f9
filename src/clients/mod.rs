pub mod sparql_client;

pub use sparql_client::{SparqlClient, SparqlError};
