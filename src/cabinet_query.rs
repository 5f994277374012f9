use crate::clients::sparql_client::{SparqlClient, SparqlError};
use crate::membership::Membership;

pub const WIKIDATA_SPARQL: &str = "https://query.wikidata.org/sparql";

/// Root of the minister class tree; matched roles must be a subclass of it
const MINISTER_CLASS: &str = "Q83307";

/// The two historical variants of the membership query, kept as independent
/// toggles
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// Drop memberships whose executive jurisdiction (P1001 on the role)
    /// differs from the legislative jurisdiction of the queried office.
    /// Rows where either side is unbound are kept.
    pub strict_jurisdiction: bool,
    /// Also select the cabinet qualifier (P5054) of each statement
    pub include_cabinet: bool,
}

/// Builds the sparql query listing every holder of the given office.
///
/// The office id appears once in the core pattern, and a second time when the
/// jurisdiction filter is enabled.
pub fn membership_query(position_id: &str, options: &QueryOptions) -> String {
    let (cabinet_outer, cabinet_inner, cabinet_clause) = if options.include_cabinet {
        (
            " ?cabinet ?cabinetLabel",
            " ?cabinet",
            "\n      OPTIONAL { ?ps pq:P5054 ?cabinet }",
        )
    } else {
        ("", "", "")
    };
    let jurisdiction_filter = if options.strict_jurisdiction {
        format!(
            "\n      OPTIONAL {{ wd:{id} wdt:P1001 ?legislative_jurisdiction }}\
             \n      OPTIONAL {{ ?minister wdt:P1001 ?executive_jurisdiction }}\
             \n      FILTER (!BOUND(?legislative_jurisdiction) || !BOUND(?executive_jurisdiction) || (?legislative_jurisdiction = ?executive_jurisdiction))",
            id = position_id
        )
    } else {
        String::new()
    };

    format!(
        "SELECT DISTINCT ?ps ?item ?itemLabel ?minister ?ministerLabel ?ordinal ?start ?end{cabinet_outer} {{
  {{
    SELECT DISTINCT ?ps ?item ?minister ?ordinal ?start ?end{cabinet_inner} {{
      ?item p:P39/ps:P39 wd:{id} .
      ?item p:P39 ?ps .
      ?ps ps:P39 ?minister .
      ?minister wdt:P279* wd:{minister_class} .
      OPTIONAL {{ ?ps pq:P1545 ?ordinal }}
      OPTIONAL {{ ?ps pq:P580  ?start }}
      OPTIONAL {{ ?ps pq:P582  ?end }}{cabinet_clause}{jurisdiction_filter}
    }}
  }}
  SERVICE wikibase:label {{ bd:serviceParam wikibase:language \"en\". }}
}}",
        id = position_id,
        minister_class = MINISTER_CLASS,
        cabinet_outer = cabinet_outer,
        cabinet_inner = cabinet_inner,
        cabinet_clause = cabinet_clause,
        jurisdiction_filter = jurisdiction_filter,
    )
}

pub struct CabinetQuery {
    pub client: SparqlClient,
}

impl CabinetQuery {
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: SparqlClient::new(endpoint),
        }
    }

    /// Fetch every membership of the given office, one record per binding,
    /// in binding order
    pub fn memberships(
        &self,
        position_id: &str,
        options: &QueryOptions,
    ) -> Result<Vec<Membership>, SparqlError> {
        log::trace!("Fetching memberships of {}", position_id);
        let rows = self.client.query(&membership_query(position_id, options))?;
        Ok(rows.iter().map(Membership::from_binding).collect())
    }
}
