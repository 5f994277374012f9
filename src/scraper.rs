use crate::cabinet_query::{CabinetQuery, QueryOptions};
use crate::membership::Membership;
use crate::store::Store;
use anyhow::Context;
use std::path::Path;

pub struct CabinetScraper {
    pub query: CabinetQuery,
    pub store: Store,
}

impl CabinetScraper {
    pub fn new(endpoint: &str, database: &Path) -> Result<Self, anyhow::Error> {
        Ok(Self {
            query: CabinetQuery::new(endpoint),
            store: Store::open(database).context("impossible to open the database")?,
        })
    }

    /// Fetch the memberships of each office and rewrite the whole table with
    /// them. The store is written exactly once, even with several offices or
    /// zero results.
    pub fn scrape(
        &mut self,
        positions: &[String],
        options: &QueryOptions,
    ) -> Result<usize, anyhow::Error> {
        let mut memberships: Vec<Membership> = Vec::new();
        for position in positions {
            let rows = self.query.memberships(position, options)?;
            log::info!("{} memberships for {}", rows.len(), position);
            memberships.extend(rows);
        }

        // morph.io convention: dump the records before saving them
        if std::env::var("MORPH_DEBUG").is_ok() {
            for membership in &memberships {
                println!("{}", serde_json::to_value(membership)?);
            }
        }

        self.store
            .save(&memberships, &["position_id"])
            .context("impossible to save the memberships")?;
        Ok(memberships.len())
    }
}
