//! One handler per subcommand.
//!
//! Handlers return the text to show the user; the binary decides where it
//! goes.

use serde_json::Value;
use tracing::instrument;

use crate::cli::Command;
use crate::config::Dependencies;
use crate::AdminError;
use solr_indexer_ingest::DatasetIndexer;
use solr_indexer_repository::{CollectionConfig, DeleteOutcome};

/// Run a command against `collection` and describe the result.
#[instrument(skip(deps))]
pub async fn execute(
    command: &Command,
    collection: &str,
    deps: &Dependencies,
) -> Result<String, AdminError> {
    let client = &deps.client;

    match command {
        Command::CreateCollection {
            num_shards,
            replication_factor,
        } => {
            let config = CollectionConfig::new(*num_shards, *replication_factor);
            client.create_collection(collection, &config).await?;
            Ok(format!("Collection '{}' created successfully.", collection))
        }
        Command::Index { csv, exclude } => {
            let dataset = deps.loader.load_records(csv)?;
            let summary = DatasetIndexer::new(client)
                .index(collection, dataset, exclude)
                .await?;
            Ok(format!(
                "Indexed {} records into '{}' without column '{}'.",
                summary.submitted, summary.collection, exclude
            ))
        }
        Command::Search { field, value, rows } => {
            let response = client.search(collection, field, value, *rows).await?;
            let mut lines = vec![format!(
                "Found {} documents where {} = {} (showing {}).",
                response.num_found,
                field,
                value,
                response.documents.len()
            )];
            lines.extend(
                response
                    .documents
                    .into_iter()
                    .map(|document| Value::Object(document).to_string()),
            );
            Ok(lines.join("\n"))
        }
        Command::Count => {
            let count = client.count(collection).await?;
            Ok(format!("Document count: {}", count))
        }
        Command::Delete { id } => match client.delete_by_id(collection, id).await? {
            DeleteOutcome::NotFound => Ok(format!("No document found with ID '{}' to delete.", id)),
            DeleteOutcome::Deleted { matched, remaining } => Ok(format!(
                "Deleted {} document(s) with ID '{}'. Matches after deletion: {}",
                matched, id, remaining
            )),
        },
        Command::Facet { field } => match client.facet_counts(collection, field).await? {
            Some(counts) => {
                let mut lines = vec![format!("{} facet counts:", field)];
                lines.extend(counts.iter().map(|c| format!("{}: {}", c.value, c.count)));
                Ok(lines.join("\n"))
            }
            None => Ok("No facet counts available.".to_string()),
        },
        Command::Ping => {
            if client.health_check(collection).await? {
                Ok(format!("Collection '{}' is healthy.", collection))
            } else {
                Err(AdminError::Unhealthy(collection.to_string()))
            }
        }
    }
}
