//! CLI runner - executes commands

use crate::api::{EventParams, ListingsParams, OpenseaClient, OrderParams};
use crate::cli::commands::{Cli, Commands};
use crate::config::ClientConfig;
use crate::error::{Result, ResultExt};
use crate::pagination::{Interrupted, Retrieval};
use serde::Serialize;
use std::io::{self, BufWriter, Write};
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Config file (if any) overlaid with the environment
    pub fn load_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };
        config.merge_env()?;
        Ok(config)
    }

    /// Run the CLI command, writing records to stdout.
    ///
    /// Ctrl-C cancels the retrieval; records gathered before that are
    /// still written.
    pub async fn run(&self) -> Result<()> {
        let client = self.load_config()?.build_client()?;

        let cancel = CancellationToken::new();
        let watcher = tokio::spawn({
            let cancel = cancel.clone();
            async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    warn!("Interrupt received, stopping retrieval");
                    cancel.cancel();
                }
            }
        });

        let mut out = BufWriter::new(io::stdout());
        let result = self.execute(&client, &cancel, &mut out).await;
        watcher.abort();
        out.flush().context("Failed to flush output")?;
        result
    }

    /// Run the command against `client`, writing JSON lines to `out`
    pub async fn execute<W: Write>(
        &self,
        client: &OpenseaClient,
        cancel: &CancellationToken,
        out: &mut W,
    ) -> Result<()> {
        let start = Instant::now();
        let written = match &self.cli.command {
            Commands::Events {
                contract,
                token_id,
                account,
                collection,
                event_type,
                auction_type,
                only_opensea,
                cursor,
                after,
                before,
                limit,
            } => {
                let params = EventParams {
                    asset_contract_address: contract.clone().unwrap_or_default(),
                    token_id: token_id.clone().unwrap_or_default(),
                    account_address: account.clone().unwrap_or_default(),
                    event_type: event_type.clone(),
                    only_opensea: *only_opensea,
                    auction_type: auction_type.clone(),
                    collection_slug: collection.clone().unwrap_or_default(),
                    cursor: cursor.clone().unwrap_or_default(),
                    occurred_before: before.unwrap_or_default(),
                    occurred_after: after.unwrap_or_default(),
                    limit: *limit,
                };
                write_retrieval(
                    out,
                    client.retrieve_events_with_cancel(&params, cancel).await,
                )?
            }
            Commands::Orders {
                contract,
                token_ids,
                maker,
                owner,
                side,
                listed_after,
                order_by,
                direction,
                limit,
                offset,
                all,
            } => {
                let params = OrderParams {
                    asset_contract_address: contract.clone().unwrap_or_default(),
                    maker: maker.clone().unwrap_or_default(),
                    owner: owner.clone().unwrap_or_default(),
                    listed_after: listed_after.unwrap_or_default(),
                    token_ids: token_ids.clone(),
                    side: side.map(Into::into),
                    limit: *limit,
                    offset: *offset,
                    order_by: *order_by,
                    order_direction: *direction,
                    ..OrderParams::default()
                };
                write_retrieval(
                    out,
                    client.get_orders_with_cancel(&params, *all, cancel).await,
                )?
            }
            Commands::Listings {
                contract,
                token_ids,
                legacy,
                interval_ms,
            } => {
                if *legacy {
                    let interval = Duration::from_millis(*interval_ms);
                    let retrieval = client
                        .get_active_listings_with_cancel(contract, token_ids, interval, cancel)
                        .await;
                    write_retrieval(out, retrieval)?
                } else {
                    let params = ListingsParams::new(contract.as_str(), token_ids.iter().cloned());
                    write_retrieval(
                        out,
                        client
                            .get_active_listings_v2_with_cancel(&params, cancel)
                            .await,
                    )?
                }
            }
            Commands::Asset { contract, token_id } => {
                let asset = match token_id {
                    Some(token_id) => {
                        client
                            .get_single_asset_with_cancel(contract, token_id, cancel)
                            .await?
                    }
                    None => client.get_asset_detail_with_cancel(contract, cancel).await?,
                };
                write_records(out, &[asset])?
            }
            Commands::Collection { slug } => {
                let collection = client.get_single_collection_with_cancel(slug, cancel).await?;
                write_records(out, &[collection])?
            }
            Commands::Collections { offset, limit } => {
                let collections = client
                    .get_collections_with_cancel(*offset, *limit, cancel)
                    .await?;
                write_records(out, &collections)?
            }
        };

        info!(
            records = written,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Wrote {} records",
            written
        );
        Ok(())
    }
}

/// Write one JSON document per line
pub fn write_records<W: Write, T: Serialize>(out: &mut W, records: &[T]) -> Result<usize> {
    for record in records {
        serde_json::to_writer(&mut *out, record).context("Failed to write record")?;
        out.write_all(b"\n")?;
    }
    Ok(records.len())
}

/// Write whatever a retrieval gathered, then surface its error if any
pub fn write_retrieval<W: Write, T: Serialize>(
    out: &mut W,
    retrieval: Retrieval<T>,
) -> Result<usize> {
    match retrieval {
        Ok(records) => write_records(out, &records),
        Err(Interrupted { records, error }) => {
            let written = write_records(out, &records)?;
            warn!(records = written, "Wrote partial results before failure");
            Err(error)
        }
    }
}
