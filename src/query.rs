//! Query command implementation.
//!
//! Resolves a term against the loaded index, groups hits by key so
//! overloads spread across duplicate keys render together, and emits
//! text or a JSON envelope.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::index::{Item, MatchMode, SymbolIndex};
use crate::io::{ExitCode, JsonResponse, OutputFormat};

/// One lookup hit as rendered by the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct QueryHit<'a> {
    pub key: &'a str,
    pub display_name: &'a str,
    pub target_url: &'a str,
    pub container: &'a str,
}

/// Shared execution context for the query command.
pub struct QueryContext<'a> {
    index: &'a SymbolIndex,
    format: OutputFormat,
    limit: usize,
}

impl<'a> QueryContext<'a> {
    pub fn new(index: &'a SymbolIndex, format: OutputFormat, limit: usize) -> Self {
        Self {
            index,
            format,
            limit,
        }
    }

    /// Run one lookup and render the outcome. Empty results map to
    /// [`ExitCode::NotFound`]; they are not an error.
    pub fn run(&self, query: &str, mode: MatchMode) -> ExitCode {
        let available = self.index.lookup(query, mode).count();
        if available == 0 {
            return self.output_not_found(query);
        }
        let grouped = self.collect(query, mode);
        let shown: usize = grouped.values().map(Vec::len).sum();
        debug!("query '{query}' matched {available} item(s), showing {shown}");
        self.output_hits(query, &grouped, shown, available)
    }

    /// Group matching items by key, capped at `limit` items total.
    /// Duplicate keys merge into one combined group.
    fn collect(&self, query: &str, mode: MatchMode) -> IndexMap<&'a str, Vec<&'a Item>> {
        let mut grouped: IndexMap<&'a str, Vec<&'a Item>> = IndexMap::new();
        let mut total = 0;
        for entry in self.index.matching_entries(query, mode) {
            if total >= self.limit {
                break;
            }
            let slot = grouped.entry(entry.key.as_str()).or_default();
            for item in &entry.items {
                if total >= self.limit {
                    break;
                }
                slot.push(item);
                total += 1;
            }
        }
        grouped
    }

    fn output_not_found(&self, query: &str) -> ExitCode {
        if self.format.is_json() {
            let response: JsonResponse<()> = JsonResponse::not_found(format!(
                "No symbols match '{query}'. Try `--mode substring` for a wider search."
            ))
            .with_query(query);
            response.print();
        } else {
            eprintln!("Not found: '{query}'");
            eprintln!("Try `--mode substring` for a wider search.");
        }
        ExitCode::NotFound
    }

    fn output_hits(
        &self,
        query: &str,
        grouped: &IndexMap<&'a str, Vec<&'a Item>>,
        shown: usize,
        available: usize,
    ) -> ExitCode {
        if self.format.is_json() {
            let hits: Vec<QueryHit<'_>> = grouped
                .iter()
                .flat_map(|(&key, items)| {
                    items.iter().map(move |item| QueryHit {
                        key,
                        display_name: &item.display_name,
                        target_url: &item.target_url,
                        container: &item.container,
                    })
                })
                .collect();
            let mut response = JsonResponse::success(hits)
                .with_query(query)
                .with_count(shown);
            if shown < available {
                response.message =
                    Some(format!("showing first {shown} of {available} items"));
            }
            response.print();
        } else {
            for (key, items) in grouped {
                println!("{} ({} item{})", key, items.len(), plural(items.len()));
                for item in items {
                    if item.container.is_empty() {
                        println!("  {}  {}", item.display_name, item.target_url);
                    } else {
                        println!(
                            "  {}  {}  [{}]",
                            item.display_name, item.target_url, item.container
                        );
                    }
                }
            }
            if shown < available {
                println!("... {} more not shown (raise --limit)", available - shown);
            }
        }
        ExitCode::Success
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
