use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::debug;

use symdex::config::LoggingConfig;
use symdex::index::{IndexEntry, MatchMode, SymbolIndex};
use symdex::io::{ExitCode, JsonResponse, OutputFormat};
use symdex::parsing::{Section, SectionKind, parse_searchdata};
use symdex::query::QueryContext;
use symdex::storage::{IndexMetadata, IndexPersistence};
use symdex::{IndexError, IndexResult, Settings, logging};

#[derive(Parser)]
#[command(name = "symdex")]
#[command(about = "Load, validate and query generated documentation search indexes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize configuration file
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration
    Config,

    /// Build the index from search-data files or a search/ directory
    Index {
        /// Search-data files (`all_69.js` style) or directories holding them
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Only ingest shards of this symbol kind
        #[arg(long, value_enum)]
        kind: Option<SectionKind>,
    },

    /// Look up symbols in the built index
    Query {
        /// Search term (matched against lowercase keys)
        term: String,

        /// Match policy (overrides config)
        #[arg(long, value_enum)]
        mode: Option<MatchMode>,

        /// Maximum items to show (overrides config)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Emit a JSON envelope instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show metadata of the built index
    Info {
        /// Emit a JSON envelope instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // For non-init commands, warn when running uninitialized
    if !matches!(cli.command, Commands::Init { .. }) {
        if let Err(warning) = Settings::check_init() {
            eprintln!("Warning: {warning}");
            eprintln!("Using default configuration for now.");
        }
    }

    let config = Settings::load().unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        Settings::default()
    });

    if config.debug {
        logging::init_with_config(&LoggingConfig {
            default: "debug".to_string(),
            modules: config.logging.modules.clone(),
        });
    } else {
        logging::init_with_config(&config.logging);
    }

    let exit = match cli.command {
        Commands::Init { force } => run_init(force),
        Commands::Config => run_config(&config),
        Commands::Index { paths, kind } => run_index(&config, &paths, kind),
        Commands::Query {
            term,
            mode,
            limit,
            json,
        } => run_query(&config, &term, mode, limit, json),
        Commands::Info { json } => run_info(&config, json),
    };
    exit.exit();
}

fn run_init(force: bool) -> ExitCode {
    let config_path = Settings::config_path();
    if config_path.exists() && !force {
        eprintln!(
            "Configuration file already exists at: {}",
            config_path.display()
        );
        eprintln!("Use --force to overwrite");
        return ExitCode::GeneralError;
    }
    match Settings::init_config_file(force) {
        Ok(path) => {
            println!("Created configuration file at: {}", path.display());
            println!("Edit this file to customize your settings.");
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(&e)
        }
    }
}

fn run_config(config: &Settings) -> ExitCode {
    match toml::to_string_pretty(config) {
        Ok(toml_str) => {
            println!("{toml_str}");
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("Error displaying config: {e}");
            ExitCode::GeneralError
        }
    }
}

fn run_index(config: &Settings, paths: &[PathBuf], kind: Option<SectionKind>) -> ExitCode {
    match build_index(config, paths, kind) {
        Ok(metadata) => {
            println!(
                "Indexed {} entries ({} items) from {} file(s)",
                metadata.entry_count,
                metadata.item_count,
                metadata.sources.len()
            );
            println!("Index written to {}", config.index_path.display());
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(&e)
        }
    }
}

fn build_index(
    config: &Settings,
    paths: &[PathBuf],
    kind: Option<SectionKind>,
) -> IndexResult<IndexMetadata> {
    let files = discover_files(paths, kind)?;
    if files.is_empty() {
        return Err(IndexError::General(
            "No search data files found in the given paths".to_string(),
        ));
    }

    let mut entries: Vec<IndexEntry> = Vec::new();
    let mut sources = Vec::new();
    for file in &files {
        let text = fs::read_to_string(file).map_err(|e| IndexError::FileRead {
            path: file.clone(),
            source: e,
        })?;
        let parsed = parse_searchdata(&text)?;
        debug!("{}: {} entries", file.display(), parsed.len());
        entries.extend(parsed);
        sources.push(display_name(file));
    }

    let index = SymbolIndex::from_entries(entries)?;
    IndexPersistence::new(config.index_path.clone()).save(&index, sources)
}

/// Expand the given paths into shard files. Directories are scanned
/// for recognizable shard names (`all_69.js` style) so the search
/// engine script and HTML scaffolding are skipped; explicitly named
/// files are taken as-is unless `--kind` rules them out.
fn discover_files(paths: &[PathBuf], kind: Option<SectionKind>) -> IndexResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut shards: Vec<PathBuf> = Vec::new();
            let dir = fs::read_dir(path).map_err(|e| IndexError::FileRead {
                path: path.clone(),
                source: e,
            })?;
            for dir_entry in dir {
                let dir_entry = dir_entry.map_err(|e| IndexError::FileRead {
                    path: path.clone(),
                    source: e,
                })?;
                let name = dir_entry.file_name();
                let Some(section) = name.to_str().and_then(Section::from_file_name) else {
                    continue;
                };
                if kind.is_none_or(|k| section.kind == k) {
                    shards.push(dir_entry.path());
                }
            }
            shards.sort();
            files.extend(shards);
        } else {
            let section = path
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(Section::from_file_name);
            match (kind, section) {
                (Some(k), Some(section)) if section.kind != k => continue,
                _ => files.push(path.clone()),
            }
        }
    }
    Ok(files)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn run_query(
    config: &Settings,
    term: &str,
    mode: Option<MatchMode>,
    limit: Option<usize>,
    json: bool,
) -> ExitCode {
    let format = OutputFormat::from_json_flag(json);
    let index = match IndexPersistence::new(config.index_path.clone()).load() {
        Ok(index) => index,
        Err(e) => return output_load_error(e, format),
    };
    let mode = mode.unwrap_or(config.search.default_mode);
    let limit = limit.unwrap_or(config.search.max_results);
    QueryContext::new(&index, format, limit).run(term, mode)
}

fn run_info(config: &Settings, json: bool) -> ExitCode {
    let format = OutputFormat::from_json_flag(json);
    let persistence = IndexPersistence::new(config.index_path.clone());
    if !persistence.exists() {
        return output_load_error(
            IndexError::IndexNotFound {
                path: config.index_path.join("index.json"),
            },
            format,
        );
    }
    match persistence.load_metadata() {
        Ok(metadata) => {
            if format.is_json() {
                JsonResponse::success(&metadata).print();
            } else {
                println!("Index: {}", config.index_path.display());
                println!("  entries: {}", metadata.entry_count);
                println!("  items: {}", metadata.item_count);
                println!("  sources: {}", metadata.sources.join(", "));
                if let Some(when) =
                    chrono::DateTime::from_timestamp(metadata.generated_at as i64, 0)
                {
                    println!("  generated: {}", when.format("%Y-%m-%d %H:%M:%S UTC"));
                }
            }
            ExitCode::Success
        }
        Err(e) => output_load_error(e, format),
    }
}

fn output_load_error(err: IndexError, format: OutputFormat) -> ExitCode {
    let code = ExitCode::from(&err);
    if format.is_json() {
        let response: JsonResponse<()> = JsonResponse::error(error_code(&err), err.to_string());
        response.print();
    } else {
        eprintln!("Error: {err}");
    }
    code
}

fn error_code(err: &IndexError) -> &'static str {
    match err {
        IndexError::Parse(_) | IndexError::Serialize(_) | IndexError::Deserialize { .. } => {
            "PARSE_ERROR"
        }
        IndexError::IndexNotFound { .. } => "INDEX_NOT_FOUND",
        IndexError::FileRead { .. } | IndexError::FileWrite { .. } => "IO_ERROR",
        IndexError::General(_) => "INTERNAL_ERROR",
    }
}
