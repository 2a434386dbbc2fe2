use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use portfolio_gallery_core::{
    Catalog, Gallery, MediaFrame, NavCommand, Presenter, ViewerKind,
};
use tracing_subscriber::EnvFilter;

fn main() -> portfolio_gallery_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Browse {
            catalog,
            category,
            item,
            steps,
        } => run_browse(catalog.as_deref(), category.as_deref(), item.as_deref(), steps),
        Commands::Inspect { catalog } => run_inspect(catalog.as_deref()),
    }
}

fn run_browse(
    catalog: Option<&Path>,
    category: Option<&str>,
    item: Option<&str>,
    steps: usize,
) -> portfolio_gallery_core::Result<()> {
    let mut gallery = Gallery::new(load_catalog(catalog)?);
    if let Some(category) = category {
        gallery.select_category(category);
    }
    tracing::info!(category = gallery.active_category(), "browsing gallery");

    let clicked = match item {
        Some(id) => id.to_string(),
        None => first_visible_id(&gallery)?,
    };

    let mut presenter = ConsolePresenter;
    if !gallery.activate(&clicked, &mut presenter) {
        return Err(format!("`{clicked}` is not visible under the active category").into());
    }

    for _ in 0..steps {
        gallery.dispatch(NavCommand::Next, &mut presenter);
    }
    gallery.dispatch(NavCommand::Close, &mut presenter);
    Ok(())
}

fn run_inspect(catalog: Option<&Path>) -> portfolio_gallery_core::Result<()> {
    let catalog = load_catalog(catalog)?;

    let mut per_category: BTreeMap<&str, usize> = BTreeMap::new();
    for item in catalog.items() {
        *per_category.entry(item.category.as_str()).or_default() += 1;
    }
    for (category, count) in &per_category {
        tracing::info!(category, count, "category");
    }

    for kind in [ViewerKind::Lightbox, ViewerKind::PdfViewer, ViewerKind::VideoModal] {
        tracing::info!(?kind, "viewer available");
    }
    tracing::info!(total = catalog.len(), "catalog is valid");
    Ok(())
}

fn load_catalog(path: Option<&Path>) -> portfolio_gallery_core::Result<Catalog> {
    match path {
        Some(path) => {
            tracing::info!(?path, "loading catalog");
            Catalog::load(path)
        }
        None => {
            tracing::info!("using built-in sample catalog");
            Ok(Catalog::sample())
        }
    }
}

fn first_visible_id(gallery: &Gallery) -> portfolio_gallery_core::Result<String> {
    gallery
        .visible_items()
        .first()
        .map(|item| item.id.clone())
        .ok_or_else(|| {
            format!(
                "no items visible under category `{}`",
                gallery.active_category()
            )
            .into()
        })
}

/// Presenter that paints frames onto the log.
struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn show(&mut self, frame: &MediaFrame) {
        tracing::info!(kind = ?frame.kind, source = %frame.source, caption = %frame.caption, "showing");
    }

    fn clear(&mut self) {
        tracing::info!("viewer closed");
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Portfolio gallery walkthrough", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open a viewer at an item and walk the carousel forward.
    Browse {
        /// Optional catalog JSON file; defaults to the built-in sample.
        #[arg(short, long)]
        catalog: Option<PathBuf>,
        /// Category tab to select before opening.
        #[arg(long)]
        category: Option<String>,
        /// Item id to click; defaults to the first visible item.
        #[arg(long)]
        item: Option<String>,
        /// Number of forward steps to take once open.
        #[arg(short, long, default_value_t = 3)]
        steps: usize,
    },
    /// Load and validate a catalog, then report what it contains.
    Inspect {
        /// Optional catalog JSON file; defaults to the built-in sample.
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
}
