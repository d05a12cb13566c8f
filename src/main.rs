use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::Shell;
use colored::Colorize;
use learnjs::{
    Catalog, ContentProvider, ContentResolver, GuideRegistry, SubtopicId, document_to_text,
    format_search_result,
    interactive::{InteractiveApp, domain::models::Theme},
    logging::{LogTarget, init_tracing},
    search,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// How long `--show` waits for a guide to load
const SHOW_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Parser)]
#[command(
    name = "learnjs",
    version,
    about = "Browse a catalog of JavaScript topics and guides in the terminal",
    long_about = None
)]
struct Cli {
    /// Print topics and subtopics whose titles contain QUERY, then exit
    #[arg(short, long, conflicts_with_all = ["list", "show"])]
    query: Option<String>,

    /// Print the whole topic tree, then exit
    #[arg(long, conflicts_with = "show")]
    list: bool,

    /// Print the page for a subtopic (e.g. 1.10), then exit
    #[arg(long, value_name = "SUBTOPIC_ID")]
    show: Option<String>,

    /// Output format for --query, --list and --show
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Start the interactive reader with the light theme
    #[arg(long, env = "LEARNJS_LIGHT")]
    light: bool,

    /// Append log output to this file
    #[arg(long, env = "LEARNJS_LOG_FILE", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completion: Option<Shell>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    fn is_interactive(&self) -> bool {
        self.query.is_none() && !self.list && self.show.is_none()
    }

    fn log_target(&self) -> LogTarget<'_> {
        match (&self.log_file, self.is_interactive()) {
            (Some(path), _) => LogTarget::File(path),
            // The TUI owns the terminal
            (None, true) => LogTarget::Disabled,
            (None, false) => LogTarget::Stderr,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completion {
        clap_complete::generate(shell, &mut Cli::command(), "learnjs", &mut io::stdout());
        return Ok(());
    }

    init_tracing(cli.log_target(), cli.format == OutputFormat::Json)
        .context("Failed to initialize logging")?;

    if cli.no_color {
        colored::control::set_override(false);
    }

    let catalog = Arc::new(Catalog::builtin().context("Built-in topic catalog is invalid")?);
    let registry = Arc::new(GuideRegistry::builtin());

    if let Some(query) = &cli.query {
        return print_search(&catalog, query, &cli);
    }
    if cli.list {
        return print_catalog(&catalog, &cli);
    }
    if let Some(id) = &cli.show {
        return print_page(&catalog, registry, id, &cli);
    }

    let theme = if cli.light { Theme::Light } else { Theme::Dark };
    let resolver = ContentResolver::new(registry);
    let mut app = InteractiveApp::new(catalog, resolver, theme);
    app.run()
}

fn print_search(catalog: &Catalog, query: &str, cli: &Cli) -> Result<()> {
    let results = search(query, catalog);
    tracing::debug!(query, count = results.len(), "Search finished");

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match cli.format {
        OutputFormat::Text => {
            if results.is_empty() {
                writeln!(handle, "No results found.")?;
            } else {
                for result in &results {
                    writeln!(handle, "{}", format_search_result(result, !cli.no_color))?;
                }
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "query": query,
                "results": results,
            });
            serde_json::to_writer_pretty(&mut handle, &output)?;
            writeln!(handle)?;
        }
    }
    Ok(())
}

fn print_catalog(catalog: &Catalog, cli: &Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match cli.format {
        OutputFormat::Text => {
            for topic in catalog.all_topics() {
                let heading = format!("{}. {}", topic.id, topic.title);
                if cli.no_color {
                    writeln!(handle, "{heading}")?;
                } else {
                    writeln!(handle, "{}", heading.bright_yellow().bold())?;
                }
                for subtopic in &topic.subtopics {
                    writeln!(handle, "  {} {}", subtopic.id, subtopic.title)?;
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut handle, catalog.all_topics())?;
            writeln!(handle)?;
        }
    }
    Ok(())
}

fn print_page(
    catalog: &Catalog,
    registry: Arc<GuideRegistry>,
    id: &str,
    cli: &Cli,
) -> Result<()> {
    let id = SubtopicId::new(id);
    let subtopic = catalog
        .find_subtopic(&id)
        .ok_or_else(|| anyhow!("Unknown subtopic id: {id}"))?;

    let mut resolver = ContentResolver::new(registry);
    let provider = resolver.resolve_blocking(&id, &subtopic.title, SHOW_TIMEOUT)?;
    let document = provider.render();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match cli.format {
        OutputFormat::Text => {
            write!(handle, "{}", document_to_text(&document))?;
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "id": id,
                "title": subtopic.title,
                "placeholder": provider.is_placeholder(),
                "page": document_to_text(&document),
            });
            serde_json::to_writer_pretty(&mut handle, &output)?;
            writeln!(handle)?;
        }
    }
    Ok(())
}
