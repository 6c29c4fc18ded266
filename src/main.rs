use std::fs;
use std::io::Read as _;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use clap::{Parser, Subcommand};
use tracing::warn;

use dirforge::codec;
use dirforge::config::AppConfig;
use dirforge::materialize;
use dirforge::templates::{transfer, TemplateStore};

#[derive(Parser)]
#[command(
    name = "dirforge",
    about = "Define folder-structure templates and materialize them on disk",
    version
)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Destination directory pre-fill for `craft` (supports "open here"
    /// style invocation with a single directory argument)
    dest: Option<PathBuf>,

    /// Data directory for the template store
    #[arg(long, env = "DIRFORGE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "DIRFORGE_LOG")]
    log: Option<String>,

    /// Suppress informational logging.
    ///
    /// Errors are still printed to stderr; command output on stdout is
    /// unaffected.
    #[arg(long, short = 'q', global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List stored templates (default when no subcommand given).
    ///
    /// Examples:
    ///   dirforge list
    ///   dirforge
    List,
    /// Print a template as a tree preview or as editable indented text.
    ///
    /// The indented form is what `save` reads back: redirect it to a file,
    /// edit, and re-save under the same name.
    ///
    /// Examples:
    ///   dirforge show "Web Project"
    ///   dirforge show "Web Project" --indented > web.txt
    Show {
        /// Template name
        name: String,
        /// Print the round-trip-editable indented form instead of the tree
        #[arg(long)]
        indented: bool,
    },
    /// Preview indented text from a file (or stdin) as a tree.
    ///
    /// Examples:
    ///   dirforge preview structure.txt
    ///   cat structure.txt | dirforge preview
    Preview {
        /// Indented text file (default: stdin)
        file: Option<PathBuf>,
    },
    /// Create a template's folders under a destination directory.
    ///
    /// Entries that escape the destination ("../" chains or absolute paths)
    /// are skipped and logged. Existing directories are left untouched, so
    /// re-running is safe.
    ///
    /// Examples:
    ///   dirforge craft --template "Web Project" ~/code/site
    ///   dirforge ~/code/site craft --template "Web Project"
    Craft {
        /// Template to materialize
        #[arg(long, short)]
        template: String,
        /// Destination directory (default: the top-level positional, then
        /// the current directory)
        dest: Option<PathBuf>,
    },
    /// Parse an indented text file into a template and persist it.
    ///
    /// Use four spaces per nesting level. An existing template of the same
    /// name is overwritten.
    ///
    /// Examples:
    ///   dirforge save "My Layout" structure.txt
    ///   cat structure.txt | dirforge save "My Layout"
    Save {
        /// Template name
        name: String,
        /// Indented text file (default: stdin)
        file: Option<PathBuf>,
    },
    /// Delete a stored template.
    ///
    /// Examples:
    ///   dirforge delete "My Layout"
    Delete {
        /// Template name
        name: String,
    },
    /// Import a template from a transfer file.
    ///
    /// The file must be a JSON object with `template_name` and `structure`
    /// keys. A name collision is resolved by suffixing "(Imported)".
    ///
    /// Examples:
    ///   dirforge import web-project.json
    Import {
        /// Transfer file to read
        file: PathBuf,
    },
    /// Export a template to a transfer file.
    ///
    /// Examples:
    ///   dirforge export "Web Project" web-project.json
    Export {
        /// Template name
        name: String,
        /// Destination file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::new(args.data_dir.clone(), args.log.clone());
    init_tracing(&config.log, args.quiet);

    let store_path = config.store_path();
    let mut store = TemplateStore::load(&store_path);

    match args.command {
        None => {
            if let Some(dest) = args.dest.as_deref() {
                if dest.is_dir() {
                    println!("Destination: {}\n", dest.display());
                } else {
                    warn!(path = %dest.display(), "destination is not a directory — ignoring");
                }
            }
            cmd_list(&store);
            Ok(())
        }
        Some(Command::List) => {
            cmd_list(&store);
            Ok(())
        }
        Some(Command::Show { name, indented }) => cmd_show(&store, &name, indented),
        Some(Command::Preview { file }) => cmd_preview(file.as_deref()),
        Some(Command::Craft { template, dest }) => {
            cmd_craft(&store, &template, dest.or(args.dest).as_deref())
        }
        Some(Command::Save { name, file }) => {
            cmd_save(&mut store, &store_path, &name, file.as_deref())
        }
        Some(Command::Delete { name }) => cmd_delete(&mut store, &store_path, &name),
        Some(Command::Import { file }) => cmd_import(&mut store, &store_path, &file),
        Some(Command::Export { name, file }) => cmd_export(&store, &name, &file),
    }
}

fn init_tracing(filter: &str, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if quiet { "error" } else { filter };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn cmd_list(store: &TemplateStore) {
    for (name, paths) in store.iter() {
        println!("{name}  ({} folders)", paths.len());
    }
}

fn cmd_show(store: &TemplateStore, name: &str, indented: bool) -> Result<()> {
    let Some(paths) = store.get(name) else {
        bail!("no template named `{name}` — run `dirforge list`");
    };
    if indented {
        println!("{}", codec::format_paths_to_indented(paths));
    } else {
        println!("{}", codec::format_paths_to_tree(paths));
    }
    Ok(())
}

fn cmd_preview(file: Option<&Path>) -> Result<()> {
    let text = read_text(file)?;
    let paths = codec::parse_indented_lines(&text);
    println!("{}", codec::format_paths_to_tree(&paths));
    Ok(())
}

fn cmd_craft(store: &TemplateStore, template: &str, dest: Option<&Path>) -> Result<()> {
    let Some(paths) = store.get(template) else {
        bail!("no template named `{template}` — run `dirforge list`");
    };
    let dest = match dest {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().context("cannot resolve current directory")?,
    };

    let report = materialize::craft_folders(&dest, paths)?;
    println!("Created {} folders under {}", report.processed, dest.display());
    if !report.skipped.is_empty() {
        println!(
            "Skipped {} unsafe entries: {}",
            report.skipped.len(),
            report.skipped.join(", ")
        );
    }
    Ok(())
}

fn cmd_save(
    store: &mut TemplateStore,
    store_path: &Path,
    name: &str,
    file: Option<&Path>,
) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        bail!("template name must not be empty");
    }
    let text = read_text(file)?;
    let paths = codec::parse_indented_lines(&text);
    if paths.is_empty() {
        bail!("structure is empty — define at least one folder");
    }

    store.insert(name, paths);
    store.save(store_path)?;
    println!("Saved template `{name}`");
    Ok(())
}

fn cmd_delete(store: &mut TemplateStore, store_path: &Path, name: &str) -> Result<()> {
    if !store.remove(name) {
        bail!("no template named `{name}`");
    }
    store.save(store_path)?;
    println!("Deleted template `{name}`");
    Ok(())
}

fn cmd_import(store: &mut TemplateStore, store_path: &Path, file: &Path) -> Result<()> {
    let incoming = transfer::import_template(file)?;
    let name = store.unique_import_name(&incoming.template_name);
    store.insert(name.clone(), incoming.structure);
    store.save(store_path)?;
    println!("Imported template `{name}`");
    Ok(())
}

fn cmd_export(store: &TemplateStore, name: &str, file: &Path) -> Result<()> {
    let Some(paths) = store.get(name) else {
        bail!("no template named `{name}` — run `dirforge list`");
    };
    transfer::export_template(file, name, paths)?;
    println!("Exported template `{name}` to {}", file.display());
    Ok(())
}

fn read_text(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}
