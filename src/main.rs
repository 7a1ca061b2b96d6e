//! makepub - build EPUB files from a JSON project description

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use makepub::{AssetRef, Document, EpubConfig, Metadata, Section};

#[derive(Parser)]
#[command(name = "makepub")]
#[command(version, about = "Build EPUB ebooks from HTML sections", long_about = None)]
#[command(after_help = "EXAMPLES:
    makepub book.json                 Write ./book.epub
    makepub book.json -o out -n final Write out/final.epub
    makepub book.json --loose         Also write the unpacked tree to ./book/
    makepub -i book.json              Show metadata and the generated file list")]
struct Cli {
    /// Project file (JSON)
    #[arg(value_name = "PROJECT")]
    project: PathBuf,

    /// Output folder
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// EPUB filename without extension (defaults to the project file name)
    #[arg(short, long)]
    name: Option<String>,

    /// Also write the unpacked files into <OUTPUT>/<NAME>/
    #[arg(long)]
    loose: bool,

    /// Show metadata and the file list without writing anything
    #[arg(short, long)]
    info: bool,

    /// Treat a missing genre as an error
    #[arg(long)]
    require_genre: bool,

    /// Deflate level for compressed entries (0-9)
    #[arg(long, value_name = "LEVEL")]
    compression_level: Option<i64>,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Deserialize)]
struct Project {
    metadata: ProjectMetadata,
    /// Stylesheet file
    #[serde(default)]
    css: Option<PathBuf>,
    #[serde(default)]
    sections: Vec<ProjectSection>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ProjectMetadata {
    id: String,
    title: String,
    author: String,
    file_as: Option<String>,
    language: Option<String>,
    publisher: Option<String>,
    series: Option<String>,
    sequence: Option<Sequence>,
    genre: Option<String>,
    tags: Option<String>,
    description: Option<String>,
    copyright: Option<String>,
    published: Option<String>,
    source: Option<String>,
    contents: Option<String>,
    show_contents: Option<bool>,
    cover: Option<PathBuf>,
    images: Vec<PathBuf>,
}

/// Series position, written either as a number or a string.
#[derive(Deserialize)]
#[serde(untagged)]
enum Sequence {
    Number(u64),
    Text(String),
}

#[derive(Deserialize)]
struct ProjectSection {
    title: String,
    /// HTML file with the section body
    file: Option<PathBuf>,
    /// Inline section body, used when `file` is absent
    content: Option<String>,
    #[serde(default)]
    exclude_from_contents: bool,
    #[serde(default)]
    front_matter: bool,
    filename: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(&cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(quiet: bool) {
    let default = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: &Cli) -> Result<(), String> {
    let doc = load_project(cli)?;

    if cli.info {
        return show_info(&doc).await;
    }

    let name = match &cli.name {
        Some(name) => name.clone(),
        None => cli
            .project
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "book".to_string()),
    };

    if cli.loose {
        doc.write_files(cli.output.join(&name))
            .await
            .map_err(|e| e.to_string())?;
    }

    let path = doc
        .write_epub(&cli.output, &name)
        .await
        .map_err(|e| e.to_string())?;
    if !cli.quiet {
        println!("{}", path.display());
    }
    Ok(())
}

fn load_project(cli: &Cli) -> Result<Document, String> {
    let text = std::fs::read_to_string(&cli.project)
        .map_err(|e| format!("{}: {e}", cli.project.display()))?;
    let project: Project =
        serde_json::from_str(&text).map_err(|e| format!("{}: {e}", cli.project.display()))?;
    let base = cli.project.parent().unwrap_or(Path::new(""));

    let mut config = EpubConfig::new().with_require_genre(cli.require_genre);
    if let Some(level) = cli.compression_level {
        config = config.with_compression_level(level);
    }

    let metadata = into_metadata(project.metadata, base);
    let mut doc = Document::with_config(metadata, config).map_err(|e| e.to_string())?;

    if let Some(css) = project.css {
        let css = std::fs::read_to_string(base.join(&css))
            .map_err(|e| format!("{}: {e}", css.display()))?;
        doc.add_css(css);
    }

    for entry in project.sections {
        let content = match (&entry.file, entry.content) {
            (Some(file), _) => std::fs::read_to_string(base.join(file))
                .map_err(|e| format!("{}: {e}", file.display()))?,
            (None, Some(content)) => content,
            (None, None) => String::new(),
        };
        let mut section = Section::new(entry.title, content)
            .with_exclude_from_contents(entry.exclude_from_contents)
            .with_front_matter(entry.front_matter);
        if let Some(filename) = entry.filename {
            section = section.with_filename(filename);
        }
        doc.add_section(section).map_err(|e| e.to_string())?;
    }

    Ok(doc)
}

fn into_metadata(p: ProjectMetadata, base: &Path) -> Metadata {
    Metadata {
        id: p.id,
        title: p.title,
        author: p.author,
        file_as: p.file_as,
        language: p.language,
        publisher: p.publisher,
        series: p.series,
        sequence: p.sequence.map(|s| match s {
            Sequence::Number(n) => n.to_string(),
            Sequence::Text(t) => t,
        }),
        genre: p.genre,
        tags: p.tags,
        description: p.description,
        copyright: p.copyright,
        published: p.published,
        source: p.source,
        contents: p.contents,
        show_contents: p.show_contents.unwrap_or(true),
        cover: p.cover.map(|c| AssetRef::Path(base.join(c))),
        images: p
            .images
            .into_iter()
            .map(|i| AssetRef::Path(base.join(i)))
            .collect(),
    }
}

async fn show_info(doc: &Document) -> Result<(), String> {
    let meta = doc.metadata();
    println!("Title: {}", meta.display_title());
    println!("Author: {}", meta.author);
    println!("Identifier: {}", meta.id);
    if let Some(ref language) = meta.language {
        println!("Language: {language}");
    }
    if let Some(genre) = meta.genre() {
        println!("Genre: {genre}");
    }
    println!("Sections: {}", doc.section_count());

    let files = doc.files().await.map_err(|e| e.to_string())?;
    println!("Files:");
    for file in &files {
        let mode = if file.compress { "deflate" } else { "stored" };
        println!("  {:<40} {:>8} bytes  {mode}", file.path(), file.content.len());
    }
    Ok(())
}
