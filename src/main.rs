use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::Path;

mod build;
mod config;

#[derive(Parser)]
#[command(
    name = "mdsite",
    version,
    about = "Static site generator for a constrained Markdown dialect"
)]
struct Cli {
    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum RenderFormat {
    Html,
    Page,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the site: copy static files and generate HTML pages
    Build {
        /// Project root containing mdsite.json (default: current directory)
        path: Option<String>,

        /// Rebuild whenever content, static files or the template change
        #[arg(long)]
        watch: bool,

        /// Override the configured content directory
        #[arg(long, value_name = "DIR")]
        content_dir: Option<String>,

        /// Override the configured static directory
        #[arg(long, value_name = "DIR")]
        static_dir: Option<String>,

        /// Override the configured template path
        #[arg(long, value_name = "FILE")]
        template: Option<String>,

        /// Override the configured output directory
        #[arg(long, value_name = "DIR")]
        out: Option<String>,
    },

    /// Render a single markdown file to stdout
    Render {
        /// Path to the .md file
        file: String,

        /// Output format
        #[arg(long, value_enum, default_value = "html")]
        format: RenderFormat,
    },

    /// Check markdown file(s) for conversion errors
    Check {
        /// Paths to the .md file(s)
        files: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            path,
            watch,
            content_dir,
            static_dir,
            template,
            out,
        } => {
            let root = Path::new(path.as_deref().unwrap_or("."));
            let mut config = config::load_config(root)?;
            // Flags take precedence over mdsite.json.
            if let Some(dir) = content_dir {
                config.content_dir = dir;
            }
            if let Some(dir) = static_dir {
                config.static_dir = dir;
            }
            if let Some(file) = template {
                config.template_path = file;
            }
            if let Some(dir) = out {
                config.out_dir = dir;
            }
            let report = build::run_build(root, &config, cli.quiet)?;
            if !cli.quiet {
                report.print_summary(&config.out_dir);
            }
            if watch {
                build::watch_and_rebuild(root, &config, cli.quiet)?;
            }
        }
        Commands::Render { file, format } => {
            handle_render(&file, format)?;
        }
        Commands::Check { files } => {
            handle_check(&files)?;
        }
    }

    Ok(())
}

fn handle_render(file: &str, format: RenderFormat) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .map_err(|e| anyhow::anyhow!("Failed to read '{}': {}", file, e))?;

    let output = match format {
        RenderFormat::Html => mdsite_convert::convert(&content)?.to_html(),
        RenderFormat::Page => {
            // Use the configured template so the output matches a build.
            let root = Path::new(".");
            let config = config::load_config(root)?;
            let template_path = root.join(&config.template_path);
            let template = std::fs::read_to_string(&template_path).map_err(|e| {
                anyhow::anyhow!("Failed to read template '{}': {}", template_path.display(), e)
            })?;
            match config.title {
                Some(title) => {
                    mdsite_convert::render_page_with_title(&content, &template, &title)?
                }
                None => mdsite_convert::render_page(&content, &template)?,
            }
        }
        RenderFormat::Json => serde_json::to_string_pretty(&mdsite_convert::convert(&content)?)?,
    };

    println!("{output}");
    Ok(())
}

fn handle_check(files: &[String]) -> Result<()> {
    let mut has_errors = false;

    for file in files {
        let content = std::fs::read_to_string(file)
            .map_err(|e| anyhow::anyhow!("Failed to read '{}': {}", file, e))?;

        match mdsite_convert::convert(&content) {
            Ok(_) => {
                println!("{}: {}", file, "OK".green());
            }
            Err(e) => {
                has_errors = true;
                println!("{}: {}: {}", file, "error".red().bold(), e);
            }
        }
    }

    if has_errors {
        std::process::exit(1);
    }

    Ok(())
}
