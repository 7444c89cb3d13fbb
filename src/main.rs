//! tsgen CLI entrypoint
//! Renders a template with the helpers bound, for trying templates out.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;
use tsgen_helpers::{HelperConfig, HelperRegistry, HttpClient, TemplateEngine};

#[derive(Parser)]
#[command(name = "tsgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Render one template to stdout
    Render {
        /// Template file to render
        #[arg(long)]
        template: PathBuf,
        /// JSON file holding the render context
        #[arg(long)]
        context: PathBuf,
        /// Directory of partials, each registered under its file stem
        #[arg(long)]
        partials: Option<PathBuf>,
        /// Template used to render composite members
        #[arg(long, default_value = "type")]
        type_template: String,
        /// Helper configuration file (YAML, JSON or TOML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Request transport flavor; overrides the config file
        #[arg(long)]
        http_client: Option<HttpClient>,
        /// Thread `useOptions` through to the templates
        #[arg(long)]
        use_options: bool,
        /// Inline enums as literal unions
        #[arg(long)]
        use_union_types: bool,
    },
    /// List the helpers templates can use
    Helpers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with default level INFO
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Render {
            template,
            context,
            partials,
            type_template,
            config,
            http_client,
            use_options,
            use_union_types,
        } => {
            let config = load_config(config, http_client, use_options, use_union_types).await?;
            let output = render(RenderParams {
                template,
                context,
                partials,
                type_template,
                config,
            })
            .await?;
            print!("{output}");
        }
        Commands::Helpers => {
            for name in HelperRegistry::names() {
                println!("{name}");
            }
        }
    }
    Ok(())
}

async fn load_config(
    path: Option<PathBuf>,
    http_client: Option<HttpClient>,
    use_options: bool,
    use_union_types: bool,
) -> anyhow::Result<HelperConfig> {
    let mut config = match path {
        Some(path) => HelperConfig::from_file(&path)
            .await
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => HelperConfig::default(),
    };
    if let Some(http_client) = http_client {
        config.http_client = http_client;
    }
    // flags only switch options on; a config file may already have them set
    config.use_options |= use_options;
    config.use_union_types |= use_union_types;
    Ok(config)
}

struct RenderParams {
    template: PathBuf,
    context: PathBuf,
    partials: Option<PathBuf>,
    type_template: String,
    config: HelperConfig,
}

async fn render(params: RenderParams) -> anyhow::Result<String> {
    let context_json = tokio::fs::read_to_string(&params.context)
        .await
        .with_context(|| format!("Failed to read context {}", params.context.display()))?;
    let context: serde_json::Value =
        serde_json::from_str(&context_json).context("Render context is not valid JSON")?;

    info!(
        template = %params.template.display(),
        http_client = %params.config.http_client,
        use_union_types = params.config.use_union_types,
        "Rendering template"
    );

    let mut builder = TemplateEngine::builder(params.config).type_template(params.type_template);
    if let Some(partials) = &params.partials {
        builder = builder
            .add_partials_dir(partials)
            .with_context(|| format!("Failed to load partials from {}", partials.display()))?;
    }
    let engine = builder
        .add_template_file(&params.template, Some("main"))
        .with_context(|| format!("Failed to load template {}", params.template.display()))?
        .build()?;

    engine
        .render_value("main", &context)
        .context("Failed to render template")
}
