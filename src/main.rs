use clap::{Parser, Subcommand};
use futures::future::join_all;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use crate::actions::transcription::{refresh_transcription_status, watch_transcription};
use crate::actions::upvote::toggle_upvote_by_id;
use crate::config::Config;
use crate::core::cookies::{StaticCookies, get_cookie};
use crate::core::site_client::init_site_client;
use crate::core::types::{ProjectId, TranscriptionJobRef};
use crate::page::Page;

pub mod actions;
#[cfg(test)]
pub mod booter;
pub mod config;
pub mod core;
pub mod error;
pub mod page;
pub mod utils;

#[derive(Parser, Debug)]
#[command(author, version, about = "Run project page actions against a site")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the decoded value of a cookie from SITE_COOKIES
    Cookie { name: String },
    /// Toggle the upvote on one or more projects
    Upvote {
        #[arg(required = true)]
        project_ids: Vec<String>,
    },
    /// Check a transcription job once, or keep checking with --watch
    Transcription {
        job_name: String,
        file_id: String,
        /// Seconds between checks while the job is still transcribing
        #[arg(long)]
        watch: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load();

    match cli.command {
        Command::Cookie { name } => {
            let cookies = StaticCookies::new(config.cookies.clone());
            match get_cookie(&cookies, &name) {
                Some(value) => println!("{}", value),
                None => anyhow::bail!("no cookie named {}", name),
            }
        }
        Command::Upvote { project_ids } => {
            let client = init_site_client(&config)?;
            let page = Page::new();

            let ids: Vec<ProjectId> = project_ids.into_iter().map(ProjectId::from).collect();
            let mut projects = Vec::new();
            for id in &ids {
                projects.push(page.register_project(id.clone(), 0, false).await);
            }

            let results = join_all(ids.iter().map(|id| toggle_upvote_by_id(&client, &page, id))).await;

            for project in &projects {
                let widget = project.widget().await;
                println!(
                    "{} = {} ({})",
                    widget.count_element_id,
                    widget.count_text,
                    if widget.icon.is_filled() { "upvoted" } else { "not upvoted" }
                );
            }
            for alert in page.alerts().await {
                eprintln!("{}", alert);
            }

            let failed = results.iter().filter(|result| result.is_err()).count();
            if failed > 0 {
                anyhow::bail!("{} of {} upvotes failed", failed, results.len());
            }
        }
        Command::Transcription {
            job_name,
            file_id,
            watch,
        } => {
            let client = init_site_client(&config)?;
            let page = Page::new();
            let job = TranscriptionJobRef::new(job_name, file_id);

            match watch {
                Some(secs) => {
                    watch_transcription(&client, &page, &job, Duration::from_secs(secs)).await?
                }
                None => refresh_transcription_status(&client, &page, &job).await?,
            };

            println!(
                "#{}: {}",
                page.transcription_element_id(),
                page.transcription_html().await
            );
        }
    }

    Ok(())
}
