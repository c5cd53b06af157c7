// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};

use crate::{
    config::{
        ExportOptions, FetchConfig, Window,
        consts::{DATA_DIR, DEFAULT_ALPHA0, DEFAULT_THRESHOLD, DEFAULT_TOP_K, ENV_TIMEOUT_SECS, ENV_URL_60, ENV_URL_90},
    },
    core::HttpFetcher,
    display,
    export::export_analysis,
    model::CrawlResult,
    scrape::crawl_with,
    stats::analyze,
    upload,
};

#[derive(Parser, Debug)]
#[command(name = "xsmb", version, about = "Crawl XSMB results and rank loto tails with Dirichlet smoothing")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the results page and print what was extracted
    Crawl(CrawlArgs),

    /// Crawl, then count, smooth, test and rank the 100 tails
    Analyze(AnalyzeArgs),

    /// Analyze a CSV with `cap` and `count` columns
    Upload {
        file: PathBuf,

        /// Dirichlet prior strength for the uploaded counts
        #[arg(long, default_value_t = DEFAULT_ALPHA0, value_parser = parse_alpha0)]
        alpha0: f64,
    },
}

#[derive(Args, Debug, Clone)]
struct CrawlArgs {
    /// Results page to read: 60 or 90
    #[arg(short, long, default_value = "60")]
    window: Window,

    /// Stop after this many admitted days. Defaults to the window size, so the
    /// 90-day page yields up to 90 days rather than the library's 60
    #[arg(long)]
    max_days: Option<usize>,

    #[arg(long, env = ENV_URL_60, hide_env_values = true)]
    url_60: Option<String>,

    #[arg(long, env = ENV_URL_90, hide_env_values = true)]
    url_90: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = ENV_TIMEOUT_SECS)]
    timeout_secs: Option<u64>,
}

impl CrawlArgs {
    fn fetch_config(&self) -> FetchConfig {
        let mut cfg = FetchConfig::default();
        if let Some(u) = &self.url_60 {
            cfg.url_60 = u.clone();
        }
        if let Some(u) = &self.url_90 {
            cfg.url_90 = u.clone();
        }
        if let Some(t) = self.timeout_secs {
            cfg.timeout = Duration::from_secs(t);
        }
        cfg
    }

    fn max_days(&self) -> usize {
        self.max_days.unwrap_or_else(|| self.window.days())
    }

    fn run(&self) -> Result<CrawlResult> {
        let cfg = self.fetch_config();
        let fetcher = HttpFetcher::new(&cfg)?;
        crawl_with(&fetcher, &cfg, self.window, self.max_days(), None)
            .wrap_err_with(|| format!("crawl of the {}-day page failed", self.window))
    }
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    #[command(flatten)]
    crawl: CrawlArgs,

    /// Dirichlet prior strength (total pseudo-counts)
    #[arg(long, default_value_t = DEFAULT_ALPHA0, value_parser = parse_alpha0)]
    alpha0: f64,

    /// Minimum posterior for a suggestion
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f64,

    /// Maximum number of suggestions
    #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
    top_k: usize,

    /// Print all 100 ranked tails
    #[arg(long)]
    full: bool,

    /// Print the 1/7/30/90-day evaluation
    #[arg(long)]
    evaluate: bool,

    /// Where the CSV exports go
    #[arg(short, long, default_value = DATA_DIR)]
    out_dir: PathBuf,

    /// Skip writing CSV files
    #[arg(long)]
    no_export: bool,
}

fn parse_alpha0(s: &str) -> std::result::Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("{s:?} is not a number"))?;
    if v > 0.0 && v.is_finite() {
        Ok(v)
    } else {
        Err(s!("alpha0 must be greater than 0"))
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Crawl(args) => {
            let days = args.run()?;
            display::crawl_summary(&days);
        }
        Command::Analyze(args) => {
            let days = args.crawl.run()?;
            let analysis = analyze(&days, args.alpha0);

            display::fit_summary(Some(analysis.days), analysis.total, &analysis.fit);
            println!("\nTop suggestions (posterior ≥ {:.3}):", args.threshold);
            display::buckets(&analysis.suggestions(args.threshold, args.top_k));
            if args.full {
                println!("\nFull table:");
                display::buckets(analysis.ranked.rows());
            }
            if args.evaluate {
                println!("\nEvaluation:");
                display::evaluation(&analysis.evaluated);
            }
            if !args.no_export {
                let paths = export_analysis(&analysis, &ExportOptions::new(&args.out_dir))
                    .wrap_err("export failed")?;
                for p in paths {
                    println!("Saved {}", p.display());
                }
            }
        }
        Command::Upload { file, alpha0 } => {
            let table = upload::load_counts(&file).wrap_err_with(|| format!("cannot use {}", file.display()))?;
            let u = upload::analyze_upload(table, alpha0);
            display::fit_summary(None, u.total, &u.fit);
            display::buckets(u.ranked.rows());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn analyze_flags() {
        let cli = Cli::try_parse_from(["xsmb", "analyze", "-w", "90", "--alpha0", "50", "-k", "5", "--no-export"]).unwrap();
        let Command::Analyze(a) = cli.command else { panic!("expected analyze") };
        assert_eq!(a.crawl.window, Window::Days90);
        assert_eq!(a.crawl.max_days(), 90);
        assert_eq!((a.alpha0, a.top_k, a.no_export), (50.0, 5, true));
    }

    #[test]
    fn max_days_help_explains_window_default() {
        let cmd = Cli::command();
        let help = cmd
            .find_subcommand("crawl")
            .and_then(|c| c.get_arguments().find(|a| a.get_id() == "max_days"))
            .and_then(|a| a.get_long_help().or(a.get_help()))
            .map(|h| h.to_string())
            .unwrap_or_default();
        assert!(help.contains("library's 60"), "{help}");

        let cli = Cli::try_parse_from(["xsmb", "crawl", "-w", "90", "--max-days", "60"]).unwrap();
        let Command::Crawl(c) = cli.command else { panic!("expected crawl") };
        assert_eq!(c.max_days(), 60);
    }

    #[test]
    fn alpha0_must_be_positive() {
        assert!(Cli::try_parse_from(["xsmb", "upload", "x.csv", "--alpha0", "0"]).is_err());
        assert!(Cli::try_parse_from(["xsmb", "crawl", "-w", "30"]).is_err());
    }
}
