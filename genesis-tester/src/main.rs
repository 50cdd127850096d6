mod api;
mod browser;
mod reports;
mod runner;
mod scenario;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use api::HttpQuestApi;
use browser::{BrowserConfig, BrowserKind, FailureCapture, failure_dir, new_session};
use runner::{ApiTester, ScenarioResult};
use scenario::{BrowserScenario, ScenarioCtx, get_scenario, list_scenarios};

const ALL_SCENARIOS: [&str; 3] = ["smoke", "advance", "contract"];

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TestMode {
    /// Drive the backend directly (fast, no browser)
    Api,
    /// Browser automation against the served console
    Browser,
    /// Run both API and browser tests
    Both,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HeadlessMode {
    /// Run browsers in headless mode
    Headless,
    /// Run browsers with visible windows
    Windowed,
}

impl HeadlessMode {
    const fn is_headless(self) -> bool {
        matches!(self, Self::Headless)
    }
}

#[derive(Debug, Parser)]
#[command(name = "genesis-tester", version)]
#[command(about = "Automated QA for the Genesis Economy Regulator - backend and browser")]
struct Args {
    /// Test mode: api (fast), browser (visual), or both
    #[arg(long, value_enum, default_value_t = TestMode::Api)]
    mode: TestMode,

    /// Scenarios to run (comma-separated, or `all`)
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Number of iterations per scenario (api mode only)
    #[arg(long, default_value_t = 1)]
    iterations: usize,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Base URL of the regulator backend
    #[arg(long, default_value = genesis_core::DEFAULT_API_BASE)]
    api_url: String,

    /// Seconds to wait for any single request or page transition
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    // Browser-specific options
    /// Browsers to run (chrome,edge,firefox,safari) - browser mode only
    #[arg(long, default_value = "chrome")]
    browsers: String,

    /// URL the console is served from
    #[arg(long, default_value = "http://127.0.0.1:8080/")]
    base_url: String,

    /// Artifacts directory for screenshots and DOM dumps
    #[arg(long, default_value = "target/test-artifacts")]
    artifacts_dir: String,

    /// Connect to a Selenium Grid/Appium hub instead of local drivers
    #[arg(long)]
    hub: Option<String>,

    /// Run headless where supported
    #[arg(long, value_enum, default_value_t = HeadlessMode::Headless)]
    headless: HeadlessMode,

    /// Fail the advance scenario unless the trigger is seen disabled mid-step
    #[arg(long)]
    require_busy: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let scenarios = expand_scenarios(&args.scenarios);

    let mut all_results = run_api_scenarios(&args, &scenarios).await;
    all_results.extend(run_browser_scenarios(&args, &scenarios).await);

    write_reports(&args, &all_results, start_time)?;

    if all_results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:12} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🛡  Genesis Regulator Tester".bright_cyan().bold());
    println!("{}", "============================".cyan());
}

fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s == "all") {
        scenarios.retain(|s| s != "all");
        scenarios.extend(ALL_SCENARIOS.iter().map(ToString::to_string));
    }
    let mut seen = Vec::with_capacity(scenarios.len());
    scenarios.retain(|s| {
        let fresh = !seen.contains(s);
        if fresh {
            seen.push(s.clone());
        }
        fresh
    });
    scenarios
}

const fn request_timeout(args: &Args) -> Duration {
    Duration::from_secs(args.timeout_secs)
}

fn build_browser_config(args: &Args) -> BrowserConfig {
    BrowserConfig {
        headless: args.headless.is_headless(),
        element_wait: Duration::from_secs(3),
        remote_hub: args.hub.clone(),
    }
}

async fn run_api_scenarios(args: &Args, scenarios: &[String]) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    if !matches!(args.mode, TestMode::Api | TestMode::Both) {
        return results;
    }

    println!("{}", "🧠 Running API Tests".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());
    log::info!("backend: {}", args.api_url);

    let api = HttpQuestApi::new(&args.api_url).with_timeout(request_timeout(args));
    let tester = ApiTester::new(api, args.verbose);

    for scenario_name in scenarios {
        let Some(scenario) = get_scenario(scenario_name) else {
            eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow());
            continue;
        };
        let result = tester.run_scenario(&*scenario, args.iterations).await;
        let mark = if result.passed { "✅" } else { "❌" };
        println!(
            "{mark} [api] {} - {:?}",
            scenario_name, result.average_duration
        );
        results.push(result);
    }

    results
}

async fn run_browser_scenarios(args: &Args, scenarios: &[String]) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    if !matches!(args.mode, TestMode::Browser | TestMode::Both) {
        return results;
    }

    println!("{}", "🌐 Running Browser Tests".bright_blue().bold());
    println!("{}", "-".repeat(30).blue());

    let cfg = build_browser_config(args);
    for browser_name in split_csv(&args.browsers) {
        let Some(kind) = BrowserKind::parse(&browser_name) else {
            eprintln!("⚠️  Unknown browser: {}", browser_name.yellow());
            continue;
        };

        let driver = match new_session(kind, &cfg).await {
            Ok(d) => d,
            Err(e) => {
                eprintln!("❌ Could not start {kind:?}: {e}");
                continue;
            }
        };

        results.extend(run_browser_scenarios_for_driver(args, scenarios, kind, &driver).await);
        let _ = driver.quit().await;
    }

    results
}

async fn run_browser_scenarios_for_driver(
    args: &Args,
    scenarios: &[String],
    kind: BrowserKind,
    driver: &thirtyfour::WebDriver,
) -> Vec<ScenarioResult> {
    let label = kind.label();
    let ctx = ScenarioCtx {
        base_url: args.base_url.clone(),
        timeout: request_timeout(args),
        verbose: args.verbose,
        require_busy: args.require_busy,
    };
    let mut results = Vec::new();

    for scenario_name in scenarios {
        let Some(scenario) = get_scenario(scenario_name) else {
            eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow());
            continue;
        };

        let scenario_start = Instant::now();
        let outcome = scenario.run_browser(driver, &ctx).await;
        let duration = scenario_start.elapsed();
        match &outcome {
            Ok(()) => println!("✅ [{}] {} - {:?}", label.green(), scenario_name, duration),
            Err(e) => {
                eprintln!(
                    "❌ [{}] {} - {:?}: {:#}",
                    label.red(),
                    scenario_name,
                    duration,
                    e
                );
                let dir = failure_dir(Path::new(&args.artifacts_dir), label, scenario.name());
                match FailureCapture::collect(driver, e).await.write_to(&dir) {
                    Ok(files) => log::info!("{} artifacts in {}", files.len(), dir.display()),
                    Err(capture_err) => log::warn!(
                        "could not capture artifacts in {}: {capture_err:#}",
                        dir.display()
                    ),
                }
            }
        }
        results.push(ScenarioResult::from_runs(
            scenario.name(),
            label,
            vec![(duration, outcome.map_err(|e| format!("{e:#}")))],
        ));
    }

    results
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => reports::generate_json_report(output_target.writer(), results)?,
        "markdown" => reports::generate_markdown_report(output_target.writer(), results)?,
        _ => {
            if results.is_empty() {
                writeln!(&mut output_target, "No scenarios executed.")?;
            } else {
                reports::generate_console_report(
                    output_target.writer(),
                    results,
                    start_time.elapsed(),
                )?;
            }
            writeln!(&mut output_target)?;
            writeln!(&mut output_target, "🏁 Total time: {:?}", start_time.elapsed())?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
