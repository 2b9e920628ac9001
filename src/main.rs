use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use web_regress::config;
use web_regress::driver::{DriverConfig, DriverSession};
use web_regress::report::write_report;
use web_regress::runner::{RunOptions, run_steps};
use web_regress::steps::builtin_steps;

/// web-regress - Linear browser UI-regression runs over WebDriver
#[derive(Parser, Debug)]
#[command(
    name = "web-regress",
    about = "Run the built-in UI regression scenario against a live browser",
    after_help = "ENVIRONMENT VARIABLES:\n\
        WEB_REGRESS_APP_URL          Target application URL\n\
        WEB_REGRESS_WEBDRIVER_URL    WebDriver endpoint URL\n\
        WEB_REGRESS_BROWSER          Browser name capability\n\
        WEB_REGRESS_SCREENSHOT_DIR   Directory for failure screenshots\n\
        WEB_REGRESS_REPORT_DIR       Directory for report files\n\
        WEB_REGRESS_STEP_PAUSE_MS    Pause after each successful step (ms)"
)]
struct Args {
    /// Target application URL
    #[arg(long, env = "WEB_REGRESS_APP_URL", default_value = config::DEFAULT_APP_URL)]
    url: String,

    /// WebDriver endpoint URL (chromedriver, geckodriver)
    #[arg(long, env = "WEB_REGRESS_WEBDRIVER_URL", default_value = config::DEFAULT_WEBDRIVER_URL)]
    webdriver: String,

    /// Browser name requested in the session capabilities
    #[arg(long, env = "WEB_REGRESS_BROWSER", default_value = config::DEFAULT_BROWSER)]
    browser: String,

    /// Directory for failure screenshots
    #[arg(long, env = "WEB_REGRESS_SCREENSHOT_DIR", default_value = config::DEFAULT_SCREENSHOT_DIR)]
    screenshot_dir: PathBuf,

    /// Directory for the report file
    #[arg(long, env = "WEB_REGRESS_REPORT_DIR", default_value = config::DEFAULT_REPORT_DIR)]
    report_dir: PathBuf,

    /// Pause after initial load and each successful step, in milliseconds
    #[arg(long, env = "WEB_REGRESS_STEP_PAUSE_MS", default_value = "3000")]
    pause_ms: u64,

    /// Also print run results as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let driver_config = DriverConfig::new(&args.webdriver).browser(&args.browser);
    let mut session = DriverSession::start(&driver_config)?;

    session.maximize_window()?;
    session.navigate(&args.url)?;
    // Let the initial page load settle before the first step
    thread::sleep(Duration::from_millis(args.pause_ms));

    let options = RunOptions {
        screenshot_dir: args.screenshot_dir.clone(),
        step_pause: Duration::from_millis(args.pause_ms),
    };

    let outcome = run_steps(&mut session, &builtin_steps(), &options)?;

    if let Err(e) = session.quit() {
        eprintln!("Warning: could not delete browser session: {}", e);
    }
    // Session already released above; skip the Drop cleanup
    std::mem::forget(session);

    let report_path = write_report(&args.report_dir, &outcome.results)?;
    println!("Report written: {}", report_path.display());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }

    Ok(())
}
