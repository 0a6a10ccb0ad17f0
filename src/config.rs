//! Site configuration.
//!
//! [`SiteConfig`] holds the handful of values the page copy does not
//! hard-code: owner name, links and the hero scene. Defaults reproduce the
//! published page. Desktop builds may override some of them from the
//! command line before launch.

use std::sync::OnceLock;

use portfolio_core::motion::MotionMode;

/// Hosted 3D scene rendered behind the hero copy
pub const DEFAULT_SCENE_URL: &str = "https://prod.spline.design/EF7JOSsHLk16Tlw9/scene.splinecode";

/// Web component that renders `.splinecode` scenes
pub const SPLINE_VIEWER_SRC: &str = "https://unpkg.com/@splinetool/viewer/build/spline-viewer.js";

/// Startup configuration, set once before launch
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Values shared by the navbar, hero, contact section and footer
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// Name in the footer copyright line
    pub owner: String,
    /// Label next to the brand mark
    pub brand: String,
    pub scene_url: String,
    pub email: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub motion: MotionMode,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Your Name".to_string(),
            brand: "Software Engineer".to_string(),
            scene_url: DEFAULT_SCENE_URL.to_string(),
            email: "hello@example.com".to_string(),
            github_url: "#".to_string(),
            linkedin_url: "#".to_string(),
            motion: MotionMode::Animated,
        }
    }
}

impl SiteConfig {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Document title
    pub fn page_title(&self) -> String {
        format!("{} | {}", self.owner, self.brand)
    }
}

/// Installs the startup configuration. Only the first call wins.
#[cfg(feature = "desktop")]
pub fn install(config: SiteConfig) {
    if SITE_CONFIG.set(config).is_err() {
        tracing::warn!("Site config already installed; ignoring override");
    }
}

/// The installed configuration, or defaults when nothing was installed
pub fn site_config() -> SiteConfig {
    SITE_CONFIG.get().cloned().unwrap_or_default()
}

/// Portfolio - single-page personal site
#[cfg(feature = "desktop")]
#[derive(clap::Parser, Debug)]
#[command(name = "portfolio")]
#[command(about = "Portfolio - single-page personal site in a desktop window")]
pub struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    pub width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    pub height: f64,

    /// Window title (defaults to "<owner> | <brand>")
    #[arg(long)]
    pub title: Option<String>,

    /// Override the hero's 3D scene URL
    #[arg(long)]
    pub scene_url: Option<String>,

    /// Show every section immediately instead of animating on scroll
    #[arg(long)]
    pub reduced_motion: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(feature = "desktop")]
impl Args {
    /// Defaults with the command-line overrides applied
    pub fn site_config(&self) -> SiteConfig {
        let mut config = SiteConfig::default();
        if let Some(ref url) = self.scene_url {
            config.scene_url = url.clone();
        }
        if self.reduced_motion {
            config.motion = MotionMode::Static;
        }
        config
    }

    pub fn window_title(&self, config: &SiteConfig) -> String {
        self.title.clone().unwrap_or_else(|| config.page_title())
    }

    /// Log filter used when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
