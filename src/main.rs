//  ____  ____     __        __      ____
// |  _ \|  _ \ __ \ \      / /__   / ___| ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \ | |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) || |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/  \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-08
// Version : 0.1.0
// License : Mulan PSL v2
//
// A secure password generator written in Rust.

use clap::{Parser, Subcommand};

mod commands;
mod configtool;
mod enforcer;

#[derive(Debug, Parser)]
#[command(name = "rpawogen")]
#[command(about = "A secure password generator written in Rust", long_about = None)]
enum Cli {
    /// Generate new random passwords
    Gen(GenArgs),

    /// Test password strength and properties
    Testpass(TestpassArgs),

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigAction),
}

#[derive(Debug, Parser)]
pub struct GenArgs {
    /// Length of the password (default from config, otherwise 16)
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Include uppercase letters (overrides the config file)
    #[arg(long, default_value_t = false, conflicts_with = "no_uppercase")]
    pub uppercase: bool,

    /// Exclude uppercase letters
    #[arg(long, default_value_t = false)]
    pub no_uppercase: bool,

    /// Include lowercase letters (overrides the config file)
    #[arg(long, default_value_t = false, conflicts_with = "no_lowercase")]
    pub lowercase: bool,

    /// Exclude lowercase letters
    #[arg(long, default_value_t = false)]
    pub no_lowercase: bool,

    /// Include numbers (overrides the config file)
    #[arg(long, default_value_t = false, conflicts_with = "no_numbers")]
    pub numbers: bool,

    /// Exclude numbers
    #[arg(long, default_value_t = false)]
    pub no_numbers: bool,

    /// Include special characters (overrides the config file)
    #[arg(long, default_value_t = false, conflicts_with = "no_special")]
    pub special: bool,

    /// Exclude special characters
    #[arg(long, default_value_t = false)]
    pub no_special: bool,

    /// Make password URL-safe
    #[arg(short = 's', long, default_value_t = false)]
    pub url_safe: bool,

    /// Avoid visually confusing characters (I l 1 O 0)
    #[arg(short = 'c', long, default_value_t = false)]
    pub avoid_confusion: bool,

    /// Number of passwords to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Print history entries as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Validate every password against the configured policy
    #[arg(long, default_value_t = false)]
    pub enforce_policy: bool,
}

#[derive(Debug, Parser)]
pub struct TestpassArgs {
    /// Password to test (prompted for when omitted)
    pub password: Option<String>,

    /// Check if password is URL-safe
    #[arg(short = 's', long, default_value_t = false)]
    pub check_url_safe: bool,

    /// Check for visually confusing characters
    #[arg(short = 'c', long, default_value_t = false)]
    pub check_confusion: bool,

    /// Also show the zxcvbn estimate
    #[arg(short = 'z', long, default_value_t = false)]
    pub zxcvbn: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long, default_value_t = false)]
        force: bool,
    },

    /// Print the configuration in use
    Show,
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();
    match cli {
        Cli::Gen(args) => commands::password_gen::generate_random(&args),
        Cli::Testpass(args) => commands::testpass::test_password(args),
        Cli::Config(action) => match action {
            ConfigAction::Init { force } => commands::config::init_config(force),
            ConfigAction::Show => commands::config::show_config(),
        },
    }
}
