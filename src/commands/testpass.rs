use std::io::{self, Write};
use rpassword::read_password;

use rpawogen::strength;

use crate::TestpassArgs;

fn read_password_from_stdin(prompt: &str) -> Result<String, String> {
    print!("{}", prompt);
    io::stdout().flush().map_err(|e| format!("Failed to flush output: {}", e))?;
    read_password().map_err(|e| format!("Failed to read password: {}", e))
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

pub fn test_password(args: TestpassArgs) -> Result<(), String> {
    let password = match args.password {
        Some(password) => password,
        None => read_password_from_stdin("Enter password to test: ")?,
    };

    let report = strength::assess(&password);
    println!("Password strength: {}", report.score);
    println!("  Length >= {}: {}", strength::LENGTH_THRESHOLD, yes_no(report.length_ok));
    println!("  Character variety: {}", yes_no(report.variety));
    println!("  No weak patterns: {}", yes_no(report.no_weak_pattern));
    println!("  Not a known weak password: {}", yes_no(report.not_breached));
    let suggestions = report.suggestions();
    if !suggestions.is_empty() {
        println!("Suggestions: {}", suggestions.join(" "));
    }

    if args.zxcvbn {
        let estimate = strength::estimate(&password);
        println!("zxcvbn estimate: {} (score: {}/4)", estimate.level, estimate.score);
        println!("Estimated time to crack: {}", estimate.crack_time);
        if let Some(warning) = &estimate.warning {
            println!("Warning: {}", warning);
        }
        if !estimate.suggestions.is_empty() {
            println!("Suggestions: {}", estimate.suggestions.join(" "));
        }
    }

    if args.check_url_safe {
        let is_safe = strength::check_url_safe(&password);
        println!("URL-safe: {}", yes_no(is_safe));
    }

    if args.check_confusion {
        let confusing = strength::check_confusing_chars(&password);
        if !confusing.is_empty() {
            println!("Potentially confusing characters: {:?}", confusing);
        } else {
            println!("No confusing characters detected");
        }
    }
    Ok(())
}
