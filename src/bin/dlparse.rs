//! Parse one Digital Link URI and print every element string rendition.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin dlparse -- 'https://id.gs1.org/01/09520123456788/10/ABC%2F123/21/12345?17=180426'
//! ```
//!
//! Prints the unbracketed, bracketed, and JSON renditions, each with and
//! without fixed-length AIs moved first, and exits non-zero on a parse
//! error.

use std::env;
use std::process::ExitCode;

use digital_link::DigitalLinkUri;

fn main() -> ExitCode {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "dlparse".to_string());
    let (Some(uri), None) = (args.next(), args.next()) else {
        eprintln!("Usage: {program} '<Digital Link URI>'");
        eprintln!(
            "  Example: {program} 'https://id.gs1.org/01/09520123456788/10/ABC%2F123/21/12345?17=180426'"
        );
        return ExitCode::FAILURE;
    };

    let dl = match DigitalLinkUri::parse(&uri) {
        Ok(dl) => dl,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("Provided Digital Link URI:                                 {dl}");
    println!(
        "Unbracketed element string:                                {}",
        dl.to_unbracketed(false, false)
    );
    println!(
        "Unbracketed element string (extra FNC1s):                  {}",
        dl.to_unbracketed(false, true)
    );
    println!(
        "Unbracketed element string (fixed AIs first):              {}",
        dl.to_unbracketed(true, false)
    );
    println!(
        "Unbracketed element string (fixed AIs first; extra FNC1s): {}",
        dl.to_unbracketed(true, true)
    );
    println!(
        "Bracketed element string:                                  {}",
        dl.to_bracketed(false)
    );
    println!(
        "Bracketed element string (fixed AIs first):                {}",
        dl.to_bracketed(true)
    );
    println!(
        "JSON:                                                      {}",
        dl.to_json(false)
    );
    println!(
        "JSON (fixed AIs first):                                    {}",
        dl.to_json(true)
    );

    ExitCode::SUCCESS
}
