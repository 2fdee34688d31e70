//! # Command line calculator
//!
//! Small demonstration harness around the library: parses two rational literals and an
//! operator from the command line and prints the exact result.
use std::process::exit;

use clap::{App, Arg};

use exact_ratio::error::Error;
use exact_ratio::Rational;

fn main() {
    let matches = App::new("exact-ratio")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Exact arithmetic on arbitrary precision rational numbers")
        .arg(Arg::new("left")
            .about("Left operand, an integer or a fraction like \"1/2\"")
            .required(true)
            .index(1))
        .arg(Arg::new("operator")
            .about("One of +, -, x, /")
            .required(true)
            .index(2))
        .arg(Arg::new("right")
            .about("Right operand, an integer or a fraction like \"-3/4\"")
            .required(true)
            .index(3))
        .get_matches();

    let parse_operand = |name: &str| -> Rational {
        let text = matches.value_of(name).unwrap();
        match text.parse() {
            Ok(value) => value,
            Err(error) => {
                eprintln!("Could not read the {} operand \"{}\": {}", name, text, error);
                exit(1);
            },
        }
    };

    let left = parse_operand("left");
    let right = parse_operand("right");

    let operator = matches.value_of("operator").unwrap();
    let result = match operator {
        "+" => Ok(left + right),
        "-" => Ok(left - right),
        // An "x" instead of "*" to avoid shell globbing.
        "x" => Ok(left * right),
        "/" => left.checked_div(&right).map_err(Error::from),
        other => {
            eprintln!("Unknown operator \"{}\", expected one of +, -, x, /.", other);
            exit(1);
        },
    };

    match result {
        Ok(value) => println!("{}", value),
        Err(error) => {
            eprintln!("{}", error);
            exit(1);
        },
    }
}
