//! Argument-list fuzz target: feed arbitrary text to the parser.
//! The parser must not panic; it returns Ok(ArgumentList) or Err(ParseError).
//! Successful parses must render to text that parses to the same values
//! when no object property holds more than one value.
//! Build with: cargo fuzz run arguments_fuzz (requires nightly and cargo fuzz).

#![cfg_attr(fuzzing, no_main)]

#[cfg(fuzzing)]
use libfuzzer_sys::fuzz_target;

#[cfg(fuzzing)]
fn single_valued(v: &strace_args::Value) -> bool {
    match v {
        strace_args::Value::List(items) => items.iter().all(single_valued),
        strace_args::Value::Object(props) => props
            .iter()
            .all(|p| p.values.len() <= 1 && p.values.iter().all(single_valued)),
        _ => true,
    }
}

#[cfg(fuzzing)]
fuzz_target!(|data: &[u8]| {
    let s = match std::str::from_utf8(data) {
        Ok(x) => x,
        Err(_) => return,
    };
    if let Ok(args) = strace_args::parse_arguments(s) {
        if args.iter().all(single_valued) {
            let again = strace_args::parse_arguments(&args.to_string()).expect("rendered output parses");
            assert_eq!(again, args);
        }
    }
});

#[cfg(not(fuzzing))]
fn main() {
    eprintln!("Build with: cargo fuzz run arguments_fuzz");
}
