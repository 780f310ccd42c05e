#[derive(Debug, PartialEq, Eq)]
pub struct AppArgs {
    pub input_file: String,
}

pub fn print_usage(program: &str) {
    println!("Usage: {program} <file>");
    println!();
    println!("Rewrites <file>, replacing every #define'd name, into style.css in the current directory.");
}

/// `Ok(None)` means no input was given, which is not an error: there is simply nothing to do.
pub fn parse_args(args: &[String]) -> Result<Option<AppArgs>, String> {
    let mut input_file = None;

    for arg in args.iter().skip(1) {
        if arg.starts_with('-') {
            return Err(format!("Unknown flag: {arg}"));
        }

        if input_file.is_some() {
            return Err("Multiple input files not currently supported".to_string());
        }
        input_file = Some(arg.clone());
    }

    Ok(input_file.map(|input_file| AppArgs { input_file }))
}
