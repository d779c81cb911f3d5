//! Utility to convert a temperature from the command line
//!
//! Usage: convert_temperature <value> <from> <to>

use thermoform::temperature::{convert_input, Unit};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 3 {
        eprintln!("Usage: convert_temperature <value> <celsius|fahrenheit|kelvin> <celsius|fahrenheit|kelvin>");
        std::process::exit(2);
    }

    let result = args[1]
        .parse::<Unit>()
        .and_then(|from| Ok((from, args[2].parse::<Unit>()?)))
        .and_then(|(from, to)| convert_input(&args[0], from, to));

    match result {
        Ok(conversion) => {
            if let Some(note) = &conversion.note {
                println!("{}", note);
            }
            println!("{}", conversion.display);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
