use anyhow::{bail, Context, Result};
use env_logger::Env;
use serde_json::Value;
use std::env;

use value_contracts::{Building, Currency, Price, SkyHighBuilding, SpecializedBuilding};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    log::debug!("value-contracts {} args: {:?}", value_contracts::VERSION, args.get(1..));

    match args.get(1).map(String::as_str) {
        Some("price") => run_price(&args[2..]),
        Some("convert") => run_convert(&args[2..]),
        Some("building") => run_building(&args[2..]),
        _ => {
            eprintln!("Usage:");
            eprintln!("   value-contracts price <amount> <code> <name>");
            eprintln!("   value-contracts convert <amount> <rate>");
            eprintln!("   value-contracts building <sqft> [floors]");
            std::process::exit(2);
        }
    }
}

/// Parse an argument as JSON, falling back to a plain string
///
/// `100` becomes a number, `"100"` and `abc` become strings.
/// Used for numeric arguments only.
fn parse_arg(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn run_price(args: &[String]) -> Result<()> {
    let [amount, code, name] = args else {
        bail!("price expects <amount> <code> <name>");
    };

    // Code and name are taken verbatim; only the amount is parsed
    let mut price = Price::new(0.0, Currency::new(code.as_str(), name.as_str()));
    price.set_amount(parse_arg(amount)).context("Invalid amount")?;

    println!("{}", price.display_full_price());
    Ok(())
}

fn run_convert(args: &[String]) -> Result<()> {
    let [amount, rate] = args else {
        bail!("convert expects <amount> <rate>");
    };

    let converted = Price::convert_price(parse_arg(amount), parse_arg(rate))
        .context("Conversion failed")?;

    println!("{}", converted);
    Ok(())
}

fn run_building(args: &[String]) -> Result<()> {
    match args {
        [sqft] => {
            let building = Building::new(parse_arg(sqft)).context("Invalid building")?;
            println!("sqft: {}", building.sqft());
        }
        [sqft, floors] => {
            let floors: u32 = floors
                .parse()
                .with_context(|| format!("Floors must be a whole number, got {}", floors))?;
            let tower = SkyHighBuilding::new(parse_arg(sqft), floors).context("Invalid building")?;
            println!("sqft: {}", tower.sqft());
            println!("{}", tower.evacuation_warning_message());
        }
        _ => bail!("building expects <sqft> [floors]"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arg() {
        assert_eq!(parse_arg("100"), Value::from(100));
        assert_eq!(parse_arg("1.5"), Value::from(1.5));
        assert_eq!(parse_arg("\"100\""), Value::from("100"));
        assert_eq!(parse_arg("USD"), Value::from("USD"));
    }

    #[test]
    fn test_run_price() {
        let args = vec!["100".to_string(), "USD".to_string(), "Dollars".to_string()];
        assert!(run_price(&args).is_ok());
    }

    #[test]
    fn test_run_price_takes_code_and_name_verbatim() {
        let args = vec!["100".to_string(), "USD".to_string(), "1".to_string()];
        assert!(run_price(&args).is_ok());

        let args = vec!["100".to_string(), "null".to_string(), "true".to_string()];
        assert!(run_price(&args).is_ok());
    }

    #[test]
    fn test_run_convert() {
        let args = vec!["100".to_string(), "1.5".to_string()];
        assert!(run_convert(&args).is_ok());
    }

    #[test]
    fn test_run_convert_rejects_string_rate() {
        let args = vec!["100".to_string(), "abc".to_string()];
        assert!(run_convert(&args).is_err());
    }

    #[test]
    fn test_run_price_rejects_quoted_amount() {
        let args = vec!["\"100\"".to_string(), "USD".to_string(), "Dollars".to_string()];
        assert!(run_price(&args).is_err());
    }

    #[test]
    fn test_run_building() {
        assert!(run_building(&["500".to_string()]).is_ok());
        assert!(run_building(&["500".to_string(), "12".to_string()]).is_ok());
        assert!(run_building(&["big".to_string()]).is_err());
    }
}
