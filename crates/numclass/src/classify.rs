use crate::fact::FactClient;
use crate::prelude::{eprintln, *};
use colored::Colorize;
use numclass_core::{
    classify::{classify, ClassificationResult},
    fact::FALLBACK_FACT,
    validate::parse_number,
};
use std::io::Write;
use std::time::Duration;

#[derive(Debug, clap::Args)]
pub struct ClassifyOptions {
    /// The integer to classify (optional sign, digits only)
    #[arg(allow_negative_numbers = true)]
    number: String,

    /// Output as JSON, exactly as the HTTP endpoint returns it
    #[arg(long)]
    json: bool,

    /// Skip the fun fact lookup
    #[arg(long)]
    no_fact: bool,
}

pub async fn run(options: ClassifyOptions, global: crate::Global) -> Result<()> {
    let mut stdout = anstream::stdout();
    write_classification(&options, &global, &mut stdout).await
}

/// Classify `options.number` and write the report to `out`.
///
/// Only the report goes to `out`; verbose diagnostics go to stderr so that
/// `--json` output stays parseable.
async fn write_classification<W: Write>(
    options: &ClassifyOptions,
    global: &crate::Global,
    out: &mut W,
) -> Result<()> {
    let n = parse_number(Some(&options.number))
        .map_err(|e| eyre!("Invalid number {:?}: {e}", options.number))?;

    let fun_fact = if options.no_fact {
        FALLBACK_FACT.to_string()
    } else {
        if global.verbose {
            eprintln!("Fun fact service: {}", global.facts_url);
            eprintln!();
        }
        let facts = FactClient::new(
            global.facts_url.clone(),
            Duration::from_secs(global.fact_timeout),
        )?;
        facts.fun_fact(n).await
    };

    let result = classify(n, fun_fact);

    if options.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        result_table(&result).print(out)?;
    }

    Ok(())
}

fn yes_no(value: bool) -> String {
    if value {
        "yes".green().to_string()
    } else {
        "no".red().to_string()
    }
}

fn result_table(result: &ClassificationResult) -> prettytable::Table {
    let mut table = new_table();

    table.add_row(prettytable::row!["Number".bold(), result.number]);
    table.add_row(prettytable::row!["Prime".bold(), yes_no(result.is_prime)]);
    table.add_row(prettytable::row!["Perfect".bold(), yes_no(result.is_perfect)]);
    table.add_row(prettytable::row!["Properties".bold(), result.properties.join(", ")]);
    table.add_row(prettytable::row!["Digit sum".bold(), result.digit_sum]);
    table.add_row(prettytable::row!["Fun fact".bold(), result.fun_fact]);

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{App, SubCommands};
    use clap::Parser;

    fn classify_options(app: App) -> ClassifyOptions {
        match app.command {
            SubCommands::Classify(options) => options,
            other => panic!("unexpected subcommand: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_verbose_json_output_is_pure_json() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let facts_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let app = App::try_parse_from([
            "numclass",
            "--verbose",
            "--fact-timeout",
            "1",
            "--facts-url",
            &facts_url,
            "classify",
            "6",
            "--json",
        ])
        .unwrap();
        let global = app.global.clone();
        let options = classify_options(app);
        assert!(global.verbose);

        let mut out = Vec::new();
        write_classification(&options, &global, &mut out)
            .await
            .unwrap();

        let result: ClassificationResult = serde_json::from_slice(&out).unwrap();
        assert_eq!(result.number, 6);
        assert!(result.is_perfect);
        assert_eq!(result.fun_fact, FALLBACK_FACT);
    }

    #[tokio::test]
    async fn test_table_output_without_fact() {
        let app = App::try_parse_from(["numclass", "classify", "28", "--no-fact"]).unwrap();
        let global = app.global.clone();
        let options = classify_options(app);

        let mut out = Vec::new();
        write_classification(&options, &global, &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Perfect"));
        assert!(text.contains(FALLBACK_FACT));
        assert!(!text.trim_start().starts_with('{'));
    }

    #[tokio::test]
    async fn test_invalid_number_is_an_error() {
        let app = App::try_parse_from(["numclass", "classify", "1.5", "--no-fact"]).unwrap();
        let global = app.global.clone();
        let options = classify_options(app);

        let mut out = Vec::new();
        let err = write_classification(&options, &global, &mut out)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("1.5"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_classify_accepts_negative_number() {
        let app = App::try_parse_from(["numclass", "classify", "-153", "--json"]).unwrap();
        match app.command {
            SubCommands::Classify(options) => {
                assert_eq!(options.number, "-153");
                assert!(options.json);
                assert!(!options.no_fact);
            }
            other => panic!("unexpected subcommand: {other:?}"),
        }
    }

    #[test]
    fn test_global_defaults() {
        let app = App::try_parse_from(["numclass", "classify", "6", "--no-fact"]).unwrap();
        assert_eq!(app.global.facts_url, numclass_core::fact::DEFAULT_FACTS_URL);
        assert_eq!(app.global.fact_timeout, 3);
    }
}
