use std::{
    fs,
    io::{BufRead, Write},
    path::Path,
};

use chrono::NaiveDate;
use core_types::DatePattern;
use domain::{
    extract_surname, format_date, normalize, parse_flexible_date_detailed, parse_with_pattern,
    sort_by_last_name, sort_by_neutral, year_of, FlexibleDate,
};
use serde::Serialize;
use tracing::{debug, info};
use utils::{
    collections::{chunked, unique},
    numeric::{clamp, hhmmss, roman},
    text::plural,
};

use crate::{
    cli_args::{Cli, Command},
    error::CliError,
};

const MAX_COLUMNS: usize = 12;

#[derive(Serialize)]
struct KeyOutput<'a> {
    input: &'a str,
    key: String,
}

#[derive(Serialize)]
struct SurnameOutput<'a> {
    name: &'a str,
    surname: Option<String>,
    key: String,
}

#[derive(Serialize)]
struct DateOutput<'a> {
    input: &'a str,
    date: NaiveDate,
    pattern: DatePattern,
    #[serde(skip_serializing_if = "Option::is_none")]
    formatted: Option<String>,
}

#[derive(Serialize)]
struct YearOutput<'a> {
    input: &'a str,
    year: Option<i32>,
}

/// Runs the parsed command, reading names from `stdin` when `sort` gets
/// neither arguments nor a file, and writing results to `out`.
pub fn run(cli: &Cli, stdin: impl BufRead, out: &mut impl Write) -> Result<(), CliError> {
    match &cli.command {
        Command::Normalize { texts } => {
            let keys: Vec<KeyOutput> = texts
                .iter()
                .map(|text| KeyOutput {
                    input: text,
                    key: normalize(text),
                })
                .collect();
            if cli.json {
                write_json(out, &keys)?;
            } else {
                for key in keys {
                    writeln!(out, "{}", key.key)?;
                }
            }
        }
        Command::Surname { names } => {
            let surnames: Vec<SurnameOutput> = names
                .iter()
                .map(|name| {
                    let surname = extract_surname(name);
                    SurnameOutput {
                        name,
                        key: surname.as_ref().map(|s| s.key()).unwrap_or_default(),
                        surname: surname.map(|s| s.to_string()),
                    }
                })
                .collect();
            if cli.json {
                write_json(out, &surnames)?;
            } else {
                for surname in surnames {
                    writeln!(out, "{}", surname.key)?;
                }
            }
        }
        Command::Sort {
            names,
            file,
            neutral,
            unique: drop_repeats,
            columns,
        } => {
            let names = collect_names(names, file.as_deref(), stdin)?;
            let names = if *drop_repeats { unique(&names) } else { names };
            let sorted = if *neutral {
                sort_by_neutral(&names)
            } else {
                sort_by_last_name(&names)
            };
            info!(
                "Sorted {}",
                plural(&format!("{} name", sorted.len()), sorted.len() as i64, false, None)
            );

            if cli.json {
                write_json(out, &sorted)?;
            } else {
                let columns = clamp(1, MAX_COLUMNS, || *columns);
                for row in chunked(&sorted, columns) {
                    writeln!(out, "{}", row.join("\t"))?;
                }
            }
        }
        Command::ParseDate {
            input,
            pattern,
            format,
        } => {
            let parsed = match pattern {
                Some(pattern) => parse_with_pattern(input, *pattern).map(|date| FlexibleDate {
                    pattern: *pattern,
                    date,
                }),
                None => parse_flexible_date_detailed(input),
            };
            let parsed = parsed.ok_or_else(|| CliError::NoDateMatch(input.clone()))?;
            debug!(pattern = %parsed.pattern, "Matched date pattern");

            let formatted = format.map(|format| format_date(&parsed.date, format));
            if cli.json {
                write_json(
                    out,
                    &DateOutput {
                        input,
                        date: parsed.date,
                        pattern: parsed.pattern,
                        formatted,
                    },
                )?;
            } else {
                let shown = formatted.unwrap_or_else(|| parsed.date.to_string());
                writeln!(out, "{} ({})", shown, parsed.pattern)?;
            }
        }
        Command::Year { inputs } => {
            let years: Vec<YearOutput> = inputs
                .iter()
                .map(|input| YearOutput {
                    input,
                    year: year_of(input),
                })
                .collect();
            if cli.json {
                write_json(out, &years)?;
            } else {
                for year in years {
                    match year.year {
                        Some(year) => writeln!(out, "{}", year)?,
                        None => writeln!(out, "-")?,
                    }
                }
            }
        }
        Command::Roman { value } => {
            let numeral = roman(*value);
            if cli.json {
                write_json(out, &numeral)?;
            } else {
                writeln!(out, "{}", numeral)?;
            }
        }
        Command::Duration { seconds, padded } => {
            let duration = hhmmss(*seconds, !*padded);
            if cli.json {
                write_json(out, &duration)?;
            } else {
                writeln!(out, "{}", duration)?;
            }
        }
    }
    Ok(())
}

fn collect_names(
    names: &[String],
    file: Option<&Path>,
    stdin: impl BufRead,
) -> Result<Vec<String>, CliError> {
    if !names.is_empty() {
        return Ok(names.to_vec());
    }

    let lines: Vec<String> = match file {
        Some(path) => fs::read_to_string(path)
            .map_err(|source| CliError::NamesFileError {
                path: path.to_path_buf(),
                source,
            })?
            .lines()
            .map(str::to_string)
            .collect(),
        None => stdin.lines().collect::<Result<_, _>>()?,
    };

    let names: Vec<String> = lines
        .into_iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();
    debug!(count = names.len(), "Read names");
    Ok(names)
}

fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tempfile::NamedTempFile;

    use super::*;

    fn run_args(args: &[&str], stdin: &str) -> Result<String, CliError> {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        run(&cli, stdin.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_normalize_command() {
        let output = run_args(&["sortkit", "normalize", "The Best of the Best", "Èl Camino"], "")
            .unwrap();
        assert_eq!(output, "best of the best\nel camino\n");
    }

    #[test]
    fn test_surname_command_json() {
        let output = run_args(&["sortkit", "--json", "surname", "Robert De Niro", " "], "").unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["surname"], "De Niro");
        assert_eq!(value[0]["key"], "de niro");
        assert_eq!(value[1]["surname"], serde_json::Value::Null);
        assert_eq!(value[1]["key"], "");
    }

    #[test]
    fn test_sort_command_from_arguments() {
        let output = run_args(
            &[
                "sortkit",
                "sort",
                "Robert De Niro",
                "Joe Pesci",
                "Ray Liotta",
                "Frank Vincent",
            ],
            "",
        )
        .unwrap();
        assert_eq!(output, "Robert De Niro\nRay Liotta\nJoe Pesci\nFrank Vincent\n");
    }

    #[test]
    fn test_sort_command_from_stdin() {
        let output = run_args(
            &["sortkit", "sort", "--unique", "--columns", "2"],
            "Joe Pesci\n\nRay Liotta\nJoe Pesci\nRobert De Niro\n",
        )
        .unwrap();
        assert_eq!(output, "Robert De Niro\tRay Liotta\nJoe Pesci\n");
    }

    #[test]
    fn test_sort_command_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Zebra Pattern\nThe Best of the Best\n  Apple of My Eye  ").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let output = run_args(&["sortkit", "--json", "sort", "--neutral", "--file", &path], "")
            .unwrap();
        let sorted: Vec<String> = serde_json::from_str(&output).unwrap();
        assert_eq!(
            sorted,
            vec!["Apple of My Eye", "The Best of the Best", "Zebra Pattern"]
        );
    }

    #[test]
    fn test_sort_command_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let result = run_args(&["sortkit", "sort", "--file", path.to_str().unwrap()], "");
        assert!(matches!(result, Err(CliError::NamesFileError { .. })));
    }

    #[test]
    fn test_columns_are_clamped() {
        let output = run_args(&["sortkit", "sort", "--columns", "0", "B B", "A A"], "").unwrap();
        assert_eq!(output, "A A\nB B\n");
    }

    #[test]
    fn test_parse_date_command() {
        let output = run_args(&["sortkit", "parse-date", "03/04/2020"], "").unwrap();
        assert_eq!(output, "2020-03-04 (MM/dd/yyyy)\n");

        let output = run_args(&["sortkit", "parse-date", "2020", "--format", "year"], "").unwrap();
        assert_eq!(output, "2020 (yyyy)\n");
    }

    #[test]
    fn test_parse_date_command_json() {
        let output = run_args(
            &["sortkit", "--json", "parse-date", "03/04/2020", "--format", "full"],
            "",
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["date"], "2020-03-04");
        assert_eq!(value["pattern"], "MM/dd/yyyy");
        assert_eq!(value["formatted"], "March 4, 2020");
    }

    #[test]
    fn test_parse_date_command_with_pattern() {
        let output = run_args(
            &["sortkit", "parse-date", "03/04/2020", "--pattern", "dd MM yyyy"],
            "",
        );
        assert!(matches!(output, Err(CliError::NoDateMatch(input)) if input == "03/04/2020"));
    }

    #[test]
    fn test_parse_date_command_no_match() {
        let result = run_args(&["sortkit", "parse-date", "not a date"], "");
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "No date pattern matches 'not a date'");
    }

    #[test]
    fn test_year_command() {
        let output = run_args(&["sortkit", "year", "1999", "garbage", "12/31/1999"], "").unwrap();
        assert_eq!(output, "1999\n-\n1999\n");
    }

    #[test]
    fn test_roman_and_duration_commands() {
        assert_eq!(run_args(&["sortkit", "roman", "123"], "").unwrap(), "CXXIII\n");
        assert_eq!(run_args(&["sortkit", "roman", "-3"], "").unwrap(), "N\n");
        assert_eq!(run_args(&["sortkit", "roman", "1e300"], "").unwrap(), "N\n");
        assert_eq!(run_args(&["sortkit", "roman", "NaN"], "").unwrap(), "N\n");
        assert_eq!(run_args(&["sortkit", "duration", "581"], "").unwrap(), "9:41\n");
        assert_eq!(
            run_args(&["sortkit", "duration", "581", "--padded"], "").unwrap(),
            "00:09:41\n"
        );
    }
}
