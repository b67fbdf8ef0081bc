use serde::Deserialize;
use sparkline_rs::MiniAreaChart;
use sparkline_rs::api::MiniAreaChartOptions;
use sparkline_rs::core::SeriesKey;
use sparkline_rs::render::NullRenderer;
use sparkline_rs::telemetry::init_default_tracing;
use std::fs;
use std::path::PathBuf;

const USAGE: &str = "usage: sparkline_snapshot --input <path> --output <path>";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: PathBuf,
}

/// Input file: chart options, samples and an optional highlighted index.
#[derive(Debug, Deserialize)]
struct SnapshotInput {
    #[serde(default)]
    options: MiniAreaChartOptions,
    data: Vec<RawSample>,
    #[serde(default)]
    highlight_index: Option<usize>,
}

/// A bare value (x is the index) or an `[x, y]` pair.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSample {
    Value(Option<f64>),
    Pair(RawKey, Option<f64>),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawKey {
    Number(f64),
    Text(String),
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let input: SnapshotInput =
        serde_json::from_str(&raw).map_err(|err| format!("invalid json: {err}"))?;

    let mut chart = MiniAreaChart::new(NullRenderer::default(), input.options)
        .map_err(|err| format!("invalid options: {err}"))?;
    chart.set_xy_data(to_pairs(input.data));
    chart.update();

    if let Some(index) = input.highlight_index {
        let datum = chart
            .node_data()
            .get(index)
            .cloned()
            .ok_or_else(|| format!("highlight index {index} is out of range"))?;
        chart.highlight_datum(&datum);
        if let Some(html) = chart.get_tooltip_html(&datum) {
            println!("{html}");
        }
    }

    chart
        .render()
        .map_err(|err| format!("frame rejected: {err}"))?;
    let json = chart
        .frame_json_contract_v1_pretty()
        .map_err(|err| err.to_string())?;
    fs::write(&args.output, json)
        .map_err(|err| format!("failed to write `{}`: {err}", args.output.display()))
}

fn to_pairs(samples: Vec<RawSample>) -> Vec<(SeriesKey, Option<f64>)> {
    samples
        .into_iter()
        .enumerate()
        .map(|(index, sample)| match sample {
            RawSample::Value(y) => (SeriesKey::number(index as f64), y),
            RawSample::Pair(RawKey::Number(x), y) => (SeriesKey::number(x), y),
            RawSample::Pair(RawKey::Text(x), y) => (SeriesKey::Category(x), y),
        })
        .collect()
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    Ok(CliArgs {
        input: input.ok_or_else(|| format!("missing --input\n{USAGE}"))?,
        output: output.ok_or_else(|| format!("missing --output\n{USAGE}"))?,
    })
}
