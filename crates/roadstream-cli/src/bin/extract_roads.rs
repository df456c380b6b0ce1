//! extract_roads — road features of a GeoJSON file as NDJSON
//!
//! Every feature whose geometry is a `LineString`/`MultiLineString` and
//! whose properties carry a `highway` key is written to stdout on its own
//! line, with `properties` cut down to `name`, `name:en`, `ref` and
//! `highway`.
//!
//! Usage examples
//! --------------
//!
//! - Plain or compressed input
//!   $ extract_roads roads.geojson > roads.ndjson
//!   $ extract_roads planet-roads.geojson.xz | head
//!
//! Lines written before a decode error stay on stdout; the process then
//! exits non-zero.

use anyhow::Context;
use roadstream_cli::args::ExtractArgs;
use roadstream_cli::{init_logging, parse_or_exit};
use roadstream_core::{
    features_from_path, is_road, trim_properties, write_json_line, FeatureStream, RoadConfig,
};
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let args: ExtractArgs = parse_or_exit();
    init_logging(args.common.verbose);

    let roads = RoadConfig::default();
    let features = features_from_path(&args.input, &args.common.stream_config())
        .with_context(|| format!("failed to read features from {}", args.input.display()))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = write_roads(features, &roads, &mut out, &args.input);
    // Lines already produced are kept, even when decoding failed.
    out.flush().context("failed to flush stdout")?;
    let (seen, emitted) = result?;

    log::info!("{emitted} roads out of {seen} features");
    Ok(())
}

fn write_roads<W: Write>(
    features: FeatureStream<Box<dyn Read>>,
    roads: &RoadConfig,
    out: &mut W,
    input: &Path,
) -> anyhow::Result<(u64, u64)> {
    let (mut seen, mut emitted) = (0, 0);
    for feature in features {
        let feature = feature.with_context(|| format!("failed to decode {}", input.display()))?;
        seen += 1;
        if !is_road(&feature, roads) {
            continue;
        }
        write_json_line(out, &trim_properties(feature, roads)).context("failed to write to stdout")?;
        emitted += 1;
    }
    Ok((seen, emitted))
}
