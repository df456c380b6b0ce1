//! build_road_catalog — unique road names and refs of a GeoJSON file
//!
//! Collects the trimmed `name`, `name:en` and `name_en` values and the
//! `ref` values of all road features and writes them, sorted and
//! deduplicated, as `{"names": [...], "refs": [...]}`.
//!
//! Usage examples
//! --------------
//!
//!   $ build_road_catalog planet-roads.geojson.xz road_catalog.json
//!   Wrote 1234 names and 56 refs to road_catalog.json

use anyhow::Context;
use roadstream_cli::args::CatalogArgs;
use roadstream_cli::{init_logging, parse_or_exit};
use roadstream_core::{features_from_path, Catalog, RoadConfig};

fn main() -> anyhow::Result<()> {
    let args: CatalogArgs = parse_or_exit();
    init_logging(args.common.verbose);

    let roads = RoadConfig::default();
    let features = features_from_path(&args.input, &args.common.stream_config())
        .with_context(|| format!("failed to read features from {}", args.input.display()))?;

    let mut catalog = Catalog::new();
    let (mut seen, mut road_count) = (0u64, 0u64);
    for feature in features {
        let feature = feature.with_context(|| format!("failed to decode {}", args.input.display()))?;
        seen += 1;
        if catalog.add_feature(&feature, &roads) {
            road_count += 1;
        }
    }
    log::info!("{road_count} roads out of {seen} features");

    catalog
        .save_as(&args.output)
        .with_context(|| format!("failed to write catalog to {}", args.output.display()))?;

    let summary = catalog.summary();
    println!(
        "Wrote {} names and {} refs to {}",
        summary.names,
        summary.refs,
        args.output.display()
    );
    Ok(())
}
