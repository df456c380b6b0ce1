use clap::{ArgAction, Args, Parser};
use roadstream_core::{StreamConfig, DEFAULT_CHUNK_SIZE};
use std::path::PathBuf;

/// CLI arguments for extract_roads
#[derive(Debug, Parser)]
#[command(
    name = "extract_roads",
    version,
    about = "Stream road features from a GeoJSON file to stdout, one compact JSON object per line"
)]
pub struct ExtractArgs {
    /// Path to the input GeoJSON (`.gz`/`.xz` files are decompressed while reading)
    pub input: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// CLI arguments for build_road_catalog
#[derive(Debug, Parser)]
#[command(
    name = "build_road_catalog",
    version,
    about = "Collect the unique road names and route refs of a GeoJSON file into a JSON catalog"
)]
pub struct CatalogArgs {
    /// Path to the input GeoJSON (`.gz`/`.xz` files are decompressed while reading)
    pub input: PathBuf,

    /// Where to write the catalog JSON
    pub output: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Options shared by both tools.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Bytes read from the input per chunk
    #[arg(long = "chunk-size", value_name = "BYTES", default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    pub fn stream_config(&self) -> StreamConfig {
        StreamConfig::with_chunk_size(self.chunk_size)
    }
}
