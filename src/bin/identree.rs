//! Command-line interface for identree
//! Converts ImageMagick `identify -verbose` reports into JSON, XML, or an
//! iRODS-style property list.
//!
//! Usage:
//!   identree `<image>` [--type json|xml|irods|raw]      - Inspect an image via identify
//!   identree `<report>` --from-report [--type ...]      - Convert a captured report

use clap::{Arg, ArgAction, Command};
use identree::report::{IdentifyTool, OutputFormat, ReportFile, ReportPipeline};
use std::path::Path;

fn main() {
    let matches = Command::new("identree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("ImageMagick identify -verbose parser and converter")
        .arg(
            Arg::new("path")
                .help("The input image (or a captured report with --from-report)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("type")
                .long("type")
                .short('t')
                .help("The type of output. Can be json|xml|irods|raw.")
                .default_value("json"),
        )
        .arg(
            Arg::new("from-report")
                .long("from-report")
                .help("Treat the input as a previously captured identify report")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").expect("path is required");
    let type_name = matches.get_one::<String>("type").expect("type has a default");

    let Some(format) = OutputFormat::from_name(type_name) else {
        eprintln!("Invalid type specified: {}", type_name);
        eprintln!("Available types: json, xml, irods, raw");
        std::process::exit(1);
    };

    let result = if matches.get_flag("from-report") {
        ReportPipeline::new(ReportFile).run(Path::new(path), format)
    } else {
        let tool = IdentifyTool::new();
        if !tool.is_available() {
            eprintln!("identify not found on PATH; install ImageMagick or use --from-report");
            std::process::exit(1);
        }
        ReportPipeline::new(tool).run(Path::new(path), format)
    };

    match result {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
