use std::fs;

use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment, Table};
use tracing::{error, info, info_span};

use sif_model::{ConversionConfig, FieldLayout};
use sif_cli::preview::{PREVIEW_RECORDS, preview_document};
use sis_output::{ConvertOptions, convert_file, output_path_for};

use crate::cli::{ConvertArgs, LayoutArgs};
use crate::summary::{apply_table_style, header_cell};
use crate::types::{ConvertReport, FileFailure};

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertReport> {
    let config = ConversionConfig::load_or_builtin(args.config.as_deref())
        .context("load conversion config")?;
    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("create output directory {}", dir.display()))?;
    }
    let options = ConvertOptions {
        preview_limit: if args.preview { PREVIEW_RECORDS } else { 0 },
        log_patron_data: args.log_data,
    };

    let span = info_span!("run", files = args.files.len());
    let _guard = span.enter();
    let mut report = ConvertReport::default();
    for input in &args.files {
        let output = output_path_for(input, args.output_dir.as_deref());
        info!(input = %input.display(), output = %output.display(), "converting");
        match convert_file(input, &output, &config, &options) {
            Ok(summary) => {
                if args.preview {
                    println!("{}", input.display());
                    println!("{}", preview_document(&summary.preview));
                }
                report.files.push(summary);
            }
            Err(err) => {
                error!(input = %input.display(), error = %err, "conversion failed");
                report.failures.push(FileFailure {
                    input: input.clone(),
                    error: err.to_string(),
                });
            }
        }
    }
    Ok(report)
}

pub fn run_layout(args: &LayoutArgs) -> Result<()> {
    let config = ConversionConfig::load_or_builtin(args.config.as_deref())
        .context("load conversion config")?;
    if args.dump {
        let toml = config
            .to_toml_string()
            .context("serialize conversion config")?;
        print!("{toml}");
        return Ok(());
    }

    let layout = &config.layout;
    println!("Base record ({} bytes)", layout.base.width());
    println!("{}", layout_table(&layout.base));
    println!(
        "Address count digit at offset {}",
        layout.address_count_offset()
    );
    println!();
    println!("Address block ({} bytes)", layout.address.width());
    println!("{}", layout_table(&layout.address));
    println!();
    println!("Minimum line length: {}", layout.min_record_len());
    println!("Maximum note length: {}", layout.note_max_len);
    Ok(())
}

fn layout_table(layout: &FieldLayout) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Offset"),
        header_cell("Width"),
        header_cell("Field"),
    ]);
    apply_table_style(&mut table);
    for (offset, field) in layout.with_offsets() {
        table.add_row(vec![
            Cell::new(offset).set_alignment(CellAlignment::Right),
            Cell::new(field.width).set_alignment(CellAlignment::Right),
            Cell::new(&field.name),
        ]);
    }
    table
}
