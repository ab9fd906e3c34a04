use crate::{ExportFormat, SchemaKind};
use pwl_core::{Point, PwlCurve};
use pwl_model::{
    CostModel, CostModelDto, ExportConfig,
    export::{export_lp, export_mps},
};
use std::io::{Read, Write};

/// Read a curve and write its segments as a JSON object keyed by segment index
pub fn segments(input: impl Read, mut output: impl Write) -> anyhow::Result<()> {
    let curve: PwlCurve = serde_json::from_reader(input)?;
    tracing::info!(segments = curve.segments().len(), "built segments");
    serde_json::to_writer_pretty(&mut output, curve.segments())?;
    output.flush()?;
    Ok(())
}

/// Read a curve and write its value at each requested point
pub fn evaluate(input: impl Read, at: &[f64], mut output: impl Write) -> anyhow::Result<()> {
    let curve: PwlCurve = serde_json::from_reader(input)?;

    let values = at
        .iter()
        .map(|&x| {
            curve
                .evaluate(x)
                .map(|y| Point { x, y })
                .ok_or_else(|| CliError::OutOfDomain {
                    x,
                    domain: curve.domain(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    serde_json::to_writer_pretty(&mut output, &values)?;
    output.flush()?;
    Ok(())
}

/// Read a cost model and write its segment constraints in the requested format
pub fn export(
    input: impl Read,
    format: ExportFormat,
    config: &ExportConfig,
    mut output: impl Write,
) -> anyhow::Result<()> {
    let model: CostModel = serde_json::from_reader(input)?;
    tracing::info!(
        sites = model.sites().len(),
        curves = model.curves().len(),
        "loaded cost model"
    );

    match format {
        ExportFormat::Mps => export_mps(&model, config, &mut output)?,
        ExportFormat::Lp => export_lp(&model, config, &mut output)?,
    };
    output.flush()?;
    Ok(())
}

/// Write the JSON Schema of an input format
pub fn schema(kind: SchemaKind, mut output: impl Write) -> anyhow::Result<()> {
    let schema = match kind {
        SchemaKind::Curve => schemars::schema_for!(PwlCurve),
        SchemaKind::Model => schemars::schema_for!(CostModelDto),
    };
    serde_json::to_writer_pretty(&mut output, &schema)?;
    output.flush()?;
    Ok(())
}

/// Failures specific to the command-line tools
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CliError {
    /// The export format was neither given nor inferable from the output path
    #[error("Unsupported export format")]
    ExportFormat,
    /// A requested point lies outside the curve
    #[error("{x} is outside the curve domain [{}, {}]", .domain.0, .domain.1)]
    OutOfDomain {
        /// The requested point
        x: f64,
        /// The curve's domain
        domain: (f64, f64),
    },
}
