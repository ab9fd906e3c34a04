use crate::{Bound, CostModel, ExportConfig, SiteId};
use std::io::Write;

/// The name of the objective row
pub const OBJECTIVE: &str = "total_cost";

/// The name of the unit-count variable of a site
pub fn units_var(site: &SiteId) -> String {
    format!("units_{site}")
}

/// The name of the cost variable of a site
pub fn cost_var(site: &SiteId) -> String {
    format!("cost_{site}")
}

/// Write the cost model's segment constraints in CPLEX `.lp` format.
///
/// The objective sums the cost variables, maximized under [`Bound::Upper`] and
/// minimized under [`Bound::Lower`], so that for any fixed unit count the cost
/// settles on the curve.
pub fn export_lp(
    model: &CostModel,
    config: &ExportConfig,
    buffer: &mut impl Write,
) -> Result<(), std::io::Error> {
    let ExportConfig {
        bound,
        shape_tolerance,
    } = *config;

    tracing::debug!(sites = model.sites().len(), ?bound, "exporting cost model to .lp");
    model.check_shapes(bound, shape_tolerance);

    writeln!(buffer, "\\ piecewise-linear cost model")?;
    match bound {
        Bound::Upper => writeln!(buffer, "Maximize")?,
        Bound::Lower => writeln!(buffer, "Minimize")?,
    }

    write!(buffer, " {OBJECTIVE}:")?;
    for (offset, site) in model.sites().keys().enumerate() {
        if offset == 0 {
            write!(buffer, " {}", cost_var(site))?;
        } else {
            write!(buffer, " + {}", cost_var(site))?;
        }
    }
    writeln!(buffer)?;

    writeln!(buffer, "Subject To")?;
    for constraint in model.constraints(bound) {
        write!(
            buffer,
            " {}: {}",
            constraint.row_name(),
            cost_var(constraint.site)
        )?;
        // cost - slope * units
        if constraint.slope > 0.0 {
            write!(buffer, " - {} {}", constraint.slope, units_var(constraint.site))?;
        } else if constraint.slope < 0.0 {
            write!(buffer, " + {} {}", -constraint.slope, units_var(constraint.site))?;
        }
        writeln!(buffer, " {} {}", bound.operator(), constraint.intercept)?;
    }

    writeln!(buffer, "Bounds")?;
    for site in model.sites().keys() {
        if let Some((min, max)) = model.units_bounds(site) {
            writeln!(buffer, " {min} <= {} <= {max}", units_var(site))?;
        }
        writeln!(buffer, " {} free", cost_var(site))?;
    }

    writeln!(buffer, "End")?;
    Ok(())
}

/// Write the cost model's segment constraints in free `.mps` format.
///
/// The program is the same as [`export_lp`]; since MPS always minimizes, the
/// objective coefficients are negated under [`Bound::Upper`].
pub fn export_mps(
    model: &CostModel,
    config: &ExportConfig,
    buffer: &mut impl Write,
) -> Result<(), std::io::Error> {
    // https://www.ibm.com/docs/en/icos/22.1.2?topic=standard-records-in-mps-format
    let ExportConfig {
        bound,
        shape_tolerance,
    } = *config;

    tracing::debug!(sites = model.sites().len(), ?bound, "exporting cost model to .mps");
    model.check_shapes(bound, shape_tolerance);

    writeln!(buffer, "NAME pwl_cost")?;
    writeln!(buffer, "ROWS")?;
    writeln!(buffer, " N    {OBJECTIVE}")?;

    let row_type = match bound {
        Bound::Upper => "L",
        Bound::Lower => "G",
    };
    for constraint in model.constraints(bound) {
        writeln!(buffer, " {row_type}    {}", constraint.row_name())?;
    }

    // Entries are grouped by column: first every cost variable, then every units variable.
    writeln!(buffer, "COLUMNS")?;
    let objective = match bound {
        Bound::Upper => -1.0,
        Bound::Lower => 1.0,
    };
    for site in model.sites().keys() {
        let cost = cost_var(site);
        writeln!(buffer, "    {cost}    {OBJECTIVE}    {objective}")?;
        for constraint in model.constraints(bound).filter(|c| c.site == site) {
            writeln!(buffer, "    {cost}    {}    1", constraint.row_name())?;
        }
    }
    for site in model.sites().keys() {
        let units = units_var(site);
        let mut declared = false;
        for constraint in model.constraints(bound).filter(|c| c.site == site) {
            if constraint.slope != 0.0 {
                writeln!(
                    buffer,
                    "    {units}    {}    {term}",
                    constraint.row_name(),
                    term = -constraint.slope
                )?;
                declared = true;
            }
        }
        // A column must be declared before BOUNDS can refer to it
        if !declared {
            writeln!(buffer, "    {units}    {OBJECTIVE}    0")?;
        }
    }

    writeln!(buffer, "RHS")?;
    for constraint in model.constraints(bound) {
        if constraint.intercept != 0.0 {
            writeln!(
                buffer,
                "    RHS    {}    {}",
                constraint.row_name(),
                constraint.intercept
            )?;
        }
    }

    writeln!(buffer, "BOUNDS")?;
    for site in model.sites().keys() {
        writeln!(buffer, " FR BND    {}", cost_var(site))?;
        if let Some((min, max)) = model.units_bounds(site) {
            writeln!(buffer, " LO BND    {}    {min}", units_var(site))?;
            writeln!(buffer, " UP BND    {}    {max}", units_var(site))?;
        }
    }

    writeln!(buffer, "ENDATA")?;
    Ok(())
}
