//! Execution of the command line subcommands.

use std::io::{self, Write};

use anyhow::{Context, Error};
use log::{debug, info};
use serde::Serialize;

use crate::{
    capacity::ResolvedCapacity,
    cli::{Commands, OutputFormat},
    instance_type::InstanceType,
    nitro::{is_nitro_instance_type, shared_max_attachments},
    reserved::ReservedSlots,
    tables,
};

/// Runs `command`, writing its results to `out`.
pub fn run<W: Write>(command: &Commands, out: &mut W) -> Result<(), Error> {
    info!("Running '{}' command", command.name());

    match command {
        Commands::Resolve {
            instance_types,
            output,
        } => {
            let capacities = instance_types
                .iter()
                .map(|id| validate(id).map(|()| ResolvedCapacity::resolve(id)))
                .collect::<Result<Vec<_>, _>>()?;

            write_output(out, *output, &capacities, |out, capacities| {
                for capacity in capacities {
                    writeln!(out, "{}", describe_capacity(capacity))?;
                }
                Ok(())
            })?;
        }

        Commands::Nitro { instance_type } => {
            validate(instance_type)?;
            let nitro = is_nitro_instance_type(instance_type);
            writeln!(
                out,
                "{instance_type}: {}, shared attachment budget {}",
                if nitro { "nitro" } else { "non-nitro" },
                shared_max_attachments(nitro)
            )?;
        }

        Commands::Reserved {
            instance_type,
            output,
        } => {
            validate(instance_type)?;
            let reserved = ReservedSlots::for_instance_type(instance_type);
            write_output(out, *output, &reserved, |out, reserved| {
                for (class, slots) in &reserved.devices {
                    writeln!(out, "{class}: {slots}")?;
                }
                writeln!(out, "total: {}", reserved.total)
            })?;
        }

        Commands::Tables => {
            for (table, entries) in tables::table_sizes() {
                writeln!(out, "{table}: {entries}")?;
            }
        }
    }

    Ok(())
}

/// Rejects malformed instance types before they reach the lookups, which
/// treat them as a fatal caller error.
fn validate(id: &str) -> Result<(), Error> {
    InstanceType::try_from(id).with_context(|| format!("Invalid instance type '{id}'"))?;
    debug!("Instance type '{id}' is well formed");
    Ok(())
}

fn describe_capacity(capacity: &ResolvedCapacity) -> String {
    let mut line = format!(
        "{}: {} volume(s) available, {} budget of {}",
        capacity.instance_type,
        capacity.available_for_volumes,
        capacity.source,
        capacity.total_budget
    );
    if capacity.reserved_slots > 0 {
        line.push_str(&format!(", {} reserved", capacity.reserved_slots));
    }
    line
}

/// Writes `value` in the requested format, using `human` for the plain text
/// rendering.
fn write_output<W, T>(
    out: &mut W,
    format: OutputFormat,
    value: &T,
    human: impl FnOnce(&mut W, &T) -> io::Result<()>,
) -> Result<(), Error>
where
    W: Write,
    T: Serialize,
{
    match format {
        OutputFormat::Human => human(out, value)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, value).context("Failed to serialize JSON")?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => {
            serde_yaml::to_writer(&mut *out, value).context("Failed to serialize YAML")?;
        }
    }
    Ok(())
}
