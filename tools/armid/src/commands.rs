//! CLI commands.

use std::collections::BTreeMap;
use std::io::Write;

use anyhow::{bail, Context, Result};
use arm_network::staticcidrs::IpamPoolId;
use arm_resourceids::commonids::{ResourceGroupId, SubscriptionId};
use arm_resourceids::{recaser, ResourceId, Validation};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, info};

/// armid - Parse, re-case and validate ARM resource IDs.
#[derive(Debug, Parser)]
#[command(name = "armid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (text or json).
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text, env = "ARMID_FORMAT")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Resource ID types that can be validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IdKind {
    IpamPool,
    ResourceGroup,
    Subscription,
}

impl IdKind {
    fn validate(self, input: &str) -> Validation {
        let value = serde_json::Value::String(input.to_string());
        match self {
            IdKind::IpamPool => IpamPoolId::validate(&value, "id"),
            IdKind::ResourceGroup => ResourceGroupId::validate(&value, "id"),
            IdKind::Subscription => SubscriptionId::validate(&value, "id"),
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Identify a resource ID and print its components.
    Parse {
        /// The resource ID.
        id: String,
    },

    /// Rewrite resource IDs with canonical casing.
    Recase {
        /// The resource IDs.
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Check that resource IDs are well formed.
    Validate {
        /// The expected resource ID type.
        #[arg(long, value_enum, default_value_t = IdKind::IpamPool)]
        kind: IdKind,

        /// The resource IDs.
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

#[derive(Debug, Serialize)]
struct ParsedOutput {
    resource: &'static str,
    id: String,
    segments: BTreeMap<&'static str, String>,
}

#[derive(Debug, Serialize)]
struct ValidationOutput<'a> {
    id: &'a str,
    valid: bool,
    errors: Vec<String>,
    warnings: &'a [String],
}

impl Cli {
    /// Run the selected command, writing results to stdout.
    pub fn run(self) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        self.run_to(&mut stdout)
    }

    fn run_to(self, out: &mut impl Write) -> Result<()> {
        match self.command {
            Commands::Parse { id } => {
                let output = parse(&id)?;
                match self.format {
                    OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?,
                    OutputFormat::Text => {
                        writeln!(out, "{}: {}", output.resource, output.id)?;
                        for (name, value) in &output.segments {
                            writeln!(out, "  {name}: {value}")?;
                        }
                    }
                }
            }
            Commands::Recase { ids } => {
                for id in &ids {
                    let recased = recaser::recase(id);
                    debug!(input = %id, output = %recased, "re-cased");
                    writeln!(out, "{recased}")?;
                }
            }
            Commands::Validate { kind, ids } => {
                let mut invalid = 0usize;
                for id in &ids {
                    let validation = kind.validate(id);
                    if !validation.is_valid() {
                        invalid += 1;
                    }
                    let report = ValidationOutput {
                        id,
                        valid: validation.is_valid(),
                        errors: validation.errors.iter().map(ToString::to_string).collect(),
                        warnings: &validation.warnings,
                    };
                    match self.format {
                        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&report)?)?,
                        OutputFormat::Text if report.valid => writeln!(out, "OK: {id}")?,
                        OutputFormat::Text => {
                            for error in &report.errors {
                                writeln!(out, "INVALID: {error}")?;
                            }
                        }
                    }
                }
                info!(checked = ids.len(), invalid, "validation finished");
                if invalid > 0 {
                    bail!("{invalid} of {} resource IDs are invalid", ids.len());
                }
            }
        }
        Ok(())
    }
}

fn parse(input: &str) -> Result<ParsedOutput> {
    let identified = recaser::identify(input)
        .with_context(|| format!("{input:?} does not match any known resource ID type"))?;

    let segments = identified
        .segments
        .iter()
        .filter(|segment| segment.literal().is_none())
        .filter_map(|segment| {
            identified
                .result
                .get(segment.name)
                .map(|value| (segment.name, value.to_string()))
        })
        .collect();

    Ok(ParsedOutput {
        resource: identified.description,
        id: recaser::recase(input),
        segments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPAM_POOL: &str =
        "/subscriptions/s/resourceGroups/rg/providers/Microsoft.Network/networkManagers/nm/ipamPools/p";

    fn register() {
        arm_resourceids::commonids::register();
        arm_network::register_resource_ids();
    }

    fn run(args: &[&str]) -> (Result<()>, String) {
        register();
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        let result = cli.run_to(&mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_text() {
        let (result, out) = run(&["armid", "parse", &IPAM_POOL.to_uppercase()]);
        result.unwrap();
        assert!(out.starts_with("IPAM Pool: /subscriptions/S/resourceGroups/RG/providers/Microsoft.Network"));
        assert!(out.contains("  ipamPoolName: P\n"));
        assert!(out.contains("  subscriptionId: S\n"));
    }

    #[test]
    fn test_parse_json() {
        let (result, out) = run(&["armid", "--format", "json", "parse", IPAM_POOL]);
        result.unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["resource"], "IPAM Pool");
        assert_eq!(value["segments"]["networkManagerName"], "nm");
    }

    #[test]
    fn test_parse_unknown() {
        let (result, _) = run(&["armid", "parse", "/not/a/known/id"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_recase() {
        let (result, out) = run(&[
            "armid",
            "recase",
            "/subscriptions/s/resourcegroups/rg/providers/microsoft.network/networkmanagers/nm/ipampools/p",
            "/SUBSCRIPTIONS/s",
        ]);
        result.unwrap();
        assert_eq!(out, format!("{IPAM_POOL}\n/subscriptions/s\n"));
    }

    #[test]
    fn test_validate_ok() {
        let (result, out) = run(&["armid", "validate", IPAM_POOL]);
        result.unwrap();
        assert_eq!(out, format!("OK: {IPAM_POOL}\n"));
    }

    #[test]
    fn test_validate_wrong_kind() {
        let (result, out) = run(&["armid", "validate", "--kind", "resource-group", IPAM_POOL]);
        assert!(result.is_err());
        assert!(out.starts_with("INVALID: "));
    }

    #[test]
    fn test_validate_json() {
        let (result, out) = run(&[
            "armid",
            "--format",
            "json",
            "validate",
            "--kind",
            "subscription",
            "/subscriptions/s",
        ]);
        result.unwrap();
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value["valid"], true);
    }

    #[test]
    fn test_recase_requires_ids() {
        assert!(Cli::try_parse_from(["armid", "recase"]).is_err());
    }
}
