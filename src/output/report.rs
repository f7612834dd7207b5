//! Terminal report for a [`SubnetInfo`].

use crate::models::SubnetInfo;
use colored::Colorize;
use std::fmt::Write;

/// Format a `# Title` section heading, bold cyan when `color` is set.
pub fn heading(title: &str, color: bool) -> String {
    let line = format!("# {title}");
    if color {
        line.bold().cyan().to_string()
    } else {
        line
    }
}

/// Render the multi-section report printed on success.
///
/// Sections in order: overview, address details, masks, classification.
/// The result starts with a blank line and ends with a newline.
pub fn subnet_report(info: &SubnetInfo, color: bool) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    write_report(&mut out, info, color)?;
    Ok(out)
}

fn write_report(out: &mut String, info: &SubnetInfo, color: bool) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "{}", heading("Overview (IP/CIDR)", color))?;
    writeln!(out, "IP address: {}/{}", info.ip, info.cidr)?;

    writeln!(out)?;
    writeln!(out, "{}", heading("Address Details", color))?;
    writeln!(out, "Address range: {}", info.address_range)?;
    writeln!(out, "Number of hosts: {}", info.num_hosts)?;
    writeln!(out)?;
    writeln!(out, "Network address: {}", info.network_addr)?;
    writeln!(out, "Broadcast address: {}", info.broadcast_addr)?;
    writeln!(out)?;
    writeln!(out, "Usable range: {}", info.usable_range)?;
    writeln!(out, "Usable hosts: {}", info.usable_hosts)?;

    writeln!(out)?;
    writeln!(out, "{}", heading("Mask information", color))?;
    writeln!(out, "IP subnet mask: {}", info.subnet_mask)?;
    writeln!(out, "IP subnet mask (binary): {}", info.subnet_mask_bin)?;
    writeln!(out, "Wildcard mask: {}", info.wildcard_mask)?;
    writeln!(out, "Wildcard mask (binary): {}", info.wildcard_mask_bin)?;

    writeln!(out)?;
    writeln!(out, "{}", heading("Classification", color))?;
    let ip_type = if color && !info.is_private {
        info.ip_type().yellow().to_string()
    } else {
        info.ip_type().to_string()
    };
    writeln!(out, "IP type: {ip_type}")?;
    writeln!(out, "IP class: {}", info.ip_class)?;
    Ok(())
}
