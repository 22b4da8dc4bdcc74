//! Rule-sets command: list built-in rule sets with their sizes.

use anyhow::Result;
use slugify_core::rules::{available_rule_sets, rule_set_len};
use std::io::{self, Write};

pub fn run_rule_sets() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_rule_sets(&mut out)?;
    Ok(())
}

fn write_rule_sets<W: Write>(out: &mut W) -> io::Result<()> {
    for name in available_rule_sets() {
        let len = rule_set_len(name).unwrap_or(0);
        writeln!(out, "{:<10} {} rules", name, len)?;
    }
    Ok(())
}
