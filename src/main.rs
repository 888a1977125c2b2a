use std::io::{self, Write};

use anyhow::{bail, Context};
use clap::{ArgEnum, Parser};
use colored::Colorize;

use twoscomp::demo::{self, SAMPLE_PAIRS};
use twoscomp::ops::{self, Catalogue};
use twoscomp::profiler::{profile, profile_log};

#[derive(Parser, Debug)]
#[clap(version, about = "Signed vs unsigned truth tables for fixed-width integer operations")]
struct Args {
    /// Operand width
    #[clap(long, arg_enum, default_value = "32")]
    width: Width,

    /// Which 32-bit operator set to print; only `full` is accepted with `--width 64`
    #[clap(long, arg_enum, default_value = "full")]
    catalogue: CatalogueArg,

    /// Only print this operation
    #[clap(long)]
    op: Option<String>,

    /// Cross-check the 32-bit operations against native x86-64 code
    #[clap(long)]
    native: bool,

    /// Print the native code of the selected 32-bit operations
    #[clap(long)]
    disasm: bool,

    /// Print time spent per phase
    #[clap(long)]
    profile: bool,

    #[clap(long)]
    no_color: bool,
}

#[derive(ArgEnum, Clone, Copy, Debug)]
enum Width {
    #[clap(name = "32")]
    W32,
    #[clap(name = "64")]
    W64,
}

#[derive(ArgEnum, Clone, Copy, Debug)]
enum CatalogueArg {
    Full,
    Math,
}

impl From<CatalogueArg> for Catalogue {
    fn from(arg: CatalogueArg) -> Self {
        match arg {
            CatalogueArg::Full => Catalogue::Full,
            CatalogueArg::Math => Catalogue::Math,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::debug!("{:?}", args);

    if args.no_color {
        colored::control::set_override(false);
    }

    check_selection(&args)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let only = args.op.as_deref();

    match args.width {
        Width::W32 => {
            let catalogue = args.catalogue.into();
            profile("render", || demo::render_table(&mut out, catalogue, only))?;
        }
        Width::W64 => {
            profile("render", || demo::render_table64(&mut out, only))?;
        }
    }

    if args.native || args.disasm {
        native(&args, &mut out)?;
    }

    out.flush()?;
    if args.profile {
        profile_log(&mut io::stderr().lock())?;
    }
    Ok(())
}

/// Rejects flag combinations that would print nothing or ignore a flag.
fn check_selection(args: &Args) -> anyhow::Result<()> {
    match args.width {
        Width::W32 => {
            let catalogue = args.catalogue.into();
            if let Some(name) = args.op.as_deref() {
                if ops::lookup32(catalogue, name).is_none() {
                    bail!("unknown operation `{}` in the {:?} catalogue", name, catalogue);
                }
            }
        }
        Width::W64 => {
            if let CatalogueArg::Math = args.catalogue {
                bail!("the math catalogue only exists at 32 bits");
            }
            if let Some(name) = args.op.as_deref() {
                if ops::lookup64(name).is_none() {
                    bail!("unknown 64-bit operation `{}`", name);
                }
            }
        }
    }
    Ok(())
}

#[cfg(target_arch = "x86_64")]
fn native(args: &Args, out: &mut impl Write) -> anyhow::Result<()> {
    use twoscomp::disassemble::disassemble;
    use twoscomp::native::{cross_check, NativeOps};

    let native = NativeOps::compile().context("building native operations")?;
    let catalogue: Catalogue = args.catalogue.into();
    let records: Vec<_> = catalogue
        .ops()
        .iter()
        .filter(|r| args.op.as_deref().map_or(true, |only| only == r.name))
        .copied()
        .collect();
    if records.is_empty() {
        bail!("no 32-bit operation in the {:?} catalogue to run natively", catalogue);
    }

    if args.disasm {
        for record in &records {
            if let Some(code) = native.code(catalogue.canonical_name(record.name)) {
                writeln!(out, "{}", record.name.bold())?;
                write!(out, "{}", disassemble(code))?;
            }
        }
        writeln!(out)?;
    }

    if args.native {
        let mut samples: Vec<(u32, u32)> = SAMPLE_PAIRS.iter().map(|&(a, b)| (a as u32, b as u32)).collect();
        samples.extend((0..64).map(|n| (-5i32 as u32, n)));
        let mismatches = profile("cross-check", || cross_check(&native, catalogue, &records, &samples));
        for m in &mismatches {
            writeln!(
                out,
                "{} {}({:#x}, {:#x}): library {:?}, native {:?}",
                "mismatch".red(),
                m.name,
                m.a,
                m.b,
                m.library,
                m.native
            )?;
        }
        let summary = format!(
            "native cross-check: {} operations x {} pairs, {} mismatches",
            records.len(),
            samples.len(),
            mismatches.len()
        );
        if mismatches.is_empty() {
            writeln!(out, "{}", summary.green())?;
        } else {
            writeln!(out, "{}", summary.red())?;
            bail!("library and native results disagree");
        }
    }
    Ok(())
}

#[cfg(not(target_arch = "x86_64"))]
fn native(_args: &Args, _out: &mut impl Write) -> anyhow::Result<()> {
    bail!("native code is only available on x86-64");
}
