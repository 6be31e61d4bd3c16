use std::{fs::File, path::PathBuf};

use anyhow::Context;
use lsst_config::{write_csv, write_pickle, Lsst};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "lsst-config",
    about = "LSST instrument and observational settings"
)]
struct Opt {
    /// Photometric band: u, g, r, i, z or y [default: g]
    #[structopt(short, long, conflicts_with = "all")]
    band: Option<String>,
    /// PSF type
    #[structopt(long = "psf", default_value = "GAUSSIAN")]
    psf_type: String,
    /// Number of co-added survey years [1-10]
    #[structopt(short, long, default_value = "10")]
    coadd_years: i64,
    /// Use all the bands
    #[structopt(long)]
    all: bool,
    /// Write the settings to a CSV file
    #[structopt(long)]
    csv: Option<PathBuf>,
    /// Write the settings to a Python pickle file, keyed by band with `--all`
    #[structopt(long)]
    pickle: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let configs = if opt.all {
        Lsst::all_bands(&opt.psf_type, opt.coadd_years)?
    } else {
        let band = opt.band.as_deref().unwrap_or("g");
        vec![Lsst::new(band, &opt.psf_type, opt.coadd_years)?]
    };

    if let Some(path) = opt.pickle.as_ref() {
        let mut file =
            File::create(path).with_context(|| format!("failed to create {:?}", path))?;
        if opt.all {
            write_pickle(&configs, &mut file)?;
        } else {
            configs[0].to_pickle(&mut file)?;
        }
        log::info!("{} band(s) written to {:?}", configs.len(), path);
    }
    if let Some(path) = opt.csv.as_ref() {
        let file = File::create(path).with_context(|| format!("failed to create {:?}", path))?;
        write_csv(&configs, file)?;
        log::info!("{} band(s) written to {:?}", configs.len(), path);
    }
    if opt.pickle.is_none() && opt.csv.is_none() {
        for config in &configs {
            println!("LSST {} band ({} years):", config.band(), config.coadd_years());
            for (key, value) in config.kwargs_single_band() {
                println!(" {:<21}: {}", key, value);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_conflicts_with_band() {
        assert!(Opt::from_iter_safe(["lsst-config", "--all", "--band", "x"]).is_err());
        let opt = Opt::from_iter_safe(["lsst-config", "--all", "-c", "3"]).unwrap();
        assert!(opt.all && opt.band.is_none());
    }

    #[test]
    fn all_checks_psf() {
        let opt = Opt::from_iter_safe(["lsst-config", "--all", "--psf", "MOFFAT"]).unwrap();
        assert!(Lsst::all_bands(&opt.psf_type, opt.coadd_years).is_err());
    }
}
